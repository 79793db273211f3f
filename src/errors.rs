//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_complaintsystem_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum ComplaintSystemError {
            $($variant(String),)*
        }

        impl ComplaintSystemError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(ComplaintSystemError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(ComplaintSystemError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(ComplaintSystemError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl ComplaintSystemError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        ComplaintSystemError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_complaintsystem_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    Unavailable("E003", "Storage Unavailable"),
    Validation("E004", "Validation Error"),
    NotFound("E005", "Resource Not Found"),
    Conflict("E006", "Unique Constraint Conflict"),
    Constrained("E007", "Deletion Constrained"),
    Serialization("E008", "Serialization Error"),
    DateParse("E009", "Date Parse Error"),
    Authentication("E010", "Authentication Error"),
}

impl ComplaintSystemError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for ComplaintSystemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for ComplaintSystemError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for ComplaintSystemError {
    fn from(err: sea_orm::DbErr) -> Self {
        ComplaintSystemError::Unavailable(err.to_string())
    }
}

impl From<std::io::Error> for ComplaintSystemError {
    fn from(err: std::io::Error) -> Self {
        ComplaintSystemError::Unavailable(err.to_string())
    }
}

impl From<serde_json::Error> for ComplaintSystemError {
    fn from(err: serde_json::Error) -> Self {
        ComplaintSystemError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for ComplaintSystemError {
    fn from(err: chrono::ParseError) -> Self {
        ComplaintSystemError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ComplaintSystemError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(ComplaintSystemError::database_config("test").code(), "E001");
        assert_eq!(ComplaintSystemError::validation("test").code(), "E004");
        assert_eq!(ComplaintSystemError::not_found("test").code(), "E005");
        assert_eq!(ComplaintSystemError::conflict("test").code(), "E006");
        assert_eq!(ComplaintSystemError::constrained("test").code(), "E007");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            ComplaintSystemError::conflict("test").error_type(),
            "Unique Constraint Conflict"
        );
        assert_eq!(
            ComplaintSystemError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = ComplaintSystemError::validation("Invalid input");
        assert_eq!(err.message(), "Invalid input");
    }

    #[test]
    fn test_format_simple() {
        let err = ComplaintSystemError::constrained("Staff still referenced");
        let formatted = err.format_simple();
        assert!(formatted.contains("Deletion Constrained"));
        assert!(formatted.contains("Staff still referenced"));
    }
}
