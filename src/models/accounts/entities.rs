use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 账号角色
#[derive(Debug, Clone, Copy, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/account.ts")]
pub enum AccountRole {
    Admin, // 管理员
    Staff, // 普通工作人员
}

impl AccountRole {
    pub const ADMIN: &'static str = "admin";
    pub const STAFF: &'static str = "staff";
}

impl<'de> Deserialize<'de> for AccountRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            AccountRole::ADMIN => Ok(AccountRole::Admin),
            AccountRole::STAFF => Ok(AccountRole::Staff),
            _ => Err(serde::de::Error::custom(format!(
                "无效的账号角色: '{s}'. 支持的角色: admin, staff"
            ))),
        }
    }
}

impl std::fmt::Display for AccountRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccountRole::Admin => write!(f, "{}", AccountRole::ADMIN),
            AccountRole::Staff => write!(f, "{}", AccountRole::STAFF),
        }
    }
}

impl std::str::FromStr for AccountRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(AccountRole::Admin),
            "staff" => Ok(AccountRole::Staff),
            _ => Err(format!("Invalid account role: {s}")),
        }
    }
}

// 账号实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/account.ts")]
pub struct Account {
    pub id: i64,
    pub username: String,
    #[serde(skip_serializing, default)] // 不序列化到JSON响应中
    #[ts(skip)]
    pub password_hash: String,
    pub role: AccountRole,
    pub last_login: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_role_roundtrip() {
        assert_eq!(AccountRole::from_str("admin").unwrap(), AccountRole::Admin);
        assert_eq!(AccountRole::Admin.to_string(), "admin");
        assert_eq!(AccountRole::Staff.to_string(), "staff");
        assert!(AccountRole::from_str("petugas").is_err());
    }
}
