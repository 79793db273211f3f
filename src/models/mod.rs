//! 数据模型定义
//!
//! 业务实体、请求/响应 DTO 与统一响应包装，与 entity 模块中的数据库实体分离。

pub mod accounts;
pub mod auth;
pub mod common;
pub mod complaints;
pub mod resolutions;
pub mod staff;
pub mod stats;
pub mod students;
pub mod templates;

pub use common::pagination::PaginationInfo;
pub use common::response::ApiResponse;

// 程序启动时间
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

// 统一业务错误码，随 ApiResponse 返回给前端
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Success = 0,

    // 通用错误
    InvalidInput = 40000,
    Constrained = 40001,
    AuthFailed = 40100,
    NotFound = 40400,
    Conflict = 40900,
    InternalServerError = 50000,
    StoreUnavailable = 50300,

    // 账号
    AccountNotFound = 41001,
    AccountAlreadyExists = 41002,
    AccountUsernameInvalid = 41003,
    AccountPasswordWeak = 41004,
    AccountCreationFailed = 41005,
    AccountUpdateFailed = 41006,
    AccountDeleteFailed = 41007,
    AccountInUse = 41008,

    // 教职工
    StaffNotFound = 42001,
    StaffNumberExists = 42002,
    StaffCreationFailed = 42003,
    StaffUpdateFailed = 42004,
    StaffDeleteFailed = 42005,
    StaffInUse = 42006,

    // 学生
    StudentNotFound = 43001,
    StudentNumberExists = 43002,
    StudentCreationFailed = 43003,
    StudentUpdateFailed = 43004,
    StudentDeleteFailed = 43005,
    StudentInUse = 43006,

    // 信函模板
    TemplateNotFound = 44001,
    TemplateCreationFailed = 44002,
    TemplateUpdateFailed = 44003,
    TemplateDeleteFailed = 44004,
    TemplateInUse = 44005,

    // 投诉
    ComplaintNotFound = 45001,
    ComplaintCreationFailed = 45002,
    ComplaintUpdateFailed = 45003,
    ComplaintDeleteFailed = 45004,
    RejectionReasonRequired = 45005,
    ComplaintAlreadyResolved = 45006,
    ComplaintResolveFailed = 45007,

    // 统计
    StatsQueryFailed = 46001,
}
