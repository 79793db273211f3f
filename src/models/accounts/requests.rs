use super::entities::AccountRole;
use serde::Deserialize;
use ts_rs::TS;

// 账号创建请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/account.ts")]
pub struct CreateAccountRequest {
    pub username: String,
    pub password: String,
    pub role: AccountRole,
}

// 账号更新请求，省略的字段保持原值
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/account.ts")]
pub struct UpdateAccountRequest {
    pub username: Option<String>,
    pub password: Option<String>,
    pub role: Option<AccountRole>,
}

// 账号列表查询参数
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/account.ts")]
pub struct AccountListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub role: Option<AccountRole>,
    pub search: Option<String>,
}
