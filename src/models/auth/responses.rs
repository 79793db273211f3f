use crate::models::accounts::entities::Account;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 登录响应
//
// 只做口令核验，不签发任何令牌；访问控制由外层系统负责。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct LoginResponse {
    pub account: Account,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
