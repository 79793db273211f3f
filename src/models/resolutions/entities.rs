use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 处理记录实体，一条投诉至多一条
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/resolution.ts")]
pub struct Resolution {
    pub id: i64,
    pub processed_at: chrono::DateTime<chrono::Utc>,
    pub admin_note: String,
    pub template_id: i64,
    pub account_id: i64,
    pub complaint_id: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
