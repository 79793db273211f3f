use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 教职工实体，staff_number 为工号（全局唯一）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/staff.ts")]
pub struct Staff {
    pub id: i64,
    pub staff_number: String,
    pub name: String,
    pub phone: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
