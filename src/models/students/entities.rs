use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 学生实体，student_number 为全国学号（全局唯一）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct Student {
    pub id: i64,
    pub student_number: String,
    pub name: String,
    pub class_name: String,
    pub guardian_contact: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
