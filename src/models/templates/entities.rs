use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 信函模板实体
//
// body 中保留 [NAMA_SISWA] 之类的占位符原文，本系统只记录
// 处理记录引用了哪个模板，不做占位符替换。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/template.ts")]
pub struct LetterTemplate {
    pub id: i64,
    pub name: String,
    pub body: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
