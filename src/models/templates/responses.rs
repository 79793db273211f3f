use super::entities::LetterTemplate;
use crate::models::PaginationInfo;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/template.ts")]
pub struct TemplateResponse {
    pub template: LetterTemplate,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/template.ts")]
pub struct TemplateListResponse {
    pub items: Vec<LetterTemplate>,
    pub pagination: PaginationInfo,
}
