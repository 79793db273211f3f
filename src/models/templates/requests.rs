use serde::Deserialize;
use ts_rs::TS;

// 模板创建请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/template.ts")]
pub struct CreateTemplateRequest {
    pub name: String,
    pub body: String,
}

// 模板更新请求，省略的字段保持原值
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/template.ts")]
pub struct UpdateTemplateRequest {
    pub name: Option<String>,
    pub body: Option<String>,
}

// 模板列表查询参数
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/template.ts")]
pub struct TemplateListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub search: Option<String>,
}
