use super::entities::ComplaintStatus;
use serde::Deserialize;
use ts_rs::TS;

// 提交投诉请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/complaint.ts")]
pub struct FileComplaintRequest {
    pub staff_id: i64,
    pub student_id: i64,
    pub description: String,
}

// 投诉内容修改请求（管理员更正描述）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/complaint.ts")]
pub struct UpdateComplaintRequest {
    pub description: Option<String>,
}

// 状态变更请求；改为 Rejected 时必须携带驳回原因
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/complaint.ts")]
pub struct SetComplaintStatusRequest {
    pub status: ComplaintStatus,
    pub rejection_reason: Option<String>,
}

// 改派请求，只校验并应用提供的外键
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/complaint.ts")]
pub struct ReassignComplaintRequest {
    pub staff_id: Option<i64>,
    pub student_id: Option<i64>,
}

// 办结请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/complaint.ts")]
pub struct ResolveComplaintRequest {
    pub template_id: i64,
    pub account_id: i64,
    pub admin_note: String,
}

// 投诉列表查询参数
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/complaint.ts")]
pub struct ComplaintListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub status: Option<ComplaintStatus>,
    pub staff_id: Option<i64>,
    pub student_id: Option<i64>,
    pub search: Option<String>,
}
