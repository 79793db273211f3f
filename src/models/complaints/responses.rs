use super::entities::Complaint;
use crate::models::PaginationInfo;
use crate::models::resolutions::entities::Resolution;
use crate::models::staff::entities::Staff;
use crate::models::students::entities::Student;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/complaint.ts")]
pub struct ComplaintResponse {
    pub complaint: Complaint,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/complaint.ts")]
pub struct ComplaintListResponse {
    pub items: Vec<Complaint>,
    pub pagination: PaginationInfo,
}

// 投诉详情：投诉本体 + 关联的教职工、学生与处理记录
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/complaint.ts")]
pub struct ComplaintDetailResponse {
    pub complaint: Complaint,
    pub staff: Staff,
    pub student: Student,
    pub resolution: Option<Resolution>,
}
