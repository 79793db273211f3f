use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 按状态拆分的投诉数量
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/stats.ts")]
pub struct ComplaintStatusCounts {
    pub pending: i64,
    pub approved: i64,
    pub rejected: i64,
    pub resolved: i64,
}

// 仪表盘总览统计，每次请求实时查询，不做缓存
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/stats.ts")]
pub struct StatsOverviewResponse {
    pub total_accounts: i64,
    pub total_staff: i64,
    pub total_students: i64,
    pub total_complaints: i64,
    pub complaints_by_status: ComplaintStatusCounts,
}
