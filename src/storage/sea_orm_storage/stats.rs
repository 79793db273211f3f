//! 总览统计查询
//!
//! 每次调用直接查库，不做缓存，始终反映当前存储状态。

use super::SeaOrmStorage;
use crate::errors::Result;
use crate::models::complaints::entities::ComplaintStatus;
use crate::models::stats::responses::{ComplaintStatusCounts, StatsOverviewResponse};

impl SeaOrmStorage {
    /// 总览统计
    pub async fn get_stats_overview_impl(&self) -> Result<StatsOverviewResponse> {
        let total_accounts = self.count_accounts_impl().await?;
        let total_staff = self.count_staff_impl().await?;
        let total_students = self.count_students_impl().await?;
        let total_complaints = self.count_complaints_impl().await?;

        let pending = self
            .count_complaints_by_status_impl(ComplaintStatus::Pending)
            .await?;
        let approved = self
            .count_complaints_by_status_impl(ComplaintStatus::Approved)
            .await?;
        let rejected = self
            .count_complaints_by_status_impl(ComplaintStatus::Rejected)
            .await?;
        let resolved = self
            .count_complaints_by_status_impl(ComplaintStatus::Resolved)
            .await?;

        Ok(StatsOverviewResponse {
            total_accounts: total_accounts as i64,
            total_staff: total_staff as i64,
            total_students: total_students as i64,
            total_complaints: total_complaints as i64,
            complaints_by_status: ComplaintStatusCounts {
                pending: pending as i64,
                approved: approved as i64,
                rejected: rejected as i64,
                resolved: resolved as i64,
            },
        })
    }
}
