use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 投诉状态
//
// 状态之间不做迁移限制：管理员可以从任意状态改到任意状态，
// 用于纠正误操作。rejection_reason 仅在 Rejected 状态下存在。
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/complaint.ts")]
pub enum ComplaintStatus {
    Pending,  // 待处理
    Approved, // 已批准
    Rejected, // 已驳回
    Resolved, // 已办结
}

impl ComplaintStatus {
    pub const PENDING: &'static str = "pending";
    pub const APPROVED: &'static str = "approved";
    pub const REJECTED: &'static str = "rejected";
    pub const RESOLVED: &'static str = "resolved";

    pub fn all() -> &'static [ComplaintStatus] {
        &[
            ComplaintStatus::Pending,
            ComplaintStatus::Approved,
            ComplaintStatus::Rejected,
            ComplaintStatus::Resolved,
        ]
    }
}

impl<'de> Deserialize<'de> for ComplaintStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            ComplaintStatus::PENDING => Ok(ComplaintStatus::Pending),
            ComplaintStatus::APPROVED => Ok(ComplaintStatus::Approved),
            ComplaintStatus::REJECTED => Ok(ComplaintStatus::Rejected),
            ComplaintStatus::RESOLVED => Ok(ComplaintStatus::Resolved),
            _ => Err(serde::de::Error::custom(format!(
                "无效的投诉状态: '{s}'. 支持的状态: pending, approved, rejected, resolved"
            ))),
        }
    }
}

impl std::fmt::Display for ComplaintStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComplaintStatus::Pending => write!(f, "{}", ComplaintStatus::PENDING),
            ComplaintStatus::Approved => write!(f, "{}", ComplaintStatus::APPROVED),
            ComplaintStatus::Rejected => write!(f, "{}", ComplaintStatus::REJECTED),
            ComplaintStatus::Resolved => write!(f, "{}", ComplaintStatus::RESOLVED),
        }
    }
}

impl std::str::FromStr for ComplaintStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ComplaintStatus::Pending),
            "approved" => Ok(ComplaintStatus::Approved),
            "rejected" => Ok(ComplaintStatus::Rejected),
            "resolved" => Ok(ComplaintStatus::Resolved),
            _ => Err(format!("Invalid complaint status: {s}")),
        }
    }
}

// 投诉实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/complaint.ts")]
pub struct Complaint {
    pub id: i64,
    pub filed_at: chrono::DateTime<chrono::Utc>,
    pub description: String,
    pub status: ComplaintStatus,
    pub rejection_reason: Option<String>,
    pub staff_id: i64,
    pub student_id: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_status_roundtrip() {
        for status in ComplaintStatus::all() {
            assert_eq!(
                ComplaintStatus::from_str(&status.to_string()).unwrap(),
                *status
            );
        }
    }

    #[test]
    fn test_status_rejects_unknown() {
        assert!(ComplaintStatus::from_str("menunggu").is_err());
        assert!(ComplaintStatus::from_str("").is_err());
    }
}
