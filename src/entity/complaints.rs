//! 投诉实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "complaints")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub filed_at: i64,
    pub description: String,
    pub status: String,
    pub rejection_reason: Option<String>,
    pub staff_id: i64,
    pub student_id: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::staff::Entity",
        from = "Column::StaffId",
        to = "super::staff::Column::Id"
    )]
    Staff,
    #[sea_orm(
        belongs_to = "super::students::Entity",
        from = "Column::StudentId",
        to = "super::students::Column::Id"
    )]
    Students,
    #[sea_orm(has_one = "super::resolutions::Entity")]
    Resolutions,
}

impl Related<super::staff::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Staff.def()
    }
}

impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Students.def()
    }
}

impl Related<super::resolutions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Resolutions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_complaint(self) -> crate::models::complaints::entities::Complaint {
        use crate::models::complaints::entities::{Complaint, ComplaintStatus};
        use chrono::{DateTime, Utc};

        Complaint {
            id: self.id,
            filed_at: DateTime::<Utc>::from_timestamp(self.filed_at, 0).unwrap_or_default(),
            description: self.description,
            status: self
                .status
                .parse::<ComplaintStatus>()
                .unwrap_or(ComplaintStatus::Pending),
            rejection_reason: self.rejection_reason,
            staff_id: self.staff_id,
            student_id: self.student_id,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
