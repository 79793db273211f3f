//! 处理记录实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "resolutions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub processed_at: i64,
    pub admin_note: String,
    pub template_id: i64,
    pub account_id: i64,
    #[sea_orm(unique)]
    pub complaint_id: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::letter_templates::Entity",
        from = "Column::TemplateId",
        to = "super::letter_templates::Column::Id"
    )]
    LetterTemplates,
    #[sea_orm(
        belongs_to = "super::accounts::Entity",
        from = "Column::AccountId",
        to = "super::accounts::Column::Id"
    )]
    Accounts,
    #[sea_orm(
        belongs_to = "super::complaints::Entity",
        from = "Column::ComplaintId",
        to = "super::complaints::Column::Id"
    )]
    Complaints,
}

impl Related<super::letter_templates::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LetterTemplates.def()
    }
}

impl Related<super::accounts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Accounts.def()
    }
}

impl Related<super::complaints::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Complaints.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_resolution(self) -> crate::models::resolutions::entities::Resolution {
        use crate::models::resolutions::entities::Resolution;
        use chrono::{DateTime, Utc};

        Resolution {
            id: self.id,
            processed_at: DateTime::<Utc>::from_timestamp(self.processed_at, 0).unwrap_or_default(),
            admin_note: self.admin_note,
            template_id: self.template_id,
            account_id: self.account_id,
            complaint_id: self.complaint_id,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
