use std::sync::Arc;

use crate::models::{
    accounts::{
        entities::Account,
        requests::{AccountListQuery, CreateAccountRequest, UpdateAccountRequest},
        responses::AccountListResponse,
    },
    complaints::{
        entities::Complaint,
        requests::{
            ComplaintListQuery, FileComplaintRequest, ReassignComplaintRequest,
            ResolveComplaintRequest, SetComplaintStatusRequest, UpdateComplaintRequest,
        },
        responses::{ComplaintDetailResponse, ComplaintListResponse},
    },
    resolutions::entities::Resolution,
    staff::{
        entities::Staff,
        requests::{CreateStaffRequest, StaffListQuery, UpdateStaffRequest},
        responses::StaffListResponse,
    },
    stats::responses::StatsOverviewResponse,
    students::{
        entities::Student,
        requests::{CreateStudentRequest, StudentListQuery, UpdateStudentRequest},
        responses::StudentListResponse,
    },
    templates::{
        entities::LetterTemplate,
        requests::{CreateTemplateRequest, TemplateListQuery, UpdateTemplateRequest},
        responses::TemplateListResponse,
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 账号管理方法
    // 创建账号，用户名冲突返回 Conflict
    async fn create_account(&self, req: CreateAccountRequest) -> Result<Account>;
    // 通过ID获取账号信息
    async fn get_account_by_id(&self, id: i64) -> Result<Option<Account>>;
    // 通过用户名获取账号信息
    async fn get_account_by_username(&self, username: &str) -> Result<Option<Account>>;
    // 列出账号
    async fn list_accounts_with_pagination(
        &self,
        query: AccountListQuery,
    ) -> Result<AccountListResponse>;
    // 更新账号信息
    async fn update_account(
        &self,
        id: i64,
        update: UpdateAccountRequest,
    ) -> Result<Option<Account>>;
    // 删除账号，仍被处理记录引用时返回 Constrained
    async fn delete_account(&self, id: i64) -> Result<bool>;
    // 更新账号最后登录时间
    async fn update_last_login(&self, id: i64) -> Result<bool>;

    /// 教职工管理方法
    // 创建教职工，工号冲突返回 Conflict
    async fn create_staff(&self, req: CreateStaffRequest) -> Result<Staff>;
    // 通过ID获取教职工信息
    async fn get_staff_by_id(&self, id: i64) -> Result<Option<Staff>>;
    // 通过工号获取教职工信息
    async fn get_staff_by_number(&self, staff_number: &str) -> Result<Option<Staff>>;
    // 列出教职工
    async fn list_staff_with_pagination(&self, query: StaffListQuery)
    -> Result<StaffListResponse>;
    // 更新教职工信息
    async fn update_staff(&self, id: i64, update: UpdateStaffRequest) -> Result<Option<Staff>>;
    // 删除教职工，仍有投诉引用时返回 Constrained
    async fn delete_staff(&self, id: i64) -> Result<bool>;

    /// 学生管理方法
    // 创建学生，学号冲突返回 Conflict
    async fn create_student(&self, req: CreateStudentRequest) -> Result<Student>;
    // 通过ID获取学生信息
    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>>;
    // 通过学号获取学生信息
    async fn get_student_by_number(&self, student_number: &str) -> Result<Option<Student>>;
    // 列出学生
    async fn list_students_with_pagination(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse>;
    // 更新学生信息
    async fn update_student(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>>;
    // 删除学生，仍有投诉引用时返回 Constrained
    async fn delete_student(&self, id: i64) -> Result<bool>;

    /// 信函模板管理方法
    // 创建模板
    async fn create_template(&self, req: CreateTemplateRequest) -> Result<LetterTemplate>;
    // 通过ID获取模板
    async fn get_template_by_id(&self, id: i64) -> Result<Option<LetterTemplate>>;
    // 列出模板
    async fn list_templates_with_pagination(
        &self,
        query: TemplateListQuery,
    ) -> Result<TemplateListResponse>;
    // 更新模板
    async fn update_template(
        &self,
        id: i64,
        update: UpdateTemplateRequest,
    ) -> Result<Option<LetterTemplate>>;
    // 删除模板，仍被处理记录引用时返回 Constrained
    async fn delete_template(&self, id: i64) -> Result<bool>;

    /// 投诉生命周期方法
    // 提交投诉：外键必须存在，描述非空；新投诉始终为 pending
    async fn file_complaint(&self, req: FileComplaintRequest) -> Result<Complaint>;
    // 通过ID获取投诉
    async fn get_complaint_by_id(&self, id: i64) -> Result<Option<Complaint>>;
    // 获取投诉详情（含教职工、学生与处理记录）
    async fn get_complaint_detail(&self, id: i64) -> Result<Option<ComplaintDetailResponse>>;
    // 列出投诉，可按状态/教职工/学生过滤
    async fn list_complaints_with_pagination(
        &self,
        query: ComplaintListQuery,
    ) -> Result<ComplaintListResponse>;
    // 修改投诉描述
    async fn update_complaint(
        &self,
        id: i64,
        update: UpdateComplaintRequest,
    ) -> Result<Option<Complaint>>;
    // 变更投诉状态，状态之间不设迁移限制
    async fn set_complaint_status(
        &self,
        id: i64,
        update: SetComplaintStatusRequest,
    ) -> Result<Complaint>;
    // 改派投诉的教职工/学生
    async fn reassign_complaint(
        &self,
        id: i64,
        update: ReassignComplaintRequest,
    ) -> Result<Complaint>;
    // 办结投诉：创建处理记录并置状态为 resolved；重复办结返回 Conflict
    async fn resolve_complaint(&self, id: i64, req: ResolveComplaintRequest)
    -> Result<Resolution>;
    // 删除投诉，先删除其处理记录（同一事务内）
    async fn delete_complaint(&self, id: i64) -> Result<bool>;
    // 获取某条投诉的处理记录
    async fn get_resolution_by_complaint_id(&self, complaint_id: i64)
    -> Result<Option<Resolution>>;

    /// 统计方法
    // 总览统计，实时查询
    async fn get_stats_overview(&self) -> Result<StatsOverviewResponse>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
