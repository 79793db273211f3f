//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。
//! 所有引用完整性规则（唯一约束、外键存在性、依赖计数删除守卫、
//! 一条投诉至多一条处理记录）都在这一层落实。

mod accounts;
mod complaints;
mod letter_templates;
mod staff;
mod stats;
mod students;

#[cfg(test)]
mod tests;

use crate::config::AppConfig;
use crate::errors::{ComplaintSystemError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| ComplaintSystemError::unavailable(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| ComplaintSystemError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .foreign_keys(true)
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| {
                ComplaintSystemError::database_connection(format!("SQLite 连接失败: {e}"))
            })?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| ComplaintSystemError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(ComplaintSystemError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

/// 写入失败时区分唯一约束冲突与存储故障
///
/// 并发写入同一唯一键时，落败一方由数据库约束兜底，这里把
/// 各数据库方言的唯一冲突错误统一映射为 Conflict。
pub(crate) fn map_write_err(context: &str, e: DbErr) -> ComplaintSystemError {
    let msg = e.to_string();
    if msg.contains("UNIQUE constraint failed")
        || msg.contains("Duplicate entry")
        || msg.contains("duplicate key value")
    {
        ComplaintSystemError::conflict(format!("{context}: {msg}"))
    } else {
        ComplaintSystemError::unavailable(format!("{context}: {msg}"))
    }
}

// Storage trait 实现
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
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 账号模块
    async fn create_account(&self, req: CreateAccountRequest) -> Result<Account> {
        self.create_account_impl(req).await
    }

    async fn get_account_by_id(&self, id: i64) -> Result<Option<Account>> {
        self.get_account_by_id_impl(id).await
    }

    async fn get_account_by_username(&self, username: &str) -> Result<Option<Account>> {
        self.get_account_by_username_impl(username).await
    }

    async fn list_accounts_with_pagination(
        &self,
        query: AccountListQuery,
    ) -> Result<AccountListResponse> {
        self.list_accounts_with_pagination_impl(query).await
    }

    async fn update_account(
        &self,
        id: i64,
        update: UpdateAccountRequest,
    ) -> Result<Option<Account>> {
        self.update_account_impl(id, update).await
    }

    async fn delete_account(&self, id: i64) -> Result<bool> {
        self.delete_account_impl(id).await
    }

    async fn update_last_login(&self, id: i64) -> Result<bool> {
        self.update_last_login_impl(id).await
    }

    // 教职工模块
    async fn create_staff(&self, req: CreateStaffRequest) -> Result<Staff> {
        self.create_staff_impl(req).await
    }

    async fn get_staff_by_id(&self, id: i64) -> Result<Option<Staff>> {
        self.get_staff_by_id_impl(id).await
    }

    async fn get_staff_by_number(&self, staff_number: &str) -> Result<Option<Staff>> {
        self.get_staff_by_number_impl(staff_number).await
    }

    async fn list_staff_with_pagination(
        &self,
        query: StaffListQuery,
    ) -> Result<StaffListResponse> {
        self.list_staff_with_pagination_impl(query).await
    }

    async fn update_staff(&self, id: i64, update: UpdateStaffRequest) -> Result<Option<Staff>> {
        self.update_staff_impl(id, update).await
    }

    async fn delete_staff(&self, id: i64) -> Result<bool> {
        self.delete_staff_impl(id).await
    }

    // 学生模块
    async fn create_student(&self, req: CreateStudentRequest) -> Result<Student> {
        self.create_student_impl(req).await
    }

    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>> {
        self.get_student_by_id_impl(id).await
    }

    async fn get_student_by_number(&self, student_number: &str) -> Result<Option<Student>> {
        self.get_student_by_number_impl(student_number).await
    }

    async fn list_students_with_pagination(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse> {
        self.list_students_with_pagination_impl(query).await
    }

    async fn update_student(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        self.update_student_impl(id, update).await
    }

    async fn delete_student(&self, id: i64) -> Result<bool> {
        self.delete_student_impl(id).await
    }

    // 信函模板模块
    async fn create_template(&self, req: CreateTemplateRequest) -> Result<LetterTemplate> {
        self.create_template_impl(req).await
    }

    async fn get_template_by_id(&self, id: i64) -> Result<Option<LetterTemplate>> {
        self.get_template_by_id_impl(id).await
    }

    async fn list_templates_with_pagination(
        &self,
        query: TemplateListQuery,
    ) -> Result<TemplateListResponse> {
        self.list_templates_with_pagination_impl(query).await
    }

    async fn update_template(
        &self,
        id: i64,
        update: UpdateTemplateRequest,
    ) -> Result<Option<LetterTemplate>> {
        self.update_template_impl(id, update).await
    }

    async fn delete_template(&self, id: i64) -> Result<bool> {
        self.delete_template_impl(id).await
    }

    // 投诉生命周期模块
    async fn file_complaint(&self, req: FileComplaintRequest) -> Result<Complaint> {
        self.file_complaint_impl(req).await
    }

    async fn get_complaint_by_id(&self, id: i64) -> Result<Option<Complaint>> {
        self.get_complaint_by_id_impl(id).await
    }

    async fn get_complaint_detail(&self, id: i64) -> Result<Option<ComplaintDetailResponse>> {
        self.get_complaint_detail_impl(id).await
    }

    async fn list_complaints_with_pagination(
        &self,
        query: ComplaintListQuery,
    ) -> Result<ComplaintListResponse> {
        self.list_complaints_with_pagination_impl(query).await
    }

    async fn update_complaint(
        &self,
        id: i64,
        update: UpdateComplaintRequest,
    ) -> Result<Option<Complaint>> {
        self.update_complaint_impl(id, update).await
    }

    async fn set_complaint_status(
        &self,
        id: i64,
        update: SetComplaintStatusRequest,
    ) -> Result<Complaint> {
        self.set_complaint_status_impl(id, update).await
    }

    async fn reassign_complaint(
        &self,
        id: i64,
        update: ReassignComplaintRequest,
    ) -> Result<Complaint> {
        self.reassign_complaint_impl(id, update).await
    }

    async fn resolve_complaint(
        &self,
        id: i64,
        req: ResolveComplaintRequest,
    ) -> Result<Resolution> {
        self.resolve_complaint_impl(id, req).await
    }

    async fn delete_complaint(&self, id: i64) -> Result<bool> {
        self.delete_complaint_impl(id).await
    }

    async fn get_resolution_by_complaint_id(
        &self,
        complaint_id: i64,
    ) -> Result<Option<Resolution>> {
        self.get_resolution_by_complaint_id_impl(complaint_id).await
    }

    // 统计模块
    async fn get_stats_overview(&self) -> Result<StatsOverviewResponse> {
        self.get_stats_overview_impl().await
    }
}
