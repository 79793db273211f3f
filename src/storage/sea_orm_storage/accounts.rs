//! 账号存储操作

use super::{SeaOrmStorage, map_write_err};
use crate::entity::accounts::{ActiveModel, Column, Entity as Accounts};
use crate::entity::resolutions::{Column as ResolutionColumn, Entity as Resolutions};
use crate::errors::{ComplaintSystemError, Result};
use crate::models::{
    PaginationInfo,
    accounts::{
        entities::Account,
        requests::{AccountListQuery, CreateAccountRequest, UpdateAccountRequest},
        responses::AccountListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建账号
    pub async fn create_account_impl(&self, req: CreateAccountRequest) -> Result<Account> {
        // 先查重，数据库唯一约束兜底并发竞争
        if self.get_account_by_username_impl(&req.username).await?.is_some() {
            return Err(ComplaintSystemError::conflict(format!(
                "用户名已存在: {}",
                req.username
            )));
        }

        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            username: Set(req.username),
            password_hash: Set(req.password),
            role: Set(req.role.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| map_write_err("创建账号失败", e))?;

        Ok(result.into_account())
    }

    /// 通过 ID 获取账号
    pub async fn get_account_by_id_impl(&self, id: i64) -> Result<Option<Account>> {
        let result = Accounts::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ComplaintSystemError::unavailable(format!("查询账号失败: {e}")))?;

        Ok(result.map(|m| m.into_account()))
    }

    /// 通过用户名获取账号
    pub async fn get_account_by_username_impl(&self, username: &str) -> Result<Option<Account>> {
        let result = Accounts::find()
            .filter(Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(|e| ComplaintSystemError::unavailable(format!("查询账号失败: {e}")))?;

        Ok(result.map(|m| m.into_account()))
    }

    /// 分页列出账号
    pub async fn list_accounts_with_pagination_impl(
        &self,
        query: AccountListQuery,
    ) -> Result<AccountListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Accounts::find();

        // 搜索条件
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(Column::Username.contains(&escaped));
        }

        // 角色筛选
        if let Some(ref role) = query.role {
            select = select.filter(Column::Role.eq(role.to_string()));
        }

        // 排序
        select = select.order_by_desc(Column::CreatedAt);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| ComplaintSystemError::unavailable(format!("查询账号总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| ComplaintSystemError::unavailable(format!("查询账号页数失败: {e}")))?;

        let accounts = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| ComplaintSystemError::unavailable(format!("查询账号列表失败: {e}")))?;

        Ok(AccountListResponse {
            items: accounts.into_iter().map(|m| m.into_account()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新账号最后登录时间
    pub async fn update_last_login_impl(&self, id: i64) -> Result<bool> {
        let now = chrono::Utc::now().timestamp();

        let result = Accounts::update_many()
            .col_expr(Column::LastLogin, sea_orm::sea_query::Expr::value(now))
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                ComplaintSystemError::unavailable(format!("更新最后登录时间失败: {e}"))
            })?;

        Ok(result.rows_affected > 0)
    }

    /// 更新账号信息
    pub async fn update_account_impl(
        &self,
        id: i64,
        update: UpdateAccountRequest,
    ) -> Result<Option<Account>> {
        // 先检查账号是否存在
        let existing = match self.get_account_by_id_impl(id).await? {
            Some(account) => account,
            None => return Ok(None),
        };

        // 用户名改动需要查重（排除自身）
        if let Some(ref username) = update.username
            && *username != existing.username
        {
            if self.get_account_by_username_impl(username).await?.is_some() {
                return Err(ComplaintSystemError::conflict(format!(
                    "用户名已存在: {username}"
                )));
            }
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(username) = update.username {
            if username.trim().is_empty() {
                return Err(ComplaintSystemError::validation("用户名不能为空"));
            }
            model.username = Set(username);
        }

        if let Some(password) = update.password {
            model.password_hash = Set(password);
        }

        if let Some(role) = update.role {
            model.role = Set(role.to_string());
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| map_write_err("更新账号失败", e))?;

        self.get_account_by_id_impl(id).await
    }

    /// 删除账号
    ///
    /// 仍被处理记录引用的账号不可删除。
    pub async fn delete_account_impl(&self, id: i64) -> Result<bool> {
        let dependents = Resolutions::find()
            .filter(ResolutionColumn::AccountId.eq(id))
            .count(&self.db)
            .await
            .map_err(|e| ComplaintSystemError::unavailable(format!("统计处理记录失败: {e}")))?;

        if dependents > 0 {
            return Err(ComplaintSystemError::constrained(format!(
                "账号仍被 {dependents} 条处理记录引用，无法删除"
            )));
        }

        let result = Accounts::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| ComplaintSystemError::unavailable(format!("删除账号失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 统计账号数量
    pub async fn count_accounts_impl(&self) -> Result<u64> {
        let count = Accounts::find()
            .count(&self.db)
            .await
            .map_err(|e| ComplaintSystemError::unavailable(format!("统计账号数量失败: {e}")))?;

        Ok(count)
    }
}
