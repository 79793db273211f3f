//! 教职工存储操作

use super::{SeaOrmStorage, map_write_err};
use crate::entity::complaints::{Column as ComplaintColumn, Entity as Complaints};
use crate::entity::staff::{ActiveModel, Column, Entity as StaffEntity};
use crate::errors::{ComplaintSystemError, Result};
use crate::models::{
    PaginationInfo,
    staff::{
        entities::Staff,
        requests::{CreateStaffRequest, StaffListQuery, UpdateStaffRequest},
        responses::StaffListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建教职工
    pub async fn create_staff_impl(&self, req: CreateStaffRequest) -> Result<Staff> {
        if req.staff_number.trim().is_empty() || req.name.trim().is_empty() {
            return Err(ComplaintSystemError::validation("工号和姓名不能为空"));
        }

        // 工号查重，数据库唯一约束兜底并发竞争
        if self
            .get_staff_by_number_impl(&req.staff_number)
            .await?
            .is_some()
        {
            return Err(ComplaintSystemError::conflict(format!(
                "工号已存在: {}",
                req.staff_number
            )));
        }

        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            staff_number: Set(req.staff_number),
            name: Set(req.name),
            phone: Set(req.phone),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| map_write_err("创建教职工失败", e))?;

        Ok(result.into_staff())
    }

    /// 通过 ID 获取教职工
    pub async fn get_staff_by_id_impl(&self, id: i64) -> Result<Option<Staff>> {
        let result = StaffEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ComplaintSystemError::unavailable(format!("查询教职工失败: {e}")))?;

        Ok(result.map(|m| m.into_staff()))
    }

    /// 通过工号获取教职工
    pub async fn get_staff_by_number_impl(&self, staff_number: &str) -> Result<Option<Staff>> {
        let result = StaffEntity::find()
            .filter(Column::StaffNumber.eq(staff_number))
            .one(&self.db)
            .await
            .map_err(|e| ComplaintSystemError::unavailable(format!("查询教职工失败: {e}")))?;

        Ok(result.map(|m| m.into_staff()))
    }

    /// 分页列出教职工
    pub async fn list_staff_with_pagination_impl(
        &self,
        query: StaffListQuery,
    ) -> Result<StaffListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = StaffEntity::find();

        // 搜索条件
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(Column::Name.contains(&escaped))
                    .add(Column::StaffNumber.contains(&escaped)),
            );
        }

        // 排序
        select = select.order_by_desc(Column::CreatedAt);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| ComplaintSystemError::unavailable(format!("查询教职工总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| ComplaintSystemError::unavailable(format!("查询教职工页数失败: {e}")))?;

        let staff = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| ComplaintSystemError::unavailable(format!("查询教职工列表失败: {e}")))?;

        Ok(StaffListResponse {
            items: staff.into_iter().map(|m| m.into_staff()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新教职工信息
    pub async fn update_staff_impl(
        &self,
        id: i64,
        update: UpdateStaffRequest,
    ) -> Result<Option<Staff>> {
        let existing = match self.get_staff_by_id_impl(id).await? {
            Some(staff) => staff,
            None => return Ok(None),
        };

        // 工号改动需要查重（排除自身）
        if let Some(ref staff_number) = update.staff_number
            && *staff_number != existing.staff_number
        {
            if self
                .get_staff_by_number_impl(staff_number)
                .await?
                .is_some()
            {
                return Err(ComplaintSystemError::conflict(format!(
                    "工号已存在: {staff_number}"
                )));
            }
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(staff_number) = update.staff_number {
            if staff_number.trim().is_empty() {
                return Err(ComplaintSystemError::validation("工号不能为空"));
            }
            model.staff_number = Set(staff_number);
        }

        if let Some(name) = update.name {
            if name.trim().is_empty() {
                return Err(ComplaintSystemError::validation("姓名不能为空"));
            }
            model.name = Set(name);
        }

        // phone 传空字符串表示清除
        if let Some(phone) = update.phone {
            if phone.is_empty() {
                model.phone = Set(None);
            } else {
                model.phone = Set(Some(phone));
            }
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| map_write_err("更新教职工失败", e))?;

        self.get_staff_by_id_impl(id).await
    }

    /// 删除教职工
    ///
    /// 仍有投诉引用的教职工不可删除（依赖计数守卫）。
    pub async fn delete_staff_impl(&self, id: i64) -> Result<bool> {
        let dependents = Complaints::find()
            .filter(ComplaintColumn::StaffId.eq(id))
            .count(&self.db)
            .await
            .map_err(|e| ComplaintSystemError::unavailable(format!("统计关联投诉失败: {e}")))?;

        if dependents > 0 {
            return Err(ComplaintSystemError::constrained(format!(
                "教职工仍被 {dependents} 条投诉引用，无法删除"
            )));
        }

        let result = StaffEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| ComplaintSystemError::unavailable(format!("删除教职工失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 统计教职工数量
    pub async fn count_staff_impl(&self) -> Result<u64> {
        let count = StaffEntity::find()
            .count(&self.db)
            .await
            .map_err(|e| ComplaintSystemError::unavailable(format!("统计教职工数量失败: {e}")))?;

        Ok(count)
    }
}
