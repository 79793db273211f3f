//! 投诉生命周期存储操作
//!
//! 提交、状态变更、改派、办结与删除都在这里落实。写入前先校验
//! 外键存在性；办结与删除在单个事务内完成读-查-写，保证并发下
//! 不会产生第二条处理记录或悬挂的处理记录。

use super::{SeaOrmStorage, map_write_err};
use crate::entity::accounts::Entity as Accounts;
use crate::entity::complaints::{ActiveModel, Column, Entity as Complaints};
use crate::entity::letter_templates::Entity as LetterTemplates;
use crate::entity::resolutions::{
    ActiveModel as ResolutionActiveModel, Column as ResolutionColumn, Entity as Resolutions,
};
use crate::errors::{ComplaintSystemError, Result};
use crate::models::{
    PaginationInfo,
    complaints::{
        entities::{Complaint, ComplaintStatus},
        requests::{
            ComplaintListQuery, FileComplaintRequest, ReassignComplaintRequest,
            ResolveComplaintRequest, SetComplaintStatusRequest, UpdateComplaintRequest,
        },
        responses::{ComplaintDetailResponse, ComplaintListResponse},
    },
    resolutions::entities::Resolution,
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

impl SeaOrmStorage {
    /// 提交投诉
    ///
    /// 新投诉始终为 pending，filed_at 取当前时间，不携带驳回原因。
    pub async fn file_complaint_impl(&self, req: FileComplaintRequest) -> Result<Complaint> {
        if req.description.trim().is_empty() {
            return Err(ComplaintSystemError::validation("投诉描述不能为空"));
        }

        // 外键存在性校验
        if self.get_staff_by_id_impl(req.staff_id).await?.is_none() {
            return Err(ComplaintSystemError::not_found(format!(
                "教职工不存在: {}",
                req.staff_id
            )));
        }
        if self.get_student_by_id_impl(req.student_id).await?.is_none() {
            return Err(ComplaintSystemError::not_found(format!(
                "学生不存在: {}",
                req.student_id
            )));
        }

        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            filed_at: Set(now),
            description: Set(req.description),
            status: Set(ComplaintStatus::Pending.to_string()),
            rejection_reason: Set(None),
            staff_id: Set(req.staff_id),
            student_id: Set(req.student_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| map_write_err("提交投诉失败", e))?;

        Ok(result.into_complaint())
    }

    /// 通过 ID 获取投诉
    pub async fn get_complaint_by_id_impl(&self, id: i64) -> Result<Option<Complaint>> {
        let result = Complaints::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ComplaintSystemError::unavailable(format!("查询投诉失败: {e}")))?;

        Ok(result.map(|m| m.into_complaint()))
    }

    /// 获取投诉详情（含教职工、学生与处理记录）
    pub async fn get_complaint_detail_impl(
        &self,
        id: i64,
    ) -> Result<Option<ComplaintDetailResponse>> {
        let complaint = match self.get_complaint_by_id_impl(id).await? {
            Some(complaint) => complaint,
            None => return Ok(None),
        };

        let staff = self
            .get_staff_by_id_impl(complaint.staff_id)
            .await?
            .ok_or_else(|| {
                ComplaintSystemError::not_found(format!("教职工不存在: {}", complaint.staff_id))
            })?;

        let student = self
            .get_student_by_id_impl(complaint.student_id)
            .await?
            .ok_or_else(|| {
                ComplaintSystemError::not_found(format!("学生不存在: {}", complaint.student_id))
            })?;

        let resolution = self.get_resolution_by_complaint_id_impl(id).await?;

        Ok(Some(ComplaintDetailResponse {
            complaint,
            staff,
            student,
            resolution,
        }))
    }

    /// 分页列出投诉，按提交时间倒序
    pub async fn list_complaints_with_pagination_impl(
        &self,
        query: ComplaintListQuery,
    ) -> Result<ComplaintListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Complaints::find();

        // 状态筛选
        if let Some(ref status) = query.status {
            select = select.filter(Column::Status.eq(status.to_string()));
        }

        // 提交教职工筛选
        if let Some(staff_id) = query.staff_id {
            select = select.filter(Column::StaffId.eq(staff_id));
        }

        // 被投诉学生筛选
        if let Some(student_id) = query.student_id {
            select = select.filter(Column::StudentId.eq(student_id));
        }

        // 搜索条件
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(Column::Description.contains(&escaped));
        }

        // 排序
        select = select.order_by_desc(Column::FiledAt);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| ComplaintSystemError::unavailable(format!("查询投诉总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| ComplaintSystemError::unavailable(format!("查询投诉页数失败: {e}")))?;

        let complaints = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| ComplaintSystemError::unavailable(format!("查询投诉列表失败: {e}")))?;

        Ok(ComplaintListResponse {
            items: complaints.into_iter().map(|m| m.into_complaint()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 修改投诉描述（管理员更正）
    pub async fn update_complaint_impl(
        &self,
        id: i64,
        update: UpdateComplaintRequest,
    ) -> Result<Option<Complaint>> {
        let existing = self.get_complaint_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(description) = update.description {
            if description.trim().is_empty() {
                return Err(ComplaintSystemError::validation("投诉描述不能为空"));
            }
            model.description = Set(description);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| map_write_err("更新投诉失败", e))?;

        self.get_complaint_by_id_impl(id).await
    }

    /// 变更投诉状态
    ///
    /// 不限制前置状态（管理员纠错是支持的用法）。改为 Rejected
    /// 必须携带非空原因；改为其他状态时清除已存的原因。
    pub async fn set_complaint_status_impl(
        &self,
        id: i64,
        update: SetComplaintStatusRequest,
    ) -> Result<Complaint> {
        if self.get_complaint_by_id_impl(id).await?.is_none() {
            return Err(ComplaintSystemError::not_found(format!("投诉不存在: {id}")));
        }

        let rejection_reason = if update.status == ComplaintStatus::Rejected {
            match update.rejection_reason {
                Some(reason) if !reason.trim().is_empty() => Some(reason),
                _ => {
                    return Err(ComplaintSystemError::validation("驳回投诉必须填写原因"));
                }
            }
        } else {
            None
        };

        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            id: Set(id),
            status: Set(update.status.to_string()),
            rejection_reason: Set(rejection_reason),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| map_write_err("变更投诉状态失败", e))?;

        Ok(result.into_complaint())
    }

    /// 改派投诉
    ///
    /// 只校验并应用提供的外键，未提供的保持原值。
    pub async fn reassign_complaint_impl(
        &self,
        id: i64,
        update: ReassignComplaintRequest,
    ) -> Result<Complaint> {
        if self.get_complaint_by_id_impl(id).await?.is_none() {
            return Err(ComplaintSystemError::not_found(format!("投诉不存在: {id}")));
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(staff_id) = update.staff_id {
            if self.get_staff_by_id_impl(staff_id).await?.is_none() {
                return Err(ComplaintSystemError::not_found(format!(
                    "教职工不存在: {staff_id}"
                )));
            }
            model.staff_id = Set(staff_id);
        }

        if let Some(student_id) = update.student_id {
            if self.get_student_by_id_impl(student_id).await?.is_none() {
                return Err(ComplaintSystemError::not_found(format!(
                    "学生不存在: {student_id}"
                )));
            }
            model.student_id = Set(student_id);
        }

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| map_write_err("改派投诉失败", e))?;

        Ok(result.into_complaint())
    }

    /// 办结投诉
    ///
    /// 在单个事务内创建处理记录并把状态置为 resolved。重复办结
    /// 由事务内检查与 complaint_id 唯一约束双重拦截，后到者得到
    /// Conflict。
    pub async fn resolve_complaint_impl(
        &self,
        id: i64,
        req: ResolveComplaintRequest,
    ) -> Result<Resolution> {
        if req.admin_note.trim().is_empty() {
            return Err(ComplaintSystemError::validation("处理备注不能为空"));
        }

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| ComplaintSystemError::unavailable(format!("开启事务失败: {e}")))?;

        let complaint = Complaints::find_by_id(id)
            .one(&txn)
            .await
            .map_err(|e| ComplaintSystemError::unavailable(format!("查询投诉失败: {e}")))?
            .ok_or_else(|| ComplaintSystemError::not_found(format!("投诉不存在: {id}")))?;

        if LetterTemplates::find_by_id(req.template_id)
            .one(&txn)
            .await
            .map_err(|e| ComplaintSystemError::unavailable(format!("查询模板失败: {e}")))?
            .is_none()
        {
            return Err(ComplaintSystemError::not_found(format!(
                "模板不存在: {}",
                req.template_id
            )));
        }

        if Accounts::find_by_id(req.account_id)
            .one(&txn)
            .await
            .map_err(|e| ComplaintSystemError::unavailable(format!("查询账号失败: {e}")))?
            .is_none()
        {
            return Err(ComplaintSystemError::not_found(format!(
                "账号不存在: {}",
                req.account_id
            )));
        }

        let existing = Resolutions::find()
            .filter(ResolutionColumn::ComplaintId.eq(id))
            .one(&txn)
            .await
            .map_err(|e| ComplaintSystemError::unavailable(format!("查询处理记录失败: {e}")))?;

        if existing.is_some() {
            return Err(ComplaintSystemError::conflict(format!(
                "投诉 {id} 已有处理记录"
            )));
        }

        let now = chrono::Utc::now().timestamp();

        let resolution = ResolutionActiveModel {
            processed_at: Set(now),
            admin_note: Set(req.admin_note),
            template_id: Set(req.template_id),
            account_id: Set(req.account_id),
            complaint_id: Set(id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| map_write_err("创建处理记录失败", e))?;

        ActiveModel {
            id: Set(complaint.id),
            status: Set(ComplaintStatus::Resolved.to_string()),
            rejection_reason: Set(None),
            updated_at: Set(now),
            ..Default::default()
        }
        .update(&txn)
        .await
        .map_err(|e| map_write_err("更新投诉状态失败", e))?;

        txn.commit()
            .await
            .map_err(|e| ComplaintSystemError::unavailable(format!("提交事务失败: {e}")))?;

        Ok(resolution.into_resolution())
    }

    /// 删除投诉
    ///
    /// 级联删除由控制逻辑显式执行：同一事务内先删处理记录再删投诉。
    pub async fn delete_complaint_impl(&self, id: i64) -> Result<bool> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| ComplaintSystemError::unavailable(format!("开启事务失败: {e}")))?;

        let existing = Complaints::find_by_id(id)
            .one(&txn)
            .await
            .map_err(|e| ComplaintSystemError::unavailable(format!("查询投诉失败: {e}")))?;

        if existing.is_none() {
            return Ok(false);
        }

        Resolutions::delete_many()
            .filter(ResolutionColumn::ComplaintId.eq(id))
            .exec(&txn)
            .await
            .map_err(|e| ComplaintSystemError::unavailable(format!("删除处理记录失败: {e}")))?;

        Complaints::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(|e| ComplaintSystemError::unavailable(format!("删除投诉失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| ComplaintSystemError::unavailable(format!("提交事务失败: {e}")))?;

        Ok(true)
    }

    /// 获取某条投诉的处理记录
    pub async fn get_resolution_by_complaint_id_impl(
        &self,
        complaint_id: i64,
    ) -> Result<Option<Resolution>> {
        let result = Resolutions::find()
            .filter(ResolutionColumn::ComplaintId.eq(complaint_id))
            .one(&self.db)
            .await
            .map_err(|e| ComplaintSystemError::unavailable(format!("查询处理记录失败: {e}")))?;

        Ok(result.map(|m| m.into_resolution()))
    }

    /// 统计投诉数量
    pub async fn count_complaints_impl(&self) -> Result<u64> {
        let count = Complaints::find()
            .count(&self.db)
            .await
            .map_err(|e| ComplaintSystemError::unavailable(format!("统计投诉数量失败: {e}")))?;

        Ok(count)
    }

    /// 按状态统计投诉数量
    pub async fn count_complaints_by_status_impl(&self, status: ComplaintStatus) -> Result<u64> {
        let count = Complaints::find()
            .filter(Column::Status.eq(status.to_string()))
            .count(&self.db)
            .await
            .map_err(|e| ComplaintSystemError::unavailable(format!("统计投诉数量失败: {e}")))?;

        Ok(count)
    }
}
