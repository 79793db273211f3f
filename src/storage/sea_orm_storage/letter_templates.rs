//! 信函模板存储操作

use super::{SeaOrmStorage, map_write_err};
use crate::entity::letter_templates::{ActiveModel, Column, Entity as LetterTemplates};
use crate::entity::resolutions::{Column as ResolutionColumn, Entity as Resolutions};
use crate::errors::{ComplaintSystemError, Result};
use crate::models::{
    PaginationInfo,
    templates::{
        entities::LetterTemplate,
        requests::{CreateTemplateRequest, TemplateListQuery, UpdateTemplateRequest},
        responses::TemplateListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建模板
    pub async fn create_template_impl(&self, req: CreateTemplateRequest) -> Result<LetterTemplate> {
        if req.name.trim().is_empty() || req.body.trim().is_empty() {
            return Err(ComplaintSystemError::validation("模板名称和内容不能为空"));
        }

        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(req.name),
            body: Set(req.body),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| map_write_err("创建模板失败", e))?;

        Ok(result.into_template())
    }

    /// 通过 ID 获取模板
    pub async fn get_template_by_id_impl(&self, id: i64) -> Result<Option<LetterTemplate>> {
        let result = LetterTemplates::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ComplaintSystemError::unavailable(format!("查询模板失败: {e}")))?;

        Ok(result.map(|m| m.into_template()))
    }

    /// 分页列出模板
    pub async fn list_templates_with_pagination_impl(
        &self,
        query: TemplateListQuery,
    ) -> Result<TemplateListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = LetterTemplates::find();

        // 搜索条件
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(Column::Name.contains(&escaped));
        }

        // 排序
        select = select.order_by_desc(Column::CreatedAt);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| ComplaintSystemError::unavailable(format!("查询模板总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| ComplaintSystemError::unavailable(format!("查询模板页数失败: {e}")))?;

        let templates = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| ComplaintSystemError::unavailable(format!("查询模板列表失败: {e}")))?;

        Ok(TemplateListResponse {
            items: templates.into_iter().map(|m| m.into_template()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新模板
    pub async fn update_template_impl(
        &self,
        id: i64,
        update: UpdateTemplateRequest,
    ) -> Result<Option<LetterTemplate>> {
        let existing = self.get_template_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(name) = update.name {
            if name.trim().is_empty() {
                return Err(ComplaintSystemError::validation("模板名称不能为空"));
            }
            model.name = Set(name);
        }

        if let Some(body) = update.body {
            if body.trim().is_empty() {
                return Err(ComplaintSystemError::validation("模板内容不能为空"));
            }
            model.body = Set(body);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| map_write_err("更新模板失败", e))?;

        self.get_template_by_id_impl(id).await
    }

    /// 删除模板
    ///
    /// 仍被处理记录引用的模板不可删除（依赖计数守卫）。
    pub async fn delete_template_impl(&self, id: i64) -> Result<bool> {
        let dependents = Resolutions::find()
            .filter(ResolutionColumn::TemplateId.eq(id))
            .count(&self.db)
            .await
            .map_err(|e| ComplaintSystemError::unavailable(format!("统计处理记录失败: {e}")))?;

        if dependents > 0 {
            return Err(ComplaintSystemError::constrained(format!(
                "模板仍被 {dependents} 条处理记录引用，无法删除"
            )));
        }

        let result = LetterTemplates::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| ComplaintSystemError::unavailable(format!("删除模板失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
