//! 学生存储操作

use super::{SeaOrmStorage, map_write_err};
use crate::entity::complaints::{Column as ComplaintColumn, Entity as Complaints};
use crate::entity::students::{ActiveModel, Column, Entity as Students};
use crate::errors::{ComplaintSystemError, Result};
use crate::models::{
    PaginationInfo,
    students::{
        entities::Student,
        requests::{CreateStudentRequest, StudentListQuery, UpdateStudentRequest},
        responses::StudentListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建学生
    pub async fn create_student_impl(&self, req: CreateStudentRequest) -> Result<Student> {
        if req.student_number.trim().is_empty() || req.name.trim().is_empty() {
            return Err(ComplaintSystemError::validation("学号和姓名不能为空"));
        }

        // 学号查重，数据库唯一约束兜底并发竞争
        if self
            .get_student_by_number_impl(&req.student_number)
            .await?
            .is_some()
        {
            return Err(ComplaintSystemError::conflict(format!(
                "学号已存在: {}",
                req.student_number
            )));
        }

        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            student_number: Set(req.student_number),
            name: Set(req.name),
            class_name: Set(req.class_name),
            guardian_contact: Set(req.guardian_contact),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| map_write_err("创建学生失败", e))?;

        Ok(result.into_student())
    }

    /// 通过 ID 获取学生
    pub async fn get_student_by_id_impl(&self, id: i64) -> Result<Option<Student>> {
        let result = Students::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ComplaintSystemError::unavailable(format!("查询学生失败: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 通过学号获取学生
    pub async fn get_student_by_number_impl(
        &self,
        student_number: &str,
    ) -> Result<Option<Student>> {
        let result = Students::find()
            .filter(Column::StudentNumber.eq(student_number))
            .one(&self.db)
            .await
            .map_err(|e| ComplaintSystemError::unavailable(format!("查询学生失败: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 分页列出学生
    pub async fn list_students_with_pagination_impl(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Students::find();

        // 班级筛选
        if let Some(ref class_name) = query.class_name {
            select = select.filter(Column::ClassName.eq(class_name));
        }

        // 搜索条件
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(Column::Name.contains(&escaped))
                    .add(Column::StudentNumber.contains(&escaped)),
            );
        }

        // 排序
        select = select.order_by_desc(Column::CreatedAt);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| ComplaintSystemError::unavailable(format!("查询学生总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| ComplaintSystemError::unavailable(format!("查询学生页数失败: {e}")))?;

        let students = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| ComplaintSystemError::unavailable(format!("查询学生列表失败: {e}")))?;

        Ok(StudentListResponse {
            items: students.into_iter().map(|m| m.into_student()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新学生信息
    pub async fn update_student_impl(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        let existing = match self.get_student_by_id_impl(id).await? {
            Some(student) => student,
            None => return Ok(None),
        };

        // 学号改动需要查重（排除自身）
        if let Some(ref student_number) = update.student_number
            && *student_number != existing.student_number
        {
            if self
                .get_student_by_number_impl(student_number)
                .await?
                .is_some()
            {
                return Err(ComplaintSystemError::conflict(format!(
                    "学号已存在: {student_number}"
                )));
            }
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(student_number) = update.student_number {
            if student_number.trim().is_empty() {
                return Err(ComplaintSystemError::validation("学号不能为空"));
            }
            model.student_number = Set(student_number);
        }

        if let Some(name) = update.name {
            if name.trim().is_empty() {
                return Err(ComplaintSystemError::validation("姓名不能为空"));
            }
            model.name = Set(name);
        }

        if let Some(class_name) = update.class_name {
            if class_name.trim().is_empty() {
                return Err(ComplaintSystemError::validation("班级不能为空"));
            }
            model.class_name = Set(class_name);
        }

        if let Some(guardian_contact) = update.guardian_contact {
            if guardian_contact.trim().is_empty() {
                return Err(ComplaintSystemError::validation("监护人联系方式不能为空"));
            }
            model.guardian_contact = Set(guardian_contact);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| map_write_err("更新学生失败", e))?;

        self.get_student_by_id_impl(id).await
    }

    /// 删除学生
    ///
    /// 仍有投诉引用的学生不可删除（依赖计数守卫）。
    pub async fn delete_student_impl(&self, id: i64) -> Result<bool> {
        let dependents = Complaints::find()
            .filter(ComplaintColumn::StudentId.eq(id))
            .count(&self.db)
            .await
            .map_err(|e| ComplaintSystemError::unavailable(format!("统计关联投诉失败: {e}")))?;

        if dependents > 0 {
            return Err(ComplaintSystemError::constrained(format!(
                "学生仍被 {dependents} 条投诉引用，无法删除"
            )));
        }

        let result = Students::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| ComplaintSystemError::unavailable(format!("删除学生失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 统计学生数量
    pub async fn count_students_impl(&self) -> Result<u64> {
        let count = Students::find()
            .count(&self.db)
            .await
            .map_err(|e| ComplaintSystemError::unavailable(format!("统计学生数量失败: {e}")))?;

        Ok(count)
    }
}
