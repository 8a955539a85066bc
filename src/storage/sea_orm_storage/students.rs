use super::{SeaOrmStorage, classify_write_err};
use crate::entity::student::{ActiveModel, Column, Entity as Students};
use crate::errors::{Result, StudentSysError};
use crate::models::students::{
    entities::Student,
    requests::{CreateStudentRequest, UpdateStudentRequest},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use uuid::Uuid;

impl SeaOrmStorage {
    /// 创建学生
    pub async fn create_student_impl(&self, req: CreateStudentRequest) -> Result<Student> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(req.name),
            student_id: Set(req.student_id),
            id_semester: Set(req.id_semester),
            email: Set(req.email),
            department: Set(req.department),
            created_at: Set(now),
            updated_at: Set(now),
            created_by: Set(None),
            updated_by: Set(None),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| classify_write_err("创建学生失败", e))?;

        Ok(result.into_student())
    }

    /// 通过主键获取学生
    pub async fn get_student_by_id_impl(&self, id: Uuid) -> Result<Option<Student>> {
        let result = Students::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| StudentSysError::database_operation(format!("查询学生失败: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 通过学号获取学生
    pub async fn get_student_by_student_id_impl(
        &self,
        student_id: &str,
    ) -> Result<Option<Student>> {
        let result = Students::find()
            .filter(Column::StudentId.eq(student_id))
            .one(&self.db)
            .await
            .map_err(|e| StudentSysError::database_operation(format!("查询学生失败: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 通过邮箱获取学生
    pub async fn get_student_by_email_impl(&self, email: &str) -> Result<Option<Student>> {
        let result = Students::find()
            .filter(Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| StudentSysError::database_operation(format!("查询学生失败: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 按插入顺序分页列出学生，返回当前页与总条数
    pub async fn list_students_with_pagination_impl(
        &self,
        offset: u64,
        limit: u64,
    ) -> Result<(Vec<Student>, u64)> {
        let total = Students::find()
            .count(&self.db)
            .await
            .map_err(|e| StudentSysError::database_operation(format!("统计学生总数失败: {e}")))?;

        // created_at 精度为秒，同秒插入时用主键保证顺序稳定
        let rows = Students::find()
            .order_by_asc(Column::CreatedAt)
            .order_by_asc(Column::Id)
            .offset(offset)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| StudentSysError::database_operation(format!("查询学生列表失败: {e}")))?;

        Ok((rows.into_iter().map(|m| m.into_student()).collect(), total))
    }

    /// 部分更新学生信息：只写入显式提供的字段
    pub async fn update_student_impl(
        &self,
        id: Uuid,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        // 先检查学生是否存在
        let existing = self.get_student_by_id_impl(id).await?;
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
            model.name = Set(name);
        }

        if let Some(student_id) = update.student_id {
            model.student_id = Set(student_id);
        }

        if let Some(id_semester) = update.id_semester {
            model.id_semester = Set(id_semester);
        }

        if let Some(email) = update.email {
            model.email = Set(email);
        }

        if let Some(department) = update.department {
            model.department = Set(department);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| classify_write_err("更新学生失败", e))?;

        self.get_student_by_id_impl(id).await
    }

    /// 删除学生
    pub async fn delete_student_impl(&self, id: Uuid) -> Result<bool> {
        let result = Students::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| StudentSysError::database_operation(format!("删除学生失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
