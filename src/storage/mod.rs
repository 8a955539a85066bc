use std::sync::Arc;

use uuid::Uuid;

use crate::errors::Result;
use crate::models::students::{
    entities::Student,
    requests::{CreateStudentRequest, UpdateStudentRequest},
};

pub mod sea_orm_storage;

/// 一页学生记录及匹配的总条数
pub type StudentPage = (Vec<Student>, u64);

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 学生管理方法
    // 创建学生（服务端生成 ID 与时间戳）
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student>;
    // 通过主键获取学生
    async fn get_student_by_id(&self, id: Uuid) -> Result<Option<Student>>;
    // 通过学号获取学生
    async fn get_student_by_student_id(&self, student_id: &str) -> Result<Option<Student>>;
    // 通过邮箱获取学生
    async fn get_student_by_email(&self, email: &str) -> Result<Option<Student>>;
    // 按稳定顺序分页列出学生，并返回总条数
    async fn list_students_with_pagination(&self, offset: u64, limit: u64) -> Result<StudentPage>;
    // 部分更新：只写入显式提供的字段，记录不存在时返回 None
    async fn update_student(
        &self,
        id: Uuid,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>>;
    // 删除学生，返回记录是否存在并被删除
    async fn delete_student(&self, id: Uuid) -> Result<bool>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
