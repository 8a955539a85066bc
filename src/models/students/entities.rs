use serde::{Deserialize, Serialize};
use uuid::Uuid;

// 学生实体（业务模型）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub id: Uuid,
    pub name: String,
    pub student_id: String,
    pub id_semester: String,
    pub email: String,
    pub department: serde_json::Value,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
}
