use serde::Serialize;
use uuid::Uuid;

use super::entities::Student;

// 学生读取投影：对外只暴露业务字段，时间戳与操作人不出现在响应中
#[derive(Debug, Serialize)]
pub struct StudentRead {
    pub id: Uuid,
    pub name: String,
    pub student_id: String,
    pub id_semester: String,
    pub email: String,
    pub department: serde_json::Value,
}

impl From<Student> for StudentRead {
    fn from(student: Student) -> Self {
        Self {
            id: student.id,
            name: student.name,
            student_id: student.student_id,
            id_semester: student.id_semester,
            email: student.email,
            department: student.department,
        }
    }
}
