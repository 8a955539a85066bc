use serde::Deserialize;

// 学生创建请求
#[derive(Debug, Deserialize)]
pub struct CreateStudentRequest {
    pub name: String,
    pub student_id: String,
    pub id_semester: String,
    pub email: String,
    #[serde(default = "default_department")]
    pub department: serde_json::Value,
}

fn default_department() -> serde_json::Value {
    serde_json::json!({})
}

// 学生更新请求：仅更新显式提供的字段
#[derive(Debug, Deserialize)]
pub struct UpdateStudentRequest {
    pub name: Option<String>,
    pub student_id: Option<String>,
    pub id_semester: Option<String>,
    pub email: Option<String>,
    pub department: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_department_defaults_to_empty() {
        let req: CreateStudentRequest = serde_json::from_str(
            r#"{"name":"Ada","student_id":"S001","id_semester":"2025-1","email":"ada@example.com"}"#,
        )
        .unwrap();
        assert_eq!(req.department, serde_json::json!({}));
    }

    #[test]
    fn test_update_request_only_supplied_fields_present() {
        let req: UpdateStudentRequest = serde_json::from_str(r#"{"name":"X"}"#).unwrap();
        assert_eq!(req.name.as_deref(), Some("X"));
        assert!(req.student_id.is_none());
        assert!(req.id_semester.is_none());
        assert!(req.email.is_none());
        assert!(req.department.is_none());
    }
}
