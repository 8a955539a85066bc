use serde::Serialize;

// 业务错误码（HTTP 错误响应体中的 code 字段）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    BadRequest = 1001,
    StudentNotFound = 2001,
    StudentAlreadyExists = 2002,
    StudentCreationFailed = 2003,
    StudentUpdateFailed = 2004,
    StudentDeleteFailed = 2005,
    InternalServerError = 5000,
}

// 统一的错误响应体
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: i32,
    pub message: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code as i32,
            message: message.into(),
            timestamp: chrono::Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_code() {
        let body = ErrorResponse::new(ErrorCode::StudentNotFound, "Student not found");
        assert_eq!(body.code, 2001);
        assert_eq!(body.message, "Student not found");
    }
}
