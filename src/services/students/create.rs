use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::StudentService;
use crate::models::{
    ErrorCode, ErrorResponse,
    students::{requests::CreateStudentRequest, responses::StudentRead},
};
use crate::utils::validate::{
    validate_email, validate_name, validate_semester, validate_student_number,
};

pub async fn create_student(
    service: &StudentService,
    student_data: CreateStudentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    // 验证姓名
    if let Err(msg) = validate_name(&student_data.name) {
        return Ok(
            HttpResponse::BadRequest().json(ErrorResponse::new(ErrorCode::BadRequest, msg))
        );
    }

    // 验证学号与学期
    if let Err(msg) = validate_student_number(&student_data.student_id) {
        return Ok(
            HttpResponse::BadRequest().json(ErrorResponse::new(ErrorCode::BadRequest, msg))
        );
    }
    if let Err(msg) = validate_semester(&student_data.id_semester) {
        return Ok(
            HttpResponse::BadRequest().json(ErrorResponse::new(ErrorCode::BadRequest, msg))
        );
    }

    // 验证邮箱
    if let Err(msg) = validate_email(&student_data.email) {
        return Ok(
            HttpResponse::BadRequest().json(ErrorResponse::new(ErrorCode::BadRequest, msg))
        );
    }

    let storage = service.get_storage(request);

    match storage.create_student(student_data).await {
        Ok(student) => Ok(HttpResponse::Created().json(StudentRead::from(student))),
        // 唯一约束冲突：学号或邮箱已存在
        Err(e) if e.is_unique_violation() => {
            Ok(HttpResponse::Conflict().json(ErrorResponse::new(
                ErrorCode::StudentAlreadyExists,
                "student_id or email already exists",
            )))
        }
        Err(e) => {
            error!("Student creation failed: {}", e);
            Ok(HttpResponse::BadRequest().json(ErrorResponse::new(
                ErrorCode::StudentCreationFailed,
                format!("Error creating student: {e}"),
            )))
        }
    }
}
