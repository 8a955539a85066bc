use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::warn;
use uuid::Uuid;

use super::StudentService;
use crate::models::{
    ErrorCode, ErrorResponse,
    students::{requests::UpdateStudentRequest, responses::StudentRead},
};
use crate::utils::validate::{
    validate_email, validate_name, validate_semester, validate_student_number,
};

pub async fn update_student(
    service: &StudentService,
    student_id: Uuid,
    update_data: UpdateStudentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    // 只校验显式提供的字段
    if let Some(ref name) = update_data.name
        && let Err(msg) = validate_name(name)
    {
        return Ok(
            HttpResponse::BadRequest().json(ErrorResponse::new(ErrorCode::BadRequest, msg))
        );
    }
    if let Some(ref number) = update_data.student_id
        && let Err(msg) = validate_student_number(number)
    {
        return Ok(
            HttpResponse::BadRequest().json(ErrorResponse::new(ErrorCode::BadRequest, msg))
        );
    }
    if let Some(ref semester) = update_data.id_semester
        && let Err(msg) = validate_semester(semester)
    {
        return Ok(
            HttpResponse::BadRequest().json(ErrorResponse::new(ErrorCode::BadRequest, msg))
        );
    }
    if let Some(ref email) = update_data.email
        && let Err(msg) = validate_email(email)
    {
        return Ok(
            HttpResponse::BadRequest().json(ErrorResponse::new(ErrorCode::BadRequest, msg))
        );
    }

    let storage = service.get_storage(request);

    match storage.update_student(student_id, update_data).await {
        Ok(Some(student)) => Ok(HttpResponse::Ok().json(StudentRead::from(student))),
        Ok(None) => {
            warn!("Student not found for update: {}", student_id);
            Ok(HttpResponse::NotFound().json(ErrorResponse::new(
                ErrorCode::StudentNotFound,
                "Student not found",
            )))
        }
        // 更新引入的学号/邮箱重复同样按冲突处理
        Err(e) if e.is_unique_violation() => {
            Ok(HttpResponse::Conflict().json(ErrorResponse::new(
                ErrorCode::StudentAlreadyExists,
                "student_id or email already exists",
            )))
        }
        Err(e) => Ok(HttpResponse::BadRequest().json(ErrorResponse::new(
            ErrorCode::StudentUpdateFailed,
            format!("Failed to update student: {e}"),
        ))),
    }
}
