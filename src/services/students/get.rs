use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;
use uuid::Uuid;

use super::StudentService;
use crate::models::students::responses::StudentRead;
use crate::models::{ErrorCode, ErrorResponse};

pub async fn get_student(
    service: &StudentService,
    student_id: Uuid,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_student_by_id(student_id).await {
        Ok(Some(student)) => Ok(HttpResponse::Ok().json(StudentRead::from(student))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ErrorResponse::new(
            ErrorCode::StudentNotFound,
            "Student not found",
        ))),
        Err(e) => {
            error!("Failed to get student: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ErrorResponse::new(
                    ErrorCode::InternalServerError,
                    format!("Failed to get student: {e}"),
                )),
            )
        }
    }
}
