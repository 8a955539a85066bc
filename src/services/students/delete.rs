use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, warn};
use uuid::Uuid;

use super::StudentService;
use crate::models::{ErrorCode, ErrorResponse};

pub async fn delete_student(
    service: &StudentService,
    student_id: Uuid,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_student(student_id).await {
        Ok(true) => Ok(HttpResponse::NoContent().finish()),
        Ok(false) => {
            warn!("Student not found for deletion: {}", student_id);
            Ok(HttpResponse::NotFound().json(ErrorResponse::new(
                ErrorCode::StudentNotFound,
                "Student not found",
            )))
        }
        Err(e) => {
            error!("Student deletion failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ErrorResponse::new(
                    ErrorCode::StudentDeleteFailed,
                    format!("Student deletion failed: {e}"),
                )),
            )
        }
    }
}
