use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::StudentService;
use crate::models::{ErrorCode, ErrorResponse, PageQuery, paginate};
use crate::models::students::responses::StudentRead;

pub async fn list_students(
    service: &StudentService,
    query: PageQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage
        .list_students_with_pagination(query.offset, query.limit)
        .await
    {
        Ok((students, total)) => {
            let response = paginate(students, total, query.offset, query.limit, StudentRead::from);
            Ok(HttpResponse::Ok().json(response))
        }
        Err(e) => {
            error!("Failed to retrieve student list: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ErrorResponse::new(
                    ErrorCode::InternalServerError,
                    format!("Failed to retrieve student list: {e}"),
                )),
            )
        }
    }
}
