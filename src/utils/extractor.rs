use std::future::{Ready, ready};

use actix_web::{FromRequest, HttpRequest, HttpResponse, dev::Payload, error::InternalError};
use uuid::Uuid;

use crate::models::{ErrorCode, ErrorResponse};

// 路径参数中的学生 UUID，解析失败时返回统一的 400 响应
#[derive(Debug, Clone, Copy)]
pub struct SafeStudentUuid(pub Uuid);

impl FromRequest for SafeStudentUuid {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let raw = req.match_info().get("id").unwrap_or_default();
        let parsed = Uuid::parse_str(raw).map(SafeStudentUuid).map_err(|_| {
            let response = HttpResponse::BadRequest().json(ErrorResponse::new(
                ErrorCode::BadRequest,
                format!("Invalid student id: {raw}"),
            ));
            InternalError::from_response("invalid student id", response).into()
        });
        ready(parsed)
    }
}
