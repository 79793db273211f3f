use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TemplateService;
use crate::errors::ComplaintSystemError;
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_template(
    service: &TemplateService,
    template_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_template(template_id).await {
        Ok(true) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Template deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::TemplateNotFound,
            "Template not found",
        ))),
        Err(ComplaintSystemError::Constrained(msg)) => Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::TemplateInUse, msg))),
        Err(e) => Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
            ErrorCode::TemplateDeleteFailed,
            format!("Template deletion failed: {e}"),
        ))),
    }
}
