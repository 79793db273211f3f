use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TemplateService;
use crate::errors::ComplaintSystemError;
use crate::models::{
    ApiResponse, ErrorCode,
    templates::{requests::UpdateTemplateRequest, responses::TemplateResponse},
};

pub async fn update_template(
    service: &TemplateService,
    template_id: i64,
    update_data: UpdateTemplateRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.update_template(template_id, update_data).await {
        Ok(Some(template)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            TemplateResponse { template },
            "Template updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::TemplateNotFound,
            "Template not found",
        ))),
        Err(ComplaintSystemError::Validation(msg)) => Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::InvalidInput, msg))),
        Err(e) => Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
            ErrorCode::TemplateUpdateFailed,
            format!("Failed to update template: {e}"),
        ))),
    }
}
