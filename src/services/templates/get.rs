use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TemplateService;
use crate::models::{ApiResponse, ErrorCode, templates::responses::TemplateResponse};

pub async fn get_template(
    service: &TemplateService,
    template_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_template_by_id(template_id).await {
        Ok(Some(template)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            TemplateResponse { template },
            "Template retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::TemplateNotFound,
            "Template not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to get template: {e}"),
            )),
        ),
    }
}
