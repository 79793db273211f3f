use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::TemplateService;
use crate::errors::ComplaintSystemError;
use crate::models::{
    ApiResponse, ErrorCode,
    templates::{requests::CreateTemplateRequest, responses::TemplateResponse},
};

pub async fn create_template(
    service: &TemplateService,
    template_data: CreateTemplateRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.create_template(template_data).await {
        Ok(template) => Ok(HttpResponse::Created()
            .json(ApiResponse::success(TemplateResponse { template }, "模板创建成功"))),
        Err(ComplaintSystemError::Validation(msg)) => Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::InvalidInput, msg))),
        Err(e) => {
            let msg = format!("Template creation failed: {e}");
            error!("{}", msg);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::TemplateCreationFailed,
                msg,
            )))
        }
    }
}
