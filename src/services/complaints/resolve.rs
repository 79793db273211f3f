use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ComplaintService;
use crate::errors::ComplaintSystemError;
use crate::models::{
    ApiResponse, ErrorCode,
    complaints::requests::ResolveComplaintRequest,
    resolutions::responses::ResolutionResponse,
};

pub async fn resolve_complaint(
    service: &ComplaintService,
    complaint_id: i64,
    resolve_data: ResolveComplaintRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.resolve_complaint(complaint_id, resolve_data).await {
        Ok(resolution) => Ok(HttpResponse::Created()
            .json(ApiResponse::success(ResolutionResponse { resolution }, "投诉办结成功"))),
        Err(ComplaintSystemError::NotFound(msg)) => Ok(HttpResponse::NotFound()
            .json(ApiResponse::error_empty(ErrorCode::NotFound, msg))),
        Err(ComplaintSystemError::Conflict(msg)) => Ok(HttpResponse::Conflict().json(
            ApiResponse::error_empty(ErrorCode::ComplaintAlreadyResolved, msg),
        )),
        Err(ComplaintSystemError::Validation(msg)) => Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::InvalidInput, msg))),
        Err(e) => {
            let msg = format!("Complaint resolution failed: {e}");
            error!("{}", msg);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::error_empty(ErrorCode::ComplaintResolveFailed, msg)))
        }
    }
}
