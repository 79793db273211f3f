use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ComplaintService;
use crate::errors::ComplaintSystemError;
use crate::models::{
    ApiResponse, ErrorCode,
    complaints::{requests::SetComplaintStatusRequest, responses::ComplaintResponse},
};

pub async fn set_complaint_status(
    service: &ComplaintService,
    complaint_id: i64,
    update_data: SetComplaintStatusRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage
        .set_complaint_status(complaint_id, update_data)
        .await
    {
        Ok(complaint) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ComplaintResponse { complaint },
            "Complaint status updated successfully",
        ))),
        Err(ComplaintSystemError::NotFound(msg)) => Ok(HttpResponse::NotFound()
            .json(ApiResponse::error_empty(ErrorCode::ComplaintNotFound, msg))),
        Err(ComplaintSystemError::Validation(msg)) => Ok(HttpResponse::BadRequest().json(
            ApiResponse::error_empty(ErrorCode::RejectionReasonRequired, msg),
        )),
        Err(e) => Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
            ErrorCode::ComplaintUpdateFailed,
            format!("Failed to update complaint status: {e}"),
        ))),
    }
}
