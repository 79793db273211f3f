use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ComplaintService;
use crate::errors::ComplaintSystemError;
use crate::models::{
    ApiResponse, ErrorCode,
    complaints::{requests::UpdateComplaintRequest, responses::ComplaintResponse},
};

pub async fn update_complaint(
    service: &ComplaintService,
    complaint_id: i64,
    update_data: UpdateComplaintRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.update_complaint(complaint_id, update_data).await {
        Ok(Some(complaint)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ComplaintResponse { complaint },
            "Complaint updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ComplaintNotFound,
            "Complaint not found",
        ))),
        Err(ComplaintSystemError::Validation(msg)) => Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::InvalidInput, msg))),
        Err(e) => Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
            ErrorCode::ComplaintUpdateFailed,
            format!("Failed to update complaint: {e}"),
        ))),
    }
}
