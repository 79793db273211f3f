use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ComplaintService;
use crate::errors::ComplaintSystemError;
use crate::models::{
    ApiResponse, ErrorCode,
    complaints::{requests::ReassignComplaintRequest, responses::ComplaintResponse},
};

pub async fn reassign_complaint(
    service: &ComplaintService,
    complaint_id: i64,
    update_data: ReassignComplaintRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.reassign_complaint(complaint_id, update_data).await {
        Ok(complaint) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ComplaintResponse { complaint },
            "Complaint reassigned successfully",
        ))),
        Err(ComplaintSystemError::NotFound(msg)) => Ok(HttpResponse::NotFound()
            .json(ApiResponse::error_empty(ErrorCode::NotFound, msg))),
        Err(e) => Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
            ErrorCode::ComplaintUpdateFailed,
            format!("Failed to reassign complaint: {e}"),
        ))),
    }
}
