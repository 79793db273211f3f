use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ComplaintService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_complaint(
    service: &ComplaintService,
    complaint_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_complaint(complaint_id).await {
        Ok(true) => Ok(
            HttpResponse::Ok().json(ApiResponse::success_empty("Complaint deleted successfully"))
        ),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ComplaintNotFound,
            "Complaint not found",
        ))),
        Err(e) => Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
            ErrorCode::ComplaintDeleteFailed,
            format!("Complaint deletion failed: {e}"),
        ))),
    }
}
