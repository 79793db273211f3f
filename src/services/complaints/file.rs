use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ComplaintService;
use crate::errors::ComplaintSystemError;
use crate::models::{
    ApiResponse, ErrorCode,
    complaints::{requests::FileComplaintRequest, responses::ComplaintResponse},
};

pub async fn file_complaint(
    service: &ComplaintService,
    complaint_data: FileComplaintRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.file_complaint(complaint_data).await {
        Ok(complaint) => Ok(HttpResponse::Created()
            .json(ApiResponse::success(ComplaintResponse { complaint }, "投诉提交成功"))),
        Err(ComplaintSystemError::NotFound(msg)) => Ok(HttpResponse::NotFound()
            .json(ApiResponse::error_empty(ErrorCode::NotFound, msg))),
        Err(ComplaintSystemError::Validation(msg)) => Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::InvalidInput, msg))),
        Err(e) => {
            let msg = format!("Complaint filing failed: {e}");
            error!("{}", msg);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::ComplaintCreationFailed,
                msg,
            )))
        }
    }
}
