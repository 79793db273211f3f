use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::StaffService;
use crate::errors::ComplaintSystemError;
use crate::models::{
    ApiResponse, ErrorCode,
    staff::{requests::CreateStaffRequest, responses::StaffResponse},
};

pub async fn create_staff(
    service: &StaffService,
    staff_data: CreateStaffRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.create_staff(staff_data).await {
        Ok(staff) => Ok(HttpResponse::Created()
            .json(ApiResponse::success(StaffResponse { staff }, "教职工创建成功"))),
        Err(ComplaintSystemError::Conflict(msg)) => Ok(HttpResponse::Conflict()
            .json(ApiResponse::error_empty(ErrorCode::StaffNumberExists, msg))),
        Err(ComplaintSystemError::Validation(msg)) => Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::InvalidInput, msg))),
        Err(e) => {
            let msg = format!("Staff creation failed: {e}");
            error!("{}", msg);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::error_empty(ErrorCode::StaffCreationFailed, msg)))
        }
    }
}
