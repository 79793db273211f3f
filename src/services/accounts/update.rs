use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AccountService;
use crate::errors::ComplaintSystemError;
use crate::models::{
    ApiResponse, ErrorCode,
    accounts::{requests::UpdateAccountRequest, responses::AccountResponse},
};
use crate::utils::validate::{validate_password_simple, validate_username};

pub async fn update_account(
    service: &AccountService,
    account_id: i64,
    mut update_data: UpdateAccountRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Some(ref username) = update_data.username
        && let Err(msg) = validate_username(username)
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::AccountUsernameInvalid,
            msg,
        )));
    }

    if let Some(password) = update_data.password {
        if let Err(msg) = validate_password_simple(&password) {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::AccountPasswordWeak, msg)));
        }
        match crate::utils::password::hash_password(&password) {
            Ok(hash) => update_data.password = Some(hash),
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("Password hashing failed: {e}"),
                    )),
                );
            }
        }
    }

    let storage = service.get_storage(request);

    match storage.update_account(account_id, update_data).await {
        Ok(Some(account)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            AccountResponse { account },
            "Account updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AccountNotFound,
            "Account not found",
        ))),
        Err(ComplaintSystemError::Conflict(msg)) => Ok(HttpResponse::Conflict().json(
            ApiResponse::error_empty(ErrorCode::AccountAlreadyExists, msg),
        )),
        Err(ComplaintSystemError::Validation(msg)) => Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::InvalidInput, msg))),
        Err(e) => Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
            ErrorCode::AccountUpdateFailed,
            format!("Failed to update account: {e}"),
        ))),
    }
}
