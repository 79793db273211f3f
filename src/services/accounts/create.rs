use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::AccountService;
use crate::errors::ComplaintSystemError;
use crate::models::{
    ApiResponse, ErrorCode,
    accounts::{requests::CreateAccountRequest, responses::AccountResponse},
};
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_password_simple, validate_username};

pub async fn create_account(
    service: &AccountService,
    mut account_data: CreateAccountRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    // 验证用户名
    if let Err(msg) = validate_username(&account_data.username) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::AccountUsernameInvalid,
            msg,
        )));
    }

    // 验证密码强度
    if let Err(msg) = validate_password_simple(&account_data.password) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::AccountPasswordWeak, msg)));
    }

    account_data.password = match hash_password(&account_data.password) {
        Ok(hash) => hash,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Password hashing failed: {e}"),
                )),
            );
        }
    };

    let storage = service.get_storage(request);

    match storage.create_account(account_data).await {
        Ok(account) => Ok(HttpResponse::Created()
            .json(ApiResponse::success(AccountResponse { account }, "账号创建成功"))),
        Err(ComplaintSystemError::Conflict(msg)) => Ok(HttpResponse::Conflict().json(
            ApiResponse::error_empty(ErrorCode::AccountAlreadyExists, msg),
        )),
        Err(ComplaintSystemError::Validation(msg)) => Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::InvalidInput, msg))),
        Err(e) => {
            let msg = format!("Account creation failed: {e}");
            error!("{}", msg);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::error_empty(ErrorCode::AccountCreationFailed, msg)))
        }
    }
}
