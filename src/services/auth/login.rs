use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{
    ApiResponse, ErrorCode,
    auth::{LoginRequest, LoginResponse},
};
use crate::utils::password::verify_password;

use super::AuthService;

pub async fn handle_login(
    service: &AuthService,
    login_request: LoginRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 1. 根据用户名获取账号信息
    match storage.get_account_by_username(&login_request.username).await {
        Ok(Some(account)) => {
            // 2. 验证密码
            if verify_password(&login_request.password, &account.password_hash) {
                // 3. 更新最后登录时间
                let _ = storage.update_last_login(account.id).await;

                tracing::info!("Account {} logged in successfully", account.username);

                let response = LoginResponse {
                    account,
                    created_at: chrono::Utc::now(),
                };

                Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Login successful")))
            } else {
                Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                    ErrorCode::AuthFailed,
                    "Username or password is incorrect",
                )))
            }
        }
        Ok(None) => Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::AuthFailed,
            "Username or password is incorrect",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Login failed: {e}"),
            )),
        ),
    }
}
