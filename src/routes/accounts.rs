use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::accounts::requests::{
    AccountListQuery, CreateAccountRequest, UpdateAccountRequest,
};
use crate::services::AccountService;
use crate::utils::SafeIDI64;

// 懒加载的全局 AccountService 实例
static ACCOUNT_SERVICE: Lazy<AccountService> = Lazy::new(AccountService::new_lazy);

// HTTP处理程序
pub async fn list_accounts(
    req: HttpRequest,
    query: web::Query<AccountListQuery>,
) -> ActixResult<HttpResponse> {
    ACCOUNT_SERVICE.list_accounts(query.into_inner(), &req).await
}

pub async fn create_account(
    req: HttpRequest,
    account_data: web::Json<CreateAccountRequest>,
) -> ActixResult<HttpResponse> {
    ACCOUNT_SERVICE
        .create_account(account_data.into_inner(), &req)
        .await
}

pub async fn get_account(req: HttpRequest, account_id: SafeIDI64) -> ActixResult<HttpResponse> {
    ACCOUNT_SERVICE.get_account(account_id.0, &req).await
}

pub async fn update_account(
    req: HttpRequest,
    account_id: SafeIDI64,
    update_data: web::Json<UpdateAccountRequest>,
) -> ActixResult<HttpResponse> {
    ACCOUNT_SERVICE
        .update_account(account_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_account(req: HttpRequest, account_id: SafeIDI64) -> ActixResult<HttpResponse> {
    ACCOUNT_SERVICE.delete_account(account_id.0, &req).await
}

// 配置路由
pub fn configure_account_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/accounts")
            .route("", web::get().to(list_accounts))
            .route("", web::post().to(create_account))
            .route("/{id}", web::get().to(get_account))
            .route("/{id}", web::put().to(update_account))
            .route("/{id}", web::delete().to(delete_account)),
    );
}
