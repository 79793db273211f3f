pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::accounts::requests::{
    AccountListQuery, CreateAccountRequest, UpdateAccountRequest,
};
use crate::storage::Storage;

pub struct AccountService {
    storage: Option<Arc<dyn Storage>>,
}

impl AccountService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 获取账号列表
    pub async fn list_accounts(
        &self,
        query: AccountListQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_accounts(self, query, request).await
    }

    // 创建账号
    pub async fn create_account(
        &self,
        account_data: CreateAccountRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_account(self, account_data, request).await
    }

    // 根据ID获取账号
    pub async fn get_account(
        &self,
        account_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_account(self, account_id, request).await
    }

    // 更新账号信息
    pub async fn update_account(
        &self,
        account_id: i64,
        update_data: UpdateAccountRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_account(self, account_id, update_data, request).await
    }

    // 删除账号
    pub async fn delete_account(
        &self,
        account_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_account(self, account_id, request).await
    }
}
