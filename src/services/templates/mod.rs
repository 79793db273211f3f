pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::templates::requests::{
    CreateTemplateRequest, TemplateListQuery, UpdateTemplateRequest,
};
use crate::storage::Storage;

pub struct TemplateService {
    storage: Option<Arc<dyn Storage>>,
}

impl TemplateService {
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

    // 获取模板列表
    pub async fn list_templates(
        &self,
        query: TemplateListQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_templates(self, query, request).await
    }

    // 创建模板
    pub async fn create_template(
        &self,
        template_data: CreateTemplateRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_template(self, template_data, request).await
    }

    // 根据ID获取模板
    pub async fn get_template(
        &self,
        template_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_template(self, template_id, request).await
    }

    // 更新模板
    pub async fn update_template(
        &self,
        template_id: i64,
        update_data: UpdateTemplateRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_template(self, template_id, update_data, request).await
    }

    // 删除模板
    pub async fn delete_template(
        &self,
        template_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_template(self, template_id, request).await
    }
}
