use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::templates::requests::{
    CreateTemplateRequest, TemplateListQuery, UpdateTemplateRequest,
};
use crate::services::TemplateService;
use crate::utils::SafeIDI64;

// 懒加载的全局 TemplateService 实例
static TEMPLATE_SERVICE: Lazy<TemplateService> = Lazy::new(TemplateService::new_lazy);

// HTTP处理程序
pub async fn list_templates(
    req: HttpRequest,
    query: web::Query<TemplateListQuery>,
) -> ActixResult<HttpResponse> {
    TEMPLATE_SERVICE
        .list_templates(query.into_inner(), &req)
        .await
}

pub async fn create_template(
    req: HttpRequest,
    template_data: web::Json<CreateTemplateRequest>,
) -> ActixResult<HttpResponse> {
    TEMPLATE_SERVICE
        .create_template(template_data.into_inner(), &req)
        .await
}

pub async fn get_template(req: HttpRequest, template_id: SafeIDI64) -> ActixResult<HttpResponse> {
    TEMPLATE_SERVICE.get_template(template_id.0, &req).await
}

pub async fn update_template(
    req: HttpRequest,
    template_id: SafeIDI64,
    update_data: web::Json<UpdateTemplateRequest>,
) -> ActixResult<HttpResponse> {
    TEMPLATE_SERVICE
        .update_template(template_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_template(
    req: HttpRequest,
    template_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    TEMPLATE_SERVICE.delete_template(template_id.0, &req).await
}

// 配置路由
pub fn configure_template_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/templates")
            .route("", web::get().to(list_templates))
            .route("", web::post().to(create_template))
            .route("/{id}", web::get().to(get_template))
            .route("/{id}", web::put().to(update_template))
            .route("/{id}", web::delete().to(delete_template)),
    );
}
