use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::complaints::requests::{
    ComplaintListQuery, FileComplaintRequest, ReassignComplaintRequest, ResolveComplaintRequest,
    SetComplaintStatusRequest, UpdateComplaintRequest,
};
use crate::services::ComplaintService;
use crate::utils::SafeIDI64;

// 懒加载的全局 ComplaintService 实例
static COMPLAINT_SERVICE: Lazy<ComplaintService> = Lazy::new(ComplaintService::new_lazy);

// HTTP处理程序
pub async fn list_complaints(
    req: HttpRequest,
    query: web::Query<ComplaintListQuery>,
) -> ActixResult<HttpResponse> {
    COMPLAINT_SERVICE
        .list_complaints(query.into_inner(), &req)
        .await
}

pub async fn file_complaint(
    req: HttpRequest,
    complaint_data: web::Json<FileComplaintRequest>,
) -> ActixResult<HttpResponse> {
    COMPLAINT_SERVICE
        .file_complaint(complaint_data.into_inner(), &req)
        .await
}

pub async fn get_complaint(req: HttpRequest, complaint_id: SafeIDI64) -> ActixResult<HttpResponse> {
    COMPLAINT_SERVICE.get_complaint(complaint_id.0, &req).await
}

pub async fn update_complaint(
    req: HttpRequest,
    complaint_id: SafeIDI64,
    update_data: web::Json<UpdateComplaintRequest>,
) -> ActixResult<HttpResponse> {
    COMPLAINT_SERVICE
        .update_complaint(complaint_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn set_complaint_status(
    req: HttpRequest,
    complaint_id: SafeIDI64,
    update_data: web::Json<SetComplaintStatusRequest>,
) -> ActixResult<HttpResponse> {
    COMPLAINT_SERVICE
        .set_complaint_status(complaint_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn reassign_complaint(
    req: HttpRequest,
    complaint_id: SafeIDI64,
    update_data: web::Json<ReassignComplaintRequest>,
) -> ActixResult<HttpResponse> {
    COMPLAINT_SERVICE
        .reassign_complaint(complaint_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn resolve_complaint(
    req: HttpRequest,
    complaint_id: SafeIDI64,
    resolve_data: web::Json<ResolveComplaintRequest>,
) -> ActixResult<HttpResponse> {
    COMPLAINT_SERVICE
        .resolve_complaint(complaint_id.0, resolve_data.into_inner(), &req)
        .await
}

pub async fn delete_complaint(
    req: HttpRequest,
    complaint_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    COMPLAINT_SERVICE
        .delete_complaint(complaint_id.0, &req)
        .await
}

// 配置路由
pub fn configure_complaint_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/complaints")
            .route("", web::get().to(list_complaints))
            .route("", web::post().to(file_complaint))
            .route("/{id}", web::get().to(get_complaint))
            .route("/{id}", web::put().to(update_complaint))
            .route("/{id}", web::delete().to(delete_complaint))
            .route("/{id}/status", web::put().to(set_complaint_status))
            .route("/{id}/assignment", web::put().to(reassign_complaint))
            .route("/{id}/resolution", web::post().to(resolve_complaint)),
    );
}
