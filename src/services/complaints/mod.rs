pub mod delete;
pub mod file;
pub mod get;
pub mod list;
pub mod reassign;
pub mod resolve;
pub mod set_status;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::complaints::requests::{
    ComplaintListQuery, FileComplaintRequest, ReassignComplaintRequest, ResolveComplaintRequest,
    SetComplaintStatusRequest, UpdateComplaintRequest,
};
use crate::storage::Storage;

pub struct ComplaintService {
    storage: Option<Arc<dyn Storage>>,
}

impl ComplaintService {
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

    // 获取投诉列表
    pub async fn list_complaints(
        &self,
        query: ComplaintListQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_complaints(self, query, request).await
    }

    // 提交投诉
    pub async fn file_complaint(
        &self,
        complaint_data: FileComplaintRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        file::file_complaint(self, complaint_data, request).await
    }

    // 获取投诉详情
    pub async fn get_complaint(
        &self,
        complaint_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_complaint(self, complaint_id, request).await
    }

    // 修改投诉描述
    pub async fn update_complaint(
        &self,
        complaint_id: i64,
        update_data: UpdateComplaintRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_complaint(self, complaint_id, update_data, request).await
    }

    // 变更投诉状态
    pub async fn set_complaint_status(
        &self,
        complaint_id: i64,
        update_data: SetComplaintStatusRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        set_status::set_complaint_status(self, complaint_id, update_data, request).await
    }

    // 改派投诉
    pub async fn reassign_complaint(
        &self,
        complaint_id: i64,
        update_data: ReassignComplaintRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        reassign::reassign_complaint(self, complaint_id, update_data, request).await
    }

    // 办结投诉
    pub async fn resolve_complaint(
        &self,
        complaint_id: i64,
        resolve_data: ResolveComplaintRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        resolve::resolve_complaint(self, complaint_id, resolve_data, request).await
    }

    // 删除投诉（连同处理记录）
    pub async fn delete_complaint(
        &self,
        complaint_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_complaint(self, complaint_id, request).await
    }
}
