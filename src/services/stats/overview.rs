use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StatsService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_overview(
    service: &StatsService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_stats_overview().await {
        Ok(overview) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            overview,
            "Statistics retrieved successfully",
        ))),
        // 统计只读，存储不可达时以 503 上报
        Err(e) => Ok(
            HttpResponse::ServiceUnavailable().json(ApiResponse::error_empty(
                ErrorCode::StatsQueryFailed,
                format!("Failed to fetch statistics: {e}"),
            )),
        ),
    }
}
