use serde::Deserialize;
use ts_rs::TS;

// 教职工创建请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/staff.ts")]
pub struct CreateStaffRequest {
    pub staff_number: String,
    pub name: String,
    pub phone: Option<String>,
}

// 教职工更新请求，phone 传空字符串表示清除
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/staff.ts")]
pub struct UpdateStaffRequest {
    pub staff_number: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
}

// 教职工列表查询参数
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/staff.ts")]
pub struct StaffListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub search: Option<String>,
}
