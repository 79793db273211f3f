use serde::Deserialize;
use ts_rs::TS;

// 学生创建请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct CreateStudentRequest {
    pub student_number: String,
    pub name: String,
    pub class_name: String,
    pub guardian_contact: String,
}

// 学生更新请求，省略的字段保持原值
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct UpdateStudentRequest {
    pub student_number: Option<String>,
    pub name: Option<String>,
    pub class_name: Option<String>,
    pub guardian_contact: Option<String>,
}

// 学生列表查询参数
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct StudentListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub class_name: Option<String>,
    pub search: Option<String>,
}
