//! 投诉生命周期与引用完整性测试
//!
//! 针对内存 SQLite 运行完整迁移后直接驱动存储层。

use super::SeaOrmStorage;
use crate::errors::ComplaintSystemError;
use crate::models::accounts::entities::{Account, AccountRole};
use crate::models::accounts::requests::CreateAccountRequest;
use crate::models::complaints::entities::{Complaint, ComplaintStatus};
use crate::models::complaints::requests::{
    FileComplaintRequest, ReassignComplaintRequest, ResolveComplaintRequest,
    SetComplaintStatusRequest, UpdateComplaintRequest,
};
use crate::models::staff::entities::Staff;
use crate::models::staff::requests::{CreateStaffRequest, UpdateStaffRequest};
use crate::models::students::entities::Student;
use crate::models::students::requests::CreateStudentRequest;
use crate::models::templates::entities::LetterTemplate;
use crate::models::templates::requests::CreateTemplateRequest;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};

async fn storage() -> SeaOrmStorage {
    // 内存库必须限制为单连接，否则每个池连接各是一张白纸
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1).min_connections(1).sqlx_logging(false);
    let db = Database::connect(opt)
        .await
        .expect("connect in-memory sqlite");
    Migrator::up(&db, None).await.expect("run migrations");
    SeaOrmStorage { db }
}

async fn seed_staff(storage: &SeaOrmStorage, number: &str) -> Staff {
    storage
        .create_staff_impl(CreateStaffRequest {
            staff_number: number.to_string(),
            name: format!("Staff {number}"),
            phone: Some("081234567890".to_string()),
        })
        .await
        .expect("create staff")
}

async fn seed_student(storage: &SeaOrmStorage, number: &str) -> Student {
    storage
        .create_student_impl(CreateStudentRequest {
            student_number: number.to_string(),
            name: format!("Student {number}"),
            class_name: "X IPA 1".to_string(),
            guardian_contact: "083456789012".to_string(),
        })
        .await
        .expect("create student")
}

async fn seed_account(storage: &SeaOrmStorage, username: &str) -> Account {
    storage
        .create_account_impl(CreateAccountRequest {
            username: username.to_string(),
            // 哈希在服务层完成，存储层只收哈希串
            password: "$argon2id$fake-hash".to_string(),
            role: AccountRole::Admin,
        })
        .await
        .expect("create account")
}

async fn seed_template(storage: &SeaOrmStorage, name: &str) -> LetterTemplate {
    storage
        .create_template_impl(CreateTemplateRequest {
            name: name.to_string(),
            body: "Kepada Yth. Orang Tua/Wali dari [NAMA_SISWA]".to_string(),
        })
        .await
        .expect("create template")
}

async fn seed_complaint(storage: &SeaOrmStorage, staff: &Staff, student: &Student) -> Complaint {
    storage
        .file_complaint_impl(FileComplaintRequest {
            staff_id: staff.id,
            student_id: student.id,
            description: "上课迟到并扰乱课堂秩序".to_string(),
        })
        .await
        .expect("file complaint")
}

#[tokio::test]
async fn test_filed_complaint_starts_pending() {
    let storage = storage().await;
    let staff = seed_staff(&storage, "1001").await;
    let student = seed_student(&storage, "2001").await;

    let complaint = seed_complaint(&storage, &staff, &student).await;

    assert_eq!(complaint.status, ComplaintStatus::Pending);
    assert!(complaint.rejection_reason.is_none());
    assert_eq!(complaint.staff_id, staff.id);
    assert_eq!(complaint.student_id, student.id);
}

#[tokio::test]
async fn test_file_complaint_requires_description_and_live_fks() {
    let storage = storage().await;
    let staff = seed_staff(&storage, "1001").await;
    let student = seed_student(&storage, "2001").await;

    let err = storage
        .file_complaint_impl(FileComplaintRequest {
            staff_id: staff.id,
            student_id: student.id,
            description: "   ".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ComplaintSystemError::Validation(_)));

    let err = storage
        .file_complaint_impl(FileComplaintRequest {
            staff_id: 9999,
            student_id: student.id,
            description: "描述".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ComplaintSystemError::NotFound(_)));

    let err = storage
        .file_complaint_impl(FileComplaintRequest {
            staff_id: staff.id,
            student_id: 9999,
            description: "描述".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ComplaintSystemError::NotFound(_)));
}

#[tokio::test]
async fn test_reject_requires_reason() {
    let storage = storage().await;
    let staff = seed_staff(&storage, "1001").await;
    let student = seed_student(&storage, "2001").await;
    let complaint = seed_complaint(&storage, &staff, &student).await;

    // 没有原因不允许驳回
    let err = storage
        .set_complaint_status_impl(
            complaint.id,
            SetComplaintStatusRequest {
                status: ComplaintStatus::Rejected,
                rejection_reason: None,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ComplaintSystemError::Validation(_)));

    // 空白原因同样被拒
    let err = storage
        .set_complaint_status_impl(
            complaint.id,
            SetComplaintStatusRequest {
                status: ComplaintStatus::Rejected,
                rejection_reason: Some("".to_string()),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ComplaintSystemError::Validation(_)));

    // 带原因驳回成功
    let rejected = storage
        .set_complaint_status_impl(
            complaint.id,
            SetComplaintStatusRequest {
                status: ComplaintStatus::Rejected,
                rejection_reason: Some("证据不足".to_string()),
            },
        )
        .await
        .expect("reject complaint");
    assert_eq!(rejected.status, ComplaintStatus::Rejected);
    assert_eq!(rejected.rejection_reason.as_deref(), Some("证据不足"));
}

#[tokio::test]
async fn test_non_rejected_status_clears_reason() {
    let storage = storage().await;
    let staff = seed_staff(&storage, "1001").await;
    let student = seed_student(&storage, "2001").await;
    let complaint = seed_complaint(&storage, &staff, &student).await;

    storage
        .set_complaint_status_impl(
            complaint.id,
            SetComplaintStatusRequest {
                status: ComplaintStatus::Rejected,
                rejection_reason: Some("证据不足".to_string()),
            },
        )
        .await
        .expect("reject complaint");

    let approved = storage
        .set_complaint_status_impl(
            complaint.id,
            SetComplaintStatusRequest {
                status: ComplaintStatus::Approved,
                rejection_reason: None,
            },
        )
        .await
        .expect("approve complaint");

    assert_eq!(approved.status, ComplaintStatus::Approved);
    assert!(approved.rejection_reason.is_none());
}

#[tokio::test]
async fn test_status_transitions_are_unrestricted() {
    let storage = storage().await;
    let staff = seed_staff(&storage, "1001").await;
    let student = seed_student(&storage, "2001").await;
    let complaint = seed_complaint(&storage, &staff, &student).await;

    // 管理员纠错：resolved 也可以被改回 pending
    for status in [
        ComplaintStatus::Resolved,
        ComplaintStatus::Pending,
        ComplaintStatus::Approved,
    ] {
        let updated = storage
            .set_complaint_status_impl(
                complaint.id,
                SetComplaintStatusRequest {
                    status,
                    rejection_reason: None,
                },
            )
            .await
            .expect("set status");
        assert_eq!(updated.status, status);
    }
}

#[tokio::test]
async fn test_resolve_twice_conflicts() {
    let storage = storage().await;
    let staff = seed_staff(&storage, "1001").await;
    let student = seed_student(&storage, "2001").await;
    let account = seed_account(&storage, "admin").await;
    let template = seed_template(&storage, "Surat Peringatan").await;
    let complaint = seed_complaint(&storage, &staff, &student).await;

    let resolution = storage
        .resolve_complaint_impl(
            complaint.id,
            ResolveComplaintRequest {
                template_id: template.id,
                account_id: account.id,
                admin_note: "已约谈家长".to_string(),
            },
        )
        .await
        .expect("resolve complaint");
    assert_eq!(resolution.complaint_id, complaint.id);
    assert_eq!(resolution.template_id, template.id);

    let resolved = storage
        .get_complaint_by_id_impl(complaint.id)
        .await
        .expect("get complaint")
        .expect("complaint exists");
    assert_eq!(resolved.status, ComplaintStatus::Resolved);

    // 第二次办结必须失败，且第一条处理记录保持不变
    let err = storage
        .resolve_complaint_impl(
            complaint.id,
            ResolveComplaintRequest {
                template_id: template.id,
                account_id: account.id,
                admin_note: "重复办结".to_string(),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ComplaintSystemError::Conflict(_)));

    let unchanged = storage
        .get_resolution_by_complaint_id_impl(complaint.id)
        .await
        .expect("get resolution")
        .expect("resolution exists");
    assert_eq!(unchanged.id, resolution.id);
    assert_eq!(unchanged.admin_note, "已约谈家长");
}

#[tokio::test]
async fn test_resolve_validates_references() {
    let storage = storage().await;
    let staff = seed_staff(&storage, "1001").await;
    let student = seed_student(&storage, "2001").await;
    let account = seed_account(&storage, "admin").await;
    let template = seed_template(&storage, "Surat Panggilan").await;
    let complaint = seed_complaint(&storage, &staff, &student).await;

    let err = storage
        .resolve_complaint_impl(
            9999,
            ResolveComplaintRequest {
                template_id: template.id,
                account_id: account.id,
                admin_note: "备注".to_string(),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ComplaintSystemError::NotFound(_)));

    let err = storage
        .resolve_complaint_impl(
            complaint.id,
            ResolveComplaintRequest {
                template_id: 9999,
                account_id: account.id,
                admin_note: "备注".to_string(),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ComplaintSystemError::NotFound(_)));

    let err = storage
        .resolve_complaint_impl(
            complaint.id,
            ResolveComplaintRequest {
                template_id: template.id,
                account_id: 9999,
                admin_note: "备注".to_string(),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ComplaintSystemError::NotFound(_)));

    // 失败的办结不得遗留处理记录或状态变化
    let detail = storage
        .get_complaint_detail_impl(complaint.id)
        .await
        .expect("get detail")
        .expect("detail exists");
    assert_eq!(detail.complaint.status, ComplaintStatus::Pending);
    assert!(detail.resolution.is_none());
}

#[tokio::test]
async fn test_dependent_count_guards() {
    let storage = storage().await;
    let staff = seed_staff(&storage, "1001").await;
    let student = seed_student(&storage, "2001").await;
    let account = seed_account(&storage, "admin").await;
    let template = seed_template(&storage, "Surat Peringatan").await;
    let complaint = seed_complaint(&storage, &staff, &student).await;

    storage
        .resolve_complaint_impl(
            complaint.id,
            ResolveComplaintRequest {
                template_id: template.id,
                account_id: account.id,
                admin_note: "已处理".to_string(),
            },
        )
        .await
        .expect("resolve complaint");

    // 被引用的教职工/学生/模板/账号都不可删除
    let err = storage.delete_staff_impl(staff.id).await.unwrap_err();
    assert!(matches!(err, ComplaintSystemError::Constrained(_)));

    let err = storage.delete_student_impl(student.id).await.unwrap_err();
    assert!(matches!(err, ComplaintSystemError::Constrained(_)));

    let err = storage.delete_template_impl(template.id).await.unwrap_err();
    assert!(matches!(err, ComplaintSystemError::Constrained(_)));

    let err = storage.delete_account_impl(account.id).await.unwrap_err();
    assert!(matches!(err, ComplaintSystemError::Constrained(_)));

    // 删除投诉（连同处理记录）后守卫放行
    assert!(storage
        .delete_complaint_impl(complaint.id)
        .await
        .expect("delete complaint"));

    assert!(storage.delete_staff_impl(staff.id).await.expect("delete staff"));
    assert!(storage
        .delete_student_impl(student.id)
        .await
        .expect("delete student"));
    assert!(storage
        .delete_template_impl(template.id)
        .await
        .expect("delete template"));
    assert!(storage
        .delete_account_impl(account.id)
        .await
        .expect("delete account"));
}

#[tokio::test]
async fn test_delete_complaint_cascades_resolution() {
    let storage = storage().await;
    let staff = seed_staff(&storage, "1001").await;
    let student = seed_student(&storage, "2001").await;
    let account = seed_account(&storage, "admin").await;
    let template = seed_template(&storage, "Surat Peringatan").await;
    let complaint = seed_complaint(&storage, &staff, &student).await;

    storage
        .resolve_complaint_impl(
            complaint.id,
            ResolveComplaintRequest {
                template_id: template.id,
                account_id: account.id,
                admin_note: "已处理".to_string(),
            },
        )
        .await
        .expect("resolve complaint");

    assert!(storage
        .delete_complaint_impl(complaint.id)
        .await
        .expect("delete complaint"));

    assert!(storage
        .get_complaint_by_id_impl(complaint.id)
        .await
        .expect("get complaint")
        .is_none());
    assert!(storage
        .get_resolution_by_complaint_id_impl(complaint.id)
        .await
        .expect("get resolution")
        .is_none());

    // 再删一次：目标已不存在
    assert!(!storage
        .delete_complaint_impl(complaint.id)
        .await
        .expect("delete absent complaint"));
}

#[tokio::test]
async fn test_staff_number_uniqueness() {
    let storage = storage().await;
    let _first = seed_staff(&storage, "1001").await;
    let second = seed_staff(&storage, "1002").await;

    // 创建重复工号
    let err = storage
        .create_staff_impl(CreateStaffRequest {
            staff_number: "1001".to_string(),
            name: "Another".to_string(),
            phone: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ComplaintSystemError::Conflict(_)));

    // 把另一人的工号改成已占用值
    let err = storage
        .update_staff_impl(
            second.id,
            UpdateStaffRequest {
                staff_number: Some("1001".to_string()),
                name: None,
                phone: None,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ComplaintSystemError::Conflict(_)));

    // 改成自己现有的工号不算冲突
    let unchanged = storage
        .update_staff_impl(
            second.id,
            UpdateStaffRequest {
                staff_number: Some("1002".to_string()),
                name: None,
                phone: None,
            },
        )
        .await
        .expect("self update")
        .expect("staff exists");
    assert_eq!(unchanged.staff_number, "1002");
}

#[tokio::test]
async fn test_account_username_uniqueness() {
    let storage = storage().await;
    let _admin = seed_account(&storage, "admin").await;

    let err = storage
        .create_account_impl(CreateAccountRequest {
            username: "admin".to_string(),
            password: "$argon2id$other-hash".to_string(),
            role: AccountRole::Staff,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ComplaintSystemError::Conflict(_)));
}

#[tokio::test]
async fn test_update_retains_omitted_fields() {
    let storage = storage().await;
    let staff = seed_staff(&storage, "1001").await;

    let updated = storage
        .update_staff_impl(
            staff.id,
            UpdateStaffRequest {
                staff_number: None,
                name: Some("Budi Santoso, S.Pd".to_string()),
                phone: None,
            },
        )
        .await
        .expect("update staff")
        .expect("staff exists");

    assert_eq!(updated.staff_number, "1001");
    assert_eq!(updated.name, "Budi Santoso, S.Pd");
    assert_eq!(updated.phone.as_deref(), Some("081234567890"));

    // 显式传空串清除可选字段
    let cleared = storage
        .update_staff_impl(
            staff.id,
            UpdateStaffRequest {
                staff_number: None,
                name: None,
                phone: Some("".to_string()),
            },
        )
        .await
        .expect("update staff")
        .expect("staff exists");
    assert!(cleared.phone.is_none());
}

#[tokio::test]
async fn test_update_complaint_rejects_empty_description() {
    let storage = storage().await;
    let staff = seed_staff(&storage, "1001").await;
    let student = seed_student(&storage, "2001").await;
    let complaint = seed_complaint(&storage, &staff, &student).await;

    let err = storage
        .update_complaint_impl(
            complaint.id,
            UpdateComplaintRequest {
                description: Some("  ".to_string()),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ComplaintSystemError::Validation(_)));

    let updated = storage
        .update_complaint_impl(
            complaint.id,
            UpdateComplaintRequest {
                description: Some("多次未完成作业".to_string()),
            },
        )
        .await
        .expect("update complaint")
        .expect("complaint exists");
    assert_eq!(updated.description, "多次未完成作业");
}

#[tokio::test]
async fn test_reassign_validates_supplied_fks() {
    let storage = storage().await;
    let staff = seed_staff(&storage, "1001").await;
    let other_staff = seed_staff(&storage, "1002").await;
    let student = seed_student(&storage, "2001").await;
    let complaint = seed_complaint(&storage, &staff, &student).await;

    // 改派到不存在的学生
    let err = storage
        .reassign_complaint_impl(
            complaint.id,
            ReassignComplaintRequest {
                staff_id: None,
                student_id: Some(9999),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ComplaintSystemError::NotFound(_)));

    // 失败的改派不改变投诉
    let unchanged = storage
        .get_complaint_by_id_impl(complaint.id)
        .await
        .expect("get complaint")
        .expect("complaint exists");
    assert_eq!(unchanged.staff_id, staff.id);
    assert_eq!(unchanged.student_id, student.id);

    // 只改派教职工，学生保持原值
    let reassigned = storage
        .reassign_complaint_impl(
            complaint.id,
            ReassignComplaintRequest {
                staff_id: Some(other_staff.id),
                student_id: None,
            },
        )
        .await
        .expect("reassign complaint");
    assert_eq!(reassigned.staff_id, other_staff.id);
    assert_eq!(reassigned.student_id, student.id);
}

#[tokio::test]
async fn test_list_complaints_filters_by_status() {
    let storage = storage().await;
    let staff = seed_staff(&storage, "1001").await;
    let student = seed_student(&storage, "2001").await;

    let c1 = seed_complaint(&storage, &staff, &student).await;
    let _c2 = seed_complaint(&storage, &staff, &student).await;

    storage
        .set_complaint_status_impl(
            c1.id,
            SetComplaintStatusRequest {
                status: ComplaintStatus::Approved,
                rejection_reason: None,
            },
        )
        .await
        .expect("approve complaint");

    let approved = storage
        .list_complaints_with_pagination_impl(crate::models::complaints::requests::ComplaintListQuery {
            page: None,
            size: None,
            status: Some(ComplaintStatus::Approved),
            staff_id: None,
            student_id: None,
            search: None,
        })
        .await
        .expect("list complaints");
    assert_eq!(approved.pagination.total, 1);
    assert_eq!(approved.items.len(), 1);
    assert_eq!(approved.items[0].id, c1.id);

    let all = storage
        .list_complaints_with_pagination_impl(crate::models::complaints::requests::ComplaintListQuery {
            page: None,
            size: None,
            status: None,
            staff_id: None,
            student_id: None,
            search: None,
        })
        .await
        .expect("list complaints");
    assert_eq!(all.pagination.total, 2);
}

#[tokio::test]
async fn test_stats_overview_counts() {
    let storage = storage().await;
    let staff = seed_staff(&storage, "1001").await;
    let student = seed_student(&storage, "2001").await;
    let account = seed_account(&storage, "admin").await;
    let template = seed_template(&storage, "Surat Peringatan").await;

    let _pending = seed_complaint(&storage, &staff, &student).await;
    let approved = seed_complaint(&storage, &staff, &student).await;
    let resolved = seed_complaint(&storage, &staff, &student).await;

    storage
        .set_complaint_status_impl(
            approved.id,
            SetComplaintStatusRequest {
                status: ComplaintStatus::Approved,
                rejection_reason: None,
            },
        )
        .await
        .expect("approve complaint");

    storage
        .resolve_complaint_impl(
            resolved.id,
            ResolveComplaintRequest {
                template_id: template.id,
                account_id: account.id,
                admin_note: "已处理".to_string(),
            },
        )
        .await
        .expect("resolve complaint");

    let overview = storage.get_stats_overview_impl().await.expect("stats");
    assert_eq!(overview.total_accounts, 1);
    assert_eq!(overview.total_staff, 1);
    assert_eq!(overview.total_students, 1);
    assert_eq!(overview.total_complaints, 3);
    assert_eq!(overview.complaints_by_status.pending, 1);
    assert_eq!(overview.complaints_by_status.approved, 1);
    assert_eq!(overview.complaints_by_status.rejected, 0);
    assert_eq!(overview.complaints_by_status.resolved, 1);

    let sum = overview.complaints_by_status.pending
        + overview.complaints_by_status.approved
        + overview.complaints_by_status.rejected
        + overview.complaints_by_status.resolved;
    assert_eq!(sum, overview.total_complaints);
}

#[tokio::test]
async fn test_full_lifecycle_scenario() {
    let storage = storage().await;
    let staff = seed_staff(&storage, "1001").await;
    let student = seed_student(&storage, "2001").await;
    let account = seed_account(&storage, "admin").await;
    let template = seed_template(&storage, "Surat Panggilan Orang Tua").await;

    // 提交 → 批准 → 办结 → 查询详情
    let complaint = seed_complaint(&storage, &staff, &student).await;

    storage
        .set_complaint_status_impl(
            complaint.id,
            SetComplaintStatusRequest {
                status: ComplaintStatus::Approved,
                rejection_reason: None,
            },
        )
        .await
        .expect("approve complaint");

    storage
        .resolve_complaint_impl(
            complaint.id,
            ResolveComplaintRequest {
                template_id: template.id,
                account_id: account.id,
                admin_note: "已发出家长约谈函".to_string(),
            },
        )
        .await
        .expect("resolve complaint");

    let detail = storage
        .get_complaint_detail_impl(complaint.id)
        .await
        .expect("get detail")
        .expect("detail exists");

    assert_eq!(detail.complaint.status, ComplaintStatus::Resolved);
    assert_eq!(detail.staff.id, staff.id);
    assert_eq!(detail.student.id, student.id);

    let resolution = detail.resolution.expect("resolution attached");
    assert_eq!(resolution.template_id, template.id);
    assert_eq!(resolution.account_id, account.id);
    assert_eq!(resolution.admin_note, "已发出家长约谈函");
}
