pub mod accounts;
pub mod auth;
pub mod complaints;
pub mod staff;
pub mod stats;
pub mod students;
pub mod templates;

pub use accounts::AccountService;
pub use auth::AuthService;
pub use complaints::ComplaintService;
pub use staff::StaffService;
pub use stats::StatsService;
pub use students::StudentService;
pub use templates::TemplateService;
