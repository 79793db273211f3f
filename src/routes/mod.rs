pub mod accounts;

pub mod auth;

pub mod complaints;

pub mod staff;

pub mod stats;

pub mod students;

pub mod templates;

pub use accounts::configure_account_routes;
pub use auth::configure_auth_routes;
pub use complaints::configure_complaint_routes;
pub use staff::configure_staff_routes;
pub use stats::configure_stats_routes;
pub use students::configure_student_routes;
pub use templates::configure_template_routes;
