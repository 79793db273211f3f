//! 预导入模块，方便使用

pub use super::accounts::{
    ActiveModel as AccountActiveModel, Entity as Accounts, Model as AccountModel,
};
pub use super::complaints::{
    ActiveModel as ComplaintActiveModel, Entity as Complaints, Model as ComplaintModel,
};
pub use super::letter_templates::{
    ActiveModel as LetterTemplateActiveModel, Entity as LetterTemplates,
    Model as LetterTemplateModel,
};
pub use super::resolutions::{
    ActiveModel as ResolutionActiveModel, Entity as Resolutions, Model as ResolutionModel,
};
pub use super::staff::{ActiveModel as StaffActiveModel, Entity as StaffMembers, Model as StaffModel};
pub use super::students::{
    ActiveModel as StudentActiveModel, Entity as Students, Model as StudentModel,
};
