pub use super::form_submissions::Entity as FormSubmissions;
pub use super::model_images::Entity as ModelImages;
pub use super::models::Entity as Models;
pub use super::users::Entity as Users;
