pub mod prelude;

pub mod enums;
pub mod form_submissions;
pub mod model_images;
pub mod models;
pub mod users;
