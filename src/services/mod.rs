pub mod category;
pub mod image_service;
pub mod model_service;
pub mod storage;
pub mod submission_service;
