pub mod api;
pub mod config;
pub mod entities;
pub mod infrastructure;
pub mod services;
pub mod utils;

use crate::config::AppConfig;
use crate::services::image_service::ImageService;
use crate::services::model_service::ModelService;
use crate::services::storage::StorageService;
use axum::http::HeaderValue;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware::from_fn_with_state,
    routing::{delete, get, post, put},
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::handlers::auth::login,
        api::handlers::health::health_check,
        api::handlers::models::list_models,
        api::handlers::models::get_model,
        api::handlers::models::create_model,
        api::handlers::models::update_model,
        api::handlers::models::delete_model,
        api::handlers::models::bulk_publish,
        api::handlers::models::reorder_portfolio_images,
        api::handlers::images::upload_profile_image,
        api::handlers::images::add_portfolio_image,
        api::handlers::images::delete_portfolio_image,
        api::handlers::submissions::create_submission,
        api::handlers::submissions::list_submissions,
        api::handlers::submissions::get_submission,
        api::handlers::submissions::update_submission_status,
        api::handlers::submissions::delete_submission,
        api::handlers::submissions::bulk_delete_submissions,
    ),
    components(
        schemas(
            api::handlers::auth::LoginRequest,
            api::handlers::auth::LoginResponse,
            api::handlers::health::HealthResponse,
            api::handlers::submissions::UpdateStatusRequest,
            api::handlers::submissions::BulkDeleteRequest,
            api::handlers::submissions::BulkDeleteResponse,
            entities::models::Model,
            entities::model_images::Model,
            entities::form_submissions::Model,
            entities::enums::Gender,
            entities::enums::Category,
            entities::enums::HairColor,
            entities::enums::EyeColor,
            entities::enums::ImageType,
            entities::enums::SubmissionSubject,
            entities::enums::SubmissionStatus,
            services::model_service::CreateModelInput,
            services::model_service::UpdateModelInput,
            services::model_service::ModelPage,
            services::model_service::ModelDetail,
            services::model_service::DeleteModelResult,
            services::model_service::BulkPublishRequest,
            services::model_service::BulkPublishResult,
            services::model_service::ReorderEntry,
            services::model_service::ReorderRequest,
            services::model_service::ReorderResult,
            services::image_service::ProfileImageResult,
            services::image_service::ImageDeleteResult,
            services::submission_service::CreateSubmissionInput,
            services::submission_service::SubmissionPage,
        )
    ),
    tags(
        (name = "auth", description = "Admin authentication"),
        (name = "models", description = "Talent profiles and their galleries"),
        (name = "images", description = "Profile and portfolio image uploads"),
        (name = "submissions", description = "Contact form submissions"),
        (name = "system", description = "Health and diagnostics")
    )
)]
pub struct ApiDoc;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub storage: Arc<dyn StorageService>,
    pub model_service: Arc<ModelService>,
    pub image_service: Arc<ImageService>,
    pub config: AppConfig,
}

fn build_cors(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(
            origins
                .iter()
                .filter_map(|o| o.parse::<HeaderValue>().ok()),
        )
    };
    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Public reads and the contact form are open; every mutation and all
/// submission reads sit behind the JWT guard.
pub fn create_app(state: AppState) -> Router {
    let upload_limit = DefaultBodyLimit::max(state.config.max_upload_size + 1024 * 1024);
    let cors = build_cors(&state.config.allowed_origins);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/health", get(api::handlers::health::health_check))
        .route("/auth/login", post(api::handlers::auth::login))
        .route(
            "/models",
            get(api::handlers::models::list_models).merge(
                post(api::handlers::models::create_model).layer(from_fn_with_state(
                    state.clone(),
                    api::middleware::auth::auth_middleware,
                )),
            ),
        )
        .route(
            "/models/bulk-publish",
            post(api::handlers::models::bulk_publish).layer(from_fn_with_state(
                state.clone(),
                api::middleware::auth::auth_middleware,
            )),
        )
        .route(
            "/models/:id",
            get(api::handlers::models::get_model).merge(
                put(api::handlers::models::update_model)
                    .delete(api::handlers::models::delete_model)
                    .layer(from_fn_with_state(
                        state.clone(),
                        api::middleware::auth::auth_middleware,
                    )),
            ),
        )
        .route(
            "/models/:id/profile-image",
            post(api::handlers::images::upload_profile_image)
                .layer(upload_limit.clone())
                .layer(from_fn_with_state(
                    state.clone(),
                    api::middleware::auth::auth_middleware,
                )),
        )
        .route(
            "/models/:id/images",
            post(api::handlers::images::add_portfolio_image)
                .layer(upload_limit)
                .layer(from_fn_with_state(
                    state.clone(),
                    api::middleware::auth::auth_middleware,
                )),
        )
        .route(
            "/models/:id/images/reorder",
            put(api::handlers::models::reorder_portfolio_images).layer(from_fn_with_state(
                state.clone(),
                api::middleware::auth::auth_middleware,
            )),
        )
        .route(
            "/images/:id",
            delete(api::handlers::images::delete_portfolio_image).layer(from_fn_with_state(
                state.clone(),
                api::middleware::auth::auth_middleware,
            )),
        )
        .route(
            "/submissions",
            post(api::handlers::submissions::create_submission).merge(
                get(api::handlers::submissions::list_submissions).layer(from_fn_with_state(
                    state.clone(),
                    api::middleware::auth::auth_middleware,
                )),
            ),
        )
        .route(
            "/submissions/bulk-delete",
            post(api::handlers::submissions::bulk_delete_submissions).layer(from_fn_with_state(
                state.clone(),
                api::middleware::auth::auth_middleware,
            )),
        )
        .route(
            "/submissions/:id",
            get(api::handlers::submissions::get_submission)
                .delete(api::handlers::submissions::delete_submission)
                .layer(from_fn_with_state(
                    state.clone(),
                    api::middleware::auth::auth_middleware,
                )),
        )
        .route(
            "/submissions/:id/status",
            put(api::handlers::submissions::update_submission_status).layer(from_fn_with_state(
                state.clone(),
                api::middleware::auth::auth_middleware,
            )),
        )
        .layer(cors)
        .with_state(state)
}
