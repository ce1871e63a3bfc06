use agency_backend::config::AppConfig;
use agency_backend::entities::users;
use agency_backend::infrastructure::database;
use agency_backend::services::image_service::ImageService;
use agency_backend::services::model_service::ModelService;
use agency_backend::services::storage::StorageService;
use agency_backend::{AppState, create_app};
use argon2::{
    Argon2,
    password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
};
use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use chrono::Utc;
use http_body_util::BodyExt;
use sea_orm::{ActiveModelTrait, Database, Set};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;
use uuid::Uuid;

const MOCK_BASE: &str = "mock://bucket";
const ADMIN_PASSWORD: &str = "correct horse battery staple";

struct MockStorageService {
    files: Mutex<HashMap<String, Vec<u8>>>,
}

impl MockStorageService {
    fn new() -> Self {
        Self {
            files: Mutex::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl StorageService for MockStorageService {
    async fn upload(
        &self,
        data: Vec<u8>,
        _content_type: &str,
        path_prefix: &str,
    ) -> anyhow::Result<String> {
        let key = format!("{}/{}.jpg", path_prefix, Uuid::new_v4());
        self.files.lock().unwrap().insert(key.clone(), data);
        Ok(format!("{}/{}", MOCK_BASE, key))
    }

    async fn delete_by_url(&self, url: &str) -> anyhow::Result<()> {
        let key = url
            .strip_prefix(&format!("{}/", MOCK_BASE))
            .ok_or_else(|| anyhow::anyhow!("URL '{}' is outside managed storage", url))?;
        self.files.lock().unwrap().remove(key);
        Ok(())
    }

    async fn get_object(&self, key: &str) -> anyhow::Result<Vec<u8>> {
        self.files
            .lock()
            .unwrap()
            .get(key)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Key not found"))
    }

    async fn object_exists(&self, key: &str) -> anyhow::Result<bool> {
        Ok(self.files.lock().unwrap().contains_key(key))
    }
}

async fn setup_app() -> Router {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    database::run_migrations(&db).await.unwrap();

    // Seed the admin account directly.
    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
        .hash_password(ADMIN_PASSWORD.as_bytes(), &salt)
        .unwrap()
        .to_string();
    users::ActiveModel {
        id: Set(Uuid::new_v4()),
        username: Set("admin".to_string()),
        password_hash: Set(password_hash),
        created_at: Set(Utc::now()),
    }
    .insert(&db)
    .await
    .unwrap();

    let storage: Arc<dyn StorageService> = Arc::new(MockStorageService::new());
    let state = AppState {
        db: db.clone(),
        storage: storage.clone(),
        model_service: Arc::new(ModelService::new(db.clone(), storage.clone())),
        image_service: Arc::new(ImageService::new(db.clone(), storage.clone())),
        config: AppConfig::development(),
    };

    create_app(state)
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json");
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {}", token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

async fn login(app: &Router) -> String {
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/auth/login",
            None,
            json!({ "username": "admin", "password": ADMIN_PASSWORD }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await["token"].as_str().unwrap().to_string()
}

fn png_bytes() -> Vec<u8> {
    let img = image::DynamicImage::ImageRgb8(image::RgbImage::from_pixel(
        64,
        48,
        image::Rgb([10, 20, 30]),
    ));
    let mut out = Vec::new();
    img.write_to(&mut std::io::Cursor::new(&mut out), image::ImageFormat::Png)
        .unwrap();
    out
}

fn multipart_request(
    uri: &str,
    token: &str,
    file: &[u8],
    extra_fields: &[(&str, &str)],
) -> Request<Body> {
    let boundary = "test-boundary-1209";
    let mut body = Vec::new();
    for (name, value) in extra_fields {
        body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{}\"\r\n\r\n{}\r\n",
                boundary, name, value
            )
            .as_bytes(),
        );
    }
    body.extend_from_slice(
        format!(
            "--{}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"photo.png\"\r\nContent-Type: image/png\r\n\r\n",
            boundary
        )
        .as_bytes(),
    );
    body.extend_from_slice(file);
    body.extend_from_slice(format!("\r\n--{}--\r\n", boundary).as_bytes());

    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            "Content-Type",
            format!("multipart/form-data; boundary={}", boundary),
        )
        .header("Authorization", format!("Bearer {}", token))
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let app = setup_app().await;

    let response = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "connected");
}

#[tokio::test]
async fn login_rejects_bad_credentials() {
    let app = setup_app().await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/auth/login",
            None,
            json!({ "username": "admin", "password": "wrong" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn mutations_require_a_token() {
    let app = setup_app().await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/models",
            None,
            json!({ "name": "Nope", "gender": "female" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // Submission reads are admin-only; the public side only posts.
    let response = app
        .oneshot(Request::get("/submissions").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn public_listing_is_open_and_paginated() {
    let app = setup_app().await;

    let response = app
        .oneshot(
            Request::get("/models?published=true&page=1&limit=5")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["total_count"], 0);
    assert_eq!(body["page"], 1);
    assert_eq!(body["limit"], 5);
}

#[tokio::test]
async fn admin_flow_create_upload_reorder_delete() {
    let app = setup_app().await;
    let token = login(&app).await;

    // Create.
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/models",
            Some(&token),
            json!({
                "name": "Ava",
                "gender": "female",
                "date_of_birth": "2006-01-01",
                "talents": ["runway"]
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let model = body_json(response).await;
    assert_eq!(model["category"], "female");
    let model_id = model["id"].as_str().unwrap().to_string();

    // Upload three portfolio images with orders 0, 1, 2.
    let mut image_ids = Vec::new();
    for order in 0..3 {
        let response = app
            .clone()
            .oneshot(multipart_request(
                &format!("/models/{}/images", model_id),
                &token,
                &png_bytes(),
                &[("type", "book"), ("sort_order", &order.to_string())],
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let image = body_json(response).await;
        assert_eq!(image["sort_order"], order);
        image_ids.push(image["id"].as_str().unwrap().to_string());
    }

    // Reorder: [img2, img0, img1].
    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/models/{}/images/reorder", model_id),
            Some(&token),
            json!({ "entries": [
                { "id": image_ids[2], "sort_order": 0 },
                { "id": image_ids[0], "sort_order": 1 },
                { "id": image_ids[1], "sort_order": 2 },
            ]}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["updated_count"], 3);

    // Public detail reflects the new order.
    let response = app
        .clone()
        .oneshot(
            Request::get(format!("/models/{}", model_id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let detail = body_json(response).await;
    let listed: Vec<&str> = detail["images"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["id"].as_str().unwrap())
        .collect();
    assert_eq!(listed, vec![
        image_ids[2].as_str(),
        image_ids[0].as_str(),
        image_ids[1].as_str()
    ]);

    // Reorder with a foreign id is rejected with 409.
    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/models/{}/images/reorder", model_id),
            Some(&token),
            json!({ "entries": [{ "id": Uuid::new_v4(), "sort_order": 0 }] }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // Bulk publish.
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/models/bulk-publish",
            Some(&token),
            json!({ "ids": [model_id, Uuid::new_v4()], "published": true }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["updated_count"], 1);

    // Delete, then the detail 404s.
    let response = app
        .clone()
        .oneshot(json_request(
            "DELETE",
            &format!("/models/{}", model_id),
            Some(&token),
            json!({}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(
            Request::get(format!("/models/{}", model_id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_treats_explicit_null_as_absent() {
    let app = setup_app().await;
    let token = login(&app).await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/models",
            Some(&token),
            json!({
                "name": "Noah",
                "nickname": "No",
                "gender": "male",
                "date_of_birth": "1990-06-15"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let model_id = body_json(response).await["id"].as_str().unwrap().to_string();

    // Nullable fields cannot be cleared: null deserializes like absence.
    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/models/{}", model_id),
            Some(&token),
            json!({ "nickname": null, "date_of_birth": null, "bio": "New face" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["nickname"], "No");
    assert_eq!(body["date_of_birth"], "1990-06-15");
    assert_eq!(body["bio"], "New face");
}

#[tokio::test]
async fn contact_form_flow() {
    let app = setup_app().await;

    // Public intake.
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/submissions",
            None,
            json!({
                "name": "Jonas",
                "email": "jonas@example.com",
                "subject": "booking",
                "message": "We would like to book Ava for a campaign."
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let submission = body_json(response).await;
    assert_eq!(submission["status"], "new");
    let id = submission["id"].as_str().unwrap().to_string();

    // Validation failures surface as 400.
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/submissions",
            None,
            json!({
                "name": "Jonas",
                "email": "not-an-email",
                "subject": "booking",
                "message": "hello"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Admin management.
    let token = login(&app).await;
    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/submissions/{}/status", id),
            Some(&token),
            json!({ "status": "responded" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "responded");

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/submissions/bulk-delete",
            Some(&token),
            json!({ "ids": [id, Uuid::new_v4()] }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["deleted_count"], 1);
}
