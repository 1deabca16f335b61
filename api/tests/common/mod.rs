//! Shared fixtures for the HTTP tests: in-memory application state, a
//! multipart body builder and request helpers.

#![allow(dead_code)]

use actix_cors::Cors;
use actix_web::{
    body::MessageBody,
    dev::{Service, ServiceResponse},
    http::header,
    test, web,
};
use serde_json::Value;
use std::sync::Arc;

use es_api::app::{create_app, AppState};
use es_core::repositories::Repositories;
use es_core::services::{
    AuthServiceConfig, MediaService, MockMediaGateway, TokenService, TokenServiceConfig,
};

pub const JWT_SECRET: &str = "http-test-secret";

pub struct TestContext {
    pub state: web::Data<AppState>,
    pub gateway: Arc<MockMediaGateway>,
}

pub fn test_context() -> TestContext {
    let repositories = Repositories::in_memory();
    let gateway = Arc::new(MockMediaGateway::new());
    let media = Arc::new(MediaService::new(gateway.clone(), "edusync"));
    let tokens = Arc::new(TokenService::new(TokenServiceConfig {
        jwt_secret: JWT_SECRET.to_string(),
        ..TokenServiceConfig::default()
    }));

    let state = AppState::new(&repositories, media, tokens, AuthServiceConfig { bcrypt_cost: 4 })
        .with_limits(64 * 1024, 1024 * 1024);

    TestContext {
        state: web::Data::new(state),
        gateway,
    }
}

/// Builds the application under test
pub async fn init_app(
    ctx: &TestContext,
) -> impl Service<actix_http::Request, Response = ServiceResponse<impl MessageBody>, Error = actix_web::Error>
{
    test::init_service(create_app(ctx.state.clone(), Cors::permissive())).await
}

/// Hand-assembled `multipart/form-data` body
pub struct MultipartBody {
    boundary: String,
    body: Vec<u8>,
}

impl MultipartBody {
    pub fn new() -> Self {
        Self {
            boundary: "----edusync-test-boundary".to_string(),
            body: Vec::new(),
        }
    }

    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{}\"\r\n\r\n{}\r\n",
                self.boundary, name, value
            )
            .as_bytes(),
        );
        self
    }

    pub fn file(mut self, name: &str, filename: &str, content_type: &str, bytes: &[u8]) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: {}\r\n\r\n",
                self.boundary, name, filename, content_type
            )
            .as_bytes(),
        );
        self.body.extend_from_slice(bytes);
        self.body.extend_from_slice(b"\r\n");
        self
    }

    /// Returns the content type header value and the encoded body
    pub fn finish(mut self) -> (String, Vec<u8>) {
        self.body
            .extend_from_slice(format!("--{}--\r\n", self.boundary).as_bytes());
        (
            format!("multipart/form-data; boundary={}", self.boundary),
            self.body,
        )
    }
}

pub fn bearer(token: &str) -> (header::HeaderName, String) {
    (header::AUTHORIZATION, format!("Bearer {}", token))
}

/// Sends `req` and returns the status code with the decoded JSON body
pub async fn send<S, B>(app: &S, req: actix_http::Request) -> (u16, Value)
where
    S: Service<actix_http::Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let resp = test::call_service(app, req).await;
    let status = resp.status().as_u16();
    let bytes = test::read_body(resp).await;
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

/// Registers an account and returns `(user id, token)`
pub async fn register<S, B>(app: &S, email: &str, role: &str) -> (String, String)
where
    S: Service<actix_http::Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(serde_json::json!({
            "email": email,
            "password": "password1",
            "name": "Test User",
            "role": role,
        }))
        .to_request();
    let (status, body) = send(app, req).await;
    assert_eq!(status, 201, "registration failed: {}", body);

    (
        body["data"]["user"]["id"].as_str().unwrap().to_string(),
        body["data"]["token"].as_str().unwrap().to_string(),
    )
}

/// Creates a course through the API and returns its id
pub async fn create_course<S, B>(app: &S, token: &str, title: &str) -> String
where
    S: Service<actix_http::Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let (content_type, payload) = MultipartBody::new()
        .text("title", title)
        .text("description", "A practical introduction for beginners")
        .finish();
    let req = test::TestRequest::post()
        .uri("/api/courses")
        .insert_header(bearer(token))
        .insert_header((header::CONTENT_TYPE, content_type))
        .set_payload(payload)
        .to_request();
    let (status, body) = send(app, req).await;
    assert_eq!(status, 201, "course creation failed: {}", body);

    body["data"]["id"].as_str().unwrap().to_string()
}

/// Adds a section and a lesson with a video; returns `(section id, lesson id)`
pub async fn add_section_and_lesson<S, B>(app: &S, token: &str, course_id: &str) -> (String, String)
where
    S: Service<actix_http::Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let req = test::TestRequest::post()
        .uri(&format!("/api/courses/{}/sections", course_id))
        .insert_header(bearer(token))
        .set_json(serde_json::json!({"title": "Getting started", "order": 0}))
        .to_request();
    let (status, body) = send(app, req).await;
    assert_eq!(status, 201, "section creation failed: {}", body);
    let section_id = body["data"]["id"].as_str().unwrap().to_string();

    let (content_type, payload) = MultipartBody::new()
        .text("sectionId", &section_id)
        .text("title", "Installing the toolchain")
        .text("description", "Set up everything needed for the course")
        .text("duration", "120")
        .text("order", "0")
        .file("video", "intro.mp4", "video/mp4", b"fake video bytes")
        .finish();
    let req = test::TestRequest::post()
        .uri(&format!("/api/courses/{}/lessons", course_id))
        .insert_header(bearer(token))
        .insert_header((header::CONTENT_TYPE, content_type))
        .set_payload(payload)
        .to_request();
    let (status, body) = send(app, req).await;
    assert_eq!(status, 201, "lesson creation failed: {}", body);

    (section_id, body["data"]["id"].as_str().unwrap().to_string())
}

pub async fn publish<S, B>(app: &S, token: &str, course_id: &str)
where
    S: Service<actix_http::Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let req = test::TestRequest::put()
        .uri(&format!("/api/courses/{}/publish", course_id))
        .insert_header(bearer(token))
        .to_request();
    let (status, body) = send(app, req).await;
    assert_eq!(status, 200, "publish failed: {}", body);
}
