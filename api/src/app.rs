//! Application state and factory
//!
//! `AppState` is built once at startup and shared with every worker as
//! `web::Data`; `create_app` wires middleware and routes around it.

use actix_cors::Cors;
use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::Logger,
    web, App, Error,
};
use std::sync::Arc;

use es_core::repositories::Repositories;
use es_core::services::{
    AuthService, AuthServiceConfig, CourseService, EnrollmentService, ManifestService,
    MediaService, ProgressService, TokenService,
};

use crate::handlers::{json_error_handler, not_found, path_error_handler, query_error_handler};
use crate::middleware::JwtAuth;
use crate::routes::{auth, courses, enrollments, health::health_check, progress, student};

/// Services shared by every request
pub struct AppState {
    pub auth: AuthService,
    pub courses: CourseService,
    pub enrollments: EnrollmentService,
    pub progress: ProgressService,
    pub manifest: ManifestService,
    /// Verifies bearer credentials in `JwtAuth`
    pub tokens: Arc<TokenService>,
    pub max_json_size: usize,
    pub max_upload_size: usize,
}

impl AppState {
    pub fn new(
        repositories: &Repositories,
        media: Arc<MediaService>,
        tokens: Arc<TokenService>,
        auth_config: AuthServiceConfig,
    ) -> Self {
        Self {
            auth: AuthService::new(repositories.users.clone(), tokens.clone(), auth_config),
            courses: CourseService::new(repositories, media.clone()),
            enrollments: EnrollmentService::new(repositories),
            progress: ProgressService::new(repositories),
            manifest: ManifestService::new(repositories, media),
            tokens,
            max_json_size: 1024 * 1024,
            max_upload_size: 500 * 1024 * 1024,
        }
    }

    /// Overrides the JSON and multipart body limits
    pub fn with_limits(mut self, max_json_size: usize, max_upload_size: usize) -> Self {
        self.max_json_size = max_json_size;
        self.max_upload_size = max_upload_size;
        self
    }
}

/// Create and configure the application with all dependencies
pub fn create_app(
    app_state: web::Data<AppState>,
    cors: Cors,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    let json_config = web::JsonConfig::default()
        .limit(app_state.max_json_size)
        .error_handler(json_error_handler);

    App::new()
        .app_data(app_state)
        .app_data(json_config)
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .wrap(cors)
        .wrap(Logger::default())
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api")
                .service(
                    web::scope("/auth")
                        .route("/register", web::post().to(auth::register))
                        .route("/login", web::post().to(auth::login))
                        .route("/me", web::get().to(auth::me).wrap(JwtAuth::new())),
                )
                .service(
                    web::scope("/courses")
                        .route("", web::get().to(courses::list_courses))
                        .route(
                            "",
                            web::post().to(courses::create_course).wrap(JwtAuth::instructor()),
                        )
                        // must precede "/{id}"
                        .route(
                            "/instructor/my-courses",
                            web::get()
                                .to(courses::instructor_courses)
                                .wrap(JwtAuth::instructor()),
                        )
                        .route("/{id}", web::get().to(courses::get_course))
                        .route(
                            "/{id}",
                            web::put().to(courses::update_course).wrap(JwtAuth::instructor()),
                        )
                        .route(
                            "/{id}",
                            web::delete().to(courses::delete_course).wrap(JwtAuth::instructor()),
                        )
                        .route(
                            "/{id}/publish",
                            web::put().to(courses::publish_course).wrap(JwtAuth::instructor()),
                        )
                        .route(
                            "/{id}/sections",
                            web::post().to(courses::add_section).wrap(JwtAuth::instructor()),
                        )
                        .route(
                            "/{id}/lessons",
                            web::post().to(courses::add_lesson).wrap(JwtAuth::instructor()),
                        )
                        .route(
                            "/{id}/resources",
                            web::post().to(courses::add_resource).wrap(JwtAuth::instructor()),
                        ),
                )
                .service(
                    web::scope("/enrollments")
                        .wrap(JwtAuth::student())
                        .route("/my-courses", web::get().to(enrollments::my_courses))
                        .route("/{id}/enroll", web::post().to(enrollments::enroll))
                        .route("/{id}/unenroll", web::delete().to(enrollments::unenroll)),
                )
                .service(
                    web::scope("/progress")
                        .wrap(JwtAuth::student())
                        .route("", web::post().to(progress::update_progress))
                        .route("/course/{id}", web::get().to(progress::course_progress))
                        .route("/lesson/{id}", web::get().to(progress::lesson_progress)),
                )
                .service(
                    web::scope("/student")
                        .wrap(JwtAuth::student())
                        .route("/{id}/download-manifest", web::get().to(student::download_manifest)),
                ),
        )
        .default_service(web::route().to(not_found))
}
