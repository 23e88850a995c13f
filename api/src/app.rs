//! Application state and factory
//!
//! This module holds the shared service state and the factory that
//! assembles the Actix-web application with all routes and middleware.

use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpResponse};

use estate_core::repositories::{ListingRepository, TestimonialRepository, UserRepository};
use estate_core::services::auth::{AccessTokenIssuer, AuthService};
use estate_core::services::email::EmailService;
use estate_core::services::listing::ListingService;
use estate_core::services::testimonial::TestimonialService;
use estate_core::services::user::UserService;
use estate_shared::types::response::ErrorBody;

use crate::middleware::{create_cors, JwtAuth};
use crate::routes::{auth, contact, listing, testimonial, user};

/// Application state holding the shared services
pub struct AppState<L, U, T, M>
where
    L: ListingRepository,
    U: UserRepository,
    T: TestimonialRepository,
    M: EmailService,
{
    pub listings: Arc<ListingService<L>>,
    pub auth: Arc<AuthService<U, M>>,
    pub users: Arc<UserService<U>>,
    pub testimonials: Arc<TestimonialService<T>>,
    pub mailer: Arc<M>,
    /// Inbox receiving contact-form messages
    pub contact_inbox: String,
}

/// Create and configure the application with all dependencies
pub fn create_app<L, U, T, M>(
    app_state: web::Data<AppState<L, U, T, M>>,
    issuer: AccessTokenIssuer,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    L: ListingRepository + 'static,
    U: UserRepository + 'static,
    T: TestimonialRepository + 'static,
    M: EmailService + 'static,
{
    let cors = create_cors();

    App::new()
        .app_data(app_state)
        .wrap(Logger::default())
        .wrap(cors)
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // API routes
        .service(
            web::scope("/api")
                .service(
                    web::scope("/auth")
                        .route("/signup", web::post().to(auth::signup::<L, U, T, M>))
                        .route("/signin", web::post().to(auth::signin::<L, U, T, M>))
                        .route("/google", web::post().to(auth::oauth::<L, U, T, M>))
                        .route("/signout", web::get().to(auth::signout))
                        .route(
                            "/forgot-password",
                            web::post().to(auth::forgot_password::<L, U, T, M>),
                        )
                        .route(
                            "/reset-password/{token}",
                            web::post().to(auth::reset_password::<L, U, T, M>),
                        ),
                )
                .service(
                    web::scope("/listing")
                        .route(
                            "/create",
                            web::post()
                                .to(listing::create_listing::<L, U, T, M>)
                                .wrap(JwtAuth::new(issuer.clone())),
                        )
                        .route(
                            "/delete/{id}",
                            web::delete()
                                .to(listing::delete_listing::<L, U, T, M>)
                                .wrap(JwtAuth::new(issuer.clone())),
                        )
                        .route(
                            "/update/{id}",
                            web::post()
                                .to(listing::update_listing::<L, U, T, M>)
                                .wrap(JwtAuth::new(issuer.clone())),
                        )
                        .route("/get/{id}", web::get().to(listing::get_listing::<L, U, T, M>))
                        .route("/get", web::get().to(listing::search_listings::<L, U, T, M>))
                        .route(
                            "/search/{code}",
                            web::get().to(listing::get_listing_by_code::<L, U, T, M>),
                        ),
                )
                .service(
                    web::scope("/user")
                        .route(
                            "/update/{id}",
                            web::post()
                                .to(user::update_user::<L, U, T, M>)
                                .wrap(JwtAuth::new(issuer.clone())),
                        )
                        .route(
                            "/delete/{id}",
                            web::delete()
                                .to(user::delete_user::<L, U, T, M>)
                                .wrap(JwtAuth::new(issuer.clone())),
                        )
                        .route(
                            "/listings/{id}",
                            web::get()
                                .to(user::get_user_listings::<L, U, T, M>)
                                .wrap(JwtAuth::new(issuer.clone())),
                        )
                        .route(
                            "/remove-avatar/{id}",
                            web::put()
                                .to(user::remove_avatar::<L, U, T, M>)
                                .wrap(JwtAuth::new(issuer.clone())),
                        )
                        .route(
                            "/{id}",
                            web::get()
                                .to(user::get_user::<L, U, T, M>)
                                .wrap(JwtAuth::new(issuer.clone())),
                        ),
                )
                .service(
                    web::scope("/testimonial")
                        .route(
                            "/add",
                            web::post().to(testimonial::add_testimonial::<L, U, T, M>),
                        )
                        .route(
                            "/all",
                            web::get().to(testimonial::get_testimonials::<L, U, T, M>),
                        ),
                )
                .service(web::scope("/email").route(
                    "/send",
                    web::post().to(contact::send_contact_email::<L, U, T, M>),
                )),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "am-estate-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler sharing the error envelope
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorBody::new(404, "The requested resource was not found"))
}
