use std::sync::Arc;

use actix_web::{web, HttpServer};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use estate_api::{create_app, AppState};
use estate_core::services::auth::{AccessTokenIssuer, AuthService, AuthServiceConfig};
use estate_core::services::listing::ListingService;
use estate_core::services::testimonial::TestimonialService;
use estate_core::services::user::UserService;
use estate_infra::{
    create_pool, MySqlListingRepository, MySqlTestimonialRepository, MySqlUserRepository,
    SmtpEmailService,
};
use estate_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting AM Estate API server");

    // Load configuration
    let config = AppConfig::from_env();
    if config.environment.is_production() && config.jwt.is_using_default_secret() {
        warn!("JWT_SECRET is not set; running production with the default secret");
    }

    // Wire up repositories and services
    let pool = create_pool(&config.database).await?;
    let listing_repo = Arc::new(MySqlListingRepository::new(pool.clone()));
    let user_repo = Arc::new(MySqlUserRepository::new(pool.clone()));
    let testimonial_repo = Arc::new(MySqlTestimonialRepository::new(pool));
    let mailer = Arc::new(SmtpEmailService::new(&config.email)?);

    let issuer = AccessTokenIssuer::new(config.jwt.clone());
    let auth_config = AuthServiceConfig {
        reset_link_base: config.email.client_base_url.clone(),
        ..Default::default()
    };

    let app_state = web::Data::new(AppState {
        listings: Arc::new(ListingService::new(listing_repo)),
        auth: Arc::new(AuthService::new(
            user_repo.clone(),
            mailer.clone(),
            issuer.clone(),
            auth_config,
        )),
        users: Arc::new(UserService::new(user_repo)),
        testimonials: Arc::new(TestimonialService::new(testimonial_repo)),
        mailer,
        contact_inbox: config.email.contact_inbox.clone(),
    });

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let workers = config.server.workers;
    let server = HttpServer::new(move || create_app(app_state.clone(), issuer.clone()));
    let server = if workers > 0 {
        server.workers(workers)
    } else {
        server
    };

    server.bind(&bind_address)?.run().await?;
    Ok(())
}
