use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use configs::{AppConfig, NotificationChannel};
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use service::policy::notifier::{EmailNotifier, NoopNotifier, Notifier, SmsNotifier};
use service::policy::NotificationService;
use service::users::{repo::SeaOrmUserRepository, NotifyingUserService, UserService};
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes;
use crate::state::ServerState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Pick the delivery channel once, at startup.
pub fn build_notifier(channel: NotificationChannel) -> Arc<dyn Notifier> {
    match channel {
        NotificationChannel::Email => Arc::new(EmailNotifier),
        NotificationChannel::Sms => Arc::new(SmsNotifier),
        NotificationChannel::None => Arc::new(NoopNotifier),
    }
}

/// Wire store → service → notifying decorator into handler state.
pub fn build_state(db: DatabaseConnection, notifier: Arc<dyn Notifier>) -> ServerState {
    let repo = Arc::new(SeaOrmUserRepository::new(db));
    let users = NotifyingUserService::new(UserService::new(repo), NotificationService::new(notifier));
    ServerState::new(Arc::new(users))
}

pub fn build_app(state: ServerState) -> Router {
    routes::build_router(state, build_cors())
}

fn bind_addr(cfg: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(format!("{}:{}", cfg.server.host, cfg.server.port).parse()?)
}

/// Public entry: connect, bootstrap the schema, and serve HTTP until the listener fails
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let db = models::db::connect_with_config(&cfg.database).await?;
    migration::Migrator::up(&db, None).await?;
    info!("schema ready");

    let state = build_state(db, build_notifier(cfg.notifications.channel));
    let app = build_app(state);

    let addr = bind_addr(&cfg)?;
    info!(%addr, channel = ?cfg.notifications.channel, "starting user registry");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
