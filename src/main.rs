use pressgate::application::{
    ports::{cache::EdgeCache, codes::CodeGenerator, time::Clock},
    services::ApplicationServices,
};
use pressgate::config::AppConfig;
use pressgate::domain::{
    article::{ArticleReadRepository, ArticleWriteRepository},
    category::CategoryRepository,
    redirect::RedirectRuleSource,
};
use pressgate::infrastructure::{
    codes::RandomCodeGenerator,
    edge::HttpEdgeCache,
    store::{HttpArticleRepository, HttpCategoryRepository, HttpRedirectRuleSource, StoreClient},
    time::SystemClock,
};
use pressgate::presentation::http::{routes::build_router, state::HttpState};

use anyhow::Result;
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    init_tracing();

    let config = AppConfig::from_env()?;

    let store = Arc::new(StoreClient::new(
        config.store_url(),
        config.store_service_key(),
    ));
    let article_repo = Arc::new(HttpArticleRepository::new(Arc::clone(&store)));

    let article_read_repo: Arc<dyn ArticleReadRepository> = article_repo.clone();
    let article_write_repo: Arc<dyn ArticleWriteRepository> = article_repo;
    let category_repo: Arc<dyn CategoryRepository> =
        Arc::new(HttpCategoryRepository::new(Arc::clone(&store)));
    let redirect_rules: Arc<dyn RedirectRuleSource> =
        Arc::new(HttpRedirectRuleSource::new(Arc::clone(&store)));
    let edge: Arc<dyn EdgeCache> = Arc::new(HttpEdgeCache::new(
        config.edge_purge_url(),
        config.edge_purge_token(),
    ));
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let codes: Arc<dyn CodeGenerator> = Arc::new(RandomCodeGenerator);

    let services = Arc::new(ApplicationServices::new(
        article_read_repo,
        article_write_repo,
        category_repo,
        redirect_rules,
        edge,
        clock,
        codes,
        config.write_capability(),
        config.public_base_url().to_string(),
        config.redirect_timeout(),
    ));

    let state = HttpState { services };
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
