use std::net::SocketAddr;

use community_directory::{app, config::Config, data::Data, state::AppState};
use tokio::{net::TcpListener, signal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    let service_name = env!("CARGO_CRATE_NAME");

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("{service_name}=debug,tower_http=info,sqlx=info,axum::rejection=trace")
                    .into()
            }),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_line_number(false)
                .with_file(false),
        )
        .init();

    let config = Config::new().expect("config");
    let data = Data::new(&config).await.expect("data");
    let port = config.port;
    let state = AppState::new(config, data);

    let listener = TcpListener::bind(SocketAddr::from(([0, 0, 0, 0], port)))
        .await
        .expect("bind");
    tracing::debug!("listening on {}", listener.local_addr().expect("local addr"));
    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("serve");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("error installing ctrl+c handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("error installing signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
