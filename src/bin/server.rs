use std::net::SocketAddr;

use axum::{
    Router,
    extract::{MatchedPath, Request},
};
use axum_server::Handle;
use clap::Parser;
use tower_http::trace::TraceLayer;

#[cfg(debug_assertions)]
use axum::middleware;
#[cfg(debug_assertions)]
use pocket_ledger::logging_middleware;
#[cfg(debug_assertions)]
use tower_livereload::LiveReloadLayer;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use pocket_ledger::{AppState, Tracker, build_router, graceful_shutdown, local_today};

/// The web server for Pocket Ledger.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The port to serve the app from.
    #[arg(short, long, env = "POCKET_LEDGER_PORT", default_value_t = 3000)]
    port: u16,

    /// The canonical name of the local timezone, e.g. "Pacific/Auckland".
    ///
    /// Used to work out today's date, which the view starts on.
    #[arg(long, env = "POCKET_LEDGER_TIMEZONE", default_value = "Etc/UTC")]
    timezone: String,

    /// Start with a handful of sample transactions.
    #[arg(long)]
    demo: bool,
}

#[tokio::main]
async fn main() {
    setup_logging();

    let args = Args::parse();

    let today = match local_today(&args.timezone) {
        Ok(today) => today,
        Err(error) => {
            tracing::error!("Could not start the server: {error}");
            std::process::exit(1);
        }
    };

    let tracker = if args.demo {
        Tracker::with_demo_transactions(today)
    } else {
        Tracker::new(today)
    };

    let addr = SocketAddr::from(([127, 0, 0, 1], args.port));

    let handle = Handle::new();
    tokio::spawn(graceful_shutdown(handle.clone()));

    let router = add_tracing_layer(build_router(AppState::new(tracker, &args.timezone)));

    #[cfg(debug_assertions)]
    let router = router
        .layer(middleware::from_fn(logging_middleware))
        .layer(LiveReloadLayer::new());

    tracing::info!("HTTP server listening on {}", addr);
    if let Err(error) = axum_server::bind(addr)
        .handle(handle)
        .serve(router.into_make_service())
        .await
    {
        tracing::error!("Server stopped with an error: {error}");
        std::process::exit(1);
    }
}

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().pretty())
        .init();
}

fn add_tracing_layer(router: Router) -> Router {
    let tracing_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request| {
            let method = req.method();
            let uri = req.uri();

            let matched_path = req
                .extensions()
                .get::<MatchedPath>()
                .map(|matched_path| matched_path.as_str());

            tracing::debug_span!("request", %method, %uri, matched_path)
        })
        // Errors are logged by the handlers, so skip the default 5xx logging.
        .on_failure(());

    router.layer(tracing_layer)
}
