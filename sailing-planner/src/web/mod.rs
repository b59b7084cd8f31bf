//! HTTP surface for the route planner.
//!
//! - `GET /health` answers `ok`.
//! - `POST /routes/search` takes `{"origin", "destination", "criteria"}` and
//!   returns the best route with its total cost and duration.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;

/// Serve the router on `listener` until Ctrl-C.
pub async fn serve(listener: tokio::net::TcpListener, state: AppState) -> std::io::Result<()> {
    let app = create_router(state);
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "failed to listen for shutdown signal");
            }
        })
        .await
}
