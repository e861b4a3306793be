//! HTTP surface
//!
//! A thin warp layer: the static asset directory at the site root and the
//! repository insight endpoint under `/api`. All request state is
//! read-only and shared behind an `Arc`; there is no mutable state across
//! requests.

mod handlers;

use crate::catalog::Catalogs;
use crate::config::Environment;
use crate::constants;
use crate::github::RepoHost;
use std::sync::Arc;
use warp::Filter;

/// Shared, read-only per-process state
pub struct AppState<H> {
    pub host: H,
    pub catalogs: Catalogs,
    pub environment: Environment,
}

/// Build the full route tree
///
/// Generic over the repository host so tests can drive the routes against
/// an in-memory stub.
pub fn routes<H>(
    state: Arc<AppState<H>>,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone
where
    H: RepoHost + 'static,
{
    let state_filter = warp::any().map(move || Arc::clone(&state));

    let repo_info = warp::path!("api" / String / String)
        .and(warp::get())
        .and(state_filter)
        .and_then(handlers::repo_info::<H>);

    let static_files = warp::fs::dir(constants::server::PUBLIC_DIR);

    repo_info.or(static_files)
}

/// Serve the routes until the process is stopped
pub async fn run<H>(state: Arc<AppState<H>>, port: u16)
where
    H: RepoHost + 'static,
{
    warp::serve(routes(state)).run(([0, 0, 0, 0], port)).await
}
