//! Request handlers and status mapping

use super::AppState;
use crate::github::RepoHost;
use crate::insights;
use crate::utils::validators;
use std::convert::Infallible;
use std::sync::Arc;
use warp::Reply;
use warp::http::StatusCode;
use warp::reply;

/// GET /api/:namespace/:repo
///
/// Three terminal outcomes besides success: `400` for invalid input (no
/// upstream call is made), `404` when the existence check fails for any
/// reason, `500` when any aggregation lookup fails.
pub async fn repo_info<H>(
    namespace: String,
    repo: String,
    state: Arc<AppState<H>>,
) -> Result<reply::Response, Infallible>
where
    H: RepoHost,
{
    if let Err(error) = validators::validate_repo_identity(&namespace, &repo) {
        return Ok(reply::with_status(error.to_string(), StatusCode::BAD_REQUEST).into_response());
    }

    // a missing repository and a transient upstream fault answer alike
    if let Err(error) = state.host.repo_exists(&namespace, &repo).await {
        log_upstream_error(state.as_ref(), &error);
        return Ok(
            reply::with_status("Repo not found".to_string(), StatusCode::NOT_FOUND)
                .into_response(),
        );
    }

    match insights::aggregate(&state.host, &namespace, &repo, &state.catalogs).await {
        Ok(info) => Ok(reply::json(&info).into_response()),
        Err(error) => {
            log_upstream_error(state.as_ref(), &error);
            Ok(reply::with_status(
                "Something went wrong".to_string(),
                StatusCode::INTERNAL_SERVER_ERROR,
            )
            .into_response())
        }
    }
}

/// Upstream detail never reaches callers; log it outside production only
fn log_upstream_error<H>(state: &AppState<H>, error: &anyhow::Error) {
    if !state.environment.is_production() {
        log::error!("upstream failure: {:#}", error);
    }
}
