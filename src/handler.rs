use crate::config::AppState;
use crate::logger;
use crate::response;
use crate::routes;
use http_body_util::Full;
use hyper::body::{Body as _, Bytes};
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

/// Result of a single dispatch stage: either a finished response, or a
/// decline that passes control to the next stage in the chain.
pub enum Outcome {
    Handled(Response<Full<Bytes>>),
    Declined,
}

/// Route Table Responder: the first stage, consulted for every request
/// uniformly (the method is not inspected).
///
/// On a table hit the task suspends for the artificial delay before the
/// document is built, so a scanner under test has to cope with slow
/// HTML pages. The sleep is a plain await point; concurrent requests
/// keep flowing while it is pending. A miss declines without sleeping,
/// keeping non-page responses fast.
pub async fn page_responder(path: &str, delay: Duration) -> Outcome {
    match routes::lookup(path) {
        Some(fragment) => {
            tokio::time::sleep(delay).await;
            let document = routes::render_page(fragment);
            Outcome::Handled(response::build_html_response(document))
        }
        None => Outcome::Declined,
    }
}

/// Static Asset Fallback: the second stage. GET-only, exact match
/// against the two registered asset spellings, both backed by the same
/// file. The file is read fresh per request and no delay is applied.
pub async fn asset_fallback(method: &Method, path: &str, asset_path: &Path) -> Outcome {
    if method != Method::GET || !routes::is_asset_path(path) {
        return Outcome::Declined;
    }
    match response::load_asset(asset_path).await {
        Some((data, content_type)) => {
            Outcome::Handled(response::build_asset_response(data, content_type))
        }
        None => {
            logger::log_warning(&format!("Asset file unreadable: {}", asset_path.display()));
            Outcome::Handled(response::build_404_response())
        }
    }
}

/// Run the two stages in order; anything declined by both gets the
/// default not-found response.
pub async fn dispatch(
    method: &Method,
    path: &str,
    delay: Duration,
    asset_path: &Path,
) -> Response<Full<Bytes>> {
    if let Outcome::Handled(resp) = page_responder(path, delay).await {
        return resp;
    }
    if let Outcome::Handled(resp) = asset_fallback(method, path, asset_path).await {
        return resp;
    }
    response::build_404_response()
}

pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();

    let access_log = state
        .cached_access_log
        .load(std::sync::atomic::Ordering::Relaxed);
    if access_log {
        logger::log_request_path(&path);
    }

    let response = dispatch(
        &method,
        &path,
        state.config.delay(),
        &state.config.fixture.asset_path,
    )
    .await;

    if access_log {
        let body_size = usize::try_from(response.body().size_hint().lower()).unwrap_or(usize::MAX);
        logger::log_response(response.status().as_u16(), body_size);
    }

    Ok(response)
}
