use axum::{
    extract::State,
    http::{StatusCode, Uri, header::HeaderMap},
    response::{Html, IntoResponse, Redirect, Response},
};
use std::sync::OnceLock;

use crate::{
    AppState,
    guard::{self, Decision},
    routes::RouteParams,
    views::{self, View},
};

// The 404 page sits outside the route table; loaded on first miss.
static NOT_FOUND_VIEW: OnceLock<Box<dyn View>> = OnceLock::new();

/// navigate
///
/// The single navigation handler, registered as the router's fallback so it
/// receives every request no infrastructure route (e.g. `/health`) claims.
///
/// Flow, per navigation:
/// 1. Resolve the request path against the route table (first match wins).
///    No match renders the 404 view.
/// 2. Evaluate the navigation guard. Public routes skip straight through;
///    guarded routes are probed against the session backend, forwarding the
///    request's `Cookie` header.
/// 3. Serve the route's view with its bound parameters, or answer
///    303 See Other towards the login page.
pub async fn navigate(State(state): State<AppState>, uri: Uri, headers: HeaderMap) -> Response {
    let path = uri.path();

    let Some(resolved) = state.table.resolve(path) else {
        tracing::debug!(path, "no route matched");
        let view = NOT_FOUND_VIEW.get_or_init(views::not_found);
        let body = view.render(&RouteParams::new());
        return (StatusCode::NOT_FOUND, Html(body)).into_response();
    };

    let cookie = headers
        .get(axum::http::header::COOKIE)
        .and_then(|value| value.to_str().ok());

    match guard::authorize(
        resolved.route,
        cookie,
        state.probe.as_ref(),
        &state.config.login_path,
    )
    .await
    {
        Decision::Allow => {
            let body = resolved.route.view().render(&resolved.params);
            Html(body).into_response()
        }
        Decision::Redirect(target) => Redirect::to(&target).into_response(),
    }
}
