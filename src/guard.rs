use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::routes::RouteDef;

/// SessionInfo
///
/// The session-probe response body. The backend answers `GET /api/` with
/// `{"authenticated": false}` for anonymous visitors and
/// `{"authenticated": true, "user": {...}, ...}` for live sessions. Only the
/// `authenticated` flag participates in the guard decision; the user block is
/// kept for logging. Unknown fields (the dashboard payload) are ignored.
#[derive(Debug, Deserialize)]
pub struct SessionInfo {
    pub authenticated: bool,
    #[serde(default)]
    pub user: Option<SessionUser>,
}

/// The identity block attached to an authenticated probe response.
#[derive(Debug, Deserialize)]
pub struct SessionUser {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
}

// 1. SessionProbe Contract

/// SessionProbe
///
/// Abstract contract for the guard's single external dependency: asking the
/// backend whether the navigating visitor holds a live session. The trait
/// allows swapping the real HTTP client (HttpSessionProbe) for an in-memory
/// mock (MockSessionProbe) in tests.
///
/// The caller's `Cookie` header is forwarded explicitly per request; the
/// probe holds no credential state of its own.
#[async_trait]
pub trait SessionProbe: Send + Sync {
    /// Issues one session check, forwarding the navigation request's cookie
    /// header verbatim when present.
    async fn check(&self, cookie: Option<&str>) -> Result<SessionInfo, String>;
}

/// ProbeState
///
/// The concrete type used to share the session probe across the application state.
pub type ProbeState = Arc<dyn SessionProbe>;

// 2. The Real Implementation (backend HTTP call)

/// HttpSessionProbe
///
/// The concrete probe implementation: `GET {backend_url}/api/` via reqwest.
/// Deliberately stateless: no retry, no caching, no cookie store. Each
/// guarded navigation re-verifies the session from scratch.
#[derive(Clone)]
pub struct HttpSessionProbe {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpSessionProbe {
    pub fn new(backend_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: format!("{}/api/", backend_url.trim_end_matches('/')),
        }
    }
}

#[async_trait]
impl SessionProbe for HttpSessionProbe {
    async fn check(&self, cookie: Option<&str>) -> Result<SessionInfo, String> {
        let mut request = self.client.get(&self.endpoint);
        if let Some(cookie) = cookie {
            request = request.header(reqwest::header::COOKIE, cookie);
        }

        let response = request.send().await.map_err(|e| e.to_string())?;
        let response = response.error_for_status().map_err(|e| e.to_string())?;

        response
            .json::<SessionInfo>()
            .await
            .map_err(|e| e.to_string())
    }
}

// 3. The Mock Implementation (for tests)

/// MockSessionProbe
///
/// In-memory probe used by unit and integration tests. Answers with a fixed
/// session state (or a simulated transport failure) and counts how many times
/// it was consulted, so tests can assert that public navigations issue no
/// probe at all.
#[derive(Clone)]
pub struct MockSessionProbe {
    authenticated: bool,
    should_fail: bool,
    calls: Arc<AtomicUsize>,
}

impl MockSessionProbe {
    /// A probe that reports a live session.
    pub fn authenticated() -> Self {
        Self {
            authenticated: true,
            should_fail: false,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// A probe that reports no session.
    pub fn anonymous() -> Self {
        Self {
            authenticated: false,
            should_fail: false,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// A probe whose every check fails at the transport level.
    pub fn failing() -> Self {
        Self {
            authenticated: false,
            should_fail: true,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of checks issued so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SessionProbe for MockSessionProbe {
    async fn check(&self, _cookie: Option<&str>) -> Result<SessionInfo, String> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.should_fail {
            return Err("mock probe error: simulation requested".to_string());
        }

        Ok(SessionInfo {
            authenticated: self.authenticated,
            user: None,
        })
    }
}

// 4. The Guard

/// Decision
///
/// Outcome of a navigation-guard evaluation: let the navigation proceed, or
/// send the visitor somewhere else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Redirect(String),
}

/// authorize
///
/// Evaluates the navigation guard for one navigation attempt.
///
/// Public routes are allowed immediately, with no network traffic. Guarded
/// routes trigger exactly one session probe; only a clean
/// `{"authenticated": true}` answer allows the navigation. Everything else,
/// including probe failures, redirects to the login path: uncertainty about
/// the session is treated as no session.
pub async fn authorize(
    route: &RouteDef,
    cookie: Option<&str>,
    probe: &dyn SessionProbe,
    login_path: &str,
) -> Decision {
    if !route.requires_auth() {
        return Decision::Allow;
    }

    match probe.check(cookie).await {
        Ok(session) if session.authenticated => {
            if let Some(user) = &session.user {
                tracing::debug!(
                    route = route.name(),
                    user_id = user.id,
                    email = %user.email,
                    "session check passed"
                );
            }
            Decision::Allow
        }
        Ok(_) => {
            tracing::debug!(route = route.name(), "session check denied, redirecting");
            Decision::Redirect(login_path.to_string())
        }
        Err(error) => {
            tracing::warn!(
                route = route.name(),
                error = %error,
                "session check failed, redirecting"
            );
            Decision::Redirect(login_path.to_string())
        }
    }
}
