//! # Web Dashboard
//!
//! The second front end: the same login, menus and operations as the
//! console, rendered as server-side HTML. Sessions are explicit: a
//! cookie carries a random id into the in-memory [`session::SessionStore`],
//! so concurrent admin and customer sessions never share state.
//!
//! ## Routes
//! ```text
//! GET  /                 login page (or redirect by session role)
//! POST /login            authenticate, set session cookie
//! POST /logout           drop session, clear cookie
//! GET  /admin/...        admin pages (books, authors, customers, ...)
//! POST /admin/.../add    admin writes
//! GET  /shop             customer storefront (in-stock books)
//! POST /shop/buy         purchase
//! GET  /shop/history     purchase history
//! ```

mod admin;
pub mod session;
mod shop;
mod views;

use std::net::SocketAddr;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Form, Router};
use serde::Deserialize;
use tower_cookies::{Cookie, CookieManagerLayer, Cookies};
use tracing::{error, info};
use uuid::Uuid;

use bookstore_db::{Database, DbError, PurchaseError};

use crate::auth::{self, LoginError, SessionContext};
use crate::error::{AppError, AppResult};
use crate::web::session::{SessionStore, SESSION_COOKIE};

/// Shared state for all handlers.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub sessions: SessionStore,
}

/// Binds the listen address and serves the dashboard until shutdown.
pub async fn serve(db: Database, listen: &str) -> AppResult<()> {
    let addr: SocketAddr = listen.parse().map_err(|source| AppError::InvalidListenAddr {
        addr: listen.to_string(),
        source,
    })?;

    let state = AppState {
        db,
        sessions: SessionStore::new(),
    };
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "Web dashboard listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Web dashboard shut down");
    Ok(())
}

/// Builds the full route table. Separate from [`serve`] so tests can
/// exercise the router without binding a socket.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/login", post(handle_login))
        .route("/logout", post(handle_logout))
        .route("/admin", get(admin::dashboard))
        .route("/admin/books", get(admin::books_page))
        .route("/admin/books/add", post(admin::add_book))
        .route("/admin/books/delete", post(admin::delete_book))
        .route("/admin/authors", get(admin::authors_page))
        .route("/admin/authors/add", post(admin::add_author))
        .route("/admin/authors/delete", post(admin::delete_author))
        .route("/admin/authors/link", post(admin::link_author))
        .route("/admin/customers", get(admin::customers_page))
        .route("/admin/customers/add", post(admin::add_customer))
        .route("/admin/customers/delete", post(admin::delete_customer))
        .route("/admin/staff", get(admin::staff_page))
        .route("/admin/staff/add", post(admin::add_staff))
        .route("/admin/staff/delete", post(admin::delete_staff))
        .route("/admin/accounts", get(admin::accounts_page))
        .route("/admin/accounts/add", post(admin::add_account))
        .route("/admin/accounts/delete", post(admin::delete_account))
        .route("/admin/reports", get(admin::reports_page))
        .route("/shop", get(shop::storefront))
        .route("/shop/buy", post(shop::buy))
        .route("/shop/history", get(shop::history))
        .layer(CookieManagerLayer::new())
        .with_state(state)
}

async fn shutdown_signal() {
    // Ctrl+C is enough for a single-store deployment
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

// =============================================================================
// Errors
// =============================================================================

/// Storage failure surfaced to the browser as a 500 page. Business
/// refusals (bad login, sold-out book) never become a `WebError`; the
/// handlers render those inline.
pub struct WebError(DbError);

impl From<DbError> for WebError {
    fn from(err: DbError) -> Self {
        WebError(err)
    }
}

impl From<PurchaseError> for WebError {
    fn from(err: PurchaseError) -> Self {
        match err {
            PurchaseError::Db(e) => WebError(e),
            // business refusals are handled before conversion; if one
            // leaks through, render it rather than panic
            PurchaseError::Core(e) => WebError(DbError::Internal(e.to_string())),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        error!(error = %self.0, "Request failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            views::error_page(&self.0.to_string()),
        )
            .into_response()
    }
}

// =============================================================================
// Session guards
// =============================================================================

/// Resolves the session role from the request cookie, if any.
pub async fn session_of(state: &AppState, cookies: &Cookies) -> Option<SessionContext> {
    let cookie = cookies.get(SESSION_COOKIE)?;
    let id = Uuid::parse_str(cookie.value()).ok()?;
    state.sessions.get(id).await
}

/// Admin pages bounce everyone else back to the login page.
pub async fn require_admin(state: &AppState, cookies: &Cookies) -> Result<(), Redirect> {
    match session_of(state, cookies).await {
        Some(SessionContext::Admin) => Ok(()),
        _ => Err(Redirect::to("/")),
    }
}

/// Shop pages need a customer session; yields the customer id.
pub async fn require_customer(state: &AppState, cookies: &Cookies) -> Result<i64, Redirect> {
    match session_of(state, cookies).await {
        Some(SessionContext::Customer { cust_id }) => Ok(cust_id),
        _ => Err(Redirect::to("/")),
    }
}

// =============================================================================
// Login / logout
// =============================================================================

async fn index(State(state): State<AppState>, cookies: Cookies) -> Response {
    match session_of(&state, &cookies).await {
        Some(SessionContext::Admin) => Redirect::to("/admin").into_response(),
        Some(SessionContext::Customer { .. }) => Redirect::to("/shop").into_response(),
        None => views::login_page(None).into_response(),
    }
}

#[derive(Deserialize)]
struct LoginForm {
    login_id: String,
    password: String,
}

async fn handle_login(
    State(state): State<AppState>,
    cookies: Cookies,
    Form(form): Form<LoginForm>,
) -> Result<Response, WebError> {
    match auth::login(&state.db, &form.login_id, &form.password).await {
        Ok(ctx) => {
            let id = state.sessions.insert(ctx).await;

            let mut cookie = Cookie::new(SESSION_COOKIE, id.to_string());
            cookie.set_path("/");
            cookie.set_http_only(true);
            cookies.add(cookie);

            let target = if ctx.is_admin() { "/admin" } else { "/shop" };
            Ok(Redirect::to(target).into_response())
        }
        Err(LoginError::Db(e)) => Err(e.into()),
        Err(e) => Ok(views::login_page(Some(&e.to_string())).into_response()),
    }
}

async fn handle_logout(State(state): State<AppState>, cookies: Cookies) -> Redirect {
    if let Some(cookie) = cookies.get(SESSION_COOKIE) {
        if let Ok(id) = Uuid::parse_str(cookie.value()) {
            state.sessions.remove(id).await;
        }
        let mut expired = Cookie::new(SESSION_COOKIE, "");
        expired.set_path("/");
        cookies.remove(expired);
    }
    Redirect::to("/")
}
