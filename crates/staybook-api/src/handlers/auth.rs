//! Auth handlers: me, sign-in, sign-up, refresh, sign-out.

use axum::Json;
use axum::extract::State;
use axum_extra::extract::cookie::{Cookie, CookieJar};

use staybook_auth::SignUp;
use staybook_core::error::{AppError, UNAUTHORIZED_MESSAGE};

use crate::dto::request::{SignInRequest, SignUpRequest};
use crate::dto::response::{AuthResponse, MessageResponse};
use crate::extractors::{RequireBearer, ValidatedJson};
use crate::state::AppState;

/// GET /api/me
///
/// Echoes the presented access token together with the user it resolves to.
pub async fn me(
    State(state): State<AppState>,
    RequireBearer(token): RequireBearer,
) -> Result<Json<AuthResponse>, AppError> {
    let token = token.ok_or_else(|| AppError::forbidden(UNAUTHORIZED_MESSAGE))?;
    let user = state.session_manager.identify(&token).await?;

    Ok(Json(AuthResponse::new(
        state.session_manager.use_auth(),
        token,
        user,
    )))
}

/// POST /api/signin
pub async fn sign_in(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(req): ValidatedJson<SignInRequest>,
) -> Result<(CookieJar, Json<AuthResponse>), AppError> {
    let manager = &state.session_manager;
    let session = manager.sign_in(&req.email, &req.password).await?;

    let jar = jar.add(refresh_cookie(&state, session.refresh_token)?);
    Ok((
        jar,
        Json(AuthResponse::new(
            manager.use_auth(),
            session.access_token,
            session.user,
        )),
    ))
}

/// POST /api/signup
pub async fn sign_up(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(req): ValidatedJson<SignUpRequest>,
) -> Result<(CookieJar, Json<AuthResponse>), AppError> {
    let manager = &state.session_manager;
    let session = manager
        .sign_up(SignUp {
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            password: req.password,
        })
        .await?;

    let jar = jar.add(refresh_cookie(&state, session.refresh_token)?);
    Ok((
        jar,
        Json(AuthResponse::new(
            manager.use_auth(),
            session.access_token,
            session.user,
        )),
    ))
}

/// GET /api/refreshToken
pub async fn refresh(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Json<AuthResponse>, AppError> {
    let manager = &state.session_manager;
    let cookie = jar.get(manager.refresh_cookie_name());
    let refreshed = manager.refresh(cookie.map(|c| c.value())).await?;

    Ok(Json(AuthResponse::new(
        manager.use_auth(),
        refreshed.access_token,
        refreshed.user,
    )))
}

/// POST /api/signout
pub async fn sign_out(
    State(state): State<AppState>,
    _bearer: RequireBearer,
    jar: CookieJar,
) -> (CookieJar, Json<MessageResponse>) {
    let name = state.session_manager.refresh_cookie_name().to_string();
    let jar = jar.remove(Cookie::build((name, "")).path("/"));

    tracing::debug!("Refresh cookie cleared");
    (jar, Json(MessageResponse::new("Signed out")))
}

/// The refresh cookie: HttpOnly, SameSite=Lax, site-wide, living as long
/// as the refresh token itself.
fn refresh_cookie(state: &AppState, value: String) -> Result<Cookie<'static>, AppError> {
    let manager = &state.session_manager;
    let raw = format!(
        "{}={}; HttpOnly; SameSite=Lax; Path=/; Max-Age={}",
        manager.refresh_cookie_name(),
        value,
        manager.refresh_ttl().num_seconds()
    );

    Cookie::parse(raw).map_err(|e| AppError::internal(format!("Failed to build refresh cookie: {e}")))
}
