//! Route handlers and router assembly.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use skycast_identity::AuthenticatedUser;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};

use crate::error::ApiError;
use crate::state::AppState;

/// Directory the browser assets are served from, relative to the server's
/// working directory.
const PUBLIC_DIR: &str = "public";

/// JSON request shared by register and login.
///
/// Fields are optional so presence checks happen in the handlers, not in
/// the extractor.
#[derive(Debug, Deserialize)]
pub struct CredentialRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// JSON response for register
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: String,
    pub user: AuthenticatedUser,
}

/// JSON response for login
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
    pub user: AuthenticatedUser,
}

/// Extract a present, non-empty credential pair from a request.
fn credentials(request: &CredentialRequest) -> Option<(&str, &str)> {
    let email = request.email.as_deref().filter(|e| !e.is_empty())?;
    let password = request.password.as_deref().filter(|p| !p.is_empty())?;
    Some((email, password))
}

/// POST /register - create an account at the identity provider
async fn register(
    State(state): State<AppState>,
    Json(request): Json<CredentialRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    let Some((email, password)) = credentials(&request) else {
        return Err(ApiError::bad_request("Email and password are required."));
    };

    let session = state.identity.sign_up(email, password).await.map_err(|e| {
        tracing::error!("Error registering user: {e}");
        if e.is_duplicate_email() {
            ApiError::bad_request("Email address is already in use.")
        } else {
            ApiError::bad_request("Registration failed")
        }
    })?;

    // Mirror the minimal profile record; a failed write never fails
    // registration, which has already succeeded at the provider.
    if let Err(e) = state
        .profiles
        .save_profile(&session.user.uid, &session.user.email, &session.id_token)
        .await
    {
        tracing::warn!("Profile write failed for {}: {e}", session.user.uid);
    }

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User registered successfully".to_string(),
            user: session.user,
        }),
    ))
}

/// POST /login - authenticate against the identity provider
///
/// Any provider rejection (including missing fields) maps to 401; the
/// provider is the authority on what a valid credential pair is.
async fn login(
    State(state): State<AppState>,
    Json(request): Json<CredentialRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let Some((email, password)) = credentials(&request) else {
        return Err(ApiError::unauthorized("Invalid credentials"));
    };

    let session = state.identity.sign_in(email, password).await.map_err(|e| {
        tracing::error!("Error logging in: {e}");
        ApiError::unauthorized("Invalid credentials")
    })?;

    Ok(Json(LoginResponse {
        message: "Logged in successfully".to_string(),
        token: session.id_token,
        user: session.user,
    }))
}

/// GET /weather/{city} - proxy current conditions for a city
///
/// The upstream body passes through unchanged on success.
async fn weather(
    State(state): State<AppState>,
    Path(city): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state
        .weather
        .current_by_city(&city)
        .await
        .map(Json)
        .map_err(|e| {
            tracing::error!("Error fetching weather data: {e}");
            ApiError::internal("Failed to fetch weather data")
        })
}

/// GET /health - Health check endpoint
async fn health_check() -> &'static str {
    "ok"
}

/// Create the HTTP router
pub fn create_router(state: AppState) -> Router {
    // Browser pages and their assets
    let public = ServeDir::new(PUBLIC_DIR);
    let signup_page = ServeFile::new(format!("{PUBLIC_DIR}/signup.html"));
    let login_page = ServeFile::new(format!("{PUBLIC_DIR}/login.html"));
    let home_page = ServeFile::new(format!("{PUBLIC_DIR}/home.html"));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/register", post(register))
        .route("/login", post(login).get_service(login_page))
        .route("/weather/{city}", get(weather))
        .route_service("/", signup_page.clone())
        .route_service("/signup", signup_page)
        .route_service("/home", home_page)
        .fallback_service(public)
        .layer(cors)
        .with_state(state)
}

/// Run the HTTP server
pub async fn run(state: AppState, host: &str, port: u16) -> std::io::Result<()> {
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(format!("{host}:{port}")).await?;
    tracing::info!("Server listening at http://{}", listener.local_addr()?);

    axum::serve(listener, app).await
}
