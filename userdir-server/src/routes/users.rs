//! `/users` handlers
//!
//! Store access is blocking file I/O, so it runs on the blocking pool.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use userdir_core::domain::added_message;
use userdir_core::NewUser;

use crate::error::{ApiError, MessageBody};
use crate::AppState;

/// Body of `GET /users`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsersBody {
    pub users: Vec<String>,
}

/// `GET /users` - list every stored username
pub async fn list_users(State(state): State<AppState>) -> Result<Json<UsersBody>, ApiError> {
    let service = state.users.clone();
    let users = run_blocking(move || service.list_users()).await?;

    Ok(Json(UsersBody { users }))
}

/// `POST /users` - add a username
pub async fn add_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<MessageBody>, ApiError> {
    let request = parse_body(&headers, &body)?;
    let user = match NewUser::from_json(request.get("user")) {
        Ok(user) => user,
        Err(e) => {
            tracing::warn!(error = %e, "rejected add request");
            return Err(e.into());
        }
    };

    let service = state.users.clone();
    let added = user.clone();
    run_blocking(move || service.add_user(&added)).await?;

    Ok(Json(MessageBody::new(added_message(user.as_str()))))
}

/// Decode the request body.
///
/// Bodies that are empty or not declared as JSON read as `{}`, so they fail
/// validation rather than parsing. A JSON body must be an object or array.
fn parse_body(headers: &HeaderMap, body: &[u8]) -> Result<Value, ApiError> {
    let is_json = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.trim_start().to_ascii_lowercase().starts_with("application/json"))
        .unwrap_or(false);

    if !is_json || body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Map::new()));
    }

    let value: Value =
        serde_json::from_slice(body).map_err(|e| ApiError::MalformedBody(e.to_string()))?;

    match value {
        Value::Object(_) | Value::Array(_) => Ok(value),
        _ => Err(ApiError::MalformedBody(
            "top-level value must be an object or array".to_string(),
        )),
    }
}

async fn run_blocking<T, F>(f: F) -> Result<T, ApiError>
where
    F: FnOnce() -> userdir_core::domain::result::Result<T> + Send + 'static,
    T: Send + 'static,
{
    let result = tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    Ok(result?)
}
