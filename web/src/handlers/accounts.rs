//! Credential and profile endpoints.

use super::Empty;
use crate::error::AppError;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use barista_core::{FieldUpdate, UserId};
use serde::{Deserialize, Deserializer, Serialize};

/// Request to register or log in.
#[derive(Debug, Clone, Deserialize)]
pub struct CredentialsRequest {
    /// Username, unique at registration.
    pub username: String,

    /// Plain-text password; hashed before storage, never persisted.
    pub password: String,
}

/// Response carrying the authenticated or registered user.
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    /// The user's id.
    pub user: UserId,
}

/// Request to change a password.
#[derive(Debug, Clone, Deserialize)]
pub struct ChangePasswordRequest {
    /// The user changing their password.
    pub user: UserId,

    /// The current password.
    pub old_password: String,

    /// The replacement password.
    pub new_password: String,
}

/// One user row, as returned by the username lookup query.
#[derive(Debug, Clone, Serialize)]
pub struct UserRow {
    /// The matching user's id.
    pub user: UserId,
}

/// Request to create or update a profile.
///
/// Each field distinguishes "not provided" (absent) from "explicitly
/// cleared" (null): absent fields stay untouched, null fields are reset.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SetProfileRequest {
    /// Display name update.
    #[serde(default, deserialize_with = "tagged_field")]
    pub name: Option<Option<String>>,

    /// Bio update.
    #[serde(default, deserialize_with = "tagged_field")]
    pub bio: Option<Option<String>>,

    /// Avatar update; null removes the avatar.
    #[serde(default, deserialize_with = "tagged_field")]
    pub avatar: Option<Option<String>>,
}

/// One profile row, as returned by the profile query.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileRow {
    /// Display name.
    pub name: String,

    /// Free-form bio.
    pub bio: String,

    /// Avatar, omitted when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// Deserializes a present field (including an explicit null) as
/// `Some(...)`, so a missing field (the serde default, `None`) stays
/// distinguishable from `null` (`Some(None)`).
fn tagged_field<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

fn to_field_update(field: Option<Option<String>>) -> FieldUpdate<String> {
    match field {
        None => FieldUpdate::Unchanged,
        Some(None) => FieldUpdate::Clear,
        Some(Some(value)) => FieldUpdate::Set(value),
    }
}

/// Register a new user.
///
/// # Endpoint
///
/// ```text
/// POST /accounts/register
/// {"username": "mara", "password": "espresso"}
/// ```
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<CredentialsRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    let user = state
        .credentials
        .register(&request.username, &request.password)
        .await?;
    Ok((StatusCode::CREATED, Json(UserResponse { user })))
}

/// Authenticate a username/password pair.
///
/// # Endpoint
///
/// ```text
/// POST /accounts/login
/// {"username": "mara", "password": "espresso"}
/// ```
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<CredentialsRequest>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state
        .credentials
        .login(&request.username, &request.password)
        .await?;
    Ok(Json(UserResponse { user }))
}

/// Change a user's password.
///
/// # Endpoint
///
/// ```text
/// POST /accounts/password
/// {"user": "...", "old_password": "espresso", "new_password": "flat-white"}
/// ```
pub async fn change_password(
    State(state): State<AppState>,
    Json(request): Json<ChangePasswordRequest>,
) -> Result<Json<Empty>, AppError> {
    state
        .credentials
        .change_password(request.user, &request.old_password, &request.new_password)
        .await?;
    Ok(Json(Empty {}))
}

/// Look up a user by username, as a zero-or-one-element row list.
///
/// # Endpoint
///
/// ```text
/// GET /accounts/by-username/:username
/// ```
pub async fn user_by_username(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<Vec<UserRow>>, AppError> {
    let rows = state
        .credentials
        .user_by_username(&username)
        .await?
        .map(|user| UserRow { user })
        .into_iter()
        .collect();
    Ok(Json(rows))
}

/// Create or update a user's profile.
///
/// # Endpoint
///
/// ```text
/// PUT /profiles/:user
/// {"name": "Mara", "avatar": null}
/// ```
pub async fn set_profile(
    State(state): State<AppState>,
    Path(user): Path<UserId>,
    Json(request): Json<SetProfileRequest>,
) -> Result<Json<Empty>, AppError> {
    state
        .profiles
        .set_profile(
            user,
            to_field_update(request.name),
            to_field_update(request.bio),
            to_field_update(request.avatar),
        )
        .await?;
    Ok(Json(Empty {}))
}

/// The user's profile, as a one-element row list.
///
/// # Endpoint
///
/// ```text
/// GET /profiles/:user
/// ```
pub async fn get_profile(
    State(state): State<AppState>,
    Path(user): Path<UserId>,
) -> Result<Json<Vec<ProfileRow>>, AppError> {
    let profile = state.profiles.profile(user).await?;
    Ok(Json(vec![ProfileRow {
        name: profile.name,
        bio: profile.bio,
        avatar: profile.avatar,
    }]))
}
