//! Catalog management and selection-validation endpoints.

use super::Empty;
use crate::error::AppError;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use barista_core::providers::{Choice, MenuOption};
use barista_core::{ChoiceId, ItemId, OptionId, Selection, Verdict};
use serde::{Deserialize, Serialize};

/// Request to create an item.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateItemRequest {
    /// Display name.
    pub name: String,

    /// Free-form description.
    pub description: String,
}

/// Response after creating an item.
#[derive(Debug, Clone, Serialize)]
pub struct CreateItemResponse {
    /// The new item's id.
    pub item: ItemId,
}

/// Request to activate or deactivate an item.
#[derive(Debug, Clone, Deserialize)]
pub struct SetItemActiveRequest {
    /// The new active flag.
    pub is_active: bool,
}

/// Request to create an option.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOptionRequest {
    /// Display name.
    pub name: String,

    /// Whether the option is required on attached items.
    pub required: bool,

    /// Maximum selections per line, at least 1.
    pub max_choices: u32,
}

/// Response after creating an option.
#[derive(Debug, Clone, Serialize)]
pub struct CreateOptionResponse {
    /// The new option's id.
    pub option: OptionId,
}

/// Request to create a choice under an option.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateChoiceRequest {
    /// Display name.
    pub name: String,
}

/// Response after creating a choice.
#[derive(Debug, Clone, Serialize)]
pub struct CreateChoiceResponse {
    /// The new choice's id.
    pub choice: ChoiceId,
}

/// Request naming a choice of the pairing's option.
#[derive(Debug, Clone, Deserialize)]
pub struct ChoiceRuleRequest {
    /// The choice to disallow or re-allow.
    pub choice: ChoiceId,
}

/// Request to validate a candidate selection set.
#[derive(Debug, Clone, Deserialize)]
pub struct ValidateSelectionsRequest {
    /// The candidate (option, choice) pairs.
    pub selections: Vec<Selection>,
}

/// Create a new item.
///
/// # Endpoint
///
/// ```text
/// POST /menu/items
/// {"name": "Latte", "description": "Classic espresso and steamed milk"}
/// ```
pub async fn create_item(
    State(state): State<AppState>,
    Json(request): Json<CreateItemRequest>,
) -> Result<(StatusCode, Json<CreateItemResponse>), AppError> {
    let item = state
        .catalog
        .create_item(&request.name, &request.description)
        .await?;
    Ok((StatusCode::CREATED, Json(CreateItemResponse { item })))
}

/// Activate or deactivate an item.
///
/// # Endpoint
///
/// ```text
/// POST /menu/items/:item/active
/// {"is_active": false}
/// ```
pub async fn set_item_active(
    State(state): State<AppState>,
    Path(item): Path<ItemId>,
    Json(request): Json<SetItemActiveRequest>,
) -> Result<Json<Empty>, AppError> {
    state.catalog.set_item_active(item, request.is_active).await?;
    Ok(Json(Empty {}))
}

/// Create a new customization option.
///
/// # Endpoint
///
/// ```text
/// POST /menu/options
/// {"name": "Temperature", "required": true, "max_choices": 1}
/// ```
pub async fn create_option(
    State(state): State<AppState>,
    Json(request): Json<CreateOptionRequest>,
) -> Result<(StatusCode, Json<CreateOptionResponse>), AppError> {
    let option = state
        .catalog
        .create_option(&request.name, request.required, request.max_choices)
        .await?;
    Ok((StatusCode::CREATED, Json(CreateOptionResponse { option })))
}

/// Create a new choice under an option.
///
/// # Endpoint
///
/// ```text
/// POST /menu/options/:option/choices
/// {"name": "Hot"}
/// ```
pub async fn create_choice(
    State(state): State<AppState>,
    Path(option): Path<OptionId>,
    Json(request): Json<CreateChoiceRequest>,
) -> Result<(StatusCode, Json<CreateChoiceResponse>), AppError> {
    let choice = state.catalog.create_choice(option, &request.name).await?;
    Ok((StatusCode::CREATED, Json(CreateChoiceResponse { choice })))
}

/// Offer an option on an item.
///
/// # Endpoint
///
/// ```text
/// POST /menu/items/:item/options/:option
/// ```
pub async fn attach_option(
    State(state): State<AppState>,
    Path((item, option)): Path<(ItemId, OptionId)>,
) -> Result<Json<Empty>, AppError> {
    state.catalog.attach_option(item, option).await?;
    Ok(Json(Empty {}))
}

/// Stop offering an option on an item.
///
/// # Endpoint
///
/// ```text
/// DELETE /menu/items/:item/options/:option
/// ```
pub async fn detach_option(
    State(state): State<AppState>,
    Path((item, option)): Path<(ItemId, OptionId)>,
) -> Result<Json<Empty>, AppError> {
    state.catalog.detach_option(item, option).await?;
    Ok(Json(Empty {}))
}

/// Exclude a choice of an attached option on this item.
///
/// # Endpoint
///
/// ```text
/// POST /menu/items/:item/options/:option/disallow
/// {"choice": "..."}
/// ```
pub async fn disallow_choice(
    State(state): State<AppState>,
    Path((item, option)): Path<(ItemId, OptionId)>,
    Json(request): Json<ChoiceRuleRequest>,
) -> Result<Json<Empty>, AppError> {
    state
        .catalog
        .disallow_choice(item, option, request.choice)
        .await?;
    Ok(Json(Empty {}))
}

/// Re-admit a previously disallowed choice.
///
/// # Endpoint
///
/// ```text
/// POST /menu/items/:item/options/:option/allow
/// {"choice": "..."}
/// ```
pub async fn allow_choice(
    State(state): State<AppState>,
    Path((item, option)): Path<(ItemId, OptionId)>,
    Json(request): Json<ChoiceRuleRequest>,
) -> Result<Json<Empty>, AppError> {
    state
        .catalog
        .allow_choice(item, option, request.choice)
        .await?;
    Ok(Json(Empty {}))
}

/// The options attached to an item, as a row list.
///
/// # Endpoint
///
/// ```text
/// GET /menu/items/:item/options
/// ```
pub async fn options_for_item(
    State(state): State<AppState>,
    Path(item): Path<ItemId>,
) -> Result<Json<Vec<MenuOption>>, AppError> {
    Ok(Json(state.catalog.options_for_item(item).await?))
}

/// The option's choices offered on this item, as a row list.
///
/// # Endpoint
///
/// ```text
/// GET /menu/items/:item/options/:option/choices
/// ```
pub async fn choices_for(
    State(state): State<AppState>,
    Path((item, option)): Path<(ItemId, OptionId)>,
) -> Result<Json<Vec<Choice>>, AppError> {
    Ok(Json(state.catalog.choices_for(item, option).await?))
}

/// Judge a candidate selection set. Queries return row lists, so the
/// single verdict comes back as a one-element list.
///
/// # Endpoint
///
/// ```text
/// POST /menu/items/:item/validate
/// {"selections": [{"option": "...", "choice": "..."}]}
/// ```
pub async fn validate_selections(
    State(state): State<AppState>,
    Path(item): Path<ItemId>,
    Json(request): Json<ValidateSelectionsRequest>,
) -> Result<Json<Vec<Verdict>>, AppError> {
    let verdict = state
        .validator
        .is_selection_set_valid(item, &request.selections)
        .await?;
    Ok(Json(vec![verdict]))
}
