//! Request routing.
//!
//! Composes every named core operation into a single Axum router. The
//! router is the swappable dispatch collaborator: it owns paths and
//! serialization, the core knows nothing about either.

use crate::handlers;
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post, put},
};
use tower_http::trace::TraceLayer;

/// Build the dispatch router over the given application state.
///
/// # Routes
///
/// Catalog:
/// - `POST   /menu/items` - create an item
/// - `POST   /menu/items/:item/active` - set the active flag
/// - `POST   /menu/options` - create an option
/// - `POST   /menu/options/:option/choices` - create a choice
/// - `POST   /menu/items/:item/options/:option` - attach
/// - `DELETE /menu/items/:item/options/:option` - detach
/// - `POST   /menu/items/:item/options/:option/disallow` - disallow a choice
/// - `POST   /menu/items/:item/options/:option/allow` - re-allow a choice
/// - `GET    /menu/items/:item/options` - attached options
/// - `GET    /menu/items/:item/options/:option/choices` - offered choices
/// - `POST   /menu/items/:item/validate` - judge a selection set
///
/// Orders:
/// - `POST /orders` - open
/// - `POST /orders/:order/items` - add a line (validator-gated)
/// - `POST /orders/:order/submit` - submit gate (requires ≥ 1 line)
/// - `POST /orders/:order/complete` - complete
/// - `POST /orders/:order/cancel` - cancel
/// - `GET  /orders/:order/lines` - lines with selections
/// - `GET  /orders/:order/status` - status row
///
/// Accounts:
/// - `POST /accounts/register`, `POST /accounts/login`,
///   `POST /accounts/password`, `GET /accounts/by-username/:username`
/// - `PUT /profiles/:user`, `GET /profiles/:user`
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/menu/items", post(handlers::menu::create_item))
        .route(
            "/menu/items/:item/active",
            post(handlers::menu::set_item_active),
        )
        .route("/menu/options", post(handlers::menu::create_option))
        .route(
            "/menu/options/:option/choices",
            post(handlers::menu::create_choice),
        )
        .route(
            "/menu/items/:item/options",
            get(handlers::menu::options_for_item),
        )
        .route(
            "/menu/items/:item/options/:option",
            post(handlers::menu::attach_option).delete(handlers::menu::detach_option),
        )
        .route(
            "/menu/items/:item/options/:option/disallow",
            post(handlers::menu::disallow_choice),
        )
        .route(
            "/menu/items/:item/options/:option/allow",
            post(handlers::menu::allow_choice),
        )
        .route(
            "/menu/items/:item/options/:option/choices",
            get(handlers::menu::choices_for),
        )
        .route(
            "/menu/items/:item/validate",
            post(handlers::menu::validate_selections),
        )
        .route("/orders", post(handlers::orders::open_order))
        .route("/orders/:order/items", post(handlers::orders::add_item))
        .route("/orders/:order/submit", post(handlers::orders::submit_order))
        .route(
            "/orders/:order/complete",
            post(handlers::orders::complete_order),
        )
        .route("/orders/:order/cancel", post(handlers::orders::cancel_order))
        .route("/orders/:order/lines", get(handlers::orders::order_lines))
        .route("/orders/:order/status", get(handlers::orders::order_status))
        .route("/accounts/register", post(handlers::accounts::register))
        .route("/accounts/login", post(handlers::accounts::login))
        .route(
            "/accounts/password",
            post(handlers::accounts::change_password),
        )
        .route(
            "/accounts/by-username/:username",
            get(handlers::accounts::user_by_username),
        )
        .route(
            "/profiles/:user",
            put(handlers::accounts::set_profile).get(handlers::accounts::get_profile),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
