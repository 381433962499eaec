//! Dispatch-layer tests: every request maps to one core operation and the
//! result — success payload, row list, or `{"error"}` — is relayed
//! verbatim.

#![allow(clippy::unwrap_used)]

use axum_test::TestServer;
use barista_testing::EspressoBar;
use barista_web::{AppState, router};
use http::StatusCode;
use serde_json::{Value, json};

async fn seeded_server() -> (TestServer, EspressoBar) {
    let bar = EspressoBar::seed().await.unwrap();
    let server = TestServer::new(router(AppState::new(bar.env.clone()))).unwrap();
    (server, bar)
}

#[tokio::test]
async fn health_endpoint_responds() {
    let (server, _bar) = seeded_server().await;
    let response = server.get("/health").await;
    response.assert_status_ok();
}

#[tokio::test]
async fn menu_queries_return_row_lists() {
    let (server, bar) = seeded_server().await;

    let response = server
        .get(&format!("/menu/items/{}/options", bar.latte))
        .await;
    response.assert_status_ok();
    let rows: Vec<Value> = response.json();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["name"], "Temperature");
    assert_eq!(rows[0]["required"], true);
    assert_eq!(rows[1]["name"], "Milk");

    let response = server
        .get(&format!(
            "/menu/items/{}/options/{}/choices",
            bar.latte, bar.milk
        ))
        .await;
    response.assert_status_ok();
    let rows: Vec<Value> = response.json();
    let names: Vec<_> = rows.iter().map(|r| r["name"].clone()).collect();
    assert_eq!(names, vec![json!("Whole Milk"), json!("Oat Milk")]);
}

#[tokio::test]
async fn unattached_option_query_relays_the_error_shape() {
    let (server, bar) = seeded_server().await;

    let response = server
        .get(&format!(
            "/menu/items/{}/options/{}/choices",
            bar.americano, bar.milk
        ))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(
        body["error"],
        format!(
            "Option {} is not attached to item {}.",
            bar.milk, bar.americano
        )
    );
}

#[tokio::test]
async fn validation_query_returns_one_verdict_row() {
    let (server, bar) = seeded_server().await;

    let response = server
        .post(&format!("/menu/items/{}/validate", bar.latte))
        .json(&json!({
            "selections": [
                {"option": bar.temperature, "choice": bar.hot},
                {"option": bar.milk, "choice": bar.whole_milk},
            ]
        }))
        .await;
    response.assert_status_ok();
    let rows: Vec<Value> = response.json();
    assert_eq!(rows, vec![json!({"ok": true})]);

    let response = server
        .post(&format!("/menu/items/{}/validate", bar.latte))
        .json(&json!({
            "selections": [{"option": bar.milk, "choice": bar.whole_milk}]
        }))
        .await;
    let rows: Vec<Value> = response.json();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["ok"], false);
    assert_eq!(
        rows[0]["reason"],
        format!(
            "Required option {} is missing for item {}.",
            bar.temperature, bar.latte
        )
    );
}

#[tokio::test]
async fn add_item_is_gated_by_the_validator() {
    let (server, bar) = seeded_server().await;

    let response = server
        .post("/orders")
        .json(&json!({"user": uuid::Uuid::new_v4()}))
        .await;
    response.assert_status(StatusCode::CREATED);
    let order = response.json::<Value>()["order"].clone();

    // Missing the required Temperature: rejected with the verdict's
    // reason, nothing recorded.
    let response = server
        .post(&format!("/orders/{}/items", order.as_str().unwrap()))
        .json(&json!({
            "item": bar.latte,
            "qty": 1,
            "display_item_name": "Latte",
            "selections": [{
                "option": bar.milk,
                "choice": bar.whole_milk,
                "display_option_name": "Milk",
                "display_choice_name": "Whole Milk",
            }]
        }))
        .await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert_eq!(
        body["error"],
        format!(
            "Required option {} is missing for item {}.",
            bar.temperature, bar.latte
        )
    );

    let response = server
        .get(&format!("/orders/{}/lines", order.as_str().unwrap()))
        .await;
    assert_eq!(response.json::<Vec<Value>>().len(), 0);

    // A valid configuration is recorded.
    let response = server
        .post(&format!("/orders/{}/items", order.as_str().unwrap()))
        .json(&json!({
            "item": bar.latte,
            "qty": 2,
            "display_item_name": "Latte",
            "selections": [{
                "option": bar.temperature,
                "choice": bar.hot,
                "display_option_name": "Temperature",
                "display_choice_name": "Hot",
            }]
        }))
        .await;
    response.assert_status(StatusCode::CREATED);

    let response = server
        .get(&format!("/orders/{}/lines", order.as_str().unwrap()))
        .await;
    let rows: Vec<Value> = response.json();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["qty"], 2);
    assert_eq!(rows[0]["display_item_name"], "Latte");
    assert_eq!(rows[0]["selections"][0]["display_choice_name"], "Hot");
}

#[tokio::test]
async fn submit_requires_at_least_one_line() {
    let (server, _bar) = seeded_server().await;

    let response = server
        .post("/orders")
        .json(&json!({"user": uuid::Uuid::new_v4()}))
        .await;
    let order = response.json::<Value>()["order"].clone();

    let response = server
        .post(&format!("/orders/{}/submit", order.as_str().unwrap()))
        .await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert_eq!(body["error"], "Order must have at least one line.");
}

#[tokio::test]
async fn terminal_transitions_relay_invalid_state_messages() {
    let (server, _bar) = seeded_server().await;

    let response = server
        .post("/orders")
        .json(&json!({"user": uuid::Uuid::new_v4()}))
        .await;
    let order_value = response.json::<Value>();
    let order = order_value["order"].as_str().unwrap();

    server
        .post(&format!("/orders/{order}/complete"))
        .await
        .assert_status_ok();

    let response = server.post(&format!("/orders/{order}/cancel")).await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert_eq!(
        body["error"],
        format!("Order with ID {order} is already 'completed' and cannot be canceled.")
    );

    let response = server.get(&format!("/orders/{order}/status")).await;
    let rows: Vec<Value> = response.json();
    assert_eq!(rows, vec![json!({"status": "completed"})]);
}

#[tokio::test]
async fn accounts_round_trip_through_the_dispatcher() {
    let (server, _bar) = seeded_server().await;

    let response = server
        .post("/accounts/register")
        .json(&json!({"username": "mara", "password": "espresso"}))
        .await;
    response.assert_status(StatusCode::CREATED);
    let user_value = response.json::<Value>();
    let user = user_value["user"].as_str().unwrap();

    let response = server
        .post("/accounts/login")
        .json(&json!({"username": "mara", "password": "wrong"}))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "Invalid username or password.");

    let response = server.get("/accounts/by-username/mara").await;
    let rows: Vec<Value> = response.json();
    assert_eq!(rows, vec![json!({"user": user})]);

    let response = server.get("/accounts/by-username/nobody").await;
    assert_eq!(response.json::<Vec<Value>>().len(), 0);

    // Profile upsert with a tagged clear: set avatar, then null it away.
    server
        .put(&format!("/profiles/{user}"))
        .json(&json!({"name": "Mara", "avatar": "avatar.png"}))
        .await
        .assert_status_ok();
    server
        .put(&format!("/profiles/{user}"))
        .json(&json!({"avatar": null}))
        .await
        .assert_status_ok();

    let response = server.get(&format!("/profiles/{user}")).await;
    let rows: Vec<Value> = response.json();
    assert_eq!(rows, vec![json!({"name": "Mara", "bio": ""})]);
}
