//! End-to-end scenarios across the catalog, validator and order desk.

#![allow(clippy::unwrap_used)]

use barista_core::{
    Catalog, MemoryEnvironment, OrderDesk, OrderStatus, Selection, SelectionInput,
    SelectionValidator, UserId,
};

/// The espresso-bar walkthrough: Latte and Americano, Temperature
/// (required, max 1) and Milk (optional, max 1), both options on the
/// Latte, only Temperature on the Americano.
#[tokio::test]
async fn espresso_bar_catalog_walkthrough() {
    let env = MemoryEnvironment::in_memory();
    let catalog = Catalog::new(env.catalog.clone());
    let validator = SelectionValidator::new(env.catalog.clone());

    let latte = catalog
        .create_item("Latte", "Classic espresso and steamed milk")
        .await
        .unwrap();
    let americano = catalog
        .create_item("Americano", "Espresso with hot water")
        .await
        .unwrap();

    let temperature = catalog.create_option("Temperature", true, 1).await.unwrap();
    let milk = catalog.create_option("Milk", false, 1).await.unwrap();

    let hot = catalog.create_choice(temperature, "Hot").await.unwrap();
    let cold = catalog.create_choice(temperature, "Cold").await.unwrap();
    let whole = catalog.create_choice(milk, "Whole Milk").await.unwrap();
    let oat = catalog.create_choice(milk, "Oat Milk").await.unwrap();

    catalog.attach_option(latte, temperature).await.unwrap();
    catalog.attach_option(latte, milk).await.unwrap();
    catalog.attach_option(americano, temperature).await.unwrap();

    // The POS shows the right choices for each item.
    let latte_temps: Vec<_> = catalog
        .choices_for(latte, temperature)
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.id)
        .collect();
    assert_eq!(latte_temps, vec![hot, cold]);

    let latte_milks: Vec<_> = catalog
        .choices_for(latte, milk)
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.id)
        .collect();
    assert_eq!(latte_milks, vec![whole, oat]);

    // Milk is not offered on the Americano at all.
    assert!(catalog
        .choices_for(americano, milk)
        .await
        .unwrap_err()
        .is_not_found());

    // A fully specified Latte is valid.
    let verdict = validator
        .is_selection_set_valid(
            latte,
            &[
                Selection { option: temperature, choice: hot },
                Selection { option: milk, choice: whole },
            ],
        )
        .await
        .unwrap();
    assert!(verdict.ok);

    // Missing the required Temperature is rejected.
    let verdict = validator
        .is_selection_set_valid(latte, &[Selection { option: milk, choice: whole }])
        .await
        .unwrap();
    assert!(!verdict.ok);
    assert_eq!(
        verdict.reason.unwrap(),
        format!("Required option {temperature} is missing for item {latte}.")
    );

    // Two temperatures exceed the option's maximum.
    let verdict = validator
        .is_selection_set_valid(
            latte,
            &[
                Selection { option: temperature, choice: hot },
                Selection { option: temperature, choice: cold },
            ],
        )
        .await
        .unwrap();
    assert!(!verdict.ok);
    assert_eq!(
        verdict.reason.unwrap(),
        format!("Option {temperature} exceeds its maximum allowed choices (1).")
    );

    // Milk on an Americano names the unattached option.
    let verdict = validator
        .is_selection_set_valid(
            americano,
            &[
                Selection { option: temperature, choice: hot },
                Selection { option: milk, choice: whole },
            ],
        )
        .await
        .unwrap();
    assert_eq!(
        verdict.reason.unwrap(),
        format!("Option {milk} is not attached to item {americano}.")
    );
}

/// Order lifecycle walkthrough: open, reject a zero quantity, record a
/// line with snapshots, complete, then refuse further changes.
#[tokio::test]
async fn order_lifecycle_walkthrough() {
    let env = MemoryEnvironment::in_memory();
    let catalog = Catalog::new(env.catalog.clone());
    let desk = OrderDesk::new(env.orders.clone());

    let latte = catalog
        .create_item("Latte", "Classic espresso and steamed milk")
        .await
        .unwrap();
    let temperature = catalog.create_option("Temperature", true, 1).await.unwrap();
    let hot = catalog.create_choice(temperature, "Hot").await.unwrap();
    catalog.attach_option(latte, temperature).await.unwrap();

    let order = desk.open(UserId::new()).await.unwrap();
    assert_eq!(desk.status(order).await.unwrap(), OrderStatus::Pending);

    let err = desk.add_item(order, latte, 0, "Latte", &[]).await.unwrap_err();
    assert_eq!(err.to_string(), "Quantity must be a positive number.");
    assert!(desk.lines(order).await.unwrap().is_empty());

    let selections = vec![SelectionInput {
        option: temperature,
        choice: hot,
        display_option_name: "Temperature".to_owned(),
        display_choice_name: "Hot".to_owned(),
    }];
    desk.add_item(order, latte, 1, "Latte", &selections)
        .await
        .unwrap();

    let lines = desk.lines(order).await.unwrap();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].display_item_name, "Latte");
    assert_eq!(lines[0].selections[0].display_choice_name, "Hot");

    desk.submit(order).await.unwrap();
    desk.complete(order).await.unwrap();
    assert_eq!(desk.status(order).await.unwrap(), OrderStatus::Completed);

    let err = desk
        .add_item(order, latte, 1, "Latte", &selections)
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Cannot add items to an order with status 'completed'. Only 'pending' orders can be modified."
    );
}

/// Disallowing a selected choice flips an already-checked selection set to
/// invalid on re-check; re-allowing restores it. Recorded order lines are
/// snapshots and never change either way.
#[tokio::test]
async fn disallow_rechecks_do_not_rewrite_recorded_lines() {
    let env = MemoryEnvironment::in_memory();
    let catalog = Catalog::new(env.catalog.clone());
    let validator = SelectionValidator::new(env.catalog.clone());
    let desk = OrderDesk::new(env.orders.clone());

    let latte = catalog.create_item("Latte", "").await.unwrap();
    let milk = catalog.create_option("Milk", false, 1).await.unwrap();
    let oat = catalog.create_choice(milk, "Oat Milk").await.unwrap();
    catalog.attach_option(latte, milk).await.unwrap();

    let selections = [Selection { option: milk, choice: oat }];
    assert!(validator
        .is_selection_set_valid(latte, &selections)
        .await
        .unwrap()
        .ok);

    // Record the (then valid) configuration on an order.
    let order = desk.open(UserId::new()).await.unwrap();
    desk.add_item(
        order,
        latte,
        1,
        "Latte",
        &[SelectionInput {
            option: milk,
            choice: oat,
            display_option_name: "Milk".to_owned(),
            display_choice_name: "Oat Milk".to_owned(),
        }],
    )
    .await
    .unwrap();

    catalog.disallow_choice(latte, milk, oat).await.unwrap();
    assert!(!validator
        .is_selection_set_valid(latte, &selections)
        .await
        .unwrap()
        .ok);

    catalog.allow_choice(latte, milk, oat).await.unwrap();
    assert!(validator
        .is_selection_set_valid(latte, &selections)
        .await
        .unwrap()
        .ok);

    // The recorded line kept its snapshot through both catalog edits.
    let lines = desk.lines(order).await.unwrap();
    assert_eq!(lines[0].selections[0].display_choice_name, "Oat Milk");
}

/// choices_for returns exactly the option's choices minus the pair's
/// disallow-set, order-insensitively.
#[tokio::test]
async fn choices_for_is_set_difference() {
    let env = MemoryEnvironment::in_memory();
    let catalog = Catalog::new(env.catalog.clone());

    let smoothie = catalog.create_item("Smoothie", "").await.unwrap();
    let fruit = catalog.create_option("Fruit", false, 3).await.unwrap();
    let mut all = Vec::new();
    for name in ["Mango", "Banana", "Kiwi", "Strawberry"] {
        all.push(catalog.create_choice(fruit, name).await.unwrap());
    }
    catalog.attach_option(smoothie, fruit).await.unwrap();

    catalog.disallow_choice(smoothie, fruit, all[1]).await.unwrap();
    catalog.disallow_choice(smoothie, fruit, all[3]).await.unwrap();

    let mut offered: Vec<_> = catalog
        .choices_for(smoothie, fruit)
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.id)
        .collect();
    let mut expected = vec![all[0], all[2]];
    offered.sort_unstable_by_key(|id| id.0);
    expected.sort_unstable_by_key(|id| id.0);
    assert_eq!(offered, expected);
}
