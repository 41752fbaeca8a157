use rposdesk::core::cart::{Cart, CartNotice, Recorder};
use rposdesk::models::product::BusinessProduct;

fn espresso() -> BusinessProduct {
    BusinessProduct::new(1, "Espresso", 1.5)
}

fn croissant() -> BusinessProduct {
    BusinessProduct::new(2, "Croissant", 2.25)
}

#[test]
fn test_new_cart_is_empty() {
    let cart = Cart::new();
    assert!(cart.is_empty());
    assert_eq!(cart.total_items(), 0);
    assert_eq!(cart.total_amount(), 0.0);
}

#[test]
fn test_adding_twice_increments_quantity() {
    let mut cart = Cart::new();
    cart.add_to_cart(espresso());
    cart.add_to_cart(espresso());

    assert_eq!(cart.items().len(), 1);
    assert_eq!(cart.get(1).map(|i| i.quantity), Some(2));
    assert_eq!(cart.total_items(), 2);
    assert_eq!(cart.total_amount(), 3.0);
}

#[test]
fn test_add_notifies_new_vs_increased() {
    let mut cart = Cart::with_observer(Recorder::default());
    cart.add_to_cart(espresso());
    cart.add_to_cart(croissant());
    cart.add_to_cart(espresso());

    assert_eq!(
        cart.observer().notices,
        vec![
            CartNotice::Added {
                name: "Espresso".into()
            },
            CartNotice::Added {
                name: "Croissant".into()
            },
            CartNotice::QuantityIncreased {
                name: "Espresso".into(),
                quantity: 2
            },
        ]
    );
}

#[test]
fn test_items_keep_insertion_order() {
    let mut cart = Cart::new();
    cart.add_to_cart(croissant());
    cart.add_to_cart(espresso());
    cart.add_to_cart(croissant());

    let ids: Vec<i64> = cart.items().iter().map(|i| i.product.id).collect();
    assert_eq!(ids, vec![2, 1]);
}

#[test]
fn test_decrease_stops_at_one() {
    let mut cart = Cart::new();
    cart.add_to_cart(espresso());
    cart.decrease_quantity(1);
    cart.decrease_quantity(1);

    assert_eq!(cart.get(1).map(|i| i.quantity), Some(1));
    assert_eq!(cart.items().len(), 1);
}

#[test]
fn test_increase_then_decrease() {
    let mut cart = Cart::new();
    cart.add_to_cart(espresso());
    cart.increase_quantity(1);
    cart.increase_quantity(1);
    assert_eq!(cart.total_items(), 3);

    cart.decrease_quantity(1);
    assert_eq!(cart.total_items(), 2);
}

#[test]
fn test_unknown_ids_are_noops() {
    let mut cart = Cart::new();
    cart.add_to_cart(espresso());

    cart.increase_quantity(42);
    cart.decrease_quantity(42);
    cart.remove_from_cart(42);

    assert_eq!(cart.items().len(), 1);
    assert_eq!(cart.total_items(), 1);
}

#[test]
fn test_remove_drops_the_line() {
    let mut cart = Cart::new();
    cart.add_to_cart(espresso());
    cart.add_to_cart(espresso());
    cart.add_to_cart(croissant());

    cart.remove_from_cart(1);

    assert!(cart.get(1).is_none());
    assert_eq!(cart.total_items(), 1);
    assert_eq!(cart.total_amount(), 2.25);
}

#[test]
fn test_totals_follow_every_mutation() {
    let mut cart = Cart::new();
    cart.add_to_cart(espresso());
    cart.add_to_cart(espresso());
    cart.add_to_cart(croissant());
    assert_eq!(cart.total_amount(), 5.25);
    assert_eq!(cart.total_items(), 3);

    cart.decrease_quantity(1);
    assert_eq!(cart.total_amount(), 3.75);

    cart.clear_cart();
    assert!(cart.is_empty());
    assert_eq!(cart.total_amount(), 0.0);
}
