use support::project::TestProject;
use vamos_db::prelude::*;

#[test]
fn checkout() {
    let project = match TestProject::try_new() {
        Some(project) => project,
        None => return,
    };

    let user = project.create_user().finish();
    let event = project.create_event().with_ticket_type().finish();
    let ticket_type = event.ticket_types(&project.connection).unwrap().remove(0);

    let items = vec![CheckoutItem {
        ticket_type_id: ticket_type.id,
        quantity: 2,
    }];
    let order = Order::checkout(user.id, &items, None, &project.connection).unwrap();

    assert_eq!(order.user_id, user.id);
    assert_eq!(order.status, OrderStatus::Paid);
    assert!(order.paid_at.is_some());
    assert_eq!(order.subtotal_in_cents, ticket_type.price_in_cents * 2);
    assert_eq!(order.discount_in_cents, 0);
    assert_eq!(order.total_in_cents, order.subtotal_in_cents);

    let order_items = order.items(&project.connection).unwrap();
    assert_eq!(order_items.len(), 1);
    assert_eq!(order_items[0].quantity, 2);
    // Unit price is snapshotted at purchase time
    assert_eq!(order_items[0].unit_price_in_cents, ticket_type.price_in_cents);

    // One admission per ticket row
    assert_eq!(order.tickets(&project.connection).unwrap().len(), 2);

    let notifications = Notification::find_for_user(user.id, &project.connection).unwrap();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].kind, NotificationKind::OrderCompleted);
}

#[test]
fn checkout_with_fixed_coupon() {
    let project = match TestProject::try_new() {
        Some(project) => project,
        None => return,
    };

    let user = project.create_user().finish();
    let event = project.create_event().with_ticket_type().finish();
    let ticket_type = event.ticket_types(&project.connection).unwrap().remove(0);
    let coupon = project.create_coupon().with_discount_in_cents(1_000).finish();

    let items = vec![CheckoutItem {
        ticket_type_id: ticket_type.id,
        quantity: 2,
    }];
    let order = Order::checkout(user.id, &items, Some(&coupon.code), &project.connection).unwrap();

    assert_eq!(order.coupon_id, Some(coupon.id));
    assert_eq!(order.discount_in_cents, 1_000);
    assert_eq!(order.total_in_cents, order.subtotal_in_cents - 1_000);
}

#[test]
fn checkout_with_percentage_coupon() {
    let project = match TestProject::try_new() {
        Some(project) => project,
        None => return,
    };

    let user = project.create_user().finish();
    let event = project.create_event().with_ticket_type().finish();
    let ticket_type = event.ticket_types(&project.connection).unwrap().remove(0);
    let coupon = project.create_coupon().with_discount_as_percentage(10).finish();

    let items = vec![CheckoutItem {
        ticket_type_id: ticket_type.id,
        quantity: 2,
    }];
    let order = Order::checkout(user.id, &items, Some(&coupon.code), &project.connection).unwrap();

    assert_eq!(order.discount_in_cents, order.subtotal_in_cents / 10);
    assert_eq!(
        order.total_in_cents,
        order.subtotal_in_cents - order.discount_in_cents
    );
}

#[test]
fn checkout_rejects_empty_orders() {
    let project = match TestProject::try_new() {
        Some(project) => project,
        None => return,
    };

    let user = project.create_user().finish();
    let result = Order::checkout(user.id, &[], None, &project.connection);
    assert!(result.is_err());
}

#[test]
fn checkout_enforces_max_per_order() {
    let project = match TestProject::try_new() {
        Some(project) => project,
        None => return,
    };

    let user = project.create_user().finish();
    let ticket_type = project.create_ticket_type().with_max_per_order(4).finish();

    let items = vec![CheckoutItem {
        ticket_type_id: ticket_type.id,
        quantity: 5,
    }];
    let result = Order::checkout(user.id, &items, None, &project.connection);

    match result.unwrap_err().error_code {
        ErrorCode::ValidationError { errors } => assert!(errors.contains_key("quantity")),
        _ => panic!("Expected validation error"),
    }
}

#[test]
fn checkout_enforces_availability() {
    let project = match TestProject::try_new() {
        Some(project) => project,
        None => return,
    };

    let user = project.create_user().finish();
    let ticket_type = project
        .create_ticket_type()
        .with_quantity(3)
        .with_max_per_order(10)
        .finish();

    let items = vec![CheckoutItem {
        ticket_type_id: ticket_type.id,
        quantity: 2,
    }];
    Order::checkout(user.id, &items, None, &project.connection).unwrap();

    // Only one ticket left now
    let result = Order::checkout(user.id, &items, None, &project.connection);
    match result.unwrap_err().error_code {
        ErrorCode::ValidationError { errors } => assert!(errors.contains_key("quantity")),
        _ => panic!("Expected validation error"),
    }
}

#[test]
fn checkout_enforces_coupon_use_limit() {
    let project = match TestProject::try_new() {
        Some(project) => project,
        None => return,
    };

    let event = project.create_event().with_ticket_type().finish();
    let coupon = project.create_coupon().with_max_uses(1).finish();

    project
        .create_order()
        .for_event(&event)
        .with_coupon_code(&coupon.code)
        .finish();

    let user = project.create_user().finish();
    let ticket_type = event.ticket_types(&project.connection).unwrap().remove(0);
    let items = vec![CheckoutItem {
        ticket_type_id: ticket_type.id,
        quantity: 1,
    }];
    let result = Order::checkout(user.id, &items, Some(&coupon.code), &project.connection);
    assert!(result.is_err());
}

#[test]
fn find_for_user_returns_own_orders_newest_first() {
    let project = match TestProject::try_new() {
        Some(project) => project,
        None => return,
    };

    let user = project.create_user().finish();
    let other = project.create_user().finish();
    let first = project.create_order().for_user(&user).finish();
    let second = project.create_order().for_user(&user).finish();
    project.create_order().for_user(&other).finish();

    let orders = Order::find_for_user(user.id, &project.connection).unwrap();
    let ids: Vec<i64> = orders.iter().map(|o| o.id).collect();
    assert_eq!(vec![second.id, first.id], ids);
}
