use support::project::TestProject;
use vamos_db::dev::times;
use vamos_db::prelude::*;

#[test]
fn create_uppercases_the_code() {
    let project = match TestProject::try_new() {
        Some(project) => project,
        None => return,
    };

    let coupon = Coupon::create("early-bird", Some(500), None, 10, times::zero(), times::infinity())
        .commit(&project.connection)
        .unwrap();
    assert_eq!(coupon.code, "EARLY-BIRD");

    // Lookup is case insensitive through the same normalization
    let found = Coupon::find_by_code("Early-Bird", &project.connection).unwrap();
    assert_eq!(found.id, coupon.id);
}

#[test]
fn create_requires_exactly_one_discount_form() {
    let project = match TestProject::try_new() {
        Some(project) => project,
        None => return,
    };

    let both = Coupon::create("BOTH", Some(500), Some(10), 10, times::zero(), times::infinity())
        .commit(&project.connection);
    assert!(both.is_err());

    let neither = Coupon::create("NEITHER", None, None, 10, times::zero(), times::infinity())
        .commit(&project.connection);
    assert!(neither.is_err());
}

#[test]
fn create_rejects_inverted_validity_window() {
    let project = match TestProject::try_new() {
        Some(project) => project,
        None => return,
    };

    let result = Coupon::create("WINDOW", Some(500), None, 10, times::infinity(), times::zero())
        .commit(&project.connection);
    assert!(result.is_err());
}

#[test]
fn confirm_valid_checks_window_and_use_limit() {
    let project = match TestProject::try_new() {
        Some(project) => project,
        None => return,
    };

    let expired = Coupon::create("EXPIRED", Some(500), None, 10, times::zero(), times::zero())
        .commit(&project.connection)
        .unwrap();
    assert!(expired.confirm_valid(&project.connection).is_err());

    let event = project.create_event().with_ticket_type().finish();
    let limited = project.create_coupon().with_max_uses(1).finish();
    assert!(limited.confirm_valid(&project.connection).is_ok());

    project
        .create_order()
        .for_event(&event)
        .with_coupon_code(&limited.code)
        .finish();
    assert!(limited.confirm_valid(&project.connection).is_err());
}
