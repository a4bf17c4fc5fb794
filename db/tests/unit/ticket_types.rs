use support::project::TestProject;
use vamos_db::prelude::*;

#[test]
fn create() {
    let project = match TestProject::try_new() {
        Some(project) => project,
        None => return,
    };

    let event = project.create_event().finish();
    let ticket_type = TicketType::create(event.id, "VIP".to_string(), None, 15_000, 50, 4)
        .commit(&project.connection)
        .unwrap();

    assert_eq!(ticket_type.event_id, event.id);
    assert_eq!(ticket_type.name, "VIP");
    assert_eq!(ticket_type.price_in_cents, 15_000);
    assert_eq!(ticket_type.quantity, 50);
    assert_eq!(ticket_type.max_per_order, 4);
}

#[test]
fn create_rejects_negative_price() {
    let project = match TestProject::try_new() {
        Some(project) => project,
        None => return,
    };

    let event = project.create_event().finish();
    let result = TicketType::create(event.id, "VIP".to_string(), None, -1, 50, 4).commit(&project.connection);
    assert!(result.is_err());
}

#[test]
fn find_by_event_id_is_sorted_by_name() {
    let project = match TestProject::try_new() {
        Some(project) => project,
        None => return,
    };

    let event = project.create_event().finish();
    project
        .create_ticket_type()
        .with_event(&event)
        .with_name("Standard")
        .finish();
    project.create_ticket_type().with_event(&event).with_name("Balcony").finish();

    let names: Vec<String> = TicketType::find_by_event_id(event.id, &project.connection)
        .unwrap()
        .into_iter()
        .map(|tt| tt.name)
        .collect();
    assert_eq!(vec!["Balcony".to_string(), "Standard".to_string()], names);
}

#[test]
fn update() {
    let project = match TestProject::try_new() {
        Some(project) => project,
        None => return,
    };

    let ticket_type = project.create_ticket_type().finish();
    let attributes = TicketTypeEditableAttributes {
        price_in_cents: Some(7_500),
        description: Some(Some("Front row".to_string())),
        ..Default::default()
    };
    let updated = ticket_type.update(attributes, &project.connection).unwrap();

    assert_eq!(updated.price_in_cents, 7_500);
    assert_eq!(updated.description, Some("Front row".to_string()));
    assert_eq!(updated.name, ticket_type.name);
}

#[test]
fn availability_tracks_sales() {
    let project = match TestProject::try_new() {
        Some(project) => project,
        None => return,
    };

    let event = project.create_event().with_ticket_type().finish();
    let ticket_type = event.ticket_types(&project.connection).unwrap().remove(0);
    assert_eq!(ticket_type.sold_count(&project.connection).unwrap(), 0);
    assert_eq!(
        ticket_type.available(&project.connection).unwrap(),
        ticket_type.quantity as i64
    );

    project.create_order().for_event(&event).quantity(3).finish();

    assert_eq!(ticket_type.sold_count(&project.connection).unwrap(), 3);
    assert_eq!(
        ticket_type.available(&project.connection).unwrap(),
        ticket_type.quantity as i64 - 3
    );
}

#[test]
fn destroy_blocked_once_tickets_sold() {
    let project = match TestProject::try_new() {
        Some(project) => project,
        None => return,
    };

    let unsold = project.create_ticket_type().finish();
    assert!(unsold.eligible_for_deletion(&project.connection).unwrap());
    unsold.destroy(&project.connection).unwrap();

    let event = project.create_event().with_ticket_type().finish();
    let sold = event.ticket_types(&project.connection).unwrap().remove(0);
    project.create_order().for_event(&event).finish();

    assert!(!sold.eligible_for_deletion(&project.connection).unwrap());
    let result = sold.destroy(&project.connection);
    assert_eq!(result.unwrap_err().error_code, ErrorCode::BusinessProcessError);
}
