use chrono::prelude::*;
use support::project::TestProject;
use vamos_db::prelude::*;

#[test]
fn create() {
    let project = match TestProject::try_new() {
        Some(project) => project,
        None => return,
    };

    let producer = project.create_user().with_role(Roles::Producer).finish();
    let event = Event::create(
        producer.id,
        "Indie Night",
        NaiveDate::from_ymd(2026, 10, 1).and_hms(21, 0, 0),
        "America/Sao_Paulo",
    )
    .commit(&project.connection)
    .unwrap();

    assert_eq!(event.name, "Indie Night");
    assert_eq!(event.user_id, producer.id);
    assert_eq!(event.status, EventStatus::Active);
    assert!(event.cancelled_at.is_none());
}

#[test]
fn create_rejects_unknown_timezone() {
    let project = match TestProject::try_new() {
        Some(project) => project,
        None => return,
    };

    let producer = project.create_user().with_role(Roles::Producer).finish();
    let result = Event::create(
        producer.id,
        "Indie Night",
        NaiveDate::from_ymd(2026, 10, 1).and_hms(21, 0, 0),
        "Mars/OlympusMons",
    )
    .commit(&project.connection);

    match result.unwrap_err().error_code {
        ErrorCode::ValidationError { errors } => assert!(errors.contains_key("timezone")),
        _ => panic!("Expected validation error"),
    }
}

#[test]
fn search_excludes_cancelled_and_filters_on_name() {
    let project = match TestProject::try_new() {
        Some(project) => project,
        None => return,
    };

    let rock = project.create_event().with_name("Rock Festival".to_string()).finish();
    let jazz = project.create_event().with_name("Jazz Evening".to_string()).finish();
    let cancelled = project.create_event().with_name("Rock Reunion".to_string()).finish();
    cancelled.cancel(&project.connection).unwrap();

    let all = Event::search(None, &project.connection).unwrap();
    let ids: Vec<i64> = all.iter().map(|e| e.id).collect();
    assert!(ids.contains(&rock.id));
    assert!(ids.contains(&jazz.id));
    assert!(!ids.contains(&cancelled.id));

    let rocks = Event::search(Some("rock"), &project.connection).unwrap();
    let ids: Vec<i64> = rocks.iter().map(|e| e.id).collect();
    assert!(ids.contains(&rock.id));
    assert!(!ids.contains(&jazz.id));
}

#[test]
fn find_for_user_includes_every_status() {
    let project = match TestProject::try_new() {
        Some(project) => project,
        None => return,
    };

    let producer = project.create_user().with_role(Roles::Producer).finish();
    let active = project.create_event().with_owner(&producer).finish();
    let paused = project.create_event().with_owner(&producer).finish();
    let paused = paused.pause(&project.connection).unwrap();
    let cancelled = project.create_event().with_owner(&producer).finish();
    let cancelled = cancelled.cancel(&project.connection).unwrap();

    let events = Event::find_for_user(producer.id, &project.connection).unwrap();
    let ids: Vec<i64> = events.iter().map(|e| e.id).collect();
    assert!(ids.contains(&active.id));
    assert!(ids.contains(&paused.id));
    assert!(ids.contains(&cancelled.id));
}

#[test]
fn update() {
    let project = match TestProject::try_new() {
        Some(project) => project,
        None => return,
    };

    let event = project.create_event().finish();
    let attributes = EventEditableAttributes {
        name: Some("Renamed".to_string()),
        description: Some(Some("An updated description".to_string())),
        location: None,
        ..Default::default()
    };
    let updated = event.update(&attributes, &project.connection).unwrap();

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.description, Some("An updated description".to_string()));
    // Fields not named in the change set are untouched
    assert_eq!(updated.event_start, event.event_start);
}

#[test]
fn pause_resume_round_trip_restores_the_event() {
    let project = match TestProject::try_new() {
        Some(project) => project,
        None => return,
    };

    let event = project.create_event().finish();
    assert_eq!(event.status, EventStatus::Active);

    let paused = event.pause(&project.connection).unwrap();
    assert_eq!(paused.status, EventStatus::Paused);

    let resumed = paused.resume(&project.connection).unwrap();
    assert_eq!(resumed.status, EventStatus::Active);

    // Only status and updated_at may differ from the original row
    assert_eq!(resumed.name, event.name);
    assert_eq!(resumed.description, event.description);
    assert_eq!(resumed.location, event.location);
    assert_eq!(resumed.event_start, event.event_start);
    assert_eq!(resumed.timezone, event.timezone);
    assert_eq!(resumed.min_age, event.min_age);
    assert_eq!(resumed.promo_image_url, event.promo_image_url);
    assert_eq!(resumed.cancelled_at, event.cancelled_at);
    assert_eq!(resumed.created_at, event.created_at);
}

#[test]
fn invalid_transitions_are_rejected() {
    let project = match TestProject::try_new() {
        Some(project) => project,
        None => return,
    };

    let event = project.create_event().finish();

    // Resume only applies to a paused event
    assert!(event.resume(&project.connection).is_err());

    let paused = event.pause(&project.connection).unwrap();
    // Pause only applies to an active event
    assert!(paused.pause(&project.connection).is_err());
}

#[test]
fn cancel_is_terminal_and_notifies_favoriters() {
    let project = match TestProject::try_new() {
        Some(project) => project,
        None => return,
    };

    let fan = project.create_user().finish();
    let event = project.create_event().finish();
    Favorite::create(event.id, fan.id).commit(&project.connection).unwrap();

    let cancelled = event.cancel(&project.connection).unwrap();
    assert_eq!(cancelled.status, EventStatus::Cancelled);
    assert!(cancelled.cancelled_at.is_some());

    let notifications = Notification::find_for_user(fan.id, &project.connection).unwrap();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].kind, NotificationKind::EventCancelled);
    assert_eq!(notifications[0].event_id, Some(event.id));

    // No path out of cancelled
    assert!(cancelled.cancel(&project.connection).is_err());
    assert!(cancelled.resume(&project.connection).is_err());
    assert!(cancelled.pause(&project.connection).is_err());
}

#[test]
fn stale_transition_loses_the_race() {
    let project = match TestProject::try_new() {
        Some(project) => project,
        None => return,
    };

    let event = project.create_event().finish();
    let same_event = Event::find(event.id, &project.connection).unwrap();

    event.pause(&project.connection).unwrap();

    // A second session still holding the Active snapshot loses
    let result = same_event.pause(&project.connection);
    assert_eq!(result.unwrap_err().error_code, ErrorCode::ConcurrencyError);
}

#[test]
fn destroy_cascades_to_children() {
    let project = match TestProject::try_new() {
        Some(project) => project,
        None => return,
    };

    let fan = project.create_user().finish();
    let event = project.create_event().with_ticket_type().finish();
    let ticket_type = event.ticket_types(&project.connection).unwrap().remove(0);
    Favorite::create(event.id, fan.id).commit(&project.connection).unwrap();
    let order = project.create_order().for_user(&fan).for_event(&event).finish();

    event.clone().destroy(&project.connection).unwrap();

    assert!(Event::find(event.id, &project.connection).optional().unwrap().is_none());
    assert!(TicketType::find(ticket_type.id, &project.connection)
        .optional()
        .unwrap()
        .is_none());
    assert!(Order::find(order.id, &project.connection).optional().unwrap().is_none());
    assert!(Favorite::find_for_user(fan.id, &project.connection).unwrap().is_empty());
}

#[test]
fn localized_start_string() {
    let project = match TestProject::try_new() {
        Some(project) => project,
        None => return,
    };

    let event = project
        .create_event()
        .with_event_start(NaiveDate::from_ymd(2026, 7, 1).and_hms(21, 0, 0))
        .with_timezone("America/Sao_Paulo")
        .finish();

    assert_eq!(
        Some("Wed, 1 Jul 2026 18:00:00 -0300".to_string()),
        event.localized_start_string()
    );
}
