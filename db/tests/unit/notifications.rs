use support::project::TestProject;
use vamos_db::prelude::*;

#[test]
fn create_and_find_for_user() {
    let project = match TestProject::try_new() {
        Some(project) => project,
        None => return,
    };

    let user = project.create_user().finish();
    let event = project.create_event().finish();

    Notification::create(user.id, Some(event.id), NotificationKind::EventCancelled, "Cancelled")
        .commit(&project.connection)
        .unwrap();
    Notification::create(user.id, None, NotificationKind::OrderCompleted, "Order complete")
        .commit(&project.connection)
        .unwrap();

    let notifications = Notification::find_for_user(user.id, &project.connection).unwrap();
    assert_eq!(notifications.len(), 2);
    // Newest first
    assert_eq!(notifications[0].kind, NotificationKind::OrderCompleted);
    assert!(notifications.iter().all(|n| n.read_at.is_none()));
}

#[test]
fn mark_read_is_idempotent() {
    let project = match TestProject::try_new() {
        Some(project) => project,
        None => return,
    };

    let user = project.create_user().finish();
    let notification = Notification::create(user.id, None, NotificationKind::OrderCompleted, "Order complete")
        .commit(&project.connection)
        .unwrap();

    let read = notification.mark_read(&project.connection).unwrap();
    assert!(read.read_at.is_some());

    let read_again = read.mark_read(&project.connection).unwrap();
    assert_eq!(read.read_at, read_again.read_at);
}

#[test]
fn mark_all_read() {
    let project = match TestProject::try_new() {
        Some(project) => project,
        None => return,
    };

    let user = project.create_user().finish();
    for n in 0..3 {
        Notification::create(user.id, None, NotificationKind::OrderCompleted, &format!("Order {}", n))
            .commit(&project.connection)
            .unwrap();
    }

    assert_eq!(Notification::mark_all_read(user.id, &project.connection).unwrap(), 3);
    let notifications = Notification::find_for_user(user.id, &project.connection).unwrap();
    assert!(notifications.iter().all(|n| n.read_at.is_some()));

    // Nothing left unread
    assert_eq!(Notification::mark_all_read(user.id, &project.connection).unwrap(), 0);
}
