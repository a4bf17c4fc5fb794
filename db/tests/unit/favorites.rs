use support::project::TestProject;
use vamos_db::prelude::*;

#[test]
fn add_is_idempotent() {
    let project = match TestProject::try_new() {
        Some(project) => project,
        None => return,
    };

    let user = project.create_user().finish();
    let event = project.create_event().finish();

    let favorite = Favorite::create(event.id, user.id).commit(&project.connection).unwrap();
    let again = Favorite::create(event.id, user.id).commit(&project.connection).unwrap();
    assert_eq!(favorite.id, again.id);

    assert_eq!(Favorite::find_for_user(user.id, &project.connection).unwrap().len(), 1);
}

#[test]
fn remove() {
    let project = match TestProject::try_new() {
        Some(project) => project,
        None => return,
    };

    let user = project.create_user().finish();
    let event = project.create_event().finish();
    Favorite::create(event.id, user.id).commit(&project.connection).unwrap();

    assert_eq!(Favorite::remove(event.id, user.id, &project.connection).unwrap(), 1);
    assert!(!Favorite::user_favorite(event.id, user.id, &project.connection).unwrap());

    // Removing again is a no-op
    assert_eq!(Favorite::remove(event.id, user.id, &project.connection).unwrap(), 0);
}

#[test]
fn user_ids_for_event() {
    let project = match TestProject::try_new() {
        Some(project) => project,
        None => return,
    };

    let user1 = project.create_user().finish();
    let user2 = project.create_user().finish();
    let event = project.create_event().finish();
    let other_event = project.create_event().finish();

    Favorite::create(event.id, user1.id).commit(&project.connection).unwrap();
    Favorite::create(event.id, user2.id).commit(&project.connection).unwrap();
    Favorite::create(other_event.id, user1.id).commit(&project.connection).unwrap();

    let user_ids = Favorite::user_ids_for_event(event.id, &project.connection).unwrap();
    assert_eq!(user_ids.len(), 2);
    assert!(user_ids.contains(&user1.id));
    assert!(user_ids.contains(&user2.id));
}
