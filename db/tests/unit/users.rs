use support::project::TestProject;
use vamos_db::prelude::*;

#[test]
fn create() {
    let project = match TestProject::try_new() {
        Some(project) => project,
        None => return,
    };

    let user = User::create(
        "Ana",
        "Souza",
        "ana@example.com",
        Some("529.982.247-25".to_string()),
        Some("555-555-5555".to_string()),
        "examplePassword",
    )
    .commit(&project.connection)
    .unwrap();

    assert_eq!(user.first_name, "Ana");
    assert_eq!(user.email, "ana@example.com");
    assert_eq!(user.role, Roles::User);
    assert_eq!(user.full_name(), "Ana Souza");
    assert_ne!(user.hashed_pw, "examplePassword");
}

#[test]
fn email_is_normalized() {
    let project = match TestProject::try_new() {
        Some(project) => project,
        None => return,
    };

    let user = User::create("Ana", "Souza", " Ana@Example.COM ", None, None, "examplePassword")
        .commit(&project.connection)
        .unwrap();
    assert_eq!(user.email, "ana@example.com");

    let found = User::find_by_email("ANA@example.com", &project.connection).unwrap();
    assert_eq!(found.id, user.id);
}

#[test]
fn create_rejects_invalid_cpf() {
    let project = match TestProject::try_new() {
        Some(project) => project,
        None => return,
    };

    let result = User::create(
        "Ana",
        "Souza",
        "ana2@example.com",
        Some("111.111.111-11".to_string()),
        None,
        "examplePassword",
    )
    .commit(&project.connection);

    match result {
        Err(error) => match error.error_code {
            ErrorCode::ValidationError { errors } => assert!(errors.contains_key("cpf")),
            _ => panic!("Expected validation error"),
        },
        Ok(_) => panic!("Expected validation error"),
    }
}

#[test]
fn duplicate_email_conflicts() {
    let project = match TestProject::try_new() {
        Some(project) => project,
        None => return,
    };

    let user = project.create_user().finish();
    let result = User::create("Other", "Person", &user.email, None, None, "examplePassword")
        .commit(&project.connection);

    assert_eq!(result.unwrap_err().error_code, ErrorCode::DuplicateKeyError);
}

#[test]
fn availability_checks() {
    let project = match TestProject::try_new() {
        Some(project) => project,
        None => return,
    };

    let user = project.create_user().with_cpf("529.982.247-25").finish();

    assert!(!User::email_available(&user.email, &project.connection).unwrap());
    assert!(User::email_available("free@example.com", &project.connection).unwrap());
    assert!(!User::cpf_available("529.982.247-25", &project.connection).unwrap());
    assert!(User::cpf_available("111.444.777-35", &project.connection).unwrap());
}

#[test]
fn check_password() {
    let project = match TestProject::try_new() {
        Some(project) => project,
        None => return,
    };

    let user = project.create_user().with_password("correct horse".to_string()).finish();
    assert!(user.check_password("correct horse"));
    assert!(!user.check_password("battery staple"));
}

#[test]
fn roles_and_scopes() {
    let project = match TestProject::try_new() {
        Some(project) => project,
        None => return,
    };

    let user = project.create_user().finish();
    assert!(!user.is_admin());
    assert!(!user.get_global_scopes().contains(&Scopes::EventWrite));

    let producer = user.add_role(Roles::Producer, &project.connection).unwrap();
    assert!(producer.get_global_scopes().contains(&Scopes::EventWrite));

    let admin = producer.add_role(Roles::Admin, &project.connection).unwrap();
    assert!(admin.is_admin());
    assert!(admin.get_global_scopes().contains(&Scopes::EventDelete));
}

#[test]
fn for_display_omits_credentials() {
    let project = match TestProject::try_new() {
        Some(project) => project,
        None => return,
    };

    let user = project.create_user().finish();
    let display = user.clone().for_display().unwrap();
    assert_eq!(display.id, user.id);
    assert_eq!(display.email, user.email);
    let serialized = serde_json::to_string(&display).unwrap();
    assert!(!serialized.contains("hashed_pw"));
    assert!(!serialized.contains("cpf"));
}
