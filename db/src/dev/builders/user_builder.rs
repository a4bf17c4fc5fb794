use diesel::prelude::*;
use models::{Roles, User};
use uuid::Uuid;

pub struct UserBuilder<'a> {
    first_name: String,
    last_name: String,
    email: String,
    cpf: Option<String>,
    phone: Option<String>,
    password: String,
    role: Option<Roles>,
    connection: &'a PgConnection,
}

impl<'a> UserBuilder<'a> {
    pub fn new(connection: &'a PgConnection) -> Self {
        let x = Uuid::new_v4();
        UserBuilder {
            first_name: "Ana".into(),
            last_name: "Souza".into(),
            email: format!("ana{}@vamos.example.com", x),
            cpf: None,
            phone: Some("555-555-5555".into()),
            password: "examplePassword".into(),
            role: None,
            connection,
        }
    }

    pub fn with_first_name(mut self, first_name: &str) -> Self {
        self.first_name = first_name.to_string();
        self
    }

    pub fn with_last_name(mut self, last_name: &str) -> Self {
        self.last_name = last_name.to_string();
        self
    }

    pub fn with_email(mut self, email: String) -> Self {
        self.email = email;
        self
    }

    pub fn with_cpf(mut self, cpf: &str) -> Self {
        self.cpf = Some(cpf.to_string());
        self
    }

    pub fn with_password(mut self, password: String) -> Self {
        self.password = password;
        self
    }

    pub fn with_role(mut self, role: Roles) -> Self {
        self.role = Some(role);
        self
    }

    pub fn finish(&self) -> User {
        let user = User::create(
            &self.first_name,
            &self.last_name,
            &self.email,
            self.cpf.clone(),
            self.phone.clone(),
            &self.password,
        )
        .commit(self.connection)
        .unwrap();

        match self.role {
            Some(role) => user.add_role(role, self.connection).unwrap(),
            None => user,
        }
    }
}
