use chrono::NaiveDateTime;
use diesel;
use diesel::expression::dsl;
use diesel::prelude::*;
use models::*;
use schema::users;
use utils::errors::{ConvertToDatabaseError, DatabaseError, ErrorCode, Optional};
use utils::passwords::PasswordHash;
use uuid::Uuid;
use validator::Validate;
use validators::{self, append_validation_error};

#[derive(Insertable, PartialEq, Debug, Validate)]
#[table_name = "users"]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    #[validate(email(message = "Email is invalid"))]
    pub email: String,
    pub cpf: Option<String>,
    pub phone: Option<String>,
    pub hashed_pw: String,
    role: Roles,
}

#[derive(Queryable, Identifiable, PartialEq, Debug, Clone)]
#[table_name = "users"]
pub struct User {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub cpf: Option<String>,
    pub phone: Option<String>,
    pub hashed_pw: String,
    pub role: Roles,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
pub struct DisplayUser {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: Roles,
}

impl NewUser {
    pub fn commit(&self, conn: &PgConnection) -> Result<User, DatabaseError> {
        self.validate_record()?;
        diesel::insert_into(users::table)
            .values(self)
            .get_result(conn)
            .to_db_error(ErrorCode::InsertError, "Could not create new user")
    }

    fn validate_record(&self) -> Result<(), DatabaseError> {
        let mut validation_errors = self.validate();
        if let Some(ref cpf) = self.cpf {
            validation_errors = append_validation_error(validation_errors, "cpf", validators::cpf_valid(cpf));
        }
        Ok(validation_errors?)
    }
}

impl User {
    pub fn create(
        first_name: &str,
        last_name: &str,
        email: &str,
        cpf: Option<String>,
        phone: Option<String>,
        password: &str,
    ) -> NewUser {
        let hash = PasswordHash::generate(password, None);
        NewUser {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.trim().to_lowercase(),
            cpf,
            phone,
            hashed_pw: hash.to_string(),
            role: Roles::User,
        }
    }

    pub fn find(id: Uuid, conn: &PgConnection) -> Result<User, DatabaseError> {
        users::table
            .find(id)
            .first::<User>(conn)
            .to_db_error(ErrorCode::QueryError, "Error loading user")
    }

    pub fn find_by_email(email: &str, conn: &PgConnection) -> Result<User, DatabaseError> {
        users::table
            .filter(users::email.eq(email.trim().to_lowercase()))
            .first::<User>(conn)
            .to_db_error(ErrorCode::QueryError, "Error loading user")
    }

    pub fn find_by_cpf(cpf: &str, conn: &PgConnection) -> Result<User, DatabaseError> {
        users::table
            .filter(users::cpf.eq(cpf))
            .first::<User>(conn)
            .to_db_error(ErrorCode::QueryError, "Error loading user")
    }

    /// Backs the registration form's debounced availability queries.
    pub fn email_available(email: &str, conn: &PgConnection) -> Result<bool, DatabaseError> {
        Ok(User::find_by_email(email, conn).optional()?.is_none())
    }

    pub fn cpf_available(cpf: &str, conn: &PgConnection) -> Result<bool, DatabaseError> {
        Ok(User::find_by_cpf(cpf, conn).optional()?.is_none())
    }

    pub fn check_password(&self, password: &str) -> bool {
        let hash = match PasswordHash::from_str(&self.hashed_pw) {
            Ok(h) => h,
            Err(_) => return false,
        };
        hash.verify(password)
    }

    pub fn add_role(&self, role: Roles, conn: &PgConnection) -> Result<User, DatabaseError> {
        diesel::update(self)
            .set((users::role.eq(role), users::updated_at.eq(dsl::now)))
            .get_result(conn)
            .to_db_error(ErrorCode::UpdateError, "Could not update role for user")
    }

    pub fn has_role(&self, role: Roles) -> bool {
        self.role == role
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(Roles::Admin)
    }

    pub fn get_global_scopes(&self) -> Vec<Scopes> {
        scopes::get_scopes(self.role)
    }

    pub fn full_name(&self) -> String {
        vec![self.first_name.clone(), self.last_name.clone()].join(" ")
    }
}

impl From<User> for DisplayUser {
    fn from(user: User) -> Self {
        DisplayUser {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            phone: user.phone,
            role: user.role,
        }
    }
}

impl ForDisplay<DisplayUser> for User {
    fn for_display(self) -> Result<DisplayUser, DatabaseError> {
        Ok(self.into())
    }
}
