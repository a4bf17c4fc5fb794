use db::prelude::*;

#[derive(Deserialize, Serialize)]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub cpf: Option<String>,
    pub phone: Option<String>,
    pub password: String,
}

impl From<&RegisterRequest> for NewUser {
    fn from(request: &RegisterRequest) -> Self {
        User::create(
            &request.first_name,
            &request.last_name,
            &request.email,
            request.cpf.clone(),
            request.phone.clone(),
            &request.password,
        )
    }
}
