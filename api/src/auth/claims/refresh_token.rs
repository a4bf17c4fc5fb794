use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize)]
pub struct RefreshToken {
    pub sub: String,
    pub iss: String,
    pub issued: u64,
}

impl RefreshToken {
    pub fn new(user_id: Uuid, issuer: String) -> Self {
        let issued = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_secs();

        RefreshToken {
            iss: issuer,
            sub: user_id.to_hyphenated().to_string(),
            issued,
        }
    }

    pub fn get_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.sub)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sub_round_trips_the_user_id() {
        let user_id = Uuid::new_v4();
        let token = RefreshToken::new(user_id, "vamos".to_string());
        assert_eq!(token.get_id().unwrap(), user_id);
    }
}
