use db::prelude::Scopes;
use std::time::Duration;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize)]
pub struct AccessToken {
    pub sub: String,
    pub iss: String,
    pub exp: u64,
    pub scopes: Vec<String>,
}

impl AccessToken {
    pub fn new(user_id: Uuid, issuer: String, expiry_in_minutes: i64, scopes: Vec<Scopes>) -> Self {
        let mut timer = SystemTime::now();
        timer += Duration::from_secs(expiry_in_minutes as u64 * 60);
        let exp = timer.duration_since(UNIX_EPOCH).unwrap().as_secs();

        AccessToken {
            iss: issuer,
            sub: user_id.to_hyphenated().to_string(),
            exp,
            scopes: scopes.into_iter().map(|s| s.to_string()).collect(),
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
        let token = AccessToken::new(user_id, "vamos".to_string(), 15, vec![Scopes::OrderRead]);

        assert_eq!(token.iss, "vamos");
        assert_eq!(token.get_id().unwrap(), user_id);
        assert_eq!(token.scopes, vec!["order:read".to_string()]);
    }

    #[test]
    fn expiry_is_in_the_future() {
        let token = AccessToken::new(Uuid::new_v4(), "vamos".to_string(), 15, vec![]);
        let now = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_secs();
        assert!(token.exp > now);
        assert!(token.exp <= now + 15 * 60);
    }
}
