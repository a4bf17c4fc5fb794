use models::Roles;
use serde::Serialize;
use serde::Serializer;
use std::fmt;
use std::str::FromStr;
use utils::errors::EnumParseError;

#[derive(PartialEq, Debug, Copy, Clone, Eq, Ord, PartialOrd)]
pub enum Scopes {
    EventDelete,
    EventWrite,
    FavoriteWrite,
    NotificationRead,
    OrderRead,
    OrderWrite,
    TicketTypeWrite,
    UserRead,
}

impl Serialize for Scopes {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl fmt::Display for Scopes {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            Scopes::EventDelete => "event:delete",
            Scopes::EventWrite => "event:write",
            Scopes::FavoriteWrite => "favorite:write",
            Scopes::NotificationRead => "notification:read",
            Scopes::OrderRead => "order:read",
            Scopes::OrderWrite => "order:write",
            Scopes::TicketTypeWrite => "ticket-type:write",
            Scopes::UserRead => "user:read",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Scopes {
    type Err = EnumParseError;

    fn from_str(s: &str) -> Result<Self, <Self as FromStr>::Err> {
        let s = match s {
            "event:delete" => Scopes::EventDelete,
            "event:write" => Scopes::EventWrite,
            "favorite:write" => Scopes::FavoriteWrite,
            "notification:read" => Scopes::NotificationRead,
            "order:read" => Scopes::OrderRead,
            "order:write" => Scopes::OrderWrite,
            "ticket-type:write" => Scopes::TicketTypeWrite,
            "user:read" => Scopes::UserRead,
            _ => {
                return Err(EnumParseError {
                    message: "Could not parse value".to_string(),
                    enum_type: "Scopes".to_string(),
                    value: s.to_string(),
                })
            }
        };
        Ok(s)
    }
}

pub fn get_scopes(role: Roles) -> Vec<Scopes> {
    let mut scopes = get_scopes_for_role(role);
    scopes.sort();
    scopes.dedup();
    scopes
}

fn get_scopes_for_role(role: Roles) -> Vec<Scopes> {
    match role {
        Roles::User => vec![
            Scopes::FavoriteWrite,
            Scopes::NotificationRead,
            Scopes::OrderRead,
            Scopes::OrderWrite,
        ],
        Roles::Producer => {
            let mut scopes = vec![Scopes::EventWrite, Scopes::TicketTypeWrite];
            scopes.extend(get_scopes_for_role(Roles::User));
            scopes
        }
        Roles::Admin => {
            let mut scopes = vec![Scopes::EventDelete, Scopes::UserRead];
            scopes.extend(get_scopes_for_role(Roles::Producer));
            scopes
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_str() {
        assert_eq!(Scopes::EventWrite, "event:write".parse().unwrap());
        assert_eq!(Scopes::TicketTypeWrite, "ticket-type:write".parse().unwrap());
        assert!("event:unknown".parse::<Scopes>().is_err());
    }

    #[test]
    fn get_scopes_for_user() {
        let scopes = get_scopes(Roles::User);
        assert_eq!(
            vec![
                Scopes::FavoriteWrite,
                Scopes::NotificationRead,
                Scopes::OrderRead,
                Scopes::OrderWrite,
            ],
            scopes
        );
    }

    #[test]
    fn producer_extends_user() {
        let scopes = get_scopes(Roles::Producer);
        assert!(scopes.contains(&Scopes::EventWrite));
        assert!(scopes.contains(&Scopes::TicketTypeWrite));
        assert!(scopes.contains(&Scopes::OrderWrite));
        assert!(!scopes.contains(&Scopes::EventDelete));
    }

    #[test]
    fn admin_extends_producer() {
        let scopes = get_scopes(Roles::Admin);
        assert!(scopes.contains(&Scopes::EventDelete));
        assert!(scopes.contains(&Scopes::UserRead));
        assert!(scopes.contains(&Scopes::EventWrite));
        assert!(scopes.contains(&Scopes::FavoriteWrite));
    }
}
