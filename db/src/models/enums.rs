use diesel::deserialize::{self, FromSql};
use diesel::pg::Pg;
use diesel::serialize::{self, IsNull, Output, ToSql};
use diesel::sql_types::Text;
use std::fmt;
use std::io::Write;
use std::str::FromStr;
use utils::errors::EnumParseError;

macro_rules! string_enum {
    ($name:ident [$($value:ident),+]) => {
        #[derive(AsExpression, FromSqlRow, Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
        #[sql_type = "Text"]
        pub enum $name {
            $(
                $value,
            )*
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
                let s = match self {
                    $(
                        $name::$value => stringify!($value),
                    )*
                };
                write!(f, "{}", s)
            }
        }

        impl FromStr for $name {
            type Err = EnumParseError;

            fn from_str(s: &str) -> Result<$name, EnumParseError> {
                match s {
                    $(
                        stringify!($value) => Ok($name::$value),
                    )*
                    _ => Err(EnumParseError {
                        message: "Could not parse value".to_string(),
                        enum_type: stringify!($name).to_string(),
                        value: s.to_string(),
                    }),
                }
            }
        }

        impl ToSql<Text, Pg> for $name {
            fn to_sql<W: Write>(&self, out: &mut Output<W, Pg>) -> serialize::Result {
                out.write_all(self.to_string().as_bytes())?;
                Ok(IsNull::No)
            }
        }

        impl FromSql<Text, Pg> for $name {
            fn from_sql(bytes: Option<&[u8]>) -> deserialize::Result<Self> {
                let s = <String as FromSql<Text, Pg>>::from_sql(bytes)?;
                s.parse::<$name>().map_err(|e| e.to_string().into())
            }
        }
    }
}

string_enum! { EventStatus [Active, Paused, Cancelled] }
string_enum! { NotificationKind [OrderCompleted, EventCancelled] }
string_enum! { OrderStatus [Draft, Paid, Cancelled] }
string_enum! { Roles [User, Producer, Admin] }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(EventStatus::Active.to_string(), "Active");
        assert_eq!(EventStatus::Paused.to_string(), "Paused");
        assert_eq!(EventStatus::Cancelled.to_string(), "Cancelled");
        assert_eq!(OrderStatus::Paid.to_string(), "Paid");
        assert_eq!(NotificationKind::OrderCompleted.to_string(), "OrderCompleted");
        assert_eq!(Roles::Producer.to_string(), "Producer");
    }

    #[test]
    fn parse() {
        assert_eq!(EventStatus::Active, "Active".parse().unwrap());
        assert_eq!(EventStatus::Paused, "Paused".parse().unwrap());
        assert_eq!(Roles::Admin, "Admin".parse().unwrap());
        assert!("Not a status".parse::<EventStatus>().is_err());
    }

    #[test]
    fn parse_error_carries_context() {
        let error = "Unknown".parse::<Roles>().unwrap_err();
        assert_eq!(error.enum_type, "Roles");
        assert_eq!(error.value, "Unknown");
    }
}
