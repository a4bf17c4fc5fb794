use chrono::prelude::*;
use chrono::Duration;
use dev::builders::*;
use diesel::prelude::*;
use models::*;
use rand::prelude::*;
use uuid::Uuid;

pub struct EventBuilder<'a> {
    name: String,
    user_id: Option<Uuid>,
    event_start: Option<NaiveDateTime>,
    timezone: String,
    promo_image_url: Option<String>,
    with_ticket_type: bool,
    connection: &'a PgConnection,
}

impl<'a> EventBuilder<'a> {
    pub fn new(connection: &'a PgConnection) -> EventBuilder<'a> {
        let x: u16 = random();
        EventBuilder {
            name: format!("Event {}", x),
            user_id: None,
            event_start: None,
            timezone: "America/Sao_Paulo".into(),
            promo_image_url: None,
            with_ticket_type: false,
            connection,
        }
    }

    pub fn with_name(mut self, name: String) -> Self {
        self.name = name;
        self
    }

    pub fn with_owner(mut self, user: &User) -> Self {
        self.user_id = Some(user.id);
        self
    }

    pub fn with_event_start(mut self, date: NaiveDateTime) -> Self {
        self.event_start = Some(date);
        self
    }

    pub fn with_timezone(mut self, timezone: &str) -> Self {
        self.timezone = timezone.to_string();
        self
    }

    pub fn with_promo_image_url(mut self, url: &str) -> Self {
        self.promo_image_url = Some(url.to_string());
        self
    }

    pub fn with_ticket_type(mut self) -> Self {
        self.with_ticket_type = true;
        self
    }

    pub fn finish(&mut self) -> Event {
        let user_id = self
            .user_id
            .unwrap_or_else(|| UserBuilder::new(self.connection).with_role(Roles::Producer).finish().id);

        let mut new_event = Event::create(
            user_id,
            &self.name,
            self.event_start
                .unwrap_or_else(|| Utc::now().naive_utc() + Duration::days(30)),
            &self.timezone,
        );
        new_event.promo_image_url = self.promo_image_url.clone();

        let event = new_event.commit(self.connection).unwrap();

        if self.with_ticket_type {
            event
                .add_ticket_type("General Admission".to_string(), None, 5_000, 100, 10, self.connection)
                .unwrap();
        }

        event
    }
}
