use crate::database::{Connection, ConnectionType};
use crate::errors::ApiError;
use crate::server::GetAppState;
use actix_web::{dev::Payload, FromRequest, HttpRequest};
use diesel::PgConnection;
use futures::future::{err, ok, Ready};
use std::sync::Arc;

/// Connection drawn from the replica pool. Runs outside the request
/// transaction; used for the public reads that tolerate replica lag.
pub struct ReadonlyConnection {
    inner: Arc<ConnectionType>,
}

impl From<ConnectionType> for ReadonlyConnection {
    fn from(connection_type: ConnectionType) -> Self {
        ReadonlyConnection {
            inner: Arc::new(connection_type),
        }
    }
}

impl From<PgConnection> for ReadonlyConnection {
    fn from(connection: PgConnection) -> Self {
        ConnectionType::Pg(connection).into()
    }
}

impl From<Connection> for ReadonlyConnection {
    fn from(connection: Connection) -> Self {
        ReadonlyConnection {
            inner: connection.into_inner(),
        }
    }
}

impl ReadonlyConnection {
    pub fn get(&self) -> &PgConnection {
        match *self.inner {
            ConnectionType::Pg(ref connection) => connection,
            ConnectionType::R2D2(ref connection) => connection,
        }
    }
}

impl Clone for ReadonlyConnection {
    fn clone(&self) -> Self {
        ReadonlyConnection {
            inner: self.inner.clone(),
        }
    }
}

impl FromRequest for ReadonlyConnection {
    type Config = ();
    type Error = ApiError;
    type Future = Ready<Result<ReadonlyConnection, Self::Error>>;

    fn from_request(request: &HttpRequest, _: &mut Payload) -> Self::Future {
        if let Some(connection) = request.extensions().get::<ReadonlyConnection>() {
            return ok(connection.clone());
        }

        let connection = match request.state().database_ro.get_ro_connection() {
            Ok(connection) => connection,
            Err(e) => return err(e.into()),
        };

        request.extensions_mut().insert(connection.clone());
        ok(connection)
    }
}
