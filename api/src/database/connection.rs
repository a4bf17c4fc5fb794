use crate::database::ConnectionType;
use crate::errors::ApiError;
use crate::server::GetAppState;
use actix_web::{dev::Payload, FromRequest, HttpRequest};
use diesel::connection::TransactionManager;
use diesel::Connection as DieselConnection;
use diesel::PgConnection;
use futures::future::{err, ok, Ready};
use std::sync::Arc;

pub struct Connection {
    inner: Arc<ConnectionType>,
}

impl From<ConnectionType> for Connection {
    fn from(connection_type: ConnectionType) -> Self {
        Connection {
            inner: Arc::new(connection_type),
        }
    }
}

impl From<PgConnection> for Connection {
    fn from(connection: PgConnection) -> Self {
        ConnectionType::Pg(connection).into()
    }
}

impl Connection {
    pub(crate) fn into_inner(self) -> Arc<ConnectionType> {
        self.inner
    }

    pub fn get(&self) -> &PgConnection {
        match *self.inner {
            ConnectionType::Pg(ref connection) => connection,
            ConnectionType::R2D2(ref connection) => connection,
        }
    }

    pub fn commit_transaction(&self) -> Result<(), diesel::result::Error> {
        let connection = self.get();
        connection.transaction_manager().commit_transaction(connection)
    }

    pub fn begin_transaction(&self) -> Result<(), diesel::result::Error> {
        let connection = self.get();
        connection.transaction_manager().begin_transaction(connection)
    }

    pub fn rollback_transaction(&self) -> Result<(), diesel::result::Error> {
        let connection = self.get();
        connection.transaction_manager().rollback_transaction(connection)
    }
}

impl Clone for Connection {
    fn clone(&self) -> Self {
        Connection {
            inner: self.inner.clone(),
        }
    }
}

impl FromRequest for Connection {
    type Config = ();
    type Error = ApiError;
    type Future = Ready<Result<Connection, Self::Error>>;

    fn from_request(request: &HttpRequest, _: &mut Payload) -> Self::Future {
        if let Some(connection) = request.extensions().get::<Connection>() {
            return ok(connection.clone());
        }

        let connection = match request.state().database.get_connection() {
            Ok(connection) => connection,
            Err(e) => return err(e.into()),
        };

        // The transaction spans the whole request; the transaction middleware
        // commits or rolls it back according to the response status
        if let Err(e) = connection.begin_transaction() {
            return err(e.into());
        }

        request.extensions_mut().insert(connection.clone());
        ok(connection)
    }
}
