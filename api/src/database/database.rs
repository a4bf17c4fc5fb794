use crate::config::Config;
use crate::database::{Connection, ConnectionType, ReadonlyConnection};
use diesel::r2d2::{self, ConnectionManager};
use diesel::PgConnection;

type R2D2Pool = r2d2::Pool<ConnectionManager<PgConnection>>;
type R2D2Error = r2d2::PoolError;

pub struct Database {
    pub pg_connection_pool: R2D2Pool,
}

impl Database {
    pub fn from_config(config: &Config) -> Database {
        Database {
            pg_connection_pool: create_connection_pool(config, config.database_url.clone()),
        }
    }

    pub fn readonly_from_config(config: &Config) -> Database {
        Database {
            pg_connection_pool: create_connection_pool(config, config.readonly_database_url.clone()),
        }
    }

    pub fn get_connection(&self) -> Result<Connection, R2D2Error> {
        let conn = self.pg_connection_pool.get()?;
        Ok(ConnectionType::R2D2(conn).into())
    }

    pub fn get_ro_connection(&self) -> Result<ReadonlyConnection, R2D2Error> {
        let conn = self.pg_connection_pool.get()?;
        Ok(ConnectionType::R2D2(conn).into())
    }
}

impl Clone for Database {
    fn clone(&self) -> Self {
        Database {
            pg_connection_pool: self.pg_connection_pool.clone(),
        }
    }
}

fn create_connection_pool(config: &Config, database_url: String) -> R2D2Pool {
    let r2d2_config = r2d2::Pool::builder().max_size(config.database_pool_size);

    let connection_manager = ConnectionManager::new(database_url);

    r2d2_config
        .build(connection_manager)
        .expect("Failed to create connection pool.")
}
