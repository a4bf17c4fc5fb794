use crate::config::Config;
use crate::database::Database;
use crate::middleware::{ApiLogger, DatabaseTransaction};
use crate::routing;
use crate::utils::InFlightRegistry;
use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{dev::ServiceRequest, http, HttpRequest, HttpResponse};
use actix_web::{web, web::Data, App, HttpServer};
use cache::{CacheConnection, MemoryCacheConnection, RedisCacheConnection, TombstoneSet};
use log::Level::{Debug, Warn};
use std::sync::{Arc, Mutex, MutexGuard};

// Must be valid JSON
const LOGGER_FORMAT: &'static str = r#"{"level": "INFO", "target":"vamos::request", "remote_ip":"%a", "user_agent": "%{User-Agent}i", "request": "%r", "status_code": %s, "response_time": %D }"#;

type SharedTombstoneSet = Arc<Mutex<TombstoneSet<Box<dyn CacheConnection + Send>>>>;

pub struct AppState {
    pub config: Config,
    pub database: Database,
    pub database_ro: Database,
    pub in_flight: InFlightRegistry,
    tombstones: SharedTombstoneSet,
}

impl AppState {
    pub fn new(
        config: Config,
        database: Database,
        database_ro: Database,
        in_flight: InFlightRegistry,
        tombstones: SharedTombstoneSet,
    ) -> AppState {
        AppState {
            config,
            database,
            database_ro,
            in_flight,
            tombstones,
        }
    }

    pub fn tombstones(&self) -> MutexGuard<TombstoneSet<Box<dyn CacheConnection + Send>>> {
        self.tombstones.lock().unwrap()
    }
}

pub(crate) trait GetAppState {
    fn state(&self) -> Data<AppState>;
}

impl GetAppState for HttpRequest {
    fn state(&self) -> Data<AppState> {
        let data: &Data<AppState> = self.app_data().expect("critical: AppState not configured for App");
        data.clone()
    }
}

impl GetAppState for ServiceRequest {
    fn state(&self) -> Data<AppState> {
        let data: Data<AppState> = self.app_data().expect("critical: AppState not configured for App");
        data
    }
}

pub struct Server {
    pub config: Config,
}

impl Server {
    pub async fn start(config: Config) {
        let bind_addr = format!("{}:{}", config.api_host, config.api_port);
        jlog!(Debug, "vamos_api::server", "Server start requested", { "bind_addr": bind_addr });

        let database = Database::from_config(&config);
        let database_ro = Database::readonly_from_config(&config);
        let in_flight = InFlightRegistry::new();

        let cache_connection: Box<dyn CacheConnection + Send> = match config.cache_url {
            Some(ref cache_url) => Box::new(
                RedisCacheConnection::create_connection_pool(cache_url).expect("Could not connect to cache"),
            ),
            None => Box::new(MemoryCacheConnection::new()),
        };
        let tombstones: SharedTombstoneSet = Arc::new(Mutex::new(TombstoneSet::new(
            cache_connection,
            config.tombstone_ttl_secs,
        )));

        info!("Listening on {}", bind_addr);
        let conf = config.clone();

        let server = HttpServer::new({
            move || {
                App::new()
                    .data(AppState::new(
                        conf.clone(),
                        database.clone(),
                        database_ro.clone(),
                        in_flight.clone(),
                        tombstones.clone(),
                    ))
                    .wrap({
                        let mut cors_config = Cors::new();
                        cors_config = match conf.allowed_origins.as_ref() {
                            "*" => cors_config.send_wildcard(),
                            _ => cors_config.allowed_origin(&conf.allowed_origins),
                        };
                        cors_config
                            .allowed_methods(vec!["GET", "POST", "PUT", "PATCH", "DELETE"])
                            .allowed_headers(vec![http::header::AUTHORIZATION, http::header::ACCEPT])
                            .allowed_header(http::header::CONTENT_TYPE)
                            .max_age(3600)
                            .finish()
                    })
                    .wrap(Logger::new(LOGGER_FORMAT))
                    .wrap(ApiLogger::new())
                    .wrap(DatabaseTransaction::new())
                    .configure(routing::routes)
                    .default_service(
                        web::route().to(|| HttpResponse::NotFound().json(json!({"error": "Not found"}))),
                    )
            }
        })
        .keep_alive(config.http_keep_alive)
        .bind(&bind_addr)
        .unwrap_or_else(|_| panic!("Can not bind to {}", bind_addr));

        match server.run().await {
            Ok(_) => {}
            Err(e) => jlog!(Warn, "vamos_api::server", "Server exit with error", {"error": e.to_string()}),
        };
    }
}
