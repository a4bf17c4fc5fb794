use dotenv::dotenv;
use std::env;

#[derive(Clone, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

#[derive(Clone)]
pub struct Config {
    pub allowed_origins: String,
    pub api_host: String,
    pub api_port: String,
    pub app_name: String,
    pub cache_url: Option<String>,
    pub database_url: String,
    pub readonly_database_url: String,
    pub database_pool_size: u32,
    pub environment: Environment,
    pub http_keep_alive: usize,
    pub jwt_expiry_time_mins: i64,
    pub token_secret: String,
    pub token_issuer: String,
    pub tombstone_ttl_secs: i64,
}

const ALLOWED_ORIGINS: &str = "ALLOWED_ORIGINS";
const API_HOST: &str = "API_HOST";
const API_PORT: &str = "API_PORT";
const APP_NAME: &str = "APP_NAME";
const CACHE_URL: &str = "CACHE_URL";
const DATABASE_URL: &str = "DATABASE_URL";
const READONLY_DATABASE_URL: &str = "READONLY_DATABASE_URL";
const DATABASE_POOL_SIZE: &str = "DATABASE_POOL_SIZE";
const HTTP_KEEP_ALIVE: &str = "HTTP_KEEP_ALIVE";
const JWT_EXPIRY_TIME_MINS: &str = "JWT_EXPIRY_TIME_MINS";
const TEST_DATABASE_URL: &str = "TEST_DATABASE_URL";
const TOKEN_SECRET: &str = "TOKEN_SECRET";
const TOKEN_ISSUER: &str = "TOKEN_ISSUER";
// How long a deletion tombstone masks replica lag on the public event list
const TOMBSTONE_TTL_SECS: &str = "TOMBSTONE_TTL_SECS";

impl Config {
    pub fn new(environment: Environment) -> Self {
        dotenv().ok();

        let app_name = env::var(&APP_NAME).unwrap_or_else(|_| "Vamos".to_string());

        let database_url = match environment {
            Environment::Test => {
                env::var(&TEST_DATABASE_URL).unwrap_or_else(|_| panic!("{} must be defined.", TEST_DATABASE_URL))
            }
            _ => env::var(&DATABASE_URL).unwrap_or_else(|_| panic!("{} must be defined.", DATABASE_URL)),
        };

        // Public reads come from a replica when one is configured
        let readonly_database_url = env::var(&READONLY_DATABASE_URL).unwrap_or_else(|_| database_url.clone());

        let database_pool_size = env::var(&DATABASE_POOL_SIZE)
            .map(|s| s.parse().expect("Not a valid integer for database pool size"))
            .unwrap_or(20);

        let allowed_origins = env::var(&ALLOWED_ORIGINS).unwrap_or_else(|_| "*".to_string());
        let api_host = env::var(&API_HOST).unwrap_or_else(|_| "127.0.0.1".to_string());
        let api_port = env::var(&API_PORT).unwrap_or_else(|_| "8088".to_string());

        let cache_url = env::var(&CACHE_URL).ok();

        let token_secret = env::var(&TOKEN_SECRET).unwrap_or_else(|_| panic!("{} must be defined.", TOKEN_SECRET));
        let token_issuer = env::var(&TOKEN_ISSUER).unwrap_or_else(|_| panic!("{} must be defined.", TOKEN_ISSUER));

        let jwt_expiry_time_mins = env::var(&JWT_EXPIRY_TIME_MINS)
            .unwrap_or_else(|_| "15".to_string())
            .parse()
            .expect("Not a valid integer for JWT expiry time");

        let tombstone_ttl_secs = env::var(&TOMBSTONE_TTL_SECS)
            .unwrap_or_else(|_| "600".to_string())
            .parse()
            .expect("Not a valid integer for tombstone TTL");

        let http_keep_alive = env::var(&HTTP_KEEP_ALIVE)
            .unwrap_or_else(|_| "75".to_string())
            .parse()
            .unwrap();

        Config {
            allowed_origins,
            api_host,
            api_port,
            app_name,
            cache_url,
            database_url,
            readonly_database_url,
            database_pool_size,
            environment,
            http_keep_alive,
            jwt_expiry_time_mins,
            token_secret,
            token_issuer,
            tombstone_ttl_secs,
        }
    }
}
