use core_config::{AppInfo, FromEnv, app_info, env_parse, server::ServerConfig};
use database::common::RetryConfig;
use database::postgres::PostgresConfig;
use domain_users::UsersConfig;

pub use core_config::Environment;

/// Application configuration, composed from the shared config components
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub database: PostgresConfig,
    pub connect_retry: RetryConfig,
    pub server: ServerConfig,
    pub environment: Environment,
    pub users: UsersConfig,
    /// Apply pending migrations before serving (`RUN_MIGRATIONS`, default true)
    pub run_migrations: bool,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let database = PostgresConfig::from_env()?; // DATABASE_URL is required
        let connect_retry = RetryConfig::from_env()?;
        let server = ServerConfig::from_env()?; // HOST=0.0.0.0, PORT=3000
        let users = UsersConfig::from_env()?;
        let run_migrations = env_parse("RUN_MIGRATIONS", "true")?;

        Ok(Self {
            app: app_info!(),
            database,
            connect_retry,
            server,
            environment,
            users,
            run_migrations,
        })
    }
}
