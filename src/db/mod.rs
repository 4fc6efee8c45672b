pub mod schema;
pub mod user;
pub mod group;
pub mod category;
pub mod event;
pub mod invitations;
pub mod rsvp;
pub mod comment;

use std::str::FromStr;

use log::{error, info, warn, LevelFilter};
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{ConnectOptions, Connection};

use crate::{config::Config, errors::AppError, Store};

/// Opens the store file named by `config.database_url`, creating it if absent.
pub async fn open_store(config: &Config) -> Result<Store, AppError> {
    warn!("database url: {}", config.database_url);
    let store_open = |source| AppError::StoreOpen {
        url: config.database_url.clone(),
        source,
    };
    let store = SqliteConnectOptions::from_str(&config.database_url)
        .map_err(store_open)?
        .create_if_missing(true)
        .foreign_keys(config.foreign_keys)
        .log_statements(LevelFilter::Debug)
        .connect()
        .await
        .map_err(store_open)?;
    info!(
        "Connected to the SQLite database (foreign keys {}).",
        if config.foreign_keys { "on" } else { "off" }
    );
    Ok(store)
}

pub async fn close_store(store: Store) {
    match store.close().await {
        Ok(()) => info!("Closed the database connection."),
        Err(err) => error!("{}", err),
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    pub async fn memory_store(foreign_keys: bool) -> Store {
        let config = Config {
            database_url: "sqlite::memory:".to_string(),
            foreign_keys,
        };
        let mut store = open_store(&config).await.unwrap();
        let report = schema::initialize(&mut store).await;
        assert!(report.failed.is_empty(), "{:?}", report.failed);
        store
    }
}
