//! PostgreSQL catalog implementation
//!
//! Holds one connection for the lifetime of the plugin run. sqlx is async, so
//! a current-thread tokio runtime drives each call to completion.

use crate::catalog::query::{CatalogQuery, Param};
use crate::catalog::traits::Catalog;
use crate::config::ConnectionSettings;
use crate::error::CatalogError;

use sqlx::postgres::{PgConnectOptions, PgConnection};
use sqlx::{Connection, Postgres};
use std::future::Future;
use std::time::Duration;
use tokio::runtime::Runtime;

const APPLICATION_NAME: &str = "check_bareos";

/// Catalog backed by a live PostgreSQL connection
pub struct PgCatalog {
    runtime: Runtime,
    conn: PgConnection,
    timeout: Duration,
}

impl PgCatalog {
    /// Connect to the catalog database
    pub fn connect(settings: &ConnectionSettings) -> Result<Self, CatalogError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        let options = PgConnectOptions::new()
            .host(&settings.host)
            .port(settings.port)
            .username(&settings.user)
            .password(&settings.password)
            .database(&settings.database)
            .application_name(APPLICATION_NAME);

        log::debug!(
            "Connecting to {}@{}:{}/{}",
            settings.user,
            settings.host,
            settings.port,
            settings.database
        );

        let conn = block_on_timeout(
            &runtime,
            settings.timeout,
            PgConnection::connect_with(&options),
        )?
        .map_err(|e| CatalogError::Connection(e.to_string()))?;

        log::info!("Connected to catalog at {}", settings.host);

        Ok(Self {
            runtime,
            conn,
            timeout: settings.timeout,
        })
    }

    /// Close the connection gracefully
    pub fn close(self) -> Result<(), CatalogError> {
        let Self {
            runtime,
            conn,
            timeout,
        } = self;

        block_on_timeout(&runtime, timeout, conn.close())?
            .map_err(|e| CatalogError::Connection(e.to_string()))
    }
}

impl Catalog for PgCatalog {
    fn measure(&mut self, query: &CatalogQuery) -> Result<f64, CatalogError> {
        let statement = query.statement();
        log::debug!("Running {} query: {}", query.name(), statement.sql);
        log::trace!("Parameters: {:?}", statement.params);

        let mut scalar = sqlx::query_scalar::<Postgres, f64>(statement.sql);
        for param in statement.params {
            scalar = match param {
                Param::Int(v) => scalar.bind(v),
                Param::BigInt(v) => scalar.bind(v),
                Param::Float(v) => scalar.bind(v),
                Param::Text(v) => scalar.bind(v),
                Param::TextArray(v) => scalar.bind(v),
            };
        }

        let value = block_on_timeout(&self.runtime, self.timeout, scalar.fetch_one(&mut self.conn))?
            .map_err(|e| CatalogError::Query(e.to_string()))?;

        log::debug!("{} returned {}", query.name(), value);
        Ok(value)
    }
}

fn block_on_timeout<F: Future>(
    runtime: &Runtime,
    timeout: Duration,
    future: F,
) -> Result<F::Output, CatalogError> {
    runtime
        .block_on(async { tokio::time::timeout(timeout, future).await })
        .map_err(|_| CatalogError::Timeout(timeout.as_secs()))
}
