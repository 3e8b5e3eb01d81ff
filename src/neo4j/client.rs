//! Graph client submitting Cypher queries through a backend

use super::bolt::BoltBackend;
use super::http::HttpBackend;
use super::traits::CypherBackend;
use crate::cypher::{CypherQuery, Result};
use serde::de::DeserializeOwned;

/// Client for Neo4j operations
pub struct GraphClient<B: CypherBackend> {
    backend: B,
}

impl GraphClient<HttpBackend> {
    /// Connect over the HTTP transactional endpoint
    pub async fn connect_http(
        uri: &str,
        user: &str,
        password: &str,
        database: &str,
    ) -> Result<Self> {
        Ok(Self::new(
            HttpBackend::connect(uri, user, password, database).await?,
        ))
    }
}

impl GraphClient<BoltBackend> {
    /// Connect over Bolt
    pub async fn connect_bolt(uri: &str, user: &str, password: &str) -> Result<Self> {
        Ok(Self::new(BoltBackend::connect(uri, user, password).await?))
    }
}

impl<B: CypherBackend> GraphClient<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Build the query, execute it and decode every result row into `T`
    pub async fn results<T>(&self, query: CypherQuery) -> Result<Vec<T>>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let statement = query.build()?;
        tracing::debug!(
            backend = self.backend.name(),
            columns = ?statement.columns,
            "Fetching: {}",
            statement.text
        );
        let rows = self.backend.fetch(&statement).await?;
        tracing::debug!("Fetched {} rows", rows.len());
        Ok(rows)
    }

    /// Build the query and execute it, expecting no results
    pub async fn execute_without_results(&self, query: CypherQuery) -> Result<()> {
        let statement = query.build()?;
        tracing::debug!(backend = self.backend.name(), "Executing: {}", statement.text);
        self.backend.run(&statement).await
    }
}
