//! CypherBackend trait definition
//!
//! Defines the transport-level interface the graph client submits statements
//! through. Implemented by the HTTP and Bolt backends, and by an in-memory
//! mock for tests.

use crate::cypher::{Result, Statement};
use async_trait::async_trait;
use serde::de::DeserializeOwned;

/// A transport able to execute Cypher statements.
#[async_trait]
pub trait CypherBackend: Send + Sync {
    /// Execute a statement and discard any result rows
    async fn run(&self, statement: &Statement) -> Result<()>;

    /// Execute a statement and decode every result row into `T`.
    ///
    /// Single-column statements decode the column value, multi-column
    /// statements decode the whole row keyed by column name.
    async fn fetch<T>(&self, statement: &Statement) -> Result<Vec<T>>
    where
        T: DeserializeOwned + Send + 'static;

    /// Short transport name used in log lines
    fn name(&self) -> &'static str;
}
