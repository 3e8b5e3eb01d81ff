//! In-memory mock implementation of CypherBackend for testing.
//!
//! Records every statement it receives and answers `fetch` calls from a
//! queue of canned row sets. Conditionally compiled with `#[cfg(test)]`.

use crate::cypher::{decode_rows, Result, Statement};
use crate::neo4j::traits::CypherBackend;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::VecDeque;
use tokio::sync::RwLock;

/// In-memory mock implementation of CypherBackend for testing.
#[derive(Default)]
pub struct MockBackend {
    pub statements: RwLock<Vec<Statement>>,
    pub responses: RwLock<VecDeque<Vec<Vec<Value>>>>,
}

impl MockBackend {
    /// Create a new mock with no queued responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the rows returned by the next `fetch` call.
    pub async fn push_rows(&self, rows: Vec<Vec<Value>>) {
        self.responses.write().await.push_back(rows);
    }

    /// Texts of all statements received so far, in order.
    pub async fn texts(&self) -> Vec<String> {
        self.statements
            .read()
            .await
            .iter()
            .map(|s| s.text.clone())
            .collect()
    }
}

#[async_trait]
impl CypherBackend for MockBackend {
    async fn run(&self, statement: &Statement) -> Result<()> {
        self.statements.write().await.push(statement.clone());
        Ok(())
    }

    async fn fetch<T>(&self, statement: &Statement) -> Result<Vec<T>>
    where
        T: DeserializeOwned + Send + 'static,
    {
        self.statements.write().await.push(statement.clone());
        let rows = self.responses.write().await.pop_front().unwrap_or_default();
        decode_rows(&statement.columns, rows)
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}
