//! Bolt backend built on `neo4rs`

use super::traits::CypherBackend;
use crate::cypher::{Result, Statement};
use async_trait::async_trait;
use neo4rs::{query, BoltList, BoltMap, BoltNull, BoltString, BoltType, Graph, Query};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

/// Backend speaking Bolt to a Neo4j server
pub struct BoltBackend {
    graph: Arc<Graph>,
}

impl BoltBackend {
    /// Connect to a Neo4j server over Bolt
    pub async fn connect(uri: &str, user: &str, password: &str) -> Result<Self> {
        let graph = Graph::new(uri, user, password).await?;
        tracing::info!("Connected to Neo4j over Bolt at {}", uri);

        Ok(Self {
            graph: Arc::new(graph),
        })
    }

    fn to_query(statement: &Statement) -> Query {
        statement
            .parameters
            .iter()
            .fold(query(&statement.text), |q, (name, value)| {
                q.param(name, json_to_bolt(value))
            })
    }
}

/// Convert a JSON parameter value into its Bolt counterpart
fn json_to_bolt(value: &Value) -> BoltType {
    match value {
        Value::Null => BoltType::Null(BoltNull),
        Value::Bool(b) => BoltType::from(*b),
        Value::Number(n) => match n.as_i64() {
            Some(i) => BoltType::from(i),
            None => BoltType::from(n.as_f64().unwrap_or_default()),
        },
        Value::String(s) => BoltType::from(s.as_str()),
        Value::Array(items) => {
            let mut list = BoltList::new();
            for item in items {
                list.push(json_to_bolt(item));
            }
            BoltType::List(list)
        }
        Value::Object(map) => {
            let mut bolt = BoltMap::new();
            for (key, item) in map {
                bolt.put(BoltString::from(key.as_str()), json_to_bolt(item));
            }
            BoltType::Map(bolt)
        }
    }
}

#[async_trait]
impl CypherBackend for BoltBackend {
    async fn run(&self, statement: &Statement) -> Result<()> {
        self.graph.run(Self::to_query(statement)).await?;
        Ok(())
    }

    async fn fetch<T>(&self, statement: &Statement) -> Result<Vec<T>>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let mut result = self.graph.execute(Self::to_query(statement)).await?;
        let mut items = Vec::new();

        while let Some(row) = result.next().await? {
            let item = match statement.columns.as_slice() {
                [column] => row.get::<T>(column)?,
                _ => row.to::<T>()?,
            };
            items.push(item);
        }

        Ok(items)
    }

    fn name(&self) -> &'static str {
        "bolt"
    }
}
