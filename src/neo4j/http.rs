//! HTTP backend for the Neo4j transactional Cypher endpoint
//!
//! Every statement is sent as its own auto-commit request to
//! `/db/{database}/tx/commit`, using `row` result data contents.

use super::traits::CypherBackend;
use crate::cypher::{decode_rows, GraphError, Result, Statement};
use async_trait::async_trait;
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Discovery document served at the root of a Neo4j HTTP connector
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServerInfo {
    #[serde(default)]
    pub neo4j_version: Option<String>,
    #[serde(default)]
    pub neo4j_edition: Option<String>,
    /// Transaction URL template, e.g. `http://localhost:7474/db/{databaseName}/tx`
    #[serde(default)]
    pub transaction: Option<String>,
}

#[derive(Serialize)]
struct TxRequest<'a> {
    statements: Vec<TxStatement<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TxStatement<'a> {
    statement: &'a str,
    parameters: &'a Map<String, Value>,
    result_data_contents: [&'static str; 1],
}

#[derive(Deserialize)]
struct TxResponse {
    #[serde(default)]
    results: Vec<TxResult>,
    #[serde(default)]
    errors: Vec<TxError>,
}

#[derive(Default, Deserialize)]
struct TxResult {
    #[serde(default)]
    columns: Vec<String>,
    #[serde(default)]
    data: Vec<TxRow>,
}

#[derive(Deserialize)]
struct TxRow {
    #[serde(default)]
    row: Vec<Value>,
}

#[derive(Deserialize)]
struct TxError {
    code: String,
    message: String,
}

/// Backend speaking the Neo4j HTTP API
pub struct HttpBackend {
    client: reqwest::Client,
    commit_url: String,
    user: String,
    password: String,
    server: ServerInfo,
}

impl HttpBackend {
    /// Connect to a Neo4j HTTP connector and discover its commit endpoint
    pub async fn connect(
        base_url: &str,
        user: &str,
        password: &str,
        database: &str,
    ) -> Result<Self> {
        let base = Url::parse(base_url)
            .map_err(|e| GraphError::Config(format!("invalid URI {}: {}", base_url, e)))?;

        let client = reqwest::Client::new();
        let resp = client
            .get(base.clone())
            .basic_auth(user, Some(password))
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(GraphError::Http {
                status: status.as_u16(),
                message: body,
            });
        }

        let server: ServerInfo = resp.json().await?;
        let commit_url = commit_url(base.as_str(), &server, database);

        tracing::info!(
            "Connected to Neo4j {} ({}) at {}",
            server.neo4j_version.as_deref().unwrap_or("unknown version"),
            server.neo4j_edition.as_deref().unwrap_or("unknown edition"),
            base
        );
        tracing::debug!("Commit endpoint: {}", commit_url);

        Ok(Self {
            client,
            commit_url,
            user: user.to_string(),
            password: password.to_string(),
            server,
        })
    }

    /// Discovery document returned on connect
    pub fn server_info(&self) -> &ServerInfo {
        &self.server
    }

    pub fn commit_url(&self) -> &str {
        &self.commit_url
    }

    async fn post(&self, statement: &Statement) -> Result<TxResult> {
        let body = TxRequest {
            statements: vec![TxStatement {
                statement: &statement.text,
                parameters: &statement.parameters,
                result_data_contents: ["row"],
            }],
        };

        let resp = self
            .client
            .post(&self.commit_url)
            .basic_auth(&self.user, Some(&self.password))
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(GraphError::Http {
                status: status.as_u16(),
                message: body,
            });
        }

        let tx: TxResponse = resp.json().await?;
        if let Some(err) = tx.errors.into_iter().next() {
            return Err(GraphError::Server {
                code: err.code,
                message: err.message,
            });
        }

        Ok(tx.results.into_iter().next().unwrap_or_default())
    }
}

/// Commit endpoint from the discovery template, or the conventional path
fn commit_url(base: &str, server: &ServerInfo, database: &str) -> String {
    match &server.transaction {
        Some(template) => format!(
            "{}/commit",
            template
                .replace("{databaseName}", database)
                .trim_end_matches('/')
        ),
        None => format!("{}/db/{}/tx/commit", base.trim_end_matches('/'), database),
    }
}

#[async_trait]
impl CypherBackend for HttpBackend {
    async fn run(&self, statement: &Statement) -> Result<()> {
        self.post(statement).await?;
        Ok(())
    }

    async fn fetch<T>(&self, statement: &Statement) -> Result<Vec<T>>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let result = self.post(statement).await?;
        let columns = if result.columns.is_empty() {
            statement.columns.clone()
        } else {
            result.columns
        };
        let rows = result.data.into_iter().map(|d| d.row).collect();
        decode_rows(&columns, rows)
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
