//! Neo4j graph client and its HTTP / Bolt backends

pub mod bolt;
pub mod client;
pub mod http;
pub mod traits;

pub use bolt::BoltBackend;
pub use client::GraphClient;
pub use http::{HttpBackend, ServerInfo};
pub use traits::CypherBackend;

#[cfg(test)]
pub(crate) mod mock;
