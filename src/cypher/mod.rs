//! Cypher statement building and result decoding

pub mod builder;
pub mod decode;
pub mod error;

pub use builder::{CypherQuery, Statement};
pub use decode::decode_rows;
pub use error::{GraphError, Result};
