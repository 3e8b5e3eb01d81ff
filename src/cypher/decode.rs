//! Mapping positional result rows into typed records

use super::error::{GraphError, Result};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Decode rows returned for `columns`.
///
/// With a single column each row's value is decoded directly (`RETURN m`
/// yields `Vec<Movie>`). With several columns each row becomes an object
/// keyed by column name and is decoded as a whole.
pub fn decode_rows<T: DeserializeOwned>(
    columns: &[String],
    rows: Vec<Vec<Value>>,
) -> Result<Vec<T>> {
    rows.into_iter()
        .enumerate()
        .map(|(i, row)| {
            decode_row(columns, row).map_err(|e| match e {
                GraphError::Decode(msg) => GraphError::Decode(format!("row {}: {}", i, msg)),
                other => other,
            })
        })
        .collect()
}

fn decode_row<T: DeserializeOwned>(columns: &[String], row: Vec<Value>) -> Result<T> {
    if row.len() != columns.len() {
        return Err(GraphError::Decode(format!(
            "expected {} columns, got {}",
            columns.len(),
            row.len()
        )));
    }

    let value = if columns.len() == 1 {
        row.into_iter().next().unwrap_or(Value::Null)
    } else {
        let object: Map<String, Value> = columns.iter().cloned().zip(row).collect();
        Value::Object(object)
    };

    Ok(serde_json::from_value(value)?)
}
