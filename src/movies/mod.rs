//! The movies sample graph: records, queries and the demonstration tour

pub mod catalog;
pub mod models;
pub mod queries;
pub mod tour;

pub use catalog::MovieCatalog;
pub use models::*;
pub use tour::{tour, TourOptions, TourReport};
