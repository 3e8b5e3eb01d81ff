//! Records of the movies graph

use serde::{Deserialize, Serialize};

// ============================================================================
// Nodes
// ============================================================================

/// A `:Movie` node
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
    #[serde(default)]
    pub released: i64,
    #[serde(default)]
    pub tagline: String,
}

impl Movie {
    pub fn new(title: impl Into<String>, released: i64, tagline: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            released,
            tagline: tagline.into(),
        }
    }
}

/// A `:Person` node
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    #[serde(default)]
    pub born: i64,
}

// ============================================================================
// Query results
// ============================================================================

/// One actor/movie pair per `ACTED_IN` relationship
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorRole {
    pub actor: Person,
    pub movie: Movie,
}

/// An actor with every movie they acted in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filmography {
    pub actor: Person,
    pub movies: Vec<Movie>,
}

/// Movies two actors both acted in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedMovies {
    pub actor: Person,
    pub co_actor: Person,
    pub movies: Vec<Movie>,
    pub count: i64,
}
