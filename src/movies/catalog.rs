//! Typed operations over the movies graph

use super::models::{ActorRole, Filmography, Movie, Person, SharedMovies};
use super::queries;
use crate::cypher::Result;
use crate::neo4j::{CypherBackend, GraphClient};

/// Movie and person operations on top of a [`GraphClient`]
pub struct MovieCatalog<B: CypherBackend> {
    client: GraphClient<B>,
}

impl<B: CypherBackend> MovieCatalog<B> {
    pub fn new(client: GraphClient<B>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &GraphClient<B> {
        &self.client
    }

    /// Arbitrary movies, at most `limit`
    pub async fn movies(&self, limit: u64) -> Result<Vec<Movie>> {
        self.client.results(queries::movies(limit)).await
    }

    /// Arbitrary persons, at most `limit`
    pub async fn people(&self, limit: u64) -> Result<Vec<Person>> {
        self.client.results(queries::people(limit)).await
    }

    pub async fn roles(&self, actor: &str) -> Result<Vec<ActorRole>> {
        self.client.results(queries::roles(actor)).await
    }

    /// The actor's filmography, `None` if the actor has no movies
    pub async fn filmography(&self, actor: &str) -> Result<Option<Filmography>> {
        let rows: Vec<Filmography> = self.client.results(queries::filmography(actor)).await?;
        Ok(rows.into_iter().next())
    }

    /// Movies both actors acted in, `None` if there are none
    pub async fn shared_movies(
        &self,
        actor: &str,
        co_actor: &str,
    ) -> Result<Option<SharedMovies>> {
        let rows: Vec<SharedMovies> = self
            .client
            .results(queries::shared_movies(actor, co_actor))
            .await?;
        Ok(rows.into_iter().next())
    }

    pub async fn add_movie(&self, movie: &Movie) -> Result<()> {
        tracing::info!("Creating movie {:?} ({})", movie.title, movie.released);
        self.client
            .execute_without_results(queries::create_movie(movie))
            .await
    }

    pub async fn cast(&self, actor: &str, title: &str) -> Result<()> {
        tracing::info!("Casting {} in {:?}", actor, title);
        self.client
            .execute_without_results(queries::cast(actor, title))
            .await
    }

    pub async fn uncast(&self, actor: &str, title: &str) -> Result<()> {
        tracing::info!("Removing {} from {:?}", actor, title);
        self.client
            .execute_without_results(queries::uncast(actor, title))
            .await
    }

    pub async fn remove_movie(&self, title: &str) -> Result<()> {
        tracing::info!("Deleting movie {:?}", title);
        self.client
            .execute_without_results(queries::delete_movie(title))
            .await
    }
}
