//! The fixed sequence of demonstration queries
//!
//! Reads a sample of the graph, then creates a movie, casts an actor in it
//! and removes both again, leaving the graph as it was found.

use super::catalog::MovieCatalog;
use super::models::Movie;
use crate::cypher::Result;
use crate::neo4j::CypherBackend;
use serde::Serialize;

/// Inputs of the tour
#[derive(Debug, Clone)]
pub struct TourOptions {
    pub limit: u64,
    pub actor: String,
    pub co_actor: String,
    pub movie: Movie,
}

impl Default for TourOptions {
    fn default() -> Self {
        Self {
            limit: 10,
            actor: "Tom Hanks".into(),
            co_actor: "Meg Ryan".into(),
            movie: Movie::new("Really New", 2020, "Should be interesting..."),
        }
    }
}

/// What the tour found along the way
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TourReport {
    pub movies: usize,
    pub people: usize,
    pub roles: usize,
    pub filmography: usize,
    pub shared_movies: i64,
}

/// Run every demonstration query in order
pub async fn tour<B: CypherBackend>(
    catalog: &MovieCatalog<B>,
    options: &TourOptions,
) -> Result<TourReport> {
    let mut report = TourReport::default();

    let movies = catalog.movies(options.limit).await?;
    for movie in &movies {
        tracing::info!(released = movie.released, "Movie: {}", movie.title);
    }
    report.movies = movies.len();

    let people = catalog.people(options.limit).await?;
    for person in &people {
        tracing::info!(born = person.born, "Person: {}", person.name);
    }
    report.people = people.len();

    let roles = catalog.roles(&options.actor).await?;
    for role in &roles {
        tracing::info!("{} acted in {}", role.actor.name, role.movie.title);
    }
    report.roles = roles.len();

    if let Some(film) = catalog.filmography(&options.actor).await? {
        tracing::info!("{} has {} movies", film.actor.name, film.movies.len());
        report.filmography = film.movies.len();
    }

    if let Some(shared) = catalog
        .shared_movies(&options.actor, &options.co_actor)
        .await?
    {
        let titles: Vec<&str> = shared.movies.iter().map(|m| m.title.as_str()).collect();
        tracing::info!(
            "{} and {} share {} movies: {}",
            shared.actor.name,
            shared.co_actor.name,
            shared.count,
            titles.join(", ")
        );
        report.shared_movies = shared.count;
    }

    catalog.add_movie(&options.movie).await?;
    catalog.cast(&options.actor, &options.movie.title).await?;
    catalog.uncast(&options.actor, &options.movie.title).await?;
    catalog.remove_movie(&options.movie.title).await?;

    tracing::info!(
        "Tour complete: {} movies, {} people, {} roles",
        report.movies,
        report.people,
        report.roles
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::neo4j::mock::MockBackend;
    use crate::neo4j::GraphClient;
    use serde_json::json;

    #[tokio::test]
    async fn test_tour_runs_queries_in_order() {
        let backend = MockBackend::new();
        backend
            .push_rows(vec![vec![json!({"title": "The Matrix", "released": 1999})]])
            .await;
        backend
            .push_rows(vec![
                vec![json!({"name": "Keanu Reeves", "born": 1964})],
                vec![json!({"name": "Carrie-Anne Moss", "born": 1967})],
            ])
            .await;
        let catalog = MovieCatalog::new(GraphClient::new(backend));

        let report = tour(&catalog, &TourOptions::default()).await.unwrap();
        assert_eq!(
            report,
            TourReport {
                movies: 1,
                people: 2,
                ..Default::default()
            }
        );

        let texts = catalog.client().backend().texts().await;
        assert_eq!(texts.len(), 9);
        assert!(texts[0].starts_with("MATCH (m:Movie)"));
        assert!(texts[1].starts_with("MATCH (p:Person)"));
        assert!(texts[2].ends_with("RETURN actor, actorMovies AS movie"));
        assert!(texts[3].contains("collect(actorMovies)"));
        assert!(texts[4].contains("count(jointMovies)"));
        assert!(texts[5].starts_with("CREATE (nm:Movie"));
        assert!(texts[6].contains("CREATE (tom)-[:ACTED_IN]->(nm)"));
        assert!(texts[7].ends_with("DELETE r"));
        assert!(texts[8].ends_with("DELETE nm"));
    }

    #[tokio::test]
    async fn test_tour_uses_options() {
        let catalog = MovieCatalog::new(GraphClient::new(MockBackend::new()));
        let options = TourOptions {
            limit: 3,
            actor: "Keanu Reeves".into(),
            co_actor: "Hugo Weaving".into(),
            movie: Movie::new("Scratch", 2021, ""),
        };
        tour(&catalog, &options).await.unwrap();

        let sent = catalog.client().backend().statements.read().await;
        assert!(sent[0].text.ends_with("LIMIT 3"));
        assert_eq!(sent[4].parameters["actorName2"], json!("Hugo Weaving"));
        assert_eq!(sent[8].parameters["movieTitle"], json!("Scratch"));
    }
}
