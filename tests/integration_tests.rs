//! Integration tests for movie-graph
//!
//! These tests require a Neo4j server with the movies sample graph loaded
//! (`:play movies`). Run with: cargo test --test integration_tests

use movie_graph::movies::{tour, Movie, MovieCatalog, TourOptions};
use movie_graph::neo4j::{BoltBackend, GraphClient, HttpBackend};
use movie_graph::Config;

/// Get test configuration from environment or use defaults
fn test_config() -> Config {
    Config {
        neo4j_uri: std::env::var("NEO4J_URI").unwrap_or_else(|_| "http://localhost:7474".into()),
        neo4j_user: std::env::var("NEO4J_USER").unwrap_or_else(|_| "neo4j".into()),
        neo4j_password: std::env::var("NEO4J_PASSWORD").unwrap_or_else(|_| "movietest".into()),
        neo4j_database: std::env::var("NEO4J_DATABASE").unwrap_or_else(|_| "neo4j".into()),
        transport: movie_graph::Transport::Http,
    }
}

/// Connect to the server, or None if it is not reachable
async fn connect() -> Option<MovieCatalog<HttpBackend>> {
    let config = test_config();
    match GraphClient::connect_http(
        &config.neo4j_uri,
        &config.neo4j_user,
        &config.neo4j_password,
        &config.neo4j_database,
    )
    .await
    {
        Ok(client) => Some(MovieCatalog::new(client)),
        Err(e) => {
            eprintln!("Neo4j not available at {}: {}", config.neo4j_uri, e);
            None
        }
    }
}

/// Connect over Bolt, or None if it is not reachable
async fn connect_bolt() -> Option<MovieCatalog<BoltBackend>> {
    let config = test_config();
    let uri = std::env::var("NEO4J_BOLT_URI").unwrap_or_else(|_| "bolt://localhost:7687".into());
    let client = GraphClient::connect_bolt(&uri, &config.neo4j_user, &config.neo4j_password).await;
    let connected = match client {
        Ok(client) => {
            let catalog = MovieCatalog::new(client);
            // The driver may connect lazily, so make one round trip
            catalog.movies(1).await.map(|_| catalog)
        }
        Err(e) => Err(e),
    };
    match connected {
        Ok(catalog) => Some(catalog),
        Err(e) => {
            eprintln!("Neo4j Bolt not available at {}: {}", uri, e);
            None
        }
    }
}

#[tokio::test]
async fn test_list_movies_and_people() {
    let Some(catalog) = connect().await else {
        eprintln!("Skipping test: backend not available");
        return;
    };

    let movies = catalog.movies(10).await.unwrap();
    assert!(movies.len() <= 10);
    assert!(movies.iter().all(|m| !m.title.is_empty()));

    let people = catalog.people(5).await.unwrap();
    assert!(people.len() <= 5);
}

#[tokio::test]
async fn test_shared_movies_match_filmography() {
    let Some(catalog) = connect().await else {
        eprintln!("Skipping test: backend not available");
        return;
    };

    let Some(shared) = catalog
        .shared_movies("Tom Hanks", "Meg Ryan")
        .await
        .unwrap()
    else {
        eprintln!("Skipping test: movies sample graph not loaded");
        return;
    };
    assert_eq!(shared.movies.len() as i64, shared.count);

    let film = catalog.filmography("Tom Hanks").await.unwrap().unwrap();
    for movie in &shared.movies {
        assert!(film.movies.iter().any(|m| m.title == movie.title));
    }
}

#[tokio::test]
async fn test_create_cast_and_cleanup() {
    let Some(catalog) = connect().await else {
        eprintln!("Skipping test: backend not available");
        return;
    };

    let title = format!("Integration Movie {}", std::process::id());
    let movie = Movie::new(title.clone(), 2020, "Should be interesting...");

    if catalog.roles("Tom Hanks").await.unwrap().is_empty() {
        eprintln!("Skipping test: movies sample graph not loaded");
        return;
    }

    catalog.add_movie(&movie).await.unwrap();
    catalog.cast("Tom Hanks", &title).await.unwrap();

    let roles = catalog.roles("Tom Hanks").await.unwrap();
    let cast = roles.iter().filter(|r| r.movie.title == title).count();

    catalog.uncast("Tom Hanks", &title).await.unwrap();
    catalog.remove_movie(&title).await.unwrap();

    let roles = catalog.roles("Tom Hanks").await.unwrap();
    assert!(roles.iter().all(|r| r.movie.title != title));
    assert_eq!(cast, 1);
}

#[tokio::test]
async fn test_tour_leaves_graph_unchanged() {
    let Some(catalog) = connect().await else {
        eprintln!("Skipping test: backend not available");
        return;
    };

    let options = TourOptions::default();
    let report = tour(&catalog, &options).await.unwrap();
    assert!(report.movies <= 10);

    let leftovers = catalog.roles(&options.actor).await.unwrap();
    assert!(leftovers
        .iter()
        .all(|r| r.movie.title != options.movie.title));
}

#[tokio::test]
async fn test_bolt_decodes_nodes() {
    let Some(catalog) = connect_bolt().await else {
        eprintln!("Skipping test: backend not available");
        return;
    };

    let movies = catalog.movies(10).await.unwrap();
    assert!(movies.len() <= 10);
    assert!(movies.iter().all(|m| !m.title.is_empty()));

    // Some persons in the sample graph have no `born` property
    let people = catalog.people(200).await.unwrap();
    assert!(people.iter().all(|p| !p.name.is_empty()));
}

#[tokio::test]
async fn test_bolt_collected_movies() {
    let Some(catalog) = connect_bolt().await else {
        eprintln!("Skipping test: backend not available");
        return;
    };

    let Some(film) = catalog.filmography("Tom Hanks").await.unwrap() else {
        eprintln!("Skipping test: movies sample graph not loaded");
        return;
    };
    assert_eq!(film.actor.name, "Tom Hanks");
    assert!(!film.movies.is_empty());

    let shared = catalog
        .shared_movies("Tom Hanks", "Meg Ryan")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(shared.co_actor.name, "Meg Ryan");
    assert_eq!(shared.movies.len() as i64, shared.count);
    for movie in &shared.movies {
        assert!(film.movies.iter().any(|m| m.title == movie.title));
    }
}

#[tokio::test]
async fn test_bolt_created_movie_reads_back() {
    let Some(catalog) = connect_bolt().await else {
        eprintln!("Skipping test: backend not available");
        return;
    };

    let title = format!("Bolt Movie {}", std::process::id());
    catalog
        .add_movie(&Movie::new(title.clone(), 2021, ""))
        .await
        .unwrap();
    let movies = catalog.movies(1000).await.unwrap();
    catalog.remove_movie(&title).await.unwrap();

    let found = movies.iter().find(|m| m.title == title).unwrap();
    assert_eq!(found.released, 2021);
    assert!(found.tagline.is_empty());
}
