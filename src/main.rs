//! Movie Graph - CLI
//!
//! Runs the demonstration tour or a single query against the movies graph.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use movie_graph::movies::{tour, Movie, MovieCatalog, TourOptions};
use movie_graph::neo4j::{CypherBackend, GraphClient};
use movie_graph::{Config, Transport};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "movie-graph")]
#[command(about = "Typed Cypher queries against the Neo4j movies graph")]
struct Cli {
    /// Path to a YAML config file (defaults to ./config.yaml)
    #[arg(long, env = "MOVIE_GRAPH_CONFIG")]
    config: Option<PathBuf>,

    /// Transport to use, overriding the config file
    #[arg(long, value_enum)]
    transport: Option<Transport>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run every demonstration query in order (default)
    Tour {
        /// Actor whose movies are listed [default: Tom Hanks]
        #[arg(long)]
        actor: Option<String>,

        /// Second actor for the shared-movies query [default: Meg Ryan]
        #[arg(long)]
        co_actor: Option<String>,
    },

    /// List movies
    Movies {
        #[arg(short, long, default_value = "10")]
        limit: u64,
    },

    /// List persons
    People {
        #[arg(short, long, default_value = "10")]
        limit: u64,
    },

    /// One row per movie an actor acted in
    Roles { actor: String },

    /// An actor with all their movies
    Filmography { actor: String },

    /// Movies two actors both acted in
    Shared { actor: String, co_actor: String },

    /// Create a movie
    AddMovie {
        #[arg(long)]
        title: String,

        #[arg(long)]
        released: i64,

        #[arg(long, default_value = "")]
        tagline: String,
    },

    /// Add an ACTED_IN relationship
    Cast { actor: String, title: String },

    /// Remove an ACTED_IN relationship
    Uncast { actor: String, title: String },

    /// Delete a movie
    RemoveMovie { title: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,movie_graph=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let mut config = Config::from_yaml_and_env(cli.config.as_deref())?;
    if let Some(transport) = cli.transport {
        config.transport = transport;
    }
    let command = cli.command.unwrap_or(Commands::Tour {
        actor: None,
        co_actor: None,
    });

    match config.transport {
        Transport::Http => {
            let client = GraphClient::connect_http(
                &config.neo4j_uri,
                &config.neo4j_user,
                &config.neo4j_password,
                &config.neo4j_database,
            )
            .await
            .with_context(|| format!("Failed to connect to Neo4j at {}", config.neo4j_uri))?;
            run_command(MovieCatalog::new(client), command).await
        }
        Transport::Bolt => {
            let client = GraphClient::connect_bolt(
                &config.neo4j_uri,
                &config.neo4j_user,
                &config.neo4j_password,
            )
            .await
            .with_context(|| format!("Failed to connect to Neo4j at {}", config.neo4j_uri))?;
            run_command(MovieCatalog::new(client), command).await
        }
    }
}

async fn run_command<B: CypherBackend>(
    catalog: MovieCatalog<B>,
    command: Commands,
) -> Result<()> {
    match command {
        Commands::Tour { actor, co_actor } => {
            print_json(&tour(&catalog, &tour_options(actor, co_actor)).await?)
        }
        Commands::Movies { limit } => print_json(&catalog.movies(limit).await?),
        Commands::People { limit } => print_json(&catalog.people(limit).await?),
        Commands::Roles { actor } => print_json(&catalog.roles(&actor).await?),
        Commands::Filmography { actor } => print_json(&catalog.filmography(&actor).await?),
        Commands::Shared { actor, co_actor } => {
            print_json(&catalog.shared_movies(&actor, &co_actor).await?)
        }
        Commands::AddMovie {
            title,
            released,
            tagline,
        } => {
            catalog
                .add_movie(&Movie::new(title, released, tagline))
                .await?;
            Ok(())
        }
        Commands::Cast { actor, title } => Ok(catalog.cast(&actor, &title).await?),
        Commands::Uncast { actor, title } => Ok(catalog.uncast(&actor, &title).await?),
        Commands::RemoveMovie { title } => Ok(catalog.remove_movie(&title).await?),
    }
}

/// Tour options with the given actors, falling back to the defaults
fn tour_options(actor: Option<String>, co_actor: Option<String>) -> TourOptions {
    let defaults = TourOptions::default();
    TourOptions {
        actor: actor.unwrap_or(defaults.actor),
        co_actor: co_actor.unwrap_or(defaults.co_actor),
        ..defaults
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
