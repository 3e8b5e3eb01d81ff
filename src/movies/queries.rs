//! Cypher queries over the movies graph

use super::models::Movie;
use crate::cypher::CypherQuery;

/// `MATCH (m:Movie) RETURN m LIMIT n`
pub fn movies(limit: u64) -> CypherQuery {
    CypherQuery::new()
        .match_("(m:Movie)")
        .return_("m")
        .limit(limit)
}

/// `MATCH (p:Person) RETURN p LIMIT n`
pub fn people(limit: u64) -> CypherQuery {
    CypherQuery::new()
        .match_("(p:Person)")
        .return_("p")
        .limit(limit)
}

const ACTED_IN: &str = "(actor:Person {name: $actorName})-[:ACTED_IN]->(actorMovies)";

/// One row per movie the actor acted in, without aggregation
pub fn roles(actor: &str) -> CypherQuery {
    CypherQuery::new()
        .match_(ACTED_IN)
        .with_param("actorName", actor)
        .return_("actor")
        .return_("actorMovies AS movie")
}

/// The actor with all their movies collected into one row
pub fn filmography(actor: &str) -> CypherQuery {
    CypherQuery::new()
        .match_(ACTED_IN)
        .with_param("actorName", actor)
        .return_("actor")
        .return_("collect(actorMovies) AS movies")
}

/// Movies both actors acted in, collected and counted
pub fn shared_movies(actor: &str, co_actor: &str) -> CypherQuery {
    CypherQuery::new()
        .match_(
            "(actor:Person {name: $actorName})-[:ACTED_IN]->(jointMovies)\
             <-[:ACTED_IN]-(coActor:Person {name: $actorName2})",
        )
        .with_param("actorName", actor)
        .with_param("actorName2", co_actor)
        .return_("actor")
        .return_("coActor AS co_actor")
        .return_("collect(jointMovies) AS movies")
        .return_("count(jointMovies) AS count")
}

/// Create a movie node from its properties
pub fn create_movie(movie: &Movie) -> CypherQuery {
    CypherQuery::new()
        .create("(nm:Movie $newMovie)")
        .with_param("newMovie", movie)
}

/// Create an `ACTED_IN` relationship between an existing person and movie
pub fn cast(actor: &str, title: &str) -> CypherQuery {
    CypherQuery::new()
        .match_all([
            "(tom:Person {name: $actorName})",
            "(nm:Movie {title: $movieTitle})",
        ])
        .with_param("actorName", actor)
        .with_param("movieTitle", title)
        .create("(tom)-[:ACTED_IN]->(nm)")
}

/// Delete the `ACTED_IN` relationship between a person and a movie
pub fn uncast(actor: &str, title: &str) -> CypherQuery {
    CypherQuery::new()
        .match_("(tom:Person {name: $actorName})-[r:ACTED_IN]->(nm:Movie {title: $movieTitle})")
        .with_param("actorName", actor)
        .with_param("movieTitle", title)
        .delete("r")
}

/// Delete a movie node. Fails on the server if relationships remain.
pub fn delete_movie(title: &str) -> CypherQuery {
    CypherQuery::new()
        .match_("(nm:Movie {title: $movieTitle})")
        .with_param("movieTitle", title)
        .delete("nm")
}
