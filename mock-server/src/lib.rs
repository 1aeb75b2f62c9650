//! In-memory stub of the word API.
//!
//! Serves a handful of fixture words under `/word.json/{word}` with the same
//! JSON shapes as the real service. Requests without an `api_key` header get
//! 401, unknown words get 404, and the common query options are honored.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;

/// All data known about one fixture word.
#[derive(Clone, Debug)]
pub struct Entry {
    pub word: Value,
    pub definitions: Vec<Value>,
    pub examples: Vec<Value>,
    pub related: Vec<Value>,
    /// Pronunciations paired with the dictionary they come from.
    pub pronunciations: Vec<(String, Value)>,
}

pub type Db = Arc<HashMap<String, Entry>>;

type Reply = Result<Json<Value>, (StatusCode, Json<Value>)>;
type Params = Query<HashMap<String, String>>;

pub fn app() -> Router {
    Router::new()
        .route("/word.json/{word}", get(get_word))
        .route("/word.json/{word}/definitions", get(get_definitions))
        .route("/word.json/{word}/examples", get(get_examples))
        .route("/word.json/{word}/topExample", get(get_top_example))
        .route("/word.json/{word}/relatedWords", get(get_related_words))
        .route("/word.json/{word}/pronunciations", get(get_pronunciations))
        .with_state(Arc::new(fixtures()))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

pub fn fixtures() -> HashMap<String, Entry> {
    let dog = Entry {
        word: json!({"id": 0, "word": "dog", "canonicalForm": "dog", "originalWord": "dog"}),
        definitions: vec![
            json!({
                "word": "dog",
                "sequence": "0",
                "partOfSpeech": "noun",
                "sourceDictionary": "ahd-5",
                "text": "A domesticated carnivorous mammal related to the foxes and wolves.",
                "labels": [],
                "citations": [],
                "exampleUses": [],
                "relatedWords": []
            }),
            json!({
                "word": "dog",
                "sequence": "1",
                "partOfSpeech": "verb",
                "sourceDictionary": "ahd-5",
                "text": "To track or trail persistently.",
                "labels": [{"text": "informal", "type": "register"}]
            }),
            json!({
                "word": "dog",
                "sequence": "0",
                "partOfSpeech": "noun",
                "sourceDictionary": "wiktionary",
                "text": "A mammal, Canis familiaris.",
                "score": 0.0
            }),
        ],
        examples: vec![
            json!({
                "exampleId": 1001,
                "documentId": 31,
                "word": "dog",
                "title": "The Call of the Wild",
                "text": "The dog was a magnificent animal.",
                "year": 1903,
                "rating": 9.5,
                "provider": {"id": 711, "name": "gutenberg"}
            }),
            json!({
                "exampleId": 1002,
                "documentId": 32,
                "word": "dog",
                "title": "Daily News",
                "text": "A dog found its way home after three weeks.",
                "year": 2011,
                "rating": 7.0
            }),
        ],
        related: vec![
            json!({"relationshipType": "synonym", "words": ["hound", "canine", "pooch"]}),
            json!({"relationshipType": "hypernym", "words": ["animal", "mammal"]}),
        ],
        pronunciations: vec![
            ("ahd-5".to_string(), json!({"seq": 0, "raw": "dôg", "rawType": "ahd-5"})),
            ("wiktionary".to_string(), json!({"seq": 0, "raw": "/dɒɡ/", "rawType": "IPA"})),
        ],
    };

    let cat = Entry {
        word: json!({"id": 0, "word": "cat", "canonicalForm": "cat", "originalWord": "cat"}),
        definitions: vec![json!({
            "word": "cat",
            "sequence": "0",
            "partOfSpeech": "noun",
            "sourceDictionary": "ahd-5",
            "text": "A small carnivorous mammal domesticated since early times."
        })],
        examples: vec![json!({
            "exampleId": 2001,
            "word": "cat",
            "title": "Fables",
            "text": "The cat sat by the fire.",
            "year": 1867
        })],
        related: vec![json!({"relationshipType": "synonym", "words": ["feline", "kitty"]})],
        pronunciations: vec![(
            "ahd-5".to_string(),
            json!({"seq": 0, "raw": "kăt", "rawType": "ahd-5"}),
        )],
    };

    HashMap::from([("dog".to_string(), dog), ("cat".to_string(), cat)])
}

fn error(status: StatusCode, message: &str) -> (StatusCode, Json<Value>) {
    (status, Json(json!({"type": "error", "message": message})))
}

fn flag(params: &HashMap<String, String>, key: &str) -> bool {
    params.get(key).is_some_and(|value| value == "true")
}

fn count(params: &HashMap<String, String>, key: &str) -> Option<usize> {
    params
        .get(key)
        .and_then(|value| value.parse().ok())
        .filter(|value| *value > 0)
}

fn csv(params: &HashMap<String, String>, key: &str) -> Option<Vec<String>> {
    params
        .get(key)
        .map(|value| value.split(',').map(str::to_string).collect())
}

/// Check the api key, then resolve `word`, trying its singular form when
/// `useCanonical=true`.
fn lookup<'a>(
    db: &'a Db,
    headers: &HeaderMap,
    word: &str,
    params: &HashMap<String, String>,
) -> Result<&'a Entry, (StatusCode, Json<Value>)> {
    let has_key = headers
        .get("api_key")
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| !value.is_empty());
    if !has_key {
        return Err(error(StatusCode::UNAUTHORIZED, "API key is missing"));
    }

    let word = word.to_lowercase();
    if let Some(entry) = db.get(&word) {
        return Ok(entry);
    }
    if flag(params, "useCanonical") {
        if let Some(entry) = word.strip_suffix('s').and_then(|root| db.get(root)) {
            return Ok(entry);
        }
    }
    tracing::debug!(%word, "word not found");
    Err(error(StatusCode::NOT_FOUND, "word not found"))
}

fn limited(items: impl Iterator<Item = Value>, skip: Option<usize>, limit: Option<usize>) -> Vec<Value> {
    let items = items.skip(skip.unwrap_or(0));
    match limit {
        Some(limit) => items.take(limit).collect(),
        None => items.collect(),
    }
}

async fn get_word(
    State(db): State<Db>,
    headers: HeaderMap,
    Path(word): Path<String>,
    Query(params): Params,
) -> Reply {
    let entry = lookup(&db, &headers, &word, &params)?;
    let mut body = entry.word.clone();
    if flag(&params, "includeSuggestions") {
        body["suggestions"] = json!([]);
    }
    Ok(Json(body))
}

async fn get_definitions(
    State(db): State<Db>,
    headers: HeaderMap,
    Path(word): Path<String>,
    Query(params): Params,
) -> Reply {
    let entry = lookup(&db, &headers, &word, &params)?;
    let parts = csv(&params, "partOfSpeech");
    let sources = csv(&params, "sourceDictionaries")
        .filter(|sources| !sources.iter().any(|source| source == "all"));

    let matches = entry.definitions.iter().filter(|def| {
        let part_ok = parts
            .as_ref()
            .map_or(true, |parts| parts.iter().any(|part| def["partOfSpeech"] == part.as_str()));
        let source_ok = sources
            .as_ref()
            .map_or(true, |sources| sources.iter().any(|source| def["sourceDictionary"] == source.as_str()));
        part_ok && source_ok
    });
    Ok(Json(Value::Array(limited(matches.cloned(), None, count(&params, "limit")))))
}

async fn get_examples(
    State(db): State<Db>,
    headers: HeaderMap,
    Path(word): Path<String>,
    Query(params): Params,
) -> Reply {
    let entry = lookup(&db, &headers, &word, &params)?;
    let examples = limited(
        entry.examples.iter().cloned(),
        count(&params, "skip"),
        count(&params, "limit"),
    );
    Ok(Json(json!({"examples": examples, "facets": []})))
}

async fn get_top_example(
    State(db): State<Db>,
    headers: HeaderMap,
    Path(word): Path<String>,
    Query(params): Params,
) -> Reply {
    let entry = lookup(&db, &headers, &word, &params)?;
    entry
        .examples
        .first()
        .cloned()
        .map(Json)
        .ok_or_else(|| error(StatusCode::NOT_FOUND, "no examples"))
}

async fn get_related_words(
    State(db): State<Db>,
    headers: HeaderMap,
    Path(word): Path<String>,
    Query(params): Params,
) -> Reply {
    let entry = lookup(&db, &headers, &word, &params)?;
    let types = csv(&params, "relationshipTypes");
    let cap = count(&params, "limitPerRelationshipType");

    let groups = entry
        .related
        .iter()
        .filter(|group| {
            types
                .as_ref()
                .map_or(true, |types| types.iter().any(|kind| group["relationshipType"] == kind.as_str()))
        })
        .map(|group| {
            let mut group = group.clone();
            if let (Some(cap), Some(words)) = (cap, group["words"].as_array_mut()) {
                words.truncate(cap);
            }
            group
        })
        .collect();
    Ok(Json(Value::Array(groups)))
}

async fn get_pronunciations(
    State(db): State<Db>,
    headers: HeaderMap,
    Path(word): Path<String>,
    Query(params): Params,
) -> Reply {
    let entry = lookup(&db, &headers, &word, &params)?;
    let source = params.get("sourceDictionary");
    let format = params.get("typeFormat");

    let matches = entry
        .pronunciations
        .iter()
        .filter(|(dictionary, pron)| {
            source.map_or(true, |source| dictionary == source)
                && format.map_or(true, |format| pron["rawType"] == format.as_str())
        })
        .map(|(_, pron)| pron.clone());
    Ok(Json(Value::Array(limited(matches, None, count(&params, "limit")))))
}
