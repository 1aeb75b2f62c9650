use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::app;
use serde_json::Value;
use tower::ServiceExt;

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str) -> Request<String> {
    Request::builder()
        .uri(uri)
        .header("api_key", "test-key")
        .body(String::new())
        .unwrap()
}

async fn send(uri: &str) -> (StatusCode, Value) {
    let resp = app().oneshot(get(uri)).await.unwrap();
    let status = resp.status();
    (status, body_json(resp).await)
}

// --- auth ---

#[tokio::test]
async fn missing_api_key_returns_401() {
    let resp = app()
        .oneshot(
            Request::builder()
                .uri("/word.json/dog")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(resp).await;
    assert_eq!(body["type"], "error");
}

// --- word ---

#[tokio::test]
async fn get_word() {
    let (status, body) = send("/word.json/dog").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["word"], "dog");
    assert_eq!(body["canonicalForm"], "dog");
    assert!(body.get("suggestions").is_none());
}

#[tokio::test]
async fn get_word_with_suggestions() {
    let (_, body) = send("/word.json/dog?includeSuggestions=true").await;
    assert!(body["suggestions"].is_array());
}

#[tokio::test]
async fn unknown_word_returns_404() {
    let (status, body) = send("/word.json/zzzxq").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "word not found");
}

#[tokio::test]
async fn plural_needs_use_canonical() {
    let (status, _) = send("/word.json/cats").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send("/word.json/cats?useCanonical=true").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["word"], "cat");
}

// --- definitions ---

#[tokio::test]
async fn definitions_filter_and_limit() {
    let (status, body) = send("/word.json/dog/definitions").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 3);

    let (_, body) = send("/word.json/dog/definitions?partOfSpeech=verb").await;
    let defs = body.as_array().unwrap();
    assert_eq!(defs.len(), 1);
    assert_eq!(defs[0]["partOfSpeech"], "verb");

    let (_, body) = send("/word.json/dog/definitions?sourceDictionaries=wiktionary").await;
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (_, body) = send("/word.json/dog/definitions?sourceDictionaries=all&limit=2").await;
    assert_eq!(body.as_array().unwrap().len(), 2);
}

// --- examples ---

#[tokio::test]
async fn examples_skip_and_limit() {
    let (status, body) = send("/word.json/dog/examples?skip=1&limit=5").await;
    assert_eq!(status, StatusCode::OK);
    let examples = body["examples"].as_array().unwrap();
    assert_eq!(examples.len(), 1);
    assert_eq!(examples[0]["exampleId"], 1002);
    assert!(body["facets"].is_array());
}

#[tokio::test]
async fn top_example() {
    let (status, body) = send("/word.json/dog/topExample").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["exampleId"], 1001);
}

// --- related words ---

#[tokio::test]
async fn related_words_filter_and_cap() {
    let (status, body) =
        send("/word.json/dog/relatedWords?relationshipTypes=synonym&limitPerRelationshipType=2").await;
    assert_eq!(status, StatusCode::OK);
    let groups = body.as_array().unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0]["words"].as_array().unwrap().len(), 2);
}

// --- pronunciations ---

#[tokio::test]
async fn pronunciations_by_format() {
    let (status, body) = send("/word.json/dog/pronunciations?typeFormat=IPA").await;
    assert_eq!(status, StatusCode::OK);
    let prons = body.as_array().unwrap();
    assert_eq!(prons.len(), 1);
    assert_eq!(prons[0]["rawType"], "IPA");
}

#[tokio::test]
async fn pronunciations_by_source_dictionary() {
    let (status, body) = send("/word.json/dog/pronunciations?sourceDictionary=wiktionary").await;
    assert_eq!(status, StatusCode::OK);
    let prons = body.as_array().unwrap();
    assert_eq!(prons.len(), 1);
    assert_eq!(prons[0]["raw"], "/dɒɡ/");

    let (_, body) =
        send("/word.json/dog/pronunciations?sourceDictionary=ahd-5&typeFormat=IPA").await;
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn percent_encoded_word_is_decoded() {
    let (status, body) = send("/word.json/%64og").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["word"], "dog");
}
