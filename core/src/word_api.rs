//! Lookups under `/word.json/{word}`.
//!
//! Every method follows the same steps: reject a blank word, render the
//! resource path, turn its options into query parameters, issue one GET
//! through `ApiClient::call_api`, and decode the body into the endpoint's
//! result type.

use serde::de::DeserializeOwned;

use crate::client::{decode, ApiClient, HeaderParams, QueryParams};
use crate::encode::encode_component;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpTransport};
use crate::options::{
    DefinitionsOptions, ExamplesOptions, PronunciationsOptions, RelatedWordsOptions,
    TopExampleOptions, WordOptions,
};
use crate::types::{Definition, Example, ExampleSearchResults, Related, TextPron, WordObject};

/// Response format segment in every resource path.
const FORMAT: &str = "json";

/// Word endpoint group. Borrows the request core rather than owning one, so
/// any number of groups can share a client.
#[derive(Debug, Clone)]
pub struct WordApi<'a, T> {
    client: &'a ApiClient<T>,
}

impl<'a, T: HttpTransport> WordApi<'a, T> {
    pub fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    /// Look up a word entry.
    pub fn get_word(&self, word: &str, options: &WordOptions) -> Result<WordObject, ApiError> {
        self.fetch(word, None, options.query_params())
    }

    /// Definitions for a word, in the order the service ranks them.
    pub fn get_definitions(
        &self,
        word: &str,
        options: &DefinitionsOptions,
    ) -> Result<Vec<Definition>, ApiError> {
        self.fetch(word, Some("definitions"), options.query_params())
    }

    /// Usage examples for a word, with search facets.
    pub fn get_examples(
        &self,
        word: &str,
        options: &ExamplesOptions,
    ) -> Result<ExampleSearchResults, ApiError> {
        self.fetch(word, Some("examples"), options.query_params())
    }

    /// The single best usage example for a word.
    pub fn get_top_example(
        &self,
        word: &str,
        options: &TopExampleOptions,
    ) -> Result<Example, ApiError> {
        self.fetch(word, Some("topExample"), options.query_params())
    }

    /// Related words grouped by relationship type.
    pub fn get_related_words(
        &self,
        word: &str,
        options: &RelatedWordsOptions,
    ) -> Result<Vec<Related>, ApiError> {
        self.fetch(word, Some("relatedWords"), options.query_params())
    }

    /// Textual pronunciations of a word.
    pub fn get_text_pronunciations(
        &self,
        word: &str,
        options: &PronunciationsOptions,
    ) -> Result<Vec<TextPron>, ApiError> {
        self.fetch(word, Some("pronunciations"), options.query_params())
    }

    fn fetch<D: DeserializeOwned>(
        &self,
        word: &str,
        sub_resource: Option<&str>,
        query: QueryParams,
    ) -> Result<D, ApiError> {
        let path = resource_path(word, sub_resource)?;
        let response =
            self.client
                .call_api(&path, HttpMethod::Get, &query, None, &HeaderParams::new())?;
        decode(&response)
    }
}

/// Render `/word.json/{word}[/{sub_resource}]` with the word percent-encoded.
pub fn resource_path(word: &str, sub_resource: Option<&str>) -> Result<String, ApiError> {
    if word.trim().is_empty() {
        return Err(ApiError::InvalidArgument(
            "word cannot be empty".to_string(),
        ));
    }
    let mut path = format!("/word.{FORMAT}/{}", encode_component(word));
    if let Some(sub_resource) = sub_resource {
        path.push('/');
        path.push_str(sub_resource);
    }
    Ok(path)
}
