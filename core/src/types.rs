//! Domain values decoded from word API responses.
//!
//! # Design
//! Decoding is structural. Field names are camelCase on the wire, unknown
//! fields are ignored, and a missing or `null` field takes its type's default
//! so a sparse payload still decodes. Nested records that the service may omit
//! entirely are `Option`s.

use serde::{Deserialize, Deserializer, Serialize};

/// Treat an explicit `null` the same as an absent field.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A word entry returned by `/word.json/{word}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WordObject {
    #[serde(deserialize_with = "nullable")]
    pub id: i64,
    #[serde(deserialize_with = "nullable")]
    pub word: String,
    #[serde(deserialize_with = "nullable")]
    pub original_word: String,
    /// Spelling or capitalization suggestions, when requested.
    #[serde(deserialize_with = "nullable")]
    pub suggestions: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub canonical_form: String,
    #[serde(deserialize_with = "nullable")]
    pub vulgar: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Definition {
    #[serde(deserialize_with = "nullable")]
    pub word: String,
    #[serde(deserialize_with = "nullable")]
    pub text: String,
    #[serde(deserialize_with = "nullable")]
    pub extended_text: String,
    #[serde(deserialize_with = "nullable")]
    pub part_of_speech: String,
    #[serde(deserialize_with = "nullable")]
    pub source_dictionary: String,
    #[serde(alias = "seqString", deserialize_with = "nullable")]
    pub sequence: String,
    #[serde(deserialize_with = "nullable")]
    pub score: f64,
    #[serde(deserialize_with = "nullable")]
    pub attribution_text: String,
    #[serde(deserialize_with = "nullable")]
    pub attribution_url: String,
    #[serde(deserialize_with = "nullable")]
    pub citations: Vec<Citation>,
    #[serde(deserialize_with = "nullable")]
    pub labels: Vec<Label>,
    #[serde(deserialize_with = "nullable")]
    pub example_uses: Vec<ExampleUsage>,
    #[serde(deserialize_with = "nullable")]
    pub notes: Vec<Note>,
    #[serde(deserialize_with = "nullable")]
    pub related_words: Vec<Related>,
}

/// A quotation supporting a definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Citation {
    #[serde(deserialize_with = "nullable")]
    pub cite: String,
    #[serde(deserialize_with = "nullable")]
    pub source: String,
}

/// A usage or register label such as `informal` or `archaic`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Label {
    #[serde(deserialize_with = "nullable")]
    pub text: String,
    #[serde(rename = "type", deserialize_with = "nullable")]
    pub kind: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExampleUsage {
    #[serde(deserialize_with = "nullable")]
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Note {
    #[serde(deserialize_with = "nullable")]
    pub note_type: String,
    #[serde(deserialize_with = "nullable")]
    pub applies_to: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub value: String,
    #[serde(deserialize_with = "nullable")]
    pub pos: i64,
}

/// A usage example drawn from a source document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Example {
    #[serde(deserialize_with = "nullable")]
    pub id: i64,
    #[serde(deserialize_with = "nullable")]
    pub example_id: i64,
    #[serde(deserialize_with = "nullable")]
    pub title: String,
    #[serde(deserialize_with = "nullable")]
    pub text: String,
    pub score: Option<ScoredWord>,
    pub sentence: Option<Sentence>,
    #[serde(deserialize_with = "nullable")]
    pub word: String,
    pub provider: Option<ContentProvider>,
    #[serde(deserialize_with = "nullable")]
    pub year: i32,
    #[serde(deserialize_with = "nullable")]
    pub rating: f64,
    #[serde(deserialize_with = "nullable")]
    pub document_id: i64,
    #[serde(deserialize_with = "nullable")]
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContentProvider {
    #[serde(deserialize_with = "nullable")]
    pub id: i64,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
}

/// Result of `/word.json/{word}/examples`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExampleSearchResults {
    #[serde(deserialize_with = "nullable")]
    pub examples: Vec<Example>,
    #[serde(deserialize_with = "nullable")]
    pub facets: Vec<Facet>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Facet {
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub facet_values: Vec<FacetValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FacetValue {
    #[serde(deserialize_with = "nullable")]
    pub value: String,
    #[serde(deserialize_with = "nullable")]
    pub count: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Sentence {
    #[serde(deserialize_with = "nullable")]
    pub id: i64,
    #[serde(deserialize_with = "nullable")]
    pub display: String,
    #[serde(deserialize_with = "nullable")]
    pub rating: i32,
    #[serde(deserialize_with = "nullable")]
    pub document_metadata_id: i64,
    #[serde(deserialize_with = "nullable")]
    pub has_scored_words: bool,
    #[serde(deserialize_with = "nullable")]
    pub scored_words: Vec<ScoredWord>,
}

/// A word within a sentence, with its position and relevance score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScoredWord {
    #[serde(deserialize_with = "nullable")]
    pub id: i64,
    #[serde(deserialize_with = "nullable")]
    pub position: i32,
    #[serde(deserialize_with = "nullable")]
    pub word: String,
    #[serde(deserialize_with = "nullable")]
    pub lemma: String,
    #[serde(deserialize_with = "nullable")]
    pub word_type: String,
    #[serde(deserialize_with = "nullable")]
    pub part_of_speech: String,
    #[serde(deserialize_with = "nullable")]
    pub score: f64,
    #[serde(deserialize_with = "nullable")]
    pub base_word_score: f64,
    #[serde(deserialize_with = "nullable")]
    pub doc_term_count: i32,
    #[serde(deserialize_with = "nullable")]
    pub sentence_id: i64,
    #[serde(deserialize_with = "nullable")]
    pub stopword: bool,
}

/// One cluster of related words sharing a relationship type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Related {
    #[serde(deserialize_with = "nullable")]
    pub relationship_type: String,
    #[serde(deserialize_with = "nullable")]
    pub words: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub gram: String,
    #[serde(alias = "label", deserialize_with = "nullable")]
    pub label1: String,
    #[serde(deserialize_with = "nullable")]
    pub label2: String,
    #[serde(deserialize_with = "nullable")]
    pub label3: String,
    #[serde(deserialize_with = "nullable")]
    pub label4: String,
}

/// A textual pronunciation in some notation (`rawType`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextPron {
    #[serde(deserialize_with = "nullable")]
    pub id: i64,
    #[serde(deserialize_with = "nullable")]
    pub seq: i32,
    #[serde(deserialize_with = "nullable")]
    pub raw: String,
    #[serde(deserialize_with = "nullable")]
    pub raw_type: String,
    #[serde(deserialize_with = "nullable")]
    pub attribution_text: String,
    #[serde(deserialize_with = "nullable")]
    pub attribution_url: String,
}
