//! Optional query parameters for each word endpoint.
//!
//! Every option defaults to "unset" and unset options never reach the query
//! string. `use_canonical` defaults to `false` on every endpoint, so the word
//! is looked up exactly as given unless the caller opts in.
//!
//! The option structs also deserialize from camelCase JSON using the same
//! names as the query parameters, so they can be loaded from a file.

use serde::Deserialize;

use crate::client::QueryParams;

/// Accumulates only the parameters that carry a meaningful value.
#[derive(Default)]
struct QueryBuilder {
    params: QueryParams,
}

impl QueryBuilder {
    fn flag(mut self, key: &str, set: bool) -> Self {
        if set {
            self.params.insert(key.to_string(), "true".to_string());
        }
        self
    }

    fn count(mut self, key: &str, value: Option<u32>) -> Self {
        if let Some(value) = value.filter(|value| *value > 0) {
            self.params.insert(key.to_string(), value.to_string());
        }
        self
    }

    fn text(mut self, key: &str, value: Option<&str>) -> Self {
        if let Some(value) = value.map(str::trim).filter(|value| !value.is_empty()) {
            self.params.insert(key.to_string(), value.to_string());
        }
        self
    }

    fn csv(mut self, key: &str, values: &[String]) -> Self {
        let joined = values
            .iter()
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
            .collect::<Vec<_>>()
            .join(",");
        if !joined.is_empty() {
            self.params.insert(key.to_string(), joined);
        }
        self
    }

    fn build(self) -> QueryParams {
        self.params
    }
}

/// Options for `WordApi::get_word`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WordOptions {
    /// Resolve the word to its root form ('cats' -> 'cat').
    pub use_canonical: bool,
    /// Return spelling and capitalization suggestions.
    pub include_suggestions: bool,
}

impl WordOptions {
    #[must_use]
    pub fn with_use_canonical(mut self, use_canonical: bool) -> Self {
        self.use_canonical = use_canonical;
        self
    }

    #[must_use]
    pub fn with_include_suggestions(mut self, include_suggestions: bool) -> Self {
        self.include_suggestions = include_suggestions;
        self
    }

    pub fn query_params(&self) -> QueryParams {
        QueryBuilder::default()
            .flag("useCanonical", self.use_canonical)
            .flag("includeSuggestions", self.include_suggestions)
            .build()
    }
}

/// Options for `WordApi::get_definitions`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DefinitionsOptions {
    /// Only return definitions with these parts of speech.
    pub part_of_speech: Vec<String>,
    /// Only search these source dictionaries. `all` searches every source.
    pub source_dictionaries: Vec<String>,
    /// Maximum number of results. `None` or `0` means no limit.
    pub limit: Option<u32>,
    pub use_canonical: bool,
    /// Keep markup tags in the definition text.
    pub include_tags: bool,
}

impl DefinitionsOptions {
    #[must_use]
    pub fn with_part_of_speech<I, S>(mut self, parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.part_of_speech = parts.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_source_dictionaries<I, S>(mut self, sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.source_dictionaries = sources.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    #[must_use]
    pub fn with_use_canonical(mut self, use_canonical: bool) -> Self {
        self.use_canonical = use_canonical;
        self
    }

    #[must_use]
    pub fn with_include_tags(mut self, include_tags: bool) -> Self {
        self.include_tags = include_tags;
        self
    }

    pub fn query_params(&self) -> QueryParams {
        QueryBuilder::default()
            .csv("partOfSpeech", &self.part_of_speech)
            .csv("sourceDictionaries", &self.source_dictionaries)
            .count("limit", self.limit)
            .flag("useCanonical", self.use_canonical)
            .flag("includeTags", self.include_tags)
            .build()
    }
}

/// Options for `WordApi::get_examples`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExamplesOptions {
    /// Show duplicate examples from different sources.
    pub include_duplicates: bool,
    pub use_canonical: bool,
    /// Results to skip. `None` or `0` starts at the first result.
    pub skip: Option<u32>,
    /// Maximum number of results. `None` or `0` means no limit.
    pub limit: Option<u32>,
}

impl ExamplesOptions {
    #[must_use]
    pub fn with_include_duplicates(mut self, include_duplicates: bool) -> Self {
        self.include_duplicates = include_duplicates;
        self
    }

    #[must_use]
    pub fn with_use_canonical(mut self, use_canonical: bool) -> Self {
        self.use_canonical = use_canonical;
        self
    }

    #[must_use]
    pub fn with_skip(mut self, skip: u32) -> Self {
        self.skip = Some(skip);
        self
    }

    #[must_use]
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn query_params(&self) -> QueryParams {
        QueryBuilder::default()
            .flag("includeDuplicates", self.include_duplicates)
            .flag("useCanonical", self.use_canonical)
            .count("skip", self.skip)
            .count("limit", self.limit)
            .build()
    }
}

/// Options for `WordApi::get_top_example`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TopExampleOptions {
    pub use_canonical: bool,
}

impl TopExampleOptions {
    #[must_use]
    pub fn with_use_canonical(mut self, use_canonical: bool) -> Self {
        self.use_canonical = use_canonical;
        self
    }

    pub fn query_params(&self) -> QueryParams {
        QueryBuilder::default()
            .flag("useCanonical", self.use_canonical)
            .build()
    }
}

/// Options for `WordApi::get_related_words`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RelatedWordsOptions {
    /// Only return these relationship types, e.g. `synonym`, `antonym`.
    pub relationship_types: Vec<String>,
    pub use_canonical: bool,
    /// Cap on words returned per relationship type. `None` or `0` means no cap.
    pub limit_per_relationship_type: Option<u32>,
}

impl RelatedWordsOptions {
    #[must_use]
    pub fn with_relationship_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.relationship_types = types.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_use_canonical(mut self, use_canonical: bool) -> Self {
        self.use_canonical = use_canonical;
        self
    }

    #[must_use]
    pub fn with_limit_per_relationship_type(mut self, limit: u32) -> Self {
        self.limit_per_relationship_type = Some(limit);
        self
    }

    pub fn query_params(&self) -> QueryParams {
        QueryBuilder::default()
            .csv("relationshipTypes", &self.relationship_types)
            .flag("useCanonical", self.use_canonical)
            .count("limitPerRelationshipType", self.limit_per_relationship_type)
            .build()
    }
}

/// Options for `WordApi::get_text_pronunciations`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PronunciationsOptions {
    /// Only return pronunciations from this source dictionary.
    pub source_dictionary: Option<String>,
    /// Only return pronunciations in this notation, e.g. `ahd`, `IPA`.
    pub type_format: Option<String>,
    pub use_canonical: bool,
    /// Maximum number of results. `None` or `0` means no limit.
    pub limit: Option<u32>,
}

impl PronunciationsOptions {
    #[must_use]
    pub fn with_source_dictionary(mut self, source: impl Into<String>) -> Self {
        self.source_dictionary = Some(source.into());
        self
    }

    #[must_use]
    pub fn with_type_format(mut self, format: impl Into<String>) -> Self {
        self.type_format = Some(format.into());
        self
    }

    #[must_use]
    pub fn with_use_canonical(mut self, use_canonical: bool) -> Self {
        self.use_canonical = use_canonical;
        self
    }

    #[must_use]
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn query_params(&self) -> QueryParams {
        QueryBuilder::default()
            .text("sourceDictionary", self.source_dictionary.as_deref())
            .text("typeFormat", self.type_format.as_deref())
            .flag("useCanonical", self.use_canonical)
            .count("limit", self.limit)
            .build()
    }
}
