//! Blocking client for the Wordnik word API.
//!
//! # Overview
//! Looks up word entries, definitions, examples, related words and
//! pronunciations. Each lookup builds an `HttpRequest` as plain data, hands
//! it to an `HttpTransport` for a single round trip, and decodes the JSON
//! body into typed values.
//!
//! # Design
//! - `ApiClient` is the request core. It holds only an immutable config and
//!   a transport, so one instance can serve concurrent callers.
//! - `WordApi` borrows the core and adds one method per endpoint; optional
//!   parameters live in per-endpoint option structs.
//! - The transport is a trait. `UreqTransport` is the default; tests supply
//!   their own to count or fake network calls.
//! - Failures are typed (`ApiError`): a failed call is never reported as an
//!   empty result.
//!
//! ```no_run
//! use wordnik_core::{ApiClient, DefinitionsOptions};
//!
//! let client = ApiClient::new("my-api-key", "https://api.wordnik.com/v4")?;
//! let options = DefinitionsOptions::default().with_limit(3);
//! for def in client.word_api().get_definitions("dog", &options)? {
//!     println!("{} ({}): {}", def.word, def.part_of_speech, def.text);
//! }
//! # Ok::<(), wordnik_core::ApiError>(())
//! ```

pub mod client;
pub mod config;
pub mod encode;
pub mod error;
pub mod http;
pub mod options;
pub mod transport;
pub mod types;
pub mod word_api;

pub use client::{decode, ApiClient, HeaderParams, QueryParams, API_KEY_HEADER};
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use encode::encode_component;
pub use error::{ApiError, TransportError};
pub use http::{ApiResponse, HttpMethod, HttpRequest, HttpTransport};
pub use options::{
    DefinitionsOptions, ExamplesOptions, PronunciationsOptions, RelatedWordsOptions,
    TopExampleOptions, WordOptions,
};
pub use transport::UreqTransport;
pub use types::{
    Citation, ContentProvider, Definition, Example, ExampleSearchResults, ExampleUsage, Facet,
    FacetValue, Label, Note, Related, ScoredWord, Sentence, TextPron, WordObject,
};
pub use word_api::WordApi;
