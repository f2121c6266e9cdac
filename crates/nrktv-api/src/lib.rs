//! Typed client for the NRK TV content-catalog API (`psapi.nrk.no`).
//!
//! Every endpoint funnels through [`NrkClient::request`], which serializes
//! caller options into a query string and maps 404, 429 and 403 responses
//! to typed [`NrkError`] values.

/// Catalog API trait for mock substitution.
pub mod api;

/// HTTP client and request executor.
pub mod client;

/// Endpoint methods on [`NrkClient`].
mod endpoints;

/// Error taxonomy.
pub mod error;

/// Per-endpoint option structs.
pub mod params;

/// Query-string serialization.
pub mod query;

/// Aggregation helpers over series and seasons.
pub mod util;

/// Pre-flight identifier and argument checks.
pub mod validate;

pub use api::{CatalogApi, LocalCatalogApi};
pub use client::{DEFAULT_BASE_URL, NrkClient, NrkClientBuilder, build_request_url};
pub use error::{ErrorKind, NrkError, Result};
pub use params::{
    AutocompleteSearchOptions, IndexElementsOptions, InstalmentOptions, Medium, ProgramOptions,
    RadioPageOptions, SearchOptions, SearchPopularOptions, SearchTitleOptions, SeasonOptions,
    SeriesOptions, SuperPageOptions, TvPageOptions, TvSectionOptions,
};
pub use query::{QueryOptions, QueryValue, ToQueryOptions, serialize_query};
pub use util::{
    SeasonResult, all_seasons_from_series, all_seasons_ok, first_season_error, series_episodes,
};
