//! `CatalogApi` trait definition.
#![allow(clippy::future_not_send)]

use serde_json::Value;

use crate::error::Result;
use crate::params::{InstalmentOptions, ProgramOptions, SeasonOptions, SeriesOptions};

/// NRK TV catalog API trait (programs, series, seasons).
///
/// Abstracts catalog operations for mock substitution in tests.
/// Uses `trait_variant::make` to generate a `Send`-bound async trait.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(CatalogApi: Send)]
pub trait LocalCatalogApi {
    /// Fetches a program page.
    ///
    /// # Errors
    ///
    /// Returns `InvalidIdentifier` for a malformed id, otherwise any
    /// executor error; 404 carries "Program not found".
    async fn get_program_page(
        &self,
        program_id: &str,
        options: Option<&ProgramOptions>,
    ) -> Result<Value>;

    /// Fetches the navigation context (previous/next) of a program.
    ///
    /// # Errors
    ///
    /// Returns `InvalidIdentifier` for a malformed id, otherwise any
    /// executor error; 404 carries "Program doesn't exist".
    async fn get_program_navigation(&self, program_id: &str) -> Result<Value>;

    /// Fetches the navigation context of a downloadable program.
    ///
    /// # Errors
    ///
    /// Returns `InvalidIdentifier` for a malformed id, otherwise any
    /// executor error; 404 carries "Program doesn't exist".
    async fn get_offline_program_navigation(
        &self,
        program_id: &str,
        options: Option<&ProgramOptions>,
    ) -> Result<Value>;

    /// Fetches series metadata, including `_links.seasons`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidIdentifier` for a malformed id, otherwise any
    /// executor error; 404 carries "Series not found".
    async fn get_tv_series(&self, series_id: &str, options: Option<&SeriesOptions>)
    -> Result<Value>;

    /// Fetches one season of a series.
    ///
    /// `season_id` is used as a raw path segment and is not escaped.
    ///
    /// # Errors
    ///
    /// Returns `InvalidIdentifier` for a malformed series id, otherwise any
    /// executor error; 404 carries "Season not found".
    async fn get_series_season(
        &self,
        series_id: &str,
        season_id: &str,
        options: Option<&SeasonOptions>,
    ) -> Result<Value>;

    /// Fetches a page of series instalments.
    ///
    /// # Errors
    ///
    /// Returns `InvalidIdentifier` for a malformed id, otherwise any
    /// executor error.
    async fn get_series_instalments(
        &self,
        series_id: &str,
        options: Option<&InstalmentOptions>,
    ) -> Result<Value>;
}
