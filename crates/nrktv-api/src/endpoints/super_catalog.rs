//! NRK Super (children's catalog) endpoints (`/super/...`).

use serde_json::Value;
use tracing::instrument;

use super::query_of;
use crate::client::NrkClient;
use crate::error::{NrkError, Result};
use crate::params::{InstalmentOptions, SeriesOptions, SuperPageOptions};
use crate::validate::{validate_program_id, validate_series_id};

impl NrkClient {
    /// Lists all NRK Super pages.
    ///
    /// # Errors
    ///
    /// Returns any executor error.
    #[instrument(skip_all)]
    pub async fn get_all_super_pages(&self) -> Result<Value> {
        let url = self.endpoint("/super/pages");
        self.request(&url, None).await
    }

    /// Fetches an NRK Super page such as `superforside`.
    ///
    /// # Errors
    ///
    /// Returns any executor error.
    #[instrument(skip_all, fields(page_id = %page_id))]
    pub async fn get_super_page(
        &self,
        page_id: &str,
        options: Option<&SuperPageOptions>,
    ) -> Result<Value> {
        let url = self.endpoint(&format!("/super/pages/{page_id}"));
        self.request(&url, query_of(options).as_ref()).await
    }

    /// Fetches NRK Super program metadata.
    ///
    /// # Errors
    ///
    /// Returns `InvalidIdentifier` for a malformed id, otherwise any executor error.
    #[instrument(skip_all, fields(program_id = %program_id))]
    pub async fn get_super_program_metadata(&self, program_id: &str) -> Result<Value> {
        validate_program_id(program_id)?;
        let url = self.endpoint(&format!("/super/catalog/programs/{program_id}"));
        self.request(&url, None).await
    }

    /// Fetches page-view dimensions of an NRK Super program.
    ///
    /// # Errors
    ///
    /// Returns `InvalidIdentifier` for a malformed id, otherwise any executor error.
    #[instrument(skip_all, fields(program_id = %program_id))]
    pub async fn get_super_program_dimensions(&self, program_id: &str) -> Result<Value> {
        validate_program_id(program_id)?;
        let url = self.endpoint(&format!(
            "/super/catalog/programs/{program_id}/pageviews/ga"
        ));
        self.request(&url, None).await
    }

    /// Fetches the link record of an NRK Super program.
    ///
    /// # Errors
    ///
    /// Returns `InvalidIdentifier` for a malformed id, otherwise any executor error.
    #[instrument(skip_all, fields(program_id = %program_id))]
    pub async fn get_super_program_link(&self, program_id: &str) -> Result<Value> {
        validate_program_id(program_id)?;
        let url = self.endpoint(&format!("/super/catalog/programlinks/{program_id}"));
        self.request(&url, None).await
    }

    /// Fetches NRK Super series metadata.
    ///
    /// # Errors
    ///
    /// Returns `InvalidIdentifier` for a malformed id, otherwise any executor error.
    #[instrument(skip_all, fields(series_id = %series_id))]
    pub async fn get_super_series_metadata(
        &self,
        series_id: &str,
        options: Option<&SeriesOptions>,
    ) -> Result<Value> {
        validate_series_id(series_id)?;
        let url = self.endpoint(&format!("/super/catalog/series/{series_id}"));
        self.request(&url, query_of(options).as_ref()).await
    }

    /// Fetches the type of an NRK Super series.
    ///
    /// # Errors
    ///
    /// Returns `InvalidIdentifier` for a malformed id, otherwise any executor error.
    #[instrument(skip_all, fields(series_id = %series_id))]
    pub async fn get_super_series_type(&self, series_id: &str) -> Result<Value> {
        validate_series_id(series_id)?;
        let url = self.endpoint(&format!("/super/catalog/series/{series_id}/type"));
        self.request(&url, None).await
    }

    /// Fetches the extra material of an NRK Super series.
    ///
    /// # Errors
    ///
    /// Returns `InvalidIdentifier` for a malformed id, otherwise any executor
    /// error; 404 carries "This series does not have any extramaterial".
    #[instrument(skip_all, fields(series_id = %series_id))]
    pub async fn get_super_series_extramaterial(&self, series_id: &str) -> Result<Value> {
        validate_series_id(series_id)?;
        let url = self.endpoint(&format!(
            "/super/catalog/series/{series_id}/extramaterial"
        ));
        self.request_with_not_found(&url, None, "This series does not have any extramaterial")
            .await
    }

    /// Fetches a page of NRK Super series instalments.
    ///
    /// # Errors
    ///
    /// Returns `InvalidIdentifier` for a malformed id, otherwise any executor error.
    #[instrument(skip_all, fields(series_id = %series_id))]
    pub async fn get_super_series_instalments(
        &self,
        series_id: &str,
        options: Option<&InstalmentOptions>,
    ) -> Result<Value> {
        validate_series_id(series_id)?;
        let url = self.endpoint(&format!(
            "/super/catalog/series/{series_id}/instalments"
        ));
        self.request(&url, query_of(options).as_ref()).await
    }

    /// Fetches one season of an NRK Super series.
    ///
    /// `season_id` is used as a raw path segment and is not escaped.
    ///
    /// # Errors
    ///
    /// Returns `InvalidIdentifier` for a malformed series id, otherwise any executor error.
    #[instrument(skip_all, fields(series_id = %series_id, season_id = %season_id))]
    pub async fn get_super_season(&self, series_id: &str, season_id: &str) -> Result<Value> {
        validate_series_id(series_id)?;
        if season_id.is_empty() {
            return Err(NrkError::InvalidArgument(String::from(
                "Season id must not be empty",
            )));
        }
        let url = self.endpoint(&format!(
            "/super/catalog/series/{series_id}/seasons/{season_id}"
        ));
        self.request(&url, None).await
    }
}
