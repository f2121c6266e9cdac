//! Search endpoints.

use serde_json::Value;
use tracing::instrument;

use super::query_of;
use crate::client::NrkClient;
use crate::error::Result;
use crate::params::{
    AutocompleteSearchOptions, SearchOptions, SearchPopularOptions, SearchTitleOptions,
};
use crate::query::{QueryOptions, ToQueryOptions};
use crate::validate::validate_search_query;

impl NrkClient {
    /// Full-text search across the catalog.
    ///
    /// # Errors
    ///
    /// Returns `QueryTooLong` without sending if `q` exceeds 30 characters,
    /// otherwise any executor error.
    #[instrument(skip_all)]
    pub async fn search(&self, options: &SearchOptions) -> Result<Value> {
        validate_search_query(&options.q)?;
        let url = self.endpoint("/search");
        self.request(&url, Some(&options.to_query_options())).await
    }

    /// Autocomplete suggestions for a partial query.
    ///
    /// # Errors
    ///
    /// Returns `QueryTooLong` without sending if `q` exceeds 30 characters,
    /// otherwise any executor error.
    #[instrument(skip_all)]
    pub async fn search_autocomplete(&self, options: &AutocompleteSearchOptions) -> Result<Value> {
        validate_search_query(&options.q)?;
        let url = self.endpoint("/autocomplete");
        self.request(&url, Some(&options.to_query_options())).await
    }

    /// Searches TV titles.
    ///
    /// # Errors
    ///
    /// Returns `QueryTooLong` without sending if `q` exceeds 30 characters,
    /// otherwise any executor error.
    #[instrument(skip_all)]
    pub async fn search_tv_titles(&self, options: &SearchTitleOptions) -> Result<Value> {
        validate_search_query(&options.q)?;
        let url = self.endpoint("/tv/titleSearch");
        self.request(&url, Some(&options.to_query_options())).await
    }

    /// Looks up a TV title by id.
    ///
    /// # Errors
    ///
    /// Returns any executor error.
    #[instrument(skip_all, fields(id = %id))]
    pub async fn search_by_id(&self, id: &str) -> Result<Value> {
        let url = self.endpoint("/tv/titleSearch/get");
        let query = QueryOptions::new().with("id", id);
        self.request(&url, Some(&query)).await
    }

    /// Looks up several TV titles by id.
    ///
    /// # Errors
    ///
    /// Returns any executor error.
    #[instrument(skip_all)]
    pub async fn search_by_ids(&self, ids: &[&str]) -> Result<Value> {
        let url = self.endpoint("/tv/titleSearch/get");
        let query = QueryOptions::new().with("ids", ids.join(","));
        self.request(&url, Some(&query)).await
    }

    /// Lists popular TV searches.
    ///
    /// # Errors
    ///
    /// Returns any executor error.
    #[instrument(skip_all)]
    pub async fn search_popular_tv(&self, options: Option<&SearchPopularOptions>) -> Result<Value> {
        let url = self.endpoint("/tv/popularSearch");
        self.request(&url, query_of(options).as_ref()).await
    }
}
