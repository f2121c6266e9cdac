//! TV and radio page endpoints (`/tv/pages/...`, `/radio/pages/...`).

use serde_json::Value;
use tracing::instrument;

use super::query_of;
use crate::client::NrkClient;
use crate::error::Result;
use crate::params::{RadioPageOptions, TvPageOptions, TvSectionOptions};

impl NrkClient {
    /// Fetches a TV page such as `frontDeskTv`.
    ///
    /// # Errors
    ///
    /// Returns any executor error; 404 carries "Tv Page doesn't exist".
    #[instrument(skip_all, fields(page_id = %page_id))]
    pub async fn get_tv_page(
        &self,
        page_id: &str,
        options: Option<&TvPageOptions>,
    ) -> Result<Value> {
        let url = self.endpoint(&format!("/tv/pages/{page_id}"));
        self.request(&url, query_of(options).as_ref()).await
    }

    /// Lists all TV sub-pages.
    ///
    /// # Errors
    ///
    /// Returns any executor error.
    #[instrument(skip_all)]
    pub async fn get_tv_sub_pages(&self, options: Option<&TvSectionOptions>) -> Result<Value> {
        let url = self.endpoint("/tv/pages");
        self.request(&url, query_of(options).as_ref()).await
    }

    /// Fetches the TV front page.
    ///
    /// # Errors
    ///
    /// Returns any executor error.
    #[instrument(skip_all)]
    pub async fn get_tv_front_page(&self, options: Option<&TvPageOptions>) -> Result<Value> {
        let url = self.endpoint("/tv/pages/frontpage");
        self.request(&url, query_of(options).as_ref()).await
    }

    /// Fetches the TV category page.
    ///
    /// # Errors
    ///
    /// Returns any executor error.
    #[instrument(skip_all)]
    pub async fn get_tv_category_page(
        &self,
        options: Option<&TvSectionOptions>,
    ) -> Result<Value> {
        let url = self.endpoint("/tv/pages/categories");
        self.request(&url, query_of(options).as_ref()).await
    }

    /// Fetches one section of a TV page. The section title is lowercased.
    ///
    /// # Errors
    ///
    /// Returns any executor error; 404 carries
    /// "Tv Page or Section Title doesn't exist".
    #[instrument(skip_all, fields(page_id = %page_id, section = %section_title))]
    pub async fn get_tv_page_section(
        &self,
        page_id: &str,
        section_title: &str,
        options: Option<&TvSectionOptions>,
    ) -> Result<Value> {
        let section = section_title.to_lowercase();
        let url = self.endpoint(&format!("/tv/pages/{page_id}/{section}"));
        self.request_with_not_found(
            &url,
            query_of(options).as_ref(),
            "Tv Page or Section Title doesn't exist",
        )
        .await
    }

    /// Fetches the downloadable variant of a TV page.
    ///
    /// # Errors
    ///
    /// Returns any executor error; 404 carries
    /// "Tv Page doesn't exist or is not Downloadable".
    #[instrument(skip_all, fields(page_id = %page_id))]
    pub async fn get_offline_tv_page(&self, page_id: &str) -> Result<Value> {
        let url = self.endpoint(&format!("/tv/pages/offline/{page_id}"));
        self.request_with_not_found(&url, None, "Tv Page doesn't exist or is not Downloadable")
            .await
    }

    /// Fetches a radio page.
    ///
    /// # Errors
    ///
    /// Returns any executor error.
    #[instrument(skip_all, fields(page_id = %page_id))]
    pub async fn get_radio_page(
        &self,
        page_id: &str,
        options: Option<&RadioPageOptions>,
    ) -> Result<Value> {
        let url = self.endpoint(&format!("/radio/pages/{page_id}"));
        self.request_with_not_found(&url, query_of(options).as_ref(), "Radio Page doesn't exist")
            .await
    }
}
