//! Alphabetical index endpoints (`/medium/{medium}/letters/...`).

use serde_json::Value;
use tracing::instrument;

use super::query_of;
use crate::client::NrkClient;
use crate::error::Result;
use crate::params::{IndexElementsOptions, Medium};
use crate::validate::validate_index_letter;

impl NrkClient {
    /// Lists the index letters available for a medium.
    ///
    /// # Errors
    ///
    /// Returns any executor error.
    #[instrument(skip_all, fields(medium = %medium))]
    pub async fn get_letters(&self, medium: Medium) -> Result<Value> {
        let url = self.endpoint(&format!("/medium/{medium}/letters"));
        self.request(&url, None).await
    }

    /// Lists the index elements under one letter.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` without sending if `letter` is longer than
    /// one character, otherwise any executor error.
    #[instrument(skip_all, fields(medium = %medium, letter = %letter))]
    pub async fn get_index_elements(
        &self,
        medium: Medium,
        letter: &str,
        options: Option<&IndexElementsOptions>,
    ) -> Result<Value> {
        validate_index_letter(letter)?;
        let url = self.endpoint(&format!("/medium/{medium}/letters/{letter}/indexelements"));
        self.request(&url, query_of(options).as_ref()).await
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use serde_json::json;

    use super::*;
    use crate::error::ErrorKind;

    #[tokio::test]
    async fn test_letters_and_index_elements() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;

        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path("/medium/tv/letters"))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_json(json!(["a", "b"])))
            .expect(1)
            .mount(&mock_server)
            .await;

        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path("/medium/radio/letters/a/indexelements"))
            .and(wiremock::matchers::query_param("pageSize", "50"))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = NrkClient::builder()
            .base_url(mock_server.uri().parse().unwrap())
            .user_agent("test/0.0.0")
            .build()
            .unwrap();
        let options = IndexElementsOptions {
            page_size: Some(50),
            ..IndexElementsOptions::default()
        };

        // Act
        let letters = client.get_letters(Medium::Tv).await.unwrap();
        client
            .get_index_elements(Medium::Radio, "a", Some(&options))
            .await
            .unwrap();

        // Assert
        assert_eq!(letters, json!(["a", "b"]));
    }

    #[tokio::test]
    async fn test_index_elements_rejects_long_letter() {
        // Arrange
        let client = NrkClient::builder()
            .base_url("http://127.0.0.1:1".parse().unwrap())
            .user_agent("test/0.0.0")
            .build()
            .unwrap();

        // Act
        let err = client
            .get_index_elements(Medium::Tv, "ab", None)
            .await
            .unwrap_err();

        // Assert
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }
}
