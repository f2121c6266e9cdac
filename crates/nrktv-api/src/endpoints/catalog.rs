//! Program, series and season endpoints (`/tv/catalog/...`).

use serde_json::Value;
use tracing::instrument;

use super::query_of;
use crate::api::LocalCatalogApi;
use crate::client::NrkClient;
use crate::error::Result;
use crate::params::{InstalmentOptions, ProgramOptions, SeasonOptions, SeriesOptions};
use crate::validate::{validate_program_id, validate_series_id};

impl LocalCatalogApi for NrkClient {
    #[instrument(skip_all, fields(program_id = %program_id))]
    async fn get_program_page(
        &self,
        program_id: &str,
        options: Option<&ProgramOptions>,
    ) -> Result<Value> {
        validate_program_id(program_id)?;
        let url = self.endpoint(&format!("/tv/catalog/programs/{program_id}"));
        self.request_with_not_found(&url, query_of(options).as_ref(), "Program not found")
            .await
    }

    #[instrument(skip_all, fields(program_id = %program_id))]
    async fn get_program_navigation(&self, program_id: &str) -> Result<Value> {
        validate_program_id(program_id)?;
        let url = self.endpoint(&format!("/tv/catalog/programsContext/{program_id}"));
        self.request_with_not_found(&url, None, "Program doesn't exist")
            .await
    }

    #[instrument(skip_all, fields(program_id = %program_id))]
    async fn get_offline_program_navigation(
        &self,
        program_id: &str,
        options: Option<&ProgramOptions>,
    ) -> Result<Value> {
        validate_program_id(program_id)?;
        let url = self.endpoint(&format!(
            "/tv/catalog/offlineProgramsContext/{program_id}"
        ));
        self.request_with_not_found(&url, query_of(options).as_ref(), "Program doesn't exist")
            .await
    }

    #[instrument(skip_all, fields(series_id = %series_id))]
    async fn get_tv_series(
        &self,
        series_id: &str,
        options: Option<&SeriesOptions>,
    ) -> Result<Value> {
        validate_series_id(series_id)?;
        let url = self.endpoint(&format!("/tv/catalog/series/{series_id}"));
        self.request_with_not_found(&url, query_of(options).as_ref(), "Series not found")
            .await
    }

    /// `season_id` is inserted into the path verbatim; the caller must not
    /// pass `/`, `?` or `#`.
    #[instrument(skip_all, fields(series_id = %series_id, season_id = %season_id))]
    async fn get_series_season(
        &self,
        series_id: &str,
        season_id: &str,
        options: Option<&SeasonOptions>,
    ) -> Result<Value> {
        validate_series_id(series_id)?;
        let url = self.endpoint(&format!(
            "/tv/catalog/series/{series_id}/seasons/{season_id}"
        ));
        self.request_with_not_found(&url, query_of(options).as_ref(), "Season not found")
            .await
    }

    #[instrument(skip_all, fields(series_id = %series_id))]
    async fn get_series_instalments(
        &self,
        series_id: &str,
        options: Option<&InstalmentOptions>,
    ) -> Result<Value> {
        validate_series_id(series_id)?;
        let url = self.endpoint(&format!("/tv/catalog/series/{series_id}/instalments"));
        self.request(&url, query_of(options).as_ref()).await
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use serde_json::json;

    use super::*;
    use crate::error::{ErrorKind, NrkError};

    fn test_client(mock_server: &wiremock::MockServer) -> NrkClient {
        NrkClient::builder()
            .base_url(mock_server.uri().parse().unwrap())
            .user_agent("test/0.0.0")
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_program_page_via_http() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;

        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path("/tv/catalog/programs/KOIF75001319"))
            .and(wiremock::matchers::query_param("contentGroup", "adults"))
            .respond_with(
                wiremock::ResponseTemplate::new(200).set_body_json(json!({"id": "KOIF75001319"})),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server);
        let options = ProgramOptions {
            content_group: Some(String::from("adults")),
            ..ProgramOptions::default()
        };

        // Act
        let body = client
            .get_program_page("KOIF75001319", Some(&options))
            .await
            .unwrap();

        // Assert
        assert_eq!(body["id"], "KOIF75001319");
    }

    #[tokio::test]
    async fn test_program_page_invalid_id_sends_nothing() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;

        wiremock::Mock::given(wiremock::matchers::any())
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(0)
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server);

        // Act
        let err = client.get_program_page("not-an-id", None).await.unwrap_err();

        // Assert (mock expect(0) verifies no request)
        assert_eq!(err.kind(), ErrorKind::InvalidIdentifier);
        assert_eq!(err.to_string(), "Invalid Program Id");
    }

    #[tokio::test]
    async fn test_program_page_404_message() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;

        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .respond_with(wiremock::ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server);

        // Act
        let err = client
            .get_program_page("KOIF75001319", None)
            .await
            .unwrap_err();

        // Assert
        assert!(matches!(err, NrkError::NotFound(ref m) if m == "Program not found"));
    }

    #[tokio::test]
    async fn test_program_navigation_path() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;

        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path(
                "/tv/catalog/programsContext/KOIF75001319",
            ))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server);

        // Act & Assert (mock expect(1) verifies the path)
        client.get_program_navigation("KOIF75001319").await.unwrap();
    }

    #[tokio::test]
    async fn test_offline_program_navigation_404_message() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;

        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path(
                "/tv/catalog/offlineProgramsContext/KOIF75001319",
            ))
            .respond_with(wiremock::ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server);

        // Act
        let err = client
            .get_offline_program_navigation("KOIF75001319", None)
            .await
            .unwrap_err();

        // Assert
        assert_eq!(err.to_string(), "Program doesn't exist");
    }

    #[tokio::test]
    async fn test_tv_series_via_http() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;

        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path("/tv/catalog/series/side-om-side"))
            .and(wiremock::matchers::query_param("embed", "true"))
            .respond_with(
                wiremock::ResponseTemplate::new(200)
                    .set_body_json(json!({"id": "side-om-side", "_links": {"seasons": []}})),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server);
        let options = SeriesOptions {
            embed: Some(true),
            ..SeriesOptions::default()
        };

        // Act
        let body = client
            .get_tv_series("side-om-side", Some(&options))
            .await
            .unwrap();

        // Assert
        assert_eq!(body["id"], "side-om-side");
    }

    #[tokio::test]
    async fn test_tv_series_invalid_id() {
        // Arrange
        let client = NrkClient::builder()
            .base_url("http://127.0.0.1:1".parse().unwrap())
            .user_agent("test/0.0.0")
            .build()
            .unwrap();

        // Act
        let err = client.get_tv_series("bad id", None).await.unwrap_err();

        // Assert
        assert_eq!(err.to_string(), "Invalid Series Id");
    }

    #[tokio::test]
    async fn test_series_season_path() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;

        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path(
                "/tv/catalog/series/side-om-side/seasons/3",
            ))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_json(json!({"name": "3"})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server);

        // Act
        let body = client
            .get_series_season("side-om-side", "3", None)
            .await
            .unwrap();

        // Assert
        assert_eq!(body["name"], "3");
    }

    #[tokio::test]
    async fn test_series_season_id_is_not_escaped() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;

        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path(
                "/tv/catalog/series/side-om-side/seasons/2/extra",
            ))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server);

        // Act & Assert (a `/` in the season id adds a path segment)
        client
            .get_series_season("side-om-side", "2/extra", None)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_series_instalments_query() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;

        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path(
                "/tv/catalog/series/supernytt/instalments",
            ))
            .and(wiremock::matchers::query_param("pageSize", "10"))
            .and(wiremock::matchers::query_param_is_missing("page"))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server);
        let options = InstalmentOptions {
            page_size: Some(10),
            page: Some(0),
            ..InstalmentOptions::default()
        };

        // Act & Assert (page=0 is falsy and must not be sent)
        client
            .get_series_instalments("supernytt", Some(&options))
            .await
            .unwrap();
    }
}
