//! Aggregation helpers built on top of [`LocalCatalogApi`].

use futures::future::join_all;
use serde_json::Value;
use tracing::{instrument, warn};

use crate::api::LocalCatalogApi;
use crate::error::{NrkError, Result};

/// Outcome of fetching one season while aggregating a series.
#[derive(Debug)]
pub struct SeasonResult {
    /// Season name as listed under `_links.seasons[].name`.
    pub name: String,
    /// The season payload, or the error the executor produced for it.
    pub result: Result<Value>,
}

/// Extracts season names from a series payload in listed order.
fn season_names(series: &Value) -> Vec<String> {
    series
        .pointer("/_links/seasons")
        .and_then(Value::as_array)
        .map(|seasons| {
            seasons
                .iter()
                .filter_map(|s| s.get("name").and_then(Value::as_str))
                .map(ToOwned::to_owned)
                .collect()
        })
        .unwrap_or_default()
}

/// Fetches every season of a series concurrently.
///
/// Seasons are returned in the order the series lists them. A failed season
/// fetch is kept in its [`SeasonResult`] rather than aborting the others.
///
/// # Errors
///
/// Returns an error only if the series itself cannot be fetched.
#[instrument(skip_all, fields(series_id = %series_id))]
pub async fn all_seasons_from_series(
    api: &(impl LocalCatalogApi + Sync),
    series_id: &str,
) -> Result<Vec<SeasonResult>> {
    let series = api.get_tv_series(series_id, None).await?;
    let names = season_names(&series);

    let fetches = names.iter().map(|name| async move {
        SeasonResult {
            name: name.clone(),
            result: api.get_series_season(series_id, name, None).await,
        }
    });

    Ok(join_all(fetches).await)
}

/// Collects the episodes of every season of a series into one list.
///
/// Seasons that failed or carry no `_embedded.episodes` array are skipped
/// with a warning.
///
/// # Errors
///
/// Returns an error only if the series itself cannot be fetched.
#[instrument(skip_all, fields(series_id = %series_id))]
pub async fn series_episodes(
    api: &(impl LocalCatalogApi + Sync),
    series_id: &str,
) -> Result<Vec<Value>> {
    let seasons = all_seasons_from_series(api, series_id).await?;
    let mut episodes = Vec::new();

    for season in seasons {
        match season.result {
            Ok(body) => match body.pointer("/_embedded/episodes").and_then(Value::as_array) {
                Some(list) => episodes.extend(list.iter().cloned()),
                None => warn!(season = %season.name, "season has no episode list, skipping"),
            },
            Err(e) => warn!(season = %season.name, error = %e, "season fetch failed, skipping"),
        }
    }

    Ok(episodes)
}

/// Returns `true` if every season in the aggregate was fetched successfully.
#[must_use]
pub fn all_seasons_ok(seasons: &[SeasonResult]) -> bool {
    seasons.iter().all(|s| s.result.is_ok())
}

/// Returns the first season error in the aggregate, if any.
#[must_use]
pub fn first_season_error(seasons: &[SeasonResult]) -> Option<&NrkError> {
    seasons.iter().find_map(|s| s.result.as_ref().err())
}
