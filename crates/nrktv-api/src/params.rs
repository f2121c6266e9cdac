//! Per-endpoint request option types.
//!
//! Every type is a flat set of optional scalars. Field order is wire order,
//! and unset or falsy fields are left out of the query string.

use std::fmt;

use crate::query::{QueryOptions, ToQueryOptions};

/// Catalog medium used in index paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Medium {
    /// Television.
    Tv,
    /// Radio.
    Radio,
    /// Podcasts.
    Podcast,
}

impl Medium {
    /// Returns the lowercase path segment.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tv => "tv",
            Self::Radio => "radio",
            Self::Podcast => "podcast",
        }
    }
}

impl fmt::Display for Medium {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options for a TV page (`/tv/pages/{id}`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TvPageOptions {
    /// Comma-separated user segments.
    pub user_segments: Option<String>,
    /// Experiment id.
    pub experiment_id: Option<String>,
    /// Experiment variant.
    pub variant: Option<i64>,
    /// Maximum number of sections.
    pub limit: Option<i64>,
    /// Section offset.
    pub offset: Option<i64>,
    /// Image profile name.
    pub image_profile: Option<String>,
    /// Content group tag.
    pub content_group: Option<String>,
    /// Viewer age.
    pub age: Option<i64>,
}

impl ToQueryOptions for TvPageOptions {
    fn to_query_options(&self) -> QueryOptions {
        QueryOptions::new()
            .with_opt("userSegments", self.user_segments.as_ref())
            .with_opt("experimentId", self.experiment_id.as_ref())
            .with_opt("variant", self.variant)
            .with_opt("limit", self.limit)
            .with_opt("offset", self.offset)
            .with_opt("imageProfile", self.image_profile.as_ref())
            .with_opt("contentGroup", self.content_group.as_ref())
            .with_opt("age", self.age)
    }
}

/// Options for TV page listings, the category page and page sections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TvSectionOptions {
    /// Comma-separated user segments.
    pub user_segments: Option<String>,
    /// Experiment id.
    pub experiment_id: Option<String>,
    /// Experiment variant.
    pub variant: Option<i64>,
    /// Content group tag.
    pub content_group: Option<String>,
    /// Viewer age.
    pub age: Option<i64>,
}

impl ToQueryOptions for TvSectionOptions {
    fn to_query_options(&self) -> QueryOptions {
        QueryOptions::new()
            .with_opt("userSegments", self.user_segments.as_ref())
            .with_opt("experimentId", self.experiment_id.as_ref())
            .with_opt("variant", self.variant)
            .with_opt("contentGroup", self.content_group.as_ref())
            .with_opt("age", self.age)
    }
}

/// Options for a radio page (`/radio/pages/{id}`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RadioPageOptions {
    /// Comma-separated user segments.
    pub user_segments: Option<String>,
    /// Experiment id.
    pub experiment_id: Option<String>,
    /// Experiment variant.
    pub variant: Option<String>,
    /// Maximum number of sections.
    pub limit: Option<i64>,
    /// Section offset.
    pub offset: Option<i64>,
}

impl ToQueryOptions for RadioPageOptions {
    fn to_query_options(&self) -> QueryOptions {
        // The radio API spells this key "experiement".
        QueryOptions::new()
            .with_opt("userSegments", self.user_segments.as_ref())
            .with_opt("experiementId", self.experiment_id.as_ref())
            .with_opt("variant", self.variant.as_ref())
            .with_opt("limit", self.limit)
            .with_opt("offset", self.offset)
    }
}

/// Options for program endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgramOptions {
    /// Content group tag.
    pub content_group: Option<String>,
    /// Age restriction tier.
    pub age_restriction: Option<String>,
}

impl ToQueryOptions for ProgramOptions {
    fn to_query_options(&self) -> QueryOptions {
        QueryOptions::new()
            .with_opt("contentGroup", self.content_group.as_ref())
            .with_opt("ageRestriction", self.age_restriction.as_ref())
    }
}

/// Options for series metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeriesOptions {
    /// Page size of the embedded instalment list.
    pub embedded_instalments_page_size: Option<i64>,
    /// Embed seasons/instalments in the response.
    pub embed: Option<bool>,
    /// Content group tag.
    pub content_group: Option<String>,
    /// Age restriction tier.
    pub age_restriction: Option<String>,
}

impl ToQueryOptions for SeriesOptions {
    fn to_query_options(&self) -> QueryOptions {
        QueryOptions::new()
            .with_opt(
                "embeddedInstalmentsPageSize",
                self.embedded_instalments_page_size,
            )
            .with_opt("embed", self.embed)
            .with_opt("contentGroup", self.content_group.as_ref())
            .with_opt("ageRestriction", self.age_restriction.as_ref())
    }
}

/// Options for a single season.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeasonOptions {
    /// Embed episodes in the response.
    pub embed: Option<bool>,
    /// Content group tag.
    pub content_group: Option<String>,
    /// Age restriction tier.
    pub age_restriction: Option<String>,
}

impl ToQueryOptions for SeasonOptions {
    fn to_query_options(&self) -> QueryOptions {
        QueryOptions::new()
            .with_opt("embed", self.embed)
            .with_opt("contentGroup", self.content_group.as_ref())
            .with_opt("ageRestriction", self.age_restriction.as_ref())
    }
}

/// Options for instalment listings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstalmentOptions {
    /// Items per page.
    pub page_size: Option<i64>,
    /// Page number.
    pub page: Option<i64>,
    /// Content group tag.
    pub content_group: Option<String>,
    /// Age restriction tier.
    pub age_restriction: Option<String>,
}

impl ToQueryOptions for InstalmentOptions {
    fn to_query_options(&self) -> QueryOptions {
        QueryOptions::new()
            .with_opt("pageSize", self.page_size)
            .with_opt("page", self.page)
            .with_opt("contentGroup", self.content_group.as_ref())
            .with_opt("ageRestriction", self.age_restriction.as_ref())
    }
}

/// Options for an NRK Super page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuperPageOptions {
    /// Experiment id.
    pub experiment_id: Option<String>,
    /// Experiment variant.
    pub variant: Option<i64>,
    /// Maximum number of sections.
    pub limit: Option<i64>,
    /// Section offset.
    pub offset: Option<i64>,
}

impl ToQueryOptions for SuperPageOptions {
    fn to_query_options(&self) -> QueryOptions {
        QueryOptions::new()
            .with_opt("experimentId", self.experiment_id.as_ref())
            .with_opt("variant", self.variant)
            .with_opt("limit", self.limit)
            .with_opt("offset", self.offset)
    }
}

/// Options for the index element listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexElementsOptions {
    /// Page number.
    pub page: Option<i64>,
    /// Items per page.
    pub page_size: Option<i64>,
}

impl ToQueryOptions for IndexElementsOptions {
    fn to_query_options(&self) -> QueryOptions {
        QueryOptions::new()
            .with_opt("page", self.page)
            .with_opt("pageSize", self.page_size)
    }
}

/// Options for full search (`/search`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Search query (max 30 characters).
    pub q: String,
    /// Result page token.
    pub page: Option<String>,
    /// Results per page.
    pub max_results_per_page: Option<i64>,
    /// Include highlight fragments.
    pub include_highlights: Option<bool>,
    /// Medium filter.
    pub medium: Option<String>,
    /// Restrict to NRK Super content.
    pub super_filter: Option<bool>,
    /// Comma-separated categories.
    pub categories: Option<String>,
    /// Viewer age limit.
    pub viewerage_limit: Option<i64>,
    /// Include podcasts.
    pub include_podcasts: Option<bool>,
}

impl SearchOptions {
    /// Creates search options for the given query.
    #[must_use]
    pub fn new(q: impl Into<String>) -> Self {
        Self {
            q: q.into(),
            ..Self::default()
        }
    }

    /// Sets the number of results per page.
    #[must_use]
    pub const fn max_results_per_page(mut self, n: i64) -> Self {
        self.max_results_per_page = Some(n);
        self
    }
}

impl ToQueryOptions for SearchOptions {
    fn to_query_options(&self) -> QueryOptions {
        QueryOptions::new()
            .with("q", self.q.as_str())
            .with_opt("page", self.page.as_ref())
            .with_opt("maxResultsPerPage", self.max_results_per_page)
            .with_opt("includeHighLights", self.include_highlights)
            .with_opt("medium", self.medium.as_ref())
            .with_opt("superFilter", self.super_filter)
            .with_opt("categories", self.categories.as_ref())
            .with_opt("viewerageLimit", self.viewerage_limit)
            .with_opt("includePodcasts", self.include_podcasts)
    }
}

/// Options for autocomplete search (`/autocomplete`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AutocompleteSearchOptions {
    /// Search query (max 30 characters).
    pub q: String,
    /// Medium filter.
    pub medium: Option<Medium>,
    /// Restrict to NRK Super content.
    pub super_filter: Option<bool>,
    /// Viewer age limit.
    pub viewerage_limit: Option<i64>,
    /// Include podcasts.
    pub include_podcasts: Option<bool>,
    /// Number of suggestions.
    pub size: Option<i64>,
}

impl AutocompleteSearchOptions {
    /// Creates autocomplete options for the given query.
    #[must_use]
    pub fn new(q: impl Into<String>) -> Self {
        Self {
            q: q.into(),
            ..Self::default()
        }
    }
}

impl ToQueryOptions for AutocompleteSearchOptions {
    fn to_query_options(&self) -> QueryOptions {
        QueryOptions::new()
            .with("q", self.q.as_str())
            .with_opt("medium", self.medium.map(Medium::as_str))
            .with_opt("superFilter", self.super_filter)
            .with_opt("viewerageLimit", self.viewerage_limit)
            .with_opt("includePodcasts", self.include_podcasts)
            .with_opt("size", self.size)
    }
}

/// Options for TV title search (`/tv/titleSearch`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchTitleOptions {
    /// Search query (max 30 characters).
    pub q: String,
    /// Viewer age.
    pub age: Option<i64>,
    /// Content group tag.
    pub content_group: Option<String>,
}

impl SearchTitleOptions {
    /// Creates title search options for the given query.
    #[must_use]
    pub fn new(q: impl Into<String>) -> Self {
        Self {
            q: q.into(),
            ..Self::default()
        }
    }
}

impl ToQueryOptions for SearchTitleOptions {
    fn to_query_options(&self) -> QueryOptions {
        QueryOptions::new()
            .with("q", self.q.as_str())
            .with_opt("age", self.age)
            .with_opt("contentGroup", self.content_group.as_ref())
    }
}

/// Options for popular TV searches (`/tv/popularSearch`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPopularOptions {
    /// Client platform.
    pub platform: Option<String>,
    /// Content group tag.
    pub content_group: Option<String>,
    /// Viewer age.
    pub age: Option<i64>,
}

impl ToQueryOptions for SearchPopularOptions {
    fn to_query_options(&self) -> QueryOptions {
        QueryOptions::new()
            .with_opt("platform", self.platform.as_ref())
            .with_opt("contentGroup", self.content_group.as_ref())
            .with_opt("age", self.age)
    }
}
