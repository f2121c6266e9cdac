//! Endpoint methods on `NrkClient`.
//!
//! Each method fills a fixed path template, runs its pre-flight checks and
//! hands the options to the request executor.

mod catalog;
mod index;
mod pages;
mod search;
mod super_catalog;

use crate::query::{QueryOptions, ToQueryOptions};

/// Converts optional typed options into executor input.
fn query_of<T: ToQueryOptions>(options: Option<&T>) -> Option<QueryOptions> {
    options.map(ToQueryOptions::to_query_options)
}
