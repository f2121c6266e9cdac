//! nrktv - NRK TV content-catalog CLI.

/// Application configuration (TOML).
mod config;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use nrktv_api::{
    LocalCatalogApi, NrkClient, ProgramOptions, SearchOptions, SearchPopularOptions,
    SeasonOptions, SeriesOptions, TvPageOptions, all_seasons_from_series, series_episodes,
};
use serde_json::Value;
use tracing::instrument;
use tracing_subscriber::filter::EnvFilter;
#[cfg(not(feature = "otel"))]
use tracing_subscriber::fmt;
#[cfg(feature = "otel")]
use tracing_subscriber::layer::SubscriberExt;
#[cfg(feature = "otel")]
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::{AppConfig, resolve_config_path};

/// CLI argument parser.
#[derive(Parser)]
#[command(about, version)]
struct Cli {
    /// Override config directory.
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Fetch a TV page (e.g. "frontDeskTv").
    Page(PageArgs),
    /// Fetch a program by id (e.g. "KOIF75001319").
    Program(ProgramArgs),
    /// Fetch a series by id (e.g. "side-om-side").
    Series(SeriesArgs),
    /// Fetch one season of a series.
    Season(SeasonArgs),
    /// List every episode of a series across all seasons.
    Episodes(EpisodesArgs),
    /// Search the catalog.
    Search(SearchArgs),
    /// List popular TV searches.
    Popular,
    /// Write a default config file.
    Init,
}

/// Arguments for the `page` subcommand.
#[derive(clap::Args)]
struct PageArgs {
    /// Page id.
    id: String,
    /// Maximum number of sections.
    #[arg(long)]
    limit: Option<i64>,
}

/// Arguments for the `program` subcommand.
#[derive(clap::Args)]
struct ProgramArgs {
    /// Program id.
    id: String,
}

/// Arguments for the `series` subcommand.
#[derive(clap::Args)]
struct SeriesArgs {
    /// Series id.
    id: String,
    /// Also fetch every season and print a per-season summary.
    #[arg(long)]
    seasons: bool,
}

/// Arguments for the `season` subcommand.
#[derive(clap::Args)]
struct SeasonArgs {
    /// Series id.
    series: String,
    /// Season id (usually the season number).
    season: String,
}

/// Arguments for the `episodes` subcommand.
#[derive(clap::Args)]
struct EpisodesArgs {
    /// Series id.
    series: String,
}

/// Arguments for the `search` subcommand.
#[derive(clap::Args)]
struct SearchArgs {
    /// Search query (max 30 characters).
    query: String,
    /// Maximum results per page.
    #[arg(long)]
    size: Option<i64>,
}

/// Builds an `NrkClient` from config, falling back to the public endpoint.
///
/// # Errors
///
/// Returns an error if the configured base URL is invalid or the client fails to build.
fn build_client(config: &AppConfig) -> Result<NrkClient> {
    let user_agent = config.api.user_agent.clone().unwrap_or_else(|| {
        String::from(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ))
    });

    NrkClient::builder()
        .base_url(config.base_url()?)
        .user_agent(user_agent)
        .build()
        .context("failed to build API client")
}

/// Loads the config file resolved from `--dir`.
///
/// # Errors
///
/// Returns an error if the path cannot be resolved or the file cannot be parsed.
fn load_config(dir: Option<&PathBuf>) -> Result<AppConfig> {
    let config_path = resolve_config_path(dir).context("failed to resolve config path")?;
    AppConfig::load(&config_path).context("failed to load config")
}

/// Logs a JSON payload in pretty form.
///
/// # Errors
///
/// Returns an error if the payload cannot be serialized.
fn print_json(value: &Value) -> Result<()> {
    let pretty = serde_json::to_string_pretty(value).context("failed to format response")?;
    tracing::info!("{pretty}");
    Ok(())
}

/// Runs the `page` subcommand.
///
/// # Errors
///
/// Returns an error if the API request fails.
#[instrument(skip_all)]
async fn run_page(client: &NrkClient, config: &AppConfig, args: &PageArgs) -> Result<()> {
    let options = TvPageOptions {
        limit: args.limit,
        content_group: config.defaults.content_group.clone(),
        ..TvPageOptions::default()
    };
    let body = client
        .get_tv_page(&args.id, Some(&options))
        .await
        .context("tv page request failed")?;
    print_json(&body)
}

/// Runs the `program` subcommand.
///
/// # Errors
///
/// Returns an error if the id is invalid or the API request fails.
#[instrument(skip_all)]
async fn run_program(client: &NrkClient, config: &AppConfig, args: &ProgramArgs) -> Result<()> {
    let options = ProgramOptions {
        content_group: config.defaults.content_group.clone(),
        age_restriction: config.defaults.age_restriction.clone(),
    };
    let body = client
        .get_program_page(&args.id, Some(&options))
        .await
        .context("program request failed")?;
    print_json(&body)
}

/// Runs the `series` subcommand.
///
/// # Errors
///
/// Returns an error if the id is invalid or the series request fails.
#[instrument(skip_all)]
async fn run_series(client: &NrkClient, config: &AppConfig, args: &SeriesArgs) -> Result<()> {
    if args.seasons {
        let seasons = all_seasons_from_series(client, &args.id)
            .await
            .context("series request failed")?;
        tracing::info!("Season\tStatus");
        for season in &seasons {
            match &season.result {
                Ok(_) => tracing::info!("{}\tok", season.name),
                Err(e) => tracing::info!("{}\t{e}", season.name),
            }
        }
        tracing::info!("Total: {} seasons", seasons.len());
        return Ok(());
    }

    let options = SeriesOptions {
        content_group: config.defaults.content_group.clone(),
        age_restriction: config.defaults.age_restriction.clone(),
        ..SeriesOptions::default()
    };
    let body = client
        .get_tv_series(&args.id, Some(&options))
        .await
        .context("series request failed")?;
    print_json(&body)
}

/// Runs the `season` subcommand.
///
/// # Errors
///
/// Returns an error if the series id is invalid or the API request fails.
#[instrument(skip_all)]
async fn run_season(client: &NrkClient, config: &AppConfig, args: &SeasonArgs) -> Result<()> {
    let options = SeasonOptions {
        content_group: config.defaults.content_group.clone(),
        age_restriction: config.defaults.age_restriction.clone(),
        ..SeasonOptions::default()
    };
    let body = client
        .get_series_season(&args.series, &args.season, Some(&options))
        .await
        .context("season request failed")?;
    print_json(&body)
}

/// Runs the `episodes` subcommand.
///
/// # Errors
///
/// Returns an error if the series id is invalid or the series request fails.
#[instrument(skip_all)]
async fn run_episodes(client: &NrkClient, args: &EpisodesArgs) -> Result<()> {
    let episodes = series_episodes(client, &args.series)
        .await
        .context("series request failed")?;

    tracing::info!("ProgramId\tTitle");
    for episode in &episodes {
        let prf_id = episode
            .get("prfId")
            .and_then(Value::as_str)
            .unwrap_or("-");
        let title = episode
            .pointer("/titles/title")
            .and_then(Value::as_str)
            .unwrap_or("-");
        tracing::info!("{prf_id}\t{title}");
    }
    tracing::info!("Total: {} episodes", episodes.len());

    Ok(())
}

/// Runs the `search` subcommand.
///
/// # Errors
///
/// Returns an error if the query is too long or the API request fails.
#[instrument(skip_all)]
async fn run_search(client: &NrkClient, args: &SearchArgs) -> Result<()> {
    let mut options = SearchOptions::new(args.query.as_str());
    if let Some(size) = args.size {
        options = options.max_results_per_page(size);
    }
    let body = client
        .search(&options)
        .await
        .context("search request failed")?;
    print_json(&body)
}

/// Runs the `popular` subcommand.
///
/// # Errors
///
/// Returns an error if the API request fails.
#[instrument(skip_all)]
async fn run_popular(client: &NrkClient, config: &AppConfig) -> Result<()> {
    let options = SearchPopularOptions {
        content_group: config.defaults.content_group.clone(),
        ..SearchPopularOptions::default()
    };
    let body = client
        .search_popular_tv(Some(&options))
        .await
        .context("popular search request failed")?;
    print_json(&body)
}

/// Runs the `init` subcommand.
///
/// Leaves an existing config file untouched.
///
/// # Errors
///
/// Returns an error if the config file cannot be written.
fn run_init(dir: Option<&PathBuf>) -> Result<()> {
    let config_path = resolve_config_path(dir).context("failed to resolve config path")?;
    if config_path.exists() {
        tracing::info!("Config already exists: {}", config_path.display());
        return Ok(());
    }
    AppConfig::default()
        .save(&config_path)
        .context("failed to write config")?;
    tracing::info!("Wrote {}", config_path.display());
    Ok(())
}

/// Entry point.
///
/// # Errors
///
/// Returns an error if subcommand execution fails.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    #[cfg(not(feature = "otel"))]
    {
        fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_target(false)
            .init();
    }

    #[cfg(feature = "otel")]
    {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let fmt_layer = tracing_subscriber::fmt::layer().with_target(false);

        let otel_layer = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
            .ok()
            .and_then(|_| {
                let exporter = opentelemetry_otlp::SpanExporter::builder()
                    .with_http()
                    .build()
                    .ok()?;

                let tracer_provider = opentelemetry_sdk::trace::SdkTracerProvider::builder()
                    .with_simple_exporter(exporter)
                    .build();

                let tracer = opentelemetry::trace::TracerProvider::tracer(
                    &tracer_provider,
                    env!("CARGO_PKG_NAME"),
                );
                opentelemetry::global::set_tracer_provider(tracer_provider);

                Some(tracing_opentelemetry::layer().with_tracer(tracer))
            });

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .with(otel_layer)
            .init();
    }

    let cli = Cli::parse();
    if matches!(cli.command, Commands::Init) {
        return run_init(cli.dir.as_ref());
    }

    let config = load_config(cli.dir.as_ref())?;
    let client = build_client(&config)?;

    match &cli.command {
        Commands::Page(args) => run_page(&client, &config, args).await,
        Commands::Program(args) => run_program(&client, &config, args).await,
        Commands::Series(args) => run_series(&client, &config, args).await,
        Commands::Season(args) => run_season(&client, &config, args).await,
        Commands::Episodes(args) => run_episodes(&client, args).await,
        Commands::Search(args) => run_search(&client, args).await,
        Commands::Popular => run_popular(&client, &config).await,
        Commands::Init => run_init(cli.dir.as_ref()),
    }
}
