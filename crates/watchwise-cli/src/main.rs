//! watchwise - WatchMode catalog browsing CLI.

/// Application configuration (TOML).
mod config;

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::instrument;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt;

use crate::config::{AppConfig, resolve_config_path};
use watchwise_api::watchmode::WatchModeClient;
use watchwise_media::model::{Media, MediaKind};
use watchwise_media::repository::MediaRepository;

/// CLI argument parser.
#[derive(Parser)]
#[command(about, version)]
struct Cli {
    /// Override config directory.
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    /// Override the configured WatchMode API key.
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// Subcommand to run.
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// List movies from the catalog.
    Movies(ListArgs),
    /// List TV shows from the catalog.
    Tv(ListArgs),
    /// Show the details record for a single title.
    Details(DetailsArgs),
    /// Search the catalog (not wired up; always returns no results).
    Search(SearchArgs),
}

/// Arguments for the `movies` and `tv` subcommands.
#[derive(clap::Args)]
struct ListArgs {
    /// Page number (1-based).
    #[arg(long, default_value_t = 1)]
    page: u32,
}

/// Arguments for the `details` subcommand.
#[derive(clap::Args)]
struct DetailsArgs {
    /// Catalog title id (e.g. "130381").
    #[arg(long, required = true)]
    id: String,
}

/// Arguments for the `search` subcommand.
#[derive(clap::Args)]
struct SearchArgs {
    /// Search query.
    #[arg(long, required = true)]
    query: String,

    /// Restrict to one media kind ("movie" or "tv").
    #[arg(long)]
    kind: Option<String>,
}

/// Resolves the API key from the CLI flag or the config file.
fn resolve_api_key(api_key: Option<&str>, dir: Option<&PathBuf>) -> Result<String> {
    if let Some(key) = api_key {
        return Ok(String::from(key));
    }

    let config_path = resolve_config_path(dir).context("failed to resolve config path")?;
    let config = AppConfig::load(&config_path).context("failed to load config")?;
    config.api.key.filter(|k| !k.is_empty()).with_context(|| {
        format!(
            "WatchMode API key is not configured; set [api] key in {} or pass --api-key",
            config_path.display()
        )
    })
}

/// Builds the repository over a real API client.
fn build_repository(
    api_key: Option<&str>,
    dir: Option<&PathBuf>,
) -> Result<MediaRepository<WatchModeClient>> {
    let api_key = resolve_api_key(api_key, dir)?;
    let client = WatchModeClient::builder()
        .api_key(api_key)
        .user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ))
        .build()
        .context("failed to build API client")?;
    Ok(MediaRepository::new(client))
}

/// Prints one row per title.
fn print_media_rows(media: &[Media]) {
    tracing::info!("ID\t\tTitle\t\t\tYear\tRating\tPoster");
    for m in media {
        tracing::info!(
            "{}\t{}\t{}\t{}\t{}",
            m.id,
            m.title,
            m.year.map_or_else(|| String::from("-"), |y| y.to_string()),
            m.rating
                .map_or_else(|| String::from("-"), |r| format!("{r:.1}")),
            m.poster_url.as_deref().unwrap_or("-"),
        );
    }
    tracing::info!("Total: {} titles", media.len());
}

/// Runs the `movies` subcommand.
///
/// # Errors
///
/// Returns an error if the API client fails to build or the list call fails.
#[instrument(skip_all)]
async fn run_movies(args: &ListArgs, api_key: Option<&str>, dir: Option<&PathBuf>) -> Result<()> {
    let repository = build_repository(api_key, dir)?;
    let media = repository
        .list_movies(args.page)
        .await
        .context("failed to fetch movies")?;
    print_media_rows(&media);
    Ok(())
}

/// Runs the `tv` subcommand.
///
/// # Errors
///
/// Returns an error if the API client fails to build or the list call fails.
#[instrument(skip_all)]
async fn run_tv(args: &ListArgs, api_key: Option<&str>, dir: Option<&PathBuf>) -> Result<()> {
    let repository = build_repository(api_key, dir)?;
    let media = repository
        .list_tv_shows(args.page)
        .await
        .context("failed to fetch TV shows")?;
    print_media_rows(&media);
    Ok(())
}

/// Runs the `details` subcommand.
///
/// # Errors
///
/// Returns an error if the API client fails to build or the details call
/// fails, including when the catalog has no title with the given id.
#[instrument(skip_all)]
async fn run_details(
    args: &DetailsArgs,
    api_key: Option<&str>,
    dir: Option<&PathBuf>,
) -> Result<()> {
    let repository = build_repository(api_key, dir)?;
    let details = repository
        .details(&args.id)
        .await
        .with_context(|| format!("failed to fetch details for {}", args.id))?;

    tracing::info!("Title:\t\t{}", details.title);
    tracing::info!("Kind:\t\t{:?}", details.kind);
    tracing::info!(
        "Year:\t\t{}",
        details
            .year
            .map_or_else(|| String::from("-"), |y| y.to_string())
    );
    tracing::info!(
        "Rating:\t\t{}",
        details
            .rating
            .map_or_else(|| String::from("-"), |r| format!("{r:.1}"))
    );
    tracing::info!("Released:\t{}", details.release_date.as_deref().unwrap_or("-"));
    tracing::info!("Genres:\t\t{}", details.genres.join(", "));
    tracing::info!("Poster:\t\t{}", details.poster_url.as_deref().unwrap_or("-"));
    tracing::info!("Overview:\t{}", details.overview);

    Ok(())
}

/// Parses the `--kind` filter value.
fn parse_kind(kind: &str) -> Result<MediaKind> {
    match kind {
        "movie" => Ok(MediaKind::Movie),
        "tv" | "tv_series" => Ok(MediaKind::TvShow),
        other => bail!("unknown media kind: {other} (expected \"movie\" or \"tv\")"),
    }
}

/// Runs the `search` subcommand.
///
/// # Errors
///
/// Returns an error if the API client fails to build or the kind filter is
/// invalid.
#[instrument(skip_all)]
async fn run_search(args: &SearchArgs, api_key: Option<&str>, dir: Option<&PathBuf>) -> Result<()> {
    let kind = args.kind.as_deref().map(parse_kind).transpose()?;
    let repository = build_repository(api_key, dir)?;
    let media = repository
        .search(&args.query, kind)
        .await
        .context("search failed")?;

    if media.is_empty() {
        tracing::info!("No results (search is not wired to the catalog).");
    } else {
        print_media_rows(&media);
    }

    Ok(())
}

/// Entry point.
///
/// # Errors
///
/// Returns an error if subcommand execution fails.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let api_key = cli.api_key.as_deref();
    let dir = cli.dir.as_ref();
    match cli.command {
        Commands::Movies(args) => run_movies(&args, api_key, dir).await,
        Commands::Tv(args) => run_tv(&args, api_key, dir).await,
        Commands::Details(args) => run_details(&args, api_key, dir).await,
        Commands::Search(args) => run_search(&args, api_key, dir).await,
    }
}
