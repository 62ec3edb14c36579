//! chardex - Disney character lookup CLI.

/// Character card presentation.
mod card;
/// Application configuration (TOML).
mod config;
/// Terminal UI components.
mod tui;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::instrument;
use tracing_subscriber::filter::EnvFilter;
#[cfg(not(feature = "otel"))]
use tracing_subscriber::fmt;
#[cfg(feature = "otel")]
use tracing_subscriber::layer::SubscriberExt;
#[cfg(feature = "otel")]
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::{AppConfig, resolve_config_path};
use crate::tui::run_browser;
use chardex_api::disney::{
    CharacterClient, CharacterDetails, FilmsAndTvShows, LocalCharacterApi, SearchCriterion,
    search_by,
};

/// CLI argument parser.
#[derive(Parser)]
#[command(about, version)]
struct Cli {
    /// Override config directory.
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    /// Override the API base URL (e.g. "https://api.disneyapi.dev/").
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Subcommand to run.
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Search characters by name, film or TV show.
    Search(SearchArgs),
    /// Print the raw record of one character.
    Details(DetailsArgs),
    /// List the films and TV shows of the default character listing.
    Catalog,
    /// Browse characters interactively via TUI.
    Browse,
    /// Show or update the config file.
    Config(ConfigCommand),
}

/// Arguments for the `search` subcommand.
#[derive(clap::Args)]
struct SearchArgs {
    /// Search term (e.g. "Mickey Mouse").
    #[arg(long, required = true)]
    query: String,
    /// Search criterion: name, film or tvShow. Falls back to config if omitted.
    #[arg(long)]
    by: Option<String>,
}

/// Arguments for the `details` subcommand.
#[derive(clap::Args)]
struct DetailsArgs {
    /// Character ID.
    #[arg(long, required = true)]
    id: u64,
}

/// Arguments for the `config` subcommand.
#[derive(clap::Args)]
struct ConfigCommand {
    /// Config subcommand to run.
    #[command(subcommand)]
    command: ConfigSubcommands,
}

/// Available config subcommands.
#[derive(Subcommand)]
enum ConfigSubcommands {
    /// Print the effective config.
    Show,
    /// Update config values and write the file.
    Set(ConfigSetArgs),
}

/// Arguments for the `config set` subcommand.
#[derive(clap::Args)]
struct ConfigSetArgs {
    /// Default search criterion: name, film or tvShow.
    #[arg(long)]
    criterion: Option<String>,
    /// API base URL stored in the config file.
    #[arg(long = "api-url")]
    api_url: Option<String>,
}

/// Loads the config file from `--dir` or the default location.
fn load_config(dir: Option<&PathBuf>) -> Result<AppConfig> {
    let config_path = resolve_config_path(dir).context("failed to resolve config path")?;
    AppConfig::load(&config_path).context("failed to load config")
}

/// Builds the character API client.
///
/// `--base-url` wins over the config file; the public API is used when
/// neither is set.
fn build_client(config: &AppConfig, base_url: Option<&str>) -> Result<CharacterClient> {
    let mut builder = CharacterClient::builder().user_agent(concat!(
        env!("CARGO_PKG_NAME"),
        "/",
        env!("CARGO_PKG_VERSION")
    ));
    if let Some(url) = config.base_url(base_url)? {
        builder = builder.base_url(url);
    }
    builder.build().context("failed to build API client")
}

/// Runs the `search` subcommand.
///
/// # Errors
///
/// Returns an error if the criterion is unknown, the client cannot be built,
/// or the API request fails.
#[instrument(skip_all)]
async fn run_search(
    args: &SearchArgs,
    dir: Option<&PathBuf>,
    base_url: Option<&str>,
) -> Result<()> {
    let config = load_config(dir)?;
    let client = build_client(&config, base_url)?;
    let criterion = args.by.as_deref().unwrap_or(&config.search.criterion);

    let characters = search_by(&client, &args.query, criterion)
        .await
        .context("character search failed")?;

    card::report_characters(&characters);
    Ok(())
}

/// Runs the `details` subcommand.
///
/// # Errors
///
/// Returns an error if the client cannot be built or the API request fails.
#[instrument(skip_all)]
async fn run_details(
    args: &DetailsArgs,
    dir: Option<&PathBuf>,
    base_url: Option<&str>,
) -> Result<()> {
    let config = load_config(dir)?;
    let client = build_client(&config, base_url)?;

    let details = client
        .character_details(args.id)
        .await
        .with_context(|| format!("failed to fetch character {}", args.id))?;

    tracing::info!("{}", format_details(details)?);
    Ok(())
}

/// Renders a details body as indented JSON, keys as received.
fn format_details(details: CharacterDetails) -> Result<String> {
    serde_json::to_string_pretty(&details.into_value()).context("failed to format response")
}

/// Runs the `catalog` subcommand.
///
/// # Errors
///
/// Returns an error if the client cannot be built or the API request fails.
#[instrument(skip_all)]
async fn run_catalog(dir: Option<&PathBuf>, base_url: Option<&str>) -> Result<()> {
    let config = load_config(dir)?;
    let client = build_client(&config, base_url)?;

    let summary = client
        .films_and_tv_shows()
        .await
        .context("failed to fetch films and TV shows")?;

    tracing::info!("Films ({}):", summary.films.len());
    for film in &summary.films {
        tracing::info!("  {}", film);
    }
    tracing::info!("TV Shows ({}):", summary.tv_shows.len());
    for show in &summary.tv_shows {
        tracing::info!("  {}", show);
    }
    Ok(())
}

/// Runs the `browse` subcommand.
///
/// A failed catalog fetch leaves the selection lists empty; free-text
/// search still works.
///
/// # Errors
///
/// Returns an error if the config is invalid or the TUI fails.
async fn run_browse(dir: Option<&PathBuf>, base_url: Option<&str>) -> Result<()> {
    let config = load_config(dir)?;
    let client = build_client(&config, base_url)?;
    let criterion: SearchCriterion = config
        .search
        .criterion
        .parse()
        .context("invalid search criterion in config")?;

    let summary = match client.films_and_tv_shows().await {
        Ok(summary) => summary,
        Err(e) => {
            tracing::error!("failed to load films and TV shows: {e}");
            FilmsAndTvShows::default()
        }
    };

    run_browser(&client, &summary, criterion).await
}

/// Runs the `config show` subcommand.
///
/// # Errors
///
/// Returns an error if the config file cannot be read.
fn run_config_show(dir: Option<&PathBuf>) -> Result<()> {
    let config_path = resolve_config_path(dir).context("failed to resolve config path")?;
    let config = AppConfig::load(&config_path).context("failed to load config")?;

    tracing::info!("Config file: {}", config_path.display());
    tracing::info!(
        "api.base_url = {}",
        config.api.base_url.as_deref().unwrap_or("(default)")
    );
    tracing::info!("search.criterion = {}", config.search.criterion);
    Ok(())
}

/// Runs the `config set` subcommand.
///
/// # Errors
///
/// Returns an error if a value is invalid or the file cannot be written.
fn run_config_set(args: &ConfigSetArgs, dir: Option<&PathBuf>) -> Result<()> {
    let config_path = resolve_config_path(dir).context("failed to resolve config path")?;
    let mut config = AppConfig::load(&config_path).context("failed to load config")?;

    if let Some(ref raw) = args.criterion {
        let criterion: SearchCriterion = raw.parse().context("invalid search criterion")?;
        config.search.criterion = String::from(criterion.as_str());
    }
    if let Some(ref raw) = args.api_url {
        url::Url::parse(raw).with_context(|| format!("invalid API base URL: {raw}"))?;
        config.api.base_url = Some(raw.clone());
    }

    config.save(&config_path).context("failed to save config")?;
    tracing::info!("Saved config to {}", config_path.display());
    Ok(())
}

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
    let dir = cli.dir.as_ref();
    let base_url = cli.base_url.as_deref();
    match cli.command {
        Commands::Search(args) => run_search(&args, dir, base_url).await,
        Commands::Details(args) => run_details(&args, dir, base_url).await,
        Commands::Catalog => run_catalog(dir, base_url).await,
        Commands::Browse => run_browse(dir, base_url).await,
        Commands::Config(cmd) => match cmd.command {
            ConfigSubcommands::Show => run_config_show(dir),
            ConfigSubcommands::Set(args) => run_config_set(&args, dir),
        },
    }
}
