use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use pagepart::{ConfigError, ContentLoader, Pages, PagesPartition, SiteConfig};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Group site content into fixed-size pages
#[derive(Debug, Parser)]
#[command(name = "pagepart", version, about)]
struct Args {
    /// Content directory (overrides the config file)
    content_dir: Option<PathBuf>,

    /// Items per page (overrides the config file)
    #[arg(short, long, allow_negative_numbers = true)]
    size: Option<i64>,

    /// JSON config file [default: ./pagepart.json if present]
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Only paginate pages in this top-level section
    #[arg(long)]
    section: Option<String>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    pager_size: usize,
    total_items: usize,
    pages: Vec<Vec<&'a str>>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", error_message(&e));
            ExitCode::FAILURE
        }
    }
}

/// Text shown on stderr; a bad pager size reads as a config mistake
fn error_message(e: &anyhow::Error) -> String {
    match e.downcast_ref::<ConfigError>() {
        Some(ConfigError::InvalidPagination(inner)) => {
            format!("invalid pagination configuration: {}", inner)
        }
        _ => format!("error: {:#}", e),
    }
}

fn resolve_config(args: &Args) -> Result<SiteConfig> {
    let config = match &args.config {
        Some(path) => SiteConfig::load(path)?,
        None => SiteConfig::load_default()?.unwrap_or_default(),
    };

    let mut config = config.with_pager_size(args.size)?;
    if let Some(dir) = &args.content_dir {
        config.content_dir = dir.clone();
    }

    debug!(content_dir = %config.content_dir.display(), pager_size = %config.pager_size, "Resolved configuration");
    Ok(config)
}

fn run(args: Args) -> Result<()> {
    let config = resolve_config(&args)?;

    let mut pages = ContentLoader::new(&config.content_dir)
        .load()
        .context("Failed to load content")?;

    if let Some(section) = &args.section {
        pages = pages.in_section(section);
    }

    let partition = pages.partition_with(i64::from(config.pager_size))?;

    match args.format {
        OutputFormat::Text => print_text(&pages, &partition),
        OutputFormat::Json => print_json(&config, &pages, &partition)?,
    }

    Ok(())
}

fn print_text(pages: &Pages, partition: &PagesPartition<'_>) {
    if pages.is_empty() {
        println!("no pages found");
        return;
    }

    for part in partition {
        println!("page {} ({} items)", part.index() + 1, part.len());
        for page in part.iter() {
            println!("  {}", page.path);
        }
    }
}

fn build_report<'a>(
    config: &SiteConfig,
    pages: &Pages,
    partition: &PagesPartition<'a>,
) -> JsonReport<'a> {
    JsonReport {
        pager_size: config.pager_size.get(),
        total_items: pages.len(),
        pages: partition
            .iter()
            .map(|part| part.iter().map(|p| p.path.as_str()).collect())
            .collect(),
    }
}

fn print_json(config: &SiteConfig, pages: &Pages, partition: &PagesPartition<'_>) -> Result<()> {
    let report = build_report(config, pages, partition);
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagepart::Page;
    use std::path::Path;

    fn args(extra: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("pagepart").chain(extra.iter().copied())).unwrap()
    }

    fn write_config(dir: &Path, body: &str) -> String {
        let path = dir.join("site.json");
        std::fs::write(&path, body).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_zero_pager_size_in_config_is_reported_as_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = write_config(dir.path(), r#"{"pagination": {"pagerSize": 0}}"#);

        let err = resolve_config(&args(&["--config", &config])).unwrap_err();
        assert_eq!(
            error_message(&err),
            "invalid pagination configuration: Invalid partition size: 0 (must be at least 1)"
        );
    }

    #[test]
    fn test_negative_size_flag_is_reported_as_config_error() {
        let err = resolve_config(&args(&["--size", "-3"])).unwrap_err();
        assert!(error_message(&err).starts_with("invalid pagination configuration:"));
    }

    #[test]
    fn test_other_errors_use_generic_prefix() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");

        let err = resolve_config(&args(&["--config", &missing.to_string_lossy()])).unwrap_err();
        assert!(error_message(&err).starts_with("error: Failed to read config file"));
    }

    #[test]
    fn test_size_flag_overrides_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = write_config(
            dir.path(),
            r#"{"contentDir": "site", "pagination": {"pagerSize": 25}}"#,
        );

        let resolved = resolve_config(&args(&["--config", &config])).unwrap();
        assert_eq!(resolved.pager_size.get(), 25);

        let resolved = resolve_config(&args(&["--config", &config, "--size", "4"])).unwrap();
        assert_eq!(resolved.pager_size.get(), 4);
        assert_eq!(resolved.content_dir, PathBuf::from("site"));

        let resolved =
            resolve_config(&args(&["other", "--config", &config, "--size", "2"])).unwrap();
        assert_eq!(resolved.content_dir, PathBuf::from("other"));
    }

    #[test]
    fn test_json_report_shape() {
        let pages: Pages = ["/a/one.md", "/a/two.md", "/b/three.md"]
            .iter()
            .map(|p| Page::new(p).unwrap())
            .collect();
        let config = SiteConfig::default().with_pager_size(Some(2)).unwrap();
        let partition = pages.partition_with(2).unwrap();

        let report = build_report(&config, &pages, &partition);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "pagerSize": 2,
                "totalItems": 3,
                "pages": [["/a/one.md", "/a/two.md"], ["/b/three.md"]],
            })
        );
    }
}
