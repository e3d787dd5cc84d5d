mod cli;
mod config;

use chrono::{Local, NaiveDate};
use cli::Args;
use config::ConfigFile;
use release_radar::adapters::outbound::console::StderrProgressReporter;
use release_radar::adapters::outbound::filesystem::FileSystemReader;
use release_radar::application::dto::{ExportSource, OutputFormat, SearchRequest};
use release_radar::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use release_radar::application::read_models::ReportReadModelBuilder;
use release_radar::application::use_cases::SearchReleasesUseCase;
use release_radar::ports::outbound::ProgressReporter;
use release_radar::release_matching::policies::ProductLexicon;
use release_radar::release_matching::services::DEFAULT_CLOSEST_K;
use release_radar::shared::error::{ExitCode, RadarError};
use release_radar::shared::Result;
use std::path::{Path, PathBuf};
use std::process;

const DEFAULT_MAPPING_FILE: &str = "source.txt";
const DEFAULT_REFERENCE_FILE: &str = "reference.txt";

/// Timestamp layout of the report header
const GENERATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn main() {
    let args = match Args::try_parse_args() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            let code = if e.use_stderr() {
                ExitCode::InvalidArguments
            } else {
                ExitCode::Success
            };
            process::exit(code.as_i32());
        }
    };

    if let Err(e) = run(args) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

/// Options after merging CLI flags, config file and defaults
#[derive(Debug, PartialEq, Eq)]
struct ResolvedOptions {
    format: OutputFormat,
    output: Option<PathBuf>,
}

fn run(args: Args) -> Result<()> {
    let progress_reporter = if args.quiet {
        StderrProgressReporter::quiet()
    } else {
        StderrProgressReporter::new()
    };

    let config = load_config(args.config.as_deref(), &progress_reporter)?;

    let today = Local::now().date_naive();
    let (request, options) = resolve_request(&args, &config, today)?;

    // Create use case with injected dependencies
    let use_case = SearchReleasesUseCase::new(
        FileSystemReader::new(),
        FileSystemReader::new(),
        FileSystemReader::new(),
        &progress_reporter,
    );

    let response = use_case.execute(request)?;

    let generated_at = Local::now().format(GENERATED_AT_FORMAT).to_string();
    let model = ReportReadModelBuilder::build(&response, &generated_at);

    progress_reporter.report(FormatterFactory::progress_message(options.format));
    let formatted_output = FormatterFactory::create(options.format).format(&model)?;

    let presenter = PresenterFactory::create(PresenterType::from_output(options.output));
    presenter.present(&formatted_output)?;

    Ok(())
}

/// Loads the config given on the command line, or the one in the working directory.
fn load_config(explicit: Option<&Path>, reporter: &impl ProgressReporter) -> Result<ConfigFile> {
    if let Some(path) = explicit {
        reporter.report(&format!("📄 Using config file: {}", path.display()));
        return config::load_config_from_path(path);
    }

    let discovered = config::discover_config(Path::new("."))?;
    if discovered.is_some() {
        reporter.report(&format!(
            "📄 Auto-discovered config file: {}",
            config::CONFIG_FILENAME
        ));
    }
    Ok(discovered.unwrap_or_default())
}

/// Merges CLI flags over config values over built-in defaults.
fn resolve_request(
    args: &Args,
    config: &ConfigFile,
    today: NaiveDate,
) -> Result<(SearchRequest, ResolvedOptions)> {
    let export = match args.export.clone().or_else(|| config.export.clone()) {
        Some(path) => ExportSource::File(path),
        None => {
            let dir = args.dir.clone().unwrap_or_else(|| PathBuf::from("."));
            validate_search_dir(&dir)?;
            ExportSource::Discover(dir)
        }
    };

    let mapping_path = args
        .mapping
        .clone()
        .or_else(|| config.mapping.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_MAPPING_FILE));

    let no_version_filter = args.no_version_filter || config.no_version_filter.unwrap_or(false);
    let reference_path = if no_version_filter {
        None
    } else {
        Some(
            args.reference
                .clone()
                .or_else(|| config.reference.clone())
                .unwrap_or_else(|| PathBuf::from(DEFAULT_REFERENCE_FILE)),
        )
    };

    let closest_k = args
        .closest
        .map(|k| k as usize)
        .or(config.closest)
        .unwrap_or(DEFAULT_CLOSEST_K);

    let format = match (args.format, config.format.as_deref()) {
        (Some(format), _) => format,
        (None, Some(name)) => name
            .parse::<OutputFormat>()
            .map_err(|message| RadarError::Validation { message })?,
        (None, None) => OutputFormat::default(),
    };

    let mut lexicon = ProductLexicon::default();
    for (abbreviation, fragment) in config.abbreviations.iter().flatten() {
        lexicon.insert(abbreviation, fragment);
    }

    let request = SearchRequest::new(export, mapping_path, today)
        .with_reference(reference_path)
        .with_show_all(args.show_all || config.show_all.unwrap_or(false))
        .with_closest_k(closest_k)
        .with_lexicon(lexicon);

    let options = ResolvedOptions {
        format,
        output: args.output.clone().or_else(|| config.output.clone()),
    };

    Ok((request, options))
}

fn validate_search_dir(path: &Path) -> Result<()> {
    let metadata = std::fs::symlink_metadata(path).map_err(|e| RadarError::InvalidPath {
        path: path.to_path_buf(),
        reason: format!("Failed to read path metadata: {}", e),
    })?;

    if metadata.is_symlink() {
        return Err(RadarError::InvalidPath {
            path: path.to_path_buf(),
            reason: "Security: Search directory is a symbolic link. For security reasons, symbolic links are not allowed.".to_string(),
        }
        .into());
    }

    if !metadata.is_dir() {
        return Err(RadarError::InvalidPath {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    Ok(())
}
