use bom_enrich::adapters::outbound::console::StderrProgressReporter;
use bom_enrich::adapters::outbound::filesystem::{
    BomFileReader, FileOverrideSource, FileSystemWriter, StdoutPresenter,
};
use bom_enrich::adapters::outbound::network::{
    CachingRegistryGateway, CachingRepositorySignal, EolClient, GitHubClient, OsvClient,
    RegistryClient, RegistryEndpoints,
};
use bom_enrich::application::dto::EnrichRequest;
use bom_enrich::application::use_cases::EnrichComponentsUseCase;
use bom_enrich::cli::Args;
use bom_enrich::config;
use bom_enrich::ports::outbound::{BomReader, OutputPresenter};
use bom_enrich::shared::error::ExitCode;
use bom_enrich::shared::Result;
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

async fn run() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Load configuration (explicit path, or auto-discovery in the cwd)
    let config = match args.config.as_deref() {
        Some(path) => config::load_config_from_path(Path::new(path))?,
        None => config::discover_config(Path::new("."))?.unwrap_or_default(),
    };

    let github_token = config
        .github_token
        .clone()
        .or_else(|| std::env::var("GITHUB_TOKEN").ok());

    let overrides_path = args
        .overrides
        .clone()
        .or_else(|| config.overrides_path.clone())
        .map(PathBuf::from);

    let endpoints = config.endpoints.unwrap_or_default();
    let defaults = RegistryEndpoints::default();
    let registry_endpoints = RegistryEndpoints {
        npm_base: endpoints.npm.unwrap_or(defaults.npm_base),
        pypi_base: endpoints.pypi.unwrap_or(defaults.pypi_base),
        maven_base: endpoints.maven.unwrap_or(defaults.maven_base),
    };
    let github_base = endpoints
        .github
        .unwrap_or_else(|| "https://api.github.com".to_string());
    let eol_base = endpoints
        .eol
        .unwrap_or_else(|| "https://endoflife.date".to_string());
    let osv_base = endpoints
        .osv
        .unwrap_or_else(|| "https://api.osv.dev".to_string());

    // Read the input document
    let reader = BomFileReader::new();
    let bom = reader.read_bom(Path::new(&args.input))?;

    // Create adapters (Dependency Injection)
    let registry_gateway = CachingRegistryGateway::new(RegistryClient::new(registry_endpoints)?);
    let repository_signal =
        CachingRepositorySignal::new(GitHubClient::new(github_base, github_token)?);
    let vulnerability_signal = OsvClient::new(osv_base)?;
    let lifecycle_registry = EolClient::new(eol_base)?;
    let override_source = FileOverrideSource::new(overrides_path);
    let progress_reporter = StderrProgressReporter::new();

    // Create use case with injected dependencies
    let use_case = EnrichComponentsUseCase::new(
        registry_gateway,
        repository_signal,
        vulnerability_signal,
        lifecycle_registry,
        override_source,
        progress_reporter,
    );

    // Execute; enrichment itself never fails, only I/O around it can
    let response = use_case.execute(EnrichRequest::new(bom)).await;

    let formatted_output = serde_json::to_string_pretty(&response.bom)?;

    // Present output
    let presenter: Box<dyn OutputPresenter> = if let Some(output_path) = args.output {
        Box::new(FileSystemWriter::new(PathBuf::from(output_path)))
    } else {
        Box::new(StdoutPresenter::new())
    };

    presenter.present(&formatted_output)?;

    Ok(())
}
