//! generate-docs: render the REST API catalogue into one page per resource.
//!
//! The catalogue is static data compiled into the binary. Each descriptor is
//! rendered through a template and written to `<endpointPath>.<ext>`:
//!
//! - `generate-docs -o site/api`: all pages, built-in HTML template
//! - `generate-docs -o out -t page.md.tera --only employees`: custom template
//! - `generate-docs --print holidays`: one page to stdout

mod catalogue;
mod generate;
mod model;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "generate-docs",
    about = "Generate HTML documentation pages for the REST API catalogue"
)]
struct Cli {
    /// Output directory, created if missing
    #[arg(short = 'o', long = "out", default_value = ".")]
    output: PathBuf,

    /// Output format: html (default), json
    #[arg(short = 'f', long, default_value = "html")]
    format: String,

    /// Tera template file for the html format. The output extension is taken
    /// from its name without a trailing .tera (page.md.tera writes .md files).
    #[arg(short = 't', long)]
    template: Option<PathBuf>,

    /// Only render these endpoint paths. Can be specified multiple times.
    #[arg(long, value_name = "ENDPOINT_PATH")]
    only: Vec<String>,

    /// Render a single endpoint path to stdout instead of writing files
    #[arg(long, value_name = "ENDPOINT_PATH", conflicts_with_all = ["only", "prune"])]
    print: Option<String>,

    /// List the catalogue and exit
    #[arg(long)]
    list: bool,

    /// Remove pages in the output directory that no catalogue entry produces
    #[arg(long)]
    prune: bool,
}

fn main() -> Result<ExitCode> {
    init_tracing();
    let cli = Cli::parse();

    // Malformed catalogue data is fatal before anything is rendered.
    let catalogue = catalogue::Catalogue::build().context("invalid API catalogue")?;

    if cli.list {
        list_mode(&catalogue);
        return Ok(ExitCode::SUCCESS);
    }

    let renderer = render::create_renderer(&cli.format, cli.template.as_deref())?;

    if let Some(ref endpoint_path) = cli.print {
        return print_mode(&catalogue, renderer.as_ref(), endpoint_path);
    }

    file_mode(&cli, &catalogue, renderer.as_ref())
}

fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// list mode: one line per descriptor, followed by its endpoints.
fn list_mode(catalogue: &catalogue::Catalogue) {
    for d in catalogue.iter() {
        println!("{}\t{}", d.endpoint_path, d.page);
        for e in &d.endpoints {
            println!("  {:<6} {}", e.method, e.path);
        }
    }
}

/// print mode: render one descriptor to stdout.
fn print_mode(
    catalogue: &catalogue::Catalogue,
    renderer: &dyn render::Renderer,
    endpoint_path: &str,
) -> Result<ExitCode> {
    let descriptor = catalogue
        .get(endpoint_path)
        .ok_or_else(|| catalogue::CatalogueError::UnknownEntry(endpoint_path.to_string()))?;
    let page = renderer
        .render(descriptor)
        .map_err(|e| anyhow::anyhow!(render::error_chain(&e)))
        .with_context(|| format!("failed to render {}", endpoint_path))?;
    print!("{}", page);
    Ok(ExitCode::SUCCESS)
}

/// file mode: render every selected descriptor into the output directory.
fn file_mode(
    cli: &Cli,
    catalogue: &catalogue::Catalogue,
    renderer: &dyn render::Renderer,
) -> Result<ExitCode> {
    let output_dir = cli.output.as_path();
    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output directory: {}", output_dir.display()))?;

    let selected: Vec<_> = if cli.only.is_empty() {
        catalogue.iter().collect()
    } else {
        catalogue.select(&cli.only)?
    };
    tracing::info!(
        selected = selected.len(),
        catalogue = catalogue.len(),
        format = %cli.format,
        "rendering pages"
    );

    let report = generate::generate(selected, renderer, output_dir);

    if cli.prune {
        generate::prune(catalogue, renderer.file_extension(), output_dir)?;
    }

    Ok(summarize(&report, output_dir))
}

/// Print the batch outcome and map it to an exit status.
fn summarize(report: &generate::Report, output_dir: &Path) -> ExitCode {
    if report.is_success() {
        println!(
            "generated {} pages in {}",
            report.written.len(),
            output_dir.display()
        );
        return ExitCode::SUCCESS;
    }

    for failure in &report.failures {
        eprintln!(
            "error: {}: {}: {}",
            failure.endpoint_path,
            failure.error.kind(),
            failure.error
        );
    }
    eprintln!(
        "generated {} pages in {}, {} failed",
        report.written.len(),
        output_dir.display(),
        report.failures.len()
    );
    ExitCode::FAILURE
}
