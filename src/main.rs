use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Parser;
use miette::{Context, IntoDiagnostic};

use dispersion::{
    CanvasSize, DataSource, GroupSummary, RenderOptions, load_csv_file, rasterize_png,
    render_document,
};

#[derive(Parser, Debug)]
#[command(
    name = "dispersion",
    about = "Draw golf shot dispersion ellipses over a field diagram",
    version
)]
struct Cli {
    /// Shot data CSV with `carry`, `offline` and optional `club` columns.
    /// The built-in sample groups are drawn when omitted.
    input: Option<PathBuf>,

    /// Canvas width in pixels
    #[arg(long, default_value_t = 600.0)]
    width: f64,

    /// Canvas height in pixels
    #[arg(long, default_value_t = 900.0)]
    height: f64,

    /// Write the SVG here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Also rasterize the diagram to this PNG file
    #[arg(long)]
    png: Option<PathBuf>,

    /// Draw the sample groups if the input cannot be loaded
    #[arg(long)]
    fallback_to_sample: bool,

    /// Print per-group statistics to stderr
    #[arg(long)]
    summary: bool,

    /// Debug logging (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let source = match &cli.input {
        Some(path) => load_source(path, cli.fallback_to_sample)?,
        None => DataSource::Samples,
    };
    if source.is_sample() {
        tracing::info!("drawing the built-in sample groups");
    }

    let options = RenderOptions {
        canvas: CanvasSize::new(cli.width, cli.height),
        ..RenderOptions::default()
    };
    let (svg, report) = render_document(&source, &options)?;
    for skipped in report.skipped {
        eprintln!("{:?}", miette::Report::new(skipped));
    }

    if cli.summary {
        eprintln!("{}", GroupSummary::header());
        for group in source.groups().iter() {
            eprintln!("{}", GroupSummary::new(&group.label, &group.points));
        }
    }

    match &cli.output {
        Some(path) => fs::write(path, &svg)
            .into_diagnostic()
            .wrap_err_with(|| format!("writing {}", path.display()))?,
        None => std::io::stdout()
            .write_all(svg.as_bytes())
            .into_diagnostic()?,
    }

    if let Some(path) = &cli.png {
        let png = rasterize_png(&svg)?;
        fs::write(path, png)
            .into_diagnostic()
            .wrap_err_with(|| format!("writing {}", path.display()))?;
    }

    Ok(())
}

/// Load shot data, reporting dropped rows, optionally falling back to samples
fn load_source(path: &Path, fallback_to_sample: bool) -> miette::Result<DataSource> {
    match load_csv_file(path) {
        Ok(mut ingested) => {
            eprintln!("{ingested}");
            for diagnostic in std::mem::take(&mut ingested.diagnostics) {
                eprintln!("{:?}", miette::Report::new(diagnostic));
            }
            Ok(ingested.into_source())
        }
        Err(err) if fallback_to_sample => {
            eprintln!("{:?}", miette::Report::new(err));
            eprintln!("falling back to sample data");
            Ok(DataSource::Samples)
        }
        Err(err) => Err(err.into()),
    }
}
