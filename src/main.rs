use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use cableprofile::config::{ProfileDocument, ProfileSettings};
use cableprofile::export::{export_csv, write_csv};
use cableprofile::SegmentTable;
use clap::Parser;
use tracing::info;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Sample a prestressing cable profile and write it as x,y CSV
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    /// TOML document describing the cable; the built-in example girder when omitted
    document: Option<PathBuf>,

    /// Output CSV path; stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Horizontal sampling step, overriding the document
    #[arg(long)]
    interval: Option<f64>,

    /// Mirror the cable about its last control point
    #[arg(long, default_value_t = false)]
    symmetric: bool,

    /// Print the document being evaluated as TOML instead of sampling it
    #[arg(long, default_value_t = false)]
    print_document: bool,
}

fn init_logger() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))),
        )
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logger();
    let args = CliArgs::parse();

    let mut doc = match &args.document {
        Some(path) => ProfileDocument::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => ProfileDocument::from_table(&SegmentTable::default(), ProfileSettings::default()),
    };
    if let Some(interval) = args.interval {
        doc.settings.interval = interval;
    }
    doc.settings.symmetric |= args.symmetric;
    doc.settings.validate()?;

    if args.print_document {
        print!("{}", doc.to_toml_string()?);
        return Ok(());
    }

    let table = doc.table();
    let points = table.profile(doc.settings.interval, doc.settings.symmetric)?;
    info!(
        rows = table.len(),
        points = points.len(),
        symmetric = doc.settings.symmetric,
        "sampled cable"
    );

    match &args.output {
        Some(path) => {
            export_csv(path, &points).with_context(|| format!("writing {}", path.display()))?;
            info!(path = %path.display(), "wrote profile");
        }
        None => {
            let stdout = std::io::stdout();
            let mut lock = stdout.lock();
            write_csv(&mut lock, &points)?;
            lock.flush()?;
        }
    }
    Ok(())
}
