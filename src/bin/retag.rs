//! retag: command-line front end.
//!
//! Walks a folder (recursively), prints every proposed artist/title change and,
//! with `--write`, saves them. Dry run by default.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::atomic::AtomicBool;

use anyhow::{Context, Result};
use clap::Parser;

use retagger::core::{self, Id3Store, RetagConfig, ScanEvent};

#[derive(Parser, Debug)]
#[command(
    name = "retag",
    version,
    about = "Convert Artist 'Main/Feat' -> Artist=Main, Title+='(ft. Feat...)', excluding remixers in title",
    long_about = None
)]
struct Cli {
    /// Folder to scan (recursive)
    root: PathBuf,

    /// Artist delimiter
    #[arg(long, default_value = "/")]
    delimiter: String,

    /// Actually write changes (otherwise dry-run)
    #[arg(long)]
    write: bool,

    /// Set albumartist to main artist
    #[arg(long = "set-albumartist")]
    set_albumartist: bool,

    /// Enable verbose logging (per-file decisions, remixer exclusions)
    #[arg(short = 'd', long)]
    debug: bool,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if !cli.root.exists() {
        eprintln!("Path not found: {}", cli.root.display());
        return Ok(ExitCode::FAILURE);
    }

    let config = RetagConfig::new(cli.delimiter, cli.write, cli.set_albumartist);
    config.validate().context("invalid --delimiter")?;

    let paths = core::scan_mp3s(&cli.root, true)
        .with_context(|| format!("failed to scan {}", cli.root.display()))?;
    if paths.is_empty() {
        println!("No mp3 files found.");
        return Ok(ExitCode::SUCCESS);
    }

    // Nothing sets this; the CLI always runs to completion.
    let stop = AtomicBool::new(false);
    let summary = core::run_batch(&Id3Store, &paths, &config, &stop, print_event);

    println!(
        "\nDone. Files matched/changed: {} (write={})",
        summary.changed,
        if config.write { "yes" } else { "no" }
    );
    Ok(ExitCode::SUCCESS)
}

fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn print_event(event: ScanEvent) {
    match event {
        ScanEvent::Changed(r) => {
            println!("\n{}", r.path.display());
            println!("  Artist: {}  ->  {}", r.old_artist, r.new_artist);
            println!("  Title : {}  ->  {}", r.old_title, r.new_title);
        }
        ScanEvent::Skipped(r) => {
            println!(
                "[skip] {} (couldn't read tags: {})",
                r.path.display(),
                r.error.unwrap_or_default()
            );
        }
        ScanEvent::Failed { path, error } => {
            eprintln!("[error] {}: {error}", path.display());
        }
        ScanEvent::Fatal(msg) => eprintln!("{msg}"),
        ScanEvent::Started { .. } | ScanEvent::Finished(_) => {}
    }
}
