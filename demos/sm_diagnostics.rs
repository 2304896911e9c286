//! Parses stepchart files and renders every warning with `ariadne`.
//!
//! ```sh
//! RUST_LOG=info cargo run --example sm_diagnostics -- tests/files/legacy_freeze.sm
//! ```

use std::path::PathBuf;

use clap::Parser;
use stepchart_rs::sm::prelude::*;

#[derive(Debug, Parser)]
#[command(about = "Report the warnings of stepchart files")]
struct Args {
    /// Stepchart files to parse.
    #[arg(required = true)]
    files: Vec<PathBuf>,
    /// Keep `//` sequences inside values instead of treating them as comments.
    #[arg(long)]
    keep_comments: bool,
    /// Keep the last of duplicated tags instead of the first.
    #[arg(long)]
    prefer_newer: bool,
    /// Exit with failure if any file has warnings.
    #[arg(long)]
    strict: bool,
}

fn parse(source: &str, args: &Args) -> Result<SmOutput, SmError> {
    let config = default_config().with_comment_skipping(!args.keep_comments);
    if args.prefer_newer {
        parse_sm_with_config(source, config.with_prompter(AlwaysWarnAndUseNewer))
    } else {
        parse_sm_with_config(source, config)
    }
}

fn main() -> std::process::ExitCode {
    env_logger::init();
    let args = Args::parse();

    let mut failed = false;
    for path in &args.files {
        let name = path.display().to_string();
        let source = match std::fs::read_to_string(path) {
            Ok(source) => source,
            Err(err) => {
                log::error!("failed to read {name}: {err}");
                failed = true;
                continue;
            }
        };
        let output = match parse(&source, &args) {
            Ok(output) => output,
            Err(err) => {
                log::error!("{name}: {err}");
                failed = true;
                continue;
            }
        };

        let song = &output.song;
        println!(
            "{name}: {} / {} ({} charts, {} warnings)",
            song.title,
            song.artist,
            song.steps.len(),
            output.warnings.len()
        );
        for steps in &song.steps {
            println!(
                "  {:?} {:?} {} ({} notes)",
                steps.steps_type,
                steps.difficulty,
                steps.meter,
                steps.note_data.notes().count()
            );
        }
        emit_sm_warnings(&name, &source, &output.warnings);
        failed |= args.strict && !output.warnings.is_empty();
    }

    if failed {
        std::process::ExitCode::FAILURE
    } else {
        std::process::ExitCode::SUCCESS
    }
}
