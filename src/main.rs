use anyhow::{Context, Result};
use clap::Parser;
use mini_ini::cli::{self, Cli, RunOptions};
use std::io::Write;

fn main() -> Result<()> {
    let args = Cli::parse();
    // CLI --log-level takes precedence over RUST_LOG
    cli::init_logging(args.log_level);

    log::info!("Starting mini-ini {}", mini_ini::VERSION);

    let options = RunOptions::from(args);
    let output = cli::run(&options)?;

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(output.text.as_bytes())
        .context("Failed to write output")?;
    stdout.flush().context("Failed to flush output")?;

    let code = output.exit_code(options.strict);
    if code != 0 {
        eprintln!(
            "mini-ini: {} unrecognized line(s)",
            output.report.unrecognized_count()
        );
        // Nothing left to clean up, so exiting directly is fine
        std::process::exit(code);
    }
    Ok(())
}
