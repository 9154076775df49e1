use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;

use vgen::cli::args::CliArgs;
use vgen::cli::driver;
use vgen::ir::HelperRegistry;

fn main() -> Result<()> {
    // Initialize tracing if VGEN_LOG or RUST_LOG is set.
    // Supports VGEN_LOG_FORMAT=tree|json|text (see src/tracing_config.rs).
    vgen::tracing_config::init_tracing();

    let args = CliArgs::parse();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if args.list_helpers {
        out.write_all(driver::helper_table(&HelperRegistry::new()).as_bytes())
            .context("failed to write helper table")?;
        return Ok(());
    }

    let cwd = std::env::current_dir().context("failed to resolve current directory")?;
    let units = driver::run(&args, &cwd)?;

    let with_headers = units.len() > 1;
    for unit in &units {
        if unit.output.is_some() {
            continue;
        }
        if with_headers {
            writeln!(out, "// {}", unit.input.display()).context("failed to write output")?;
        }
        writeln!(out, "{}", unit.code).context("failed to write output")?;
    }
    Ok(())
}
