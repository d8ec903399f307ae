// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Presto CLI entry point.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use presto::error::ExitCode;
use presto::{Cli, Plan, SystemExecutor, discovery, env, run_plan};

fn init_logging() {
    let filter = env::log_filter()
        .and_then(|f| EnvFilter::try_new(f).ok())
        .unwrap_or_else(|| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(()) => ExitCode::Success as i32,
        Err(e) => {
            eprintln!("presto: {}", e);
            match e.downcast_ref::<presto::Error>() {
                Some(err) => err.exit_code(),
                None => ExitCode::InternalError as i32,
            }
        }
    };

    std::process::exit(exit_code);
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let options = cli.options();

    println!("args: {}\n", serde_json::to_string(&options)?);

    let cwd = std::env::current_dir()?;
    let config = discovery::load_config(cli.config.as_deref(), &cwd)?;
    let plan = Plan::new(&options, &config);

    if cli.dry_run {
        for step in plan.steps() {
            println!("+ {step}");
        }
        return Ok(());
    }

    run_plan(&plan, &mut SystemExecutor)?;
    Ok(())
}
