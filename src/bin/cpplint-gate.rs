// src/bin/cpplint-gate.rs
//! cpplint-gate CLI binary.

#![deny(missing_docs)]

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use cpplint_gate::assemble::RunMode;
use cpplint_gate::changes::GitChanges;
use cpplint_gate::cli;
use cpplint_gate::config::Config;
use cpplint_gate::dispatch::Dispatcher;
use cpplint_gate::error::GateResult;
use cpplint_gate::exec::SystemExecutor;
use cpplint_gate::report::Reporter;

fn main() -> GateResult<ExitCode> {
    let args = cli::Cli::parse();
    let report = Reporter::new(args.verbose, args.quiet);
    let root: PathBuf = args.root.unwrap_or_else(|| PathBuf::from("."));

    match args.command {
        // init: writes the default configuration into the project root.
        Some(cli::Commands::Init { force }) => {
            let path_written = Config::write_default_config_at(&root, force)?;
            if !args.quiet {
                println!(
                    "{} {} at {}",
                    if force { "Overwrote" } else { "Initialized" },
                    cpplint_gate::config::CONFIG_FILE,
                    path_written.display()
                );
            }
            Ok(ExitCode::SUCCESS)
        }
        None => {
            let cfg = Config::load_or_default(&root, args.config.as_deref())?;
            report.debug(format!("project root: {}", root.display()));

            let executor = SystemExecutor::new(report.level() > 0);
            let changes = GitChanges::new(&root, &executor);
            let outcome = Dispatcher::new(&root, &cfg, &executor, report)
                .run(RunMode::from_flag(args.only_changed), &changes)?;

            let code = outcome.exit_code();
            Ok(match u8::try_from(code) {
                Ok(c) => ExitCode::from(c),
                Err(_) => ExitCode::FAILURE,
            })
        }
    }
}
