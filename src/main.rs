// src/main.rs
#![allow(clippy::multiple_crate_versions)]

use std::{io, process::ExitCode};

use clap::Parser;
use readability::{
    app,
    cli::Args,
    config::{Config, OutputFormat},
    logging, presentation,
    prompt::TerminalInteraction,
};
use readability_infra::FsDocumentSource;

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.logging.level_filter());

    let mut stdout = io::stdout().lock();
    let (format, result) = match Config::try_from(args) {
        Ok(config) => {
            let interaction = TerminalInteraction::stdio();
            let result = app::run(&config, &FsDocumentSource::new(), &interaction, &mut stdout);
            (config.format, result)
        }
        Err(err) => (OutputFormat::default(), Err(err.into())),
    };

    let status = match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::debug!("run failed: {err:?}");
            eprintln!("{}", presentation::describe_error(&err));
            ExitCode::FAILURE
        }
    };

    // Printed on every path, success or not.
    presentation::farewell(format, &mut stdout);
    status
}
