mod cli;

use clap::Parser;
use cloudip::{Client, ClientBuilder, OutputMode, Pipeline, Settings};
use log::{error, info};
use std::process::ExitCode;

/*-------------------------------------------------------------------------------------------------
  Main CLI Function
-------------------------------------------------------------------------------------------------*/

fn main() -> ExitCode {
    let args = cli::Args::parse();

    stderrlog::new()
        .module(module_path!())
        .verbosity(args.verbosity())
        .init()
        .ok();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            error!("{error}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &cli::Args) -> cloudip::Result<()> {
    let settings = Settings::load(args.config.as_deref())?;
    info!("Request timeout {} seconds", settings.timeout);

    let client: Client = ClientBuilder::from_settings(&settings).build();
    let pipeline = Pipeline::new(client, args.vendor, args.family_filter());

    let mode = args.output_mode();
    let report = pipeline.run(&mode)?;

    if args.summary {
        let table = cli::output::summary_table(&report);
        // Keep stdout a plain prefix list when printing to the console
        match mode {
            OutputMode::Console => eprintln!("{table}"),
            OutputMode::CsvFile(_) => println!("{table}"),
        }
    }

    Ok(())
}
