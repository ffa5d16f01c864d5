use refuel_report::args::Args;
use refuel_report::catalog::list_fuel_types;
use refuel_report::engine::build_report;
use refuel_report::record;
use std::process;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}

fn main() {
    setup_logging();
    let args = Args::parse();

    let text = match args.load_input_text() {
        Ok(text) => text,
        Err(err) => {
            eprintln!("an input file or its path is specified empty or incorrect: {}", err);
            process::exit(1);
        }
    };

    let records = match record::parse(&text) {
        Ok(records) => records,
        Err(err) => {
            eprintln!("failed to process input file: {}", err);
            process::exit(1);
        }
    };

    if args.list_types {
        for fuel_type in list_fuel_types(&records) {
            println!("{}", fuel_type);
        }
        return;
    }

    let report = build_report(&records, &args.fuel_type);
    let output = match report.to_csv() {
        Ok(output) => output,
        Err(err) => {
            eprintln!("failed to generate output report: {}", err);
            process::exit(1);
        }
    };
    print!("{}", output);
}
