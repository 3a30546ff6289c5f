use clap::Parser;
use oq::{cli::Args, logging, query::run_query};

fn main() {
    logging::init();
    // try_parse instead of parse: a missing prompt must exit 1, clap's default is 2
    let args = Args::try_parse().unwrap_or_else(|e| {
        let _ = e.print();
        std::process::exit(1);
    });
    run_query(&args.prompt).unwrap_or_else(|e| {
        eprintln!("{}", e);
        std::process::exit(1);
    });
}
