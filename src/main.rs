use clap::Parser;
use log::{error, info};
use simple_logger::init_with_level;

use codons2peptide::{app, Args};

fn main() {
    let args = Args::parse();

    init_with_level(args.level).unwrap_or_else(|e| panic!("{}", e));
    info!("Starting codons2peptide with args: {}", args);

    if let Err(e) = app::run(&args) {
        error!("{}", app::describe(&e));
        std::process::exit(1);
    }
}
