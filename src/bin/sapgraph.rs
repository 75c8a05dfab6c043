use std::{env, io, process};

use sapgraph::{
    cli::{Dataset, handle_command},
    client::CommandLineConfig,
};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        println!("{}", CommandLineConfig::help());
        return;
    }
    let arg_refs: Vec<&str> = args.iter().map(|s| s.as_str()).collect();
    let config = match CommandLineConfig::from_args(&arg_refs) {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(2);
        }
    };

    let dataset = match Dataset::open(&config) {
        Ok(dataset) => dataset,
        Err(err) => {
            eprintln!("{err}");
            process::exit(2);
        }
    };

    match handle_command(&dataset, &config.command, &config.args) {
        Ok(output) => println!("{output}"),
        Err(err) => {
            eprintln!("command failed: {err}");
            process::exit(1);
        }
    }
}
