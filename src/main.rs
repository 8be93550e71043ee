use clap::Parser;
use log::info;
use outline_text::cli::Cli;
use outline_text::run;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    info!("outline-text starting");

    if let Err(e) = run(cli) {
        log::error!("Application error: {}", e);
        std::process::exit(1);
    }
}
