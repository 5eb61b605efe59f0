use masto_to_bsky::{
    adapters::cli::{self, HANDLES_FILE, HANDLES_USAGE},
    engine::handles,
};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")).init();

    let config = cli::parse_config_from_cli_args(HANDLES_USAGE, HANDLES_FILE);

    if let Err(e) = handles::run(&config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    println!("CSV file created successfully.");
}
