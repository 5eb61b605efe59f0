use masto_to_bsky::{
    adapters::cli::{self, OUTPUT_FILE, USAGE},
    engine::runner,
};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")).init();

    let config = cli::parse_config_from_cli_args(USAGE, OUTPUT_FILE);

    if let Err(e) = runner::run(&config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    println!(
        "Conversion complete. The updated addresses are saved in '{}'.",
        config.output_path.display()
    );
}
