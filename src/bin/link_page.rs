use masto_to_bsky::{
    adapters::cli::{self, LINK_PAGE_FILE, LINK_PAGE_USAGE},
    engine::link_page,
};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")).init();

    let config = cli::parse_config_from_cli_args(LINK_PAGE_USAGE, LINK_PAGE_FILE);

    if let Err(e) = link_page::run(&config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    println!(
        "HTML page created successfully. Open '{}' to view the links.",
        config.output_path.display()
    );
}
