use gator::config::ConfigStore;
use gator::error::Result;
use tracing_subscriber::EnvFilter;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let store = ConfigStore::from_home()?;
    println!("Config file: {}", store.config_path().display());

    let config = store.read_config()?;
    println!("db_url: {}", config.db_url);
    println!("current_user_name: {}", config.current_user_name);

    Ok(())
}
