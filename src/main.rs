use anyhow::Result;
use cinelist::config::Config;
use cinelist::{logger, ui};

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::args().any(|arg| arg == "--generate-config") {
        let path = Config::get_default_config_path()?;
        Config::generate_default_config(&path)?;
        return Ok(());
    }

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Error: {:#}", e);
            eprintln!("\n💡 Fix the configuration file, remove it to use the defaults,");
            eprintln!("   or run `cinelist --generate-config` to write a fresh one.");
            if let Ok(path) = Config::get_default_config_path() {
                eprintln!("   Default location: {}", path.display());
            }
            return Ok(());
        }
    };

    if let Err(e) = logger::init(&config.logging) {
        eprintln!("⚠️  Logging disabled: {:#}", e);
    }

    log::info!("Starting cinelist against {}", config.api.base_url);

    // Run the TUI application
    ui::run_app(config).await?;

    Ok(())
}
