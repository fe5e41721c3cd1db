mod app;
mod config;
mod data;
mod export;
mod state;
mod ui;

use anyhow::Result;
use log::{error, info};

use app::PriceScoutApp;
use config::Config;
use data::model::Catalog;
use state::AppState;

fn main() -> Result<()> {
    // Default to info so per-file progress is visible without RUST_LOG.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_args(std::env::args().skip(1))?;

    let catalog = match data::loader::load_dir(&config.price_dir) {
        Ok(catalog) => catalog,
        Err(e) => {
            error!("failed to load price lists: {e:#}");
            Catalog::default()
        }
    };
    info!(
        "loaded {} records from {}",
        catalog.len(),
        config.price_dir.display()
    );

    let mut app = PriceScoutApp::new(AppState::new(catalog));
    app.run()?;

    match export::export_html(&app.state.catalog, &config.output_path) {
        Ok(true) => println!("Catalog exported to {}", config.output_path.display()),
        Ok(false) => println!("Nothing to export."),
        Err(e) => error!("export failed: {e:#}"),
    }
    Ok(())
}
