use attribute_tracker::{
    app::App, engine::Tracker, logging, settings::Settings, storage::JsonFileStore,
};

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let (settings, settings_error) = Settings::load();
    let data_dir = settings.data_dir()?;
    if let Err(e) = logging::init(data_dir.clone(), settings.debug_mode) {
        eprintln!("Failed to initialize logging: {}", e);
    }
    if let Some(e) = settings_error {
        log::warn!("Using default settings: {}", e);
    }
    log::info!("Attribute tracker start: {}", chrono::Local::now());

    let catalog = settings.catalog()?;
    let store = JsonFileStore::new(&data_dir, &settings.storage_key);
    let tracker = Tracker::load(catalog, store);

    let mut app = App::new(tracker, settings);
    app.run().await
}
