use flavor_sim::config::AppConfig;
use flavor_sim::{CatalogService, Simulator};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    use env_logger::Builder;
    use log::LevelFilter;

    Builder::new()
        .filter_level(LevelFilter::Info)
        .filter_module("reqwest", LevelFilter::Warn)
        .filter_module("hyper", LevelFilter::Warn)
        .parse_default_env()
        .init();

    let config = AppConfig::load()?;
    let service = CatalogService::from_config(&config.catalog)?;
    log::info!("Catalog endpoint: {}", service.endpoint());

    let catalog = match service.fetch_catalog(config.catalog.preload_logos).await {
        Ok(catalog) => catalog,
        Err(err) if err.is_retryable() => {
            log::error!("{}", err);
            anyhow::bail!("catalog unavailable, please retry");
        }
        Err(err) => return Err(err.into()),
    };

    let simulator = Simulator::new(catalog);
    for instance in simulator.catalog_view() {
        log::info!(
            "{} ({}): {} flavors{}",
            instance.name,
            instance.id,
            instance.flavors.len(),
            if instance.coming_soon { ", coming soon" } else { "" }
        );
    }

    println!("{}", serde_json::to_string_pretty(&simulator.snapshot())?);

    Ok(())
}
