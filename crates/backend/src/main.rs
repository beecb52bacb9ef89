pub mod shared;

fn main() -> anyhow::Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    // Создаем директорию для логов
    let log_dir = std::path::Path::new("target").join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file_path = log_dir.join("backend.log");
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false),
        )
        .init();

    let config = shared::config::load_config()?;
    let overrides_path = shared::config::get_overrides_path(&config)?;
    let store = if overrides_path.exists() {
        tracing::info!("Loading overrides from: {}", overrides_path.display());
        shared::metadata::OverrideStore::load(&overrides_path)?
    } else {
        tracing::warn!(
            "Override file not found at: {}; resolving without deployment overrides",
            overrides_path.display()
        );
        shared::metadata::OverrideStore::empty()
    };

    let registry = &*shared::presentation::descriptors::ADMIN_PRESENTATIONS;
    let pipeline = shared::metadata::MetadataPipeline::with_basic();
    let config_key = config.overrides.config_key.as_deref();

    let entity_indexes = registry.entity_indexes();
    for entity_index in &entity_indexes {
        let metadata = pipeline.resolve(entity_index, config_key, registry, &store)?;
        let screen = serde_json::json!({
            "entity": entity_index,
            "tabs": contracts::shared::presentation::sorted_tabs(&metadata),
        });
        println!("{}", serde_json::to_string_pretty(&screen)?);
    }

    tracing::info!("Resolved metadata for {} entities", entity_indexes.len());
    Ok(())
}
