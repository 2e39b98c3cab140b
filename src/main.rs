use anyhow::Context;
use clap::Parser;

use slurry_wizard::adapters::{FileSource, HttpSource};
use slurry_wizard::report;
use slurry_wizard::utils::{logger, validation::Validate};
use slurry_wizard::{
    CliConfig, FarmFile, RainfallLimits, RainfallSource, RainfallTable,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting slurry-wizard");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let snapshot = FarmFile::load_from_file(&config.input)
        .with_context(|| format!("Failed to load farm file {}", config.input))?
        .into_snapshot();

    let table = load_rainfall_table(&config).await;
    let limits = load_rainfall_limits(&config).await;

    let result = slurry_wizard::compute(&snapshot, &table, &limits);
    tracing::info!(
        "Calculated {} months of storage, nitrogen loading {:.1} kg/ha",
        result.monthly.storage_months,
        result.compliance.nitrogen_loading_kg_ha
    );

    let rendered = match config.format.as_str() {
        "json" => report::render_json(&result)?,
        _ => report::render_text(&snapshot, &result),
    };

    match &config.output {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("Failed to write report to {}", path))?;
            println!("✅ Report saved to: {}", path);
        }
        None => println!("{}", rendered),
    }

    Ok(())
}

/// Resolves the rainfall table from whichever source is configured,
/// falling back to the built-in profile when none is given or the
/// source fails. A missing table is a caveat, not a fatal error.
async fn load_rainfall_table(config: &CliConfig) -> RainfallTable {
    let source: Option<Box<dyn RainfallSource>> = if let Some(url) = &config.rainfall_url {
        Some(Box::new(HttpSource::new(url.clone())))
    } else {
        config
            .rainfall_data
            .as_ref()
            .map(|path| Box::new(FileSource::new(path)) as Box<dyn RainfallSource>)
    };

    let Some(source) = source else {
        tracing::warn!("No rainfall data configured; using built-in default profile");
        return RainfallTable::builtin();
    };

    match fetch_table(source.as_ref()).await {
        Ok(table) => {
            tracing::info!("Loaded {} rainfall rows from {}", table.len(), source.describe());
            table
        }
        Err(e) => {
            tracing::warn!(
                "Could not load rainfall data from {}: {}; using built-in default profile",
                source.describe(),
                e
            );
            RainfallTable::builtin()
        }
    }
}

async fn fetch_table(source: &dyn RainfallSource) -> slurry_wizard::Result<RainfallTable> {
    let raw = source.fetch().await?;
    RainfallTable::from_csv(&raw)
}

async fn load_rainfall_limits(config: &CliConfig) -> RainfallLimits {
    let Some(path) = &config.settings else {
        return RainfallLimits::default();
    };

    let source = FileSource::new(path);
    let limits = match source.fetch().await {
        Ok(raw) => RainfallLimits::from_csv(&raw),
        Err(e) => Err(e),
    };

    match limits {
        Ok(limits) => limits,
        Err(e) => {
            tracing::warn!(
                "Could not load settings from {}: {}; using default rainfall limits",
                path,
                e
            );
            RainfallLimits::default()
        }
    }
}
