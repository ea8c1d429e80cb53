use anyhow::Context;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use urania::chart::ChartSettings;
use urania::geocoding::{Gazetteer, NamedLocation};

/// Relative locations tried for `configs/chart.toml` when no path is given.
const DEFAULT_PATHS: [&str; 2] = ["configs/chart.toml", "../../configs/chart.toml"];

/// Settings handed to the chart engine, plus the places the CLI can resolve by name.
#[derive(Debug, Clone, Default)]
pub struct ChartConfig {
    pub settings: ChartSettings,
    pub gazetteer: Gazetteer,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RootConfigToml {
    #[serde(default)]
    chart: Option<ChartSettings>,
    #[serde(default)]
    locations: Vec<NamedLocation>,
}

/// Read the config file text. An explicit path must exist; otherwise the
/// usual relative locations are tried and `None` means none was found.
pub fn read_chart_toml_text(path: Option<&Path>) -> anyhow::Result<Option<String>> {
    if let Some(path) = path {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Could not read chart config {}", path.display()))?;
        return Ok(Some(text));
    }
    for p in &DEFAULT_PATHS {
        if let Ok(c) = fs::read_to_string(p) {
            log::debug!("Loaded chart config from {}", p);
            return Ok(Some(c));
        }
    }
    Ok(None)
}

pub fn parse_chart_config(text: &str) -> anyhow::Result<ChartConfig> {
    let root: RootConfigToml =
        toml::from_str(text).map_err(|e| anyhow::anyhow!("Failed to parse chart.toml: {e}"))?;
    let settings = root.chart.unwrap_or_default();
    if settings.void_of_course.aspects.is_empty() {
        log::warn!("chart.void_of_course.aspects is empty; every Moon will be void of course");
    }
    Ok(ChartConfig {
        settings,
        gazetteer: Gazetteer::new(root.locations),
    })
}

/// Load the chart config, falling back to defaults when no file is found.
pub fn load_chart_config(path: Option<&Path>) -> anyhow::Result<ChartConfig> {
    match read_chart_toml_text(path)? {
        Some(text) => parse_chart_config(&text),
        None => {
            log::info!("No chart.toml found in {:?}; using default settings", DEFAULT_PATHS);
            Ok(ChartConfig::default())
        }
    }
}
