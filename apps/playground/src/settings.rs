use anyhow::{Context, Result};
use rune_canvas::CanvasConfig;
use url::Url;

const DEFAULT_RUNES_URL: &str =
    "https://ddragon.leagueoflegends.com/cdn/12.12.1/data/en_US/runesReforged.json";
const DEFAULT_ICON_BASE: &str = "https://ddragon.leagueoflegends.com/cdn/img/";
const DEFAULT_FONT: &str = "data/consola.ttf";

/// Host settings, read from the environment (and `.env`, if present).
#[derive(Clone, Debug)]
pub struct Settings {
    /// Where to fetch `runesReforged.json` from.
    pub runes_url: String,
    /// Icon paths in the rune data are relative to this.
    pub icon_base: Url,
    /// TTF font used for every text command. Falls back to macroquad's font.
    pub font_path: String,
    /// Optional JSON file overriding `CanvasConfig` defaults.
    pub config_path: Option<String>,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        let runes_url = std::env::var("RUNES_URL").unwrap_or_else(|_| DEFAULT_RUNES_URL.to_string());
        let icon_base = std::env::var("RUNES_ICON_BASE").unwrap_or_else(|_| DEFAULT_ICON_BASE.to_string());
        let icon_base = Url::parse(&icon_base)
            .with_context(|| format!("RUNES_ICON_BASE is not a valid URL: {icon_base}"))?;

        Ok(Self {
            runes_url,
            icon_base,
            font_path: std::env::var("RUNES_FONT").unwrap_or_else(|_| DEFAULT_FONT.to_string()),
            config_path: std::env::var("RUNES_CONFIG").ok(),
        })
    }

    /// Canvas config from `config_path`, or the defaults.
    pub fn canvas_config(&self) -> Result<CanvasConfig> {
        let Some(path) = &self.config_path else {
            return Ok(CanvasConfig::default());
        };

        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read canvas config {path}"))?;
        let config = CanvasConfig::from_json(&json)
            .with_context(|| format!("Invalid canvas config {path}"))?;
        tracing::info!(path = %path, "Loaded canvas config");
        Ok(config)
    }
}
