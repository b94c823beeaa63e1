use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat, Map};
use ledgrid_layout::{GridLayout, LayoutError, Preset};
use serde::{Deserialize, Deserializer, de::Error as _};
use tracing::{error, info};

const DEFAULT_CONFIG_PATH: &str = "config/default.toml";
const ENV_PREFIX: &str = "LEDGRID";

/// Everything the generator can be told, after all sources are merged.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub layout: LayoutSettings,
    #[serde(default)]
    pub output: OutputSettings,
}

/// Which layout to generate. Any override replaces the matching preset value.
#[derive(Debug, Clone, Deserialize)]
pub struct LayoutSettings {
    pub preset: String,
    #[serde(default, deserialize_with = "width")]
    pub width: Option<usize>,
    #[serde(default, deserialize_with = "sub_grid_height")]
    pub sub_grid_height: Option<usize>,
    #[serde(default, deserialize_with = "sub_grids")]
    pub sub_grids: Option<usize>,
    #[serde(default)]
    pub scale: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputSettings {
    #[serde(default)]
    pub pretty: bool,
}

impl LayoutSettings {
    /// Resolves the preset and applies overrides.
    pub fn to_layout(&self) -> Result<GridLayout, LayoutError> {
        let base = self.preset.parse::<Preset>()?.layout();
        GridLayout::new(
            self.width.unwrap_or(base.width()),
            self.sub_grid_height.unwrap_or(base.sub_grid_height()),
            self.sub_grids.unwrap_or(base.sub_grids()),
            self.scale.unwrap_or(base.scale()),
        )
    }
}

/// Largest integer an `f64` holds exactly.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Grid dimensions arrive as TOML integers or parsed environment strings. Config
/// would silently round a float, so anything that is not a positive whole number
/// is rejected here, naming the offending key.
fn dimension<'de, D>(deserializer: D, name: &str) -> Result<Option<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(value) = Option::<f64>::deserialize(deserializer)? else {
        return Ok(None);
    };
    if value.fract() != 0.0 || value < 1.0 || value > MAX_EXACT_INTEGER {
        return Err(D::Error::custom(format!(
            "layout.{} must be a positive integer, got {}",
            name, value
        )));
    }
    Ok(Some(value as usize))
}

fn width<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<usize>, D::Error> {
    dimension(deserializer, "width")
}

fn sub_grid_height<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<usize>, D::Error> {
    dimension(deserializer, "sub_grid_height")
}

fn sub_grids<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<usize>, D::Error> {
    dimension(deserializer, "sub_grids")
}

fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("layout.preset", Preset::default().name())?
        .set_default("output.pretty", false)
}

/// `LEDGRID_LAYOUT__PRESET` sets `layout.preset`. Reads the process environment
/// unless `vars` is given.
fn environment(vars: Option<Map<String, String>>) -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
        .source(vars)
}

/// Merges built-in defaults, the optional config file and `LEDGRID_*` variables.
pub fn load_config() -> Result<Config, ConfigError> {
    info!("Attempting to load configuration from {}", DEFAULT_CONFIG_PATH);

    let settings = defaults()?
        .add_source(File::new(DEFAULT_CONFIG_PATH, FileFormat::Toml).required(false))
        .add_source(environment(None))
        .build();

    match settings {
        Ok(config) => {
            info!("Successfully loaded configuration: {:?}", config);
            Ok(config)
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            Err(e)
        }
    }
}

pub fn load_settings() -> Result<Settings, ConfigError> {
    load_config()?.try_deserialize()
}
