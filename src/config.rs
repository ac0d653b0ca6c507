use crate::ray::ParallelPolicy;
use crate::surface::Rgba;
use serde::Deserialize;
use std::fs;

pub const CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub canvas: CanvasConfig,
    #[serde(default)]
    pub light: LightConfig,
    #[serde(default)]
    pub sampling: SamplingConfig,
    #[serde(default)]
    pub buddies: BuddiesConfig,
    #[serde(default)]
    pub visual: VisualConfig,
    #[serde(default)]
    pub scene: SceneConfig,
}

#[derive(Debug, Deserialize)]
pub struct CanvasConfig {
    #[serde(default = "default_width")]
    pub width: f64,
    #[serde(default = "default_height")]
    pub height: f64,
}

#[derive(Debug, Deserialize)]
pub struct LightConfig {
    #[serde(default = "default_light_x")]
    pub start_x: f64,
    #[serde(default = "default_light_y")]
    pub start_y: f64,
    #[serde(default = "default_light_radius")]
    pub radius: f64,
}

#[derive(Debug, Deserialize)]
pub struct SamplingConfig {
    /// Jitter unit for the five-ray fan around each vertex (0 casts a single ray)
    #[serde(default = "default_jitter")]
    pub jitter: f64,
    #[serde(default)]
    pub parallel: ParallelPolicy,
}

#[derive(Debug, Deserialize)]
pub struct BuddiesConfig {
    #[serde(default = "default_buddies_enabled")]
    pub enabled: bool,
    #[serde(default = "default_buddy_distance")]
    pub distance: f64,
    #[serde(default = "default_buddy_opacity")]
    pub opacity: f32,
}

#[derive(Debug, Deserialize)]
pub struct VisualConfig {
    #[serde(default = "default_window_title")]
    pub window_title: String,
    #[serde(default = "default_background")]
    pub background: Rgba,
    #[serde(default = "default_obstacle_color")]
    pub obstacle: Rgba,
    #[serde(default = "default_glow_color")]
    pub glow: Rgba,
    #[serde(default = "default_light_color")]
    pub light: Rgba,
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f32,
    #[serde(default)]
    pub show_rays: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct SceneConfig {
    /// JSON obstacle layout; the built-in scene is used when unset
    #[serde(default)]
    pub layout_path: Option<String>,
}

// Default values
fn default_width() -> f64 { 1000.0 }
fn default_height() -> f64 { 600.0 }
fn default_light_x() -> f64 { 500.0 }
fn default_light_y() -> f64 { 300.0 }
fn default_light_radius() -> f64 { 4.0 }
fn default_jitter() -> f64 { crate::visibility::DEFAULT_JITTER }
fn default_buddies_enabled() -> bool { true }
fn default_buddy_distance() -> f64 { 7.0 }
fn default_buddy_opacity() -> f32 { 0.2 }
fn default_window_title() -> String { "RustLight - Visibility Polygons".to_string() }
fn default_background() -> Rgba { Rgba::BLACK }
fn default_obstacle_color() -> Rgba { Rgba::WHITE }
fn default_glow_color() -> Rgba { Rgba::WHITE }
fn default_light_color() -> Rgba { Rgba::ORANGE }
fn default_stroke_width() -> f32 { 2.0 }

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            start_x: default_light_x(),
            start_y: default_light_y(),
            radius: default_light_radius(),
        }
    }
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            jitter: default_jitter(),
            parallel: ParallelPolicy::default(),
        }
    }
}

impl Default for BuddiesConfig {
    fn default() -> Self {
        Self {
            enabled: default_buddies_enabled(),
            distance: default_buddy_distance(),
            opacity: default_buddy_opacity(),
        }
    }
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            window_title: default_window_title(),
            background: default_background(),
            obstacle: default_obstacle_color(),
            glow: default_glow_color(),
            light: default_light_color(),
            stroke_width: default_stroke_width(),
            show_rays: false,
        }
    }
}

impl Config {
    pub fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Read `config.toml` without reporting anything
    pub fn read() -> anyhow::Result<Self> {
        let contents = fs::read_to_string(CONFIG_PATH)?;
        Ok(Self::parse(&contents)?)
    }

    /// Load configuration from file, or use defaults if file doesn't exist
    pub fn load() -> Self {
        match fs::read_to_string(CONFIG_PATH) {
            Ok(contents) => match Self::parse(&contents) {
                Ok(config) => {
                    println!("Loaded configuration from {}", CONFIG_PATH);
                    config
                }
                Err(e) => {
                    eprintln!("Warning: Failed to parse {}: {}", CONFIG_PATH, e);
                    eprintln!("Using default configuration");
                    Config::default()
                }
            },
            Err(_) => {
                println!("No {} found, using default configuration", CONFIG_PATH);
                Config::default()
            }
        }
    }
}
