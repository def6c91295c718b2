use anyhow::{bail, Context, Result};
use image::Rgba;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::renderer::IconStyle;

/// Optional project-local overrides for the icon design. Absent file means
/// the stock MapleMetrics look; the tool never writes a config file itself.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct IconConfig {
    #[serde(default = "default_label")]
    pub label: String,
    #[serde(default = "default_background")]
    pub background: String,
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,
}

fn default_label() -> String {
    "MM".to_string()
}

fn default_background() -> String {
    "#1e40af".to_string()
}

fn default_out_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for IconConfig {
    fn default() -> Self {
        IconConfig {
            label: default_label(),
            background: default_background(),
            out_dir: default_out_dir(),
        }
    }
}

impl IconConfig {
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file {}", path.display()))?;
            let config: IconConfig = serde_yaml::from_str(&contents)
                .with_context(|| format!("Failed to parse config file {}", path.display()))?;
            config.validate()?;
            Ok(config)
        } else {
            Ok(IconConfig::default())
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.label.is_empty() {
            bail!("label cannot be empty");
        }
        if self.label.chars().count() > 4 {
            bail!("label must be at most 4 characters");
        }
        if parse_hex_color(&self.background).is_none() {
            bail!("background must be a #rrggbb hex color, got '{}'", self.background);
        }
        Ok(())
    }

    pub fn style(&self) -> Result<IconStyle> {
        let [r, g, b] = parse_hex_color(&self.background)
            .with_context(|| format!("Invalid background color '{}'", self.background))?;
        Ok(IconStyle {
            label: self.label.clone(),
            background: Rgba([r, g, b, 255]),
        })
    }
}

/// Parse "#rrggbb" (leading '#' optional) into RGB bytes.
pub fn parse_hex_color(s: &str) -> Option<[u8; 3]> {
    let hex = s.strip_prefix('#').unwrap_or(s);
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some([r, g, b])
}
