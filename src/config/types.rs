// Configuration type definitions

use serde::Deserialize;

use crate::error::CheckgridError;
use crate::grid::{GridOptions, Palette};
use crate::theme::parse_color;

/// Theme section: the four grid tones as color tokens
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeConfig {
    #[serde(default = "default_font")]
    pub font: String,
    #[serde(default = "default_font_dark")]
    pub font_dark: String,
    #[serde(default = "default_font_darkest")]
    pub font_darkest: String,
    #[serde(default = "default_background_light")]
    pub background_light: String,
}

fn default_font() -> String {
    "#ececf4".to_string()
}

fn default_font_dark() -> String {
    "#82859e".to_string()
}

fn default_font_darkest() -> String {
    "#5a5c77".to_string()
}

fn default_background_light() -> String {
    "#373755".to_string()
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig {
            font: default_font(),
            font_dark: default_font_dark(),
            font_darkest: default_font_darkest(),
            background_light: default_background_light(),
        }
    }
}

impl ThemeConfig {
    pub fn palette(&self) -> Result<Palette, CheckgridError> {
        Ok(Palette {
            font: parse_color(&self.font)?,
            font_dark: parse_color(&self.font_dark)?,
            font_darkest: parse_color(&self.font_darkest)?,
            background_light: parse_color(&self.background_light)?,
        })
    }
}

/// Grid section
#[derive(Debug, Clone, Deserialize)]
pub struct GridConfig {
    #[serde(default = "default_data_gap")]
    pub data_gap: u16,
    #[serde(default = "default_full_name_label")]
    pub full_name_label: bool,
}

fn default_data_gap() -> u16 {
    1
}

fn default_full_name_label() -> bool {
    true
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig {
            data_gap: default_data_gap(),
            full_name_label: default_full_name_label(),
        }
    }
}

impl GridConfig {
    pub fn options(&self) -> GridOptions {
        GridOptions {
            data_gap: self.data_gap,
            full_name_label: self.full_name_label,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub grid: GridConfig,
}
