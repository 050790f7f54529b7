use serde::{Deserialize, Serialize};

fn default_zoom_step() -> f64 {
    0.1
}

fn default_min_zoom() -> f64 {
    0.8
}

fn default_max_zoom() -> f64 {
    1.6
}

fn default_dark_background() -> String {
    "#192633".to_string()
}

fn default_settings_file() -> String {
    "settings.json".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct UiConfig {
    #[serde(default = "default_zoom_step")]
    pub zoom_step: f64,
    /// Lowest zoom factor still applied when zooming out
    #[serde(default = "default_min_zoom")]
    pub min_zoom: f64,
    /// Zooming in only applies while the result stays below this
    #[serde(default = "default_max_zoom")]
    pub max_zoom: f64,
    /// Painted before the page loads to avoid a white flash in dark mode
    #[serde(default = "default_dark_background")]
    pub dark_background: String,
    /// File (inside the data dir) persisting dark mode and zoom
    #[serde(default = "default_settings_file")]
    pub settings_file: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            zoom_step: default_zoom_step(),
            min_zoom: default_min_zoom(),
            max_zoom: default_max_zoom(),
            dark_background: default_dark_background(),
            settings_file: default_settings_file(),
        }
    }
}
