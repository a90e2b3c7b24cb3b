use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::color::Rgba;
use crate::error::{Result, SystemError};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowPosition {
    #[default]
    Centered,
    /// Let the window manager decide.
    Undefined,
    At { x: i32, y: i32 },
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderBackend {
    /// SDL 2D renderer
    #[default]
    Canvas,
    OpenGl,
}

/// Everything the hello-window run needs to know.
///
/// Defaults give a centered 600x400 window titled "tile", cleared to opaque
/// green and held for five seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub position: WindowPosition,
    pub color: Rgba,
    pub hold_ms: u64,
    pub backend: RenderBackend,
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            title: "tile".to_string(),
            width: 600,
            height: 400,
            position: WindowPosition::Centered,
            color: Rgba::GREEN,
            hold_ms: 5000,
            backend: RenderBackend::Canvas,
            vsync: false,
        }
    }
}

impl WindowConfig {
    pub fn from_toml_str(s: &str) -> std::result::Result<WindowConfig, toml::de::Error> {
        toml::from_str(s)
    }

    pub fn load(path: &Path) -> Result<WindowConfig> {
        let text = fs::read_to_string(path).map_err(|source| SystemError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        let cfg = WindowConfig::from_toml_str(&text).map_err(|source| {
            SystemError::ConfigParse {
                path: path.to_path_buf(),
                source,
            }
        })?;
        log::debug!("Loaded window config from {path:?}: {cfg:?}");
        Ok(cfg)
    }

    pub fn validate(self) -> Result<WindowConfig> {
        if self.width == 0 || self.height == 0 {
            return Err(SystemError::Invalid(format!(
                "window size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        if self.title.contains('\0') {
            return Err(SystemError::Invalid(
                "window title must not contain NUL bytes".to_string(),
            ));
        }
        Ok(self)
    }

    pub fn hold(&self) -> Duration {
        Duration::from_millis(self.hold_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_open_a_green_tile_window() {
        let cfg = WindowConfig::default();
        assert_eq!(cfg.title, "tile");
        assert_eq!((cfg.width, cfg.height), (600, 400));
        assert_eq!(cfg.position, WindowPosition::Centered);
        assert_eq!(cfg.color, Rgba::new(0, 255, 0, 255));
        assert_eq!(cfg.hold(), Duration::from_secs(5));
        assert_eq!(cfg.backend, RenderBackend::Canvas);
        assert!(!cfg.vsync);
    }

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(WindowConfig::from_toml_str("").unwrap(), WindowConfig::default());
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let cfg = WindowConfig::from_toml_str(
            r##"
            title = "mars"
            color = "#b7410e"
            backend = "opengl"
            position = { at = { x = 10, y = -20 } }
            "##,
        )
        .unwrap();

        assert_eq!(cfg.title, "mars");
        assert_eq!(cfg.color, Rgba::rgb(0xb7, 0x41, 0x0e));
        assert_eq!(cfg.backend, RenderBackend::OpenGl);
        assert_eq!(cfg.position, WindowPosition::At { x: 10, y: -20 });
        assert_eq!((cfg.width, cfg.height, cfg.hold_ms), (600, 400, 5000));
    }

    #[test]
    fn unit_positions_parse_from_strings() {
        let cfg = WindowConfig::from_toml_str(r#"position = "undefined""#).unwrap();
        assert_eq!(cfg.position, WindowPosition::Undefined);
    }

    #[test]
    fn rejects_unknown_keys_and_bad_colors() {
        assert!(WindowConfig::from_toml_str("fullscreen = true").is_err());
        assert!(WindowConfig::from_toml_str(r#"color = "green""#).is_err());
    }

    #[test]
    fn validate_rejects_zero_size() {
        let cfg = WindowConfig {
            height: 0,
            ..WindowConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(SystemError::Invalid(_))));
    }

    #[test]
    fn validate_rejects_nul_in_title() {
        let cfg = WindowConfig {
            title: "ti\0le".to_string(),
            ..WindowConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(SystemError::Invalid(_))));
        assert!(WindowConfig::default().validate().is_ok());
    }

    #[test]
    fn load_reports_missing_file_with_path() {
        let path = Path::new("/nonexistent/red_planet.toml");
        match WindowConfig::load(path) {
            Err(SystemError::ConfigIo { path: p, .. }) => assert_eq!(p, path),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn load_reports_parse_error_with_path() {
        let path = std::env::temp_dir().join(format!("red_planet_bad_{}.toml", std::process::id()));
        fs::write(&path, "width = \"wide\"\n").unwrap();
        let res = WindowConfig::load(&path);
        let _ = fs::remove_file(&path);

        match res {
            Err(SystemError::ConfigParse { path: p, .. }) => assert_eq!(p, path),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn serialized_config_reads_back() {
        let cfg = WindowConfig {
            title: "mars".to_string(),
            position: WindowPosition::At { x: 3, y: -4 },
            color: Rgba::new(0xb7, 0x41, 0x0e, 0x80),
            backend: RenderBackend::OpenGl,
            vsync: true,
            ..WindowConfig::default()
        };
        let text = toml::to_string(&cfg).unwrap();
        assert!(text.contains(r##"color = "#b7410e80""##), "{text}");
        assert_eq!(WindowConfig::from_toml_str(&text).unwrap(), cfg);

        let text = toml::to_string(&WindowConfig::default()).unwrap();
        assert_eq!(WindowConfig::from_toml_str(&text).unwrap(), WindowConfig::default());
    }

    #[test]
    fn load_reads_file_from_disk() {
        let path = std::env::temp_dir().join(format!("red_planet_cfg_{}.toml", std::process::id()));
        fs::write(&path, "width = 320\nheight = 200\nhold_ms = 0\n").unwrap();
        let cfg = WindowConfig::load(&path);
        let _ = fs::remove_file(&path);

        let cfg = cfg.unwrap();
        assert_eq!((cfg.width, cfg.height), (320, 200));
        assert_eq!(cfg.hold(), Duration::ZERO);
    }
}
