//! Runtime configuration
//!
//! A run is described by one JSON file:
//!
//! ```json
//! {
//!   "input": "image_in.jpg",
//!   "output": "image_out.jpg",
//!   "effect": { "kind": "wave", "y": { "amplitude": 20.0, "period": 1.0 }, "crop": true },
//!   "border": { "size": 5, "color": [0, 0, 255] },
//!   "preview": { "height": 600, "path": "preview.png" }
//! }
//! ```
//!
//! When `border` is omitted each effect gets its own default; an explicit
//! `null` turns the border off.

use pixwarp_color::{ScanOrder, pop_art_palette};
use pixwarp_core::color;
use pixwarp_transform::{WaveAxis, WaveParams};
use serde::{Deserialize, Deserializer};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_BORDER_SIZE: u32 = 5;
pub const DEFAULT_BORDER_COLOR: [u8; 3] = [0, 0, 255];
pub const DEFAULT_PREVIEW_HEIGHT: u32 = 600;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuntimeConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub effect: EffectConfig,
    /// `None` when omitted, `Some(None)` when explicitly `null`
    #[serde(default, deserialize_with = "present")]
    pub border: Option<Option<BorderConfig>>,
    #[serde(default)]
    pub preview: PreviewConfig,
}

impl RuntimeConfig {
    /// Border to draw, after applying the per-effect default.
    pub fn border(&self) -> Option<BorderConfig> {
        match &self.border {
            Some(explicit) => explicit.clone(),
            None => self.effect.default_border(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let images = [("output", Some(&self.output)), ("preview.path", self.preview.path.as_ref())];
        for (name, path) in images {
            if let Some(path) = path {
                pixwarp_io::format_for_path(path)
                    .map_err(|e| ConfigError::Invalid(format!("{name}: {e}")))?;
            }
        }
        if self.preview.height == 0 {
            return Err(ConfigError::Invalid("preview.height must be positive".into()));
        }
        match &self.effect {
            EffectConfig::Wave(wave) => {
                for (name, axis) in [("x", &wave.x), ("y", &wave.y)] {
                    if !axis.is_finite() {
                        return Err(ConfigError::Invalid(format!(
                            "effect.{name} values must be finite"
                        )));
                    }
                }
            }
            EffectConfig::Popart(popart) => {
                if popart.colors == 0 || popart.colors > 256 {
                    return Err(ConfigError::Invalid(
                        "effect.colors must be between 1 and 256".into(),
                    ));
                }
                let len = popart.palette().len();
                if len < popart.colors as usize {
                    return Err(ConfigError::Invalid(format!(
                        "effect.palette has {len} entries but effect.colors is {}",
                        popart.colors
                    )));
                }
            }
            EffectConfig::Gauss | EffectConfig::Slope => {}
        }
        Ok(())
    }
}

/// Selected effect and its parameters
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EffectConfig {
    Gauss,
    Slope,
    Wave(WaveConfig),
    Popart(PopArtConfig),
}

impl EffectConfig {
    pub fn name(&self) -> &'static str {
        match self {
            EffectConfig::Gauss => "gauss",
            EffectConfig::Slope => "slope",
            EffectConfig::Wave(_) => "wave",
            EffectConfig::Popart(_) => "popart",
        }
    }

    /// Border used when the configuration does not mention one.
    pub fn default_border(&self) -> Option<BorderConfig> {
        match self {
            EffectConfig::Gauss | EffectConfig::Wave(_) => Some(BorderConfig::default()),
            EffectConfig::Slope | EffectConfig::Popart(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AxisConfig {
    pub amplitude: f64,
    pub period: f64,
    pub phase: f64,
    pub shift: f64,
}

impl AxisConfig {
    fn is_finite(&self) -> bool {
        [self.amplitude, self.period, self.phase, self.shift]
            .iter()
            .all(|v| v.is_finite())
    }
}

impl From<AxisConfig> for WaveAxis {
    fn from(a: AxisConfig) -> Self {
        WaveAxis::new(a.amplitude, a.period, a.phase, a.shift)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WaveConfig {
    pub x: AxisConfig,
    pub y: AxisConfig,
    pub crop: bool,
}

impl Default for WaveConfig {
    fn default() -> Self {
        let params = WaveParams::default();
        let axis = |a: WaveAxis| AxisConfig {
            amplitude: a.amplitude,
            period: a.period,
            phase: a.phase,
            shift: a.shift,
        };
        Self {
            x: axis(params.x),
            y: axis(params.y),
            crop: true,
        }
    }
}

impl WaveConfig {
    pub fn params(&self) -> WaveParams {
        WaveParams {
            x: self.x.into(),
            y: self.y.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanOrderConfig {
    #[default]
    RowMajor,
    ColumnMajor,
}

impl From<ScanOrderConfig> for ScanOrder {
    fn from(order: ScanOrderConfig) -> Self {
        match order {
            ScanOrderConfig::RowMajor => ScanOrder::RowMajor,
            ScanOrderConfig::ColumnMajor => ScanOrder::ColumnMajor,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PopArtConfig {
    pub colors: u32,
    /// Explicit target palette; the six-color pop-art palette when absent
    pub palette: Option<Vec<[u8; 3]>>,
    pub scan_order: ScanOrderConfig,
    /// Show the input before it is quantized
    pub show_original: bool,
}

impl Default for PopArtConfig {
    fn default() -> Self {
        Self {
            colors: 6,
            palette: None,
            scan_order: ScanOrderConfig::RowMajor,
            show_original: true,
        }
    }
}

impl PopArtConfig {
    /// Target palette as pixels.
    pub fn palette(&self) -> Vec<u32> {
        match &self.palette {
            Some(rgb) => rgb.iter().map(|&c| color::from_array(c)).collect(),
            None => pop_art_palette(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BorderConfig {
    pub size: u32,
    pub color: [u8; 3],
}

impl Default for BorderConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_BORDER_SIZE,
            color: DEFAULT_BORDER_COLOR,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PreviewConfig {
    pub height: u32,
    pub path: Option<PathBuf>,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            height: DEFAULT_PREVIEW_HEIGHT,
            path: None,
        }
    }
}

/// Distinguishes a missing field from an explicit `null`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

pub fn parse_config(json: &str, origin: &Path) -> Result<RuntimeConfig, ConfigError> {
    let config: RuntimeConfig = serde_json::from_str(json).map_err(|source| ConfigError::Parse {
        path: origin.to_path_buf(),
        source,
    })?;
    config.validate()?;
    Ok(config)
}

pub fn load_config(path: &Path) -> Result<RuntimeConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_config(&contents, path)?;
    log::debug!("loaded {} config from {}", config.effect.name(), path.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> RuntimeConfig {
        parse_config(json, Path::new("test.json")).unwrap()
    }

    #[test]
    fn test_minimal_gauss() {
        let c = parse(r#"{"input": "in.jpg", "output": "out.jpg", "effect": {"kind": "gauss"}}"#);
        assert_eq!(c.effect, EffectConfig::Gauss);
        assert_eq!(c.border(), Some(BorderConfig::default()));
        assert_eq!(c.preview.height, 600);
        assert!(c.preview.path.is_none());
    }

    #[test]
    fn test_per_effect_border_defaults() {
        let slope = parse(r#"{"input": "a", "output": "b.png", "effect": {"kind": "slope"}}"#);
        assert_eq!(slope.border(), None);
        let pop = parse(r#"{"input": "a", "output": "b.png", "effect": {"kind": "popart"}}"#);
        assert_eq!(pop.border(), None);
        let wave = parse(r#"{"input": "a", "output": "b.png", "effect": {"kind": "wave"}}"#);
        assert_eq!(wave.border(), Some(BorderConfig::default()));
    }

    #[test]
    fn test_explicit_null_border() {
        let c = parse(
            r#"{"input": "a", "output": "b.png", "effect": {"kind": "gauss"}, "border": null}"#,
        );
        assert_eq!(c.border(), None);
    }

    #[test]
    fn test_border_override() {
        let c = parse(
            r#"{"input": "a", "output": "b.png", "effect": {"kind": "slope"},
                "border": {"size": 2, "color": [255, 0, 0]}}"#,
        );
        assert_eq!(
            c.border(),
            Some(BorderConfig {
                size: 2,
                color: [255, 0, 0]
            })
        );
    }

    #[test]
    fn test_wave_defaults() {
        let c = parse(r#"{"input": "a", "output": "b.png", "effect": {"kind": "wave"}}"#);
        let EffectConfig::Wave(wave) = c.effect else {
            panic!("expected wave");
        };
        assert!(wave.crop);
        assert_eq!(wave.params(), WaveParams::default());
    }

    #[test]
    fn test_wave_explicit() {
        let c = parse(
            r#"{"input": "a", "output": "b.png", "effect": {"kind": "wave",
                "x": {"amplitude": 3.0, "period": 2.0},
                "y": {"shift": 1.5}, "crop": false}}"#,
        );
        let EffectConfig::Wave(wave) = c.effect else {
            panic!("expected wave");
        };
        assert!(!wave.crop);
        assert_eq!(wave.x.amplitude, 3.0);
        assert_eq!(wave.x.phase, 0.0);
        assert_eq!(wave.y.amplitude, 0.0);
        assert_eq!(wave.y.shift, 1.5);
    }

    #[test]
    fn test_popart_options() {
        let c = parse(
            r#"{"input": "a", "output": "b.png", "effect": {"kind": "popart",
                "colors": 2, "palette": [[1, 2, 3], [4, 5, 6]],
                "scan_order": "column_major", "show_original": false}}"#,
        );
        let EffectConfig::Popart(pop) = c.effect else {
            panic!("expected popart");
        };
        assert_eq!(pop.colors, 2);
        assert_eq!(pop.scan_order, ScanOrderConfig::ColumnMajor);
        assert!(!pop.show_original);
        assert_eq!(
            pop.palette(),
            vec![color::compose_rgb(1, 2, 3), color::compose_rgb(4, 5, 6)]
        );
    }

    #[test]
    fn test_invalid_configs() {
        let bad = [
            r#"{"input": "a", "output": "b.png", "effect": {"kind": "swirl"}}"#,
            r#"{"input": "a", "effect": {"kind": "gauss"}}"#,
            r#"{"input": "a", "output": "b.png", "effect": {"kind": "gauss"}, "preview": {"height": 0}}"#,
            r#"{"input": "a", "output": "b.png", "effect": {"kind": "popart", "colors": 7}}"#,
            r#"{"input": "a", "output": "b.png", "effect": {"kind": "popart", "colors": 0}}"#,
            r#"{"input": "a", "output": "b.png", "effect": {"kind": "gauss"}, "extra": 1}"#,
        ];
        for json in bad {
            assert!(parse_config(json, Path::new("bad.json")).is_err(), "{json}");
        }
    }

    #[test]
    fn test_unwritable_extensions() {
        for json in [
            r#"{"input": "a.jpg", "output": "out.bmp", "effect": {"kind": "gauss"}}"#,
            r#"{"input": "a.jpg", "output": "out", "effect": {"kind": "gauss"}}"#,
            r#"{"input": "a.jpg", "output": "out.png", "effect": {"kind": "gauss"},
                "preview": {"path": "preview.gif"}}"#,
        ] {
            let err = parse_config(json, Path::new("ext.json")).unwrap_err();
            assert!(matches!(err, ConfigError::Invalid(_)), "{json}: {err}");
        }
        let ok = parse("{\"input\": \"a\", \"output\": \"OUT.JPEG\", \"effect\": {\"kind\": \"gauss\"}}");
        assert_eq!(ok.output, PathBuf::from("OUT.JPEG"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_config(Path::new("/nonexistent/pixwarp.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
