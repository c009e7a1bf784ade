//! pixwarp - Pixel remapping image effects
//!
//! Reads one image, applies one effect, optionally adds a border, shows a
//! preview and writes the result. The effects:
//!
//! - `gauss`: columns rolled vertically along a bell curve
//! - `slope`: columns rolled by a linearly growing amount
//! - `wave`: sine-wave displacement on both axes, edges cropped
//! - `popart`: median cut to six colors, recolored with a fixed palette
//!
//! Everything is driven by a [`RuntimeConfig`] loaded from JSON.
//!
//! # Example
//!
//! ```
//! use pixwarp::config::parse_config;
//! use pixwarp::display::LogViewer;
//! use pixwarp::pipeline::process;
//! use pixwarp::Pix;
//! use std::path::Path;
//!
//! let json = r#"{"input": "in.png", "output": "out.png", "effect": {"kind": "slope"}}"#;
//! let config = parse_config(json, Path::new("inline.json")).unwrap();
//! let pix = Pix::new(40, 30).unwrap();
//! let out = process(&pix, &config, &mut LogViewer).unwrap();
//! assert_eq!((out.width(), out.height()), (40, 30));
//! ```

pub mod config;
pub mod display;
mod error;
pub mod pipeline;

pub use config::{RuntimeConfig, load_config};
pub use error::{Error, Result};

// Re-export core types
pub use pixwarp_core::*;

// Re-export domain crates as modules
pub use pixwarp_color as palette;
pub use pixwarp_io as io;
pub use pixwarp_transform as transform;
