//! Shared helpers for the pixwarp regression tests
//!
//! Every `tests/*_reg.rs` file opens a [`RegParams`], runs numbered checks
//! against it and ends with `assert!(rp.cleanup())`. Set
//! `REGTEST_MODE=display` to also keep the compared images under
//! `tests/regout` at the workspace root.
//!
//! ```ignore
//! use pixwarp_test::RegParams;
//!
//! let mut rp = RegParams::new("wave");
//! rp.compare_values(80.0, out.width() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```

mod error;
mod params;
pub mod synthetic;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use std::path::{Path, PathBuf};

/// Where display-mode images go.
pub fn regout_dir() -> PathBuf {
    // this crate lives two levels below the workspace root
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../..")
        .join("tests")
        .join("regout")
}
