//! Check bookkeeping for regression tests
//!
//! A [`RegParams`] numbers every check it performs and keeps going after a
//! mismatch, so one run reports all failing checks. [`RegParams::cleanup`]
//! prints the verdict and returns it for the final `assert!`.

use crate::error::{TestError, TestResult};
use crate::regout_dir;
use pixwarp_core::{ImageFormat, Pix};
use std::fs;

/// What a regression run does besides checking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Check only
    #[default]
    Compare,
    /// Check and save every compared image under `tests/regout`
    Display,
}

impl RegTestMode {
    /// `REGTEST_MODE=display` selects [`RegTestMode::Display`]; anything
    /// else, or nothing, selects [`RegTestMode::Compare`].
    pub fn from_env() -> Self {
        match std::env::var("REGTEST_MODE") {
            Ok(v) if v.eq_ignore_ascii_case("display") => Self::Display,
            _ => Self::Compare,
        }
    }
}

pub struct RegParams {
    pub test_name: String,
    pub mode: RegTestMode,
    /// Number of checks performed so far
    index: usize,
    failures: Vec<String>,
}

impl RegParams {
    pub fn new(test_name: &str) -> Self {
        let mode = RegTestMode::from_env();
        if mode == RegTestMode::Display {
            let _ = fs::create_dir_all(regout_dir());
        }
        eprintln!("\n==== {test_name}_reg ({mode:?}) ====");
        Self {
            test_name: test_name.to_string(),
            mode,
            index: 0,
            failures: Vec::new(),
        }
    }

    /// Number of the most recent check.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    /// Count a check; on failure record the message built by `detail`.
    fn check(&mut self, ok: bool, detail: impl FnOnce() -> String) -> bool {
        self.index += 1;
        if !ok {
            let msg = format!("{}_reg check {}: {}", self.test_name, self.index, detail());
            eprintln!("{msg}");
            self.failures.push(msg);
        }
        ok
    }

    /// Pass when `|expected - actual| <= delta`.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        let diff = (expected - actual).abs();
        self.check(diff <= delta, || {
            format!("expected {expected}, got {actual} (off by {diff}, allowed {delta})")
        })
    }

    /// Pass when both images have the same size and identical pixels.
    ///
    /// In display mode the `actual` image is saved as well.
    pub fn compare_pix(&mut self, expected: &Pix, actual: &Pix) -> bool {
        let mismatch = if !expected.sizes_equal(actual) {
            Some(format!(
                "size {}x{} expected, got {}x{}",
                expected.width(),
                expected.height(),
                actual.width(),
                actual.height()
            ))
        } else {
            expected
                .data()
                .iter()
                .zip(actual.data())
                .position(|(a, b)| a != b)
                .map(|i| {
                    let w = expected.width() as usize;
                    format!(
                        "first differing pixel at ({}, {}) of {} differing",
                        i % w,
                        i / w,
                        expected.count_diff_pixels(actual).unwrap_or(0)
                    )
                })
        };
        let ok = mismatch.is_none();
        self.check(ok, || mismatch.unwrap_or_default());
        if ok && self.display() {
            if let Err(e) = self.write_pix(actual) {
                eprintln!("{e}");
            }
        }
        ok
    }

    /// Save `pix` as `<test>.<index>.png` in the regout directory. Does
    /// nothing outside display mode.
    pub fn write_pix(&self, pix: &Pix) -> TestResult<()> {
        if !self.display() {
            return Ok(());
        }
        let path = regout_dir().join(format!(
            "{}.{:02}.{}",
            self.test_name,
            self.index,
            ImageFormat::Png.extension()
        ));
        pixwarp_io::write_image(pix, &path, ImageFormat::Png)
            .map_err(|source| TestError::ImageWrite { path, source })
    }

    /// Print the verdict and return `true` if every check passed.
    pub fn cleanup(self) -> bool {
        if self.failures.is_empty() {
            eprintln!("{}_reg passed {} checks\n", self.test_name, self.index);
            return true;
        }
        eprintln!(
            "{}_reg FAILED {} of {} checks:",
            self.test_name,
            self.failures.len(),
            self.index
        );
        for failure in &self.failures {
            eprintln!("  {failure}");
        }
        eprintln!();
        false
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_values_within_delta() {
        let mut rp = RegParams::new("unit");
        assert!(rp.compare_values(100.0, 100.5, 1.0));
        assert!(rp.is_success());
    }

    #[test]
    fn test_failures_accumulate() {
        let mut rp = RegParams::new("unit");
        assert!(!rp.compare_values(1.0, 2.0, 0.0));
        assert!(rp.compare_values(2.0, 2.0, 0.0));
        assert!(!rp.compare_values(3.0, 5.0, 1.0));
        assert_eq!(rp.index(), 3);
        assert_eq!(rp.failures().len(), 2);
        assert!(rp.failures()[1].contains("check 3"));
        assert!(!rp.cleanup());
    }

    #[test]
    fn test_compare_pix() {
        let mut rp = RegParams::new("unit");
        let a = Pix::new(2, 2).unwrap();
        let b = Pix::new(3, 2).unwrap();
        assert!(!rp.compare_pix(&a, &b));
        assert!(rp.compare_pix(&a, &a.clone()));

        let c = Pix::from_raw(2, 2, vec![a.data()[0], a.data()[1], 7, a.data()[3]]).unwrap();
        assert!(!rp.compare_pix(&a, &c));
        assert!(rp.failures()[1].contains("(0, 1)"));
    }
}
