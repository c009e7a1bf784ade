//! Display collaborators
//!
//! The pipeline hands every image it wants shown to a [`Viewer`]. No
//! window is opened: [`PreviewFile`] writes a scaled preview image next to
//! the configured path, [`LogViewer`] only reports dimensions.

use crate::{Error, Result};
use pixwarp_core::Pix;
use pixwarp_transform::scale_to_height;
use std::path::{Path, PathBuf};

/// Receives images to show the user.
pub trait Viewer {
    fn show(&mut self, pix: &Pix, title: &str) -> Result<()>;
}

/// Logs the title and size of each image.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogViewer;

impl Viewer for LogViewer {
    fn show(&mut self, pix: &Pix, title: &str) -> Result<()> {
        log::info!("{title}: {}x{}", pix.width(), pix.height());
        Ok(())
    }
}

/// Writes each shown image, scaled to a fixed height, to a file.
///
/// The title is appended to the file stem, so `preview.png` shown with
/// title `result` becomes `preview-result.png`.
#[derive(Debug, Clone)]
pub struct PreviewFile {
    path: PathBuf,
    height: u32,
    written: Vec<PathBuf>,
}

impl PreviewFile {
    pub fn new(path: impl Into<PathBuf>, height: u32) -> Self {
        Self {
            path: path.into(),
            height,
            written: Vec::new(),
        }
    }

    /// Files written so far, in order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    fn target(&self, title: &str) -> PathBuf {
        let slug: String = title
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
            .collect();
        if slug.is_empty() {
            return self.path.clone();
        }
        let stem = self
            .path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "preview".to_string());
        let name = match self.path.extension() {
            Some(ext) => format!("{stem}-{slug}.{}", ext.to_string_lossy()),
            None => format!("{stem}-{slug}"),
        };
        self.path.with_file_name(name)
    }
}

impl Viewer for PreviewFile {
    fn show(&mut self, pix: &Pix, title: &str) -> Result<()> {
        let preview = scale_to_height(pix, self.height)?;
        let target = self.target(title);
        write_preview(&preview, &target)?;
        log::info!(
            "{title}: {}x{} preview written to {}",
            preview.width(),
            preview.height(),
            target.display()
        );
        self.written.push(target);
        Ok(())
    }
}

fn write_preview(pix: &Pix, path: &Path) -> Result<()> {
    pixwarp_io::write_image_auto(pix, path)
        .map_err(|e| Error::Display(format!("preview {}: {e}", path.display())))
}
