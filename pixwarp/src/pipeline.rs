//! Effect pipeline
//!
//! load -> effect -> optional border -> display -> save. Nothing is
//! written when any step fails.

use crate::Result;
use crate::config::{BorderConfig, EffectConfig, PopArtConfig, RuntimeConfig};
use crate::display::Viewer;
use pixwarp_color::{PopArtOptions, pop_art};
use pixwarp_core::{Pix, color};
use pixwarp_transform::{gauss_shift, sine_wave, slope_shift};

/// Apply the configured effect.
pub fn apply_effect(pix: &Pix, effect: &EffectConfig) -> Result<Pix> {
    let out = match effect {
        EffectConfig::Gauss => gauss_shift(pix)?,
        EffectConfig::Slope => slope_shift(pix)?,
        EffectConfig::Wave(wave) => sine_wave(pix, &wave.params(), wave.crop)?,
        EffectConfig::Popart(popart) => pop_art(pix, &pop_art_options(popart))?,
    };
    Ok(out)
}

fn pop_art_options(config: &PopArtConfig) -> PopArtOptions {
    PopArtOptions {
        colors: config.colors,
        palette: config.palette(),
        scan_order: config.scan_order.into(),
    }
}

/// Pad with the border, if one is configured.
pub fn decorate(pix: Pix, border: Option<&BorderConfig>) -> Result<Pix> {
    match border {
        Some(b) if b.size > 0 => Ok(pix.add_border(b.size, color::from_array(b.color))?),
        _ => Ok(pix),
    }
}

/// Run the effect, border and display steps on an image in memory.
pub fn process(pix: &Pix, config: &RuntimeConfig, viewer: &mut dyn Viewer) -> Result<Pix> {
    if matches!(&config.effect, EffectConfig::Popart(p) if p.show_original) {
        viewer.show(pix, "original")?;
    }

    let out = apply_effect(pix, &config.effect)?;
    log::info!(
        "{}: {}x{} -> {}x{}",
        config.effect.name(),
        pix.width(),
        pix.height(),
        out.width(),
        out.height()
    );
    let out = decorate(out, config.border().as_ref())?;
    viewer.show(&out, "result")?;
    Ok(out)
}

/// Load the input, process it and save the result.
pub fn run(config: &RuntimeConfig, viewer: &mut dyn Viewer) -> Result<Pix> {
    let pix = pixwarp_io::read_image(&config.input)?;
    log::info!(
        "loaded {} ({}x{})",
        config.input.display(),
        pix.width(),
        pix.height()
    );
    let out = process(&pix, config, viewer)?;
    pixwarp_io::write_image_auto(&out, &config.output)?;
    log::info!("saved {}", config.output.display());
    Ok(out)
}
