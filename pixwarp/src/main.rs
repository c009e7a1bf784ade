use pixwarp::config::{ConfigError, load_config};
use pixwarp::display::{LogViewer, PreviewFile, Viewer};
use pixwarp::pipeline;
use std::env;
use std::path::PathBuf;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(err) = run() {
        log::error!("{err}");
        std::process::exit(1);
    }
}

fn run() -> pixwarp::Result<()> {
    let path = env::args().nth(1).map(PathBuf::from).ok_or_else(|| {
        ConfigError::Invalid("usage: pixwarp <config.json>".to_string())
    })?;
    let config = load_config(&path)?;

    let mut viewer: Box<dyn Viewer> = match &config.preview.path {
        Some(preview) => Box::new(PreviewFile::new(preview, config.preview.height)),
        None => Box::new(LogViewer),
    };
    pipeline::run(&config, viewer.as_mut())?;
    Ok(())
}
