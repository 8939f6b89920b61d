#[cfg(test)]
#[path = "utils_test.rs"]
mod tests;

use chrono::Local;
use eyre::{Context, Result};
use log::LevelFilter;
use std::{io::Write, str::FromStr};

use super::{Configuration, LogConfig};

pub fn load_configuration(config_path: &str) -> Result<Configuration> {
    let config =
        std::fs::read_to_string(config_path).wrap_err(format!("reading {}", config_path))?;
    let config: Configuration = toml::from_str(&config).wrap_err("parsing configuration")?;
    Ok(config)
}

/// Returns the first existing config file among
/// `$XDG_CONFIG_HOME/taskboard/config.toml`,
/// `$HOME/.config/taskboard/config.toml` and `$HOME/.taskboard.toml`.
pub fn lookup_config_path() -> Option<String> {
    let candidates = [
        format!(
            "{}/taskboard/config.toml",
            env_or_current("XDG_CONFIG_HOME")
        ),
        format!("{}/.config/taskboard/config.toml", env_or_current("HOME")),
        format!("{}/.taskboard.toml", env_or_current("HOME")),
    ];

    candidates
        .into_iter()
        .find(|path| std::path::Path::new(path).exists())
}

/// Logs go to the configured file so CLI output on stdout stays clean.
/// Per-module overrides from `[[log.filters]]` are applied on top of the
/// global level.
pub fn init_logger(config: &LogConfig) -> Result<()> {
    let path = &config.file.path;
    if let Some(dir) = std::path::Path::new(path).parent() {
        std::fs::create_dir_all(dir).wrap_err(format!("creating directory {}", dir.display()))?;
    }
    let log_file = Box::new(
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .append(config.file.append)
            .open(path)
            .wrap_err(format!("opening log file {}", path))?,
    );

    let raw_level = config.level.as_deref().unwrap_or("info");
    let log_level = LevelFilter::from_str(raw_level)?;

    let mut builder = env_logger::Builder::new();
    for filter in config.filters.as_deref().unwrap_or_default() {
        let module_level = LevelFilter::from_str(filter.level.as_deref().unwrap_or(raw_level))
            .unwrap_or(log_level);
        builder.filter(filter.module.as_deref(), module_level);
    }

    builder
        .format(|buf, record| {
            writeln!(
                buf,
                "{}/{}:{} {} [{}] - {}",
                record.module_path().unwrap_or("unknown"),
                basename(record.file().unwrap_or("unknown")),
                record.line().unwrap_or(0),
                Local::now().format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        })
        .target(env_logger::Target::Pipe(log_file))
        .filter(None, log_level)
        .try_init()?;
    Ok(())
}

pub fn basename(path: &str) -> String {
    path.split('/').next_back().unwrap_or(path).to_string()
}

fn env_or_current(key: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| ".".to_string())
}
