use anyhow::Result;
use markdown_imgfix_config::Config;
use std::{env, io};

mod app;
mod report;

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let config = app::load_config(&Config::config_path());
    let content_dir = env::current_dir()?;

    app::run(&content_dir, &config, &mut io::stdout().lock())
}
