use crate::report;
use anyhow::Result;
use markdown_imgfix_config::Config;
use markdown_imgfix_engine::io::scan_content_files;
use markdown_imgfix_engine::{ImageRewriter, RewriteTarget, ScanOptions, fix_files};
use std::io::Write;
use std::path::Path;

/// Load the config at `config_path`. A missing or broken file falls back to
/// the defaults; a bad config never stops the run.
pub fn load_config(config_path: &Path) -> Config {
    match Config::load_from_path(config_path) {
        Ok(Some(config)) => {
            log::info!("Loaded config from {}", config_path.display());
            config
        }
        Ok(None) => {
            log::debug!("No config file at {}, using defaults", config_path.display());
            Config::default()
        }
        Err(e) => {
            log::warn!("{e}");
            log::warn!("Using default settings instead");
            Config::default()
        }
    }
}

/// Fix the content files in `content_dir`, writing the report to `out`.
pub fn run(content_dir: &Path, config: &Config, out: &mut impl Write) -> Result<()> {
    let rewriter = ImageRewriter::new(RewriteTarget {
        host: config.host.clone(),
        owner: config.owner.clone(),
        repo: config.repo.clone(),
        branch: config.branch.clone(),
    })?;
    let options = ScanOptions::new(config.extension.clone(), config.reserved_files.clone());

    let files = scan_content_files(content_dir, &options)?;
    if files.is_empty() {
        for line in report::no_files_lines() {
            writeln!(out, "{line}")?;
        }
        return Ok(());
    }

    writeln!(out, "{}", report::header(files.len(), &config.host))?;
    writeln!(out, "{}", report::separator())?;

    let mut write_result = Ok(());
    let summary = fix_files(content_dir, &files, &rewriter, |file_report| {
        if write_result.is_ok() {
            write_result = writeln!(out, "{}", report::file_line(file_report));
        }
    });
    write_result?;

    for line in report::summary_lines(&summary, &config.host) {
        writeln!(out, "{line}")?;
    }

    Ok(())
}
