//! `docuapp build` command implementation.
//!
//! Writes every indexed document as a static HTML page. The fallback
//! document is additionally written as `index.html` so the output directory
//! can be served by any static file host.

use std::path::PathBuf;

use clap::Args;
use docuapp_config::{CliSettings, Config, Theme};
use docuapp_site::{Site, SiteOptions};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Output directory for the generated site (default: build/).
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Default theme (overrides config).
    #[arg(long)]
    theme: Option<Theme>,

    /// Path to configuration file (default: auto-discover docuapp.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl BuildArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            theme: self.theme,
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let out_dir = self.out.unwrap_or_else(|| PathBuf::from("build"));
        output.info(&format!("Output: {}", out_dir.display()));
        std::fs::create_dir_all(&out_dir)?;

        let site = Site::new(SiteOptions {
            title: config.site.title.clone(),
            tagline: config.site.tagline.clone(),
            theme: config.site.theme.name().to_owned(),
        });

        let pages = site.render_all();
        let count = pages.len();
        for (key, title, html) in pages {
            let file = out_dir.join(format!("{key}.html"));
            std::fs::write(&file, &html)?;
            output.info(&format!("  {title} -> {}", file.display()));

            if key == docuapp_content::FALLBACK_KEY {
                std::fs::write(out_dir.join("index.html"), &html)?;
            }
        }

        output.success(&format!(
            "Site built successfully: {count} pages in {}",
            out_dir.display()
        ));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_writes_every_page() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("docuapp.toml");
        std::fs::write(&config_path, "[site]\ntitle = \"Test Docs\"\n").unwrap();

        let args = BuildArgs {
            out: Some(dir.path().join("build")),
            theme: None,
            config: Some(config_path),
        };
        args.execute().unwrap();

        let out = dir.path().join("build");
        let index = std::fs::read_to_string(out.join("index.html")).unwrap();
        assert!(index.contains("Welcome to DocuApp"));
        assert!(index.contains("<h2>Test Docs</h2>"));
        assert!(out.join("database.html").exists());
        assert!(out.join("quick-start.html").exists());
    }

    #[test]
    fn test_missing_explicit_config_fails() {
        let dir = tempfile::tempdir().unwrap();

        let args = BuildArgs {
            out: Some(dir.path().join("build")),
            theme: None,
            config: Some(dir.path().join("absent.toml")),
        };

        assert!(args.execute().is_err());
    }
}
