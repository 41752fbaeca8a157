use crate::config::Config;
use crate::config::migrate::{migrate_config_file, missing_fields};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    /// Print the effective configuration (file values merged with defaults).
    pub fn print(cfg: &Config) -> AppResult<()> {
        println!("📄 Current configuration:\n");
        println!("{}", serde_yaml::to_string(cfg)?);
        Ok(())
    }

    pub fn check(path: &Path) -> AppResult<()> {
        if !path.exists() {
            warning(format!(
                "No configuration file at {} (defaults in use).",
                path.display()
            ));
            return Ok(());
        }

        let missing = missing_fields(path)?;
        if missing.is_empty() {
            success("Configuration file is complete.");
        } else {
            warning(format!("Missing fields: {}", missing.join(", ")));
            info("Run `rposdesk config --migrate` to add them with default values.");
        }
        Ok(())
    }

    pub fn migrate(path: &Path) -> AppResult<bool> {
        if !path.exists() {
            return Err(AppError::Config(format!(
                "No configuration file at {}, run `rposdesk init` first",
                path.display()
            )));
        }
        migrate_config_file(path)
    }

    /// Open the config file in `editor`, `$EDITOR`, `$VISUAL`, then nano/notepad.
    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<()> {
        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });

        let requested = editor.clone().unwrap_or_else(|| default_editor.clone());

        let ok = |ed: &str| {
            Command::new(ed)
                .arg(path)
                .status()
                .map(|s| s.success())
                .unwrap_or(false)
        };

        if ok(&requested) {
            success(format!("Configuration file edited using '{}'", requested));
            return Ok(());
        }

        warning(format!(
            "Editor '{}' not available, falling back to '{}'",
            requested, default_editor
        ));

        if requested != default_editor && ok(&default_editor) {
            success(format!("Configuration file edited using '{}'", default_editor));
            Ok(())
        } else {
            Err(AppError::Config(format!(
                "Failed to edit configuration file using '{}'",
                default_editor
            )))
        }
    }
}
