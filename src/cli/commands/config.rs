use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        if *print_config {
            println!("📄 Current configuration ({}):\n", path.display());
            println!("{}", serde_yaml::to_string(cfg)?);
        }

        if *edit_config {
            let editor = resolve_editor(editor.as_deref());

            match Command::new(&editor).arg(&path).status() {
                Ok(s) if s.success() => {
                    success(format!("Configuration file edited using '{}'", editor));
                }
                Ok(s) => {
                    return Err(AppError::Config(format!(
                        "editor '{}' exited with {}",
                        editor, s
                    )));
                }
                Err(e) => {
                    return Err(AppError::Config(format!(
                        "cannot start editor '{}': {}",
                        editor, e
                    )));
                }
            }
        }
    }

    Ok(())
}

/// `--editor`, then $EDITOR/$VISUAL, then the platform default.
fn resolve_editor(requested: Option<&str>) -> String {
    if let Some(e) = requested {
        return e.to_string();
    }
    std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        })
}
