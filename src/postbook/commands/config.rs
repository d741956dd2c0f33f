use crate::commands::{CmdMessage, CmdResult};
use crate::config::PostbookConfig;
use crate::error::Result;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let mut config = PostbookConfig::load(config_dir)?;

    match action {
        ConfigAction::ShowAll => {
            result = result.with_config(config);
        }
        ConfigAction::ShowKey(key) => match key.as_str() {
            "data-file" => result.add_message(CmdMessage::info(format!(
                "data-file = {}",
                config.data_file.display()
            ))),
            "log-file" => result.add_message(CmdMessage::info(format!(
                "log-file = {}",
                config.log_file.display()
            ))),
            other => result.add_message(CmdMessage::error(format!(
                "Unknown config key: {}",
                other
            ))),
        },
        ConfigAction::Set(key, value) => {
            match key.as_str() {
                "data-file" => config.data_file = PathBuf::from(&value),
                "log-file" => config.log_file = PathBuf::from(&value),
                other => {
                    result.add_message(CmdMessage::error(format!(
                        "Unknown config key: {}",
                        other
                    )));
                    return Ok(result);
                }
            }
            config.save(config_dir)?;
            result.add_message(CmdMessage::success(format!("{} = {}", key, value)));
        }
    }

    Ok(result)
}
