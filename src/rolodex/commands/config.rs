use crate::commands::{CmdMessage, CmdResult, RolodexPaths};
use crate::config::RolodexConfig;
use crate::error::Result;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &RolodexPaths, action: ConfigAction) -> Result<CmdResult> {
    let dir = &paths.config_dir;
    match action {
        ConfigAction::ShowAll => {
            let config = RolodexConfig::load(dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = RolodexConfig::load(dir)?;
            let mut result = CmdResult::default();
            if config.get(&key).is_none() {
                result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)));
                return Ok(result);
            }
            Ok(result.with_config(config))
        }
        ConfigAction::Set(key, value) => {
            let mut config = RolodexConfig::load(dir)?;
            if let Err(e) = config.set(&key, &value) {
                let mut res = CmdResult::default();
                res.add_message(CmdMessage::error(e));
                return Ok(res);
            }
            config.save(dir)?;
            let display_val = config.get(&key).unwrap_or_else(|| value.clone());
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_val
            )));
            Ok(result)
        }
    }
}
