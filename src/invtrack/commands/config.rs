use crate::commands::{CmdMessage, CmdResult};
use crate::config::InvConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = InvConfig::load(config_dir)?;
    let mut result = CmdResult::default();
    match action {
        ConfigAction::ShowAll => Ok(result.with_config(config)),
        ConfigAction::ShowKey(key) => {
            match config.get(&key) {
                Some(val) => result.add_message(CmdMessage::info(val)),
                None => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)))
                }
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            if let Err(e) = config.set(&key, &value) {
                result.add_message(CmdMessage::error(e));
                return Ok(result);
            }
            config.save(config_dir)?;
            result.add_message(CmdMessage::success(format!("{} set to {}", key, value)));
            Ok(result.with_config(config))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_all_returns_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(dir.path(), ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config, Some(InvConfig::default()));
    }

    #[test]
    fn set_persists_value() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(
            dir.path(),
            ConfigAction::Set("audit-log".into(), "audit.log".into()),
        )
        .unwrap();
        assert_eq!(result.messages[0].content, "audit-log set to audit.log");

        let shown = run(dir.path(), ConfigAction::ShowKey("audit-log".into())).unwrap();
        assert_eq!(shown.messages[0].content, "audit.log");
    }

    #[test]
    fn unknown_key_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(dir.path(), ConfigAction::ShowKey("nope".into())).unwrap();
        assert!(result.has_errors());

        let result = run(dir.path(), ConfigAction::Set("nope".into(), "x".into())).unwrap();
        assert!(result.has_errors());
    }
}
