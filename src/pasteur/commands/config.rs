use crate::commands::{CmdMessage, CmdResult};
use crate::config::PasteurConfig;
use crate::error::{PasteurError, Result};
use std::fmt::Write;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = PasteurConfig::load(config_dir)?;

    match action {
        ConfigAction::ShowAll => {
            let mut output = String::new();
            for (i, key) in PasteurConfig::KEYS.iter().enumerate() {
                if i > 0 {
                    output.push('\n');
                }
                // KEYS and get() cover the same closed set
                let value = config.get(key).unwrap_or_default();
                let _ = write!(output, "{key} = {value}");
            }
            Ok(CmdResult::default().with_output(output))
        }
        ConfigAction::ShowKey(key) => {
            let value = config
                .get(&key)
                .ok_or_else(|| PasteurError::Api(format!("Unknown config key: {key}")))?;
            Ok(CmdResult::default().with_output(format!("{key} = {value}")))
        }
        ConfigAction::Set(key, value) => {
            config.set(&key, &value)?;
            config.save(config_dir)?;
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::success(format!("{key} set to {value}")));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_all_lists_every_key() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(dir.path(), ConfigAction::ShowAll).unwrap();
        let output = result.output.unwrap();
        for key in PasteurConfig::KEYS {
            assert!(output.contains(key), "missing {key}");
        }
    }

    #[test]
    fn set_persists_across_loads() {
        let dir = tempfile::tempdir().unwrap();
        run(
            dir.path(),
            ConfigAction::Set("history-limit".into(), "7".into()),
        )
        .unwrap();

        let result = run(dir.path(), ConfigAction::ShowKey("history-limit".into())).unwrap();
        assert_eq!(result.output.as_deref(), Some("history-limit = 7"));
    }

    #[test]
    fn unknown_key_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(run(dir.path(), ConfigAction::ShowKey("nope".into())).is_err());
    }
}
