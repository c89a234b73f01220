use crate::commands::paste::load_history;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{PrefStore, HISTORY_KEY};

pub fn run<S: PrefStore>(store: &S) -> Result<CmdResult> {
    let entries = load_history(store)?;
    let mut result = CmdResult::default().with_history(entries);
    if result.history.is_empty() {
        result.add_message(CmdMessage::info("No detections recorded yet."));
    }
    Ok(result)
}

pub fn clear<S: PrefStore>(store: &mut S) -> Result<CmdResult> {
    store.save(HISTORY_KEY, "[]")?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("History cleared."));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::paste;
    use crate::config::PasteurConfig;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn empty_history_lists_nothing() {
        let store = InMemoryStore::new();
        let result = run(&store).unwrap();
        assert!(result.history.is_empty());
        assert!(!result.messages.is_empty());
    }

    #[test]
    fn clear_empties_a_populated_history() {
        let mut store = InMemoryStore::new();
        let config = PasteurConfig::default();
        paste::run(&mut store, &config, "1700000000").unwrap();
        assert_eq!(run(&store).unwrap().history.len(), 1);

        clear(&mut store).unwrap();
        assert!(run(&store).unwrap().history.is_empty());
    }
}
