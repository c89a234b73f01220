use crate::commands::{CmdMessage, CmdResult};
use crate::config::PasteurConfig;
use crate::detect::Detector;
use crate::error::{PasteurError, Result};
use crate::model::HistoryEntry;
use crate::router::{PasteEvent, PasteRouter};
use crate::store::{PrefStore, HISTORY_KEY};
use std::cell::RefCell;
use std::rc::Rc;

/// The smart-paste flow: route `text` through the paste router, record the
/// detection in history, and hand the routing decision back to the caller.
pub fn run<S: PrefStore>(store: &mut S, config: &PasteurConfig, text: &str) -> Result<CmdResult> {
    let captured: Rc<RefCell<Option<PasteEvent>>> = Rc::new(RefCell::new(None));
    let sink = captured.clone();

    let router = PasteRouter::new(Detector::new(config.detector_settings()))
        .with_on_detect(move |event| *sink.borrow_mut() = Some(event.clone()));
    router.process_content(text);

    let event = captured
        .borrow_mut()
        .take()
        .ok_or_else(|| PasteurError::Api("Router delivered no detection".into()))?;

    if !text.trim().is_empty() {
        record(store, config, &event)?;
    }

    let mut result = CmdResult::default();
    if event.is_fallback() {
        result.add_message(CmdMessage::info(format!(
            "No recognized format, defaulting to {}",
            event.tool_name
        )));
    } else {
        result.add_message(CmdMessage::success(format!(
            "Detected {} ({:.0}%) \u{2192} {}",
            event.display_name,
            event.confidence * 100.0,
            event.tool_name
        )));
    }
    Ok(result.with_detection(event))
}

fn record<S: PrefStore>(store: &mut S, config: &PasteurConfig, event: &PasteEvent) -> Result<()> {
    let mut entries = load_history(store)?;
    entries.insert(
        0,
        HistoryEntry::new(&event.content, &event.format, &event.tool, event.confidence),
    );
    entries.truncate(config.history_limit);
    store.save(HISTORY_KEY, &serde_json::to_string(&entries)?)
}

/// Load the recorded detections, newest first. A missing key is an empty
/// history, not an error.
pub fn load_history<S: PrefStore>(store: &S) -> Result<Vec<HistoryEntry>> {
    match store.load(HISTORY_KEY)? {
        Some(raw) => Ok(serde_json::from_str(&raw)?),
        None => Ok(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn detection_is_returned_and_recorded() {
        let mut store = InMemoryStore::new();
        let config = PasteurConfig::default();

        let result = run(&mut store, &config, r#"{"a":1}"#).unwrap();
        let event = result.detection.unwrap();
        assert_eq!(event.format, "json");
        assert_eq!(event.tool_name, "JSON Formatter");

        let history = load_history(&store).unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].format, "json");
    }

    #[test]
    fn unknown_text_falls_back_and_is_still_recorded() {
        let mut store = InMemoryStore::new();
        let config = PasteurConfig::default();

        let result = run(&mut store, &config, "not a recognizable format at all").unwrap();
        let event = result.detection.unwrap();
        assert!(event.is_fallback());
        assert_eq!(event.tool, "json");
        assert_eq!(event.confidence, 0.0);

        assert_eq!(load_history(&store).unwrap().len(), 1);
    }

    #[test]
    fn empty_input_gets_the_fallback_but_no_history_entry() {
        let mut store = InMemoryStore::new();
        let config = PasteurConfig::default();

        for input in ["", "   "] {
            let result = run(&mut store, &config, input).unwrap();
            assert!(result.detection.unwrap().is_fallback());
        }
        assert!(load_history(&store).unwrap().is_empty());
    }

    #[test]
    fn history_is_capped_and_newest_first() {
        let mut store = InMemoryStore::new();
        let config = PasteurConfig {
            history_limit: 3,
            ..PasteurConfig::default()
        };

        for i in 0..5 {
            run(&mut store, &config, &format!(r#"{{"n":{i}}}"#)).unwrap();
        }

        let history = load_history(&store).unwrap();
        assert_eq!(history.len(), 3);
        assert!(history[0].preview.contains("4"));
    }
}
