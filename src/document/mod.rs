// src/document/mod.rs
use anyhow::{anyhow, Result};
use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

/// Trigger recorded on events classified as screen views.
pub const TRIGGER_SCREEN_VIEW: &str = "screen_view";
/// Trigger recorded on events that carry an `event_label` column.
pub const TRIGGER_CUSTOM_EVENT: &str = "custom_event";

/// Cell values that mark a pair as a typed parameter instead of content.
/// Matched case-sensitively against the raw cell text.
const TYPE_TOKENS: [&str; 3] = ["string", "int", "double"];

/// Column holding the event name; stripped from the row during the build.
const NAME_KEY: &str = "name";
/// Column whose presence classifies a row as a custom event. Its value is
/// kept in the row and partitioned like any other pair.
const EVENT_LABEL_KEY: &str = "event_label";

/// One source table's worth of events. Empty collections are held as `None`
/// so they serialize as `null` rather than `[]`.
#[derive(Debug, Serialize)]
pub struct EventGroup {
    pub name: String,
    pub screen_views: Option<Vec<Event>>,
    pub events: Option<Vec<Event>>,
}

#[derive(Debug, Serialize)]
pub struct Event {
    pub name: String,
    pub trigger: &'static str,
    pub content: Option<HashMap<String, String>>,
    pub parameters: Option<HashMap<String, String>>,
}

/// Build one event group from the keyed rows of a single table.
///
/// Every row must carry a `name` entry; a row without one fails the whole
/// run. Rows without `event_label` become screen views, the rest become
/// custom events. The remaining pairs are partitioned by value: an exact
/// type-token match goes to `parameters`, anything else to `content`. Pair
/// order within either map is unspecified.
pub fn build_group(name: &str, rows: Vec<HashMap<String, String>>) -> Result<EventGroup> {
    let mut screen_views = Vec::new();
    let mut events = Vec::new();

    for (idx, mut row) in rows.into_iter().enumerate() {
        let event_name = row.remove(NAME_KEY).ok_or_else(|| {
            anyhow!("table {}: data row {} has no `name` column", name, idx + 1)
        })?;

        let is_screen_view = !row.contains_key(EVENT_LABEL_KEY);

        let (parameters, content): (HashMap<_, _>, HashMap<_, _>) = row
            .into_iter()
            .partition(|(_, value)| TYPE_TOKENS.contains(&value.as_str()));

        let event = Event {
            name: event_name,
            trigger: if is_screen_view {
                TRIGGER_SCREEN_VIEW
            } else {
                TRIGGER_CUSTOM_EVENT
            },
            content: (!content.is_empty()).then_some(content),
            parameters: (!parameters.is_empty()).then_some(parameters),
        };
        debug!(table = name, event = %event.name, trigger = event.trigger, "built event");

        if is_screen_view {
            screen_views.push(event);
        } else {
            events.push(event);
        }
    }

    Ok(EventGroup {
        name: name.to_string(),
        screen_views: (!screen_views.is_empty()).then_some(screen_views),
        events: (!events.is_empty()).then_some(events),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_row_without_event_label_is_screen_view() {
        let group = build_group("app", vec![row(&[("name", "home")])]).unwrap();
        let views = group.screen_views.expect("screen view expected");
        assert_eq!(views.len(), 1);
        assert_eq!(views[0].name, "home");
        assert_eq!(views[0].trigger, TRIGGER_SCREEN_VIEW);
        assert!(group.events.is_none());
    }

    #[test]
    fn test_row_with_event_label_is_custom_event() {
        let group =
            build_group("app", vec![row(&[("name", "tap"), ("event_label", "click")])]).unwrap();
        let events = group.events.expect("custom event expected");
        assert_eq!(events[0].trigger, TRIGGER_CUSTOM_EVENT);
        assert!(group.screen_views.is_none());
        // event_label survives as ordinary content, only `name` is stripped
        let content = events[0].content.as_ref().expect("content expected");
        assert_eq!(content.get("event_label").map(String::as_str), Some("click"));
    }

    #[test]
    fn test_type_token_value_becomes_parameter() {
        let group = build_group(
            "app",
            vec![row(&[("name", "tap"), ("count", "int"), ("amount", "double")])],
        )
        .unwrap();
        let views = group.screen_views.unwrap();
        let params = views[0].parameters.as_ref().expect("parameters expected");
        assert_eq!(params.get("count").map(String::as_str), Some("int"));
        assert_eq!(params.get("amount").map(String::as_str), Some("double"));
        assert!(views[0].content.is_none());
    }

    #[test]
    fn test_literal_number_is_content_not_parameter() {
        let group = build_group("app", vec![row(&[("name", "tap"), ("count", "42")])]).unwrap();
        let views = group.screen_views.unwrap();
        assert!(views[0].parameters.is_none());
        let content = views[0].content.as_ref().unwrap();
        assert_eq!(content.get("count").map(String::as_str), Some("42"));
    }

    #[test]
    fn test_token_match_is_case_sensitive() {
        let group = build_group("app", vec![row(&[("name", "tap"), ("kind", "Int")])]).unwrap();
        let views = group.screen_views.unwrap();
        assert!(views[0].parameters.is_none());
        assert!(views[0].content.is_some());
    }

    #[test]
    fn test_missing_name_is_fatal() {
        let err = build_group("app", vec![row(&[("event_label", "click")])]).unwrap_err();
        assert!(err.to_string().contains("no `name` column"), "{err}");
        assert!(err.to_string().contains("app"), "{err}");
    }

    #[test]
    fn test_empty_group_has_null_collections() {
        let group = build_group("app", Vec::new()).unwrap();
        assert!(group.screen_views.is_none());
        assert!(group.events.is_none());

        let json = serde_json::to_value(&group).unwrap();
        assert!(json["screen_views"].is_null());
        assert!(json["events"].is_null());
    }

    #[test]
    fn test_two_row_table_end_to_end() {
        // header name,event_label,foo with rows (login,,bar) and (tap,click,int)
        let rows = vec![
            row(&[("name", "login"), ("foo", "bar")]),
            row(&[("name", "tap"), ("event_label", "click"), ("foo", "int")]),
        ];
        let group = build_group("checkout", rows).unwrap();
        assert_eq!(group.name, "checkout");

        let views = group.screen_views.expect("login is a screen view");
        assert_eq!(views.len(), 1);
        assert_eq!(views[0].name, "login");
        let content = views[0].content.as_ref().unwrap();
        assert_eq!(content.get("foo").map(String::as_str), Some("bar"));
        assert!(views[0].parameters.is_none());

        let events = group.events.expect("tap is a custom event");
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].name, "tap");
        let params = events[0].parameters.as_ref().unwrap();
        assert_eq!(params.get("foo").map(String::as_str), Some("int"));
        let content = events[0].content.as_ref().unwrap();
        assert_eq!(content.get("event_label").map(String::as_str), Some("click"));
    }
}
