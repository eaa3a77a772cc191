// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Router implementation.
//!
//! ## Overview
//!
//! The router is the single entry point the notification source calls, once
//! per raw event. It applies the host filter, decodes, and projects:
//!
//! 1. [`Filter`] check — events outside the configured screen (and element,
//!    when one is configured) are dropped with no sink activity at all.
//! 2. Decode via [`thicket_event::decode`].
//! 3. On success: one formatted line to the [`EventLog`], *then* the full
//!    variable-namespace batch to the [`VariableStore`] — log first,
//!    variables second, always.
//! 4. On decode failure: exactly one diagnostic log line carrying the error
//!    description, and no variable writes.
//!
//! A malformed notification never propagates a fault to the caller and never
//! leaves the namespace partially updated: decoding is atomic and the
//! projection is a full rewrite.
//!
//! ## Fault boundary
//!
//! The pipeline below the router is `Result`-based and total — decode
//! returns an error value, formatting and projection cannot fail — so the
//! only fault left to absorb is an unavailable log sink. That is reported
//! once per affected line through the [`DiagnosticLog`] channel (see
//! [`LOG_UNAVAILABLE_NOTE`]) and handling continues.
//!
//! ## State
//!
//! The router is stateless across calls; it holds only the injected sinks
//! and the filter. Nothing is retained from one notification to the next.

use alloc::format;
use alloc::string::String;

use thicket_context::Value;
use thicket_event::decode;
use thicket_project::{format_event, project_event};

use crate::sink::{DiagnosticLog, EventLog, NoDiagnostics, VariableStore};

/// The fixed diagnostic string recorded when the log sink is unavailable.
pub const LOG_UNAVAILABLE_NOTE: &str = "event log sink unavailable; entry dropped";

/// One raw gesture notification as delivered by the host.
#[derive(Copy, Clone, Debug)]
pub struct Notification<'a> {
    /// Name of the screen the notification fired on.
    pub screen: &'a str,
    /// Name of the element, for element-level notifications.
    pub element: Option<&'a str>,
    /// The positional payload (see `thicket_event` for the layout).
    pub payload: &'a [Value],
}

/// Which notifications the router accepts.
///
/// Equality filtering on the screen name, optionally narrowed to one
/// element. Everything else is dropped before any decoding happens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Filter {
    screen: String,
    element: Option<String>,
}

impl Filter {
    /// Accept screen-level notifications from one named screen.
    pub fn for_screen(screen: impl Into<String>) -> Self {
        Self {
            screen: screen.into(),
            element: None,
        }
    }

    /// Accept only notifications for one named element on one named screen.
    pub fn for_element(screen: impl Into<String>, element: impl Into<String>) -> Self {
        Self {
            screen: screen.into(),
            element: Some(element.into()),
        }
    }

    /// Whether a notification passes this filter.
    pub fn matches(&self, notification: &Notification<'_>) -> bool {
        if notification.screen != self.screen {
            return false;
        }
        match &self.element {
            Some(element) => notification.element == Some(element.as_str()),
            None => true,
        }
    }
}

/// The dispatch router: filter, decode, and project into the injected sinks.
///
/// ## Usage
///
/// - Construct with [`Router::new`] when the host has no separate
///   diagnostics channel, or with [`Router::with_diagnostics`] to route
///   sink-failure notes somewhere observable.
/// - Call [`Router::handle`] once per raw notification. The call is
///   synchronous, bounded, and never fails from the caller's point of view.
#[derive(Debug)]
pub struct Router<L, V, D = NoDiagnostics> {
    log: L,
    store: V,
    diagnostics: D,
    filter: Filter,
}

impl<L: EventLog, V: VariableStore> Router<L, V> {
    /// Create a router with the default (discarding) diagnostics channel.
    pub fn new(filter: Filter, log: L, store: V) -> Self {
        Self {
            log,
            store,
            diagnostics: NoDiagnostics,
            filter,
        }
    }
}

impl<L: EventLog, V: VariableStore, D: DiagnosticLog> Router<L, V, D> {
    /// Create a router with an explicit diagnostics channel.
    pub fn with_diagnostics(filter: Filter, log: L, store: V, diagnostics: D) -> Self {
        Self {
            log,
            store,
            diagnostics,
            filter,
        }
    }

    /// Handle one raw notification to completion.
    ///
    /// Filtered-out notifications produce no sink activity. Well-formed
    /// payloads produce exactly one log line and a full rewrite of the
    /// variable namespace, in that order. Malformed payloads produce exactly
    /// one diagnostic log line and no variable writes.
    pub fn handle(&mut self, notification: &Notification<'_>) {
        if !self.filter.matches(notification) {
            return;
        }
        match decode(notification.payload) {
            Ok(event) => {
                self.append_line(&format_event(&event));
                for write in project_event(&event) {
                    self.store.write(write.name, &write.value);
                }
            }
            Err(err) => {
                self.append_line(&format!("Error while processing gesture notification: {err}"));
            }
        }
    }

    fn append_line(&mut self, line: &str) {
        if self.log.append(line).is_err() {
            self.diagnostics.note(LOG_UNAVAILABLE_NOTE);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{MemoryStore, VecLog};
    use crate::sink::SinkUnavailable;
    use alloc::rc::Rc;
    use alloc::string::ToString;
    use alloc::vec;
    use alloc::vec::Vec;
    use core::cell::RefCell;
    use thicket_project::NAMESPACE;

    /// Records every write, including ones a real store would not know.
    #[derive(Debug, Default)]
    struct RecordingStore {
        writes: Vec<(String, String)>,
    }

    impl VariableStore for RecordingStore {
        fn write(&mut self, name: &str, value: &str) {
            self.writes.push((name.to_string(), value.to_string()));
        }
    }

    #[derive(Debug, Default)]
    struct DownLog;

    impl EventLog for DownLog {
        fn append(&mut self, _line: &str) -> Result<(), SinkUnavailable> {
            Err(SinkUnavailable)
        }
    }

    #[derive(Debug, Default)]
    struct RecordingDiagnostics {
        notes: Vec<String>,
    }

    impl DiagnosticLog for RecordingDiagnostics {
        fn note(&mut self, line: &str) {
            self.notes.push(line.to_string());
        }
    }

    fn tap_payload() -> Vec<Value> {
        vec![
            Value::Uint(2),
            Value::Uint(1),
            Value::Uint(4),
            Value::Float(100.7),
            Value::Float(50.2),
            Value::Uint(3),
        ]
    }

    fn manipulation_payload() -> Vec<Value> {
        vec![
            Value::Uint(1),
            Value::Uint(1),
            Value::Uint(2),
            Value::Float(10.0),
            Value::Float(20.0),
            Value::List(vec![
                Value::List(vec![
                    Value::Float(1.0),
                    Value::Float(2.0),
                    Value::Float(3.0),
                    Value::Float(4.0),
                    Value::Float(5.0),
                ]),
                Value::List(vec![
                    Value::Float(6.0),
                    Value::Float(7.0),
                    Value::Float(8.0),
                    Value::Float(9.0),
                    Value::Float(10.0),
                ]),
                Value::List(vec![
                    Value::Float(0.0),
                    Value::Float(0.0),
                    Value::Float(0.0),
                    Value::Float(0.0),
                ]),
                Value::Uint(1),
            ]),
        ]
    }

    #[test]
    fn well_formed_event_logs_once_then_rewrites_namespace() {
        let mut log = VecLog::new();
        let mut store = RecordingStore::default();
        let payload = tap_payload();
        let mut router = Router::new(Filter::for_screen("Main"), &mut log, &mut store);
        router.handle(&Notification {
            screen: "Main",
            element: None,
            payload: &payload,
        });
        drop(router);

        assert_eq!(
            log.lines(),
            ["TAP Flag(s): BEGIN, using: MOUSE X-Position: 100 Y-Position: 50 Count: 3"]
        );
        let names: Vec<&str> = store.writes.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, NAMESPACE);
        assert!(store.writes.contains(&("GestureLastTapCount".to_string(), "3".to_string())));
    }

    #[test]
    fn malformed_payload_logs_one_diagnostic_and_writes_nothing() {
        let mut log = VecLog::new();
        let mut store = RecordingStore::default();
        let payload = vec![Value::Uint(2), Value::Uint(1)];
        let mut router = Router::new(Filter::for_screen("Main"), &mut log, &mut store);
        router.handle(&Notification {
            screen: "Main",
            element: None,
            payload: &payload,
        });
        drop(router);

        assert_eq!(log.lines().len(), 1);
        assert_eq!(
            log.lines()[0],
            "Error while processing gesture notification: payload has 2 slots, expected at least 6"
        );
        assert!(store.writes.is_empty());
    }

    #[test]
    fn filtered_notifications_touch_no_sink() {
        let mut log = VecLog::new();
        let mut store = RecordingStore::default();
        let payload = tap_payload();
        let mut router = Router::new(Filter::for_screen("Main"), &mut log, &mut store);
        router.handle(&Notification {
            screen: "Other",
            element: None,
            payload: &payload,
        });
        // A malformed payload from the wrong screen is not even diagnosed.
        router.handle(&Notification {
            screen: "Other",
            element: None,
            payload: &[],
        });
        drop(router);

        assert!(log.lines().is_empty());
        assert!(store.writes.is_empty());
    }

    #[test]
    fn element_filter_requires_the_named_element() {
        let mut log = VecLog::new();
        let mut store = RecordingStore::default();
        let payload = tap_payload();
        let filter = Filter::for_element("Main", "Button_1");
        let mut router = Router::new(filter, &mut log, &mut store);
        router.handle(&Notification {
            screen: "Main",
            element: None,
            payload: &payload,
        });
        router.handle(&Notification {
            screen: "Main",
            element: Some("Button_2"),
            payload: &payload,
        });
        assert!(router.log.lines().is_empty());

        router.handle(&Notification {
            screen: "Main",
            element: Some("Button_1"),
            payload: &payload,
        });
        drop(router);
        assert_eq!(log.lines().len(), 1);
        assert_eq!(store.writes.len(), NAMESPACE.len());
    }

    #[test]
    fn log_is_written_before_variables() {
        #[derive(Debug)]
        struct OrderLog(Rc<RefCell<Vec<&'static str>>>);
        impl EventLog for OrderLog {
            fn append(&mut self, _line: &str) -> Result<(), SinkUnavailable> {
                self.0.borrow_mut().push("log");
                Ok(())
            }
        }
        #[derive(Debug)]
        struct OrderStore(Rc<RefCell<Vec<&'static str>>>);
        impl VariableStore for OrderStore {
            fn write(&mut self, _name: &str, _value: &str) {
                self.0.borrow_mut().push("write");
            }
        }

        let order = Rc::new(RefCell::new(Vec::new()));
        let payload = tap_payload();
        let mut router = Router::new(
            Filter::for_screen("Main"),
            OrderLog(Rc::clone(&order)),
            OrderStore(Rc::clone(&order)),
        );
        router.handle(&Notification {
            screen: "Main",
            element: None,
            payload: &payload,
        });

        let order = order.borrow();
        assert_eq!(order[0], "log");
        assert_eq!(order.len(), 1 + NAMESPACE.len());
        assert!(order[1..].iter().all(|op| *op == "write"));
    }

    #[test]
    fn unavailable_log_falls_back_to_diagnostics_and_still_projects() {
        let mut store = RecordingStore::default();
        let mut diagnostics = RecordingDiagnostics::default();
        let payload = tap_payload();
        let mut router = Router::with_diagnostics(
            Filter::for_screen("Main"),
            DownLog,
            &mut store,
            &mut diagnostics,
        );
        router.handle(&Notification {
            screen: "Main",
            element: None,
            payload: &payload,
        });
        drop(router);

        assert_eq!(diagnostics.notes, [LOG_UNAVAILABLE_NOTE]);
        assert_eq!(store.writes.len(), NAMESPACE.len());
    }

    #[test]
    fn later_events_fully_overwrite_earlier_namespace_state() {
        let mut log = VecLog::new();
        let mut store = MemoryStore::with_namespace(NAMESPACE);
        let manipulation = manipulation_payload();
        let tap = tap_payload();
        let mut router = Router::new(Filter::for_screen("Main"), &mut log, &mut store);
        router.handle(&Notification {
            screen: "Main",
            element: None,
            payload: &manipulation,
        });
        router.handle(&Notification {
            screen: "Main",
            element: None,
            payload: &tap,
        });
        drop(router);

        // The tap cleared every manipulation slot the first event had set.
        assert_eq!(store.get("GestureLastInteraction"), Some("TAP"));
        assert_eq!(store.get("GestureLastTapCount"), Some("3"));
        assert_eq!(store.get("GestureLastManipulationDeltaScale"), Some(""));
        assert_eq!(store.get("GestureLastManipulationCumulativeRotation"), Some(""));
        assert_eq!(store.get("GestureLastManipulationRailsState"), Some(""));
        assert_eq!(log.lines().len(), 2);
    }

    fn on<'a>(screen: &'a str, element: Option<&'a str>) -> Notification<'a> {
        Notification {
            screen,
            element,
            payload: &[],
        }
    }

    #[test]
    fn filter_matching_rules() {
        let screen_only = Filter::for_screen("Main");
        let with_element = Filter::for_element("Main", "Button_1");

        assert!(screen_only.matches(&on("Main", None)));
        assert!(screen_only.matches(&on("Main", Some("Button_9"))));
        assert!(!screen_only.matches(&on("Other", None)));

        assert!(with_element.matches(&on("Main", Some("Button_1"))));
        assert!(!with_element.matches(&on("Main", Some("Button_2"))));
        assert!(!with_element.matches(&on("Main", None)));
        assert!(!with_element.matches(&on("Other", Some("Button_1"))));
    }
}
