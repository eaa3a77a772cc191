// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collaborator traits for the two downstream sinks and the diagnostic
//! channel.
//!
//! The sinks are owned by the host; the router only holds whatever
//! implementations were injected at construction. All three traits are
//! object-safe and implemented for `&mut T`, so callers can keep ownership
//! and lend the router a borrow.

use core::fmt;

/// Error returned by a sink that is currently unavailable.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SinkUnavailable;

impl fmt::Display for SinkUnavailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("sink unavailable")
    }
}

impl core::error::Error for SinkUnavailable {}

/// The append-only textual log sink.
pub trait EventLog {
    /// Append one line to the log.
    ///
    /// Fire-and-forget: the router never consults anything beyond
    /// availability. An unavailable log is reported, not fatal — the router
    /// falls back to its diagnostic channel.
    fn append(&mut self, line: &str) -> Result<(), SinkUnavailable>;
}

/// The named scalar variable store.
pub trait VariableStore {
    /// Write one variable.
    ///
    /// Names outside the store's namespace are the store's business to
    /// ignore; the router writes every projected slot without checking for
    /// existence first.
    fn write(&mut self, name: &str, value: &str);
}

/// An alternate host channel for router diagnostics.
///
/// Only used when the primary log sink is unavailable.
pub trait DiagnosticLog {
    /// Record one diagnostic line.
    fn note(&mut self, line: &str);
}

/// A diagnostic channel that discards everything.
///
/// The default when the host does not provide one.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct NoDiagnostics;

impl DiagnosticLog for NoDiagnostics {
    fn note(&mut self, _line: &str) {}
}

impl<T: EventLog + ?Sized> EventLog for &mut T {
    fn append(&mut self, line: &str) -> Result<(), SinkUnavailable> {
        (**self).append(line)
    }
}

impl<T: VariableStore + ?Sized> VariableStore for &mut T {
    fn write(&mut self, name: &str, value: &str) {
        (**self).write(name, value);
    }
}

impl<T: DiagnosticLog + ?Sized> DiagnosticLog for &mut T {
    fn note(&mut self, line: &str) {
        (**self).note(line);
    }
}
