// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0
#![allow(clippy::uninlined_format_args)]
use std::{cell::RefCell, collections::HashMap, rc::Rc};

use relay_utils::{
    callable::Listener,
    diagnostics::{DiagnosticsSink, TracingSink},
    value::Value,
};
use tracing::{debug, trace};

mod error;

pub use self::error::{EmitError, Result};

/// Reserved event fired on every registration, before the new listener
/// becomes visible.
pub const NEW_LISTENER_EVENT: &str = "newListener";

pub const DEFAULT_MAX_LISTENERS: usize = 10;

const DEFAULT_LIST_CAPACITY: usize = 4;

#[derive(Debug)]
pub struct EventItem {
    callback: Listener,
    once: bool,
}

/// Registry for one emitter instance. A key exists only while at least one
/// listener is registered for it; within a key, registration order is
/// invocation order.
#[derive(Debug)]
pub struct EventState {
    listeners: HashMap<Rc<str>, Vec<EventItem>>,
    max_listeners: usize,
}

impl Default for EventState {
    fn default() -> Self {
        Self {
            listeners: HashMap::new(),
            max_listeners: DEFAULT_MAX_LISTENERS,
        }
    }
}

pub type Events = Rc<RefCell<EventState>>;

/// Listener registry and dispatch surface. Host object types embed an
/// [`Events`] handle and pick up every operation from the default methods.
/// The registry borrow is never held across a callback invocation, so
/// listeners may freely call back into the same emitter.
pub trait Emitter {
    /// Handle to this instance's registry.
    fn events(&self) -> Events;

    /// Sink receiving advisory diagnostics.
    fn diagnostics(&self) -> Rc<dyn DiagnosticsSink> {
        Rc::new(TracingSink)
    }

    /// Called after an event key is added to or removed from the registry.
    fn on_event_changed(&self, _event: &str, _added: bool) {}

    fn add_listener(&self, event: &str, listener: Listener) -> Result<&Self> {
        self.register(event, listener, false)
    }

    fn on(&self, event: &str, listener: Listener) -> Result<&Self> {
        self.register(event, listener, false)
    }

    fn once(&self, event: &str, listener: Listener) -> Result<&Self> {
        self.register(event, listener, true)
    }

    /// Append a listener for `event`. The `newListener` meta-event fires
    /// first, against the registry as it exists before this registration;
    /// a meta-listener failure aborts the registration.
    fn register(&self, event: &str, listener: Listener, once: bool) -> Result<&Self> {
        self.emit(
            NEW_LISTENER_EVENT,
            &[Value::from(event), Value::Listener(listener.clone())],
        )?;

        let events = self.events();
        let mut state = events.borrow_mut();
        let items = state
            .listeners
            .entry(Rc::from(event))
            .or_insert_with(|| Vec::with_capacity(DEFAULT_LIST_CAPACITY));
        let added_key = items.is_empty();
        items.push(EventItem {
            callback: listener,
            once,
        });
        let count = items.len();
        let max = state.max_listeners;
        drop(state);

        debug!("now {} listeners registered for {}", count, event);
        if count > max {
            self.diagnostics().excess_listeners(event, count);
        }
        if added_key {
            self.on_event_changed(event, true);
        }
        Ok(self)
    }

    /// Remove every record for `event` whose callback is identity-equal to
    /// `listener`. No-op when nothing matches. An in-flight dispatch
    /// snapshot is unaffected.
    fn remove_listener(&self, event: &str, listener: &Listener) -> &Self {
        let events = self.events();
        let mut state = events.borrow_mut();
        let mut removed_key = false;
        if let Some(items) = state.listeners.get_mut(event) {
            items.retain(|item| item.callback != *listener);
            if items.is_empty() {
                state.listeners.remove(event);
                removed_key = true;
            }
        }
        drop(state);
        if removed_key {
            self.on_event_changed(event, false);
        }
        self
    }

    fn remove_all_listeners(&self, event: &str) -> &Self {
        let events = self.events();
        let removed = events.borrow_mut().listeners.remove(event).is_some();
        if removed {
            self.on_event_changed(event, false);
        }
        self
    }

    /// Set the advisory listener-count threshold. Existing listeners are
    /// never trimmed.
    fn set_max_listeners(&self, max: usize) {
        self.events().borrow_mut().max_listeners = max;
    }

    fn max_listeners(&self) -> usize {
        self.events().borrow().max_listeners
    }

    /// Snapshot of the callbacks registered for `event`, in registration
    /// order. Independent of later registry mutation.
    fn listeners(&self, event: &str) -> Vec<Listener> {
        let events = self.events();
        let state = events.borrow();
        match state.listeners.get(event) {
            Some(items) => items.iter().map(|item| item.callback.clone()).collect(),
            None => Vec::new(),
        }
    }

    fn listener_count(&self, event: &str) -> usize {
        let events = self.events();
        let state = events.borrow();
        state.listeners.get(event).map_or(0, Vec::len)
    }

    fn has_listener(&self, event: &str) -> bool {
        self.events().borrow().listeners.contains_key(event)
    }

    fn event_names(&self) -> Vec<Rc<str>> {
        self.events().borrow().listeners.keys().cloned().collect()
    }

    /// Dispatch `event` to every listener registered at the moment of the
    /// call, in registration order. Returns whether any listener was in the
    /// dispatch snapshot. A listener error is returned immediately and the
    /// rest of the snapshot is not invoked for this call.
    fn emit(&self, event: &str, args: &[Value]) -> Result<bool> {
        trace!("emitting {}", event);
        let events = self.events();
        let mut state = events.borrow_mut();

        let Some(items) = state.listeners.get_mut(event) else {
            return Ok(false);
        };

        // Snapshot the callbacks and drop once entries from the live list
        // in the same pass, before any callback runs. A once listener that
        // re-emits its own event must not observe or refire itself.
        let mut to_fire = Vec::with_capacity(items.len());
        items.retain(|item| {
            to_fire.push(item.callback.clone());
            !item.once
        });
        let removed_key = items.is_empty();
        if removed_key {
            state.listeners.remove(event);
        }
        drop(state);
        if removed_key {
            self.on_event_changed(event, false);
        }

        let handled = !to_fire.is_empty();
        for callback in &to_fire {
            trace!("sending {} to {:?}", event, callback);
            callback
                .call(args)
                .map_err(|source| EmitError::new(event, source))?;
        }
        trace!("event {} fired. handled = {}", event, handled);
        Ok(handled)
    }
}

/// Plain event emitter instance. Clones are handles to the same registry,
/// so a callback can capture one to call back into its own emitter.
#[derive(Clone)]
pub struct EventEmitter {
    events: Events,
    diagnostics: Rc<dyn DiagnosticsSink>,
}

impl EventEmitter {
    pub fn new() -> Self {
        Self::with_diagnostics(Rc::new(TracingSink))
    }

    /// An emitter reporting diagnostics to `sink` instead of the default
    /// tracing-based sink.
    pub fn with_diagnostics(sink: Rc<dyn DiagnosticsSink>) -> Self {
        Self {
            events: Rc::new(RefCell::new(EventState::default())),
            diagnostics: sink,
        }
    }
}

impl std::fmt::Debug for EventEmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventEmitter").finish_non_exhaustive()
    }
}

impl Default for EventEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl Emitter for EventEmitter {
    fn events(&self) -> Events {
        self.events.clone()
    }

    fn diagnostics(&self) -> Rc<dyn DiagnosticsSink> {
        self.diagnostics.clone()
    }
}
