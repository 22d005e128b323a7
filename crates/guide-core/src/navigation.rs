//! Navigation coordinator.
//!
//! Components never change routes themselves: they fire a [`NavIntent`] and
//! the [`Navigator`] decides what happens. Every request is idempotent, so
//! firing the same intent twice is harmless.

use std::collections::VecDeque;

use crate::routing::{Route, Section};
use crate::types::RecordKey;

/// Something a component would like to happen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavIntent {
    ShowSection(Section),
    ShowRecord { section: Section, key: RecordKey },
    SelectSettlement(RecordKey),
    OpenHash(String),
    Back,
    Forward,
}

type RouteListener = Box<dyn FnMut(&Route)>;

/// Entries kept in each of the back and forward stacks; the oldest go first
pub const HISTORY_LIMIT: usize = 100;

fn push_capped(stack: &mut VecDeque<Route>, route: Route) {
    if stack.len() == HISTORY_LIMIT {
        stack.pop_front();
    }
    stack.push_back(route);
}

/// Owns the current route and the back/forward history
pub struct Navigator {
    current: Route,
    back: VecDeque<Route>,
    forward: VecDeque<Route>,
    listeners: Vec<RouteListener>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(Route::overview())
    }
}

impl std::fmt::Debug for Navigator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Navigator")
            .field("current", &self.current)
            .field("back", &self.back.len())
            .field("forward", &self.forward.len())
            .finish()
    }
}

impl Navigator {
    pub fn new(start: Route) -> Self {
        Self {
            current: start,
            back: VecDeque::new(),
            forward: VecDeque::new(),
            listeners: Vec::new(),
        }
    }

    pub fn current(&self) -> &Route {
        &self.current
    }

    pub fn can_go_back(&self) -> bool {
        !self.back.is_empty()
    }

    pub fn can_go_forward(&self) -> bool {
        !self.forward.is_empty()
    }

    /// Listen for route changes
    pub fn subscribe(&mut self, listener: impl FnMut(&Route) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Apply an intent. Returns whether the current route changed.
    pub fn dispatch(&mut self, intent: NavIntent) -> bool {
        tracing::debug!(?intent, "navigation intent");
        match intent {
            NavIntent::ShowSection(section) => self.navigate(Route::section(section)),
            NavIntent::ShowRecord { section, key } => self.show_record(section, key),
            NavIntent::SelectSettlement(key) => self.show_record(Section::Settlements, key),
            NavIntent::OpenHash(hash) => match Route::parse_hash(&hash) {
                Ok(route) => self.navigate(route),
                Err(e) => {
                    tracing::warn!("ignoring hash {:?}: {}", hash, e);
                    false
                }
            },
            NavIntent::Back => self.step(true),
            NavIntent::Forward => self.step(false),
        }
    }

    /// Go to `route`, recording history. A no-op if already there.
    pub fn navigate(&mut self, route: Route) -> bool {
        if route == self.current {
            return false;
        }
        let previous = std::mem::replace(&mut self.current, route);
        push_capped(&mut self.back, previous);
        self.forward.clear();
        self.notify();
        true
    }

    /// Select the section, then the item within it, as one navigation.
    fn show_record(&mut self, section: Section, key: RecordKey) -> bool {
        if section.record_kind().is_none() {
            tracing::warn!(%key, "{} has no records; showing the section", section);
            return self.navigate(Route::section(section));
        }
        let mut target = Route::section(section);
        target.item = Some(key);
        self.navigate(target)
    }

    fn step(&mut self, back: bool) -> bool {
        let (from, to) = if back {
            (&mut self.back, &mut self.forward)
        } else {
            (&mut self.forward, &mut self.back)
        };
        let Some(route) = from.pop_back() else {
            return false;
        };
        let previous = std::mem::replace(&mut self.current, route);
        push_capped(to, previous);
        self.notify();
        true
    }

    fn notify(&mut self) {
        let route = self.current.clone();
        for listener in &mut self.listeners {
            listener(&route);
        }
    }
}
