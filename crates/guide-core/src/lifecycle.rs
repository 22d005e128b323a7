//! Deferred-rendering lifecycle for display units.
//!
//! A [`DisplayUnit`] wraps a [`View`] and makes `set_data` safe to call at
//! any point in the unit's life. Until the host attaches the unit, the latest
//! payload is parked; on attachment the unit builds its render tree (once,
//! ever), becomes ready, renders the parked payload, and only then notifies
//! ready listeners.
//!
//! ## States
//!
//! ```text
//!            set_data: park (last write wins)
//!   ┌──────────────┐  attach   ┌──────────┐
//!   │   detached   │ ────────> │  ready   │  set_data: render now
//!   │ (not ready)  │ <──────── │          │  assign_slot: apply
//!   └──────────────┘  detach   └──────────┘
//!     assign_slot: warn + no-op
//! ```
//!
//! Attach order is fixed: build tree (first attach only) → ready → render
//! pending payload → ready notification.

use crate::html::{Node, RenderTree};

/// What a display unit renders.
///
/// `build` has no default: a view that cannot construct its subtree does not
/// compile.
pub trait View {
    type Payload;

    /// Construct the skeleton render tree. Called at most once per unit.
    fn build(&mut self) -> RenderTree;

    /// Render `payload` into `tree`. Slots are cleared before each call.
    fn render(&mut self, tree: &mut RenderTree, payload: &Self::Payload);
}

type ReadyListener = Box<dyn FnMut()>;

/// A view plus the ready flag, pending payload, and ready notification
pub struct DisplayUnit<V: View> {
    view: V,
    tree: Option<RenderTree>,
    ready: bool,
    pending: Option<V::Payload>,
    current: Option<V::Payload>,
    ready_fired: bool,
    listeners: Vec<ReadyListener>,
    name: &'static str,
}

impl<V: View> DisplayUnit<V> {
    pub fn new(view: V) -> Self {
        Self::named(std::any::type_name::<V>(), view)
    }

    /// Create a unit with a name used in diagnostics
    pub fn named(name: &'static str, view: V) -> Self {
        Self {
            view,
            tree: None,
            ready: false,
            pending: None,
            current: None,
            ready_fired: false,
            listeners: Vec::new(),
            name,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// The render tree, once it has been built
    pub fn tree(&self) -> Option<&RenderTree> {
        self.tree.as_ref()
    }

    /// The payload most recently rendered
    pub fn current(&self) -> Option<&V::Payload> {
        self.current.as_ref()
    }

    /// Serialize the render tree, if it has been built
    pub fn html(&self) -> Option<String> {
        self.tree.as_ref().map(RenderTree::to_html)
    }

    /// Register a listener for the once-per-attachment ready notification
    pub fn on_ready(&mut self, listener: impl FnMut() + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Render now if ready, otherwise park the payload (replacing any
    /// previously parked one).
    pub fn set_data(&mut self, payload: V::Payload) {
        if self.ready {
            self.render(payload);
        } else {
            if self.pending.is_some() {
                tracing::trace!(unit = self.name, "replacing pending payload");
            }
            self.pending = Some(payload);
        }
    }

    /// Host notification: the unit is now attached.
    pub fn attach(&mut self) {
        if self.ready {
            return;
        }

        if self.tree.is_none() {
            tracing::trace!(unit = self.name, "building render tree");
            self.tree = Some(self.view.build());
        }
        self.ready = true;

        if let Some(payload) = self.pending.take() {
            self.render(payload);
        }

        if !self.ready_fired {
            self.ready_fired = true;
            tracing::debug!(unit = self.name, "display unit ready");
            for listener in &mut self.listeners {
                listener();
            }
        }
    }

    /// Host notification: the unit is no longer attached.
    pub fn detach(&mut self) {
        if !self.ready {
            return;
        }
        self.ready = false;
        self.ready_fired = false;
        tracing::trace!(unit = self.name, "display unit detached");
    }

    /// Assign content to a named slot of the render tree.
    ///
    /// Before the unit is ready this is a no-op with a warning. Returns
    /// whether the content was applied.
    pub fn assign_slot(&mut self, slot: &str, nodes: Vec<Node>) -> bool {
        match (&mut self.tree, self.ready) {
            (Some(tree), true) => tree.assign_slot(slot, nodes),
            _ => {
                tracing::warn!(unit = self.name, slot, "slot assignment before display unit is ready");
                false
            }
        }
    }

    /// Change view settings, then re-render the current payload if ready.
    pub fn configure(&mut self, f: impl FnOnce(&mut V)) {
        f(&mut self.view);
        if !self.ready {
            return;
        }
        if let (Some(tree), Some(payload)) = (self.tree.as_mut(), self.current.as_ref()) {
            tree.clear_slots();
            self.view.render(tree, payload);
        }
    }

    fn render(&mut self, payload: V::Payload) {
        let Some(tree) = self.tree.as_mut() else {
            // ready implies built
            return;
        };
        tree.clear_slots();
        self.view.render(tree, &payload);
        self.current = Some(payload);
    }
}

/// Build, attach, and render a view in one go, returning its flattened
/// nodes. Used by parents composing child views into their own slots.
pub fn render_detached<V: View>(view: V, payload: V::Payload) -> Vec<Node> {
    let mut unit = DisplayUnit::new(view);
    unit.attach();
    unit.set_data(payload);
    unit.tree.take().map(RenderTree::into_nodes).unwrap_or_default()
}
