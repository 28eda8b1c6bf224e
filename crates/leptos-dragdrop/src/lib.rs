//! Leptos DragDrop Utilities
//!
//! Commit-on-drop reordering for Leptos lists using native HTML5 drag events.
//! The gesture is tracked by [`DragReorder`]; the list itself is only touched
//! once, when [`DragReorder::drop`] hands back a `(source, target)` pair.

use leptos::prelude::*;

/// Drag gesture state for a flat reorderable list
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DragReorder {
    /// Entry the gesture started on
    pub source: Option<u32>,
    /// Entry the pointer most recently entered
    pub target: Option<u32>,
    /// Entry rendered with drag feedback
    pub active: Option<u32>,
}

impl DragReorder {
    pub fn drag_start(&mut self, id: u32) {
        self.source = Some(id);
        self.active = Some(id);
    }

    /// Update the hovered target. Never commits anything.
    pub fn drag_enter(&mut self, id: u32) {
        self.target = Some(id);
    }

    /// Finish the gesture. Returns the pair to commit when both ends are
    /// known and distinct; the state is cleared either way.
    pub fn drop(&mut self) -> Option<(u32, u32)> {
        let committed = match (self.source, self.target) {
            (Some(source), Some(target)) if source != target => Some((source, target)),
            _ => None,
        };
        self.clear();
        committed
    }

    /// Cancel or tidy up after a gesture, whatever happened.
    pub fn drag_end(&mut self) {
        self.clear();
    }

    pub fn is_dragging(&self) -> bool {
        self.source.is_some()
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

/// DnD state shared by every row of one list
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub state: RwSignal<DragReorder>,
}

impl DndSignals {
    /// Whether `id` is the entry being dragged (for dimming the row)
    pub fn is_active(&self, id: u32) -> bool {
        self.state.with(|s| s.active == Some(id))
    }
}

pub fn create_dnd_signals() -> DndSignals {
    DndSignals {
        state: RwSignal::new(DragReorder::default()),
    }
}

/// Create dragstart handler for a draggable row
pub fn make_on_dragstart(dnd: DndSignals, id: u32) -> impl Fn(web_sys::DragEvent) + Copy + 'static {
    move |ev: web_sys::DragEvent| {
        // Firefox refuses to start a drag without payload
        if let Some(dt) = ev.data_transfer() {
            let _ = dt.set_data("text/plain", &id.to_string());
            dt.set_effect_allowed("move");
        }
        tracing::debug!(id, "drag start");
        dnd.state.update(|s| s.drag_start(id));
    }
}

/// Create dragenter handler for a row that can be a drop target
pub fn make_on_dragenter(dnd: DndSignals, id: u32) -> impl Fn(web_sys::DragEvent) + Copy + 'static {
    move |_ev: web_sys::DragEvent| {
        if dnd.state.with_untracked(|s| s.is_dragging() && s.target != Some(id)) {
            dnd.state.update(|s| s.drag_enter(id));
        }
    }
}

/// Create dragover handler; the default action must be cancelled for `drop` to fire
pub fn make_on_dragover() -> impl Fn(web_sys::DragEvent) + Copy + 'static {
    move |ev: web_sys::DragEvent| {
        ev.prevent_default();
    }
}

/// Create drop handler. `on_drop(source, target)` runs at most once per gesture.
pub fn make_on_drop<F>(dnd: DndSignals, on_drop: F) -> impl Fn(web_sys::DragEvent) + Clone + 'static
where
    F: Fn(u32, u32) + Clone + 'static,
{
    move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        let mut committed = None;
        dnd.state.update(|s| committed = s.drop());
        match committed {
            Some((source, target)) => {
                tracing::debug!(source, target, "drop committed");
                on_drop(source, target);
            }
            None => tracing::debug!("drop ignored"),
        }
    }
}

/// Create dragend handler for the row being dragged
pub fn make_on_dragend(dnd: DndSignals) -> impl Fn(web_sys::DragEvent) + Copy + 'static {
    move |_ev: web_sys::DragEvent| {
        dnd.state.update(|s| s.drag_end());
    }
}
