//! Auxiliary panels: the navigation menu and the live camera preview.
//! Their lifecycle is independent of the exclusive-view set.

use shared::domain::PanelKind;
use tracing::debug;

/// Hooks the widget layer provides per always-on panel.
pub trait Panel {
    fn enter(&mut self);
    fn leave(&mut self);

    /// Menu-style panels mirror the active view name; others ignore this.
    fn highlight(&mut self, target: &str) {
        let _ = target;
    }
}

/// Seam to the external head-tracking pointer controller. The shell only
/// routes the enable flag; it never interprets gesture data and does not
/// verify delivery.
pub trait PointerControl {
    fn set_active(&mut self, active: bool);
}

struct PanelSlot {
    kind: PanelKind,
    panel: Box<dyn Panel>,
    shown: bool,
}

impl PanelSlot {
    fn show(&mut self) {
        if self.shown {
            debug!(panel = self.kind.label(), "show no-op, panel already shown");
            return;
        }
        self.panel.enter();
        self.shown = true;
    }

    fn hide(&mut self) {
        if !self.shown {
            return;
        }
        self.panel.leave();
        self.shown = false;
    }
}

/// Coordinates the always-on panels and the pointer-control forwarding.
pub struct PanelCoordinator {
    menu: PanelSlot,
    preview: PanelSlot,
    highlighted: Option<String>,
    pointer: Box<dyn PointerControl>,
}

impl PanelCoordinator {
    pub fn new(
        menu: Box<dyn Panel>,
        preview: Box<dyn Panel>,
        pointer: Box<dyn PointerControl>,
    ) -> Self {
        Self {
            menu: PanelSlot {
                kind: PanelKind::Menu,
                panel: menu,
                shown: false,
            },
            preview: PanelSlot {
                kind: PanelKind::Preview,
                panel: preview,
                shown: false,
            },
            highlighted: None,
            pointer,
        }
    }

    pub fn show(&mut self, kind: PanelKind) {
        self.slot_mut(kind).show();
    }

    pub fn hide(&mut self, kind: PanelKind) {
        self.slot_mut(kind).hide();
    }

    pub fn is_shown(&self, kind: PanelKind) -> bool {
        self.slot(kind).shown
    }

    /// The menu's highlighted entry, mirroring the active view name.
    pub fn highlighted(&self) -> Option<&str> {
        self.highlighted.as_deref()
    }

    /// View-changed notification from the navigation controller. Updates
    /// the menu highlight; the preview panel is unaffected.
    pub fn on_view_changed(&mut self, target: &str) {
        self.highlighted = Some(target.to_string());
        self.menu.panel.highlight(target);
    }

    /// Forward the preview panel's enable/disable toggle to the external
    /// pointer controller, unmodified.
    pub fn forward_pointer_toggle(&mut self, enabled: bool) {
        debug!(enabled, "forwarding pointer toggle");
        self.pointer.set_active(enabled);
    }

    /// Teardown: preview first, then menu.
    pub fn hide_all(&mut self) {
        self.preview.hide();
        self.menu.hide();
    }

    fn slot(&self, kind: PanelKind) -> &PanelSlot {
        match kind {
            PanelKind::Menu => &self.menu,
            PanelKind::Preview => &self.preview,
        }
    }

    fn slot_mut(&mut self, kind: PanelKind) -> &mut PanelSlot {
        match kind {
            PanelKind::Menu => &mut self.menu,
            PanelKind::Preview => &mut self.preview,
        }
    }
}

#[cfg(test)]
#[path = "tests/panels_tests.rs"]
mod tests;
