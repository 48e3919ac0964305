use shared::{
    domain::{LifecycleState, ViewSummary},
    error::ShellError,
    protocol::{ShellCommand, ShellEvent},
};
use tracing::{debug, info};

pub mod panels;
pub mod profile;

pub use panels::{Panel, PanelCoordinator, PointerControl};
pub use profile::{Profile, ProfileStore};

/// Hooks the widget/rendering layer provides per navigable view. The core
/// calls them on lifecycle transitions and profile refreshes; it never
/// inspects widget internals.
pub trait View {
    fn enter(&mut self);
    fn leave(&mut self);

    /// Called on profile changes, regardless of lifecycle state, so an
    /// inactive view shows current data when it is next entered.
    fn refresh_profile(&mut self, profile: &Profile) {
        let _ = profile;
    }
}

/// Whether a view subscribes to profile changes. The subset is fixed at
/// registration time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewBinding {
    Static,
    ProfileBound,
}

struct ViewSlot {
    name: String,
    view: Box<dyn View>,
    state: LifecycleState,
    visible: bool,
    binding: ViewBinding,
}

/// Owns the set of registered views and their lookup by stable name.
/// Insertion order is preserved for iteration but carries no semantics.
#[derive(Default)]
pub struct ViewRegistry {
    slots: Vec<ViewSlot>,
}

impl ViewRegistry {
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    pub fn register(
        &mut self,
        name: impl Into<String>,
        view: Box<dyn View>,
        binding: ViewBinding,
    ) -> Result<(), ShellError> {
        let name = name.into();
        if self.contains(&name) {
            return Err(ShellError::duplicate_name(name));
        }
        debug!(view = %name, profile_bound = matches!(binding, ViewBinding::ProfileBound), "registered view");
        self.slots.push(ViewSlot {
            name,
            view,
            state: LifecycleState::Inactive,
            visible: false,
            binding,
        });
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.slots.iter().any(|slot| slot.name == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Result<&mut (dyn View + 'static), ShellError> {
        self.slot_mut(name).map(move |slot| slot.view.as_mut())
    }

    pub fn state_of(&self, name: &str) -> Result<LifecycleState, ShellError> {
        self.slot(name).map(|slot| slot.state)
    }

    pub fn is_visible(&self, name: &str) -> Result<bool, ShellError> {
        self.slot(name).map(|slot| slot.visible)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().map(|slot| slot.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn summaries(&self) -> Vec<ViewSummary> {
        self.slots
            .iter()
            .map(|slot| ViewSummary {
                name: slot.name.clone(),
                state: slot.state,
                visible: slot.visible,
                profile_bound: matches!(slot.binding, ViewBinding::ProfileBound),
            })
            .collect()
    }

    /// Fan a profile change out to every profile-bound view. Unconditional
    /// of lifecycle state; the refreshes are independent, so registration
    /// order is incidental.
    pub fn refresh_all(&mut self, profile: &Profile) {
        let mut refreshed = 0usize;
        for slot in &mut self.slots {
            if matches!(slot.binding, ViewBinding::ProfileBound) {
                slot.view.refresh_profile(profile);
                refreshed += 1;
            }
        }
        debug!(refreshed, "profile refresh fan-out complete");
    }

    fn slot(&self, name: &str) -> Result<&ViewSlot, ShellError> {
        self.slots
            .iter()
            .find(|slot| slot.name == name)
            .ok_or_else(|| ShellError::unknown_view(name))
    }

    fn slot_mut(&mut self, name: &str) -> Result<&mut ViewSlot, ShellError> {
        self.slots
            .iter_mut()
            .find(|slot| slot.name == name)
            .ok_or_else(|| ShellError::unknown_view(name))
    }
}

/// Result of a navigation request that passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    Entered,
    AlreadyActive,
}

/// Enforces the single-active-view invariant and drives enter/leave
/// transitions. Layout visibility and lifecycle state are tracked as
/// separate fields and composed here per transition.
pub struct NavigationController {
    registry: ViewRegistry,
    active: Option<String>,
}

impl NavigationController {
    pub fn new(registry: ViewRegistry) -> Self {
        Self {
            registry,
            active: None,
        }
    }

    pub fn registry(&self) -> &ViewRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut ViewRegistry {
        &mut self.registry
    }

    pub fn active_view(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Switch the active view. Re-entering the already-active view is a
    /// no-op: zero lifecycle hooks run. Unknown targets fail before any
    /// state is touched.
    pub fn navigate(&mut self, target: &str) -> Result<NavOutcome, ShellError> {
        if !self.registry.contains(target) {
            return Err(ShellError::unknown_view(target));
        }
        if self.active.as_deref() == Some(target) {
            debug!(target, "navigation no-op, view already active");
            return Ok(NavOutcome::AlreadyActive);
        }

        for slot in &mut self.registry.slots {
            if slot.name == target {
                slot.visible = true;
                slot.view.enter();
                slot.state = LifecycleState::Active;
            } else {
                slot.visible = false;
                if slot.state == LifecycleState::Active {
                    slot.view.leave();
                    slot.state = LifecycleState::Inactive;
                }
            }
        }

        info!(from = ?self.active, to = target, "view changed");
        self.active = Some(target.to_string());
        Ok(NavOutcome::Entered)
    }

    /// Teardown: leave whichever view is active and clear all visibility.
    /// Afterwards zero views are active.
    pub fn shutdown(&mut self) {
        for slot in &mut self.registry.slots {
            slot.visible = false;
            if slot.state == LifecycleState::Active {
                slot.view.leave();
                slot.state = LifecycleState::Inactive;
            }
        }
        self.active = None;
    }
}

/// The shell composes the navigation controller with the auxiliary panel
/// coordinator and dispatches widget-layer commands to them.
pub struct Shell {
    nav: NavigationController,
    panels: PanelCoordinator,
}

impl Shell {
    pub fn new(nav: NavigationController, panels: PanelCoordinator) -> Self {
        Self { nav, panels }
    }

    pub fn nav(&self) -> &NavigationController {
        &self.nav
    }

    pub fn nav_mut(&mut self) -> &mut NavigationController {
        &mut self.nav
    }

    pub fn panels(&self) -> &PanelCoordinator {
        &self.panels
    }

    pub fn panels_mut(&mut self) -> &mut PanelCoordinator {
        &mut self.panels
    }

    /// Dispatch one widget-layer command. Navigation failures propagate;
    /// the pointer toggle is a best-effort forward with no error path here.
    pub fn handle_command(&mut self, cmd: ShellCommand) -> Result<Option<ShellEvent>, ShellError> {
        match cmd {
            ShellCommand::ChangePage { target } => {
                if self.nav.navigate(&target)? == NavOutcome::Entered {
                    self.panels.on_view_changed(&target);
                    return Ok(Some(ShellEvent::ViewChanged { target }));
                }
                Ok(None)
            }
            ShellCommand::ToggleSwitch { switch_status } => {
                self.panels.forward_pointer_toggle(switch_status);
                Ok(None)
            }
        }
    }

    pub fn refresh_profile(&mut self, profile: &Profile) {
        self.nav.registry_mut().refresh_all(profile);
    }

    /// Leave panels first, then views, mirroring application teardown.
    pub fn shutdown(&mut self) {
        info!("shell teardown");
        self.panels.hide_all();
        self.nav.shutdown();
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
