//! End-to-end acceptance for the shell wiring: startup sequence, command
//! dispatch, profile switch fan-out, and teardown.

use std::sync::{Arc, Mutex};

use shared::{domain::PanelKind, protocol::ShellCommand};
use shell_core::{
    NavigationController, Panel, PanelCoordinator, PointerControl, Profile, ProfileStore, Shell,
    View, ViewBinding, ViewRegistry,
};

#[derive(Clone, Default)]
struct CallLog(Arc<Mutex<Vec<String>>>);

impl CallLog {
    fn push(&self, entry: impl Into<String>) {
        self.0.lock().expect("log lock").push(entry.into());
    }

    fn entries(&self) -> Vec<String> {
        self.0.lock().expect("log lock").clone()
    }

    fn count_of(&self, needle: &str) -> usize {
        self.entries().iter().filter(|e| *e == needle).count()
    }
}

struct RecordingView {
    tag: &'static str,
    log: CallLog,
}

impl View for RecordingView {
    fn enter(&mut self) {
        self.log.push(format!("{}:enter", self.tag));
    }

    fn leave(&mut self) {
        self.log.push(format!("{}:leave", self.tag));
    }

    fn refresh_profile(&mut self, profile: &Profile) {
        self.log
            .push(format!("{}:refresh:cam{}", self.tag, profile.camera.device_index));
    }
}

struct RecordingPanel {
    tag: &'static str,
    log: CallLog,
}

impl Panel for RecordingPanel {
    fn enter(&mut self) {
        self.log.push(format!("{}:enter", self.tag));
    }

    fn leave(&mut self) {
        self.log.push(format!("{}:leave", self.tag));
    }

    fn highlight(&mut self, target: &str) {
        self.log.push(format!("{}:highlight:{target}", self.tag));
    }
}

struct RecordingPointer {
    log: CallLog,
}

impl PointerControl for RecordingPointer {
    fn set_active(&mut self, active: bool) {
        self.log.push(format!("pointer:{active}"));
    }
}

const PAGES: [(&str, ViewBinding); 5] = [
    ("page_home", ViewBinding::Static),
    ("page_camera", ViewBinding::ProfileBound),
    ("page_cursor", ViewBinding::ProfileBound),
    ("page_gestures", ViewBinding::ProfileBound),
    ("page_keyboard", ViewBinding::ProfileBound),
];

fn build_shell(log: &CallLog) -> Shell {
    let mut registry = ViewRegistry::new();
    for (name, binding) in PAGES {
        let tag = name.strip_prefix("page_").unwrap_or(name);
        registry
            .register(
                name,
                Box::new(RecordingView {
                    tag,
                    log: log.clone(),
                }),
                binding,
            )
            .expect("register");
    }

    let panels = PanelCoordinator::new(
        Box::new(RecordingPanel {
            tag: "menu",
            log: log.clone(),
        }),
        Box::new(RecordingPanel {
            tag: "preview",
            log: log.clone(),
        }),
        Box::new(RecordingPointer { log: log.clone() }),
    );

    Shell::new(NavigationController::new(registry), panels)
}

#[test]
fn full_session_walkthrough() {
    let log = CallLog::default();
    let mut shell = build_shell(&log);

    // Startup: panels up first, then the mandatory initial navigation.
    shell.panels_mut().show(PanelKind::Menu);
    shell.panels_mut().show(PanelKind::Preview);
    shell
        .handle_command(ShellCommand::ChangePage {
            target: "page_home".to_string(),
        })
        .expect("initial navigation");

    assert_eq!(shell.nav().active_view(), Some("page_home"));
    assert_eq!(shell.panels().highlighted(), Some("page_home"));
    assert_eq!(log.count_of("home:enter"), 1);

    // Walk through the configuration pages.
    shell
        .handle_command(ShellCommand::ChangePage {
            target: "page_camera".to_string(),
        })
        .expect("to camera");
    shell
        .handle_command(ShellCommand::ChangePage {
            target: "page_gestures".to_string(),
        })
        .expect("to gestures");

    assert_eq!(log.count_of("home:leave"), 1);
    assert_eq!(log.count_of("camera:enter"), 1);
    assert_eq!(log.count_of("camera:leave"), 1);
    assert_eq!(log.count_of("gestures:enter"), 1);
    assert_eq!(shell.panels().highlighted(), Some("page_gestures"));

    // Unknown target: surfaced, state untouched.
    shell
        .handle_command(ShellCommand::ChangePage {
            target: "page_profile".to_string(),
        })
        .expect_err("unknown view");
    assert_eq!(shell.nav().active_view(), Some("page_gestures"));

    // Preview toggle rides through to the pointer controller.
    shell
        .handle_command(ShellCommand::ToggleSwitch {
            switch_status: true,
        })
        .expect("enable");
    shell
        .handle_command(ShellCommand::ToggleSwitch {
            switch_status: false,
        })
        .expect("disable");
    assert_eq!(log.count_of("pointer:true"), 1);
    assert_eq!(log.count_of("pointer:false"), 1);

    // Teardown leaves the panels and the active view; nothing stays active.
    shell.shutdown();
    assert_eq!(log.count_of("preview:leave"), 1);
    assert_eq!(log.count_of("menu:leave"), 1);
    assert_eq!(log.count_of("gestures:leave"), 1);
    assert_eq!(shell.nav().active_view(), None);
    let still_active = shell
        .nav()
        .registry()
        .summaries()
        .into_iter()
        .filter(|s| s.state == shared::domain::LifecycleState::Active)
        .count();
    assert_eq!(still_active, 0);
}

#[test]
fn profile_switch_fans_out_to_the_configuration_pages() {
    let log = CallLog::default();
    let mut shell = build_shell(&log);
    shell
        .handle_command(ShellCommand::ChangePage {
            target: "page_home".to_string(),
        })
        .expect("initial navigation");

    let dir = tempfile::tempdir().expect("tempdir");
    let mut store = ProfileStore::open(dir.path(), "default").expect("open");

    let mut travel = Profile::with_default_bindings();
    travel.camera.device_index = 3;
    store.save("travel", &travel).expect("save travel");

    let loaded = store.set_current("travel").expect("switch");
    shell.refresh_profile(&loaded);

    // Only the profile-bound pages refresh, each exactly once, with the
    // switched profile's data. Home stays untouched.
    for tag in ["camera", "cursor", "gestures", "keyboard"] {
        assert_eq!(log.count_of(&format!("{tag}:refresh:cam3")), 1, "{tag}");
    }
    assert!(!log.entries().iter().any(|e| e.starts_with("home:refresh")));
}
