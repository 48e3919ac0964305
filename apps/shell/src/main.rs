use std::{
    io::{self, BufRead},
    path::PathBuf,
    thread,
};

use anyhow::Result;
use clap::Parser;
use crossbeam_channel::{bounded, never, select};
use tracing_subscriber::EnvFilter;

mod bridge;
mod controller;
mod pages;
mod settings;

use bridge::ChannelPointerControl;
use controller::events::WorkerEvent;
use controller::input::{parse_line, DriverAction, HELP_TEXT};
use shared::{
    domain::{LifecycleState, PanelKind},
    protocol::ShellCommand,
};
use shell_core::{NavigationController, PanelCoordinator, ProfileStore, Shell};

#[derive(Parser, Debug)]
struct Args {
    /// Profile to activate at startup (overrides the settings file).
    #[arg(long)]
    profile: Option<String>,
    /// Path to the settings file.
    #[arg(long, default_value = "shell.toml")]
    config: PathBuf,
    /// Run the startup sequence, print status, and exit.
    #[arg(long)]
    check: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let args = Args::parse();

    let file_settings = settings::load_settings(&args.config);
    let profile_name = args
        .profile
        .unwrap_or_else(|| file_settings.profile.clone());
    let profiles_dir = settings::resolve_profiles_dir(&file_settings)?;
    let mut store = ProfileStore::open(&profiles_dir, profile_name)?;
    let profile = store.load(store.current_name())?;

    let (cmd_tx, cmd_rx) = bounded(file_settings.pointer_queue_depth);
    let (event_tx, mut event_rx) = bounded(64);
    let worker = bridge::runtime::launch(cmd_rx, event_tx);

    let registry = pages::build_registry(&profile)?;
    let panels = PanelCoordinator::new(
        Box::new(pages::MenuFrame::new()),
        Box::new(pages::PreviewFrame),
        Box::new(ChannelPointerControl::new(cmd_tx.clone())),
    );
    let mut shell = Shell::new(NavigationController::new(registry), panels);

    // Startup: always-on panels first, then the mandatory initial page.
    shell.panels_mut().show(PanelKind::Menu);
    shell.panels_mut().show(PanelKind::Preview);
    shell.handle_command(ShellCommand::ChangePage {
        target: pages::PAGE_HOME.to_string(),
    })?;

    let mut pointer_active = false;

    if args.check {
        print_status(&shell, &store, pointer_active);
        shell.shutdown();
        drop(shell);
        drop(cmd_tx);
        let _ = worker.join();
        return Ok(());
    }

    let (line_tx, line_rx) = bounded::<String>(16);
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if line_tx.send(line).is_err() {
                break;
            }
        }
    });

    println!("{HELP_TEXT}");
    loop {
        select! {
            recv(line_rx) -> line => {
                // Closed stdin means the session is over.
                let Ok(line) = line else { break };
                if line.trim().is_empty() {
                    continue;
                }
                match parse_line(&line) {
                    Ok(DriverAction::Shell(cmd)) => {
                        if let Err(err) = shell.handle_command(cmd) {
                            println!("error: {err}");
                        }
                    }
                    Ok(DriverAction::SwitchProfile { name }) => match store.set_current(&name) {
                        Ok(profile) => {
                            shell.refresh_profile(&profile);
                            println!("profile '{name}' active");
                        }
                        Err(err) => println!("error: {err:#}"),
                    },
                    Ok(DriverAction::ListProfiles) => match store.list() {
                        Ok(names) => {
                            for name in names {
                                let marker = if name == store.current_name() { "*" } else { " " };
                                println!("{marker} {name}");
                            }
                        }
                        Err(err) => println!("error: {err:#}"),
                    },
                    Ok(DriverAction::Status) => print_status(&shell, &store, pointer_active),
                    Ok(DriverAction::Help) => println!("{HELP_TEXT}"),
                    Ok(DriverAction::Quit) => break,
                    Err(message) => println!("{message}"),
                }
            }
            recv(event_rx) -> event => {
                match event {
                    Ok(WorkerEvent::PointerState { active }) => pointer_active = active,
                    Ok(WorkerEvent::Info(message)) => tracing::debug!(%message, "pointer worker"),
                    Err(_) => {
                        tracing::warn!("pointer worker event channel closed");
                        event_rx = never();
                    }
                }
            }
        }
    }

    shell.shutdown();
    drop(shell);
    drop(cmd_tx);
    if worker.join().is_err() {
        tracing::warn!("pointer worker exited abnormally");
    }
    Ok(())
}

fn print_status(shell: &Shell, store: &ProfileStore, pointer_active: bool) {
    println!("profile: {}", store.current_name());
    println!(
        "pointer: {}",
        if pointer_active { "active" } else { "inactive" }
    );
    for kind in [PanelKind::Menu, PanelKind::Preview] {
        println!(
            "panel {}: {}",
            kind.label(),
            if shell.panels().is_shown(kind) {
                "shown"
            } else {
                "hidden"
            }
        );
    }
    for summary in shell.nav().registry().summaries() {
        let marker = if summary.state == LifecycleState::Active {
            "*"
        } else {
            " "
        };
        let visibility = if summary.visible { "visible" } else { "hidden" };
        println!("{marker} {} ({visibility})", summary.name);
    }
}
