//! Wires the event tap to the drag controller.

use std::sync::mpsc;
use std::thread;

use presa_core::config::Config;
use presa_core::{DragController, EnabledFlag, classify, log_debug, log_info, log_warn};

use crate::cursor::MacCursor;
use crate::element::SystemTree;
use crate::event_tap::{self, TapHandle};
use crate::keys;
use crate::permission;

/// A boxed error type for engine startup failures.
///
/// Once running, the engine has no error path: every runtime failure is
/// absorbed into "nothing happens".
pub type EngineResult<T> = Result<T, Box<dyn std::error::Error>>;

/// The running drag engine.
///
/// Owns the tap thread and the processing thread. The enabled flag is
/// the only state shared with callers; everything else lives on the
/// processing thread.
pub struct Engine {
    enabled: EnabledFlag,
    tap: TapHandle,
    worker: thread::JoinHandle<()>,
}

impl Engine {
    /// Starts the engine: permission check, event tap, processing loop.
    ///
    /// The permission check never blocks startup. Without trust the tap
    /// may fail to register (an error here), or register and then find
    /// every accessibility query failing — either way no drag starts
    /// until rights are granted.
    pub fn start(config: &Config) -> EngineResult<Engine> {
        presa_core::log::init(&config.logging);

        if !permission::is_trusted() {
            permission::request_trust();
            log_warn!("accessibility permission not granted; drags will not start");
        }

        let modifier = keys::flags_for_name(&config.general.modifier)
            .ok_or_else(|| format!("unknown modifier '{}'", config.general.modifier))?;
        let enabled = EnabledFlag::new(config.general.enabled);

        let (tx, rx) = mpsc::channel();
        let tap = event_tap::start(tx, modifier)?;

        log_info!(
            "engine started (modifier: {}, enabled: {})",
            config.general.modifier,
            config.general.enabled
        );

        // The controller and its platform handles live entirely on this
        // thread; only pointer events cross into it.
        let gate = enabled.clone();
        let worker = thread::spawn(move || {
            let mut controller = DragController::new(SystemTree::new(), MacCursor);
            while let Ok(event) = rx.recv() {
                // Dispatch gate: while disabled every event is dropped
                // before classification, freezing any active drag in
                // place rather than cancelling it.
                if !gate.get() {
                    continue;
                }
                if let Some(action) = classify(&event, controller.is_dragging()) {
                    controller.handle(action);
                }
            }
            log_debug!("event channel closed; processing loop ending");
        });

        Ok(Engine {
            enabled,
            tap,
            worker,
        })
    }

    /// Toggles the dispatch gate. Safe to call from any thread.
    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.set(enabled);
        log_info!("engine {}", if enabled { "enabled" } else { "disabled" });
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.get()
    }

    /// Stops the tap and waits for both threads to finish.
    ///
    /// Stopping the tap drops the event sender, which ends the
    /// processing loop; after this returns no callback or controller
    /// code runs again.
    pub fn stop(self) {
        self.tap.stop();
        let _ = self.worker.join();
        log_info!("engine stopped");
    }

    /// Blocks until the engine dies on its own (it normally never does;
    /// this parks the foreground `start` command).
    pub fn wait(self) {
        let _ = self.worker.join();
    }
}
