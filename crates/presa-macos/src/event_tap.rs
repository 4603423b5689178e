//! System-wide pointer and modifier monitoring via a CGEventTap.
//!
//! The tap runs a CFRunLoop on its own thread and forwards translated
//! events over a channel. The callback itself does O(1) work; all
//! window resolution happens on the receiving side.

use std::sync::mpsc::Sender;
use std::thread;

use core_foundation::runloop::{CFRunLoop, kCFRunLoopCommonModes};
use core_graphics::event::{
    CGEvent, CGEventFlags, CGEventTap, CGEventTapLocation, CGEventTapOptions,
    CGEventTapPlacement, CGEventType,
};

use presa_core::PointerEvent;

use crate::engine::EngineResult;
use crate::screen;

/// Handle for the tap thread.
///
/// After [`stop`](Self::stop) returns, the tap is unregistered, the
/// thread has exited, and no further events will be sent.
pub struct TapHandle {
    runloop: SendableRunLoop,
    handle: thread::JoinHandle<()>,
}

impl TapHandle {
    pub fn stop(self) {
        self.runloop.0.stop();
        let _ = self.handle.join();
    }
}

struct SendableRunLoop(CFRunLoop);

// SAFETY: the wrapped ref is only used to call CFRunLoopStop, which is
// documented as safe to call from any thread.
unsafe impl Send for SendableRunLoop {}

/// Starts the event tap on a new thread.
///
/// `modifier` is the flags mask that qualifies a press as a drag start.
/// Fails if the tap cannot be created, which is what happens when the
/// process lacks accessibility (input monitoring) rights.
pub fn start(tx: Sender<PointerEvent>, modifier: CGEventFlags) -> EngineResult<TapHandle> {
    let (ready_tx, ready_rx) = std::sync::mpsc::channel::<Result<SendableRunLoop, String>>();

    let handle = thread::spawn(move || {
        // Listen-only: we observe the stream, we never swallow or
        // rewrite events.
        let tap = match CGEventTap::new(
            CGEventTapLocation::Session,
            CGEventTapPlacement::HeadInsertEventTap,
            CGEventTapOptions::ListenOnly,
            vec![
                CGEventType::LeftMouseDown,
                CGEventType::LeftMouseDragged,
                CGEventType::LeftMouseUp,
                CGEventType::FlagsChanged,
            ],
            move |_proxy, kind, event| {
                if let Some(pointer_event) = translate(kind, event, modifier) {
                    let _ = tx.send(pointer_event);
                }
                None
            },
        ) {
            Ok(tap) => tap,
            Err(()) => {
                let _ = ready_tx.send(Err(
                    "failed to create event tap (accessibility permission missing?)".into(),
                ));
                return;
            }
        };

        let source = match tap.mach_port.create_runloop_source(0) {
            Ok(source) => source,
            Err(()) => {
                let _ = ready_tx.send(Err("failed to create run loop source for tap".into()));
                return;
            }
        };

        let runloop = CFRunLoop::get_current();
        // SAFETY: kCFRunLoopCommonModes is a static CFString provided by
        // CoreFoundation.
        runloop.add_source(&source, unsafe { kCFRunLoopCommonModes });
        tap.enable();

        let _ = ready_tx.send(Ok(SendableRunLoop(runloop)));

        CFRunLoop::run_current();
        // Run loop stopped: the tap and its source drop here, after
        // which nothing is sent on the channel again.
    });

    let runloop = ready_rx
        .recv()
        .map_err(|_| -> Box<dyn std::error::Error> { "event tap thread exited unexpectedly".into() })?
        .map_err(|e| -> Box<dyn std::error::Error> { e.into() })?;

    Ok(TapHandle { runloop, handle })
}

/// Translates a raw tap event into an engine pointer event.
///
/// Locations are flipped into the engine's bottom-left-origin space.
fn translate(
    kind: CGEventType,
    event: &CGEvent,
    modifier: CGEventFlags,
) -> Option<PointerEvent> {
    match kind {
        CGEventType::LeftMouseDown => Some(PointerEvent::ButtonDown {
            modifier_held: event.get_flags().contains(modifier),
            location: location_of(event),
        }),
        CGEventType::LeftMouseDragged => Some(PointerEvent::Drag {
            location: location_of(event),
        }),
        CGEventType::LeftMouseUp => Some(PointerEvent::ButtonUp),
        CGEventType::FlagsChanged => Some(PointerEvent::ModifiersChanged {
            modifier_held: event.get_flags().contains(modifier),
        }),
        _ => None,
    }
}

fn location_of(event: &CGEvent) -> presa_core::Point {
    let location = event.location();
    screen::flip_y(presa_core::Point::new(location.x, location.y))
}
