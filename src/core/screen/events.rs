//=========================================================================
// Director Events
//=========================================================================
//
// Notifications published by the director as screens change.
//
// Subscribers get their own crossbeam receiver. Publishing never blocks:
// channels are unbounded and disconnected subscribers are pruned on the
// next publish.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{unbounded, Receiver, Sender};
use log::debug;

//=== Internal Dependencies ===============================================

use super::ScreenId;

//=== DirectorEvent =======================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectorEvent {
    /// Screen was initialized and became current.
    ScreenEntered(ScreenId),

    /// Screen was unloaded.
    ScreenExited(ScreenId),

    /// A fade started; `from` stays current until the midpoint.
    TransitionStarted { from: ScreenId, to: ScreenId },

    /// The overlay reached full opacity and the screens were swapped.
    TransitionMidpoint { from: ScreenId, to: ScreenId },

    /// The overlay is clear again; `to` runs unobstructed.
    TransitionFinished(ScreenId),
}

//=== EventFanout =========================================================

#[derive(Debug, Default)]
pub(super) struct EventFanout {
    subscribers: Vec<Sender<DirectorEvent>>,
}

impl EventFanout {
    pub(super) fn subscribe(&mut self) -> Receiver<DirectorEvent> {
        let (tx, rx) = unbounded();
        self.subscribers.push(tx);
        rx
    }

    pub(super) fn publish(&mut self, event: DirectorEvent) {
        let before = self.subscribers.len();
        self.subscribers.retain(|tx| tx.send(event).is_ok());

        let dropped = before - self.subscribers.len();
        if dropped > 0 {
            debug!(target: "director", "Pruned {} disconnected event subscriber(s)", dropped);
        }
    }
}

//=== Tests ===============================================================
