//=========================================================================
// Input Buffer
//
// Collects input events between two frame boundaries.
//
// Responsibilities:
// - Store discrete events (keys, buttons) in arrival order
// - Drop immediate duplicates (OS key repeat floods KeyDown)
// - Coalesce cursor motion to the last reported position
// - Hand everything to the frame step via `drain()`
//
//=========================================================================

//=== Internal Modules ====================================================
use crate::core::input::InputEvent;

//=== InputBuffer Struct ==================================================
//
// Transient event store for one frame of input.
//
// Internally maintains:
// - `discrete`: ordered one-shot inputs (e.g., KeyDown)
// - `cursor`: last-known MouseMoved, if any arrived this frame
//
pub(crate) struct InputBuffer {
    discrete: Vec<InputEvent>,
    cursor: Option<InputEvent>,
}

impl InputBuffer {
    //--- Construction -----------------------------------------------------
    pub fn new() -> Self {
        const DISCRETE_BASE: usize = 64;

        Self {
            discrete: Vec::with_capacity(DISCRETE_BASE),
            cursor: None,
        }
    }

    //--- Event Handling ---------------------------------------------------
    //
    // Continuous events replace the previous one; discrete events append
    // unless identical to the last discrete event.
    //
    pub fn push(&mut self, event: InputEvent) {
        if !event.is_discrete() {
            self.cursor = Some(event);
        } else if self.discrete.last() != Some(&event) {
            self.discrete.push(event);
        }
    }

    //--- Drain ------------------------------------------------------------
    //
    // Returns this frame's events (discrete first, then the coalesced
    // cursor position) and leaves the buffer empty.
    //
    pub fn drain(&mut self) -> Vec<InputEvent> {
        let mut events: Vec<InputEvent> = self.discrete.drain(..).collect();
        events.extend(self.cursor.take());
        events
    }

    //--- Utilities --------------------------------------------------------
    pub fn len(&self) -> usize {
        self.discrete.len() + usize::from(self.cursor.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.discrete.is_empty() && self.cursor.is_none()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
