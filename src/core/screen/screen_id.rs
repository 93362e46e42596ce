//=========================================================================
// Screen Identifiers
//=========================================================================
//
// The fixed set of screens and the finish-code routing table between them.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;

//=== ScreenId ============================================================

/// Identifies a screen variant.
///
/// `Unknown` is the "no screen" sentinel: the director's state before the
/// first screen is activated and after shutdown, and the cleared endpoints
/// of an idle transition. It can never be registered or navigated to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScreenId {
    #[default]
    Unknown,
    Logo,
    Title,
    Options,
    Gameplay,
    Ending,
}

impl ScreenId {
    /// Every navigable screen, in flow order.
    pub const ALL: [ScreenId; 5] = [
        ScreenId::Logo,
        ScreenId::Title,
        ScreenId::Options,
        ScreenId::Gameplay,
        ScreenId::Ending,
    ];

    /// Returns `false` only for the `Unknown` sentinel.
    pub fn is_known(self) -> bool {
        self != ScreenId::Unknown
    }

    pub fn name(self) -> &'static str {
        match self {
            ScreenId::Unknown => "unknown",
            ScreenId::Logo => "logo",
            ScreenId::Title => "title",
            ScreenId::Options => "options",
            ScreenId::Gameplay => "gameplay",
            ScreenId::Ending => "ending",
        }
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

//=== Routing =============================================================

/// Maps a screen's finish code to the screen that follows it.
///
/// ```text
///   Logo      any nonzero → Title
///   Title     1 → Options, 2 → Gameplay
///   Options   any nonzero → Title
///   Gameplay  1 → Ending
///   Ending    1 → Title
/// ```
///
/// Returns `None` for code `0` and for any code the table doesn't list.
pub fn successor(current: ScreenId, code: i32) -> Option<ScreenId> {
    if code == 0 {
        return None;
    }

    match (current, code) {
        (ScreenId::Logo, _) => Some(ScreenId::Title),
        (ScreenId::Title, 1) => Some(ScreenId::Options),
        (ScreenId::Title, 2) => Some(ScreenId::Gameplay),
        (ScreenId::Options, _) => Some(ScreenId::Title),
        (ScreenId::Gameplay, 1) => Some(ScreenId::Ending),
        (ScreenId::Ending, 1) => Some(ScreenId::Title),
        _ => None,
    }
}

//=== Tests ===============================================================
