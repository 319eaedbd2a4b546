//! Intro briefing shown before the heist

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DialoguePage {
    pub speaker: &'static str,
    pub text: &'static str,
}

pub const BRIEFING: &[DialoguePage] = &[
    DialoguePage {
        speaker: "Curator",
        text: "The night shift is ours. Every treasure in this wing is about to go airborne.",
    },
    DialoguePage {
        speaker: "Curator",
        text: "Swipe through jewels, idols and paintings to grab them before they fall.",
    },
    DialoguePage {
        speaker: "Curator",
        text: "Leave the alarm bombs alone. Three alarms and the guards have you.",
    },
    DialoguePage {
        speaker: "Curator",
        text: "Collect enough loot and the vault is yours. Ready?",
    },
];

/// Page at `index`, if any
pub fn page(index: usize) -> Option<&'static DialoguePage> {
    BRIEFING.get(index)
}

/// Whether `index` is the final page
pub fn is_last_page(index: usize) -> bool {
    index + 1 >= BRIEFING.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pages_in_range() {
        assert!(page(0).is_some());
        assert!(page(BRIEFING.len()).is_none());
        assert!(is_last_page(BRIEFING.len() - 1));
        assert!(!is_last_page(0));
    }
}
