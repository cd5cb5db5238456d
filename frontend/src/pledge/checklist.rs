use std::collections::BTreeSet;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PledgeItem {
    pub id: u32,
    pub text: &'static str,
    pub icon: &'static str,
}

pub const PLEDGES: [PledgeItem; 8] = [
    PledgeItem { id: 1, text: "I pledge to buy second-hand first.", icon: "🏷️" },
    PledgeItem { id: 2, text: "I will wear my clothes at least 30 times.", icon: "🔄" },
    PledgeItem { id: 3, text: "I will repair before I replace.", icon: "🧵" },
    PledgeItem { id: 4, text: "I will not treat clothing as disposable.", icon: "🚫" },
    PledgeItem { id: 5, text: "I will support ethical, durable brands.", icon: "🌿" },
    PledgeItem { id: 6, text: "I will wash clothes less to save water & fiber.", icon: "💧" },
    PledgeItem { id: 7, text: "I will donate responsibly, not dump trash.", icon: "📦" },
    PledgeItem { id: 8, text: "I will spread the word about #ReDressTheWorld.", icon: "🗣️" },
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PledgeError {
    #[error("no pledge with id {0}")]
    UnknownItem(u32),
}

/// Which of the [`PLEDGES`] the visitor has ticked. Order of ticking is irrelevant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PledgeChecklist {
    checked: BTreeSet<u32>,
}

impl PledgeChecklist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips the item and returns whether it is now checked.
    pub fn toggle(&mut self, id: u32) -> Result<bool, PledgeError> {
        if !PLEDGES.iter().any(|p| p.id == id) {
            return Err(PledgeError::UnknownItem(id));
        }
        if self.checked.remove(&id) {
            Ok(false)
        } else {
            self.checked.insert(id);
            Ok(true)
        }
    }

    pub fn is_checked(&self, id: u32) -> bool {
        self.checked.contains(&id)
    }

    pub fn checked_count(&self) -> usize {
        self.checked.len()
    }

    pub fn all_checked(&self) -> bool {
        self.checked.len() == PLEDGES.len()
    }

    pub fn progress_percent(&self) -> f64 {
        self.checked.len() as f64 / PLEDGES.len() as f64 * 100.0
    }

    pub fn cta_label(&self) -> &'static str {
        if self.all_checked() {
            "PLAY OCEAN RESCUE"
        } else {
            "PLAY GAME"
        }
    }
}
