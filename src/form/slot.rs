use super::role::Role;
use crate::cards::Card;
use serde::Serialize;

/// One card-input position on the form.
///
/// `malformed` is the per-slot format error: the last token typed here did
/// not parse, so the slot holds no card. Duplicate errors are tracked by the
/// validator, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    role: Role,
    value: Option<Card>,
    malformed: bool,
}

impl From<Role> for Slot {
    fn from(role: Role) -> Self {
        Self {
            role,
            value: None,
            malformed: false,
        }
    }
}

impl Slot {
    pub fn role(&self) -> Role {
        self.role
    }
    pub fn value(&self) -> Option<Card> {
        self.value
    }
    pub fn is_malformed(&self) -> bool {
        self.malformed
    }

    pub fn fill(&mut self, card: Card) {
        self.value = Some(card);
        self.malformed = false;
    }
    pub fn clear(&mut self) {
        self.value = None;
        self.malformed = false;
    }
    pub fn reject(&mut self) {
        self.value = None;
        self.malformed = true;
    }
}

/// What the presentation layer needs to draw one slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotView {
    pub id: String,
    pub label: String,
    pub value: Option<Card>,
    pub malformed: bool,
    pub duplicate: bool,
}
