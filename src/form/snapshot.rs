use super::opponents::Opponents;
use super::registry::Registry;
use super::role::Role;
use super::role::Seat;
use crate::PLO5_CARDS;
use crate::SequenceId;
use crate::cards::Card;

/// One Stud seat's filled cards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Holding {
    pub down: Vec<Card>,
    pub up: Vec<Card>,
}

impl Holding {
    fn capture(registry: &Registry, seat: Seat) -> Self {
        let mut holding = Self::default();
        for role in Role::stud(seat) {
            match (role, registry.get_value(role)) {
                (Role::Down(..), Some(card)) => holding.down.push(card),
                (Role::Up(..), Some(card)) => holding.up.push(card),
                _ => continue,
            }
        }
        holding
    }
    pub fn is_empty(&self) -> bool {
        self.down.is_empty() && self.up.is_empty()
    }
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.down.iter().chain(self.up.iter())
    }
}

/// Everything the form holds at the moment of a submit, partitioned by role.
/// Unfilled slots are simply absent. Taken fresh per submit attempt and
/// never updated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    /// Omaha hero hole cards.
    pub hand: Vec<Card>,
    /// Omaha community cards.
    pub board: Vec<Card>,
    /// Omaha opponent hole cards.
    pub opponent: Vec<Card>,
    /// Omaha opponent range text, trimmed.
    pub range: String,
    /// Stud hero.
    pub hero: Holding,
    /// Stud hand-vs-hand opponent.
    pub villain: Holding,
    /// Stud multi-opponent blocks, in block order.
    pub blocks: Vec<(SequenceId, Holding)>,
}

impl Snapshot {
    pub fn capture(registry: &Registry, opponents: &Opponents, range: &str) -> Self {
        Self {
            hand: Self::pick(registry, Role::hand(PLO5_CARDS)),
            board: Self::pick(registry, Role::board()),
            opponent: Self::pick(registry, Role::opponent(PLO5_CARDS)),
            range: range.trim().to_string(),
            hero: Holding::capture(registry, Seat::Hero),
            villain: Holding::capture(registry, Seat::Villain),
            blocks: opponents
                .iter()
                .map(|block| (block.id(), Holding::capture(registry, block.seat())))
                .collect(),
        }
    }
    fn pick<I>(registry: &Registry, roles: I) -> Vec<Card>
    where
        I: IntoIterator<Item = Role>,
    {
        roles
            .into_iter()
            .filter_map(|role| registry.get_value(role))
            .collect()
    }
}
