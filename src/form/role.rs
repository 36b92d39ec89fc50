use super::error::FormError;
use crate::BOARD_SLOTS;
use crate::PLO5_CARDS;
use crate::STUD_DOWN_SLOTS;
use crate::STUD_UP_SLOTS;
use crate::SequenceId;

/// Whose Stud cards a slot holds.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Seat {
    Hero,
    /// The lone opponent of hand-vs-hand Stud.
    Villain,
    /// One opponent block of multi-opponent Stud.
    Block(SequenceId),
}

/// What a card slot means. Positions are 1-based, as the user sees them.
///
/// A role doubles as the slot's identifier: its [`Display`] form is the
/// string key the presentation layer addresses it by, e.g. `ploHand1`,
/// `ploBoard4`, `studYourUp2`, `studOpp3Down1`, and [`TryFrom<&str>`] reads
/// that key back.
///
/// [`Display`]: std::fmt::Display
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Role {
    /// Omaha hero hole card.
    Hand(u8),
    /// Omaha community card.
    Board(u8),
    /// Omaha opponent hole card (hand-vs-hand only).
    Opponent(u8),
    /// Stud down card.
    Down(Seat, u8),
    /// Stud up card, 3rd through 6th street.
    Up(Seat, u8),
}

impl Role {
    pub fn hand(n: usize) -> impl Iterator<Item = Role> {
        (1..=n as u8).map(Role::Hand)
    }
    pub fn board() -> impl Iterator<Item = Role> {
        (1..=BOARD_SLOTS as u8).map(Role::Board)
    }
    pub fn opponent(n: usize) -> impl Iterator<Item = Role> {
        (1..=n as u8).map(Role::Opponent)
    }
    /// Down cards then up cards of one Stud seat.
    pub fn stud(seat: Seat) -> impl Iterator<Item = Role> {
        let downs = (1..=STUD_DOWN_SLOTS as u8).map(move |i| Role::Down(seat, i));
        let ups = (1..=STUD_UP_SLOTS as u8).map(move |i| Role::Up(seat, i));
        downs.chain(ups)
    }

    pub fn seat(&self) -> Option<Seat> {
        match self {
            Role::Down(seat, _) | Role::Up(seat, _) => Some(*seat),
            _ => None,
        }
    }

    /// Placeholder text of the slot's picker.
    pub fn label(&self) -> String {
        match self {
            Role::Hand(i) => format!("Hand {}", i),
            Role::Opponent(i) => format!("Opp {}", i),
            Role::Board(1) => String::from("Flop 1"),
            Role::Board(2) => String::from("Flop 2"),
            Role::Board(3) => String::from("Flop 3"),
            Role::Board(4) => String::from("Turn"),
            Role::Board(_) => String::from("River"),
            Role::Down(_, i) => format!("Down {}", i),
            Role::Up(_, 1) => String::from("3rd St"),
            Role::Up(_, 2) => String::from("4th St"),
            Role::Up(_, 3) => String::from("5th St"),
            Role::Up(_, _) => String::from("6th St"),
        }
    }

    fn bounded(self) -> Option<Self> {
        let (i, max) = match self {
            Role::Hand(i) | Role::Opponent(i) => (i, PLO5_CARDS),
            Role::Board(i) => (i, BOARD_SLOTS),
            Role::Down(Seat::Block(0), _) | Role::Up(Seat::Block(0), _) => return None,
            Role::Down(_, i) => (i, STUD_DOWN_SLOTS),
            Role::Up(_, i) => (i, STUD_UP_SLOTS),
        };
        (1..=max as u8).contains(&i).then_some(self)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Role::Hand(i) => write!(f, "ploHand{}", i),
            Role::Board(i) => write!(f, "ploBoard{}", i),
            Role::Opponent(i) => write!(f, "ploOpp{}", i),
            Role::Down(seat, i) => write!(f, "{}Down{}", seat, i),
            Role::Up(seat, i) => write!(f, "{}Up{}", seat, i),
        }
    }
}
impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Seat::Hero => write!(f, "studYour"),
            Seat::Villain => write!(f, "studOpp"),
            Seat::Block(id) => write!(f, "studOpp{}", id),
        }
    }
}

/// str isomorphism over slot identifiers
impl TryFrom<&str> for Role {
    type Error = FormError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let unknown = || FormError::UnknownSlot(s.to_string());
        let index = |digits: &str| {
            digits
                .parse::<u8>()
                .ok()
                .filter(|i| i.to_string() == digits)
        };
        let street = |seat: Seat, rest: &str| {
            if let Some(i) = rest.strip_prefix("Down") {
                index(i).map(|i| Role::Down(seat, i))
            } else if let Some(i) = rest.strip_prefix("Up") {
                index(i).map(|i| Role::Up(seat, i))
            } else {
                None
            }
        };
        let role = if let Some(i) = s.strip_prefix("ploHand") {
            index(i).map(Role::Hand)
        } else if let Some(i) = s.strip_prefix("ploBoard") {
            index(i).map(Role::Board)
        } else if let Some(i) = s.strip_prefix("ploOpp") {
            index(i).map(Role::Opponent)
        } else if let Some(rest) = s.strip_prefix("studYour") {
            street(Seat::Hero, rest)
        } else if let Some(rest) = s.strip_prefix("studOpp") {
            let split = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
            match rest.split_at(split) {
                ("", rest) => street(Seat::Villain, rest),
                (id, rest) => id
                    .parse::<SequenceId>()
                    .ok()
                    .filter(|n| n.to_string() == id)
                    .and_then(|id| street(Seat::Block(id), rest)),
            }
        } else {
            None
        };
        role.and_then(Role::bounded).ok_or_else(unknown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_round_trip() {
        let roles = Role::hand(5)
            .chain(Role::board())
            .chain(Role::opponent(5))
            .chain(Role::stud(Seat::Hero))
            .chain(Role::stud(Seat::Villain))
            .chain(Role::stud(Seat::Block(12)));
        for role in roles {
            assert!(Role::try_from(role.to_string().as_str()) == Ok(role));
        }
    }

    #[test]
    fn identifiers_match_form_ids() {
        assert!(Role::Hand(1).to_string() == "ploHand1");
        assert!(Role::Board(4).to_string() == "ploBoard4");
        assert!(Role::Opponent(5).to_string() == "ploOpp5");
        assert!(Role::Down(Seat::Hero, 3).to_string() == "studYourDown3");
        assert!(Role::Up(Seat::Villain, 2).to_string() == "studOppUp2");
        assert!(Role::Down(Seat::Block(7), 1).to_string() == "studOpp7Down1");
    }

    #[test]
    fn rejects_out_of_range() {
        for id in ["ploHand0", "ploHand6", "ploBoard9", "studYourDown4", "studOppUp5", "studOpp0Up1", "studOppX", "foo", "ploHand"] {
            assert!(Role::try_from(id).is_err(), "{} should not resolve", id);
        }
    }

    #[test]
    fn rejects_non_canonical_digits() {
        for id in ["ploHand+1", "ploHand01", "ploBoard 2", "studYourUp+2", "studOpp01Down1", "studOpp+3Down1", "studOpp3Down01"] {
            assert!(Role::try_from(id).is_err(), "{} should not resolve", id);
        }
    }

    #[test]
    fn stud_seat_has_seven_slots() {
        let roles = Role::stud(Seat::Block(2)).collect::<Vec<_>>();
        assert!(roles.len() == 7);
        assert!(roles.iter().all(|r| r.seat() == Some(Seat::Block(2))));
        assert!(roles[3] == Role::Up(Seat::Block(2), 1));
    }

    #[test]
    fn labels() {
        assert!(Role::Board(1).label() == "Flop 1");
        assert!(Role::Board(5).label() == "River");
        assert!(Role::Up(Seat::Hero, 1).label() == "3rd St");
        assert!(Role::Up(Seat::Hero, 4).label() == "6th St");
        assert!(Role::Opponent(2).label() == "Opp 2");
    }
}
