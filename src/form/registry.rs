use super::error::FormError;
use super::role::Role;
use super::slot::Slot;
use crate::cards::Card;
use std::collections::BTreeMap;

/// The set of card slots currently on the form, keyed and ordered by role.
///
/// The registry only stores; it never validates across slots. Whoever
/// mutates it is responsible for re-running the uniqueness validator.
#[derive(Debug, Clone, Default)]
pub struct Registry(BTreeMap<Role, Slot>);

impl Registry {
    /// Reconcile with the roles a configuration requires. New roles start
    /// empty, missing roles are destroyed with their values, surviving roles
    /// keep theirs.
    pub fn set_slots<I>(&mut self, roles: I)
    where
        I: IntoIterator<Item = Role>,
    {
        let mut next = roles
            .into_iter()
            .map(|role| (role, Slot::from(role)))
            .collect::<BTreeMap<Role, Slot>>();
        for (role, slot) in next.iter_mut() {
            if let Some(kept) = self.0.get(role) {
                *slot = *kept;
            }
        }
        let dropped = self.0.keys().filter(|r| !next.contains_key(*r)).count();
        let created = next.keys().filter(|r| !self.0.contains_key(*r)).count();
        log::debug!("slots reconciled: {} created, {} destroyed, {} total", created, dropped, next.len());
        self.0 = next;
    }

    /// Run a raw token through the card codec into the slot. A blank token
    /// empties the slot; an unparseable one empties it and marks it malformed.
    pub fn set_value(&mut self, role: Role, raw: &str) -> Result<Option<Card>, FormError> {
        let slot = self
            .0
            .get_mut(&role)
            .ok_or_else(|| FormError::UnknownSlot(role.to_string()))?;
        if raw.trim().is_empty() {
            slot.clear();
        } else {
            match Card::parse(raw) {
                Ok(card) => slot.fill(card),
                Err(e) => {
                    log::debug!("{} rejected {:?}: {}", role, raw, e);
                    slot.reject();
                }
            }
        }
        Ok(slot.value())
    }

    pub fn get_value(&self, role: Role) -> Option<Card> {
        self.0.get(&role).and_then(Slot::value)
    }
    pub fn get(&self, role: Role) -> Option<&Slot> {
        self.0.get(&role)
    }
    pub fn contains(&self, role: Role) -> bool {
        self.0.contains_key(&role)
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn slots(&self) -> impl Iterator<Item = &Slot> {
        self.0.values()
    }

    /// Filled slots only, in role order. This is what the validator scans.
    pub fn all_values(&self) -> Vec<(Role, Card)> {
        self.0
            .values()
            .filter_map(|slot| slot.value().map(|card| (slot.role(), card)))
            .collect()
    }

    pub fn malformed(&self) -> impl Iterator<Item = Role> + '_ {
        self.0
            .values()
            .filter(|slot| slot.is_malformed())
            .map(Slot::role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::role::Seat;

    fn card(s: &str) -> Card {
        Card::parse(s).unwrap()
    }

    #[test]
    fn creates_empty_slots() {
        let mut registry = Registry::default();
        registry.set_slots(Role::hand(4).chain(Role::board()));
        assert!(registry.len() == 9);
        assert!(registry.all_values().is_empty());
        assert!(registry.get_value(Role::Hand(1)).is_none());
    }

    #[test]
    fn keeps_surviving_values() {
        let mut registry = Registry::default();
        registry.set_slots(Role::stud(Seat::Hero).chain(Role::stud(Seat::Villain)));
        registry.set_value(Role::Down(Seat::Hero, 1), "As").unwrap();
        registry.set_value(Role::Down(Seat::Villain, 1), "Ks").unwrap();
        registry.set_slots(Role::stud(Seat::Hero).chain(Role::stud(Seat::Block(1))));
        assert!(registry.get_value(Role::Down(Seat::Hero, 1)) == Some(card("As")));
        assert!(!registry.contains(Role::Down(Seat::Villain, 1)));
        assert!(registry.all_values() == vec![(Role::Down(Seat::Hero, 1), card("As"))]);
    }

    #[test]
    fn destroyed_values_do_not_come_back() {
        let mut registry = Registry::default();
        registry.set_slots(Role::hand(5));
        registry.set_value(Role::Hand(5), "2c").unwrap();
        registry.set_slots(Role::hand(4));
        registry.set_slots(Role::hand(5));
        assert!(registry.get_value(Role::Hand(5)).is_none());
    }

    #[test]
    fn malformed_tokens_unfill() {
        let mut registry = Registry::default();
        registry.set_slots(Role::hand(4));
        assert!(registry.set_value(Role::Hand(1), "10h") == Ok(Some(card("Th"))));
        assert!(registry.set_value(Role::Hand(1), "1h") == Ok(None));
        assert!(registry.get(Role::Hand(1)).map(Slot::is_malformed) == Some(true));
        assert!(registry.malformed().collect::<Vec<_>>() == vec![Role::Hand(1)]);
        assert!(registry.set_value(Role::Hand(1), "qd") == Ok(Some(card("Qd"))));
        assert!(registry.malformed().next().is_none());
    }

    #[test]
    fn blank_tokens_clear_without_error() {
        let mut registry = Registry::default();
        registry.set_slots(Role::hand(4));
        registry.set_value(Role::Hand(2), "Jc").unwrap();
        assert!(registry.set_value(Role::Hand(2), "  ") == Ok(None));
        assert!(registry.get(Role::Hand(2)).map(Slot::is_malformed) == Some(false));
    }

    #[test]
    fn unknown_slot() {
        let mut registry = Registry::default();
        registry.set_slots(Role::hand(4));
        assert!(registry.set_value(Role::Hand(5), "As") == Err(FormError::UnknownSlot(String::from("ploHand5"))));
    }
}
