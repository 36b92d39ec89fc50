use super::role::Role;
use crate::cards::Card;
use std::collections::BTreeSet;
use std::collections::HashMap;

/// Slots currently flagged as holding a duplicated card.
pub type Validation = BTreeSet<Role>;

/// Every key whose card appears more than once among `filled`.
///
/// Two passes over the full set: count each card, then emit every key whose
/// card was counted at least twice. A duplicate therefore flags all of its
/// participants, not just the later occurrences, and the result does not
/// depend on input order.
///
/// The live form and the request builder both call this, so the two can
/// never disagree about what a duplicate is.
pub fn revalidate<K, I>(filled: I) -> BTreeSet<K>
where
    K: Ord,
    I: IntoIterator<Item = (K, Card)>,
{
    let filled = filled.into_iter().collect::<Vec<(K, Card)>>();
    let mut counts = HashMap::<Card, usize>::with_capacity(filled.len());
    for (_, card) in filled.iter() {
        *counts.entry(*card).or_default() += 1;
    }
    filled
        .into_iter()
        .filter(|(_, card)| counts.get(card).is_some_and(|n| *n >= 2))
        .map(|(key, _)| key)
        .collect()
}

/// Whether any card repeats. The build-time form of [`revalidate`].
pub fn has_duplicates<'a, I>(cards: I) -> bool
where
    I: IntoIterator<Item = &'a Card>,
{
    !revalidate(cards.into_iter().copied().enumerate()).is_empty()
}
