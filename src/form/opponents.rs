use super::role::Role;
use super::role::Seat;
use crate::SequenceId;

/// One opponent of multi-opponent Stud: three down-card slots and four
/// up-card slots, addressed by a sequence id that outlives its neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpponentBlock(SequenceId);

impl OpponentBlock {
    pub fn id(&self) -> SequenceId {
        self.0
    }
    pub fn seat(&self) -> Seat {
        Seat::Block(self.0)
    }
    pub fn roles(&self) -> impl Iterator<Item = Role> {
        Role::stud(self.seat())
    }
}

/// Ordered arena of opponent blocks plus the session counter that names them.
///
/// The counter only moves forward. Removing a block never renumbers the
/// others and never frees its id; only [`Opponents::default`] (a full form
/// reset) starts counting from 1 again.
#[derive(Debug, Clone, Default)]
pub struct Opponents {
    blocks: Vec<OpponentBlock>,
    issued: SequenceId,
}

impl Opponents {
    pub fn add(&mut self) -> SequenceId {
        self.issued += 1;
        self.blocks.push(OpponentBlock(self.issued));
        self.issued
    }
    pub fn remove(&mut self, id: SequenceId) -> Option<OpponentBlock> {
        self.blocks
            .iter()
            .position(|b| b.id() == id)
            .map(|i| self.blocks.remove(i))
    }
    pub fn contains(&self, id: SequenceId) -> bool {
        self.blocks.iter().any(|b| b.id() == id)
    }
    pub fn iter(&self) -> impl Iterator<Item = &OpponentBlock> {
        self.blocks.iter()
    }
    pub fn ids(&self) -> Vec<SequenceId> {
        self.blocks.iter().map(OpponentBlock::id).collect()
    }
    pub fn len(&self) -> usize {
        self.blocks.len()
    }
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
    /// No id has been issued since the session started.
    pub fn is_fresh(&self) -> bool {
        self.issued == 0
    }
    /// Slots of every block, in block order.
    pub fn roles(&self) -> impl Iterator<Item = Role> + '_ {
        self.blocks.iter().flat_map(OpponentBlock::roles)
    }
}
