use super::error::BuildError;
use super::options::Options;
use crate::FLOP_CARDS;
use crate::dto::OmahaGame;
use crate::dto::OmahaRequest;
use crate::dto::Opposition;
use crate::dto::Request;
use crate::dto::StudHand;
use crate::dto::StudRangeRequest;
use crate::dto::StudRequest;
use crate::form::OpponentMode;
use crate::form::Snapshot;
use crate::form::StudGame;
use crate::form::Variant;
use crate::form::has_duplicates;

/// Turn a form snapshot into the request for its variant and opponent mode.
///
/// Pure: the same inputs always give the same request or the same error.
/// Checks run in a fixed order and the first failure is returned:
/// completeness of hero and board, then opponent completeness, then a
/// duplicate scan over every card the assembled request carries.
pub fn build(
    variant: Variant,
    mode: OpponentMode,
    snapshot: &Snapshot,
    options: &Options,
) -> Result<Request, BuildError> {
    let request = match variant {
        Variant::Plo4 => omaha(OmahaGame::Plo4, mode, snapshot, options)?,
        Variant::Plo5 => omaha(OmahaGame::Plo5, mode, snapshot, options)?,
        Variant::Stud(game) => stud(game, mode, snapshot, options)?,
    };
    if has_duplicates(&request.cards()) {
        return Err(BuildError::Duplicate);
    }
    Ok(request)
}

fn omaha(
    game: OmahaGame,
    mode: OpponentMode,
    snapshot: &Snapshot,
    options: &Options,
) -> Result<Request, BuildError> {
    let n = match game {
        OmahaGame::Plo4 => crate::PLO4_CARDS,
        OmahaGame::Plo5 => crate::PLO5_CARDS,
    };
    if snapshot.hand.len() != n {
        return Err(BuildError::IncompleteHand(n));
    }
    if (1..FLOP_CARDS).contains(&snapshot.board.len()) {
        return Err(BuildError::PartialBoard);
    }
    let opponent = match mode {
        OpponentMode::Single if snapshot.opponent.len() == n => Opposition::Hand(snapshot.opponent.clone()),
        OpponentMode::Single => return Err(BuildError::IncompleteOpponent(n)),
        OpponentMode::Range if snapshot.range.is_empty() => return Err(BuildError::EmptyRange),
        OpponentMode::Range => Opposition::Range(snapshot.range.clone()),
    };
    Ok(Request::Omaha(OmahaRequest {
        game_type: game,
        hand: snapshot.hand.clone(),
        board: Some(snapshot.board.clone()).filter(|b| !b.is_empty()),
        opponent,
        precision: options.precision,
    }))
}

fn stud(
    game: StudGame,
    mode: OpponentMode,
    snapshot: &Snapshot,
    options: &Options,
) -> Result<Request, BuildError> {
    if snapshot.hero.is_empty() {
        return Err(BuildError::EmptyStudHand);
    }
    match mode {
        OpponentMode::Single => Ok(Request::Stud(StudRequest {
            your_down_cards: snapshot.hero.down.clone(),
            your_up_cards: snapshot.hero.up.clone(),
            opponent_down_cards: snapshot.villain.down.clone(),
            opponent_up_cards: snapshot.villain.up.clone(),
            game_type: game,
            precision: options.precision,
        })),
        OpponentMode::Range => {
            let opponents = snapshot
                .blocks
                .iter()
                .filter(|(_, holding)| !holding.is_empty())
                .map(|(_, holding)| StudHand::from(holding.clone()))
                .collect::<Vec<StudHand>>();
            if opponents.is_empty() {
                return Err(BuildError::NoOpponents);
            }
            Ok(Request::StudRange(StudRangeRequest {
                your_down_cards: snapshot.hero.down.clone(),
                your_up_cards: snapshot.hero.up.clone(),
                opponent_range: opponents,
                game_type: game,
                precision: options.precision,
            }))
        }
    }
}
