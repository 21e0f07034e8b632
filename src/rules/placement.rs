//! The placement routine shared by the live engine and the simulator.
//!
//! Order of effects for a placement by the player to move:
//!
//! 1. Validate (game running, coordinate on board and empty, card in hand).
//!    Nothing is touched if any check fails.
//! 2. Move the hand's copy of the card onto the board, owned by the player.
//! 3. Build attack events for Up, Down, Left, Right from the board as it is
//!    now. Off-board, empty and friendly neighbours produce no event.
//! 4. Resolve the events one by one, flipping ownership on success.
//! 5. Pass the turn and recompute the terminal flag.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::Board;
use crate::cards::Card;
use crate::combat::{AttackEvent, AttackOutcome, CombatResolver, TieBreaker};
use crate::core::{Coord, Direction, GameState, PlayerId, Result, TarockError};

/// What a placement did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub player: PlayerId,
    pub coord: Coord,
    pub card: Card,
    /// Every attack the placement caused, in resolution order.
    pub attacks: SmallVec<[(AttackEvent, AttackOutcome); 4]>,
    /// Whether this placement filled the board.
    pub ended: bool,
}

impl Placement {
    /// Coordinates that changed hands.
    pub fn captured(&self) -> impl Iterator<Item = Coord> + '_ {
        self.attacks
            .iter()
            .filter(|(_, outcome)| outcome.success)
            .map(|(event, _)| event.defender_coord)
    }

    /// Number of coin flips the placement needed.
    #[must_use]
    pub fn coin_flips(&self) -> usize {
        self.attacks.iter().filter(|(_, o)| o.coin_flip.is_some()).count()
    }
}

/// Check that the player to move may put `card` on `coord`.
pub fn validate(state: &GameState, coord: Coord, card: &Card) -> Result<()> {
    if state.is_ended() {
        return Err(TarockError::GameOver);
    }
    if !state.board().is_empty(coord)? {
        return Err(TarockError::CellOccupied(coord));
    }
    let player = state.next_player();
    if !state.hand_contains(player, card) {
        return Err(TarockError::CardNotInHand {
            player,
            card: card.name().to_string(),
        });
    }
    Ok(())
}

/// Attack events caused by `attacker` sitting at `coord`, in direction order.
#[must_use]
pub fn attack_events(
    board: &Board,
    coord: Coord,
    attacker: &Card,
    player: PlayerId,
) -> SmallVec<[AttackEvent; 4]> {
    let mut events = SmallVec::new();

    for direction in Direction::ALL {
        // Off the edge of the board: no neighbour, no attack.
        let Ok(neighbor) = Board::adjacent_coord(coord, direction) else {
            continue;
        };
        let Some(occupant) = board.cell(neighbor).ok().and_then(|cell| cell.occupant()) else {
            continue;
        };
        if occupant.owner == player {
            tracing::trace!(%coord, %neighbor, "friendly neighbour, no attack");
            continue;
        }
        events.push(AttackEvent::new(
            attacker.clone(),
            occupant.card.clone(),
            coord,
            neighbor,
            player,
        ));
    }

    events
}

/// Apply a placement to `state` in place.
///
/// `on_coin_flip` hears about each tie-break before its outcome is
/// written to the board.
pub fn apply_placement(
    state: &mut GameState,
    coord: Coord,
    card: &Card,
    tie_breaker: &mut dyn TieBreaker,
    on_coin_flip: &mut dyn FnMut(&AttackEvent, PlayerId),
) -> Result<Placement> {
    validate(state, coord, card)?;

    let player = state.next_player();
    let placed = state
        .take_from_hand(player, card)
        .ok_or_else(|| TarockError::CardNotInHand {
            player,
            card: card.name().to_string(),
        })?;
    state.board_mut().place(coord, placed.clone(), player)?;

    let events = attack_events(state.board(), coord, &placed, player);
    let mut attacks = SmallVec::new();
    for event in events {
        let outcome = CombatResolver::resolve(&event, tie_breaker, on_coin_flip)?;
        tracing::debug!(%event, success = outcome.success, coin_flip = outcome.coin_flip.is_some(), "attack resolved");
        if outcome.success {
            state.board_mut().set_owner(event.defender_coord, player)?;
        }
        attacks.push((event, outcome));
    }

    state.finish_turn();

    Ok(Placement {
        player,
        coord,
        card: placed,
        attacks,
        ended: state.is_ended(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::FixedTieBreaker;
    use crate::core::{DirectionSet, PlayerPair};

    fn card(name: &str, attack: u32, defense: u32) -> Card {
        Card::new(name, attack, defense, DirectionSet::empty())
    }

    fn noop() -> impl FnMut(&AttackEvent, PlayerId) {
        |_: &AttackEvent, _: PlayerId| {}
    }

    fn board_with(cells: &[(Coord, &str, PlayerId)]) -> Board {
        let mut board = Board::new();
        for (coord, name, owner) in cells {
            board.place(*coord, card(name, 1, 1), *owner).unwrap();
        }
        board
    }

    #[test]
    fn test_attack_events_skip_empty_friendly_and_edges() {
        let board = board_with(&[
            (Coord::new(0, 0), "enemy-up", PlayerId::SECOND),
            (Coord::new(1, 1), "friend-right", PlayerId::FIRST),
            (Coord::new(2, 0), "enemy-down", PlayerId::SECOND),
        ]);
        let attacker = card("attacker", 5, 5);

        let events = attack_events(&board, Coord::new(1, 0), &attacker, PlayerId::FIRST);
        let targets: Vec<_> = events.iter().map(|e| e.defender_coord).collect();

        assert_eq!(targets, vec![Coord::new(0, 0), Coord::new(2, 0)]);
        assert!(events.iter().all(|e| e.attacker_coord == Coord::new(1, 0)));
        assert!(events.iter().all(|e| e.initiating_player == PlayerId::FIRST));
    }

    #[test]
    fn test_attack_events_in_direction_order() {
        let board = board_with(&[
            (Coord::new(1, 2), "right", PlayerId::SECOND),
            (Coord::new(1, 0), "left", PlayerId::SECOND),
            (Coord::new(2, 1), "down", PlayerId::SECOND),
            (Coord::new(0, 1), "up", PlayerId::SECOND),
        ]);

        let events = attack_events(&board, Coord::new(1, 1), &card("c", 1, 1), PlayerId::FIRST);
        let names: Vec<_> = events.iter().map(|e| e.defender.name().to_string()).collect();
        assert_eq!(names, vec!["up", "down", "left", "right"]);
    }

    #[test]
    fn test_validate_errors() {
        let mut state = GameState::new(
            PlayerPair::new(vec![card("a", 1, 1), card("b", 1, 1)], vec![card("z", 1, 1)]),
            PlayerId::FIRST,
        );
        apply_placement(
            &mut state,
            Coord::new(0, 0),
            &card("a", 1, 1),
            &mut FixedTieBreaker(PlayerId::FIRST),
            &mut noop(),
        )
        .unwrap();

        // Second player to move now.
        assert_eq!(
            validate(&state, Coord::new(0, 0), &card("z", 1, 1)),
            Err(TarockError::CellOccupied(Coord::new(0, 0)))
        );
        assert_eq!(
            validate(&state, Coord::new(0, 1), &card("b", 1, 1)),
            Err(TarockError::CardNotInHand {
                player: PlayerId::SECOND,
                card: "b".into()
            })
        );
        assert_eq!(
            validate(&state, Coord::new(3, 1), &card("z", 1, 1)),
            Err(TarockError::OutOfBounds { row: 3, col: 1 })
        );
        assert!(validate(&state, Coord::new(0, 1), &card("z", 1, 1)).is_ok());
    }

    #[test]
    fn test_failed_validation_leaves_state_untouched() {
        let mut state = GameState::new(
            PlayerPair::new(vec![card("a", 1, 1)], vec![card("z", 1, 1)]),
            PlayerId::FIRST,
        );
        let before = state.clone();

        let err = apply_placement(
            &mut state,
            Coord::new(1, 1),
            &card("z", 1, 1),
            &mut FixedTieBreaker(PlayerId::FIRST),
            &mut noop(),
        );

        assert!(err.is_err());
        assert_eq!(state, before);
    }

    #[test]
    fn test_placed_card_is_the_hand_copy() {
        let mut state = GameState::new(
            PlayerPair::new(vec![card("a", 7, 2)], vec![]),
            PlayerId::FIRST,
        );

        // Same name, different stats: identity is by name.
        let placement = apply_placement(
            &mut state,
            Coord::new(2, 2),
            &card("a", 0, 0),
            &mut FixedTieBreaker(PlayerId::FIRST),
            &mut noop(),
        )
        .unwrap();

        assert_eq!(placement.card.attack(), 7);
        let on_board = state.board().cell(Coord::new(2, 2)).unwrap().card().unwrap();
        assert_eq!(on_board.attack(), 7);
        assert!(state.hand(PlayerId::FIRST).is_empty());
    }

    #[test]
    fn test_capture_does_not_chain() {
        // B at (0,1) is captured by A at (1,1); C at (0,2) next to B is not
        // attacked because only neighbours of the placed card fight.
        let mut state = GameState::new(
            PlayerPair::new(
                vec![card("A", 9, 9), card("spare", 1, 1)],
                vec![card("B", 1, 1), card("C", 1, 1)],
            ),
            PlayerId::SECOND,
        );
        let mut tb = FixedTieBreaker(PlayerId::FIRST);
        apply_placement(&mut state, Coord::new(0, 1), &card("B", 0, 0), &mut tb, &mut noop()).unwrap();
        apply_placement(&mut state, Coord::new(2, 2), &card("spare", 0, 0), &mut tb, &mut noop()).unwrap();
        apply_placement(&mut state, Coord::new(0, 2), &card("C", 0, 0), &mut tb, &mut noop()).unwrap();

        let placement =
            apply_placement(&mut state, Coord::new(1, 1), &card("A", 0, 0), &mut tb, &mut noop()).unwrap();

        assert_eq!(placement.captured().collect::<Vec<_>>(), vec![Coord::new(0, 1)]);
        assert_eq!(state.board().owner_at(Coord::new(0, 2)).unwrap(), Some(PlayerId::SECOND));
    }
}
