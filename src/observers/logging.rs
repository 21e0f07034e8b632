//! Observer that logs through `tracing`.

use super::{CoinFlipObserver, GameObserver};
use crate::cards::Card;
use crate::combat::AttackEvent;
use crate::core::{Coord, GameState, PlayerId};
use crate::rules::GameResult;

/// Logs coin flips and game events as structured `tracing` records.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl CoinFlipObserver for TracingObserver {
    fn on_coin_flip(&mut self, event: &AttackEvent, favored: PlayerId) {
        tracing::info!(
            attacker = event.attacker.name(),
            attacker_coord = %event.attacker_coord,
            defender = event.defender.name(),
            defender_coord = %event.defender_coord,
            %favored,
            "coin flip"
        );
    }
}

impl GameObserver for TracingObserver {
    fn on_game_start(&mut self, state: &GameState) {
        let hand_names = |player| {
            state
                .hand(player)
                .iter()
                .map(Card::name)
                .collect::<Vec<_>>()
                .join(", ")
        };
        tracing::info!(
            starting_player = %state.next_player(),
            first_hand = %hand_names(PlayerId::FIRST),
            second_hand = %hand_names(PlayerId::SECOND),
            "game started"
        );
    }

    fn on_move(&mut self, coord: Coord, card: &Card, player: PlayerId) {
        tracing::info!(%player, %card, %coord, "card placed");
    }

    fn on_game_end(&mut self, state: &GameState) {
        let (first, second) = state.scores().into_tuple();
        match state.result() {
            Some(GameResult::Winner(winner)) => {
                tracing::info!(first, second, %winner, "game over");
            }
            Some(GameResult::Draw) => tracing::info!(first, second, "game over: draw"),
            None => tracing::warn!(first, second, "game end reported before the board filled"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DirectionSet, PlayerPair};

    #[test]
    fn test_tracing_observer_handles_every_hook() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();

        let card = Card::new("Ghost", 6, 7, DirectionSet::empty());
        let state = GameState::new(PlayerPair::new(vec![card.clone()], vec![]), PlayerId::FIRST);
        let event = AttackEvent::new(
            card.clone(),
            card.clone(),
            Coord::new(0, 0),
            Coord::new(1, 0),
            PlayerId::FIRST,
        );

        let mut observer = TracingObserver;
        observer.on_game_start(&state);
        observer.on_move(Coord::new(0, 0), &card, PlayerId::FIRST);
        observer.on_coin_flip(&event, PlayerId::SECOND);
        observer.on_game_end(&state);
    }
}
