//! Starting-hand fairness.
//!
//! A hand's value sums, over every card and every direction, either the
//! card's `attack + defense`, or twice the strongest stat among all dealt
//! cards when the card overpowers that direction. Two hands are fair when
//! their values differ by at most `tolerance` of their combined value.

use super::card::Card;
use crate::core::{Direction, PlayerPair};

/// Value of each hand, using the overpower weight derived from both hands.
#[must_use]
pub fn hand_values(hands: &PlayerPair<Vec<Card>>) -> PlayerPair<u64> {
    let strongest = hands
        .iter()
        .flat_map(|(_, hand)| hand.iter())
        .map(|card| card.attack().max(card.defense()))
        .max()
        .unwrap_or(0);
    let overpower_value = 2 * u64::from(strongest);

    hands.map(|hand| {
        hand.iter()
            .map(|card| {
                Direction::ALL
                    .iter()
                    .map(|&d| {
                        if card.overpowers(d) {
                            overpower_value
                        } else {
                            u64::from(card.attack()) + u64::from(card.defense())
                        }
                    })
                    .sum::<u64>()
            })
            .sum()
    })
}

/// Check whether the two hands are within `tolerance` of each other.
#[must_use]
pub fn hands_are_fair(hands: &PlayerPair<Vec<Card>>, tolerance: f64) -> bool {
    let (first, second) = hand_values(hands).into_tuple();
    first.abs_diff(second) as f64 <= tolerance * (first + second) as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DirectionSet;

    fn card(name: &str, attack: u32, defense: u32, overpower: DirectionSet) -> Card {
        Card::new(name, attack, defense, overpower)
    }

    #[test]
    fn test_hand_values_without_overpower() {
        let hands = PlayerPair::new(
            vec![card("a", 4, 3, DirectionSet::empty())],
            vec![card("b", 1, 1, DirectionSet::empty())],
        );
        let values = hand_values(&hands);

        // Four directions of attack + defense each.
        assert_eq!(values.into_tuple(), (28, 8));
    }

    #[test]
    fn test_overpower_uses_strongest_stat_across_hands() {
        let hands = PlayerPair::new(
            vec![card("a", 2, 2, DirectionSet::empty().with(Direction::Up))],
            vec![card("b", 7, 1, DirectionSet::empty())],
        );
        let (first, second) = hand_values(&hands).into_tuple();

        // Up is worth 2 * 7; the other three directions 2 + 2.
        assert_eq!(first, 14 + 3 * 4);
        assert_eq!(second, 4 * 8);
    }

    #[test]
    fn test_fairness_threshold() {
        let even = PlayerPair::new(
            vec![card("a", 5, 5, DirectionSet::empty())],
            vec![card("b", 5, 5, DirectionSet::empty())],
        );
        assert!(hands_are_fair(&even, 0.1));

        let lopsided = PlayerPair::new(
            vec![card("a", 9, 9, DirectionSet::empty())],
            vec![card("b", 1, 1, DirectionSet::empty())],
        );
        assert!(!hands_are_fair(&lopsided, 0.1));
        assert!(hands_are_fair(&lopsided, 1.0));
    }
}
