//! Attack resolution.
//!
//! Precedence, for an attack from A towards D:
//!
//! 1. A overpowers towards D *and* D overpowers towards A: coin flip.
//! 2. Only A overpowers: success, D's defense is ignored.
//! 3. Only D overpowers: failure, A's attack is ignored.
//! 4. Neither: `attack - defense`; positive succeeds, negative fails, zero
//!    is a coin flip.
//!
//! A coin flip succeeds iff it favours the initiating player. The favoured
//! player is reported through the `on_coin_flip` callback before the
//! outcome is returned, so observers always hear about a flip before its
//! effect reaches the board.

use serde::{Deserialize, Serialize};

use super::event::AttackEvent;
use super::tiebreak::TieBreaker;
use crate::core::{PlayerId, Result};

/// Which rule decides an attack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ruling {
    /// Both cards overpower each other.
    MutualOverpower,
    /// Only the attacker overpowers.
    AttackOverpowers,
    /// Only the defender overpowers.
    DefenseOverpowers,
    /// No overpower; attacker's attack minus defender's defense.
    Advantage(i64),
}

impl Ruling {
    /// The outcome if the rule decides it on its own, `None` if a coin flip
    /// is needed.
    #[must_use]
    pub fn verdict(self) -> Option<bool> {
        match self {
            Ruling::MutualOverpower => None,
            Ruling::AttackOverpowers => Some(true),
            Ruling::DefenseOverpowers => Some(false),
            Ruling::Advantage(0) => None,
            Ruling::Advantage(advantage) => Some(advantage > 0),
        }
    }

    #[must_use]
    pub fn needs_coin_flip(self) -> bool {
        self.verdict().is_none()
    }
}

/// Result of resolving one attack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackOutcome {
    pub ruling: Ruling,

    /// Player favoured by the coin flip, if one was needed.
    pub coin_flip: Option<PlayerId>,

    /// Whether the defender's cell changes hands.
    pub success: bool,
}

/// Decides attack events.
pub struct CombatResolver;

impl CombatResolver {
    /// Work out which rule applies, without consuming any randomness.
    ///
    /// Fails with `NotAdjacent` if the event's coordinates are not
    /// neighbours.
    pub fn judge(event: &AttackEvent) -> Result<Ruling> {
        let attack_overpowers = event.attacker.overpowers(event.attack_direction()?);
        let defense_overpowers = event.defender.overpowers(event.defense_direction()?);

        let ruling = match (attack_overpowers, defense_overpowers) {
            (true, true) => Ruling::MutualOverpower,
            (true, false) => Ruling::AttackOverpowers,
            (false, true) => Ruling::DefenseOverpowers,
            (false, false) => {
                Ruling::Advantage(i64::from(event.attacker.attack()) - i64::from(event.defender.defense()))
            }
        };

        tracing::trace!(%event, ?ruling, "judged attack");
        Ok(ruling)
    }

    /// Decide an attack, asking `tie_breaker` when the ruling is a tie.
    pub fn resolve(
        event: &AttackEvent,
        tie_breaker: &mut dyn TieBreaker,
        on_coin_flip: &mut dyn FnMut(&AttackEvent, PlayerId),
    ) -> Result<AttackOutcome> {
        let ruling = Self::judge(event)?;

        let outcome = match ruling.verdict() {
            Some(success) => AttackOutcome {
                ruling,
                coin_flip: None,
                success,
            },
            None => {
                let favored = tie_breaker.favored_player(event);
                on_coin_flip(event, favored);
                AttackOutcome {
                    ruling,
                    coin_flip: Some(favored),
                    success: favored == event.initiating_player,
                }
            }
        };

        Ok(outcome)
    }
}
