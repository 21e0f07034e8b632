//! Combat resolution through the public API.

use tarock::{
    AttackEvent, Card, CombatResolver, Coord, Direction, DirectionSet, FavorAttacker, GameRng,
    GameState, MoveSimulator, PlayerId, PlayerPair, Ruling, TieBreaker,
};

/// An attack from `from` into `to` by the first player.
fn attack(
    from: Coord,
    to: Coord,
    attacker: (u32, DirectionSet),
    defender: (u32, DirectionSet),
) -> AttackEvent {
    AttackEvent::new(
        Card::new("attacker", attacker.0, 0, attacker.1),
        Card::new("defender", 0, defender.0, defender.1),
        from,
        to,
        PlayerId::FIRST,
    )
}

fn towards(direction: Direction) -> DirectionSet {
    DirectionSet::empty().with(direction)
}

fn resolve(event: &AttackEvent, tie_breaker: &mut dyn TieBreaker) -> bool {
    CombatResolver::resolve(event, tie_breaker, &mut |_: &AttackEvent, _: PlayerId| {})
        .unwrap()
        .success
}

// =============================================================================
// Precedence Matrix
// =============================================================================

#[test]
fn test_precedence_in_every_direction() {
    let center = Coord::new(1, 1);

    for direction in Direction::ALL {
        let target = center.step(direction).unwrap();
        let toward = towards(direction);
        let back = towards(direction.opposite());
        let mut tb = FavorAttacker;

        // Only the attacker overpowers: wins even at 0 against 9.
        let e = attack(center, target, (0, toward), (9, DirectionSet::empty()));
        assert_eq!(CombatResolver::judge(&e).unwrap(), Ruling::AttackOverpowers, "{direction}");
        assert!(resolve(&e, &mut tb));

        // Only the defender overpowers: holds even at 0 against 9.
        let e = attack(center, target, (9, DirectionSet::empty()), (0, back));
        assert_eq!(CombatResolver::judge(&e).unwrap(), Ruling::DefenseOverpowers, "{direction}");
        assert!(!resolve(&e, &mut tb));

        // Both: a coin flip, which FavorAttacker hands to the attacker.
        let e = attack(center, target, (0, toward), (9, back));
        assert_eq!(CombatResolver::judge(&e).unwrap(), Ruling::MutualOverpower, "{direction}");
        assert!(resolve(&e, &mut tb));

        // Overpowers pointing elsewhere do not count.
        let e = attack(center, target, (3, back), (5, toward));
        assert_eq!(CombatResolver::judge(&e).unwrap(), Ruling::Advantage(-2), "{direction}");
        assert!(!resolve(&e, &mut tb));
    }
}

// =============================================================================
// Coin Flip Fairness
// =============================================================================

fn success_rate(event: &AttackEvent, seed: u64, trials: u32) -> f64 {
    let mut rng = GameRng::new(seed);
    let wins = (0..trials).filter(|_| resolve(event, &mut rng)).count();
    wins as f64 / f64::from(trials)
}

#[test]
fn test_mutual_overpower_is_roughly_even() {
    let e = attack(
        Coord::new(0, 0),
        Coord::new(0, 1),
        (1, towards(Direction::Right)),
        (1, towards(Direction::Left)),
    );
    let rate = success_rate(&e, 42, 10_000);
    assert!((0.45..=0.55).contains(&rate), "success rate {rate}");
}

#[test]
fn test_equal_stats_are_roughly_even() {
    let e = attack(
        Coord::new(2, 1),
        Coord::new(1, 1),
        (4, DirectionSet::empty()),
        (4, DirectionSet::empty()),
    );
    let rate = success_rate(&e, 7, 10_000);
    assert!((0.45..=0.55).contains(&rate), "success rate {rate}");
}

#[test]
fn test_seeded_flips_are_reproducible() {
    let e = attack(
        Coord::new(0, 0),
        Coord::new(1, 0),
        (2, DirectionSet::empty()),
        (2, DirectionSet::empty()),
    );
    let run = |seed| {
        let mut rng = GameRng::new(seed);
        (0..64).map(|_| resolve(&e, &mut rng)).collect::<Vec<_>>()
    };
    assert_eq!(run(9), run(9));
}

// =============================================================================
// Simulation
// =============================================================================

#[test]
fn test_simulator_uses_its_own_tie_breaker() {
    let a = Card::new("A", 2, 2, DirectionSet::empty());
    let b = Card::new("B", 2, 2, DirectionSet::empty());
    let state = GameState::new(PlayerPair::new(vec![a.clone()], vec![b.clone()]), PlayerId::SECOND);

    let mut sim = MoveSimulator::new(FavorAttacker);
    let state = sim.simulate(Coord::new(0, 0), &b, &state).unwrap();
    let after = sim.simulate(Coord::new(0, 1), &a, &state).unwrap();

    assert_eq!(after.board().owner_at(Coord::new(0, 0)).unwrap(), Some(PlayerId::FIRST));
    assert_eq!(state.board().owner_at(Coord::new(0, 0)).unwrap(), Some(PlayerId::SECOND));
}
