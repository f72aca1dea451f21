use cubes::{
    driver::{Event, Match, Turn, Verdict},
    player::Player,
    rules::RuleSet,
    score::{Score, evaluate},
    search::select_best_move,
    seat::{Optimal, RandomMover, Scripted},
    state::GameState,
};

/// Play every possible line of the second player against the engine
fn all_lines_won_by_first(state: GameState, rules: &RuleSet, games: &mut usize) {
    assert_eq!(state.active_player(), Player::First);
    let taken = select_best_move(&state, rules).expect("engine must have a move");
    let after = state.apply_move(rules, taken).expect("engine move must be legal");

    if evaluate(&after) != Score::Undecided {
        assert_eq!(evaluate(&after), Score::Win);
        *games += 1;
        return;
    }

    for reply in rules.legal_moves(after.remaining()) {
        let next = after.apply_move(rules, reply).unwrap();
        // Second player never empties the pile on the engine
        assert_ne!(next.remaining(), 0, "second player won from {}", after);
        all_lines_won_by_first(next, rules, games);
    }
}

#[test]
fn first_player_wins_every_line() {
    let rules = RuleSet::default();
    let mut games = 0;
    all_lines_won_by_first(GameState::initial(&rules), &rules, &mut games);
    assert!(games > 100);
}

#[test]
fn scripted_game_to_completion() {
    let rules = RuleSet::default();
    // Engine keeps handing back multiples of three
    let script = ["abc", "99", "1", "4", "2", "1", "2"];
    let mut game = Match::new(&rules, Scripted::new(script), Vec::new());

    assert_eq!(game.run(), Verdict::Winner(Player::First));
    assert_eq!(game.state().remaining(), 0);
    assert_eq!(game.turn(), Turn::GameOver(Verdict::Winner(Player::First)));

    let (seat, events) = game.into_parts();
    assert_eq!(seat.pending(), 0);

    let first_moves = events
        .iter()
        .filter_map(|e| match e {
            Event::Moved {
                player: Player::First,
                taken,
                remaining,
            } => Some((*taken, *remaining)),
            _ => None,
        })
        .collect::<Vec<_>>();
    assert_eq!(
        first_moves,
        vec![(2, 18), (2, 15), (2, 9), (1, 6), (2, 3), (1, 0)]
    );

    let rejected = events
        .iter()
        .filter(|e| matches!(e, Event::Rejected { .. }))
        .count();
    assert_eq!(rejected, 2);
    assert_eq!(
        events.last().map(ToString::to_string).as_deref(),
        Some("MAX wins!")
    );
}

#[test]
fn random_opponents_always_lose() {
    let rules = RuleSet::default();
    for seed in 0..50 {
        let mut game = Match::new(&rules, RandomMover::seeded(seed), Vec::new());
        assert_eq!(game.run(), Verdict::Winner(Player::First), "seed {}", seed);
    }
}

#[test]
fn optimal_second_player_wins_lost_openings() {
    let rules = RuleSet::classic(4, 21).unwrap();
    let mut game = Match::new(&rules, Optimal, Vec::new());
    assert_eq!(game.run(), Verdict::Winner(Player::Second));
}
