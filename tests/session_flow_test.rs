//! Full games driven through the turn controller.

use std::time::{Duration, Instant};

use othello::rules::legal_moves;
use othello::session::{HUMAN, MAX_STEPS};
use othello::{
    evaluate_move, Board, GameConfig, GameEvent, GameOverReason, GameSummary, Phase, TurnController,
    Winner,
};

/// Human always takes the last legal move in row-major order; returns the
/// summary of the first finished game.
fn play_one_game(config: GameConfig) -> (GameSummary, TurnController, Vec<GameEvent>) {
    let (mut game, events) = TurnController::with_channel(config);
    let mut now = Instant::now();
    let mut seen = Vec::new();

    for _ in 0..200 {
        now += Duration::from_millis(10);
        let snapshot = game.snapshot();

        if snapshot.is_human_turn() {
            let moves = legal_moves(&snapshot.board, HUMAN);
            let mv = moves.last().expect("human turn implies a legal move");
            let steps_before = snapshot.step_count;
            game.click(mv.pos, now).expect("legal move accepted");
            assert_eq!(game.step_count(), steps_before + 1);
        }

        game.tick(now);
        seen.extend(events.try_iter());

        if let Some(summary) = seen.iter().find_map(|e| match e {
            GameEvent::GameOver(s) => Some(*s),
            _ => None,
        }) {
            return (summary, game, seen);
        }
    }
    panic!("game did not finish");
}

#[test]
fn test_full_game_ends_and_resets() {
    let (summary, game, events) = play_one_game(GameConfig::instant());

    assert!(summary.black_count + summary.white_count <= 64);
    if summary.reason == GameOverReason::BoardFull {
        assert_eq!(summary.black_count + summary.white_count, 64);
    }
    let expected = if summary.black_count > summary.white_count {
        Winner::Human
    } else {
        Winner::Ai
    };
    assert_eq!(summary.winner, expected);

    // The session starts over from the opening
    assert!(events.contains(&GameEvent::Reset));
    assert_eq!(game.board(), &Board::new());
    assert_eq!(game.step_count(), 0);
    assert_eq!(game.phase(), Phase::AwaitingHumanMove);
    assert_eq!(game.generation(), 1);
}

#[test]
fn test_every_move_event_matches_a_step() {
    let (_, _, events) = play_one_game(GameConfig::instant());

    let moves = events
        .iter()
        .take_while(|e| !matches!(e, GameEvent::GameOver(_)))
        .filter(|e| matches!(e, GameEvent::MoveApplied { .. }))
        .count();
    assert!(moves as u32 <= MAX_STEPS);
    assert!(moves >= 1);
}

#[test]
fn test_strict_game_finishes() {
    let config = GameConfig {
        strict_end_detection: true,
        ..GameConfig::instant()
    };
    let (summary, _, _) = play_one_game(config);
    assert!(summary.black_count + summary.white_count <= 64);
}

#[test]
fn test_ai_move_waits_for_delay() {
    let (mut game, _events) = TurnController::with_channel(GameConfig::default());
    let t0 = Instant::now();

    game.click_cell(5, 3, t0).unwrap();
    assert_eq!(game.phase(), Phase::AiThinking);
    assert_eq!(game.next_due(), Some(t0 + Duration::from_millis(500)));

    game.tick(t0 + Duration::from_millis(250));
    assert_eq!(game.step_count(), 1);

    game.tick(t0 + Duration::from_millis(750));
    assert_eq!(game.step_count(), 2);
    assert_eq!(game.phase(), Phase::AwaitingHumanMove);
}

#[test]
fn test_evaluate_move_is_pure_through_a_game() {
    let (mut game, _events) = TurnController::with_channel(GameConfig::instant());
    let mut now = Instant::now();

    for _ in 0..10 {
        let board = *game.board();
        for pos in Board::positions() {
            let _ = evaluate_move(&board, HUMAN, pos);
        }
        assert_eq!(game.board(), &board);

        let Some(mv) = legal_moves(&board, HUMAN).into_iter().next() else {
            break;
        };
        if game.click(mv.pos, now).is_err() {
            break;
        }
        now += Duration::from_millis(1);
        game.tick(now);
    }
}
