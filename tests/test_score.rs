use proptest::prelude::*;

use thunder_fighter::entities::{GameLevel, ScoreBoard};
use thunder_fighter::score::*;

#[test]
fn thresholds_pick_the_level() {
    assert_eq!(level_for_score(0), GameLevel::Easy);
    assert_eq!(level_for_score(NORMAL_THRESHOLD - 1), GameLevel::Easy);
    assert_eq!(level_for_score(NORMAL_THRESHOLD), GameLevel::Normal);
    assert_eq!(level_for_score(HARD_THRESHOLD - 1), GameLevel::Normal);
    assert_eq!(level_for_score(HARD_THRESHOLD), GameLevel::Hard);
}

#[test]
fn award_tracks_best_and_promotes() {
    let mut board = ScoreBoard::default();
    let mut level = GameLevel::Easy;

    board.award(450, &mut level);
    assert_eq!((board.score, board.highest_score, level), (450, 450, GameLevel::Easy));

    board.award(100, &mut level);
    assert_eq!((board.score, board.highest_score, level), (550, 550, GameLevel::Normal));

    board.award(ULTIMATE_BONUS * 3, &mut level);
    assert_eq!(level, GameLevel::Hard);
}

#[test]
fn best_from_a_previous_run_is_kept() {
    let mut board = ScoreBoard { score: 0, highest_score: 2000, lives: 1 };
    let mut level = GameLevel::Easy;
    board.award(50, &mut level);
    assert_eq!(board.highest_score, 2000);
}

#[test]
fn level_never_drops() {
    let mut board = ScoreBoard::default();
    let mut level = GameLevel::Hard;
    board.award(50, &mut level);
    assert_eq!(level, GameLevel::Hard);
}

#[test]
fn losing_the_life_is_final() {
    let mut board = ScoreBoard::default();
    assert!(board.is_alive());
    board.lose_life();
    board.lose_life();
    assert_eq!(board.lives, 0);
    assert!(!board.is_alive());
}

#[test]
fn top_scores_keep_the_best_five() {
    let mut top = TopScores::default();
    for score in [300, 50, 900, 0, 450, 700, 120] {
        top.record(score);
    }
    assert_eq!(top.entries(), &[900, 700, 450, 300, 120]);
}

proptest! {
    #[test]
    fn level_and_best_only_rise(awards in proptest::collection::vec(0u32..400, 0..40)) {
        let mut board = ScoreBoard::default();
        let mut level = GameLevel::Easy;
        let mut prev_level = level;
        let mut prev_best = 0;

        for points in awards {
            board.award(points, &mut level);
            prop_assert!(level >= prev_level);
            prop_assert!(board.highest_score >= prev_best);
            prop_assert_eq!(level, level_for_score(board.score));
            prev_level = level;
            prev_best = board.highest_score;
        }
    }
}
