use proptest::prelude::*;
use rogue_fleet::{misses_for_attempts, Entry, Leaderboard, LEADERBOARD_CAPACITY, TOTAL_HITS};

fn board_of(misses: &[u32]) -> Leaderboard {
    let mut board = Leaderboard::new();
    for (i, &m) in misses.iter().enumerate() {
        board.insert(Entry::new(m, format!("p{}", i)));
    }
    board
}

fn misses_of(board: &Leaderboard) -> Vec<u32> {
    board.entries().iter().map(|e| e.misses).collect()
}

#[test]
fn test_insert_keeps_ascending_order() {
    let board = board_of(&[4, 1, 3, 0, 2]);
    assert_eq!(misses_of(&board), vec![0, 1, 2, 3, 4]);
}

#[test]
fn test_new_best_goes_to_top() {
    let mut board = board_of(&[3, 5]);
    assert_eq!(board.insert(Entry::new(1, "ace")), Some(0));
    assert_eq!(board.entries()[0].name, "ace");
}

#[test]
fn test_ties_rank_after_existing_entries() {
    let mut board = board_of(&[1, 2, 2, 3]);
    let rank = board.insert(Entry::new(2, "late"));
    assert_eq!(rank, Some(3));
    let names: Vec<_> = board.entries().iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["p0", "p1", "p2", "late", "p3"]);
}

#[test]
fn test_full_board_drops_worst_for_better_entry() {
    let mut board = board_of(&[0, 1, 1, 2, 2, 3, 3, 4, 4, 5]);
    assert!(board.is_full());

    let rank = board.insert(Entry::new(3, "new"));
    assert_eq!(rank, Some(7));
    assert_eq!(board.len(), LEADERBOARD_CAPACITY);
    assert_eq!(misses_of(&board), vec![0, 1, 1, 2, 2, 3, 3, 3, 4, 4]);
    assert!(board.entries().iter().all(|e| e.misses < 5));
}

#[test]
fn test_full_board_rejects_equal_or_worse() {
    let mut board = board_of(&[0, 1, 1, 2, 2, 3, 3, 4, 4, 5]);
    let before = board.clone();

    assert!(!board.would_accept(5));
    assert_eq!(board.insert(Entry::new(5, "tie")), None);
    assert_eq!(board.insert(Entry::new(9, "worse")), None);
    assert_eq!(board, before);
    assert!(board.would_accept(4));
}

#[test]
fn test_from_entries_sorts_and_caps() {
    let entries = (0..15u32)
        .rev()
        .map(|m| Entry::new(m, format!("e{}", m)))
        .collect();
    let board = Leaderboard::from_entries(entries);
    assert_eq!(board.len(), LEADERBOARD_CAPACITY);
    assert_eq!(misses_of(&board), (0..10u32).collect::<Vec<_>>());
}

#[test]
fn test_qualification_gate() {
    assert_eq!(misses_for_attempts(TOTAL_HITS - 1), None);
    assert_eq!(misses_for_attempts(TOTAL_HITS), Some(0));
    assert_eq!(misses_for_attempts(TOTAL_HITS + 8), Some(8));
}

#[test]
fn test_entry_accuracy() {
    assert!((Entry::new(0, "a").accuracy() - 1.0).abs() < 1e-12);
    assert!((Entry::new(17, "b").accuracy() - 0.5).abs() < 1e-12);
}

proptest! {
    #[test]
    fn inserts_keep_order_and_cap(
        inserts in prop::collection::vec((0u32..40, "[a-z]{1,8}"), 0..40),
    ) {
        let mut board = Leaderboard::new();
        for (misses, name) in inserts {
            let before = board.clone();
            let full_and_not_better = board.is_full()
                && board.entries().last().map_or(false, |w| w.misses <= misses);
            let rank = board.insert(Entry::new(misses, name));

            if full_and_not_better {
                prop_assert_eq!(rank, None);
                prop_assert_eq!(&board, &before);
            } else {
                let rank = rank.unwrap();
                prop_assert_eq!(board.entries()[rank].misses, misses);
                prop_assert_eq!(board.len(), (before.len() + 1).min(LEADERBOARD_CAPACITY));
            }
            prop_assert!(board.len() <= LEADERBOARD_CAPACITY);
            prop_assert!(board.entries().windows(2).all(|w| w[0].misses <= w[1].misses));
        }
    }
}
