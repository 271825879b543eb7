//! Practice exercise tests.

use folnl_runtime::blocks;
use folnl_runtime::{Challenge, ChallengeManager, PracticeMode};
use folnl_translator::{CORPUS, Direction, Example};

fn example_for(challenge: &Challenge) -> Example {
    *CORPUS
        .iter()
        .find(|e| e.prompt(challenge.direction) == challenge.prompt)
        .unwrap()
}

/// Picks block ids in answer order, using any block with the right text.
fn solve(challenge: &Challenge) -> Vec<String> {
    let answer = example_for(challenge).answer(challenge.direction);
    let mut unused: Vec<_> = challenge.blocks.iter().collect();
    blocks::split(answer, challenge.direction)
        .iter()
        .map(|text| {
            let i = unused.iter().position(|b| &b.text == text).unwrap();
            unused.remove(i).id.clone()
        })
        .collect()
}

#[test]
fn every_mode_can_be_solved() {
    let manager = ChallengeManager::with_seed(8, 7);

    for mode in [PracticeMode::NlToFol, PracticeMode::FolToNl, PracticeMode::Mixed] {
        for _ in 0..10 {
            let challenge = manager.create_challenge(mode);
            let verdict = manager.verify(&challenge.id, &solve(&challenge)).unwrap();

            assert!(verdict.correct, "{}", verdict.message);
            let answer = example_for(&challenge).answer(challenge.direction);
            let texts = blocks::split(answer, challenge.direction);
            let expected = blocks::assemble(&texts, challenge.direction);
            assert_eq!(verdict.expected, Some(expected));
        }
    }
    assert_eq!(manager.open_count(), 0);
}

#[test]
fn modes_fix_direction() {
    let manager = ChallengeManager::with_seed(4, 11);

    for _ in 0..10 {
        assert_eq!(
            manager.create_challenge(PracticeMode::NlToFol).direction,
            Direction::NlToFol
        );
        assert_eq!(
            manager.create_challenge(PracticeMode::FolToNl).direction,
            Direction::FolToNl
        );
    }
}

#[test]
fn blocks_hold_the_answer() {
    let manager = ChallengeManager::with_seed(4, 3);
    let challenge = manager.create_challenge(PracticeMode::FolToNl);

    let answer = example_for(&challenge).answer(challenge.direction);
    let mut expected = blocks::split(answer, challenge.direction);
    let mut offered: Vec<String> = challenge.blocks.iter().map(|b| b.text.clone()).collect();
    expected.sort();
    offered.sort();

    assert_eq!(offered, expected);
}

#[test]
fn reversed_selection_is_rejected() {
    let manager = ChallengeManager::with_seed(4, 5);
    let challenge = manager.create_challenge(PracticeMode::NlToFol);
    let mut selection = solve(&challenge);
    selection.reverse();

    let verdict = manager.verify(&challenge.id, &selection).unwrap();
    assert!(!verdict.correct);
    assert!(verdict.expected.is_none());
    assert_eq!(manager.open_count(), 1);
}

#[test]
fn solved_challenge_is_closed() {
    let manager = ChallengeManager::with_seed(4, 9);
    let challenge = manager.create_challenge(PracticeMode::Mixed);
    let selection = solve(&challenge);

    assert!(manager.verify(&challenge.id, &selection).unwrap().correct);
    assert!(manager.verify(&challenge.id, &selection).is_none());
}

#[test]
fn oldest_challenges_are_evicted() {
    let manager = ChallengeManager::with_seed(2, 1);
    let first = manager.create_challenge(PracticeMode::Mixed);
    let second = manager.create_challenge(PracticeMode::Mixed);
    let third = manager.create_challenge(PracticeMode::Mixed);

    assert_eq!(manager.open_count(), 2);
    assert!(manager.verify(&first.id, &solve(&first)).is_none());
    assert!(manager.verify(&second.id, &solve(&second)).unwrap().correct);
    assert!(manager.verify(&third.id, &solve(&third)).unwrap().correct);
}

#[test]
fn same_seed_same_exercises() {
    let a = ChallengeManager::with_seed(4, 42);
    let b = ChallengeManager::with_seed(4, 42);

    for _ in 0..5 {
        let x = a.create_challenge(PracticeMode::Mixed);
        let y = b.create_challenge(PracticeMode::Mixed);
        assert_eq!(x.id, y.id);
        assert_eq!(x.prompt, y.prompt);
        assert_eq!(x.blocks, y.blocks);
    }
}
