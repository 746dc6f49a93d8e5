//! Deduction game integration tests.
//!
//! Full sessions over small hand-built decks and the standard 52-card deck.

use pocket_games::{
    Card, CardColor, CardQuestion, DeductionConfig, DeductionEvent, DeductionGame, DeductionState,
    GameError, QuestionId, QuestionKind, Rank, Suit,
};

const IS_RED: QuestionId = QuestionId::new(1);

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// A and B are red, C and D black.
fn abcd() -> Vec<Card> {
    vec![
        Card::new(Suit::Heart, Rank::Ace),
        Card::new(Suit::Diamond, Rank::King),
        Card::new(Suit::Spade, Rank::Ace),
        Card::new(Suit::Club, Rank::King),
    ]
}

fn red_only(max_guesses: u32) -> DeductionConfig {
    DeductionConfig::new()
        .with_max_guesses(max_guesses)
        .with_questions(vec![CardQuestion::new(
            IS_RED,
            "Is it red?",
            QuestionKind::Color(CardColor::Red),
        )])
}

#[test]
fn test_is_red_keeps_red_cards() {
    init_tracing();
    let mut game = DeductionGame::new(red_only(6), abcd(), 1).unwrap();
    game.start_with_answer(0).unwrap();

    let answer = game.select_question(IS_RED).unwrap();

    assert!(answer);
    assert_eq!(game.remaining_cards(), &abcd()[..2]);
    assert_eq!(game.state(), DeductionState::Playing);
}

#[test]
fn test_guesses_exhausted_with_two_left() {
    init_tracing();
    let mut game = DeductionGame::new(red_only(2), abcd(), 1).unwrap();
    game.start_with_answer(0).unwrap();

    game.select_question(IS_RED).unwrap();
    assert_eq!(game.state(), DeductionState::Playing);

    // Asking again narrows nothing but still costs a guess.
    game.select_question(IS_RED).unwrap();
    assert_eq!(game.remaining_guesses(), 0);
    assert_eq!(game.remaining_cards().len(), 2);
    assert_eq!(game.state(), DeductionState::GameLost);
}

#[test]
fn test_single_card_left_wins_on_last_guess() {
    init_tracing();
    let config = red_only(2);
    let mut game = DeductionGame::new(config, abcd(), 1).unwrap();
    let ace = QuestionId::new(2);
    game.register_question(ace, "Is it an ace?", QuestionKind::RankEquals(Rank::Ace))
        .unwrap();
    let queue = game.capture();

    game.start_with_answer(0).unwrap();
    game.select_question(IS_RED).unwrap();
    game.select_question(ace).unwrap();

    assert_eq!(game.remaining_guesses(), 0);
    assert_eq!(game.remaining_cards(), &[Card::new(Suit::Heart, Rank::Ace)]);
    assert_eq!(game.state(), DeductionState::GameWon);
    assert_eq!(
        queue.drain().last(),
        Some(&DeductionEvent::GameWon(Card::new(Suit::Heart, Rank::Ace)))
    );
}

#[test]
fn test_standard_deck_binary_search() {
    init_tracing();
    let mut game = DeductionGame::with_standard_deck(DeductionConfig::new().with_max_guesses(20), 2024)
        .unwrap();
    game.start().unwrap();
    let answer = game.answer().cloned().unwrap();

    let suit_question = match answer.suit {
        Suit::Spade => 4,
        Suit::Diamond => 5,
        Suit::Heart => 6,
        Suit::Club => 7,
    };
    assert!(game.select_question(QuestionId::new(suit_question)).unwrap());
    assert_eq!(game.remaining_cards().len(), 13);
    assert!(game.remaining_cards().contains(&answer));

    for rank in Rank::ALL {
        if game.state() != DeductionState::Playing {
            break;
        }
        let id = QuestionId::new(100 + rank.value() as u32);
        game.register_question(id, format!("Is it {}?", rank), QuestionKind::RankEquals(rank))
            .unwrap();
        game.select_question(id).unwrap();
        assert!(game.remaining_cards().contains(&answer));
    }

    assert_eq!(game.state(), DeductionState::GameWon);
    assert_eq!(game.remaining_cards(), &[answer]);
}

#[test]
fn test_commands_after_game_end_are_ignored() {
    init_tracing();
    let mut game = DeductionGame::new(red_only(1), abcd(), 1).unwrap();
    game.start_with_answer(2).unwrap();
    game.select_question(IS_RED).unwrap();
    assert_eq!(game.state(), DeductionState::GameLost);

    let queue = game.capture();
    assert!(matches!(
        game.select_question(IS_RED),
        Err(GameError::InvalidTransition { state: "GameLost", .. })
    ));
    assert!(game.start().is_err());
    assert!(queue.is_empty());
    assert_eq!(game.remaining_cards(), &abcd()[2..]);
}

#[test]
fn test_question_listing() {
    let game = DeductionGame::with_standard_deck(DeductionConfig::default(), 0).unwrap();
    let listed: Vec<_> = game.questions().collect();

    assert_eq!(listed.len(), CardQuestion::standard_set().len());
    assert_eq!(listed[0], (QuestionId::new(1), "Is it red?"));
}
