//! Deduction game state machine.
//!
//! A hidden answer card is picked from the deck. Each question the player
//! selects costs one guess and removes every card that answers it
//! differently from the hidden card, so the answer is never eliminated.
//! One card left wins; running out of guesses with more than one card left
//! loses. The win check runs first.

use tracing::{debug, info, warn};

use crate::cards::{Card, QuestionId};
use crate::core::{EventBus, EventQueue, GameError, GameRng, ListenerId};
use crate::pool::{CandidatePool, Predicate};

use super::config::DeductionConfig;

/// Deduction game lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeductionState {
    NotStarted,
    Playing,
    GameWon,
    GameLost,
}

impl DeductionState {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            DeductionState::NotStarted => "NotStarted",
            DeductionState::Playing => "Playing",
            DeductionState::GameWon => "GameWon",
            DeductionState::GameLost => "GameLost",
        }
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, DeductionState::GameWon | DeductionState::GameLost)
    }
}

impl std::fmt::Display for DeductionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Notifications published by `DeductionGame`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeductionEvent {
    GameStarted,
    /// The candidate cards still in play.
    CardsUpdated(Vec<Card>),
    GuessesUpdated(u32),
    QuestionAsked {
        id: QuestionId,
        answer: bool,
        eliminated: usize,
    },
    /// Carries the revealed answer.
    GameWon(Card),
    GameLost(Card),
    GameReset,
}

struct RegisteredQuestion {
    id: QuestionId,
    text: String,
    predicate: Box<dyn Predicate<Card>>,
}

impl std::fmt::Debug for RegisteredQuestion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisteredQuestion")
            .field("id", &self.id)
            .field("text", &self.text)
            .finish_non_exhaustive()
    }
}

/// Guess-the-card game driven by `start` and `select_question`.
#[derive(Debug)]
pub struct DeductionGame {
    config: DeductionConfig,
    deck: CandidatePool<Card>,
    questions: Vec<RegisteredQuestion>,
    rng: GameRng,
    state: DeductionState,
    answer: Option<Card>,
    remaining_guesses: u32,
    events: EventBus<DeductionEvent>,
}

fn refuse(err: GameError) -> GameError {
    warn!(error = %err, "deduction command refused");
    err
}

impl DeductionGame {
    /// Create a game over the given deck with the configured questions.
    ///
    /// # Errors
    ///
    /// `GameError::InvalidConfig` if `config` fails validation.
    pub fn new(config: DeductionConfig, deck: Vec<Card>, seed: u64) -> Result<Self, GameError> {
        config.validate()?;
        if deck.is_empty() {
            warn!("deduction game created with an empty deck");
        }

        let questions = config
            .questions
            .iter()
            .map(|q| RegisteredQuestion {
                id: q.id,
                text: q.text.clone(),
                predicate: Box::new(q.kind),
            })
            .collect();

        Ok(Self {
            config,
            deck: CandidatePool::new(deck),
            questions,
            rng: GameRng::new(seed),
            state: DeductionState::NotStarted,
            answer: None,
            remaining_guesses: 0,
            events: EventBus::new(),
        })
    }

    /// Create a game over the standard 52-card deck.
    ///
    /// # Errors
    ///
    /// `GameError::InvalidConfig` if `config` fails validation.
    pub fn with_standard_deck(config: DeductionConfig, seed: u64) -> Result<Self, GameError> {
        Self::new(config, Card::standard_deck(), seed)
    }

    /// Add a custom question.
    ///
    /// # Errors
    ///
    /// `GameError::InvalidConfig` if `id` is already taken.
    pub fn register_question(
        &mut self,
        id: QuestionId,
        text: impl Into<String>,
        predicate: impl Predicate<Card> + 'static,
    ) -> Result<(), GameError> {
        if self.questions.iter().any(|q| q.id == id) {
            return Err(refuse(GameError::InvalidConfig(format!("duplicate {}", id))));
        }
        self.questions.push(RegisteredQuestion {
            id,
            text: text.into(),
            predicate: Box::new(predicate),
        });
        Ok(())
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &DeductionConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> DeductionState {
        self.state
    }

    #[must_use]
    pub fn remaining_guesses(&self) -> u32 {
        self.remaining_guesses
    }

    /// Cards still consistent with every answer so far.
    #[must_use]
    pub fn remaining_cards(&self) -> &[Card] {
        self.deck.available()
    }

    /// The full deck.
    #[must_use]
    pub fn deck(&self) -> &[Card] {
        self.deck.master()
    }

    /// The hidden card, once a game has started.
    #[must_use]
    pub fn answer(&self) -> Option<&Card> {
        self.answer.as_ref()
    }

    /// Questions on offer, in registration order.
    pub fn questions(&self) -> impl Iterator<Item = (QuestionId, &str)> + '_ {
        self.questions.iter().map(|q| (q.id, q.text.as_str()))
    }

    // === Observers ===

    pub fn subscribe(&mut self, listener: impl FnMut(&DeductionEvent) + 'static) -> ListenerId {
        self.events.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.events.unsubscribe(id)
    }

    /// Buffer game events for polling.
    pub fn capture(&mut self) -> EventQueue<DeductionEvent> {
        self.events.capture()
    }

    // === Commands ===

    /// Start a game with a uniformly random hidden card.
    ///
    /// # Errors
    ///
    /// - `InvalidTransition` unless the game is `NotStarted`
    /// - `EmptyPool` if the deck is empty
    pub fn start(&mut self) -> Result<(), GameError> {
        self.ensure_not_started()?;
        let answer = self.deck.pick_hidden(&mut self.rng).map_err(refuse)?;
        self.begin(answer);
        Ok(())
    }

    /// Start a game hiding the deck card at `index`.
    ///
    /// # Errors
    ///
    /// - `InvalidTransition` unless the game is `NotStarted`
    /// - `EmptyPool` if the deck is empty
    /// - `InvalidConfig` if `index` is outside the deck
    pub fn start_with_answer(&mut self, index: usize) -> Result<(), GameError> {
        self.ensure_not_started()?;
        let len = self.deck.master().len();
        if len == 0 {
            return Err(refuse(GameError::EmptyPool));
        }
        let answer = self.deck.master().get(index).cloned().ok_or_else(|| {
            refuse(GameError::InvalidConfig(format!(
                "answer index {index} outside deck of {len}"
            )))
        })?;
        self.begin(answer);
        Ok(())
    }

    /// Ask a question. Costs one guess and narrows the remaining cards.
    ///
    /// Returns the hidden card's answer.
    ///
    /// # Errors
    ///
    /// - `InvalidTransition` outside `Playing`
    /// - `UnknownQuestion` if no question has this id
    pub fn select_question(&mut self, id: QuestionId) -> Result<bool, GameError> {
        if self.state != DeductionState::Playing {
            return Err(refuse(GameError::InvalidTransition {
                command: "select a question",
                state: self.state.name(),
            }));
        }
        let question = self
            .questions
            .iter()
            .find(|q| q.id == id)
            .ok_or_else(|| refuse(GameError::UnknownQuestion(id.to_string())))?;
        let hidden = self.answer.as_ref().ok_or_else(|| refuse(GameError::NoCandidate))?;

        self.remaining_guesses = self.remaining_guesses.saturating_sub(1);
        self.events.emit(&DeductionEvent::GuessesUpdated(self.remaining_guesses));
        info!(question = %question.text, remaining_guesses = self.remaining_guesses, "question selected");

        let expected = question.predicate.evaluate(hidden);
        let eliminated = self.deck.filter(question.predicate.as_ref(), expected);
        debug!(eliminated, remaining = self.deck.available_len(), "cards filtered");

        self.events.emit(&DeductionEvent::QuestionAsked {
            id,
            answer: expected,
            eliminated,
        });
        self.events.emit(&DeductionEvent::CardsUpdated(self.deck.available().to_vec()));

        self.check_end_conditions();
        Ok(expected)
    }

    /// Return to `NotStarted` from any state so `start` can run again.
    pub fn reset_to_not_started(&mut self) {
        self.change_state(DeductionState::NotStarted);
        self.answer = None;
        self.remaining_guesses = 0;
        self.deck.clear();
        self.events.emit(&DeductionEvent::GameReset);
    }

    // === Game flow ===

    fn ensure_not_started(&self) -> Result<(), GameError> {
        if self.state == DeductionState::NotStarted {
            Ok(())
        } else {
            Err(refuse(GameError::InvalidTransition {
                command: "start",
                state: self.state.name(),
            }))
        }
    }

    fn begin(&mut self, answer: Card) {
        info!(answer = %answer, "answer card chosen");
        self.change_state(DeductionState::Playing);
        self.remaining_guesses = self.config.max_guesses;
        self.deck.start_session();
        self.answer = Some(answer);

        self.events.emit(&DeductionEvent::CardsUpdated(self.deck.available().to_vec()));
        self.events.emit(&DeductionEvent::GameStarted);
        self.events.emit(&DeductionEvent::GuessesUpdated(self.remaining_guesses));
        info!(cards = self.deck.available_len(), "deduction game started");
    }

    fn check_end_conditions(&mut self) {
        let remaining = self.deck.available_len();
        let Some(answer) = self.answer.clone() else {
            return;
        };

        if remaining == 1 {
            self.change_state(DeductionState::GameWon);
            info!(answer = %answer, "answer found");
            self.events.emit(&DeductionEvent::GameWon(answer));
        } else if self.remaining_guesses == 0 && remaining > 1 {
            self.change_state(DeductionState::GameLost);
            info!(answer = %answer, remaining, "out of guesses");
            self.events.emit(&DeductionEvent::GameLost(answer));
        }
    }

    fn change_state(&mut self, next: DeductionState) {
        if self.state == next {
            return;
        }
        info!(from = %self.state, to = %next, "game state changed");
        self.state = next;
    }
}
