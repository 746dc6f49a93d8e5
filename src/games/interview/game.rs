//! Interview game state machine.
//!
//! Each turn one applicant is drawn without replacement. The player may ask
//! a few interview questions, then recruits or rejects. Recruiting applies the
//! applicant's impact to the company status. The game ends when the company
//! is full, the applicants run out, or an optional turn limit is hit; the final score
//! (employees x status) decides between cleared and over.

use tracing::{debug, info, warn};

use crate::applicants::Applicant;
use crate::core::{EventBus, EventQueue, GameError, GameRng, ListenerId};
use crate::pool::CandidatePool;
use crate::tracker::{StatusSnapshot, StatusTracker};

use super::config::InterviewConfig;

/// Interview game lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InterviewState {
    NotStarted,
    Playing,
    /// Ended below the clear score.
    GameOver,
    /// Ended at or above the clear score.
    GameCleared,
}

impl InterviewState {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            InterviewState::NotStarted => "NotStarted",
            InterviewState::Playing => "Playing",
            InterviewState::GameOver => "GameOver",
            InterviewState::GameCleared => "GameCleared",
        }
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, InterviewState::GameOver | InterviewState::GameCleared)
    }
}

impl std::fmt::Display for InterviewState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The player's decision on the current applicant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Choice {
    Recruit,
    Reject,
}

/// Notifications published by `InterviewGame`.
#[derive(Clone, Debug, PartialEq)]
pub enum InterviewEvent {
    GameStarted,
    TurnStarted(u32),
    ApplicantDrawn(Applicant),
    QuestionAnswered {
        index: usize,
        answer: String,
        remaining: u32,
    },
    /// The applicant joined the company.
    Recruited(String),
    Rejected(String),
    TurnEnded(u32),
    GameCleared { final_score: f32 },
    GameOver { final_score: f32 },
    GameReset,
}

/// Hiring game driven by `start`, `ask_question` and `make_choice`.
#[derive(Debug)]
pub struct InterviewGame {
    config: InterviewConfig,
    tracker: StatusTracker,
    pool: CandidatePool<Applicant>,
    rng: GameRng,
    state: InterviewState,
    turn: u32,
    current: Option<Applicant>,
    questions_remaining: u32,
    asked: Vec<usize>,
    final_score: Option<f32>,
    events: EventBus<InterviewEvent>,
}

fn refuse(err: GameError) -> GameError {
    warn!(error = %err, "interview command refused");
    err
}

impl InterviewGame {
    /// Create a game over a fixed applicant pool.
    ///
    /// # Errors
    ///
    /// `GameError::InvalidConfig` if `config` fails validation or an
    /// applicant's impact is NaN or infinite.
    pub fn new(config: InterviewConfig, applicants: Vec<Applicant>, seed: u64) -> Result<Self, GameError> {
        config.validate()?;
        if let Some(bad) = applicants.iter().find(|a| !a.impact.is_finite()) {
            return Err(GameError::InvalidConfig(format!(
                "applicant {} has non-finite impact {}",
                bad.name, bad.impact
            )));
        }
        if applicants.is_empty() {
            warn!("interview game created with an empty applicant pool");
        }

        Ok(Self {
            tracker: StatusTracker::new(config.tracker.clone())?,
            config,
            pool: CandidatePool::new(applicants),
            rng: GameRng::new(seed),
            state: InterviewState::NotStarted,
            turn: 0,
            current: None,
            questions_remaining: 0,
            asked: Vec::new(),
            final_score: None,
            events: EventBus::new(),
        })
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &InterviewConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> InterviewState {
        self.state
    }

    /// Current turn number, starting at 1. Zero before the first turn.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// The applicant being interviewed, if any.
    #[must_use]
    pub fn current_applicant(&self) -> Option<&Applicant> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn questions_remaining(&self) -> u32 {
        self.questions_remaining
    }

    #[must_use]
    pub fn tracker(&self) -> &StatusTracker {
        &self.tracker
    }

    /// Applicants not yet seen this round.
    #[must_use]
    pub fn available_applicants(&self) -> &[Applicant] {
        self.pool.available()
    }

    /// Score the game ended with, once it has ended.
    #[must_use]
    pub fn final_score(&self) -> Option<f32> {
        self.final_score
    }

    // === Observers ===

    pub fn subscribe(&mut self, listener: impl FnMut(&InterviewEvent) + 'static) -> ListenerId {
        self.events.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.events.unsubscribe(id)
    }

    /// Buffer game events for polling.
    pub fn capture(&mut self) -> EventQueue<InterviewEvent> {
        self.events.capture()
    }

    /// Listen for company status changes.
    pub fn on_status(&mut self, listener: impl FnMut(&StatusSnapshot) + 'static) -> ListenerId {
        self.tracker.subscribe(listener)
    }

    pub fn unsubscribe_status(&mut self, id: ListenerId) -> bool {
        self.tracker.unsubscribe(id)
    }

    // === Commands ===

    /// Start the game and its first turn.
    ///
    /// # Errors
    ///
    /// `GameError::InvalidTransition` unless the game is `NotStarted`.
    pub fn start(&mut self) -> Result<(), GameError> {
        if self.state != InterviewState::NotStarted {
            return Err(refuse(GameError::InvalidTransition {
                command: "start",
                state: self.state.name(),
            }));
        }

        self.change_state(InterviewState::Playing);
        self.turn = 0;
        self.final_score = None;
        self.tracker.reset();
        self.pool.start_session();

        info!(applicants = self.pool.available_len(), "interview game started");
        self.events.emit(&InterviewEvent::GameStarted);
        self.start_next_turn();
        Ok(())
    }

    /// Ask the current applicant one of their interview questions.
    ///
    /// Each question can be asked once per turn, within the per-turn budget.
    /// Returns the applicant's answer.
    ///
    /// # Errors
    ///
    /// - `InvalidTransition` outside `Playing`
    /// - `NoCandidate` if no applicant was drawn this turn
    /// - `UnknownQuestion` if the applicant has no question at `index`
    /// - `NoQuestionsRemaining` once the budget is spent
    /// - `QuestionAlreadyAsked` for a repeat
    pub fn ask_question(&mut self, index: usize) -> Result<String, GameError> {
        self.ensure_playing("ask a question")?;

        let applicant = self.current.as_ref().ok_or_else(|| refuse(GameError::NoCandidate))?;
        let question = applicant
            .question(index)
            .ok_or_else(|| refuse(GameError::UnknownQuestion(format!("interview question {index}"))))?;
        if self.questions_remaining == 0 {
            return Err(refuse(GameError::NoQuestionsRemaining));
        }
        if self.asked.contains(&index) {
            return Err(refuse(GameError::QuestionAlreadyAsked(index)));
        }
        let answer = question.answer.clone();

        self.questions_remaining -= 1;
        self.asked.push(index);
        debug!(index, remaining = self.questions_remaining, "interview question answered");
        self.events.emit(&InterviewEvent::QuestionAnswered {
            index,
            answer: answer.clone(),
            remaining: self.questions_remaining,
        });
        Ok(answer)
    }

    /// Recruit or reject the current applicant, ending the turn.
    ///
    /// A recruit refused because the company is full still ends the turn.
    ///
    /// # Errors
    ///
    /// - `InvalidTransition` outside `Playing`
    /// - `NoCandidate` if no applicant was drawn this turn
    pub fn make_choice(&mut self, choice: Choice) -> Result<(), GameError> {
        self.ensure_playing("make a choice")?;
        let applicant = self.current.take().ok_or_else(|| refuse(GameError::NoCandidate))?;

        match choice {
            Choice::Recruit => {
                info!(name = %applicant.name, impact = applicant.impact, "recruit");
                if self.tracker.apply_effect(applicant.impact).is_ok() {
                    self.events.emit(&InterviewEvent::Recruited(applicant.name));
                }
            }
            Choice::Reject => {
                info!(name = %applicant.name, "reject");
                self.events.emit(&InterviewEvent::Rejected(applicant.name));
            }
        }

        self.end_turn();
        Ok(())
    }

    /// Return to `NotStarted` from any state so `start` can run again.
    pub fn reset_to_not_started(&mut self) {
        self.change_state(InterviewState::NotStarted);
        self.turn = 0;
        self.current = None;
        self.questions_remaining = 0;
        self.asked.clear();
        self.final_score = None;
        self.tracker.reset();
        self.pool.clear();
        self.events.emit(&InterviewEvent::GameReset);
    }

    // === Turn flow ===

    fn ensure_playing(&self, command: &'static str) -> Result<(), GameError> {
        if self.state == InterviewState::Playing {
            Ok(())
        } else {
            Err(refuse(GameError::InvalidTransition {
                command,
                state: self.state.name(),
            }))
        }
    }

    fn start_next_turn(&mut self) {
        if self.state != InterviewState::Playing {
            return;
        }

        self.turn += 1;
        self.questions_remaining = self.config.questions_per_turn;
        self.asked.clear();
        self.current = None;
        info!(turn = self.turn, "turn started");
        self.events.emit(&InterviewEvent::TurnStarted(self.turn));

        match self.pool.draw_random(&mut self.rng) {
            Ok(applicant) => {
                debug!(name = %applicant.name, "applicant drawn");
                self.events.emit(&InterviewEvent::ApplicantDrawn(applicant.clone()));
                self.current = Some(applicant);
            }
            Err(err) => warn!(error = %err, turn = self.turn, "turn has no applicant"),
        }
    }

    fn end_turn(&mut self) {
        info!(turn = self.turn, "turn ended");
        self.events.emit(&InterviewEvent::TurnEnded(self.turn));

        if self.is_ending() {
            self.finish();
        } else {
            self.start_next_turn();
        }
    }

    fn is_ending(&self) -> bool {
        self.tracker.is_full()
            || self.pool.is_exhausted()
            || self.config.max_turns.is_some_and(|max| self.turn >= max)
    }

    fn finish(&mut self) {
        let score = self.tracker.final_score();
        self.final_score = Some(score);
        info!(
            employees = self.tracker.employees(),
            status = self.tracker.status(),
            final_score = score,
            "game ending"
        );

        if score >= self.config.clear_score {
            self.change_state(InterviewState::GameCleared);
            self.events.emit(&InterviewEvent::GameCleared { final_score: score });
        } else {
            self.change_state(InterviewState::GameOver);
            self.events.emit(&InterviewEvent::GameOver { final_score: score });
        }
    }

    fn change_state(&mut self, next: InterviewState) {
        if self.state == next {
            return;
        }
        info!(from = %self.state, to = %next, "game state changed");
        self.state = next;
    }
}
