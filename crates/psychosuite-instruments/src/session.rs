//! In-memory state machine for one questionnaire administration.
//!
//! Tracks the current question index and the answers collected so far,
//! one per already-answered question. Purely in-memory: the session never
//! touches storage and is never serialized. Completing or cancelling is
//! terminal; the caller scores and persists the final answers.

use thiserror::Error;

use crate::Instrument;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("question {question}: {value} is not one of the option scores")]
    InvalidOption { question: usize, value: u32 },

    #[error("session is finished; no further transitions accepted")]
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    InProgress,
    Completed,
    Cancelled,
}

/// A single in-progress administration. Invariant while in progress:
/// `answers.len() == index` and `index < question_count`.
#[derive(Debug, Clone)]
pub struct Session {
    test_id: String,
    question_count: usize,
    index: usize,
    answers: Vec<u32>,
    state: SessionState,
}

impl Session {
    /// Begin an administration at question 0 with no answers.
    pub fn start(instrument: &dyn Instrument) -> Self {
        Session {
            test_id: instrument.id().to_string(),
            question_count: instrument.questions().len(),
            index: 0,
            answers: Vec::new(),
            state: SessionState::InProgress,
        }
    }

    pub fn test_id(&self) -> &str {
        &self.test_id
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Index of the question currently awaiting an answer.
    pub fn current_question(&self) -> usize {
        self.index
    }

    pub fn answers(&self) -> &[u32] {
        &self.answers
    }

    /// Record an answer for the current question and advance. Answering
    /// the final question completes the session.
    pub fn answer(&mut self, instrument: &dyn Instrument, value: u32) -> Result<(), SessionError> {
        if self.state != SessionState::InProgress {
            return Err(SessionError::Finished);
        }
        let Some(question) = instrument.questions().get(self.index) else {
            return Err(SessionError::Finished);
        };
        if !question.accepts(value) {
            return Err(SessionError::InvalidOption {
                question: self.index,
                value,
            });
        }
        self.answers.push(value);
        if self.index + 1 == self.question_count {
            self.state = SessionState::Completed;
        } else {
            self.index += 1;
        }
        Ok(())
    }

    /// Step back one question, discarding its answer. Stepping back from
    /// question 0 cancels the session.
    pub fn back(&mut self) -> Result<(), SessionError> {
        if self.state != SessionState::InProgress {
            return Err(SessionError::Finished);
        }
        if self.index == 0 {
            self.state = SessionState::Cancelled;
        } else {
            self.index -= 1;
            self.answers.pop();
        }
        Ok(())
    }

    /// Consume a completed session, yielding the full answer sequence.
    pub fn into_answers(self) -> Result<Vec<u32>, SessionError> {
        if self.state != SessionState::Completed {
            return Err(SessionError::Finished);
        }
        Ok(self.answers)
    }
}
