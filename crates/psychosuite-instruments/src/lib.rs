//! psychosuite-instruments
//!
//! Psychometric instrument definitions and deterministic scoring. Pure
//! data and pure functions — no storage or AWS dependency. Defines the
//! questions, answer options, and score classification ladder for each
//! supported instrument, plus the in-memory session state machine for a
//! single administration.

pub mod error;
pub mod instruments;
pub mod scoring;
pub mod session;

use jiff::Timestamp;
use psychosuite_core::id::fresh_id;
use psychosuite_core::models::TestResult;

use error::InstrumentError;
use scoring::{Ladder, Question, ScoreReport};

/// Trait implemented by each psychometric instrument.
pub trait Instrument: Send + Sync {
    /// Unique identifier for this instrument (e.g., "mmse", "zung").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "MMSE", "Zung SDS").
    fn name(&self) -> &str;

    /// One-line description shown when selecting an instrument.
    fn description(&self) -> &str;

    /// The ordered questions of this instrument.
    fn questions(&self) -> &[Question];

    /// The score classification ladder for this instrument.
    fn ladder(&self) -> &Ladder;

    /// Highest total reachable by answering every question at its maximum.
    fn max_score(&self) -> u32 {
        self.questions().iter().map(Question::max_option_score).sum()
    }

    /// Score a complete answer sequence.
    ///
    /// `answers` must contain exactly one value per question. The total is
    /// the plain sum of the answer values (reverse-keyed items already
    /// carry pre-computed option scores), and the interpretation comes from
    /// this instrument's ladder. Deterministic: identical inputs always
    /// yield an identical report.
    fn score(&self, answers: &[u32]) -> Result<ScoreReport, InstrumentError> {
        if answers.len() != self.questions().len() {
            return Err(InstrumentError::AnswerCountMismatch {
                instrument_id: self.id().to_string(),
                expected: self.questions().len(),
                got: answers.len(),
            });
        }
        let total: u32 = answers.iter().sum();
        Ok(ScoreReport {
            total,
            interpretation: self.ladder().interpret(total),
        })
    }

    /// Score a completed administration and package it as a result record.
    fn build_result(
        &self,
        client_id: &str,
        answers: Vec<u32>,
        now: Timestamp,
    ) -> Result<TestResult, InstrumentError> {
        let report = self.score(&answers)?;
        Ok(TestResult {
            id: fresh_id(now),
            client_id: client_id.to_string(),
            test_id: self.id().to_string(),
            administered_at: now,
            answers,
            total: report.total,
            interpretation: None,
        })
    }
}

/// Return all registered instruments, in stable registration order.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![
        Box::new(instruments::mmse::Mmse),
        Box::new(instruments::hads::Hads),
        Box::new(instruments::zung::Zung),
    ]
}

/// Look up an instrument by ID.
pub fn get_instrument(id: &str) -> Result<Box<dyn Instrument>, InstrumentError> {
    all_instruments()
        .into_iter()
        .find(|i| i.id() == id)
        .ok_or_else(|| InstrumentError::UnknownInstrument(id.to_string()))
}
