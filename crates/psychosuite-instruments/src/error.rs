use thiserror::Error;

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),

    #[error("{instrument_id}: expected {expected} answers, got {got}")]
    AnswerCountMismatch {
        instrument_id: String,
        expected: usize,
        got: usize,
    },
}
