use thiserror::Error;

use psychosuite_instruments::error::InstrumentError;
use psychosuite_instruments::session::SessionError;
use psychosuite_report::error::ReportError;
use psychosuite_store::error::StoreError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Instrument(#[from] InstrumentError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Report(#[from] ReportError),

    #[error("no test run is in progress")]
    NoActiveRun,
}
