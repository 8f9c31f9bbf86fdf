pub mod hads;
pub mod mmse;
pub mod zung;
