// src/cli/mod.rs

pub mod operation;
pub mod report;
pub mod session;

// Re-export main types for convenience
pub use operation::{Operation, Outcome};
pub use report::{calculate, CalcError};
pub use session::{MenuChoice, Session};
