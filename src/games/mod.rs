//! Concrete games built on the core, pool and tracker modules.
//!
//! - `interview`: recruit-or-reject hiring game
//! - `deduction`: guess the hidden card by narrowing the deck with questions

pub mod deduction;
pub mod interview;
