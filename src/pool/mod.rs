//! Candidate pools and the questions used to narrow them.

mod candidate_pool;
mod predicate;

pub use candidate_pool::CandidatePool;
pub use predicate::Predicate;
