//! Applicants for the interview game.

mod applicant;

pub use applicant::{Applicant, InterviewQuestion};
