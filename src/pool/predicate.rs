//! Boolean tests over a candidate.

/// A pure yes/no test over a candidate.
///
/// Implemented by the built-in card questions and by any closure
/// `Fn(&C) -> bool`, so new kinds of question attach without touching the
/// games that evaluate them.
///
/// ```
/// use pocket_games::pool::Predicate;
///
/// let is_even = |n: &u32| n % 2 == 0;
/// assert!(is_even.evaluate(&4));
/// assert!(!is_even.evaluate(&5));
/// ```
pub trait Predicate<C: ?Sized> {
    /// Answer the question for one candidate.
    fn evaluate(&self, candidate: &C) -> bool;
}

impl<C: ?Sized, F> Predicate<C> for F
where
    F: Fn(&C) -> bool,
{
    fn evaluate(&self, candidate: &C) -> bool {
        self(candidate)
    }
}
