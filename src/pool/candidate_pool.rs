//! Two-tier candidate collection.
//!
//! The master list is fixed at construction. Each session works on an
//! `available` copy that shrinks as candidates are drawn or eliminated:
//!
//! - `draw_random` removes one candidate at random and refills from the
//!   master list once the available set runs dry (no repeats before refill)
//! - `filter` removes every candidate whose answer to a question differs
//!   from the expected answer

use tracing::{debug, warn};

use crate::core::{GameError, GameRng};

use super::Predicate;

/// Master list plus the subset still in play this session.
#[derive(Clone, Debug)]
pub struct CandidatePool<T> {
    master: Vec<T>,
    available: Vec<T>,
}

impl<T: Clone> CandidatePool<T> {
    /// Create a pool. Nothing is available until `start_session`.
    #[must_use]
    pub fn new(master: Vec<T>) -> Self {
        Self {
            master,
            available: Vec::new(),
        }
    }

    /// The fixed master list.
    #[must_use]
    pub fn master(&self) -> &[T] {
        &self.master
    }

    /// Candidates still in play, in master order.
    #[must_use]
    pub fn available(&self) -> &[T] {
        &self.available
    }

    #[must_use]
    pub fn available_len(&self) -> usize {
        self.available.len()
    }

    /// True once every candidate of this round has been drawn or eliminated.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.available.is_empty()
    }

    /// Make the whole master list available again.
    pub fn start_session(&mut self) {
        self.refill();
    }

    /// Clear the available set without touching the master list.
    pub fn clear(&mut self) {
        self.available.clear();
    }

    fn refill(&mut self) {
        self.available.clone_from(&self.master);
    }

    /// Remove and return a uniformly random available candidate.
    ///
    /// Refills from the master list first if nothing is available.
    ///
    /// # Errors
    ///
    /// `GameError::EmptyPool` if the master list itself is empty.
    pub fn draw_random(&mut self, rng: &mut GameRng) -> Result<T, GameError> {
        if self.available.is_empty() {
            if self.master.is_empty() {
                warn!("master pool is empty, cannot draw a candidate");
                return Err(GameError::EmptyPool);
            }
            debug!(size = self.master.len(), "every candidate seen, refilling pool");
            self.refill();
        }

        let index = rng.gen_range_usize(0..self.available.len());
        let drawn = self.available.remove(index);
        debug!(index, remaining = self.available.len(), "drew candidate");
        Ok(drawn)
    }

    /// Pick a uniformly random candidate from the master list.
    ///
    /// The available set is not affected.
    ///
    /// # Errors
    ///
    /// `GameError::EmptyPool` if the master list is empty.
    pub fn pick_hidden(&self, rng: &mut GameRng) -> Result<T, GameError> {
        let index = rng.gen_index(self.master.len()).ok_or(GameError::EmptyPool)?;
        Ok(self.master[index].clone())
    }

    /// Keep only the candidates for which `predicate` answers `expected`.
    ///
    /// Returns how many candidates were removed.
    pub fn filter<P>(&mut self, predicate: &P, expected: bool) -> usize
    where
        P: Predicate<T> + ?Sized,
    {
        let before = self.available.len();
        self.available.retain(|candidate| predicate.evaluate(candidate) == expected);
        let removed = before - self.available.len();
        debug!(removed, remaining = self.available.len(), "filtered candidates");
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nothing_available_before_session() {
        let mut pool = CandidatePool::new(vec![1, 2, 3]);
        assert!(pool.is_exhausted());
        assert_eq!(pool.master(), &[1, 2, 3]);

        pool.start_session();
        assert_eq!(pool.available(), &[1, 2, 3]);
    }

    #[test]
    fn test_draw_without_repeats() {
        let mut rng = GameRng::new(42);
        let mut pool = CandidatePool::new(vec![1, 2, 3, 4, 5]);
        pool.start_session();

        let mut drawn: Vec<_> = (0..5).map(|_| pool.draw_random(&mut rng).unwrap()).collect();
        assert!(pool.is_exhausted());

        drawn.sort();
        assert_eq!(drawn, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_draw_refills_when_exhausted() {
        let mut rng = GameRng::new(42);
        let mut pool = CandidatePool::new(vec!['a', 'b']);
        pool.start_session();

        pool.draw_random(&mut rng).unwrap();
        pool.draw_random(&mut rng).unwrap();
        assert!(pool.is_exhausted());

        let third = pool.draw_random(&mut rng).unwrap();
        assert!(['a', 'b'].contains(&third));
        assert_eq!(pool.available_len(), 1);
        assert_ne!(pool.available()[0], third);
    }

    #[test]
    fn test_draw_from_empty_master() {
        let mut rng = GameRng::new(42);
        let mut pool: CandidatePool<u8> = CandidatePool::new(Vec::new());
        pool.start_session();

        assert_eq!(pool.draw_random(&mut rng), Err(GameError::EmptyPool));
        assert!(pool.is_exhausted());
    }

    #[test]
    fn test_pick_hidden_leaves_available_alone() {
        let mut rng = GameRng::new(3);
        let mut pool = CandidatePool::new(vec![10, 20, 30]);
        pool.start_session();

        let hidden = pool.pick_hidden(&mut rng).unwrap();
        assert!(pool.master().contains(&hidden));
        assert_eq!(pool.available_len(), 3);

        let empty: CandidatePool<u8> = CandidatePool::new(Vec::new());
        assert_eq!(empty.pick_hidden(&mut rng), Err(GameError::EmptyPool));
    }

    #[test]
    fn test_filter_keeps_matching_answers() {
        let mut pool = CandidatePool::new((1..=10).collect::<Vec<u32>>());
        pool.start_session();

        let is_even = |n: &u32| n % 2 == 0;
        let removed = pool.filter(&is_even, true);

        assert_eq!(removed, 5);
        assert_eq!(pool.available(), &[2, 4, 6, 8, 10]);

        let removed = pool.filter(&|n: &u32| *n > 5, false);
        assert_eq!(removed, 3);
        assert_eq!(pool.available(), &[2, 4]);
    }

    #[test]
    fn test_clear_and_restart() {
        let mut pool = CandidatePool::new(vec![1, 2]);
        pool.start_session();
        pool.clear();
        assert!(pool.is_exhausted());

        pool.start_session();
        assert_eq!(pool.available_len(), 2);
    }
}
