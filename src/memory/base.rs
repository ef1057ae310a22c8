use rand::{seq::SliceRandom, thread_rng};

use crate::{ds::RingBuffer, env::Environment};

use super::{Exp, ExpBatch};

/// A fixed-capacity memory storage for reinforcement learning experiences
///
/// This structure uses a ring buffer to store experiences, which are tuples of
/// (state, action, next state, reward). It automatically overwrites the oldest
/// experiences once it reaches its capacity.
pub struct ReplayMemory<E: Environment> {
    memory: RingBuffer<Exp<E>>,
    /// The number of experiences to sample per training step
    pub batch_size: usize,
}

impl<E: Environment> ReplayMemory<E> {
    pub fn new(capacity: usize, batch_size: usize) -> Self {
        Self {
            memory: RingBuffer::new(capacity),
            batch_size,
        }
    }

    /// Construct a new `ReplayMemory` from a provided `Vec` of experiences
    pub fn from(data: Vec<Exp<E>>, batch_size: usize) -> Self {
        Self {
            memory: RingBuffer::from(data),
            batch_size,
        }
    }

    /// The number of stored experiences
    pub fn len(&self) -> usize {
        self.memory.len()
    }

    pub fn is_empty(&self) -> bool {
        self.memory.len() == 0
    }

    /// Add a new experience to the memory
    pub fn push(&mut self, exp: Exp<E>) {
        self.memory.push(exp);
    }

    /// Sample a random batch of experiences from the memory, uniformly without replacement
    ///
    /// ### Returns
    /// - `Some(experiences)` if at least `batch_size` experiences are stored
    /// - `None` otherwise
    pub fn sample(&self) -> Option<Vec<&Exp<E>>> {
        (self.batch_size <= self.memory.len()).then(|| {
            self.memory
                .view()
                .choose_multiple(&mut thread_rng(), self.batch_size)
                .collect()
        })
    }

    /// Sample a random batch of experiences from the memory and zip the batch
    /// into a struct of parallel vectors
    ///
    /// ### Returns
    /// - `Some(batch)` if at least `batch_size` experiences are stored
    /// - `None` otherwise
    pub fn sample_zipped(&self) -> Option<ExpBatch<E>> {
        (self.batch_size <= self.memory.len()).then(|| {
            let experiences = self
                .memory
                .view()
                .choose_multiple(&mut thread_rng(), self.batch_size)
                .cloned();
            ExpBatch::from_iter(experiences, self.batch_size)
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::env::tests::MockEnv;

    use super::*;

    const MEMORY_CAP: usize = 4;
    const BATCH_SIZE: usize = 2;

    fn create_mock_exp_vec() -> Vec<Exp<MockEnv>> {
        (0..4)
            .map(|i| Exp {
                state: i,
                action: i + 1,
                next_state: Some(i + 1),
                reward: 1.0,
            })
            .collect()
    }

    #[test]
    fn replay_memory_functional() {
        let experiences = create_mock_exp_vec();
        let mut memory = ReplayMemory::new(MEMORY_CAP, BATCH_SIZE);

        assert!(
            memory.sample().is_none(),
            "sample none when too few experiences"
        );
        assert!(
            memory.sample_zipped().is_none(),
            "sample_zipped none when too few experiences"
        );

        for exp in experiences {
            memory.push(exp);
        }

        assert_eq!(memory.len(), MEMORY_CAP, "all experiences stored");
        assert!(
            memory.sample().is_some_and(|b| b.len() == BATCH_SIZE),
            "sample works"
        );
        assert!(
            memory
                .sample_zipped()
                .is_some_and(|b| b.states.len() == BATCH_SIZE),
            "sample_zipped works"
        );
    }

    #[test]
    fn replay_memory_evicts_oldest() {
        let mut memory = ReplayMemory::from(create_mock_exp_vec(), BATCH_SIZE);

        memory.push(Exp {
            state: 100,
            action: 0,
            next_state: None,
            reward: 0.0,
        });

        assert_eq!(memory.len(), MEMORY_CAP, "capacity unchanged after push");
    }
}
