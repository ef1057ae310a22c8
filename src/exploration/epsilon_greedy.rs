use rand::{thread_rng, Rng};

use crate::decay::Decay;

use super::Choice;

/// Epsilon greedy exploration policy with a time-decaying epsilon threshold
///
/// Epsilon is evaluated at each environment step, so the schedule decays per
/// frame rather than per episode.
pub struct EpsilonGreedy<D: Decay> {
    epsilon: D,
}

impl<D: Decay> EpsilonGreedy<D> {
    /// Initialize epsilon greedy policy with a decay strategy
    pub fn new(decay: D) -> Self {
        Self { epsilon: decay }
    }

    /// Invoke epsilon greedy policy for the current step
    pub fn choose(&self, step: u32) -> Choice {
        let epsilon = self.epsilon.evaluate(step as f32);
        if thread_rng().gen::<f32>() > epsilon {
            Choice::Exploit
        } else {
            Choice::Explore
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::decay;

    use super::*;

    #[test]
    fn epsilon_extremes() {
        let always_explore = EpsilonGreedy::new(decay::Constant::new(1.0));
        let always_exploit = EpsilonGreedy::new(decay::Constant::new(0.0));

        for step in 0..100 {
            assert!(
                matches!(always_explore.choose(step), Choice::Explore),
                "epsilon 1.0 always explores"
            );
            assert!(
                matches!(always_exploit.choose(step), Choice::Exploit),
                "epsilon 0.0 always exploits"
            );
        }
    }
}
