mod report;

pub use report::Report;

/// Represents a Markov decision process, defining the dynamics of an
/// environment in which an agent can operate.
///
/// This base trait covers the common case of a discrete-time MDP with a single
/// agent and a finite action space.
pub trait Environment {
    /// A representation of the state of the environment to be passed to an agent
    ///
    /// The implementation of [`Clone`] should be very lightweight, as states are
    /// cloned often. Ideally this type is [`Copy`].
    type State: Clone;

    /// A representation of an action that an agent can take to affect the environment
    type Action: Clone;

    /// Sample a uniformly random action from the action space
    fn random_action(&self) -> Self::Action;

    /// Update the environment in response to an action taken by an agent,
    /// producing a new state and associated reward
    ///
    /// **Returns** `(next_state, reward)` where `next_state` is `None` if the
    /// episode has terminated
    fn step(&mut self, action: Self::Action) -> (Option<Self::State>, f32);

    /// Reset the environment to an initial state
    ///
    /// **Returns** the state
    fn reset(&mut self) -> Self::State;
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// A trivial one-step environment for testing components generic over [`Environment`]
    pub struct MockEnv;

    impl Environment for MockEnv {
        type State = i32;
        type Action = i32;

        fn random_action(&self) -> Self::Action {
            0
        }

        fn step(&mut self, _action: Self::Action) -> (Option<Self::State>, f32) {
            (None, 0.0)
        }

        fn reset(&mut self) -> Self::State {
            0
        }
    }
}
