pub mod double_dqn;

pub use double_dqn::{DoubleDQNAgent, DoubleDQNAgentConfig, QNetwork};
