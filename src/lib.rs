/// Implemented RL algorithms, currently only Double DQN
pub mod algo;

/// Implementations of strategies for time-decaying hyperparameters
pub mod decay;

/// Data structures
pub mod ds;

/// Environment
pub mod env;

/// Exploration policies
pub mod exploration;

/// Experience replay
pub mod memory;

/// Conversions between environment types and tensors
pub mod traits;

/// Testing environments
#[cfg(feature = "gym")]
pub mod gym;

/// Live training visualization
#[cfg(feature = "viz")]
pub mod viz;

mod util;
