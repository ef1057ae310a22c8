mod base;
mod exp;

pub use base::ReplayMemory;
pub use exp::*;
