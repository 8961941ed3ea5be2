//! # Adapters
//!
//! Production implementations of the outbound ports.
//!
//! | Port | Mock (Testing) | Production |
//! |------|----------------|------------|
//! | `TimeSource` | `FixedTimeSource` | `SystemTimeSource` |
//! | `RandomSource` | `FixedRandomSource` | `ThreadRandomSource` |
//! | `FlagSource` | `MapFlagSource` | `EnvFlagSource` |

pub mod env;
pub mod system;

pub use env::EnvFlagSource;
pub use system::{SystemTimeSource, ThreadRandomSource};
