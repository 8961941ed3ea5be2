//! # Shared Types Crate
//!
//! Wire-level entities for the Unpay protocol.
//!
//! ## Design Principles
//!
//! - **Canonical Encoding**: every entity that is hashed implements
//!   [`Encodable`] and produces the exact byte layout peers expect.
//! - **Internal vs Display Order**: [`Hash256`] stores digests in the order
//!   the hash function emits them and renders them byte-reversed, the
//!   established display convention of the protocol.

pub mod compact;
pub mod encoding;
pub mod entities;
pub mod errors;
pub mod script;

pub use compact::CompactTarget;
pub use encoding::{serialize, write_compact_size, Encodable};
pub use entities::*;
pub use errors::*;
pub use script::{encode_script_num, opcodes, Script, ScriptBuilder};
