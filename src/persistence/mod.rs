//! Save/load persistence
//!
//! Features:
//! - Flat comma-separated board codec
//! - Versionless JSON envelope for games in progress
//! - LocalStorage backing on the web, no-ops natively

pub mod codec;
pub mod envelope;

pub use codec::{GridParseError, decode_grid, encode_grid};
pub use envelope::{RestoreError, SavedGame};
