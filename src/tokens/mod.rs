//! Token collaborator
//!
//! The `TokenApi` trait plus two implementations: a file-backed service used
//! by the binary and an in-memory store.

pub mod api;
pub mod local;
pub mod memory;

pub use api::{NewToken, TokenApi, TOKEN_VALUE_PREFIX};
pub use local::LocalTokenService;
pub use memory::MemoryTokenStore;
