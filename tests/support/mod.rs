// tests/support/mod.rs
// Shared by several integration test binaries; each one uses a different
// subset of the helpers.
#[allow(dead_code, unused_imports)]
pub mod clock;

#[allow(dead_code, unused_imports)]
pub mod helpers;

#[allow(dead_code, unused_imports)]
pub mod mocks;

#[allow(unused_imports)]
pub use clock::*;
#[allow(unused_imports)]
pub use helpers::*;
#[allow(unused_imports)]
pub use mocks::*;
