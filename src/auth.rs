//! Consumer credentials, redacted secrets, and token response signature checks.

pub mod secret;
pub mod signature;

pub use secret::*;
pub use signature::*;
