//! Remote execution over OpenSSH

mod executor;
mod tee;

pub use executor::{LiveOutput, SshExecutor};
pub use tee::Tee;
