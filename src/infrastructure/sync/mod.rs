//! Payload transfer implementations

mod rsync;

pub use rsync::RsyncTransfer;
