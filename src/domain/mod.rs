//! Domain Layer
//!
//! Pure deploy logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `services/` - Attribute merge, stacktrace detection, remote scripts
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or network directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod ports;
pub mod services;
