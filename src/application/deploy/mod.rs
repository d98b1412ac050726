//! Deploy Module
//!
//! ## Structure
//!
//! - `options` - Configuration types (`DeployOptions`)
//! - `result` - Result types (`DeployResult`)
//! - `staging` - Staging directory guard and `attributes.json` writer
//! - `use_case` - Core use case logic (`DeployUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use sous::application::deploy::{DeployOptions, DeployUseCase};
//!
//! let use_case = DeployUseCase::new(chef, rsync, ssh);
//! let result = use_case.execute(&context, &DeployOptions::from_context(&context))?;
//! ```

mod options;
mod result;
mod staging;
mod use_case;

pub use options::DeployOptions;
pub use result::DeployResult;
pub use staging::{stage_attributes, StagingArea, STAGING_PREFIX};
pub use use_case::DeployUseCase;
