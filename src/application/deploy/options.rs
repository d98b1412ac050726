//! Deploy Options

use crate::config::Context;

/// Options for the deploy use case
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeployOptions {
    /// Leave the staging directory in place after the run
    pub keep_order: bool,
}

impl DeployOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_context(context: &Context) -> Self {
        Self::new().with_keep_order(context.keep_order)
    }

    pub fn with_keep_order(mut self, keep_order: bool) -> Self {
        self.keep_order = keep_order;
        self
    }
}
