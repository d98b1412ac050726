//! Re-lock the policy

use crate::config::Context;
use crate::domain::ports::PolicyTool;
use crate::error::SousResult;

/// Run `chef update` against the project's Policyfile.
pub fn update_policy(policy: &impl PolicyTool, context: &Context) -> SousResult<()> {
    let policyfile = context.policyfile();
    tracing::info!(policyfile = %policyfile.display(), "updating policy lock");
    policy.update(&policyfile)
}
