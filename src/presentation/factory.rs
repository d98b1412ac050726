//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::{DeployUseCase, InitUseCase};
use crate::config::Context;
use crate::error::SousResult;
use crate::infrastructure::{ChefCli, LiveOutput, RsyncTransfer, SshExecutor};

/// Type alias for the concrete DeployUseCase with all dependencies
pub type ConcreteDeployUseCase = DeployUseCase<ChefCli, RsyncTransfer, SshExecutor>;

/// Create a deploy use case targeting the context's host.
///
/// With `json`, tool and live remote output stay off stdout so the NDJSON
/// stream remains parseable.
pub fn create_deploy_use_case(context: &Context, json: bool) -> SousResult<ConcreteDeployUseCase> {
    Ok(DeployUseCase::new(
        ChefCli::new(&context.project_dir).with_quiet(json),
        RsyncTransfer::new(context)?.with_quiet(json),
        create_remote_shell(context, json)?,
    ))
}

pub fn create_remote_shell(context: &Context, json: bool) -> SousResult<SshExecutor> {
    let live = if json {
        LiveOutput::Stderr
    } else {
        LiveOutput::Stdout
    };
    Ok(SshExecutor::new(context)?.with_live_output(live))
}

pub fn create_init_use_case(project_dir: &std::path::Path, json: bool) -> InitUseCase<ChefCli> {
    InitUseCase::new(ChefCli::new(project_dir).with_quiet(json))
}
