//! Deploy Use Case
//!
//! Orchestrates one converge run:
//! 1. Acquire a staging directory
//! 2. Package the policy into it
//! 3. Stage `attributes.json`
//! 4. Transfer the payload
//! 5. Converge on the remote host
//! 6. On failure, surface chef-client's dumped stacktrace
//! 7. Remove (or retain) the staging directory
//!
//! Step 7 runs whatever happened before it.

use std::path::Path;
use std::sync::Arc;

use crate::config::Context;
use crate::domain::ports::{
    DeployEvent, DeployEventSink, DeployStep, NoopEventSink, PayloadTransfer, PolicyTool,
    RemoteShell,
};
use crate::domain::services::{
    cat_script, converge_script, find_stacktrace_path, merge_attributes, StageOutcome,
};
use crate::error::{SousError, SousResult};
use crate::infrastructure::secrets::load_secrets;

use super::options::DeployOptions;
use super::result::DeployResult;
use super::staging::{stage_attributes, StagingArea};

/// Deploy use case, parameterized by its ports so tests can stand in for
/// chef, rsync, and ssh.
pub struct DeployUseCase<P, T, R>
where
    P: PolicyTool,
    T: PayloadTransfer,
    R: RemoteShell,
{
    pub(super) policy: P,
    pub(super) transfer: T,
    pub(super) remote: R,
}

impl<P, T, R> DeployUseCase<P, T, R>
where
    P: PolicyTool,
    T: PayloadTransfer,
    R: RemoteShell,
{
    pub fn new(policy: P, transfer: T, remote: R) -> Self {
        Self {
            policy,
            transfer,
            remote,
        }
    }

    pub fn execute(&self, context: &Context, options: &DeployOptions) -> SousResult<DeployResult> {
        self.execute_with_events(context, options, Arc::new(NoopEventSink))
    }

    /// Execute the deploy, reporting progress to `events`.
    pub fn execute_with_events(
        &self,
        context: &Context,
        options: &DeployOptions,
        events: Arc<dyn DeployEventSink>,
    ) -> SousResult<DeployResult> {
        let staging = match StagingArea::create(&context.project_dir) {
            Ok(staging) => staging,
            Err(err) => {
                tracing::warn!(error = %err, "could not create staging directory");
                events.on_event(DeployEvent::Completed { success: false });
                return Err(err);
            }
        };
        let staging_dir = staging.path().to_path_buf();
        tracing::info!(
            staging = %staging_dir.display(),
            transfer = self.transfer.name(),
            destination = %self.transfer.destination(),
            "starting deploy"
        );
        events.on_event(DeployEvent::Started {
            destination: self.transfer.destination(),
            staging_dir: staging_dir.clone(),
        });

        let outcome = self.run_steps(context, &staging_dir, events.as_ref());
        let cleanup = self.finish(staging, options.keep_order, events.as_ref());

        let result = match (outcome, cleanup) {
            (Ok(attributes), Ok(retained)) => Ok(DeployResult {
                staging_dir,
                retained,
                attributes,
            }),
            (Ok(_), Err(cleanup_err)) => Err(cleanup_err),
            (Err(err), Ok(_)) => Err(err),
            (Err(err), Err(cleanup_err)) => {
                tracing::warn!(error = %cleanup_err, "staging cleanup failed after deploy error");
                Err(err)
            }
        };

        events.on_event(DeployEvent::Completed {
            success: result.is_ok(),
        });
        result
    }

    fn run_steps(
        &self,
        context: &Context,
        staging_dir: &Path,
        events: &dyn DeployEventSink,
    ) -> SousResult<StageOutcome> {
        let policyfile = context.policyfile();

        events.on_event(DeployEvent::StepStarted {
            step: DeployStep::Package,
        });
        self.policy.install(&policyfile)?;
        self.policy.export(&policyfile, staging_dir)?;

        events.on_event(DeployEvent::StepStarted {
            step: DeployStep::StageAttributes,
        });
        let secrets = load_secrets(&context.secrets_path)?;
        let payload = merge_attributes(context.attributes.as_ref(), secrets);
        let outcome = stage_attributes(staging_dir, &payload)?;
        tracing::info!(?outcome, "staged attributes");
        events.on_event(DeployEvent::AttributesStaged {
            path: staging_dir.join(crate::config::defaults::ATTRIBUTES_FILE),
            outcome,
        });

        events.on_event(DeployEvent::StepStarted {
            step: DeployStep::Transfer,
        });
        self.transfer.sync(staging_dir)?;
        events.on_event(DeployEvent::Transferred {
            destination: self.transfer.destination(),
        });

        events.on_event(DeployEvent::StepStarted {
            step: DeployStep::Converge,
        });
        let converge = self.remote.run_remote(&converge_script(context))?;
        tracing::info!(
            success = converge.success,
            exit_code = ?converge.exit_code,
            "converge finished"
        );
        events.on_event(DeployEvent::ConvergeFinished {
            success: converge.success,
            exit_code: converge.exit_code,
        });

        if !converge.success {
            if let Some(path) = find_stacktrace_path(&converge.output_lines) {
                self.show_stacktrace(&path, events);
            }
            return Err(SousError::from_remote_exit(converge.exit_code));
        }

        Ok(outcome)
    }

    /// Print the dumped trace. Its own failure only gets logged; the
    /// converge failure is what the run reports.
    fn show_stacktrace(&self, path: &str, events: &dyn DeployEventSink) {
        events.on_event(DeployEvent::StacktraceFound {
            path: path.to_string(),
        });
        match self.remote.run_remote(&cat_script(path)) {
            Ok(result) if !result.success => {
                tracing::warn!(path, exit_code = ?result.exit_code, "could not read stacktrace");
            }
            Ok(_) => {}
            Err(err) => tracing::warn!(path, error = %err, "could not read stacktrace"),
        }
    }

    /// Returns whether the staging directory was retained.
    fn finish(
        &self,
        staging: StagingArea,
        keep_order: bool,
        events: &dyn DeployEventSink,
    ) -> SousResult<bool> {
        if keep_order {
            let path = staging.keep();
            tracing::info!(path = %path.display(), "keeping staging directory");
            events.on_event(DeployEvent::StagingRetained { path });
            return Ok(true);
        }

        let path = staging.close()?;
        tracing::debug!(path = %path.display(), "removed staging directory");
        events.on_event(DeployEvent::StagingRemoved { path });
        Ok(false)
    }
}
