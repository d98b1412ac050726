//! Remote script builders
//!
//! Each function returns the ordered command list handed to a
//! [`RemoteShell`](crate::domain::ports::RemoteShell).

use crate::config::{defaults, Context};

/// Omnitruck installer used to put chef-client on the host.
pub const CHEF_INSTALL_URL: &str = "https://omnitruck.chef.io/install.sh";

/// Quote a value for a POSIX shell.
pub fn shell_quote(s: &str) -> String {
    if !s.is_empty()
        && s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./:=@,+".contains(c))
    {
        return s.to_string();
    }
    format!("'{}'", s.replace('\'', "'\\''"))
}

/// Wipe registered nodes, then run chef-client in local mode.
pub fn converge_script(context: &Context) -> Vec<String> {
    let mut chef_client = format!(
        "chef-client --local-mode --json-attributes {} --chef-license accept",
        defaults::ATTRIBUTES_FILE
    );
    if let Some(run_list) = context.run_list.as_ref().filter(|r| !r.is_empty()) {
        chef_client.push_str(" --override-runlist ");
        chef_client.push_str(&shell_quote(&run_list.join(",")));
    }

    vec![
        format!("cd {}", shell_quote(&context.remote_dir)),
        "knife node bulk delete --local-mode --yes '.*' > /dev/null 2>&1".to_string(),
        chef_client,
    ]
}

/// Print a remote file, used to surface a dumped stacktrace.
pub fn cat_script(path: &str) -> Vec<String> {
    vec![format!("cat {}", shell_quote(path))]
}

/// Install prerequisites and chef-client, optionally pinned.
pub fn bootstrap_script(context: &Context) -> Vec<String> {
    let installer = match &context.chef_version {
        Some(version) => format!(
            "curl -L {} | bash -s -- -v {}",
            CHEF_INSTALL_URL,
            shell_quote(version)
        ),
        None => format!("curl -L {} | bash", CHEF_INSTALL_URL),
    };

    vec![
        "export DEBIAN_FRONTEND=noninteractive".to_string(),
        "apt-get update".to_string(),
        "apt-get install -y curl rsync".to_string(),
        installer,
        format!("mkdir -p {}", shell_quote(&context.remote_dir)),
    ]
}

/// The interactive ssh invocation an operator can paste into a terminal.
pub fn ssh_command_line(context: &Context) -> Option<String> {
    let host = context.host.as_deref()?;
    Some(format!(
        "ssh -A -p {} {}@{}",
        context.port, context.user, host
    ))
}
