//! Test fixtures - config files and fake tool scripts.

/// Minimal config pointing at a host.
pub const HOST_CONFIG: &str = r#"{:host "10.0.0.5"}
"#;

/// Config exercising most keys.
pub const FULL_CONFIG: &str = r#"{:host "10.0.0.5"
 :port 2222
 :user "deploy"
 :remote-dir "/opt/chef"
 :run-list ["base::default" "web::default"]
 :attributes {:env "prod"}}
"#;

/// chef: logs its arguments; `export` drops a lock file into the target.
pub const CHEF_OK: &str = r#"#!/bin/sh
echo "$@" >> "$SOUS_TEST_LOG/chef.log"
if [ "$1" = "export" ]; then
  : > "$3/Policyfile.lock.json"
fi
exit 0
"#;

/// chef: `install` succeeds, `export` fails.
pub const CHEF_EXPORT_FAILS: &str = r#"#!/bin/sh
echo "$@" >> "$SOUS_TEST_LOG/chef.log"
if [ "$1" = "export" ]; then
  echo "Error: export failed" >&2
  exit 1
fi
exit 0
"#;

/// rsync: logs its arguments and a copy of the staged attributes.
pub const RSYNC_OK: &str = r#"#!/bin/sh
echo "$@" >> "$SOUS_TEST_LOG/rsync.log"
src="$4"
if [ -f "${src}attributes.json" ]; then
  cp "${src}attributes.json" "$SOUS_TEST_LOG/attributes.json"
fi
exit 0
"#;

/// ssh: logs arguments and stdin, then succeeds.
pub const SSH_OK: &str = r#"#!/bin/sh
echo "$@" >> "$SOUS_TEST_LOG/ssh-args.log"
script=$(cat)
printf '%s\n---\n' "$script" >> "$SOUS_TEST_LOG/ssh-stdin.log"
echo "Chef Infra Client finished"
exit 0
"#;

/// ssh: the converge fails with a stacktrace marker; `cat` of the trace works.
pub const SSH_CONVERGE_FATAL: &str = r#"#!/bin/sh
echo "$@" >> "$SOUS_TEST_LOG/ssh-args.log"
script=$(cat)
printf '%s\n---\n' "$script" >> "$SOUS_TEST_LOG/ssh-stdin.log"
case "$script" in
  *"cat /var/log/chef/trace.json"*)
    echo "TRACE-CONTENTS"
    exit 0
    ;;
esac
echo "[2024-05-01T10:00:00+00:00] FATAL: Stacktrace dumped to /var/log/chef/trace.json"
exit 1
"#;

/// ssh: cannot reach the host.
pub const SSH_UNREACHABLE: &str = r#"#!/bin/sh
cat > /dev/null
echo "ssh: connect to host 10.0.0.5 port 22: Connection refused" >&2
exit 255
"#;
