mod common;

use common::*;

#[test]
fn test_unknown_verb_prints_usage_and_exits_zero() {
    let env = TestEnv::builder().without_system_path().build();

    let result = env.run(&["frobnicate"]);

    assert!(result.success, "{}", result.combined_output());
    assert!(result.stdout.contains("Usage: sous"));
    assert!(result.stdout.contains("init <dir> [name]"));
    assert!(env.staging_dirs().is_empty());
}

#[test]
fn test_no_verb_prints_usage() {
    let env = TestEnv::builder().without_system_path().build();

    let result = env.run(&[]);

    assert_eq!(result.exit_code, 0);
    assert!(result.stdout.contains("Usage: sous"));
}

#[test]
fn test_missing_config_is_reported_plainly() {
    let env = TestEnv::builder().without_system_path().build();

    let result = env.run(&["deploy"]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("config file not found"));
    assert!(result.stderr.contains("delivery.edn"));
    assert!(!result.stderr.contains("Error:"), "no debug dump: {}", result.stderr);
}

#[test]
fn test_invalid_config_lists_every_violation() {
    let env = TestEnv::builder()
        .with_config("{:host 5 :port \"22\" :user \"ok\"}\n")
        .without_system_path()
        .build();

    let result = env.run(&["ssh"]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("invalid config file"));
    assert!(result.stderr.contains("host: expected a string, got 5"));
    assert!(result
        .stderr
        .contains("port: expected an integer between 1 and 65535, got \"22\""));
}

#[test]
fn test_config_flag_points_at_a_toml_file() {
    let env = TestEnv::builder()
        .with_project_file("envs/staging.toml", "host = \"staging.example\"\n")
        .without_system_path()
        .build();

    let result = env.run(&["-c", "envs/staging.toml", "ssh"]);

    assert!(result.success, "{}", result.combined_output());
    assert_eq!(result.stdout, "ssh -A -p 22 root@staging.example\n");
}
