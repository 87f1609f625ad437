use pretty_assertions::assert_eq;
use test_harness::GitPublish;

#[test]
fn publish_usage_unknown_command() {
    let harness = GitPublish::new().unwrap();
    harness.setup_repo_with_remote("site").unwrap();

    let output = harness.cmd().arg("foo").output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Usage"), "stderr: {stderr}");

    // Usage errors short-circuit before any side effect.
    harness.assert_no_staging("site");
}
