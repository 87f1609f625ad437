use pretty_assertions::assert_eq;
use test_harness::GitPublish;

#[test]
fn publish_usage_no_command() {
    let harness = GitPublish::new().unwrap();

    let output = harness.cmd().output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Usage"), "stderr: {stderr}");
}
