use pretty_assertions::assert_eq;
use test_harness::GitPublish;

#[test]
fn publish_usage_missing_flags() {
    let harness = GitPublish::new().unwrap();
    harness.setup_repo_with_remote("site").unwrap();

    let output = harness
        .cmd()
        .args(["publish", "-d", "site"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("--branch"), "stderr: {stderr}");

    harness.assert_no_staging("site");
}
