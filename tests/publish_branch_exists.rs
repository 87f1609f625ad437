use pretty_assertions::assert_eq;
use pretty_assertions::assert_ne;
use test_harness::GitPublish;

#[test]
fn publish_branch_exists() {
    let harness = GitPublish::new().unwrap();
    harness.setup_repo_with_remote("site").unwrap();
    // A commit `origin` doesn't have yet.
    harness
        .sh(r#"
        cd site || exit
        echo "new puppy" > index.html
        git commit -am "Update index.html"
        "#)
        .unwrap();

    // The staging copy is already on `main`, so creating the branch fails.
    let output = harness
        .cmd()
        .args(["publish", "-d", "site", "-b", "main"])
        .output()
        .unwrap();

    // Failures past argument parsing are reported without changing the exit status.
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(
        stdout.contains("Failed to create branch main"),
        "stdout: {stdout}"
    );

    // The push was never attempted, so `origin` is still behind the source checkout.
    assert_ne!(
        harness.rev_parse("site", "main").unwrap(),
        harness.rev_parse("site-remote.git", "main").unwrap()
    );

    harness.assert_no_staging("site");
}
