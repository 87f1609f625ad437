use command_error::CommandExt;
use expect_test::expect;
use pretty_assertions::assert_eq;
use test_harness::GitPublish;

#[test]
fn publish_simple() {
    let harness = GitPublish::new().unwrap();
    harness.setup_repo_with_remote("site").unwrap();

    harness
        .cmd()
        .args(["publish", "-d", "site", "-b", "gh-pages"])
        .status_checked()
        .unwrap();

    assert!(harness
        .remote_git("site")
        .branch()
        .exists_local("gh-pages")
        .unwrap());
    harness.assert_no_staging("site");

    // The source checkout is untouched; only the staging copy switched branches.
    assert_eq!(harness.current_branch_in("site").unwrap(), "main");

    harness
        .sh("git clone --branch gh-pages site-remote.git published")
        .unwrap();
    harness.assert_contents(&[(
        "published/index.html",
        expect![[r#"
            puppy doggy
        "#]],
    )]);
}
