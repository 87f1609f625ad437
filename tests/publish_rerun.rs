use command_error::CommandExt;
use test_harness::GitPublish;

#[test]
fn publish_rerun() {
    let harness = GitPublish::new().unwrap();
    harness.setup_repo_with_remote("site").unwrap();

    for _ in 0..2 {
        harness
            .cmd()
            .args(["publish", "-d", "site", "-b", "gh-pages"])
            .status_checked()
            .unwrap();
        harness.assert_no_staging("site");
    }

    assert!(harness
        .remote_git("site")
        .branch()
        .exists_local("gh-pages")
        .unwrap());
}
