use command_error::CommandExt;
use git_publish::STAGING_DIR_NAME;
use test_harness::GitPublish;

#[test]
fn publish_skips_stale_staging() {
    let harness = GitPublish::new().unwrap();
    harness.setup_repo_with_remote("site").unwrap();

    // A staging directory left over from an interrupted run.
    harness
        .sh(&format!(
            r#"
            mkdir -p site/{STAGING_DIR_NAME}/nested
            echo "stale" > site/{STAGING_DIR_NAME}/nested/stale.txt
            "#
        ))
        .unwrap();

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
}
