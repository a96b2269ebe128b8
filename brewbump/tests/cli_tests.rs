//! CLI integration tests running the real brewbump binary against a mock index.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const OLD_SHA256: &str = "b5154e4cdcb87a0ba2b74207b92540ad6c2ef30df34c41e7058dbefcdd859855";
const NEW_SHA256: &str = "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824";
const README: &str = "# corgea-cli tap\n\n- **Version**: 1.9.0\n";

#[allow(deprecated)]
fn brewbump_cmd(workdir: &Path, server: &MockServer) -> Command {
    let mut cmd = Command::cargo_bin("brewbump").unwrap();
    cmd.current_dir(workdir)
        .env_remove("GITHUB_OUTPUT")
        .env_remove("BREWBUMP_PACKAGE")
        .env_remove("BREWBUMP_FORMULA")
        .env_remove("BREWBUMP_README")
        .env_remove("BREWBUMP_TIMEOUT_SECS")
        .env("BREWBUMP_INDEX_URL", format!("{}/pypi", server.uri()))
        .env("NO_COLOR", "1");
    cmd
}

fn tap_checkout(formula_url: &str) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("Formula")).unwrap();
    fs::write(
        dir.path().join("Formula/corgea-cli.rb"),
        format!(
            "class CorgeaCli < Formula\n  url \"{formula_url}\"\n  sha256 \"{OLD_SHA256}\"\nend\n"
        ),
    )
    .unwrap();
    fs::write(dir.path().join("README.md"), README).unwrap();
    dir
}

async fn mock_index(version: &str) -> MockServer {
    let server = MockServer::start().await;
    let filename = format!("corgea_cli-{version}.tar.gz");
    Mock::given(method("GET"))
        .and(path("/pypi/corgea-cli/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "info": { "version": version },
            "releases": { version: [{
                "filename": filename,
                "url": format!("{}/files/{filename}", server.uri()),
                "packagetype": "sdist",
                "digests": { "sha256": NEW_SHA256 }
            }]}
        })))
        .mount(&server)
        .await;
    server
}

const OLD_URL: &str = "https://files.pythonhosted.org/packages/67/41/abc/corgea_cli-1.9.0.tar.gz";

#[tokio::test(flavor = "multi_thread")]
async fn sync_without_github_output_prints_legacy_commands() {
    let server = mock_index("2.0.0").await;
    let tap = tap_checkout(OLD_URL);

    brewbump_cmd(tap.path(), &server)
        .arg("sync")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "::set-output name=current_version::1.9.0",
        ))
        .stdout(predicate::str::contains(
            "::set-output name=new_version::2.0.0",
        ))
        .stdout(predicate::str::contains(
            "::set-output name=update_needed::true",
        ));

    let formula = fs::read_to_string(tap.path().join("Formula/corgea-cli.rb")).unwrap();
    assert!(formula.contains("corgea_cli-2.0.0.tar.gz"));
    assert!(formula.contains(NEW_SHA256));
    let readme = fs::read_to_string(tap.path().join("README.md")).unwrap();
    assert!(readme.contains("- **Version**: 2.0.0"));
}

#[tokio::test(flavor = "multi_thread")]
async fn sync_appends_to_github_output_file() {
    let server = mock_index("1.9.0").await;
    let tap = tap_checkout(OLD_URL);
    let output_file = tap.path().join("gh_output");

    brewbump_cmd(tap.path(), &server)
        .env("GITHUB_OUTPUT", &output_file)
        .arg("sync")
        .assert()
        .success()
        .stdout(predicate::str::contains("::set-output").not());

    assert_eq!(
        fs::read_to_string(&output_file).unwrap(),
        "current_version=1.9.0\nnew_version=1.9.0\nupdate_needed=false\n"
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn unparseable_formula_url_exits_non_zero() {
    let server = mock_index("2.0.0").await;
    let tap = tap_checkout("https://example.com/corgea.zip");
    let before = fs::read_to_string(tap.path().join("Formula/corgea-cli.rb")).unwrap();

    brewbump_cmd(tap.path(), &server)
        .arg("sync")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Could not extract version"));

    assert_eq!(
        fs::read_to_string(tap.path().join("Formula/corgea-cli.rb")).unwrap(),
        before
    );
    assert_eq!(
        fs::read_to_string(tap.path().join("README.md")).unwrap(),
        README
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn readme_problems_do_not_fail_the_run() {
    let server = mock_index("2.0.0").await;
    let tap = tap_checkout(OLD_URL);
    fs::write(tap.path().join("README.md"), "# no version line\n").unwrap();

    brewbump_cmd(tap.path(), &server)
        .arg("sync")
        .assert()
        .success()
        .stderr(predicate::str::contains("Could not update"));

    let formula = fs::read_to_string(tap.path().join("Formula/corgea-cli.rb")).unwrap();
    assert!(formula.contains("corgea_cli-2.0.0.tar.gz"));
}

#[tokio::test(flavor = "multi_thread")]
async fn missing_package_on_index_exits_non_zero() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pypi/corgea-cli/json"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    let tap = tap_checkout(OLD_URL);

    brewbump_cmd(tap.path(), &server)
        .arg("sync")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[tokio::test(flavor = "multi_thread")]
async fn dry_run_flag_leaves_files_alone() {
    let server = mock_index("2.0.0").await;
    let tap = tap_checkout(OLD_URL);
    let before = fs::read_to_string(tap.path().join("Formula/corgea-cli.rb")).unwrap();

    brewbump_cmd(tap.path(), &server)
        .args(["sync", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dry run"));

    assert_eq!(
        fs::read_to_string(tap.path().join("Formula/corgea-cli.rb")).unwrap(),
        before
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn current_and_latest_subcommands() {
    let server = mock_index("2.0.0").await;
    let tap = tap_checkout(OLD_URL);

    brewbump_cmd(tap.path(), &server)
        .arg("current")
        .assert()
        .success()
        .stdout("1.9.0\n");

    brewbump_cmd(tap.path(), &server)
        .args(["latest", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"version\": \"2.0.0\""))
        .stdout(predicate::str::contains(NEW_SHA256));
}

#[tokio::test(flavor = "multi_thread")]
async fn flags_override_environment() {
    let server = mock_index("2.0.0").await;
    let tap = tap_checkout(OLD_URL);
    fs::rename(
        tap.path().join("Formula/corgea-cli.rb"),
        tap.path().join("corgea.rb"),
    )
    .unwrap();

    brewbump_cmd(tap.path(), &server)
        .env("BREWBUMP_FORMULA", "does/not/exist.rb")
        .args(["current", "--formula", "corgea.rb"])
        .assert()
        .success()
        .stdout("1.9.0\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn invalid_timeout_is_rejected() {
    let server = mock_index("2.0.0").await;
    let tap = tap_checkout(OLD_URL);

    brewbump_cmd(tap.path(), &server)
        .args(["--timeout", "0", "current"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("timeout"));
}

#[tokio::test(flavor = "multi_thread")]
async fn formula_without_sha256_fails_after_emitting_outputs() {
    let server = mock_index("2.0.0").await;
    let tap = tap_checkout(OLD_URL);
    fs::write(
        tap.path().join("Formula/corgea-cli.rb"),
        format!("class CorgeaCli < Formula\n  url \"{OLD_URL}\"\nend\n"),
    )
    .unwrap();

    brewbump_cmd(tap.path(), &server)
        .arg("sync")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains(
            "::set-output name=update_needed::true",
        ))
        .stderr(predicate::str::contains("No sha256 field"));

    assert_eq!(
        fs::read_to_string(tap.path().join("README.md")).unwrap(),
        README
    );
}
