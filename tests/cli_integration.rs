//! End-to-end tests for the `reporef` binary.
//!
//! Every invocation runs with an isolated HOME and no GitHub token so the
//! developer's own configuration never leaks into the results.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

fn reporef(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("reporef").unwrap();
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("REPOREF_CONFIG")
        .env_remove("GH_TOKEN")
        .env_remove("GITHUB_TOKEN");
    cmd
}

// =============================================================================
// Global flags
// =============================================================================

#[test]
fn help_lists_commands() {
    let home = TempDir::new().unwrap();
    reporef(home.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("parse"))
        .stdout(predicate::str::contains("lookup"))
        .stdout(predicate::str::contains("match"));
}

#[test]
fn version() {
    let home = TempDir::new().unwrap();
    reporef(home.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_command_fails() {
    let home = TempDir::new().unwrap();
    reporef(home.path()).arg("frobnicate").assert().failure();
}

// =============================================================================
// parse
// =============================================================================

mod parse {
    use super::*;

    #[test]
    fn shorthand() {
        let home = TempDir::new().unwrap();
        reporef(home.path())
            .args(["parse", "facebook/react"])
            .assert()
            .success()
            .stdout("facebook/react\n");
    }

    #[test]
    fn urls_and_ssh() {
        let home = TempDir::new().unwrap();
        for input in [
            "https://github.com/facebook/react",
            "http://github.com/facebook/react.git",
            "github.com/facebook/react/",
            "www.github.com/facebook/react",
            "git@github.com:facebook/react.git",
        ] {
            reporef(home.path())
                .args(["parse", input])
                .assert()
                .success()
                .stdout("facebook/react\n");
        }
    }

    #[test]
    fn leading_space_is_stripped() {
        let home = TempDir::new().unwrap();
        reporef(home.path())
            .args(["parse", " facebook/react"])
            .assert()
            .success()
            .stdout("facebook/react\n");
    }

    #[test]
    fn second_space_requires_flag() {
        let home = TempDir::new().unwrap();
        reporef(home.path())
            .args(["parse", " face book/react"])
            .assert()
            .failure();

        reporef(home.path())
            .args(["parse", " face book/react", "--all-whitespace"])
            .assert()
            .success()
            .stdout("facebook/react\n");
    }

    #[test]
    fn rejected_input_exits_with_error() {
        let home = TempDir::new().unwrap();
        reporef(home.path())
            .args(["parse", "not a repo"])
            .assert()
            .code(1)
            .stdout("")
            .stderr(predicate::str::contains("not a repository reference"));
    }

    #[test]
    fn explain_shows_reason() {
        let home = TempDir::new().unwrap();
        reporef(home.path())
            .args(["parse", "https://github.com/a/b/c", "--explain"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("expected 2 path segments, found 3"));
    }

    #[test]
    fn json_success() {
        let home = TempDir::new().unwrap();
        let output = reporef(home.path())
            .args(["--json", "parse", "git@github.com:rustlang/rust.git"])
            .output()
            .unwrap();
        assert!(output.status.success());

        let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(value["input"], "git@github.com:rustlang/rust.git");
        assert_eq!(value["reference"]["owner"], "rustlang");
        assert_eq!(value["reference"]["name"], "rust");
        assert_eq!(value["web_url"], "https://github.com/rustlang/rust");
        assert_eq!(value["clone_url"], "https://github.com/rustlang/rust.git");
    }

    #[test]
    fn hyphenated_ssh_owner_is_rejected() {
        let home = TempDir::new().unwrap();
        reporef(home.path())
            .args(["parse", "git@github.com:rust-lang/rust.git"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("not a repository reference"));

        // The URL form has no such restriction
        reporef(home.path())
            .args(["parse", "https://github.com/rust-lang/rust.git"])
            .assert()
            .success()
            .stdout("rust-lang/rust\n");
    }

    #[test]
    fn json_urls_follow_web_base() {
        let home = TempDir::new().unwrap();
        let config = home.path().join("reporef.toml");
        std::fs::write(&config, "web_base = \"https://ghe.example.com/\"\n").unwrap();

        let output = reporef(home.path())
            .arg("--config")
            .arg(&config)
            .args(["--json", "parse", "acme/widgets"])
            .output()
            .unwrap();
        assert!(output.status.success());

        let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(value["web_url"], "https://ghe.example.com/acme/widgets");
    }

    #[test]
    fn json_rejection() {
        let home = TempDir::new().unwrap();
        let output = reporef(home.path())
            .args(["--json", "parse", ""])
            .output()
            .unwrap();
        assert_eq!(output.status.code(), Some(1));

        let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert!(value["reference"].is_null());
        assert_eq!(value["reason"], "input is empty");
    }

    #[test]
    fn whitespace_mode_from_config() {
        let home = TempDir::new().unwrap();
        let config = home.path().join("reporef.toml");
        std::fs::write(&config, "[parse]\nwhitespace = \"all\"\n").unwrap();

        reporef(home.path())
            .arg("--config")
            .arg(&config)
            .args(["parse", " face book/react"])
            .assert()
            .success()
            .stdout("facebook/react\n");
    }
}

// =============================================================================
// match
// =============================================================================

mod match_cmd {
    use super::*;

    #[test]
    fn picks_most_similar_org() {
        let home = TempDir::new().unwrap();
        reporef(home.path())
            .args([
                "match",
                "Acme Corp",
                "--user",
                "octocat",
                "--org",
                "AcmeCorp",
                "--org",
                "globex",
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("AcmeCorp (organization)"));
    }

    #[test]
    fn ratings_list_every_candidate() {
        let home = TempDir::new().unwrap();
        reporef(home.path())
            .args(["match", "octo", "--user", "octocat", "--org", "globex", "--ratings"])
            .assert()
            .success()
            .stdout(predicate::str::contains("globex"))
            .stdout(predicate::str::contains("octocat (user)"));
    }

    #[test]
    fn json_report() {
        let home = TempDir::new().unwrap();
        let output = reporef(home.path())
            .args(["--json", "match", "globex", "--org", "acme", "--org", "globex"])
            .output()
            .unwrap();
        assert!(output.status.success());

        let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(value["team_name"], "globex");
        assert_eq!(value["account"]["login"], "globex");
        assert_eq!(value["account"]["kind"], "organization");
        assert_eq!(value["ratings"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn without_candidates_or_token_fails() {
        let home = TempDir::new().unwrap();
        reporef(home.path())
            .args(["match", "Acme"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Failed to list accounts"));
    }
}

// =============================================================================
// lookup
// =============================================================================

mod lookup {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config_for(home: &Path, server: &MockServer) -> std::path::PathBuf {
        let config = home.join("reporef.toml");
        std::fs::write(&config, format!("api_base = \"{}\"\n", server.uri())).unwrap();
        config
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn prints_repository() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/repos/facebook/react"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": "react",
                "full_name": "facebook/react",
                "owner": { "login": "facebook" },
                "private": false,
                "html_url": "https://github.com/facebook/react",
                "default_branch": "main"
            })))
            .mount(&server)
            .await;

        let home = TempDir::new().unwrap();
        let config = config_for(home.path(), &server);

        reporef(home.path())
            .arg("--config")
            .arg(&config)
            .args(["lookup", "https://github.com/facebook/react.git"])
            .assert()
            .success()
            .stdout(predicate::str::contains("facebook/react"))
            .stdout(predicate::str::contains("default branch: main"))
            .stdout(predicate::str::contains("public"));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn missing_repository_warns_about_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "message": "Not Found" })))
            .mount(&server)
            .await;

        let home = TempDir::new().unwrap();
        let config = config_for(home.path(), &server);

        reporef(home.path())
            .arg("--config")
            .arg(&config)
            .args(["lookup", "facebook/missing"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("facebook/missing"))
            .stderr(predicate::str::contains("GH_TOKEN"));
    }

    #[test]
    fn invalid_reference_fails_before_network() {
        let home = TempDir::new().unwrap();
        // Unroutable API base: reaching the network would be a bug
        std::fs::write(
            home.path().join("reporef.toml"),
            "api_base = \"http://127.0.0.1:9\"\n",
        )
        .unwrap();

        reporef(home.path())
            .arg("--config")
            .arg(home.path().join("reporef.toml"))
            .args(["lookup", "definitely not a repo"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("not a repository reference"));
    }
}

// =============================================================================
// config
// =============================================================================

mod config {
    use super::*;

    #[test]
    fn list_defaults() {
        let home = TempDir::new().unwrap();
        reporef(home.path())
            .args(["config", "list"])
            .assert()
            .success()
            .stdout(predicate::str::contains("api_base = https://api.github.com"))
            .stdout(predicate::str::contains("parse.whitespace = first"));
    }

    #[test]
    fn set_then_get() {
        let home = TempDir::new().unwrap();
        let config = home.path().join("nested/reporef.toml");

        reporef(home.path())
            .arg("--config")
            .arg(&config)
            .args(["config", "set", "web_base", "https://ghe.example.com"])
            .assert()
            .success();
        assert!(config.exists());

        reporef(home.path())
            .arg("--config")
            .arg(&config)
            .args(["config", "get", "web_base"])
            .assert()
            .success()
            .stdout("https://ghe.example.com\n");
    }

    #[test]
    fn set_rejects_invalid_value() {
        let home = TempDir::new().unwrap();
        let config = home.path().join("reporef.toml");

        reporef(home.path())
            .arg("--config")
            .arg(&config)
            .args(["config", "set", "parse.whitespace", "sometimes"])
            .assert()
            .failure();
        assert!(!config.exists());
    }

    #[test]
    fn unknown_key() {
        let home = TempDir::new().unwrap();
        reporef(home.path())
            .args(["config", "get", "colour"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("colour"));
    }

    #[test]
    fn set_without_flag_writes_home_config() {
        let home = TempDir::new().unwrap();
        reporef(home.path())
            .args(["config", "set", "parse.whitespace", "all"])
            .assert()
            .success();

        assert!(home.path().join(".reporef/config.toml").exists());

        reporef(home.path())
            .args(["config", "get", "parse.whitespace"])
            .assert()
            .success()
            .stdout("all\n");
    }

    #[test]
    fn path_honors_env() {
        let home = TempDir::new().unwrap();
        let config = home.path().join("custom.toml");

        reporef(home.path())
            .env("REPOREF_CONFIG", &config)
            .args(["config", "path"])
            .assert()
            .success()
            .stdout(predicate::str::contains("custom.toml"));
    }

    #[test]
    fn malformed_config_is_reported() {
        let home = TempDir::new().unwrap();
        let config = home.path().join("reporef.toml");
        std::fs::write(&config, "api_base = [").unwrap();

        reporef(home.path())
            .arg("--config")
            .arg(&config)
            .args(["parse", "a/b"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Failed to load config"));
    }
}

// =============================================================================
// completion
// =============================================================================

#[test]
fn completion_scripts() {
    let home = TempDir::new().unwrap();
    for shell in ["bash", "zsh", "fish"] {
        reporef(home.path())
            .args(["completion", shell])
            .assert()
            .success()
            .stdout(predicate::str::contains("reporef"));
    }
}
