//! cpplint-gate CLI tests.

use assert_cmd::Command;
use assert_fs::assert::PathAssert;
use assert_fs::fixture::FileWriteStr;
use assert_fs::fixture::PathChild;
use cpplint_gate::config::Config;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

type TestResult = Result<(), Box<dyn std::error::Error>>;

const CONFIG: &str = r#"
linter = "tools/lint.sh"
interpreter = "sh"
exclude = ["atom/browser/skip.h"]

[[roots]]
root = "atom"
directories = ["app", "browser"]
"#;

/// Tree with one linted, one excluded, one non-source file and a config.
fn project() -> Result<assert_fs::TempDir, Box<dyn std::error::Error>> {
    let tmp = assert_fs::TempDir::new()?;
    tmp.child(".cpplint-gate.toml").write_str(CONFIG)?;
    tmp.child("atom/app/a.cc").write_str("// a\n")?;
    tmp.child("atom/app/a.py").write_str("# a\n")?;
    tmp.child("atom/browser/skip.h").write_str("// skip\n")?;
    Ok(tmp)
}

#[test]
fn skips_when_linter_is_missing() -> TestResult {
    let tmp = project()?;

    Command::cargo_bin("cpplint-gate")?
        .current_dir(&tmp)
        .env("CLICOLOR", "0")
        .assert()
        .success()
        .stdout(contains("Skipping cpplint"));

    tmp.close()?;
    Ok(())
}

#[test]
fn quiet_suppresses_skip_notice() -> TestResult {
    let tmp = project()?;

    Command::cargo_bin("cpplint-gate")?
        .current_dir(&tmp)
        .arg("-q")
        .assert()
        .success()
        .stdout(predicates::str::is_empty());

    tmp.close()?;
    Ok(())
}

#[test]
fn root_flag_selects_project() -> TestResult {
    let tmp = project()?;
    let elsewhere = assert_fs::TempDir::new()?;

    Command::cargo_bin("cpplint-gate")?
        .current_dir(&elsewhere)
        .env("CLICOLOR", "0")
        .arg("--root")
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(contains("Skipping cpplint"));

    elsewhere.close()?;
    tmp.close()?;
    Ok(())
}

#[test]
fn rejects_unknown_flags() -> TestResult {
    Command::cargo_bin("cpplint-gate")?
        .env("CLICOLOR", "0")
        .arg("--bogus")
        .assert()
        .failure()
        .stderr(contains("Usage:"));
    Ok(())
}

#[test]
fn init_writes_default_config() -> TestResult {
    let tmp = assert_fs::TempDir::new()?;

    Command::cargo_bin("cpplint-gate")?
        .current_dir(&tmp)
        .arg("init")
        .assert()
        .success();

    let cfg_path = tmp.child(".cpplint-gate.toml");
    cfg_path.assert(predicates::path::exists());

    let s = std::fs::read_to_string(cfg_path.path())?;
    let cfg: Config = toml::from_str(&s)?;
    let def = Config::default();
    assert_eq!(cfg.roots, def.roots);
    assert_eq!(cfg.exclude, def.exclude);
    assert_eq!(cfg.extensions, def.extensions);

    Command::cargo_bin("cpplint-gate")?
        .current_dir(&tmp)
        .arg("init")
        .assert()
        .failure()
        .stderr(contains("--force"));

    Command::cargo_bin("cpplint-gate")?
        .current_dir(&tmp)
        .args(["init", "--force"])
        .assert()
        .success()
        .stdout(contains("Overwrote"));

    tmp.close()?;
    Ok(())
}

#[cfg(unix)]
mod with_linter {
    use super::*;

    /// Linter stub: records its arguments and exits with `code`.
    fn install_linter(tmp: &assert_fs::TempDir, code: i32) -> TestResult {
        tmp.child("tools/lint.sh").write_str(&format!(
            "echo \"$@\" > linted.txt\necho LINTER-OUTPUT\nexit {code}\n"
        ))?;
        Ok(())
    }

    #[test]
    fn forwards_linter_exit_code_and_files() -> TestResult {
        let tmp = project()?;
        install_linter(&tmp, 4)?;

        Command::cargo_bin("cpplint-gate")?
            .current_dir(&tmp)
            .assert()
            .code(4)
            .stdout(contains("LINTER-OUTPUT"));

        let args = std::fs::read_to_string(tmp.child("linted.txt").path())?;
        assert_eq!(args.trim(), "atom/app/a.cc");

        tmp.close()?;
        Ok(())
    }

    #[test]
    fn linter_output_hidden_on_success_without_verbose() -> TestResult {
        let tmp = project()?;
        install_linter(&tmp, 0)?;

        Command::cargo_bin("cpplint-gate")?
            .current_dir(&tmp)
            .assert()
            .success()
            .stdout(contains("LINTER-OUTPUT").not());

        Command::cargo_bin("cpplint-gate")?
            .current_dir(&tmp)
            .arg("-v")
            .assert()
            .success()
            .stdout(contains("LINTER-OUTPUT"));

        tmp.close()?;
        Ok(())
    }

    #[test]
    fn empty_set_never_starts_linter() -> TestResult {
        let tmp = project()?;
        install_linter(&tmp, 1)?;
        std::fs::remove_file(tmp.child("atom/app/a.cc").path())?;

        Command::cargo_bin("cpplint-gate")?
            .current_dir(&tmp)
            .env("CLICOLOR", "0")
            .assert()
            .success()
            .stdout(contains("No C++ files to lint"));

        tmp.child("linted.txt")
            .assert(predicates::path::missing());
        tmp.close()?;
        Ok(())
    }

    #[test]
    fn only_changed_outside_repository_fails() -> TestResult {
        let tmp = project()?;
        install_linter(&tmp, 0)?;
        let ceiling = tmp.path().parent().unwrap_or(tmp.path());

        Command::cargo_bin("cpplint-gate")?
            .current_dir(&tmp)
            .env("GIT_CEILING_DIRECTORIES", ceiling)
            .arg("--only-changed")
            .assert()
            .failure()
            .stderr(contains("version control unavailable"));

        tmp.child("linted.txt")
            .assert(predicates::path::missing());
        tmp.close()?;
        Ok(())
    }
}

#[cfg(unix)]
#[test]
fn very_verbose_reports_resolved_config() -> TestResult {
    let tmp = project()?;
    tmp.child("tools/lint.sh").write_str("exit 0\n")?;

    Command::cargo_bin("cpplint-gate")?
        .current_dir(&tmp)
        .env("CLICOLOR", "0")
        .arg("-vv")
        .assert()
        .success()
        .stderr(contains("extensions: cc, h"))
        .stderr(contains("1 root(s), 1 excluded path(s)"));

    tmp.close()?;
    Ok(())
}
