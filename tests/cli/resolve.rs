//! Tests for the default resolve command.

use crate::support::*;
use predicates::prelude::*;
use std::ffi::OsStr;
use std::os::unix::ffi::OsStrExt;

#[test]
fn test_plain_environment_prints_only_blank_line() {
    let t = Test::new();

    let output = t.resolve(&[("FOO", "bar")]);
    assert_success(&output);
    assert_eq!(stdout(&output), "\n");
}

#[test]
fn test_pass_reference_is_resolved() {
    let t = Test::with_secrets(&[("db/creds", "s3cr3t\n")]);

    let output = t.resolve(&[("DB_PASS", "pass:db/creds")]);
    assert_success(&output);
    assert_stdout_line(&output, "export DB_PASS=s3cr3t");
}

#[test]
fn test_output_starts_with_blank_line() {
    let t = Test::with_secrets(&[("db/creds", "s3cr3t\n")]);

    let output = t.resolve(&[("DB_PASS", "pass:db/creds")]);
    assert_success(&output);
    assert_eq!(stdout(&output), "\nexport DB_PASS=s3cr3t\n");
}

#[test]
fn test_only_first_line_is_exported() {
    let t = Test::with_secrets(&[("db/creds", DB_CREDS_ENTRY)]);

    let output = t.resolve(&[("DB_PASS", "pass:db/creds")]);
    assert_success(&output);
    assert_stdout_line(&output, "export DB_PASS=s3cr3t");
    assert_stdout_excludes(&output, "login: app");
}

#[test]
fn test_crlf_line_endings_stripped() {
    let t = Test::with_secrets(&[("win/entry", CRLF_ENTRY)]);

    let output = t.resolve(&[("WIN", "pass:win/entry")]);
    assert_success(&output);
    assert_stdout_line(&output, "export WIN=crlf-secret");
    assert_stdout_excludes(&output, "\r");
}

#[test]
fn test_entry_without_trailing_newline() {
    let t = Test::with_secrets(&[("bare", "no-newline")]);

    let output = t.resolve(&[("BARE", "pass:bare")]);
    assert_success(&output);
    assert_stdout_line(&output, "export BARE=no-newline");
}

#[test]
fn test_reserved_processor_passes_through() {
    let t = Test::new();

    let output = t.resolve(&[("API_KEY", "vault:some/key")]);
    assert_success(&output);
    assert_stdout_line(&output, "export API_KEY=vault:some/key");
}

#[test]
fn test_unrecognized_prefixes_are_skipped() {
    let t = Test::new();

    let output = t.resolve(&[
        ("DATABASE_URL", "postgres://user:pw@localhost/db"),
        ("PASSWORD", "password:hunter2"),
        ("UPPER", "PASS:db/creds"),
    ]);
    assert_success(&output);
    assert_eq!(stdout(&output), "\n");
}

#[test]
fn test_key_may_contain_colons() {
    let t = Test::with_secrets(&[("team:prod", "colon-secret\n")]);

    let output = t.resolve(&[("PROD", "pass:team:prod")]);
    assert_success(&output);
    assert_stdout_line(&output, "export PROD=colon-secret");
}

#[test]
fn test_multiple_references_all_exported() {
    let t = Test::with_secrets(&[("a", "alpha\n"), ("b", "beta\n")]);

    let output = t.resolve(&[
        ("FIRST", "pass:a"),
        ("PLAIN", "value"),
        ("SECOND", "pass:b"),
        ("THIRD", "vault:x"),
    ]);
    assert_success(&output);

    // Environment order is up to the host, so only check membership
    let mut exports: Vec<String> = stdout_lines(&output)
        .into_iter()
        .filter(|l| l.starts_with("export "))
        .collect();
    exports.sort();
    assert_eq!(
        exports,
        vec![
            "export FIRST=alpha",
            "export SECOND=beta",
            "export THIRD=vault:x",
        ]
    );
}

#[test]
fn test_value_is_not_quoted() {
    let t = Test::with_secrets(&[("spaced", "two words\n")]);

    let output = t.resolve(&[("SPACED", "pass:spaced")]);
    assert_success(&output);
    assert_stdout_line(&output, "export SPACED=two words");
}

#[test]
fn test_store_sees_closed_stdin() {
    let t = Test::new();

    t.cmd()
        .env("PROBE", "pass:probe/stdin")
        .write_stdin("hunter2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("export PROBE=stdin-closed"));
}

#[test]
fn test_key_is_interpolated_into_shell() {
    let t = Test::new();

    // `pass show probe/args extra words` sees three arguments after `show`
    let output = t.resolve(&[("ARGS", "pass:probe/args extra words")]);
    assert_success(&output);
    assert_stdout_line(&output, "export ARGS=3");
}

#[test]
fn test_stdout_holds_no_diagnostics() {
    let t = Test::with_secrets(&[("db/creds", "s3cr3t\n")]);

    t.cmd()
        .arg("--verbose")
        .env("DB_PASS", "pass:db/creds")
        .assert()
        .success()
        .stdout("\nexport DB_PASS=s3cr3t\n");
}

#[test]
fn test_non_unicode_variable_does_not_block_others() {
    let t = Test::with_secrets(&[("db/creds", "s3cr3t\n")]);

    let output = t
        .cmd()
        .env("LEGACY", OsStr::from_bytes(LATIN1_VALUE))
        .env("DB_PASS", "pass:db/creds")
        .output()
        .unwrap();
    assert_success(&output);
    assert_eq!(stdout(&output), "\nexport DB_PASS=s3cr3t\n");
}

#[test]
fn test_binary_lines_after_password_are_ignored() {
    let t = Test::new();
    t.add_secret_bytes("site/login", BINARY_TAIL_ENTRY);

    let output = t.resolve(&[("LOGIN", "pass:site/login")]);
    assert_success(&output);
    assert_eq!(stdout(&output), "\nexport LOGIN=s3cr3t\n");
}
