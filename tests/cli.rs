use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::io::Write;

fn expression_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, "{}", content).expect("write expression");
    file
}

#[test]
fn expr_uses_default_format() {
    let mut cmd = cargo_bin_cmd!("munch");
    cmd.arg("expr").arg("3.0 + 2.0 * 4.0");

    cmd.assert().success().stdout("11\n");
}

#[test]
fn expr_with_explicit_format() {
    let mut cmd = cargo_bin_cmd!("munch");
    cmd.arg("expr").arg("5.0-3.0-2.0").arg("ast-simple");

    cmd.assert().success().stdout("(5 - (3 - 2))\n");
}

#[test]
fn process_file_as_tokens() {
    let file = expression_file("(1.0 + .5)\n");
    let mut cmd = cargo_bin_cmd!("munch");
    cmd.arg("process").arg(file.path()).arg("token-simple");

    cmd.assert()
        .success()
        .stdout("<lparen><num:1.0><plus><num:.5><rparen>\n");
}

#[test]
fn lex_error_shows_source_context() {
    let file = expression_file("1.0 +\n2.0 * @\n");
    let mut cmd = cargo_bin_cmd!("munch");
    cmd.arg("process").arg(file.path());

    let stderr = predicate::str::contains("Error: lexical error: unexpected character '@' at 1:6")
        .and(predicate::str::contains(">>   2 | 2.0 * @"));
    cmd.assert().failure().code(1).stderr(stderr);
}

#[test]
fn unknown_format_lists_formats() {
    let mut cmd = cargo_bin_cmd!("munch");
    cmd.arg("expr").arg("1.0").arg("ast-xml");

    let stderr = predicate::str::contains("Invalid format type: xml")
        .and(predicate::str::contains("Available formats:"))
        .and(predicate::str::contains("eval-json"));
    cmd.assert().failure().code(1).stderr(stderr);
}

#[test]
fn formats_lists_every_spec() {
    let mut cmd = cargo_bin_cmd!("munch");
    cmd.arg("formats");

    cmd.assert().success().stdout(
        predicate::str::contains("token-raw-simple")
            .and(predicate::str::contains("ast-treeviz"))
            .and(predicate::str::contains("eval-simple")),
    );
}

#[test]
fn config_file_changes_default_format() {
    let mut config = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("temp config");
    writeln!(config, "[output]\nformat = \"eval-json\"\npretty_json = false").expect("write config");

    let mut cmd = cargo_bin_cmd!("munch");
    cmd.arg("--config").arg(config.path()).arg("expr").arg("1.0/4.0");

    cmd.assert()
        .success()
        .stdout("{\"expression\":\"(1 / 4)\",\"value\":0.25}\n");
}

#[test]
fn missing_file_fails() {
    let mut cmd = cargo_bin_cmd!("munch");
    cmd.arg("process").arg("/no/such/expression.txt");

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("Error: failed to read"));
}
