use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

fn run_help(home: &TempDir, args: &[&str]) {
    let mut cmd = cargo_bin_cmd!("gallery-placeholders");
    cmd.env("HOME", home.path())
        .current_dir(home.path())
        .args(args)
        .arg("--help")
        .assert()
        .success();
}

#[test]
fn every_cli_command_has_help_path() {
    let home = TempDir::new().expect("temp home");

    run_help(&home, &[]);
    run_help(&home, &["run"]);
    run_help(&home, &["generate"]);
    run_help(&home, &["patch"]);

    // help must not touch the working directory
    assert!(!home.path().join("photo_placeholders.html").exists());
}

#[test]
fn unknown_locale_is_rejected() {
    let home = TempDir::new().expect("temp home");
    let mut cmd = cargo_bin_cmd!("gallery-placeholders");
    cmd.env("HOME", home.path())
        .current_dir(home.path())
        .args(["--lang", "fr", "generate"])
        .assert()
        .failure();
    assert!(!home.path().join("photo_placeholders.html").exists());
}
