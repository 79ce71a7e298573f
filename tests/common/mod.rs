#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub site: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        let site = tmp.path().join("site");
        fs::create_dir_all(&home).expect("create isolated home");
        fs::create_dir_all(&site).expect("create site dir");

        Self {
            _tmp: tmp,
            home,
            site,
        }
    }

    /// Binary running inside the site directory with an isolated HOME.
    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("gallery-placeholders");
        cmd.env("HOME", &self.home)
            .env_remove("RUST_LOG")
            .current_dir(&self.site);
        cmd
    }

    pub fn write_index(&self, html: &str) {
        fs::write(self.site.join("index.html"), html).expect("write index.html");
    }

    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.site.join(name)).expect("read site file")
    }

    pub fn exists(&self, name: &str) -> bool {
        self.site.join(name).exists()
    }

    pub fn audit_lines(&self) -> Vec<Value> {
        let path = self.home.join(".config/gallery-placeholders/audit.jsonl");
        fs::read_to_string(path)
            .unwrap_or_default()
            .lines()
            .map(|l| serde_json::from_str(l).expect("audit line is json"))
            .collect()
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }
}

/// Site page referencing all ten photos once, surrounded by other markup.
pub fn gallery_index() -> String {
    let mut html = String::from(
        "<!DOCTYPE html>\n<html>\n<head><title>2025</title></head>\n<body>\n<div class=\"photos\">\n",
    );
    for n in 1..=10 {
        html.push_str(&format!(
            "  <img src=\"./assets/photos/photo_{:02}.jpg\" alt=\"moment {}\">\n",
            n, n
        ));
    }
    html.push_str("</div>\n<script src=\"script.js\"></script>\n</body>\n</html>\n");
    html
}

/// Reverses the data-URI escaping used for placeholder SVGs.
pub fn decode_svg_uri(uri: &str) -> String {
    uri.trim_start_matches("data:image/svg+xml,")
        .replace("%3C", "<")
        .replace("%3E", ">")
        .replace("%23", "#")
        .replace("%22", "\"")
        .replace("%25", "%")
}
