mod common;

use common::{gallery_index, TestEnv};
use serde_json::Value;

fn assert_step_shape(step: &Value) {
    for key in ["step", "path", "status", "message"] {
        assert!(step[key].is_string(), "step field {} must be a string", key);
    }
    let status = step["status"].as_str().unwrap_or_default();
    assert!(["ok", "not_found", "error"].contains(&status));
}

#[test]
fn run_report_contract() {
    let env = TestEnv::new();
    env.write_index(&gallery_index());
    let out = env.run_json(&["run"]);

    assert_eq!(out["ok"], true);
    let steps = out["data"]["steps"].as_array().expect("steps array");
    assert_eq!(steps.len(), 2);
    steps.iter().for_each(assert_step_shape);
    assert!(steps[0].get("replacements").is_none());
    assert!(steps[1]["replacements"].is_u64());

    let guidance = &out["data"]["guidance"];
    assert_eq!(guidance["site_url"], "http://localhost:8000/");
    assert_eq!(
        guidance["placeholders_url"],
        "http://localhost:8000/photo_placeholders.html"
    );
}

#[test]
fn single_step_reports_have_no_guidance() {
    let env = TestEnv::new();
    for cmd in ["generate", "patch"] {
        let out = env.run_json(&[cmd]);
        assert_eq!(out["ok"], true);
        assert!(out["data"].get("guidance").is_none());
        let steps = out["data"]["steps"].as_array().expect("steps array");
        assert_eq!(steps.len(), 1);
        assert_step_shape(&steps[0]);
        assert_eq!(steps[0]["step"], cmd);
    }
}

#[test]
fn missing_index_is_not_a_failure() {
    let env = TestEnv::new();
    let out = env.run_json(&["patch"]);
    assert_eq!(out["ok"], true);
    assert_eq!(out["data"]["steps"][0]["status"], "not_found");
    assert_eq!(out["data"]["steps"][0]["message"], "index.html not found");
    assert!(out["data"]["steps"][0]["path"]
        .as_str()
        .unwrap_or_default()
        .ends_with("index.html"));
}

#[test]
fn failed_step_sets_ok_false() {
    let env = TestEnv::new();
    std::fs::create_dir(env.site.join("photo_placeholders.html")).expect("block output path");
    let out = env
        .cmd()
        .args(["--json", "generate"])
        .assert()
        .failure()
        .get_output()
        .stdout
        .clone();
    let out: Value = serde_json::from_slice(&out).expect("valid json output");
    assert_eq!(out["ok"], false);
    assert_eq!(out["data"]["steps"][0]["status"], "error");
}
