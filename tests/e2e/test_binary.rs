//! Integration tests for the flowlayout binary.
//!
//! These run the compiled binary against the sample inputs in `demos/`.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

use serde_json::Value;

fn binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_flowlayout"))
}

fn demos_dir() -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("demos");
    path
}

/// Run the binary with the given stdin input and extra CLI args.
fn run_raw(input: &str, extra_args: &[&str]) -> Output {
    Command::new(binary_path())
        .args(extra_args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .and_then(|mut child| {
            use std::io::Write;
            if let Some(ref mut stdin) = child.stdin {
                stdin.write_all(input.as_bytes()).ok();
            }
            child.wait_with_output()
        })
        .expect("Failed to run binary")
}

/// Run the binary and parse its stdout as JSON; the run must succeed.
fn run_json(input: &str, extra_args: &[&str]) -> Value {
    let output = run_raw(input, extra_args);
    assert!(
        output.status.success(),
        "Binary exited with {:?}:\nstderr: {}",
        output.status.code(),
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

fn ids(diagram: &Value) -> Vec<String> {
    diagram["nodes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["id"].as_str().unwrap().to_string())
        .collect()
}

fn node<'a>(diagram: &'a Value, id: &str) -> &'a Value {
    diagram["nodes"]
        .as_array()
        .unwrap()
        .iter()
        .find(|n| n["id"] == id)
        .unwrap()
}

#[test]
fn test_stdin_workflow() {
    let src = fs::read_to_string(demos_dir().join("workflow.mmd")).unwrap();
    let out = run_json(&src, &[]);
    assert_eq!(ids(&out), vec!["A", "B", "C", "D", "E", "F"]);
    assert_eq!(out["edges"].as_array().unwrap().len(), 6);
    assert_eq!(node(&out, "D")["shape"], "decision");
    assert_eq!(node(&out, "D")["level"], 3);
    assert_eq!(node(&out, "E")["level"], 4);
    assert_eq!(node(&out, "F")["level"], 4);
    assert_eq!(node(&out, "A")["y"], 50.0);
    assert_eq!(out["edges"][3]["label"], "Yes");
    assert_eq!(out["edges"][0]["label"], Value::Null);
}

#[test]
fn test_file_argument() {
    let path = demos_dir().join("loose.mmd");
    let out = run_json("", &[path.to_str().unwrap()]);
    assert_eq!(ids(&out), vec!["A", "B", "C", "D"]);
    // Fallback path A → B → C → D.
    assert_eq!(out["edges"].as_array().unwrap().len(), 3);
    assert_eq!(node(&out, "D")["level"], 3);
}

#[test]
fn test_fenced_demo_left_right() {
    let src = fs::read_to_string(demos_dir().join("fenced.md")).unwrap();
    let out = run_json(&src, &[]);
    assert_eq!(out["direction"], "LR");
    assert_eq!(ids(&out), vec!["A", "B", "C", "D"]);
    assert_eq!(out["edges"][0]["label"], "summarize");
    assert_eq!(node(&out, "D")["level"], 3);
}

#[test]
fn test_direction_flag_overrides_header() {
    let src = fs::read_to_string(demos_dir().join("fenced.md")).unwrap();
    let out = run_json(&src, &["--direction", "TD"]);
    assert_eq!(out["direction"], "TD");
    assert_eq!(node(&out, "A")["x"], 400.0);
}

#[test]
fn test_spacing_flags() {
    let out = run_json("R[r] --> A[a]\nR --> B[b]", &["--h-spacing", "100", "--v-spacing", "10"]);
    assert_eq!(node(&out, "A")["x"], 350.0);
    assert_eq!(node(&out, "B")["x"], 450.0);
    assert_eq!(node(&out, "B")["y"], 60.0);
}

#[test]
fn test_explainer_mode() {
    let path = demos_dir().join("explainer.json");
    let out = run_json("", &["--explainer", path.to_str().unwrap()]);
    let entries = out.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["type"], "flowchart");
    assert_eq!(ids(&entries[0]["diagram"]).len(), 4);
    assert_eq!(node(&entries[1]["diagram"], "B")["shape"], "decision");
}

#[test]
fn test_compact_output_is_one_line() {
    let output = run_raw("A[a] --> B[b]", &["--compact"]);
    assert!(output.status.success());
    let text = String::from_utf8(output.stdout).unwrap();
    assert_eq!(text.trim_end().lines().count(), 1);
}

#[test]
fn test_output_file() {
    let mut path = std::env::temp_dir();
    path.push(format!("flowlayout-test-{}.json", std::process::id()));
    let target = path.to_str().unwrap().to_string();
    let output = run_raw("A[a] --> B[b]", &["-o", &target]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    let written: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(ids(&written), vec!["A", "B"]);
    fs::remove_file(&path).ok();
}

#[test]
fn test_empty_input_succeeds() {
    let out = run_json("", &[]);
    assert!(out["nodes"].as_array().unwrap().is_empty());
    assert!(out["edges"].as_array().unwrap().is_empty());
}

#[test]
fn test_missing_file_fails() {
    let output = run_raw("", &["/definitely/not/here.mmd"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error: cannot read"), "{stderr}");
}

#[test]
fn test_bad_explainer_payload_fails() {
    let output = run_raw("{ nope", &["--explainer"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid JSON"));
}

#[test]
fn test_unknown_direction_rejected() {
    let output = run_raw("A[a]", &["--direction", "UP"]);
    assert!(!output.status.success());
}
