use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

fn krishi_binary() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("krishi");
    path
}

fn setup_test_env() -> (TempDir, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().to_path_buf();

    let config_dir = root.join("config");
    fs::create_dir_all(&config_dir).unwrap();

    // Extra knowledge files merged on top of the bundled data
    let knowledge_dir = root.join("knowledge");
    fs::create_dir_all(knowledge_dir.join("drafts")).unwrap();
    fs::write(
        knowledge_dir.join("mango.json"),
        r#"{
  "metadata": { "version": "test" },
  "pest_control": [
    {
      "id": "mango_hopper",
      "question": "How do I control mango hoppers?",
      "keywords": ["mango hopper", "hopper", "mango flowers"],
      "answer": "Spray imidacloprid 0.3 ml per litre at panicle emergence.\n\nRepeat after 15 days if hoppers persist.",
      "confidence": 0.9
    }
  ]
}"#,
    )
    .unwrap();
    fs::write(
        knowledge_dir.join("drafts/unfinished.json"),
        r#"{ "pest_control": [ { "id": "draft", "question": "q", "keywords": ["draft entry"], "answer": "a" } ] }"#,
    )
    .unwrap();
    fs::write(knowledge_dir.join("README.txt"), "not knowledge").unwrap();

    let config_content = format!(
        r#"[knowledge]
extra_dir = "{}/knowledge"
include_globs = ["**/*.json"]
exclude_globs = ["drafts/**"]
match_threshold = 0.4
max_results = 3

[spelling]
threshold = 0.7

[generation]
min_words = 2000
default_language = "en"

[formatting]
format = "html"
"#,
        root.display()
    );

    let config_path = config_dir.join("krishi.toml");
    fs::write(&config_path, config_content).unwrap();

    (tmp, config_path)
}

fn run_krishi(config_path: &Path, args: &[&str]) -> (String, String, bool) {
    let binary = krishi_binary();
    let output = Command::new(&binary)
        .arg("--config")
        .arg(config_path.to_str().unwrap())
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("Failed to run krishi binary at {:?}: {}", binary, e));

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();
    (stdout, stderr, success)
}

fn run_json(config_path: &Path, args: &[&str]) -> (serde_json::Value, bool) {
    let mut full = args.to_vec();
    full.push("--json");
    let (stdout, stderr, success) = run_krishi(config_path, &full);
    let value = serde_json::from_str(&stdout)
        .unwrap_or_else(|e| panic!("invalid JSON ({e}): stdout={stdout}, stderr={stderr}"));
    (value, success)
}

#[test]
fn test_ask_wheat_yellow_leaves() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, stderr, success) =
        run_krishi(&config_path, &["ask", "My wheat crop has yellow leaves"]);
    assert!(success, "ask failed: stdout={}, stderr={}", stdout, stderr);
    assert!(stdout.contains("Nitrogen Deficiency"));
    assert!(stdout.contains("Knowledge Base - crop_growth"));
    assert!(stdout.contains("Confidence:"));
}

#[test]
fn test_ask_json_envelope() {
    let (_tmp, config_path) = setup_test_env();

    let (value, success) = run_json(&config_path, &["ask", "cotton pest control in maharashtra"]);
    assert!(success);
    assert_eq!(value["success"], true);
    let data = &value["data"];
    assert!(data["word_count"].as_u64().unwrap() >= 2000);
    let confidence = data["confidence"].as_f64().unwrap();
    assert!((0.3..=1.0).contains(&confidence));
    assert_eq!(data["query_analysis"]["crop"], "cotton");
    assert_eq!(data["query_analysis"]["location"], "maharashtra");
    assert_eq!(data["error"], false);
}

#[test]
fn test_ask_unusual_combination() {
    let (_tmp, config_path) = setup_test_env();

    let (value, success) = run_json(&config_path, &["ask", "Can I grow rice in Rajasthan?"]);
    assert!(success);
    let data = &value["data"];
    assert_eq!(data["special_case"], "unusual_combination");
    assert_eq!(data["confidence"], 0.9);
    assert!(data["response"].as_str().unwrap().contains("NOT RECOMMENDED"));
}

#[test]
fn test_ask_formatted_chunks_roundtrip() {
    let (_tmp, config_path) = setup_test_env();

    let (value, success) = run_json(&config_path, &["ask", "rice irrigation", "--formatted"]);
    assert!(success);
    let data = &value["data"];
    let response = data["response"].as_str().unwrap();
    let rebuilt: String = data["formatted"]["chunks"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["content"].as_str().unwrap())
        .collect();
    assert_eq!(rebuilt, response);
    assert_eq!(data["formatted"]["chunks"][0]["kind"], "initial");
    assert!(data["formatted"]["html"]
        .as_str()
        .unwrap()
        .contains("farming-response"));
}

#[test]
fn test_ask_with_history() {
    let (tmp, config_path) = setup_test_env();
    let history = tmp.path().join("history.json");
    fs::write(
        &history,
        r#"[{"role": "user", "content": "pink bollworm in my cotton"},
            {"role": "assistant", "content": "Which stage is the crop at?"}]"#,
    )
    .unwrap();

    let (value, success) = run_json(
        &config_path,
        &["ask", "what should I spray", "--history", history.to_str().unwrap()],
    );
    assert!(success);
    assert_eq!(value["data"]["knowledge_match"]["id"], "cotton_bollworm");
}

#[test]
fn test_ask_empty_message_fails() {
    let (_tmp, config_path) = setup_test_env();

    let (value, success) = run_json(&config_path, &["ask", "   "]);
    assert!(!success);
    assert_eq!(value["success"], false);
    assert!(value["error"].as_str().unwrap().contains("Message is required"));
}

#[test]
fn test_ask_min_words_override() {
    let (_tmp, config_path) = setup_test_env();

    let (value, success) = run_json(&config_path, &["ask", "soil health", "--min-words", "4000"]);
    assert!(success);
    assert!(value["data"]["word_count"].as_u64().unwrap() >= 4000);
}

#[test]
fn test_search_extra_knowledge() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, _, success) = run_krishi(&config_path, &["search", "mango hopper on flowers"]);
    assert!(success);
    assert!(stdout.contains("mango_hopper"), "got: {}", stdout);
}

#[test]
fn test_search_excluded_files_skipped() {
    let (_tmp, config_path) = setup_test_env();

    let (value, success) = run_json(&config_path, &["search", "draft entry"]);
    assert!(success);
    let hits = value["data"].as_array().unwrap();
    assert!(hits.iter().all(|h| h["id"] != "draft"));
}

#[test]
fn test_search_by_category() {
    let (_tmp, config_path) = setup_test_env();

    let (value, success) = run_json(
        &config_path,
        &["search", "aphids on mustard", "--category", "pest_control"],
    );
    assert!(success);
    assert_eq!(value["data"][0]["id"], "aphid_control");
}

#[test]
fn test_search_unknown_category() {
    let (_tmp, config_path) = setup_test_env();

    let (_, stderr, success) = run_krishi(&config_path, &["search", "x", "--category", "weather"]);
    assert!(!success);
    assert!(stderr.contains("Unknown category"));
}

#[test]
fn test_search_deterministic() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout1, _, _) = run_krishi(&config_path, &["search", "wheat fertilizer urea"]);
    let (stdout2, _, _) = run_krishi(&config_path, &["search", "wheat fertilizer urea"]);
    assert_eq!(stdout1, stdout2, "Search results should be deterministic across runs");
}

#[test]
fn test_search_empty_query() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, _, success) = run_krishi(&config_path, &["search", ""]);
    assert!(success, "Empty query should not panic");
    assert!(stdout.contains("No results"));
}

#[test]
fn test_spell() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, _, success) = run_krishi(&config_path, &["spell", "which fertlizer for my feild"]);
    assert!(success);
    assert!(stdout.contains("which fertilizer for my field"));
    assert!(stdout.contains("fertlizer -> fertilizer"));

    let (value, _) = run_json(&config_path, &["spell", "xyzzynotaword"]);
    assert_eq!(value["data"]["has_corrections"], false);
    assert_eq!(value["data"]["corrected"], "xyzzynotaword");
}

#[test]
fn test_check() {
    let (_tmp, config_path) = setup_test_env();

    let (value, success) = run_json(&config_path, &["check", "rice", "rajasthan"]);
    assert!(success);
    assert_eq!(value["data"]["unusual_combination"], "rice_in_desert");
    assert_eq!(value["data"]["suitability"]["status"], "unsuitable");

    let (stdout, _, success) = run_krishi(&config_path, &["check", "wheat", "punjab"]);
    assert!(success);
    assert!(stdout.contains("excellent"));
}

#[test]
fn test_stats_counts_extra_entries() {
    let (_tmp, config_path) = setup_test_env();

    let (value, success) = run_json(&config_path, &["stats"]);
    assert!(success);
    assert_eq!(value["data"]["total_entries"], 23);
    assert_eq!(value["data"]["categories"]["pest_control"], 5);
    assert_eq!(value["data"]["healthy"], true);
}

#[test]
fn test_tip() {
    let (_tmp, config_path) = setup_test_env();

    let (value, success) = run_json(&config_path, &["tip", "--category", "irrigation"]);
    assert!(success);
    assert_eq!(value["data"]["category"], "irrigation");
}

#[test]
fn test_format_file() {
    let (tmp, config_path) = setup_test_env();
    let input = tmp.path().join("answer.md");
    fs::write(
        &input,
        "# Rice Guide\n\n## Economic Analysis\n\n- **Cost**: ₹25,000\n\n| Item | Cost |\n|------|------|\n| Seed | 2000 |\n",
    )
    .unwrap();

    let (stdout, _, success) = run_krishi(&config_path, &["format", input.to_str().unwrap()]);
    assert!(success);
    assert!(stdout.contains("<div class=\"farming-response\">"));
    assert!(stdout.contains("<strong>Cost</strong>"));
    assert!(stdout.contains("collapsible-section"));

    let (value, success) = run_json(
        &config_path,
        &["format", input.to_str().unwrap(), "--format", "plain", "--no-chunking"],
    );
    assert!(success);
    assert_eq!(value["data"]["format"], "plain");
    assert!(value["data"].get("chunks").is_none());
    assert!(value["data"].get("html").is_none());
}

#[test]
fn test_invalid_config_rejected() {
    let (tmp, _) = setup_test_env();
    let bad = tmp.path().join("bad.toml");
    fs::write(&bad, "[knowledge]\nmatch_threshold = 1.5\n").unwrap();

    let (_, stderr, success) = run_krishi(&bad, &["stats"]);
    assert!(!success);
    assert!(stderr.contains("match_threshold"));
}

#[test]
fn test_missing_config_uses_defaults() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("nope.toml");

    let (value, success) = run_json(&missing, &["stats"]);
    assert!(success);
    assert_eq!(value["data"]["total_entries"], 22);
}
