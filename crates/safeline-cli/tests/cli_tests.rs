use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color flag for testing
fn safeline_cmd() -> Command {
    let mut cmd = Command::cargo_bin("safeline").expect("Failed to find safeline binary");
    cmd.arg("--no-color");
    cmd
}

/// Command bound to the database inside `temp_dir`
fn safeline_with_db(temp_dir: &TempDir) -> Command {
    let db_path = temp_dir.path().join("cli_test.db");
    let mut cmd = safeline_cmd();
    cmd.args(["--database-file", db_path.to_str().unwrap()]);
    cmd
}

fn write_records(dir: &Path, body: &str) -> String {
    let path = dir.join("records.json");
    std::fs::write(&path, body).expect("Failed to write records file");
    path.to_str().unwrap().to_string()
}

#[test]
fn test_cli_help_lists_commands() {
    safeline_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("records"))
        .stdout(predicate::str::contains("approval"))
        .stdout(predicate::str::contains("settings"))
        .stdout(predicate::str::contains("serve"));
}

#[test]
fn test_cli_default_shows_empty_inbox() {
    let temp_dir = create_cli_test_environment();

    safeline_with_db(&temp_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("# Pending for 관리감독자"))
        .stdout(predicate::str::contains("No received approvals."));
}

#[test]
fn test_cli_request_approval_with_explicit_approver() {
    let temp_dir = create_cli_test_environment();

    safeline_with_db(&temp_dir)
        .args([
            "approval",
            "request",
            "--type",
            "위험성평가",
            "--title",
            "크레인 작업",
            "--approver",
            "경영책임자",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Requested approval with ID: 1"))
        .stdout(predicate::str::contains("### 1. 크레인 작업 (○ 결재대기)"))
        .stdout(predicate::str::contains("- Drafter: 김안전"))
        .stdout(predicate::str::contains("- Progress: 0/1"))
        .stdout(predicate::str::contains("- Waiting on: 경영책임자"));
}

#[test]
fn test_cli_request_uses_configured_line() {
    let temp_dir = create_cli_test_environment();

    safeline_with_db(&temp_dir)
        .args(["a", "request", "--type", "TBM", "--title", "아침 TBM"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "- Approvers: 안전관리자 → 안전보건관리책임자",
        ))
        .stdout(predicate::str::contains("- Progress: 0/2"));
}

#[test]
fn test_cli_request_refused_for_top_role() {
    let temp_dir = create_cli_test_environment();

    safeline_with_db(&temp_dir)
        .args([
            "--user",
            "admin",
            "approval",
            "request",
            "--type",
            "TBM",
            "--title",
            "월간 점검",
            "--approver",
            "안전관리자",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Error: No approver ranks above 경영책임자; the request was not created.",
        ));

    safeline_with_db(&temp_dir)
        .args(["approval", "sent"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No sent approvals."));
}

#[test]
fn test_cli_approval_chain_completes() {
    let temp_dir = create_cli_test_environment();

    safeline_with_db(&temp_dir)
        .args([
            "approval",
            "request",
            "--type",
            "작업허가서",
            "--title",
            "고소 작업",
            "--approver",
            "경영책임자",
        ])
        .assert()
        .success();

    // The executive sees the entry in their default inbox
    safeline_with_db(&temp_dir)
        .args(["--user", "admin"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Pending for 경영책임자"))
        .stdout(predicate::str::contains("### 2. 고소 작업 (○ 결재대기)"))
        .stdout(predicate::str::contains("- Request: 1"));

    safeline_with_db(&temp_dir)
        .args(["--user", "admin", "approval", "approve", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Approved entry 2. Request 1 is fully approved.",
        ));

    safeline_with_db(&temp_dir)
        .args(["approval", "sent"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Sent Approvals"))
        .stdout(predicate::str::contains("(✓ 결재완료)"))
        .stdout(predicate::str::contains("- Progress: 1/1"));

    // Approving again changes nothing
    safeline_with_db(&temp_dir)
        .args(["--user", "admin", "approval", "approve", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Approval entry 2 not found or already decided.",
        ));
}

#[test]
fn test_cli_approve_advances_to_next_step() {
    let temp_dir = create_cli_test_environment();

    safeline_with_db(&temp_dir)
        .args([
            "approval",
            "request",
            "--type",
            "위험성평가",
            "--title",
            "밀폐공간 작업",
            "--approver",
            "안전관리자",
            "--approver",
            "경영책임자",
        ])
        .assert()
        .success();

    safeline_with_db(&temp_dir)
        .args(["approval", "approve", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Request 1 is at 1/2, waiting on 경영책임자 (entry 3)",
        ));

    safeline_with_db(&temp_dir)
        .args(["approval", "sent"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(➤ 결재중)"));
}

#[test]
fn test_cli_reject_closes_request() {
    let temp_dir = create_cli_test_environment();

    safeline_with_db(&temp_dir)
        .args([
            "approval",
            "request",
            "--type",
            "안전점검",
            "--title",
            "비계 점검",
            "--approver",
            "경영책임자",
        ])
        .assert()
        .success();

    safeline_with_db(&temp_dir)
        .args(["--user", "admin", "approval", "reject", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rejected entry 2. Request 1 is closed."));

    safeline_with_db(&temp_dir)
        .args(["approval", "received", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Received Approvals"))
        .stdout(predicate::str::contains("(✗ 반려)"));
}

#[test]
fn test_cli_submit_without_approval() {
    let temp_dir = create_cli_test_environment();

    safeline_with_db(&temp_dir)
        .args([
            "approval",
            "submit",
            "--type",
            "안전교육",
            "--title",
            "신규자 교육",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Saved 안전교육 '신규자 교육'. No approval required.",
        ));
}

#[test]
fn test_cli_submit_requests_approval_when_required() {
    let temp_dir = create_cli_test_environment();

    safeline_with_db(&temp_dir)
        .args(["approval", "submit", "--type", "TBM", "--title", "오후 TBM"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Requested approval with ID: 1"));
}

#[test]
fn test_cli_delete_sent_reports_missing_ids() {
    let temp_dir = create_cli_test_environment();

    safeline_with_db(&temp_dir)
        .args([
            "approval",
            "request",
            "--type",
            "TBM",
            "--title",
            "삭제 대상",
        ])
        .assert()
        .success();

    safeline_with_db(&temp_dir)
        .args(["approval", "delete-sent", "1", "42"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Deleted 1 sent approval(s) (1 not found)",
        ));

    // The inbox entry survives the deletion of its request
    safeline_with_db(&temp_dir)
        .args(["approval", "received", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("### 2. 삭제 대상"));
}

#[test]
fn test_cli_delete_requires_ids() {
    safeline_cmd()
        .args(["approval", "delete-received"])
        .assert()
        .failure();
}

#[test]
fn test_cli_settings_show_defaults() {
    let temp_dir = create_cli_test_environment();

    safeline_with_db(&temp_dir)
        .args(["settings", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Approval Settings"))
        .stdout(predicate::str::contains("## Approval lines"))
        .stdout(predicate::str::contains("**standard**"))
        .stdout(predicate::str::contains(
            "- TBM: approval required, line standard",
        ))
        .stdout(predicate::str::contains(
            "- 안전교육: no approval, line standard",
        ));
}

#[test]
fn test_cli_settings_changes_persist() {
    let temp_dir = create_cli_test_environment();

    safeline_with_db(&temp_dir)
        .args([
            "settings",
            "set-line",
            "night",
            "--name",
            "야간 결재라인",
            "--approver",
            "안전관리자",
            "--approver",
            "경영책임자",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Success: Saved approval line 'night': 안전관리자 → 경영책임자",
        ));

    safeline_with_db(&temp_dir)
        .args(["settings", "set-document", "TBM", "--line", "night"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Success: TBM now requires approval"));

    safeline_with_db(&temp_dir)
        .args(["settings", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("**night** (야간 결재라인)"))
        .stdout(predicate::str::contains("- TBM: approval required, line night"));

    safeline_with_db(&temp_dir)
        .args(["a", "request", "--type", "TBM", "--title", "야간 TBM"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Approvers: 안전관리자 → 경영책임자"));
}

#[test]
fn test_cli_set_document_requires_line_when_approval_enabled() {
    let temp_dir = create_cli_test_environment();

    safeline_with_db(&temp_dir)
        .args(["settings", "set-document", "회의록"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Error: Invalid input for field 'approval_line_id': required when approval is enabled",
        ));

    safeline_with_db(&temp_dir)
        .args(["settings", "set-document", "회의록", "--disabled"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Success: 회의록 no longer requires approval",
        ));

    safeline_with_db(&temp_dir)
        .args(["approval", "submit", "--type", "회의록", "--title", "주간 회의"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No approval required."));
}

#[test]
fn test_cli_unknown_user_fails() {
    let temp_dir = create_cli_test_environment();

    safeline_with_db(&temp_dir)
        .args(["--user", "nobody"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown user 'nobody'"));
}

#[test]
fn test_cli_records_filter_and_page() {
    let temp_dir = create_cli_test_environment();
    let file = write_records(
        temp_dir.path(),
        r#"[
            {"title": "비계 점검", "date": "2024-03-05", "field": "건설"},
            {"title": "전기 점검", "date": "2024-03-20", "field": "전기"},
            {"title": "크레인 점검", "date": "2024-04-02", "field": "건설"},
            {"title": "날짜 없음", "field": "건설"}
        ]"#,
    );

    safeline_with_db(&temp_dir)
        .args([
            "records",
            "filter",
            &file,
            "--from",
            "2024-03-01",
            "--to",
            "2024-03-31",
            "--field",
            "건설",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("| title | date | field |"))
        .stdout(predicate::str::contains("비계 점검"))
        .stdout(predicate::str::contains("날짜 없음"))
        .stdout(predicate::str::contains("전기 점검").not())
        .stdout(predicate::str::contains("크레인 점검").not())
        .stdout(predicate::str::contains("Page 1/1 (2 records)"));
}

#[test]
fn test_cli_records_search_and_page_size() {
    let temp_dir = create_cli_test_environment();
    let file = write_records(
        temp_dir.path(),
        r#"[
            {"title": "Crane Lift", "date": "2024-03-01"},
            {"title": "crane check", "date": "2024-03-02"},
            {"title": "Scaffold", "date": "2024-03-03"}
        ]"#,
    );

    safeline_with_db(&temp_dir)
        .args([
            "r",
            "filter",
            &file,
            "--search-key",
            "title",
            "-s",
            "CRANE",
            "--page-size",
            "1",
            "--page",
            "9",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("crane check"))
        .stdout(predicate::str::contains("Crane Lift").not())
        .stdout(predicate::str::contains("Page 2/2 (2 records)"));
}

#[test]
fn test_cli_records_rejects_bad_date() {
    let temp_dir = create_cli_test_environment();
    let file = write_records(temp_dir.path(), "[]");

    safeline_with_db(&temp_dir)
        .args(["records", "filter", &file, "--from", "not-a-date"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: Invalid input for field 'start_date'"));
}

#[test]
fn test_cli_records_missing_file_fails() {
    let temp_dir = create_cli_test_environment();
    let missing = temp_dir.path().join("missing.json");

    safeline_with_db(&temp_dir)
        .args(["records", "filter", missing.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to filter"));
}
