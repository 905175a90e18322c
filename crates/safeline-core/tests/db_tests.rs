use safeline_core::{
    models::{ApprovalLine, DocumentSetting, User},
    ApprovalSettings, ApprovalStatus, Database, SafelineError, Transition,
};
use tempfile::NamedTempFile;

/// Helper function to create a temporary database for testing
fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

fn approvers(roles: &[&str]) -> Vec<String> {
    roles.iter().map(|r| r.to_string()).collect()
}

#[test]
fn test_database_seeds_default_settings() {
    let (_temp_file, db) = create_test_db();

    let settings = db.load_settings().expect("Failed to load settings");
    assert_eq!(settings, ApprovalSettings::default());
}

#[test]
fn test_fresh_store_is_empty() {
    let (_temp_file, db) = create_test_db();

    let store = db.load_store().expect("Failed to load store");
    assert!(store.sent_approvals().is_empty());
    assert!(store.received_approvals().is_empty());
    assert!(store.is_approval_required("TBM"));
}

#[test]
fn test_snapshot_round_trip_keeps_order_and_state() {
    let (temp_file, mut db) = create_test_db();
    let requester = User::new("user", "김안전", "관리감독자");

    let mut store = db.load_store().expect("Failed to load store");
    store
        .add_approval_request(
            &requester,
            "TBM",
            "아침 TBM",
            &approvers(&["안전관리자", "안전보건관리책임자"]),
        )
        .expect("Failed to add request");
    store
        .add_approval_request(
            &requester,
            "안전점검",
            "5월 정기점검",
            &approvers(&["경영책임자"]),
        )
        .expect("Failed to add request");
    let first_inbox = store.received_approvals()[1].id;
    assert!(matches!(
        store.approve_request(first_inbox),
        Transition::Advanced { .. }
    ));
    db.save_store(&store).expect("Failed to save store");
    drop(db);

    let db = Database::new(temp_file.path()).expect("Failed to reopen database");
    let loaded = db.load_store().expect("Failed to reload store");

    assert_eq!(loaded.sent_approvals(), store.sent_approvals());
    assert_eq!(loaded.received_approvals(), store.received_approvals());
    assert_eq!(loaded.sent_approvals()[0].title, "5월 정기점검");

    let tbm = &loaded.sent_approvals()[1];
    assert_eq!(tbm.status, ApprovalStatus::InProgress);
    assert_eq!(tbm.progress(), "1/2");
}

#[test]
fn test_reloaded_store_continues_id_sequence() {
    let (_temp_file, mut db) = create_test_db();
    let requester = User::new("user", "김안전", "관리감독자");

    let mut store = db.load_store().expect("Failed to load store");
    store
        .add_approval_request(&requester, "TBM", "첫 요청", &approvers(&["안전관리자"]))
        .expect("Failed to add request");
    db.save_store(&store).expect("Failed to save store");

    let mut reloaded = db.load_store().expect("Failed to reload store");
    let used: Vec<u64> = reloaded
        .sent_approvals()
        .iter()
        .map(|s| s.id)
        .chain(reloaded.received_approvals().iter().map(|r| r.id))
        .collect();

    let new_id = reloaded
        .add_approval_request(&requester, "TBM", "둘째 요청", &approvers(&["안전관리자"]))
        .expect("Failed to add request")
        .id;
    assert!(!used.contains(&new_id));
}

#[test]
fn test_settings_changes_persist() {
    let (temp_file, mut db) = create_test_db();

    let mut store = db.load_store().expect("Failed to load store");
    store
        .set_approval_line(ApprovalLine {
            id: "night".to_string(),
            name: "야간 결재라인".to_string(),
            approvers: approvers(&["안전관리자", "경영책임자"]),
        })
        .expect("Failed to set line");
    store
        .set_document_setting(
            "안전교육",
            DocumentSetting {
                use_approval: true,
                approval_line_id: Some("night".to_string()),
            },
        )
        .expect("Failed to set document");
    db.save_store(&store).expect("Failed to save store");
    drop(db);

    let db = Database::new(temp_file.path()).expect("Failed to reopen database");
    let settings = db.load_settings().expect("Failed to load settings");
    assert!(settings.is_approval_required("안전교육"));
    assert_eq!(
        settings
            .approval_line("안전교육")
            .map(|line| line.approvers.clone()),
        Some(approvers(&["안전관리자", "경영책임자"]))
    );
    assert!(settings.lines.contains_key("standard"));
}

#[test]
fn test_deletes_persist_without_cascade() {
    let (_temp_file, mut db) = create_test_db();
    let requester = User::new("user", "김안전", "관리감독자");

    let mut store = db.load_store().expect("Failed to load store");
    let sent_id = store
        .add_approval_request(&requester, "TBM", "삭제 대상", &approvers(&["안전관리자"]))
        .expect("Failed to add request")
        .id;
    assert_eq!(store.delete_sent_approvals(&[sent_id]), 1);
    db.save_store(&store).expect("Failed to save store");

    let loaded = db.load_store().expect("Failed to reload store");
    assert!(loaded.sent_approvals().is_empty());
    assert_eq!(loaded.received_approvals().len(), 1);
    assert_eq!(loaded.received_approvals()[0].sent_approval_id, sent_id);
}

#[test]
fn test_in_memory_database() {
    let db = Database::in_memory().expect("Failed to open in-memory database");
    let store = db.load_store().expect("Failed to load store");
    assert_eq!(store.settings(), &ApprovalSettings::default());
}

#[test]
fn test_interleaved_updates_both_survive() {
    let (temp_file, mut first) = create_test_db();
    let mut second = Database::new(temp_file.path()).expect("Failed to open second handle");
    let requester = User::new("user", "김안전", "관리감독자");

    // Both handles have seen the empty store before either one writes.
    assert!(first.load_store().expect("load").sent_approvals().is_empty());
    assert!(second.load_store().expect("load").sent_approvals().is_empty());

    let a = first
        .update_store(|store| {
            store
                .add_approval_request(&requester, "TBM", "A", &approvers(&["안전관리자"]))
                .map(|item| item.id)
        })
        .expect("Failed to update from first handle");
    let b = second
        .update_store(|store| {
            store
                .add_approval_request(&requester, "TBM", "B", &approvers(&["안전관리자"]))
                .map(|item| item.id)
        })
        .expect("Failed to update from second handle");
    assert_ne!(a, b);

    let loaded = first.load_store().expect("Failed to reload store");
    let titles: Vec<&str> = loaded
        .sent_approvals()
        .iter()
        .map(|item| item.title.as_str())
        .collect();
    assert_eq!(titles, ["B", "A"]);
    assert_eq!(loaded.received_approvals().len(), 2);
}

#[test]
fn test_concurrent_updates_from_many_connections() {
    let (temp_file, db) = create_test_db();
    let path = temp_file.path().to_path_buf();
    let requester = User::new("user", "김안전", "관리감독자");

    std::thread::scope(|scope| {
        for n in 0..8 {
            let path = &path;
            let requester = &requester;
            scope.spawn(move || {
                let mut db = Database::new(path).expect("Failed to open database");
                db.update_store(|store| {
                    store
                        .add_approval_request(
                            requester,
                            "TBM",
                            &format!("요청 {n}"),
                            &approvers(&["안전관리자"]),
                        )
                        .map(|item| item.id)
                })
                .expect("Failed to update store");
            });
        }
    });

    let loaded = db.load_store().expect("Failed to reload store");
    assert_eq!(loaded.sent_approvals().len(), 8);
    assert_eq!(loaded.received_approvals().len(), 8);

    let mut ids: Vec<u64> = loaded
        .sent_approvals()
        .iter()
        .map(|item| item.id)
        .chain(loaded.received_approvals().iter().map(|item| item.id))
        .collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 16);
}

#[test]
fn test_failed_update_writes_nothing() {
    let (_temp_file, mut db) = create_test_db();
    let top = User::new("admin", "관리자", "경영책임자");

    let result = db.update_store(|store| {
        store
            .add_approval_request(&top, "TBM", "거절됨", &approvers(&["안전관리자"]))
            .map(|item| item.id)
    });
    assert!(matches!(
        result,
        Err(SafelineError::NoSuperiorApprover { .. })
    ));

    let loaded = db.load_store().expect("Failed to reload store");
    assert!(loaded.sent_approvals().is_empty());
    assert!(loaded.received_approvals().is_empty());
}
