#![cfg(test)]
use std::fs;

use adgroups_common::error::ExportError;
use adgroups_core::commands::{perform_export, perform_lookup};
use adgroups_core::export::ReportExporter;
use adgroups_core::session::SessionState;

use crate::utils::{group, march_first, InMemoryDirectory};

const JDOE_REPORT: &str = "\
Active Directory Group Membership for: jdoe
Date: 2024-03-01 10:00:00
Total Groups: 3
--------------------------------------------------
Accounting
Admins
VPN-Users
";

async fn session_for_jdoe() -> SessionState {
    let directory = InMemoryDirectory::new().user(
        "jdoe",
        vec![group("Admins"), group("VPN-Users"), group("Accounting")],
    );
    let mut session = SessionState::new();
    perform_lookup(&directory.into_service(), &mut session, "jdoe")
        .await
        .unwrap();
    session
}

#[tokio::test]
async fn lookup_then_export_writes_exact_report() {
    let session = session_for_jdoe().await;
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join(ReportExporter::suggested_file_name("jdoe"));

    let written = perform_export(&session, &target, march_first()).unwrap();

    assert_eq!(written, target);
    assert!(target.ends_with("jdoe_AD_Groups.txt"));
    assert_eq!(fs::read_to_string(&target).unwrap(), JDOE_REPORT);
}

#[tokio::test]
async fn export_without_lookup_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("nothing.txt");

    let err = perform_export(&SessionState::new(), &target, march_first()).unwrap_err();

    assert!(matches!(err, ExportError::NoData));
    assert!(!target.exists());
}

#[tokio::test]
async fn export_after_not_found_is_refused() {
    let mut session = session_for_jdoe().await;
    let directory = InMemoryDirectory::new();
    perform_lookup(&directory.into_service(), &mut session, "ghost")
        .await
        .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("ghost.txt");
    let err = perform_export(&session, &target, march_first()).unwrap_err();

    assert!(matches!(err, ExportError::NoData));
    assert!(!target.exists());
}

#[tokio::test]
async fn failed_write_keeps_session_for_retry() {
    let session = session_for_jdoe().await;
    let dir = tempfile::tempdir().unwrap();
    let bad_target = dir.path().join("missing-dir").join("report.txt");

    let err = perform_export(&session, &bad_target, march_first()).unwrap_err();
    assert!(matches!(err, ExportError::Io { .. }));
    assert!(session.can_export());

    let good_target = dir.path().join("report.txt");
    perform_export(&session, &good_target, march_first()).unwrap();
    assert_eq!(fs::read_to_string(&good_target).unwrap(), JDOE_REPORT);
}

#[tokio::test]
async fn export_overwrites_existing_file() {
    let session = session_for_jdoe().await;
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("report.txt");
    fs::write(&target, "stale content that is longer than nothing\n".repeat(10)).unwrap();

    perform_export(&session, &target, march_first()).unwrap();

    assert_eq!(fs::read_to_string(&target).unwrap(), JDOE_REPORT);
}
