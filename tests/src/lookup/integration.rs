#![cfg(test)]
use adgroups_common::directory::GroupRecord;
use adgroups_common::error::{DirectoryError, LookupError};
use adgroups_core::commands::{perform_lookup, LookupOutcome};
use adgroups_core::session::SessionState;

use crate::utils::{group, InMemoryDirectory};

#[tokio::test]
async fn found_lookup_is_recorded_sorted() {
    let directory = InMemoryDirectory::new().user(
        "jdoe",
        vec![group("VPN-Users"), group("Accounting"), group("Admins")],
    );
    let probe = directory.probe();
    let service = directory.into_service();
    let mut session = SessionState::new();

    let outcome = perform_lookup(&service, &mut session, "  jdoe \n").await.unwrap();

    assert_eq!(
        outcome,
        LookupOutcome::Found {
            username: "jdoe".to_string(),
            group_count: 3
        }
    );
    let current = session.current().expect("lookup should be recorded");
    assert_eq!(current.groups, vec!["Accounting", "Admins", "VPN-Users"]);
    assert!(session.can_export());
    assert_eq!(probe.queried(), vec!["jdoe"]);
    assert_eq!(probe.opens(), probe.closes());
}

#[tokio::test]
async fn blank_input_never_reaches_directory() {
    let directory = InMemoryDirectory::new().user("jdoe", vec![group("Admins")]);
    let probe = directory.probe();
    let service = directory.into_service();
    let mut session = SessionState::new();

    perform_lookup(&service, &mut session, "jdoe").await.unwrap();

    for input in ["", "   ", "\t\n"] {
        let err = perform_lookup(&service, &mut session, input).await.unwrap_err();
        assert!(matches!(err, LookupError::EmptyInput));
    }

    assert_eq!(probe.opens(), 1, "only the first lookup may open a session");
    assert!(session.can_export(), "rejected input must not clear the session");
}

#[tokio::test]
async fn not_found_clears_previous_success() {
    let directory = InMemoryDirectory::new().user("jdoe", vec![group("Admins")]);
    let service = directory.into_service();
    let mut session = SessionState::new();

    perform_lookup(&service, &mut session, "jdoe").await.unwrap();
    assert!(session.can_export());

    let outcome = perform_lookup(&service, &mut session, "ghost").await.unwrap();

    assert_eq!(
        outcome,
        LookupOutcome::NotFound {
            username: "ghost".to_string()
        }
    );
    assert!(session.current().is_none());
    assert!(!session.can_export());
}

#[tokio::test]
async fn directory_error_leaves_session_cleared() {
    let healthy = InMemoryDirectory::new().user("jdoe", vec![group("Admins")]);
    let mut session = SessionState::new();
    perform_lookup(&healthy.into_service(), &mut session, "jdoe")
        .await
        .unwrap();

    let broken = InMemoryDirectory::new()
        .user("jdoe", vec![group("Admins")])
        .failing_groups("busy");
    let probe = broken.probe();

    let err = perform_lookup(&broken.into_service(), &mut session, "jdoe")
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        LookupError::Directory(DirectoryError::Search { .. })
    ));
    assert!(session.current().is_none());
    assert!(!session.can_export());
    assert_eq!(probe.closes(), 1, "session must be released after a failure");
}

#[tokio::test]
async fn unreachable_directory_is_reported() {
    let directory = InMemoryDirectory::new().unreachable("connection refused");
    let probe = directory.probe();
    let mut session = SessionState::new();

    let err = perform_lookup(&directory.into_service(), &mut session, "jdoe")
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "could not connect to ldap://dc.test: connection refused"
    );
    assert_eq!(probe.opens(), 0);
    assert!(!session.can_export());
}

#[tokio::test]
async fn account_without_groups_is_found_but_not_exportable() {
    let directory = InMemoryDirectory::new().user("loner", Vec::new());
    let mut session = SessionState::new();

    let outcome = perform_lookup(&directory.into_service(), &mut session, "loner")
        .await
        .unwrap();

    assert_eq!(
        outcome,
        LookupOutcome::Found {
            username: "loner".to_string(),
            group_count: 0
        }
    );
    assert!(session.current().is_some());
    assert!(!session.can_export());
}

#[tokio::test]
async fn names_follow_fallback_chain() {
    let dn = "CN=legacy,OU=Groups,DC=test";
    let directory = InMemoryDirectory::new().user(
        "jdoe",
        vec![
            GroupRecord::with_dn("CN=a,DC=test").common_name("Common Name Only"),
            GroupRecord::with_dn("CN=b,DC=test").account_name("sam-only"),
            GroupRecord::with_dn(dn),
            GroupRecord::default(),
        ],
    );
    let mut session = SessionState::new();

    perform_lookup(&directory.into_service(), &mut session, "jdoe")
        .await
        .unwrap();

    let groups = &session.current().unwrap().groups;
    assert_eq!(groups, &vec![dn.to_string(), "Common Name Only".into(), "sam-only".into()]);
}
