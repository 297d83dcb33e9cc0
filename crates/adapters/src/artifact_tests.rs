// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[tokio::test]
async fn disabled_lookup_is_not_configured() {
    let err = CommandLookup::disabled().runjob_candidates("mis_ai01_00_c").await.unwrap_err();
    assert!(matches!(err, LookupError::NotConfigured));
}

#[test]
fn blank_template_counts_as_disabled() {
    let lookup = CommandLookup::from_config(Some("   ".to_string()));
    let rt = tokio::runtime::Runtime::new().unwrap();
    let err = rt.block_on(lookup.runjob_candidates("mis_ai01_00_c")).unwrap_err();
    assert!(matches!(err, LookupError::NotConfigured));
}

#[tokio::test]
async fn command_lookup_prefixes_each_line() {
    let lookup = CommandLookup::new("printf 'Quarterly Report\\n\\n  %s  \\n' {job}");
    let candidates = lookup.runjob_candidates("mis_ai01_00_c").await.unwrap();
    assert_eq!(
        candidates,
        vec!["runjob srg Quarterly Report", "runjob srg mis_ai01_00_c"]
    );
}

#[tokio::test]
async fn command_lookup_exports_job_name() {
    let lookup = CommandLookup::new("echo \"$BULKRUN_JOB\"");
    let candidates = lookup.runjob_candidates("mis_xi99_00_c").await.unwrap();
    assert_eq!(candidates, vec!["runjob srg mis_xi99_00_c"]);
}

#[tokio::test]
async fn command_lookup_empty_output_is_no_candidates() {
    let candidates = CommandLookup::new("true").runjob_candidates("mis_ai01_00_c").await.unwrap();
    assert!(candidates.is_empty());
}

#[tokio::test]
async fn command_lookup_failure_carries_stderr() {
    let lookup = CommandLookup::new("echo 'login failed' >&2; exit 4");
    match lookup.runjob_candidates("mis_ai01_00_c").await.unwrap_err() {
        LookupError::QueryFailed { code, stderr, .. } => {
            assert_eq!(code, 4);
            assert_eq!(stderr, "login failed");
        }
        other => panic!("expected QueryFailed, got: {other:?}"),
    }
}

#[tokio::test]
async fn fake_lookup_returns_prefixed_values() {
    let fake = FakeArtifactLookup::new();
    fake.insert("mis_ai01_00_c", "Daily Extract");
    fake.insert("mis_ai02_00_c", "one");
    fake.insert("mis_ai02_00_c", "two");
    fake.fail("mis_ai03_00_c");

    assert_eq!(
        fake.runjob_candidates("mis_ai01_00_c").await.unwrap(),
        vec!["runjob srg Daily Extract"]
    );
    assert_eq!(fake.runjob_candidates("mis_ai02_00_c").await.unwrap().len(), 2);
    assert!(fake.runjob_candidates("mis_ai04_00_c").await.unwrap().is_empty());
    assert!(fake.runjob_candidates("mis_ai03_00_c").await.is_err());
    assert_eq!(fake.queries().len(), 4);
}
