use copy_syntax::syntax::{
    validate_lock, LockPlan, LockRequest, Retention, RetentionMode, RetentionPair, Validity,
};
use copy_syntax::SyntaxError;

fn lock(target: &str, mode: Option<&str>, validity: Option<&str>, clear: bool) -> LockRequest {
    LockRequest {
        target: target.to_string(),
        retention: RetentionPair::new(
            mode.map(|m| m.parse().unwrap()),
            validity.map(|v| v.parse().unwrap()),
        ),
        clear,
    }
}

#[test]
fn target_alone_reads_configuration() {
    assert_eq!(validate_lock(&lock("s3://host/bucket", None, None, false)), Ok(LockPlan::Get));
}

#[test]
fn mode_and_validity_set_configuration() {
    let plan = validate_lock(&lock("s3://host/bucket", Some("compliance"), Some("30d"), false)).unwrap();
    assert_eq!(
        plan,
        LockPlan::Set(Retention {
            mode: RetentionMode::Compliance,
            validity: "30d".parse::<Validity>().unwrap(),
        })
    );
}

#[test]
fn clear_alone_clears() {
    assert_eq!(validate_lock(&lock("s3://host/bucket", None, None, true)), Ok(LockPlan::Clear));
}

#[test]
fn clear_with_retention_is_rejected() {
    let err = validate_lock(&lock("s3://host/bucket", Some("governance"), Some("1y"), true)).unwrap_err();
    assert_eq!(err, SyntaxError::ClearWithRetention { path: "s3://host/bucket".into() });
}

#[test]
fn half_a_pair_is_rejected() {
    let err = validate_lock(&lock("s3://host/bucket", Some("governance"), None, false)).unwrap_err();
    assert_eq!(err.kind(), "incomplete_retention_pair");
}

#[test]
fn lock_needs_a_bucket() {
    let err = validate_lock(&lock("s3://host", None, None, false)).unwrap_err();
    assert_eq!(err.kind(), "missing_bucket");
}
