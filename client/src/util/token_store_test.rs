use super::*;

#[test]
fn normalize_trims_whitespace() {
    assert_eq!(normalize("  abc.def  "), Some("abc.def".to_owned()));
}

#[test]
fn normalize_rejects_blank_values() {
    assert_eq!(normalize(""), None);
    assert_eq!(normalize(" \n\t"), None);
}

#[test]
fn check_write_reports_success() {
    assert!(check_write::<()>("persist", Ok(())));
}

#[test]
fn check_write_reports_failed_clear() {
    assert!(!check_write("clear", Err("SecurityError: storage is disabled")));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn storage_is_empty_outside_browser() {
    save("abc");
    assert_eq!(load(), None);
    clear();
    assert_eq!(load(), None);
}
