//! Installs the process-wide denylist from a file. Kept in its own test
//! binary so the one-time installation does not leak into other tests.

use pwd_verdict::{analyze_str, denylist, init_denylist_from_path, is_common};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_init_denylist_from_path_extends_and_is_idempotent() {
    let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
    writeln!(temp_file, "Tr0ub4dor&3").expect("Failed to write");
    writeln!(temp_file, "dragon").expect("Failed to write");

    let count = init_denylist_from_path(temp_file.path()).expect("init");
    assert_eq!(count, 17);
    assert_eq!(denylist().len(), 17);

    assert!(is_common("Tr0ub4dor&3"));
    assert!(is_common("admin"));
    assert_eq!(
        analyze_str("Tr0ub4dor&3"),
        "Very Weak Password (Commonly used password)"
    );

    // Second call keeps the installed list and does not touch the path.
    let again = init_denylist_from_path("/nonexistent/path/denylist.txt").expect("idempotent");
    assert_eq!(again, 17);
}
