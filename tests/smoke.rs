//! Integration smoke tests for `gpa_planner`

use gpa_planner::get_version;

#[test]
fn version_is_not_empty() {
    let v = get_version();
    assert!(!v.trim().is_empty());
}
