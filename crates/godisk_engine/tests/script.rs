use std::fs;

use godisk_engine::{load_script, ScriptError};
use tempfile::TempDir;

#[test]
fn mia_script_round_trips_verbatim() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("setup.mia");
    fs::write(&path, "mkdisk -size=10 -unit=M").unwrap();

    let script = load_script(&path).unwrap();
    assert_eq!(script.name, "setup.mia");
    assert_eq!(script.text, "mkdisk -size=10 -unit=M");
}

#[test]
fn other_extensions_are_rejected_before_reading() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("disk.txt");
    fs::write(&path, "mkdisk -size=10").unwrap();

    let err = load_script(&path).unwrap_err();
    assert!(matches!(err, ScriptError::InvalidFileType { ref name } if name == "disk.txt"));

    // Missing files with the wrong extension fail on the extension, not the read.
    let err = load_script(&temp.path().join("missing.MIA")).unwrap_err();
    assert!(matches!(err, ScriptError::InvalidFileType { .. }));
}

#[test]
fn missing_mia_file_is_a_read_error() {
    let temp = TempDir::new().unwrap();
    let err = load_script(&temp.path().join("missing.mia")).unwrap_err();
    assert!(matches!(err, ScriptError::Read { .. }));
}

#[test]
fn invalid_utf8_is_replaced() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("latin1.mia");
    fs::write(&path, b"# Partici\xf3n\nmounted").unwrap();

    let script = load_script(&path).unwrap();
    assert!(script.text.starts_with("# Partici"));
    assert!(script.text.ends_with("\nmounted"));
}
