use conway_playback::{load_input, InputError};
use std::io::Write;

#[test]
fn loads_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "3\n0110\n1001\n0110\n").unwrap();

    let input = load_input(file.path()).unwrap();
    assert_eq!(input.generations, 3);
    assert_eq!(input.grid.to_string(), "0110\n1001\n0110\n");
}

#[test]
fn missing_file_names_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.txt");
    let err = load_input(&path).unwrap_err();
    assert!(matches!(err, InputError::Io { .. }));
    assert!(err.to_string().contains("absent.txt"));
}

#[test]
fn malformed_file_fails_fast() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "3\n010\n012\n").unwrap();
    let err = load_input(file.path()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "line 3, column 3: unexpected '2', expected '0' or '1'"
    );
}
