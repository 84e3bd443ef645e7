use std::fs;

use godisk_engine::{ensure_output_dir, AtomicFileWriter};
use tempfile::TempDir;

#[test]
fn creates_missing_download_dir() {
    let temp = TempDir::new().unwrap();
    let new_dir = temp.path().join("reports");
    assert!(!new_dir.exists());
    ensure_output_dir(&new_dir).unwrap();
    assert!(new_dir.is_dir());
}

#[test]
fn atomic_write_replaces_existing_report() {
    let temp = TempDir::new().unwrap();
    let writer = AtomicFileWriter::new(temp.path().to_path_buf());

    let first = writer.write("mbr1.jpg", b"old").unwrap();
    assert_eq!(first.file_name().unwrap(), "mbr1.jpg");
    assert_eq!(fs::read(&first).unwrap(), b"old");

    let second = writer.write("mbr1.jpg", &[0xFF, 0xD8]).unwrap();
    assert_eq!(first, second);
    assert_eq!(fs::read(&second).unwrap(), vec![0xFF, 0xD8]);
}

#[test]
fn file_in_place_of_dir_is_an_error() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("not_a_dir");
    fs::write(&file_path, "x").unwrap();

    let writer = AtomicFileWriter::new(file_path.clone());
    assert!(writer.write("tree1.jpg", b"data").is_err());
    assert!(!file_path.with_file_name("tree1.jpg").exists());
}

#[test]
fn concurrent_writes_of_one_report_all_succeed() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().to_path_buf();

    let handles: Vec<_> = (0..8u8)
        .map(|n| {
            let writer = AtomicFileWriter::new(dir.clone());
            std::thread::spawn(move || {
                for _ in 0..20 {
                    writer.write("disk.dot", &[n; 64])?;
                }
                Ok::<_, godisk_engine::PersistError>(())
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap().unwrap();
    }

    let saved = fs::read(dir.join("disk.dot")).unwrap();
    assert_eq!(saved.len(), 64);
    assert!(saved.iter().all(|byte| *byte == saved[0]));
}
