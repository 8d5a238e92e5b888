use std::io::ErrorKind;

use super::*;

#[test]
fn deletes_regular_file() {
	let dir = tempfile::tempdir().expect("create tempdir");
	let file = dir.path().join("scratch.txt");
	std::fs::write(&file, b"data").expect("write file");

	FsDeleter.delete(&file).expect("delete file");
	assert!(!file.exists());
}

#[test]
fn deletes_empty_directory() {
	let dir = tempfile::tempdir().expect("create tempdir");
	let sub = dir.path().join("empty");
	std::fs::create_dir(&sub).expect("create dir");

	FsDeleter.delete(&sub).expect("delete dir");
	assert!(!sub.exists());
}

#[test]
fn refuses_non_empty_directory() {
	let dir = tempfile::tempdir().expect("create tempdir");
	let sub = dir.path().join("full");
	std::fs::create_dir(&sub).expect("create dir");
	std::fs::write(sub.join("inner"), b"x").expect("write inner");

	assert!(FsDeleter.delete(&sub).is_err());
	assert!(sub.join("inner").exists());
}

#[test]
fn missing_path_is_not_found() {
	let dir = tempfile::tempdir().expect("create tempdir");
	let err = FsDeleter.delete(&dir.path().join("nope")).unwrap_err();
	assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[cfg(unix)]
#[test]
fn removes_dangling_symlink_without_following() {
	let dir = tempfile::tempdir().expect("create tempdir");
	let target = dir.path().join("target");
	let link = dir.path().join("link");
	std::os::unix::fs::symlink(&target, &link).expect("create symlink");

	FsDeleter.delete(&link).expect("delete symlink");
	assert!(std::fs::symlink_metadata(&link).is_err());
}

#[cfg(unix)]
#[test]
fn symlink_to_directory_keeps_target() {
	let dir = tempfile::tempdir().expect("create tempdir");
	let target = dir.path().join("target");
	std::fs::create_dir(&target).expect("create target");
	std::fs::write(target.join("keep"), b"x").expect("write keep");
	let link = dir.path().join("link");
	std::os::unix::fs::symlink(&target, &link).expect("create symlink");

	FsDeleter.delete(&link).expect("delete symlink");
	assert!(target.join("keep").exists());
}

#[test]
fn closures_are_deleters() {
	let deleter = |path: &Path| -> io::Result<()> { Err(io::Error::new(ErrorKind::PermissionDenied, path.display().to_string())) };
	let err = deleter.delete(Path::new("/x")).unwrap_err();
	assert_eq!(err.kind(), ErrorKind::PermissionDenied);
}
