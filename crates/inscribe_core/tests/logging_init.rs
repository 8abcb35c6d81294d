use inscribe_core::{init_logging, logging_status, CoreConfig};

#[test]
fn init_logging_is_idempotent_and_rejects_conflicts() {
    let log_dir = tempfile::tempdir().unwrap();
    let other_dir = tempfile::tempdir().unwrap();
    let log_dir_str = log_dir.path().to_str().unwrap().to_string();
    let other_dir_str = other_dir.path().to_str().unwrap().to_string();

    init_logging("info", &log_dir_str).expect("first init should succeed");
    init_logging("INFO", &log_dir_str).expect("same config should be idempotent");

    let level_error = init_logging("debug", &log_dir_str).unwrap_err();
    assert!(level_error.contains("refusing to switch"));
    let dir_error = init_logging("info", &other_dir_str).unwrap_err();
    assert!(dir_error.contains("refusing to switch"));

    let (level, dir) = logging_status().expect("logging should be active");
    assert_eq!(level, "info");
    assert_eq!(dir, log_dir.path());

    let config = CoreConfig {
        log_level: "info",
        log_dir: Some(log_dir.path().to_path_buf()),
    };
    assert_eq!(config.init_logging(), Ok(true));
}
