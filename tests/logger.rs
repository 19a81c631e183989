use nodelink::config::LoggingConfig;
use nodelink::logger::{get_log_file_path, Logger};

#[test]
fn test_logs_are_newest_first() {
    let logger = Logger::new();
    logger.log("first".to_string());
    logger.log("second".to_string());

    let logs = logger.get_logs();
    assert_eq!(logs.len(), 2);
    assert!(logs[0].contains("second"));
    assert!(logs[1].contains("first"));
}

#[test]
fn test_clones_share_buffer() {
    let logger = Logger::new();
    let clone = logger.clone();
    clone.log("from clone".to_string());

    assert_eq!(logger.len(), 1);
    logger.clear();
    assert!(clone.is_empty());
}

#[test]
fn test_level_filter_parsing() {
    let mut config = LoggingConfig::default();
    assert_eq!(config.level_filter().unwrap(), log::LevelFilter::Info);

    config.level = "TRACE".to_string();
    assert_eq!(config.level_filter().unwrap(), log::LevelFilter::Trace);

    config.level = "chatty".to_string();
    assert!(config.level_filter().is_err());
}

#[test]
fn test_log_file_path_is_under_app_dir() {
    if let Ok(path) = get_log_file_path() {
        assert!(path.ends_with("nodelink/nodelink.log"));
    }
}
