use pcmd::cli::LogLevel;
use pcmd::logging::resolve_level;
use tracing::Level;

#[test]
fn cli_flag_wins_over_env() {
    assert_eq!(resolve_level(Some(LogLevel::Debug), Some("error")), Level::DEBUG);
}

#[test]
fn env_value_is_used_when_no_flag() {
    assert_eq!(resolve_level(None, Some(" Info ")), Level::INFO);
    assert_eq!(resolve_level(None, Some("warning")), Level::WARN);
    assert_eq!(resolve_level(None, Some("trace")), Level::TRACE);
}

#[test]
fn default_is_warn_so_console_stays_clean() {
    assert_eq!(resolve_level(None, None), Level::WARN);
    assert_eq!(resolve_level(None, Some("loud")), Level::WARN);
}
