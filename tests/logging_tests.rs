#![cfg(feature = "std")]

use log::{Level, LevelFilter, Record};
use sea_battle::{format_record, log_level};

#[test]
fn test_log_lines_name_crate_and_module() {
    let line = format_record(
        &Record::builder()
            .args(format_args!("First side won after {} shots", 40))
            .level(Level::Info)
            .target("sea_battle::game")
            .build(),
    );
    assert_eq!(line, "[sea-battle] INFO  game: First side won after 40 shots");

    let line = format_record(
        &Record::builder()
            .args(format_args!("console gone"))
            .level(Level::Warn)
            .target("sea_battle::player::cli")
            .build(),
    );
    assert_eq!(line, "[sea-battle] WARN  player::cli: console gone");
}

#[test]
fn test_foreign_targets_are_kept_whole() {
    let line = format_record(
        &Record::builder()
            .args(format_args!("hi"))
            .level(Level::Debug)
            .target("sim")
            .build(),
    );
    assert_eq!(line, "[sea-battle] DEBUG sim: hi");
}

#[test]
fn test_log_level_from_env_value() {
    assert_eq!(log_level(None), LevelFilter::Info);
    assert_eq!(log_level(Some("debug")), LevelFilter::Debug);
    assert_eq!(log_level(Some(" WARN ")), LevelFilter::Warn);
    assert_eq!(log_level(Some("off")), LevelFilter::Off);
    assert_eq!(log_level(Some("loud")), LevelFilter::Info);
}
