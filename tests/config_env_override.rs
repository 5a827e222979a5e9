use serial_test::serial;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

use copy_syntax::config::{config_path, load_config, ConfigSource, CONFIG_ENV};
use copy_syntax::LogLevel;

#[test]
#[serial]
fn env_var_selects_config_file() {
    let td = tempdir().unwrap();
    let cfg = td.path().join("custom.xml");
    fs::write(&cfg, "<config><log_level>quiet</log_level></config>").unwrap();

    // Set env for this process; serialize to avoid cross-test interference
    unsafe {
        std::env::set_var(CONFIG_ENV, &cfg);
    }

    let resolved = config_path(None);
    let loaded = load_config(None);

    unsafe {
        std::env::remove_var(CONFIG_ENV);
    }

    assert_eq!(resolved, Some((cfg.clone(), ConfigSource::Env)));
    assert_eq!(loaded.unwrap().log_level, LogLevel::Quiet);
}

#[test]
#[serial]
fn flag_beats_env() {
    let td = tempdir().unwrap();
    let from_env = td.path().join("env.xml");
    let from_flag = td.path().join("flag.xml");
    fs::write(&from_env, "<config><log_level>quiet</log_level></config>").unwrap();
    fs::write(&from_flag, "<config><log_level>debug</log_level></config>").unwrap();

    unsafe {
        std::env::set_var(CONFIG_ENV, &from_env);
    }
    let loaded = load_config(Some(&from_flag));
    unsafe {
        std::env::remove_var(CONFIG_ENV);
    }

    assert_eq!(loaded.unwrap().log_level, LogLevel::Debug);
}

#[test]
#[serial]
fn explicit_missing_file_is_an_error() {
    let td = tempdir().unwrap();
    let missing = td.path().join("nope.xml");
    assert!(load_config(Some(Path::new(&missing))).is_err());
}
