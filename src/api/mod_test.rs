use super::{Config, DEFAULT_PORT};
use serial_test::serial;
use std::env;
use std::net::{IpAddr, Ipv4Addr};

fn clear_env() {
    unsafe {
        env::remove_var("TODO_API_HOST");
        env::remove_var("TODO_API_PORT");
    }
}

#[test]
fn test_config_default() {
    let config = Config::default();
    assert_eq!(config.host, IpAddr::V4(Ipv4Addr::LOCALHOST));
    assert_eq!(config.port, DEFAULT_PORT);
    assert!(config.seed_data);
    assert_eq!(config.addr().to_string(), "127.0.0.1:8000");
}

#[test]
#[serial]
fn test_config_new_respects_env_vars() {
    unsafe {
        env::set_var("TODO_API_HOST", "0.0.0.0");
        env::set_var("TODO_API_PORT", "9100");
    }

    let config = Config::new();
    assert_eq!(config.host, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
    assert_eq!(config.port, 9100);

    clear_env();
}

#[test]
#[serial]
fn test_config_new_ignores_invalid_env_vars() {
    unsafe {
        env::set_var("TODO_API_HOST", "not-an-ip");
        env::set_var("TODO_API_PORT", "99999");
    }

    assert_eq!(Config::new(), Config::default());

    clear_env();
}

#[test]
#[serial]
fn test_config_precedence_cli_over_env() {
    // Precedence: CLI flag > env var > default
    unsafe {
        env::set_var("TODO_API_PORT", "9200");
    }

    let config = Config::new().with_port(9300).with_seed_data(false);
    assert_eq!(config.port, 9300, "CLI flag should override env var");
    assert!(!config.seed_data);

    clear_env();
}
