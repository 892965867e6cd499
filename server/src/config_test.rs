use super::*;

fn site_addr() -> SocketAddr {
    "127.0.0.1:3000".parse().unwrap()
}

#[test]
fn resolve_addr_defaults_to_site_addr() {
    assert_eq!(resolve_addr(None, None, site_addr()), Ok(site_addr()));
}

#[test]
fn resolve_addr_blank_values_count_as_unset() {
    assert_eq!(resolve_addr(Some("  "), Some(""), site_addr()), Ok(site_addr()));
}

#[test]
fn resolve_addr_uses_login_addr() {
    let addr = resolve_addr(Some("0.0.0.0:8080"), None, site_addr()).unwrap();
    assert_eq!(addr, "0.0.0.0:8080".parse().unwrap());
}

#[test]
fn resolve_addr_port_overrides_site_addr_port() {
    let addr = resolve_addr(None, Some("4000"), site_addr()).unwrap();
    assert_eq!(addr, "127.0.0.1:4000".parse().unwrap());
}

#[test]
fn resolve_addr_port_wins_over_login_addr_port() {
    let addr = resolve_addr(Some("0.0.0.0:8080"), Some(" 9000 "), site_addr()).unwrap();
    assert_eq!(addr, "0.0.0.0:9000".parse().unwrap());
}

#[test]
fn resolve_addr_rejects_malformed_login_addr() {
    assert_eq!(
        resolve_addr(Some("localhost"), None, site_addr()),
        Err(ConfigError::InvalidAddr { value: "localhost".to_owned() })
    );
}

#[test]
fn resolve_addr_rejects_out_of_range_port() {
    assert_eq!(
        resolve_addr(None, Some("70000"), site_addr()),
        Err(ConfigError::InvalidPort { value: "70000".to_owned() })
    );
}

#[test]
fn config_error_messages_name_the_variable() {
    let err = ConfigError::InvalidPort { value: "abc".to_owned() };
    assert_eq!(err.to_string(), "invalid PORT 'abc'");
    let err = ConfigError::InvalidAddr { value: "x".to_owned() };
    assert!(err.to_string().contains("LOGIN_ADDR"));
}
