use super::*;

#[test]
fn parse_port_defaults_when_unset_or_blank() {
    assert_eq!(parse_port(None).unwrap(), DEFAULT_PORT);
    assert_eq!(parse_port(Some("  ")).unwrap(), DEFAULT_PORT);
}

#[test]
fn parse_port_reads_value() {
    assert_eq!(parse_port(Some("8080")).unwrap(), 8080);
    assert_eq!(parse_port(Some(" 4000 ")).unwrap(), 4000);
}

#[test]
fn parse_port_rejects_garbage() {
    let err = parse_port(Some("eighty")).unwrap_err();
    assert_eq!(err.to_string(), "invalid PORT: eighty");
    assert!(parse_port(Some("70000")).is_err());
}

#[test]
fn parse_fixtures_path_ignores_blank() {
    assert_eq!(parse_fixtures_path(None), None);
    assert_eq!(parse_fixtures_path(Some("")), None);
    assert_eq!(parse_fixtures_path(Some("/tmp/customers.json")), Some(PathBuf::from("/tmp/customers.json")));
}
