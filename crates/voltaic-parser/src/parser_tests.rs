//! Unit tests for the statement parser
//!
//! These tests cover every Voltaic language construct end to end through
//! [`crate::parse`], plus the error codes and spans of malformed input.

use voltaic_core::{
    statement::{
        ComponentDescriptor, ConnectionStatement, Delimiter, NodeDescriptor, PortKind, Statement,
    },
    value::{SiPrefix, Value},
};

use crate::{error::ErrorCode, parse};

/// Helper function to parse a source string and assert success
fn parse_ok(source: &str) -> Vec<Statement> {
    match parse(source) {
        Ok(statements) => statements,
        Err(err) => panic!("Expected parsing to succeed, but got error: {err}"),
    }
}

/// Helper function to parse a source string and return the error code
fn parse_err_code(source: &str) -> ErrorCode {
    let err = parse(source).expect_err("Expected parsing to fail, but it succeeded");
    err.diagnostics()[0]
        .code()
        .expect("parser diagnostics always carry a code")
}

fn single_connection(source: &str) -> ConnectionStatement {
    let mut statements = parse_ok(source);
    assert_eq!(statements.len(), 1);
    match statements.remove(0) {
        Statement::Connection(connection) => connection,
        other => panic!("expected a connection, got {other:?}"),
    }
}

fn component(node: &NodeDescriptor) -> &ComponentDescriptor {
    match node {
        NodeDescriptor::Component(component) => component,
        NodeDescriptor::Port(port) => panic!("expected a component, got port {port:?}"),
    }
}

#[test]
fn test_empty_source() {
    assert!(parse_ok("").is_empty());
    assert!(parse_ok("  \n\n # only a comment\n;").is_empty());
}

#[test]
fn test_standalone_definition() {
    let statements = parse_ok("[R1:22k]");
    let [Statement::Definition(descriptor)] = statements.as_slice() else {
        panic!("expected a single definition, got {statements:?}");
    };
    assert_eq!(descriptor.delimiter, Delimiter::Square);
    let designator = descriptor.definition.designator.as_ref().unwrap();
    assert_eq!(designator.letter, "R");
    assert_eq!(designator.index, Some(1));
    assert_eq!(
        descriptor.definition.value,
        Some(Value::Numeric {
            magnitude: 22.0,
            prefix: Some(SiPrefix::Kilo),
            unit: String::new(),
        })
    );
}

#[test]
fn test_value_without_designator() {
    let statements = parse_ok("[22k]");
    let [Statement::Definition(descriptor)] = statements.as_slice() else {
        panic!("expected a single definition");
    };
    assert!(descriptor.definition.designator.is_none());
    assert_eq!(descriptor.letter(), "R");
    assert!(descriptor.definition.value.is_some());
}

#[test]
fn test_delimiters_imply_letters() {
    let connection = single_connection("[1k] - {100nF} - <1N4148>");
    assert_eq!(component(&connection.source).letter(), "R");
    assert_eq!(component(&connection.steps[0].target).letter(), "C");
    let diode = component(&connection.steps[1].target);
    assert_eq!(diode.letter(), "D");
    assert_eq!(
        diode.definition.value,
        Some(Value::Symbolic("1N4148".to_string()))
    );
}

#[test]
fn test_definition_attributes() {
    let statements = parse_ok(r#"[R2 10k @POT "volume"]"#);
    let [Statement::Definition(descriptor)] = statements.as_slice() else {
        panic!("expected a single definition");
    };
    let definition = &descriptor.definition;
    assert_eq!(definition.symbol.as_deref(), Some("POT"));
    assert_eq!(definition.description.as_deref(), Some("volume"));
    assert_eq!(definition.value.as_ref().unwrap().to_string(), "10k");
}

#[test]
fn test_description_only() {
    let statements = parse_ok(r#"[R1 "resistor"]"#);
    let [Statement::Definition(descriptor)] = statements.as_slice() else {
        panic!("expected a single definition");
    };
    assert!(descriptor.definition.value.is_none());
    assert_eq!(
        descriptor.definition.description.as_deref(),
        Some("resistor")
    );
}

#[test]
fn test_chained_connection() {
    let connection = single_connection("[R1] - [R2] - [R3]");
    assert_eq!(connection.steps.len(), 2);
    let indices: Vec<_> = std::iter::once(&connection.source)
        .chain(connection.steps.iter().map(|step| &step.target))
        .map(|node| component(node).definition.designator.as_ref().unwrap().index)
        .collect();
    assert_eq!(indices, vec![Some(1), Some(2), Some(3)]);
}

#[test]
fn test_terminals() {
    let connection = single_connection("{C1}.2 - 1.<D1>.k - a.[R1]");
    assert_eq!(connection.steps[0].source_terminal.as_deref(), Some("2"));
    assert_eq!(connection.steps[0].target_terminal.as_deref(), Some("1"));
    assert_eq!(connection.steps[1].source_terminal.as_deref(), Some("k"));
    assert_eq!(connection.steps[1].target_terminal.as_deref(), Some("a"));
}

#[test]
fn test_ports() {
    let connection = single_connection("in:audio - [R1] - gnd");
    let NodeDescriptor::Port(source) = &connection.source else {
        panic!("expected a port");
    };
    assert_eq!(source.kind, PortKind::In);
    assert_eq!(source.specifier.as_deref(), Some("audio"));
    let NodeDescriptor::Port(target) = &connection.steps[1].target else {
        panic!("expected a port");
    };
    assert_eq!(target.kind, PortKind::Gnd);
    assert_eq!(target.specifier, None);
}

#[test]
fn test_lone_port_is_connection_without_steps() {
    let connection = single_connection("vcc @BATTERY");
    assert!(connection.steps.is_empty());
    let NodeDescriptor::Port(port) = &connection.source else {
        panic!("expected a port");
    };
    assert_eq!(port.symbol.as_deref(), Some("BATTERY"));
}

#[test]
fn test_settings() {
    let statements = parse_ok("set layout.direction=DOWN layout.spacing.node=40 # tight");
    let [Statement::Settings(settings)] = statements.as_slice() else {
        panic!("expected settings");
    };
    assert_eq!(
        settings.entries,
        vec![
            ("layout.direction".to_string(), "DOWN".to_string()),
            ("layout.spacing.node".to_string(), "40".to_string()),
        ]
    );
}

#[test]
fn test_statement_separators() {
    let statements = parse_ok("[R1] - gnd; [R2] - gnd\n\n# comment\nin - [R3]\n");
    assert_eq!(statements.len(), 3);
}

#[test]
fn test_multiline_circuit() {
    let source = r#"
        # fuzz input stage
        in - [R1:22k "input"] - {C1:100nF}.2 - 1.<D1:1N4148> - gnd
        [R2 @POT "volume"]
        set layout.direction=RIGHT
    "#;
    let statements = parse_ok(source);
    assert_eq!(statements.len(), 3);
    assert!(matches!(statements[0], Statement::Connection(_)));
    assert!(matches!(statements[1], Statement::Definition(_)));
    assert!(matches!(statements[2], Statement::Settings(_)));
}

#[test]
fn test_error_unterminated_string() {
    assert_eq!(parse_err_code("[R1 \"open]\n"), ErrorCode::E001);
}

#[test]
fn test_error_unexpected_token() {
    assert_eq!(parse_err_code("resistor"), ErrorCode::E100);
    assert_eq!(parse_err_code("[R1] [R2]"), ErrorCode::E100);
}

#[test]
fn test_error_incomplete_connection() {
    assert_eq!(parse_err_code("[R1] -"), ErrorCode::E101);
    assert_eq!(parse_err_code("[R1] - \n [R2]"), ErrorCode::E101);
    assert_eq!(parse_err_code("[R1].2"), ErrorCode::E101);
}

#[test]
fn test_error_unclosed_component() {
    assert_eq!(parse_err_code("[R1:22k - [R2]"), ErrorCode::E102);
    assert_eq!(parse_err_code("{C1]"), ErrorCode::E102);
}

#[test]
fn test_error_invalid_setting() {
    assert_eq!(parse_err_code("set layout.direction"), ErrorCode::E103);
    assert_eq!(parse_err_code("set"), ErrorCode::E100);
}

#[test]
fn test_error_zero_index() {
    assert_eq!(parse_err_code("[R0]"), ErrorCode::E104);
}

#[test]
fn test_error_index_out_of_range() {
    assert_eq!(parse_err_code("[R3000000000] - gnd"), ErrorCode::E104);
    assert_eq!(parse_err_code("[R2147483648]"), ErrorCode::E104);
    assert_eq!(parse_err_code("[R99999999999999999999]"), ErrorCode::E104);
}

#[test]
fn test_error_span_points_into_source() {
    let source = "[R1] - gnd\n[R2:4k7 - [R3]";
    let err = parse(source).unwrap_err();
    let span = err.diagnostics()[0].primary_span().unwrap();
    assert_eq!(span.start(), source.find("[R2").unwrap());
    assert!(span.end() <= source.len());
    assert!(!span.is_empty());
}

mod properties {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        #[test]
        fn chain_length_matches_wire_count(indices in prop::collection::vec(1u32..500, 2..12)) {
            let source = indices
                .iter()
                .map(|index| format!("[R{index}]"))
                .collect::<Vec<_>>()
                .join(" - ");
            let connection = single_connection(&source);
            prop_assert_eq!(connection.steps.len(), indices.len() - 1);
        }

        #[test]
        fn numeric_values_survive_parsing(magnitude in 1u32..10_000, prefix in "[pnumkMG]") {
            let source = format!("{{C1:{magnitude}{prefix}F}}");
            let statements = parse_ok(&source);
            let Statement::Definition(descriptor) = &statements[0] else {
                panic!("expected a definition");
            };
            let is_numeric = matches!(descriptor.definition.value, Some(Value::Numeric { .. }));
            prop_assert!(is_numeric);
        }
    }
}
