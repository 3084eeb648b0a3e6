// Scalar kind and value tests
// Covers defaults, display, JSON projection, and the error type's
// conversion surface.

use pretty_assertions::assert_eq;
use serde_json::json;
use typecard_core::error::Error;
use typecard_core::{bail, Result, ScalarKind, ScalarValue, ToJson};

// ===== KINDS AND DEFAULTS =====

#[test]
fn test_defaults_render_like_source_literals() -> Result<()> {
    assert_eq!(ScalarKind::I32.default_value().to_string(), "0");
    assert_eq!(ScalarKind::I8.default_value().to_string(), "0");
    assert_eq!(ScalarKind::F32.default_value().to_string(), "0.0");
    assert_eq!(ScalarKind::F64.default_value().to_string(), "0.0");
    assert_eq!(ScalarKind::Bool.default_value().to_string(), "false");
    assert_eq!(ScalarKind::Char.default_value().to_string(), "'\\0'");
    assert_eq!(ScalarKind::Reference.default_value().to_string(), "null");
    Ok(())
}

#[test]
fn test_widths_separate_floats_from_integers() {
    assert_eq!(ScalarKind::I16.bit_width(), Some(16));
    assert_eq!(ScalarKind::F32.bit_width(), Some(32));
    assert!(ScalarKind::F32.is_float());
    assert!(!ScalarKind::F32.is_integer());
    assert!(ScalarKind::I64.is_integer());
    assert_eq!(ScalarKind::Char.bit_width(), Some(16));
    assert!(!ScalarKind::Char.is_signed());
}

#[test]
fn test_kind_serde_names_match_display() -> Result<()> {
    let names: Vec<_> = ScalarKind::ALL
        .iter()
        .map(|k| serde_json::to_value(k))
        .collect::<std::result::Result<_, _>>()?;
    let displayed: Vec<_> = ScalarKind::ALL.iter().map(|k| json!(k.name())).collect();
    assert_eq!(names, displayed);
    Ok(())
}

// ===== VALUE PROJECTION =====

#[test]
fn test_values_project_to_plain_json() -> Result<()> {
    assert_eq!(ScalarValue::i32(26).to_json()?, json!(26));
    assert_eq!(ScalarValue::i8(-4).to_json()?, json!(-4));
    assert_eq!(ScalarValue::f64(0.5).to_json()?, json!(0.5));
    assert_eq!(ScalarValue::bool(false).to_json()?, json!(false));
    assert_eq!(ScalarValue::char('a').to_json()?, json!("a"));
    assert_eq!(ScalarValue::type_ref("String").to_json()?, json!("String"));
    assert_eq!(ScalarValue::null().to_json()?, serde_json::Value::Null);
    Ok(())
}

#[test]
fn test_json_projection_round_trips_through_to_value() -> Result<()> {
    let n: i32 = ScalarValue::i32(26).to_value()?;
    assert_eq!(n, 26);
    let flag: bool = ScalarValue::bool(true).to_value()?;
    assert!(flag);
    Ok(())
}

// ===== ERROR SURFACE =====

fn positive(n: i64) -> Result<i64> {
    if n <= 0 {
        bail!("expected a positive number, got {}", n);
    }
    Ok(n)
}

#[test]
fn test_bail_produces_a_generic_error() {
    match positive(-3) {
        Err(Error::Generic(msg)) => assert!(msg.contains("-3")),
        other => panic!("expected a generic error, got {:?}", other),
    }
    assert_eq!(positive(3).ok(), Some(3));
}

#[test]
fn test_foreign_errors_convert_into_the_crate_error() {
    let report = eyre::eyre!("card source went missing");
    let err: Error = report.into();
    assert!(err.to_string().contains("card source went missing"));

    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such card");
    let err: Error = io.into();
    assert!(err.to_string().contains("no such card"));

    let err: Error = "plain message".to_string().into();
    assert!(matches!(err, Error::Generic(_)));
}

#[test]
fn test_error_messages_name_the_offender() {
    let err = Error::TypeMismatch {
        name: "number".to_string(),
        declared: ScalarKind::I32,
        found: ScalarKind::Bool,
    };
    let msg = err.to_string();
    assert!(msg.contains("number"));
    assert!(msg.contains("i32"));
    assert!(msg.contains("bool"));

    let msg = Error::ReadOnlyAssignment("yet_another_number".to_string()).to_string();
    assert!(msg.contains("yet_another_number"));
}
