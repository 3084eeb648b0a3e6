// Reference card behavior tests
// Covers the built-in variables exhibit, card validation, lookups,
// and assignment rules.

use pretty_assertions::assert_eq;
use typecard_core::error::Error;
use typecard_core::{
    Declaration, Literal, ReferenceCard, Result, ScalarKind, ScalarValue, StorageClass, ToJson,
};

// ===== VARIABLES EXHIBIT =====

#[test]
fn test_exhibit_holds_the_canonical_values() -> Result<()> {
    let card = ReferenceCard::variables();

    assert_eq!(card.title(), "variables");
    assert_eq!(card.len(), 15);

    assert_eq!(card.lookup("number")?.effective_value()?, ScalarValue::i32(0));
    assert_eq!(card.lookup("hex")?.effective_value()?, ScalarValue::i32(26));
    assert_eq!(card.lookup("bin")?.effective_value()?, ScalarValue::i32(26));
    assert_eq!(
        card.lookup("big")?.effective_value()?,
        ScalarValue::i32(1_000_000)
    );
    assert_eq!(card.lookup("b")?.effective_value()?, ScalarValue::i8(0));
    assert_eq!(card.lookup("s")?.effective_value()?, ScalarValue::i16(0));
    assert_eq!(card.lookup("l")?.effective_value()?, ScalarValue::i64(0));
    assert_eq!(card.lookup("f")?.effective_value()?, ScalarValue::f32(0.0));
    assert_eq!(card.lookup("d")?.effective_value()?, ScalarValue::f64(0.0));
    assert_eq!(
        card.lookup("bool")?.effective_value()?,
        ScalarValue::bool(false)
    );
    assert_eq!(card.lookup("c")?.effective_value()?, ScalarValue::char('a'));
    assert_eq!(
        card.lookup("cls")?.effective_value()?,
        ScalarValue::type_ref("String")
    );
    Ok(())
}

#[test]
fn test_exhibit_spellings_survive_rendering() -> Result<()> {
    let card = ReferenceCard::variables();

    let hex = card.lookup("hex")?.initializer().map(|l| l.rendered());
    let bin = card.lookup("bin")?.initializer().map(|l| l.rendered());
    let big = card.lookup("big")?.initializer().map(|l| l.rendered());

    assert_eq!(hex.as_deref(), Some("0x1a"));
    assert_eq!(bin.as_deref(), Some("0b11010"));
    assert_eq!(big.as_deref(), Some("1_000_000"));
    Ok(())
}

#[test]
fn test_exhibit_hex_and_binary_agree_on_the_value() -> Result<()> {
    let card = ReferenceCard::variables();
    assert_eq!(
        card.lookup("hex")?.effective_value()?,
        card.lookup("bin")?.effective_value()?
    );
    Ok(())
}

#[test]
fn test_exhibit_storage_classes() -> Result<()> {
    let card = ReferenceCard::variables();

    assert_eq!(card.lookup("number")?.storage, StorageClass::Instance);
    assert_eq!(card.lookup("another_number")?.storage, StorageClass::Class);
    assert!(card.lookup("another_number")?.storage.is_shared());
    assert_eq!(
        card.lookup("yet_another_number")?.storage,
        StorageClass::ReadOnly
    );
    assert_eq!(card.lookup("variable")?.storage, StorageClass::Local);
    Ok(())
}

#[test]
fn test_exhibit_passes_its_own_validation() -> Result<()> {
    let card = ReferenceCard::variables();
    let rebuilt = ReferenceCard::new(card.title(), card.entries().to_vec())?;
    assert_eq!(rebuilt.len(), card.len());
    Ok(())
}

// ===== CARD VALIDATION =====

#[test]
fn test_duplicate_names_are_rejected() -> Result<()> {
    let entries = vec![
        Declaration::instance("twice", ScalarKind::I32, Literal::new(1))?,
        Declaration::instance("twice", ScalarKind::I32, Literal::new(2))?,
    ];
    match ReferenceCard::new("demo", entries) {
        Err(Error::DuplicateName(name)) => assert_eq!(name, "twice"),
        other => panic!("expected a duplicate name rejection, got {:?}", other),
    }
    Ok(())
}

#[test]
fn test_initializer_must_inhabit_the_declared_kind() {
    match Declaration::instance("wrong", ScalarKind::I32, Literal::new(false)) {
        Err(Error::TypeMismatch {
            name,
            declared,
            found,
        }) => {
            assert_eq!(name, "wrong");
            assert_eq!(declared, ScalarKind::I32);
            assert_eq!(found, ScalarKind::Bool);
        }
        other => panic!("expected a type mismatch, got {:?}", other),
    }
}

#[test]
fn test_card_revalidates_entries_built_by_hand() {
    let mut entry = Declaration::uninitialized("sneaky", ScalarKind::I8, StorageClass::Instance);
    entry.init = Some(Literal::new(0.5f64));
    assert!(matches!(
        ReferenceCard::new("demo", vec![entry]),
        Err(Error::TypeMismatch { .. })
    ));
}

// ===== DEFAULTS AND LOCALS =====

#[test]
fn test_omitted_initializers_fall_back_to_the_kind_default() -> Result<()> {
    let entry = Declaration::uninitialized("blank", ScalarKind::I64, StorageClass::Instance);
    assert_eq!(entry.effective_value()?, ScalarValue::i64(0));

    let shared = Declaration::uninitialized("shared", ScalarKind::Bool, StorageClass::Class);
    assert_eq!(shared.effective_value()?, ScalarValue::bool(false));

    let handle = Declaration::uninitialized("handle", ScalarKind::Reference, StorageClass::Instance);
    assert_eq!(handle.effective_value()?, ScalarValue::null());
    Ok(())
}

#[test]
fn test_uninitialized_locals_cannot_be_read() {
    let local = Declaration::uninitialized("tmp", ScalarKind::I32, StorageClass::Local);
    match local.effective_value() {
        Err(Error::UninitializedLocal(name)) => assert_eq!(name, "tmp"),
        other => panic!("expected an uninitialized local error, got {:?}", other),
    }
}

#[test]
fn test_initialized_locals_read_normally() -> Result<()> {
    let local = Declaration::local("tmp", ScalarKind::I32, Literal::new(0))?;
    assert_eq!(local.effective_value()?, ScalarValue::i32(0));
    Ok(())
}

#[test]
fn test_the_card_local_loses_its_value_with_its_initializer() -> Result<()> {
    let card = ReferenceCard::variables();
    let mut entry = card.lookup("variable")?.clone();
    assert_eq!(entry.effective_value()?, ScalarValue::i32(0));

    entry.init = None;
    assert!(matches!(
        entry.effective_value(),
        Err(Error::UninitializedLocal(_))
    ));
    Ok(())
}

// ===== ASSIGNMENT =====

#[test]
fn test_assignment_replaces_the_value() -> Result<()> {
    let mut card = ReferenceCard::variables();
    card.assign("number", ScalarValue::i32(7))?;
    assert_eq!(card.lookup("number")?.effective_value()?, ScalarValue::i32(7));
    Ok(())
}

#[test]
fn test_read_only_entries_refuse_reassignment() {
    let mut card = ReferenceCard::variables();
    match card.assign("yet_another_number", ScalarValue::i32(1)) {
        Err(Error::ReadOnlyAssignment(name)) => assert_eq!(name, "yet_another_number"),
        other => panic!("expected a read-only rejection, got {:?}", other),
    }
}

#[test]
fn test_assignment_enforces_the_declared_kind() {
    let mut card = ReferenceCard::variables();
    assert!(matches!(
        card.assign("number", ScalarValue::f64(1.0)),
        Err(Error::TypeMismatch { .. })
    ));
    assert!(matches!(
        card.assign("number", ScalarValue::i64(1)),
        Err(Error::TypeMismatch { .. })
    ));
}

#[test]
fn test_assignment_to_an_unknown_name_fails() {
    let mut card = ReferenceCard::variables();
    assert!(matches!(
        card.assign("missing", ScalarValue::i32(0)),
        Err(Error::UnknownEntry(_))
    ));
}

#[test]
fn test_lookup_of_an_unknown_name_fails() {
    let card = ReferenceCard::variables();
    assert!(card.get("missing").is_none());
    assert!(matches!(
        card.lookup("missing"),
        Err(Error::UnknownEntry(_))
    ));
}

// ===== JSON PROJECTION =====

#[test]
fn test_card_json_carries_every_entry() -> Result<()> {
    let card = ReferenceCard::variables();
    let json = card.to_json()?;

    assert_eq!(json["title"], "variables");
    let entries = json["entries"]
        .as_array()
        .ok_or_else(|| Error::Generic("entries should be an array".to_string()))?;
    assert_eq!(entries.len(), card.len());

    let hex = &entries[1];
    assert_eq!(hex["name"], "hex");
    assert_eq!(hex["kind"], "i32");
    assert_eq!(hex["storage"], "instance");
    assert_eq!(hex["literal"], "0x1a");
    assert_eq!(hex["value"], 26);
    Ok(())
}

#[test]
fn test_uninitialized_locals_project_as_null() -> Result<()> {
    let local = Declaration::uninitialized("tmp", ScalarKind::I32, StorageClass::Local);
    let json = local.to_json()?;
    assert!(json["value"].is_null());
    assert!(json["literal"].is_null());
    Ok(())
}
