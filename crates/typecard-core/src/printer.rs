//! Plain-text tables for cards, kind listings, and storage classes.
//!
//! Columns are padded to the widest cell so the output lines up in a
//! terminal. Lines never carry trailing whitespace.

use std::fmt::Write;

use crate::card::ReferenceCard;
use crate::error::Result;
use crate::scalar::{Literal, Notation, ScalarKind};
use crate::storage::StorageClass;

pub fn render_card(card: &ReferenceCard) -> Result<String> {
    let mut rows = Vec::with_capacity(card.len());
    for entry in card.iter() {
        let value = match entry.effective_value() {
            Ok(v) => v.to_string(),
            Err(_) => "(uninitialized)".to_string(),
        };
        rows.push([
            entry.name.clone(),
            entry.kind.to_string(),
            entry.storage.to_string(),
            entry
                .initializer()
                .map(|lit| lit.rendered())
                .unwrap_or_default(),
            value,
            entry.note.clone().unwrap_or_default(),
        ]);
    }
    render_table(
        card.title(),
        ["NAME", "KIND", "STORAGE", "LITERAL", "VALUE", "NOTE"],
        &rows,
    )
}

pub fn render_kinds() -> Result<String> {
    let rows: Vec<_> = ScalarKind::ALL
        .iter()
        .map(|kind| {
            [
                kind.to_string(),
                kind.bit_width()
                    .map(|w| w.to_string())
                    .unwrap_or_else(|| "n/a".to_string()),
                yes_no(kind.is_signed()).to_string(),
                kind.default_value().to_string(),
                kind.describe().to_string(),
            ]
        })
        .collect();
    render_table(
        "kinds",
        ["KIND", "WIDTH", "SIGNED", "DEFAULT", "DESCRIPTION"],
        &rows,
    )
}

pub fn render_storage_classes() -> Result<String> {
    let rows: Vec<_> = StorageClass::ALL
        .iter()
        .map(|class| {
            [
                class.to_string(),
                yes_no(class.is_shared()).to_string(),
                yes_no(class.is_reassignable()).to_string(),
                yes_no(class.auto_initialized()).to_string(),
                class.describe().to_string(),
            ]
        })
        .collect();
    render_table(
        "storage classes",
        ["STORAGE", "SHARED", "REASSIGNABLE", "AUTO-INIT", "DESCRIPTION"],
        &rows,
    )
}

/// One row per notation, all spelling the same value.
pub fn render_notations(value: i64) -> Result<String> {
    let rows: Vec<_> = Notation::ALL
        .iter()
        .map(|notation| {
            [
                notation.to_string(),
                Literal::with_notation(value, *notation).rendered(),
                notation.describe().to_string(),
            ]
        })
        .collect();
    render_table(
        &format!("spellings of {}", value),
        ["NOTATION", "RENDERED", "DESCRIPTION"],
        &rows,
    )
}

fn render_table<const N: usize>(
    title: &str,
    header: [&str; N],
    rows: &[[String; N]],
) -> Result<String> {
    let mut widths = header.map(|h| h.chars().count());
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }
    let mut out = String::new();
    writeln!(out, "{}", title)?;
    writeln!(out)?;
    write_row(&mut out, &header.map(String::from), widths)?;
    for row in rows {
        write_row(&mut out, row, widths)?;
    }
    Ok(out)
}

fn write_row<const N: usize>(
    out: &mut String,
    cells: &[String; N],
    widths: [usize; N],
) -> Result<()> {
    let mut line = String::new();
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            line.push_str("  ");
        }
        write!(line, "{:<width$}", cell, width = widths[i])?;
    }
    writeln!(out, "{}", line.trim_end())?;
    Ok(())
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}
