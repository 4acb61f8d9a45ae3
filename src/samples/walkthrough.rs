//! The canonical indentation walkthrough.
//!
//! A greeting, a counted loop branching on parity, an inert nested dataset
//! declaration, and a fixed conditional block. The nesting depth is the
//! point: the emitted content gives Tab/Shift+Tab something real to move.

use crate::dataset::{sample_dataset, validate_dataset};

pub(crate) const ID: &str = "indent-walkthrough";
pub(crate) const TITLE: &str = "Indentation walkthrough";
pub(crate) const DESCRIPTION: &str =
    "Greeting, a parity loop, a nested dataset declaration, and fixed conditionals";

/// Loop bound for the numbered parity section.
const NUMBER_COUNT: u32 = 10;

/// Fixed conditions for the trailing conditional block.
const OUTER_BRANCH: bool = true;
const INNER_BRANCH: bool = false;

pub(crate) fn render() -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Hello, World!".to_string());

    for i in 0..NUMBER_COUNT {
        lines.push(format!("Number: {i}"));
        if i % 2 == 0 {
            lines.push("Even".to_string());
        } else {
            lines.push("Odd".to_string());
        }
    }

    // Declared for nesting depth only; nothing is printed from it.
    let data = sample_dataset();
    debug_assert!(validate_dataset(&data).is_none());
    tracing::debug!(items = data.items.len(), "declared nested dataset");

    if OUTER_BRANCH {
        lines.push("This is true".to_string());
        if INNER_BRANCH {
            lines.push("This won't print".to_string());
        } else {
            lines.push("This will print".to_string());
        }
    }

    lines
}
