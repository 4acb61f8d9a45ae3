//! The syntax tour sample.
//!
//! A compact tour of common constructs: a key/value map seeded inline, a
//! greeting, a labeled parity loop, and an inert typed record. Like the
//! walkthrough's dataset, the map and the record are declared without being
//! printed.

use std::collections::HashMap;

pub(crate) const ID: &str = "syntax-tour";
pub(crate) const TITLE: &str = "Syntax tour";
pub(crate) const DESCRIPTION: &str =
    "Greeting and a labeled parity loop, with an inert map and record";

/// Loop bound for the labeled parity section.
const NUMBER_COUNT: u32 = 10;

/// Inert record declared by the tour, mirroring the walkthrough's dataset.
struct Person {
    name: String,
    age: u32,
}

impl Person {
    fn new(name: String, age: u32) -> Self {
        Person { name, age }
    }
}

pub(crate) fn render() -> Vec<String> {
    let mut lines = Vec::new();

    let mut map = HashMap::new();
    map.insert("key", "value");
    tracing::debug!(entries = map.len(), "seeded key/value map");

    lines.push("Hello, world!".to_string());

    for i in 0..NUMBER_COUNT {
        if i % 2 == 0 {
            lines.push(format!("Even: {i}"));
        } else {
            lines.push(format!("Odd: {i}"));
        }
    }

    let author = Person::new("Ada".to_string(), 36);
    tracing::debug!(name = %author.name, age = author.age, "declared inert record");

    lines
}
