//! The fixture catalog.
//!
//! Each sample is a named, deterministic line sequence produced by executing
//! real control flow (loops, parity branches, nested conditionals) against an
//! in-memory line buffer. Samples never read external state, so the bytes
//! handed to the editor under manual test are identical on every run.

pub(crate) mod syntax;
pub(crate) mod walkthrough;

/// One named fixture in the catalog.
#[derive(Debug)]
pub struct Sample {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    render_fn: fn() -> Vec<String>,
}

impl Sample {
    /// Produce the sample's line sequence by executing its control flow.
    pub fn render(&self) -> Vec<String> {
        (self.render_fn)()
    }
}

/// Sample emitted by a bare invocation.
pub const DEFAULT_SAMPLE_ID: &str = walkthrough::ID;

static CATALOG: [Sample; 2] = [
    Sample {
        id: walkthrough::ID,
        title: walkthrough::TITLE,
        description: walkthrough::DESCRIPTION,
        render_fn: walkthrough::render,
    },
    Sample {
        id: syntax::ID,
        title: syntax::TITLE,
        description: syntax::DESCRIPTION,
        render_fn: syntax::render,
    },
];

/// Every sample, in catalog order.
pub fn catalog() -> &'static [Sample] {
    &CATALOG
}

/// Look up a sample by id.
pub fn find(id: &str) -> Option<&'static Sample> {
    CATALOG.iter().find(|sample| sample.id == id)
}
