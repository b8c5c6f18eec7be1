// src/environment.rs

use std::collections::HashSet;
use std::io::{self, Write};

use crate::config::{LOOP_VARIABLES_HEADER, NO_LOOP_VARIABLES, NO_VARIABLES, VARIABLES_HEADER};
use crate::format::format_significant;

// --- Core Data Structures ---

#[derive(Debug, Clone, PartialEq)]
pub struct ScalarBinding {
    pub name: String,
    pub value: f64,
}

/// A declared numeric range. Never iterated; only listed.
#[derive(Debug, Clone, PartialEq)]
pub struct LoopBinding {
    pub name: String,
    pub start: f64,
    pub increment: f64,
    pub end: f64,
}

/// What `Environment::assign` did with a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assignment {
    /// The name belongs to a loop binding; the write was dropped.
    Ignored,
    Updated,
    Created,
}

// Where a name is bound: an index into one of the two collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Binding {
    Scalar(usize),
    Loop(usize),
}

// --- The Variable Store ---

/// Scalar and loop bindings sharing one namespace. Both collections keep
/// insertion order, which is also listing order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    scalars: Vec<ScalarBinding>,
    loops: Vec<LoopBinding>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scalars(&self) -> &[ScalarBinding] {
        &self.scalars
    }

    pub fn loops(&self) -> &[LoopBinding] {
        &self.loops
    }

    /// Appends a scalar. The caller is responsible for name uniqueness.
    pub fn add_scalar(&mut self, name: impl Into<String>, value: f64) {
        self.scalars.push(ScalarBinding { name: name.into(), value });
    }

    pub fn add_loop(&mut self, name: impl Into<String>, start: f64, increment: f64, end: f64) {
        self.loops.push(LoopBinding { name: name.into(), start, increment, end });
    }

    // Loop bindings take priority over scalars with the same name.
    fn lookup(&self, name: &str) -> Option<Binding> {
        if let Some(i) = self.loops.iter().position(|l| l.name == name) {
            return Some(Binding::Loop(i));
        }
        self.scalars.iter().position(|s| s.name == name).map(Binding::Scalar)
    }

    /// Binds `value` to `name`: loop names are left untouched, existing
    /// scalars are overwritten in place, anything else becomes a new scalar.
    pub fn assign(&mut self, name: &str, value: f64) -> Assignment {
        let outcome = match self.lookup(name) {
            Some(Binding::Loop(_)) => Assignment::Ignored,
            Some(Binding::Scalar(i)) => {
                self.scalars[i].value = value;
                Assignment::Updated
            }
            None => {
                self.add_scalar(name, value);
                Assignment::Created
            }
        };
        tracing::debug!(name, value, ?outcome, "assign");
        outcome
    }

    /// True when no name occurs twice across scalars and loops.
    pub fn check_unique(&self) -> bool {
        let mut seen = HashSet::new();
        self.scalars
            .iter()
            .map(|s| s.name.as_str())
            .chain(self.loops.iter().map(|l| l.name.as_str()))
            .all(|name| seen.insert(name))
    }

    /// Scalar `(name, value)` pairs in insertion order, as seen by the
    /// expression evaluator.
    pub fn variable_table(&self) -> Vec<(&str, f64)> {
        self.scalars.iter().map(|s| (s.name.as_str(), s.value)).collect()
    }

    /// Writes the `@print` listing. A loop's leading value is its start.
    pub fn write_listing<W: Write>(&self, out: &mut W, precision: usize) -> io::Result<()> {
        let fmt = |v: f64| format_significant(v, precision);

        if self.scalars.is_empty() {
            writeln!(out, "{}", NO_VARIABLES)?;
        } else {
            writeln!(out, "{}", VARIABLES_HEADER)?;
            for s in &self.scalars {
                writeln!(out, "{} = {}", s.name, fmt(s.value))?;
            }
        }

        if self.loops.is_empty() {
            writeln!(out, "{}", NO_LOOP_VARIABLES)?;
        } else {
            writeln!(out, "{}", LOOP_VARIABLES_HEADER)?;
            for l in &self.loops {
                writeln!(
                    out,
                    "{} = {} ({}, {}, {})",
                    l.name,
                    fmt(l.start),
                    fmt(l.start),
                    fmt(l.increment),
                    fmt(l.end)
                )?;
            }
        }
        Ok(())
    }
}
