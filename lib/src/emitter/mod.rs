/*! Code emission.

An emitter walks the matcher-generator tree post-order and produces a
complete source program for one of the registered [`Target`]s. Each
target supplies five fragment templates (symbol, alternation,
concatenation, closure-with-minimum and the ε matcher) plus a program
skeleton; the walker stitches them together. Templates are pure
functions from their bindings to strings and never inspect the tree
beyond the bindings they receive.
*/

use std::collections::HashMap;

use itertools::Itertools;
use lazy_static::lazy_static;
use rxc_parser::ast::Node;

use crate::errors::Error;

mod c;
mod golang;
mod python3;

/// A code-generation backend.
///
/// Fragment templates receive the fixed bindings `c` (symbol), `a` and
/// `b` (child fragments) and `min` (closure lower bound). Binary and
/// closure templates additionally receive `id`, a number that is unique
/// within one emission; targets that synthesize local names derive them
/// from it, the others ignore it.
#[derive(Debug)]
pub struct Target {
    /// Names this target is registered under; the first one is
    /// canonical.
    names: &'static [&'static str],
    symbol: fn(c: char) -> String,
    or: fn(id: u32, a: &str, b: &str) -> String,
    concat: fn(id: u32, a: &str, b: &str) -> String,
    closure: fn(id: u32, a: &str, min: u32) -> String,
    /// Fragment for the ε expression, substituted for an absent root.
    epsilon: &'static str,
    program: fn(root: &str) -> String,
}

impl Target {
    /// Returns the canonical name of the target.
    pub fn name(&self) -> &'static str {
        self.names[0]
    }
}

lazy_static! {
    static ref TARGETS: HashMap<&'static str, &'static Target> = {
        let mut map = HashMap::new();
        for target in [&golang::TARGET, &c::TARGET, &python3::TARGET] {
            for name in target.names {
                map.insert(*name, target);
            }
        }
        map
    };
}

/// Looks up a registered target by name, case-insensitively.
pub fn find_target(name: &str) -> Result<&'static Target, Error> {
    TARGETS.get(name.to_lowercase().as_str()).copied().ok_or_else(|| {
        Error::UnknownTarget {
            name: name.to_string(),
            known: target_names().iter().join(", "),
        }
    })
}

/// Returns the canonical names of all registered targets, sorted.
pub fn target_names() -> Vec<&'static str> {
    TARGETS.values().map(|target| target.name()).unique().sorted().collect()
}

/// Produces a complete source program for `target` from the tree rooted
/// at `root`. `None` is the ε expression, which compiles to a program
/// that matches only the empty string and therefore records nothing.
///
/// Emission is deterministic: fragment ids are assigned in visit order
/// by a counter that restarts with every call.
pub fn emit(root: Option<&Node>, target: &Target) -> Result<String, Error> {
    let mut emitter = Emitter { target, next_id: 0 };
    let fragment = match root {
        Some(node) => emitter.fragment(node)?,
        None => target.epsilon.to_string(),
    };
    Ok((target.program)(&fragment))
}

// The fresh-id counter is a field rather than a process-wide state so
// that two emissions of the same tree produce byte-identical output.
struct Emitter<'a> {
    target: &'a Target,
    next_id: u32,
}

impl<'a> Emitter<'a> {
    fn fresh_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn fragment(&mut self, node: &Node) -> Result<String, Error> {
        match node {
            Node::Sym(c) => {
                if !c.is_ascii_alphanumeric() {
                    return Err(Error::Template {
                        target: self.target.name(),
                        symbol: *c,
                    });
                }
                Ok((self.target.symbol)(*c))
            }
            Node::Or(a, b) => {
                let a = self.fragment(a)?;
                let b = self.fragment(b)?;
                Ok((self.target.or)(self.fresh_id(), &a, &b))
            }
            Node::Concat(a, b) => {
                let a = self.fragment(a)?;
                let b = self.fragment(b)?;
                Ok((self.target.concat)(self.fresh_id(), &a, &b))
            }
            Node::Closure(a, min) => {
                let a = self.fragment(a)?;
                Ok((self.target.closure)(self.fresh_id(), &a, *min))
            }
        }
    }
}
