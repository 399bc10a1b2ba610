/*! A source-to-source regular-expression compiler.

`rxc` takes a simple regex over alphanumeric symbols with union (`|`),
concatenation and the Kleene closures `*` and `+`, and emits a
complete, self-contained program in one of several target languages.
The generated program reads an input string from its command-line
argument and prints all non-overlapping leftmost matches of the regex.

Compilation is a pure function from regex and target to source text:
two compilations with identical arguments produce byte-identical
output.

# Example

```rust
let target = rxc::find_target("python3").unwrap();
let code = rxc::compile("a(b|c)*d", target).unwrap();

assert!(code.contains("Char('a')"));
```
*/

#[cfg(feature = "logging")]
use std::time::Instant;

#[cfg(feature = "logging")]
use log::*;

use rxc_parser::ast;
use rxc_parser::{rpn_convert, sieve};

pub use crate::emitter::emit;
pub use crate::emitter::find_target;
pub use crate::emitter::target_names;
pub use crate::emitter::Target;
pub use crate::errors::Error;

mod emitter;
mod errors;

#[cfg(test)]
mod tests;

/// Compiles `regex` into a source program for `target`.
///
/// Runs the full pipeline: the sieve inserts explicit concatenation
/// markers, the RPN converter produces the postfix form, the tree
/// builder evaluates it into a matcher-generator tree, and the emitter
/// walks the tree and renders the target's templates. Errors identify
/// the stage that rejected the input.
pub fn compile(regex: &str, target: &Target) -> Result<String, Error> {
    #[cfg(feature = "logging")]
    let start = Instant::now();

    let sieved = sieve(regex).map_err(Error::Sieve)?;

    #[cfg(feature = "logging")]
    debug!("sieved expression: {}", &sieved);

    let postfix = rpn_convert(&sieved).map_err(Error::Rpn)?;

    #[cfg(feature = "logging")]
    debug!("postfix expression: {}", &postfix);

    let root = ast::build(&postfix).map_err(Error::Build)?;
    let code = emit(root.as_ref(), target)?;

    #[cfg(feature = "logging")]
    info!("compilation time: {:?}", Instant::elapsed(&start));

    Ok(code)
}
