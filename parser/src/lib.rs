/*! Front end for the `rxc` regular-expression compiler.

The front end turns a raw regex over `[A-Za-z0-9]`, `(`, `)`, `|`, `*`
and `+` into a matcher-generator tree in three stages:

* [`sieve`] validates the regex and inserts an explicit concatenation
  marker (`⋅`) between every pair of juxtaposed sub-expressions.
* [`rpn_convert`] parses the sieved expression and emits it in reverse
  Polish (postfix) notation, dropping parentheses.
* [`ast::build`] evaluates the postfix expression against a stack and
  yields the root of the matcher-generator tree.

# Example

```rust
use rxc_parser::{ast, rpn_convert, sieve};

let sieved = sieve("a(b|c)*d").unwrap();
assert_eq!(sieved, "a⋅(b|c)*⋅d");

let postfix = rpn_convert(&sieved).unwrap();
assert_eq!(postfix, "abc|*⋅d⋅");

let root = ast::build(&postfix).unwrap();
assert!(root.is_some());
```
*/

pub mod ast;
mod errors;
mod rpn;
mod sieve;

pub use errors::Error;
pub use rpn::rpn_convert;
pub use sieve::sieve;

/// The explicit concatenation marker used in sieved and postfix
/// expressions.
///
/// U+22C5 DOT OPERATOR cannot occur in the user alphabet, so sieved
/// output is unambiguous without any escaping.
pub const CONCAT: char = '⋅';

/// Returns true if `c` is a symbol of the regex alphabet.
pub fn is_symbol(c: char) -> bool {
    c.is_ascii_alphanumeric()
}
