/*! Explicit-concatenation normalization.

[`sieve`] validates a raw regex and re-emits it with the [`CONCAT`]
marker inserted between every pair of juxtaposed sub-expressions. The
output is still infix and preserves parentheses, so stripping every
marker from it yields the input again.

The pass is a recursive descent over the grammar

```text
expr   → concat ('|' expr)?
concat → closed ('⋅'? concat)?     -- emit '⋅' when a second closed follows
closed → basic ('*' | '+')?
basic  → '(' expr ')' | symbol | ε
symbol → [A-Za-z0-9]
```

The only non-LL(1) point is `concat`: after one `closed` the parser
tries to parse a further `concat` speculatively, into its own buffer,
and splices buffer and marker into the parent only when the attempt
succeeds. An explicit `⋅` already present in the input commits the
parser instead, so sieving is idempotent.
*/

use crate::errors::Error;
use crate::{is_symbol, CONCAT};

fn end(input: &[char], pos: usize) -> bool {
    pos >= input.len() || input[pos] == ')'
}

fn expr(input: &[char], out: &mut String) -> Result<usize, Error> {
    let n = concat(input, out)?;
    if !end(input, n) && input[n] == '|' {
        out.push('|');
        let m = expr(&input[n + 1..], out)?;
        return Ok(n + 1 + m);
    }
    Ok(n)
}

fn concat(input: &[char], out: &mut String) -> Result<usize, Error> {
    let n = closed(input, out)?;
    if !end(input, n) {
        // An explicit marker commits the parser to the rest of the
        // concatenation; errors in it propagate.
        if input[n] == CONCAT {
            out.push(CONCAT);
            let m = concat(&input[n + 1..], out)?;
            return Ok(n + 1 + m);
        }
        // Speculative parse into a private buffer, spliced into the
        // parent only on success.
        let mut buf = String::new();
        if let Ok(m) = concat(&input[n..], &mut buf) {
            out.push(CONCAT);
            out.push_str(&buf);
            return Ok(n + m);
        }
    }
    Ok(n)
}

fn closed(input: &[char], out: &mut String) -> Result<usize, Error> {
    let n = basic(input, out)?;
    if !end(input, n) {
        let c = input[n];
        if c == '*' || c == '+' {
            out.push(c);
            return Ok(n + 1);
        }
    }
    Ok(n)
}

fn basic(input: &[char], out: &mut String) -> Result<usize, Error> {
    // ε is permissible
    if end(input, 0) {
        return Ok(0);
    }
    if input[0] == '(' {
        out.push('(');
        let n = expr(&input[1..], out)?;
        return match input.get(1 + n) {
            Some(')') => {
                out.push(')');
                Ok(n + 2)
            }
            // A leftover `(` is a dangling group the speculative
            // concatenation gave up on, not a stray symbol.
            Some('(') => Err(Error::UnbalancedParens("bracket not closed")),
            Some(&c) => Err(Error::Lexical(c)),
            None => Err(Error::UnbalancedParens("bracket not closed")),
        };
    }
    symbol(input[0], out)?;
    Ok(1)
}

fn symbol(c: char, out: &mut String) -> Result<(), Error> {
    if is_symbol(c) {
        out.push(c);
        return Ok(());
    }
    Err(Error::Lexical(c))
}

/// Validates `regex` and inserts explicit concatenation markers.
///
/// The empty regex is legal and sieves to the empty string. Fails with
/// [`Error::Lexical`] on a character outside the alphabet (or an
/// operator where an atom is required) and [`Error::UnbalancedParens`]
/// on mismatched grouping.
pub fn sieve(regex: &str) -> Result<String, Error> {
    let input: Vec<char> = regex.chars().collect();
    let mut out = String::new();
    let n = expr(&input, &mut out)?;
    match input.get(n) {
        None => Ok(out),
        Some(')') => Err(Error::UnbalancedParens("unexpected closing bracket")),
        // Speculation backs off a dangling group without consuming its
        // `(`, so a leftover starting with `(` is a bracket error.
        Some('(') => Err(Error::UnbalancedParens("bracket not closed")),
        Some(&c) => Err(Error::Lexical(c)),
    }
}
