/*! Infix to reverse-Polish conversion.

[`rpn_convert`] parses a sieved expression (see [`crate::sieve`]) by
recursive descent and emits it in postfix form, dropping parentheses.
The grammar is the LL(1) refactoring of the sieve grammar, with the
emit actions placed after each operator's right operand:

```text
expr   → concat union
union  → '|' concat { emit('|') } union | ε
concat → closed rest
rest   → '⋅' closed { emit('⋅') } rest | ε
closed → basic ('*' { emit('*') } | '+' { emit('+') })?
basic  → '(' expr ')' | symbol { emit(symbol) } | ε
```

Every operand position of an emitted operator must itself have emitted
something; `a|`, `|a`, `a⋅`, a lone `*` and closures or unions over
empty groups are all rejected here. All writes go to a single shared
buffer, so on failure the buffer holds the longest successfully
translated prefix, which is reported back as the partial result.
*/

use crate::errors::Error;
use crate::{is_symbol, CONCAT};

fn end(input: &[char], pos: usize) -> bool {
    pos >= input.len() || input[pos] == ')'
}

fn expr(input: &[char], out: &mut String) -> Result<usize, String> {
    let mark = out.len();
    let n = concat(input, out)?;
    let m = union(&input[n..], out, out.len() > mark)?;
    Ok(n + m)
}

// `left` tells whether the operand to the left of a potential `|`
// emitted any output.
fn union(input: &[char], out: &mut String, left: bool) -> Result<usize, String> {
    // ε is permissible
    if end(input, 0) {
        return Ok(0);
    }
    if input[0] != '|' {
        return Err("nonempty union must start with '|'".to_string());
    }
    if !left {
        return Err("empty union operand".to_string());
    }
    let mark = out.len();
    let n = concat(&input[1..], out)?;
    if out.len() == mark {
        return Err("empty union operand".to_string());
    }
    out.push('|');
    let m = union(&input[1 + n..], out, true)?;
    Ok(1 + n + m)
}

fn concat(input: &[char], out: &mut String) -> Result<usize, String> {
    let mark = out.len();
    let n = closed(input, out)?;
    let m = rest(&input[n..], out, out.len() > mark)?;
    Ok(n + m)
}

fn rest(input: &[char], out: &mut String, left: bool) -> Result<usize, String> {
    // ε is permissible
    if end(input, 0) || input[0] != CONCAT {
        return Ok(0);
    }
    if !left {
        return Err("empty concatenation operand".to_string());
    }
    let mark = out.len();
    let n = closed(&input[1..], out)?;
    if out.len() == mark {
        return Err("empty concatenation operand".to_string());
    }
    out.push(CONCAT);
    let m = rest(&input[1 + n..], out, true)?;
    Ok(1 + n + m)
}

fn closed(input: &[char], out: &mut String) -> Result<usize, String> {
    let mark = out.len();
    let n = basic(input, out)?;
    if !end(input, n) {
        let c = input[n];
        if c == '*' || c == '+' {
            if out.len() == mark {
                return Err("empty closure operand".to_string());
            }
            out.push(c);
            return Ok(n + 1);
        }
    }
    Ok(n)
}

fn basic(input: &[char], out: &mut String) -> Result<usize, String> {
    // ε is permissible
    if end(input, 0) {
        return Ok(0);
    }
    if input[0] == '(' {
        let n = expr(&input[1..], out)?;
        return match input.get(1 + n) {
            Some(')') => Ok(n + 2),
            Some(&c) => Err(format!("{c:?} is not an allowed symbol")),
            None => Err("bracket not closed".to_string()),
        };
    }
    let c = input[0];
    if !is_symbol(c) {
        return Err(format!("{c:?} is not an allowed symbol"));
    }
    out.push(c);
    Ok(1)
}

/// Converts a sieved expression to reverse Polish notation.
///
/// Empty input yields empty output; balanced but empty groups emit
/// nothing. Fails with [`Error::Parse`] on any grammar violation,
/// carrying the longest successfully translated postfix prefix.
pub fn rpn_convert(sieved: &str) -> Result<String, Error> {
    let input: Vec<char> = sieved.chars().collect();
    let mut out = String::new();
    match expr(&input, &mut out) {
        Ok(n) if n == input.len() => Ok(out),
        Ok(_) => Err(Error::Parse {
            message: "unexpected closing bracket".to_string(),
            partial: out,
        }),
        Err(message) => Err(Error::Parse { message, partial: out }),
    }
}
