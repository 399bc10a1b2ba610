/*! The matcher-generator tree and its postfix builder.

[`build`] evaluates a postfix expression against a stack of [`Node`]
values and yields the root of the tree, which the code emitters walk
post-order to produce target-language source.
*/

use crate::errors::Error;
use crate::{is_symbol, CONCAT};

/// A node of the matcher-generator tree.
///
/// Leaves match a single symbol; interior nodes combine their children
/// by alternation, concatenation or closure. In the binary variants the
/// first child precedes the second in source order. The closure minimum
/// is 0 for `*` and 1 for `+`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Matches exactly the symbol it carries.
    Sym(char),
    /// Matches either child, trying the first one first.
    Or(Box<Node>, Box<Node>),
    /// Matches the first child followed by the second.
    Concat(Box<Node>, Box<Node>),
    /// Matches the child a minimum number of times, then greedily.
    Closure(Box<Node>, u32),
}

impl Node {
    /// Creates an [`Node::Or`] node.
    pub fn or(a: Node, b: Node) -> Node {
        Node::Or(Box::new(a), Box::new(b))
    }

    /// Creates a [`Node::Concat`] node.
    pub fn concat(a: Node, b: Node) -> Node {
        Node::Concat(Box::new(a), Box::new(b))
    }

    /// Creates a [`Node::Closure`] node.
    pub fn closure(a: Node, min: u32) -> Node {
        Node::Closure(Box::new(a), min)
    }
}

/// Builds the matcher-generator tree for a postfix expression.
///
/// Scans left to right keeping a stack of trees: symbols are pushed,
/// `*` and `+` wrap the top of the stack in a closure, and `|` and `⋅`
/// combine the two topmost entries. The topmost entry is the later
/// operand in source order.
///
/// The empty postfix expression yields `Ok(None)`, the ε expression.
/// Fails with [`Error::Arity`] when an operator finds too few operands
/// and [`Error::StackResidue`] when more than one value remains, both
/// of which indicate a bug in whatever produced the postfix input.
pub fn build(postfix: &str) -> Result<Option<Node>, Error> {
    let mut stack: Vec<Node> = Vec::new();
    for c in postfix.chars() {
        match c {
            '*' | '+' => {
                let a = stack.pop().ok_or(Error::Arity(c))?;
                let min = if c == '+' { 1 } else { 0 };
                stack.push(Node::closure(a, min));
            }
            '|' | CONCAT => {
                let b = stack.pop().ok_or(Error::Arity(c))?;
                let a = stack.pop().ok_or(Error::Arity(c))?;
                stack.push(if c == '|' {
                    Node::or(a, b)
                } else {
                    Node::concat(a, b)
                });
            }
            c if is_symbol(c) => stack.push(Node::Sym(c)),
            c => return Err(Error::UnknownOperator(c)),
        }
    }
    if stack.len() > 1 {
        return Err(Error::StackResidue(stack.len()));
    }
    Ok(stack.pop())
}
