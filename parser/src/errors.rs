use thiserror::Error;

/// Errors returned by the front end stages.
///
/// [`Error::Lexical`] and [`Error::UnbalancedParens`] come from the
/// sieve, [`Error::Parse`] from the RPN converter, and the remaining
/// variants from the postfix tree builder. The tree builder errors are
/// unreachable through the normal pipeline, where the converter only
/// produces well-formed postfix; they exist so that direct users of
/// [`crate::ast::build`] get a diagnosis instead of a panic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The regex contains a character outside the allowed alphabet, or
    /// an operator in a position where an atom is required.
    #[error("{0:?} is not an allowed symbol")]
    Lexical(char),

    /// A `(` without its `)`, or a `)` with no open group.
    #[error("{0}")]
    UnbalancedParens(&'static str),

    /// The sieved expression violates the grammar. `partial` is the
    /// longest postfix prefix translated before the failure.
    #[error("{message}: partial result {partial:?}")]
    Parse { message: String, partial: String },

    /// A postfix operator was found with too few operands on the stack.
    #[error("cannot use {0:?} with too few operands")]
    Arity(char),

    /// Postfix evaluation left more than one value on the stack.
    #[error("postfix evaluation left {0} values on the stack")]
    StackResidue(usize),

    /// A byte in the postfix expression is neither a symbol nor an
    /// operator.
    #[error("{0:?} is not a postfix operator or symbol")]
    UnknownOperator(char),
}
