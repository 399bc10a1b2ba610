use thiserror::Error;

/// Errors returned by [`crate::compile`].
///
/// The first three variants wrap a front end error and identify the
/// stage that failed; the remaining ones are produced by the emitter
/// itself.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    /// The regex could not be sieved.
    #[error("cannot sieve")]
    Sieve(#[source] rxc_parser::Error),

    /// The sieved expression could not be converted to postfix form.
    #[error("cannot convert to RPN")]
    Rpn(#[source] rxc_parser::Error),

    /// The postfix expression could not be evaluated to a tree.
    #[error("cannot build the matcher tree")]
    Build(#[source] rxc_parser::Error),

    /// The requested output language is not registered.
    #[error("cannot find output language {name:?} (known languages: {known})")]
    UnknownTarget { name: String, known: String },

    /// Emission failed despite a well-formed tree. Only reachable when
    /// the tree was built by hand with a symbol outside the alphabet.
    #[error("cannot produce {target:?} matcher code: {symbol:?} is not an emittable symbol")]
    Template { target: &'static str, symbol: char },
}
