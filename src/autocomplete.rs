//! Suggestion generation.
//!
//! [`Completer`] ties the pieces together: it classifies the text before the
//! cursor, picks the candidate categories that make sense for the clause,
//! fuzzy-filters each against the word being typed and concatenates them in
//! a fixed category order.
crate::reexport!(suggestion);
crate::reexport!(casing);
crate::reexport!(completer);

#[cfg(test)]
mod completer_tests;
