//! RDF term and triple model with a canonical N-Triples text codec.

mod term;
mod triple;

pub use term::Term;
pub use triple::Triple;
