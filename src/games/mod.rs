//! Concrete vocabularies declared with the framework.

pub mod poker;
