//! Domani composition root.

pub mod bootstrap;
