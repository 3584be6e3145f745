//! Key-length estimation: Kasiski examination, Friedman test and their reconciliation

pub mod kasiski;
pub mod friedman;
pub mod reconcile;

pub use kasiski::*;
pub use friedman::*;
pub use reconcile::*;
