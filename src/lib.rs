//! A string lookup table that can be searched in either direction:
//! by key to find the value, by value to find the key, or both at once
//! with `find`. It is a plain single-threaded container; wrap it in a
//! lock if it must be shared.

extern crate serde;

pub mod bimap;
mod serial;

pub use bimap::*;
