//! Components - Reusable UI Components
//!
//! UI building blocks. None of them perform I/O.

pub mod composite;
pub mod layout;
pub mod primitives;
