//! Supporting utilities shared by models.
//!
//! These modules are public because they are useful to callers building
//! their own inputs, but their APIs may change between releases.

pub mod constraint;
