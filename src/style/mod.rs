//! Style primitives: values, mappings, and fragments.
//!
//! This module provides:
//!
//! - [`PropertyValue`]: A single style property value
//! - [`StyleMap`]: A plain property/value mapping with shallow merge
//! - [`StyleFragment`]: A static mapping or a pure function of the context
//! - [`style!`](crate::style!): Literal macro for building style maps
//!
//! Everything above is deliberately dumb data; which fragments apply, and in
//! what order, is decided by the sheet module.

mod fragment;
mod map;
mod value;

pub use fragment::{DynamicFn, StyleFragment};
pub use map::StyleMap;
pub use value::PropertyValue;
