//! Build-support utilities for the Graphene bindings and installed tests.
//!
//! This crate provides the type-name filter used by the introspection scanner,
//! installed-test descriptor generation, and the introspection smoke checks.

mod ident;
mod installed_test;
mod introspection;

pub use crate::ident::*;
pub use crate::installed_test::*;
pub use crate::introspection::*;
