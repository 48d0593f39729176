//! Binding-expression parsing for the Quilt layout compiler.
//!
//! Layout documents reference runtime values through binding expressions:
//! text wrapped in `@{...}` (or the template-flavored `${...}`). This crate
//! detects those expressions, rewrites their payload into the target
//! data-binding syntax (`data.` / `viewModel.` namespaces), and accumulates
//! the set of bound variables per output file.
//!
//! The public entry point is [`parse`]; see [`binding`] for the grammar.

pub mod binding;

pub use binding::{Binding, BindingKind, BindingRegistry, parse};
