//! Quilt Core Types and Resolvers
//!
//! This crate provides the foundational types for the Quilt layout compiler.
//! It includes:
//!
//! - **Attributes**: Output attribute descriptors and classifier results
//!   ([`attribute`] module)
//! - **Colors**: Color literal canonicalization and naming heuristics
//!   ([`color`] module)
//! - **Components**: The closed component-type vocabulary and its mapping
//!   onto Android view classes ([`component`] module)
//! - **Dimensions**: Dimension value resolution to density-independent
//!   tokens ([`dimension`] module)

pub mod attribute;
pub mod color;
pub mod component;
pub mod dimension;
