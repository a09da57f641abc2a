//! Voltaic Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Voltaic parser,
//! compiler, geometry engine and layout pipeline. It includes:
//!
//! - **Geometry**: Points, sizes, bounds and box sides ([`geometry`] module)
//! - **Drawing**: Z-ordered SVG output ([`draw`] module)
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Values**: Numeric and symbolic component values ([`value::Value`])
//! - **Designators**: Component identities such as `R1` ([`designator::Designator`])
//! - **Statements**: The statement model handed from the parser to the compiler ([`statement`] module)

pub mod color;
pub mod designator;
pub mod draw;
pub mod geometry;
pub mod statement;
pub mod value;
