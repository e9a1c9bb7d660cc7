#![warn(
    clippy::pedantic,
    future_incompatible,
    missing_debug_implementations,
    missing_docs,
    rust_2018_idioms
)]
#![deny(rustdoc::broken_intra_doc_links)]

//! Parsing and lazy resolution of JVM type descriptors and generic signatures.
//!
//! ```
//! use jvm_signatures::types::{Signature, signatures::TypeSignature};
//!
//! let sig: TypeSignature = "Ljava/util/List<Ljava/lang/String;>;".parse().unwrap();
//! assert_eq!(sig.to_string(), "Ljava/util/List<Ljava/lang/String;>;");
//! assert_eq!(sig.java_syntax().to_string(), "java.util.List<java.lang.String>");
//! ```
//! ## Features
#![doc = document_features::document_features!()]

/// Class dependency graphs built from referenced class names.
#[cfg(feature = "petgraph")]
pub mod dependencies;
pub(crate) mod macros;
pub mod resolution;
pub mod types;

/// Test utilities
#[cfg(test)]
pub mod tests;
