//! Field storage for Swell simulations.
//!
//! A [`FieldStore`] owns one flat `f32` buffer per [`Field`], all of
//! the same length. Kernels borrow read fields as slices and check a
//! write field out with [`FieldStore::take`], returning it with
//! [`FieldStore::put`] once filled.
//!
//! [`Field`]: swell_core::Field

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod store;

pub use store::FieldStore;
