//! Python extension module for `rsebm`.
//!
//! The computational core lives in [`rsebm_core`]; this crate only assembles the
//! `rsebm._lib` module that the notebooks import.

pub mod python;

pub use rsebm_core::*;
