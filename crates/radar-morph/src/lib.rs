//! radar-morph - Morphological operations for radar restoration
//!
//! This crate provides:
//!
//! - Structuring elements (SEL) for defining operation neighborhoods
//! - Binary morphology: erosion, dilation, opening, closing
//! - Inpaint-mask derivation from a data surface and its border overlay

pub mod binary;
mod error;
pub mod morphapp;
pub mod sel;

pub use error::{MorphError, MorphResult};
pub use sel::{Sel, SelElement};

pub use binary::{close, dilate, erode, open};
pub use morphapp::inpaint_mask;
