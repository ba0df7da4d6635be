// SPDX-License-Identifier: MPL-2.0
//! View transform state and coordinate mapping between image and viewport space.

pub mod mapping;
pub mod transform;

pub use transform::ViewTransform;
