//! # Material Gen
//!
//! Converts a directory of legacy texture assets into per-texture material
//! descriptors consumed by the rendering engine.
//!
//! Everything is inferred from file-naming conventions and sibling-file
//! existence checks - no image content is ever read:
//!
//! - **`*` prefix**: turbulent surface; names containing `WATER` also get
//!   the liquid overrides (roughness, blending, view blocking)
//! - **`_fb` companion**: a `X_fb.tga` next to `X.tga` attaches a
//!   self-illuminated emissive layer
//! - **`+<digit>` prefix**: frame of a cyclic animation, chained to the
//!   next frame on disk or wrapped around to frame zero
//!
//! ## Quick Start
//!
//! ```rust
//! use material_gen::{classify, DirectoryListing, ExportConfig};
//!
//! let listing = DirectoryListing::from_names(["+0TORCH.tga", "+1TORCH.tga"]);
//! let material = classify("+0TORCH.tga", &listing, &ExportConfig::default());
//!
//! let animation = material.framed_animation.unwrap();
//! assert_eq!(animation.next_material_name, "+1TORCH");
//! ```
//!
//! Directory scanning lives in [`MaterialSetBuilder`], which feeds the pure
//! classifier and aggregates the results into a JSON-serializable
//! [`MaterialSet`].

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod builder;
pub mod classifier;
pub mod config;
pub mod descriptor;
pub mod listing;

pub use builder::{
    material_set_to_json, read_material_set, write_material_set, ExportError, MaterialSetBuilder,
};
pub use classifier::classify;
pub use config::{ConfigError, ExportConfig};
pub use descriptor::{
    BlendingMode, EmissiveLayer, FramedAnimation, Material, MaterialSet, SpecialEffect,
    TurbulenceParams,
};
pub use listing::DirectoryListing;
