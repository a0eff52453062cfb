//! Naming-convention classifier
//!
//! Derives rendering properties for a texture purely from its file name
//! and the set of sibling file names. No image content is ever inspected.
//! Rules are additive: a single texture can be turbulent, emissive and
//! animated at the same time.

use crate::config::ExportConfig;
use crate::descriptor::{BlendingMode, EmissiveLayer, FramedAnimation, Material, SpecialEffect};
use crate::listing::DirectoryListing;

/// Light scale applied to every fullbright overlay.
const FULLBRIGHT_LIGHT: [f32; 3] = [4.0, 4.0, 4.0];

/// Roughness override for liquid surfaces.
const LIQUID_ROUGHNESS: f32 = 1.0 / 128.0;

/// Classify one texture file against the listing of its directory.
///
/// # Arguments
/// * `file_name` - File name with extension, as found in the directory
/// * `listing` - Names of all files in the same directory
/// * `config` - Naming conventions and effect constants
///
/// # Returns
/// The descriptor for this texture. Names matching no convention get the
/// minimal diffuse-only descriptor.
pub fn classify(file_name: &str, listing: &DirectoryListing, config: &ExportConfig) -> Material {
    // TODO - handle sky textures and normal-map companions once the engine
    // defines materials for them. Until then such names fall through to the
    // plain diffuse descriptor.
    let mut material = Material::new(file_name);

    if file_name.starts_with('*') {
        material.special_effect = Some(SpecialEffect::Turb(config.turbulence));
        if file_name.contains(&config.liquid_keyword) {
            // Liquid surfaces reflect strongly and must not occlude
            // view-dependent effects behind them (underwater tinting),
            // even though their geometry is solid.
            material.roughness = Some(LIQUID_ROUGHNESS);
            material.blending_mode = Some(BlendingMode::Average);
            material.blocks_view = Some(false);
        }
    }

    let (stem, extension) = split_extension(file_name, &config.texture_extension);

    let fullbright_name = format!("{}{}{}", stem, config.fullbright_suffix, extension);
    if listing.contains(&fullbright_name) {
        // Existence check only - a zero-byte companion still counts.
        material.emissive_layer = Some(EmissiveLayer {
            image: fullbright_name,
            light: FULLBRIGHT_LIGHT,
        });
    }

    material.framed_animation = detect_animation_frame(stem, extension, listing, config);

    material
}

/// Split `file_name` into stem and recognized extension. A name without the
/// recognized extension keeps its full text as the stem.
fn split_extension<'a>(file_name: &'a str, extension: &'a str) -> (&'a str, &'a str) {
    match file_name.strip_suffix(extension) {
        Some(stem) => (stem, extension),
        None => (file_name, ""),
    }
}

/// Detect a `+<digit>` animation-frame prefix and chain the frame to its
/// successor, wrapping around to frame zero when the successor file is
/// missing.
fn detect_animation_frame(
    stem: &str,
    extension: &str,
    listing: &DirectoryListing,
    config: &ExportConfig,
) -> Option<FramedAnimation> {
    let rest = stem.strip_prefix('+')?;
    let frame_digit = rest.chars().next().filter(char::is_ascii_digit)?;
    let frame_index = frame_digit.to_digit(10)?;
    let frame_base = &rest[frame_digit.len_utf8()..];

    let successor = format!("+{}{}", frame_index + 1, frame_base);
    let next_material_name = if listing.contains(&format!("{}{}", successor, extension)) {
        successor
    } else {
        // Terminal frame: close the animation loop.
        format!("+0{}", frame_base)
    };

    Some(FramedAnimation {
        duration: config.animation_frame_duration,
        next_material_name,
    })
}
