//! Material descriptor data model
//!
//! Serializable records describing how a texture should be rendered:
//! diffuse map, surface effects, emissive overlay and frame animation.
//! The engine consumes these as a single JSON object mapping material
//! name to descriptor.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Aggregate mapping from material name to its descriptor.
///
/// Backed by a `BTreeMap` so serialization order is stable and repeated
/// exports of an unchanged directory produce byte-identical output.
pub type MaterialSet = BTreeMap<String, Material>;

/// Rendering properties derived for one base texture name.
///
/// Every field except `diffuse` is optional; absent fields are omitted from
/// the serialized form entirely, never written as `null`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Material {
    /// Diffuse texture file name.
    pub diffuse: String,

    /// Procedural surface-distortion effect for water/lava-like surfaces.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_effect: Option<SpecialEffect>,

    /// 0.0 - mirror-like, 1.0 - fully matte. Emitted only for liquid
    /// surfaces, which need high reflectivity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roughness: Option<f32>,

    /// How the surface is blended over the scene behind it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blending_mode: Option<BlendingMode>,

    /// Whether polygons with this material occlude visibility.
    /// Emitted as `false` for liquid surfaces so view-dependent effects
    /// behind them (underwater tinting) stay visible.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blocks_view: Option<bool>,

    /// Self-illuminated overlay, present when a fullbright companion
    /// texture exists next to the diffuse one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emissive_layer: Option<EmissiveLayer>,

    /// Link to the next frame of a cyclic texture animation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub framed_animation: Option<FramedAnimation>,
}

impl Material {
    /// Minimal descriptor with only a diffuse map attached.
    pub fn new(diffuse: impl Into<String>) -> Self {
        Self {
            diffuse: diffuse.into(),
            special_effect: None,
            roughness: None,
            blending_mode: None,
            blocks_view: None,
            emissive_layer: None,
            framed_animation: None,
        }
    }
}

/// Surface special effect, tagged by variant name in the serialized form.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub enum SpecialEffect {
    /// Sinusoidal texture-coordinate turbulence.
    Turb(TurbulenceParams),
}

/// Parameters of the turbulence distortion.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct TurbulenceParams {
    /// Peak displacement, in texels.
    pub amplitude: f32,
    /// Length of one distortion wave, in texels.
    pub wave_length: f32,
    /// Wave cycles per second.
    pub frequency: f32,
}

impl Default for TurbulenceParams {
    fn default() -> Self {
        Self {
            amplitude: 4.0,
            wave_length: 64.0,
            frequency: 0.1875,
        }
    }
}

/// Blending applied when drawing the surface.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlendingMode {
    /// Average of source and destination colors.
    Average,
}

/// Self-illuminated texture layer drawn on top of the diffuse map.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EmissiveLayer {
    /// Fullbright companion image file name.
    pub image: String,
    /// RGB scale applied to the layer's texels.
    pub light: [f32; 3],
}

/// One link of a cyclic frame-animation chain.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FramedAnimation {
    /// Seconds this frame stays on screen.
    pub duration: f32,
    /// Material shown once this frame's duration expires.
    pub next_material_name: String,
}
