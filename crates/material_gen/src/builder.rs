//! Material set builder
//!
//! Scans a directory of texture files, runs the naming classifier on every
//! entry with the recognized extension and aggregates the descriptors into
//! a material set. The set is written as a single JSON object, built fully
//! in memory first so a failure never leaves a truncated file behind.

use std::fs;
use std::path::Path;

use serde::Serialize;
use thiserror::Error;

use crate::classifier::classify;
use crate::config::ExportConfig;
use crate::descriptor::MaterialSet;
use crate::listing::{self, DirectoryListing};

/// Errors produced while building or writing a material set.
#[derive(Error, Debug)]
pub enum ExportError {
    /// IO error while scanning the input or writing the output
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Material set serialization failure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Builds a material set from a directory of texture files.
pub struct MaterialSetBuilder {
    config: ExportConfig,
    name_prefix: String,
}

impl MaterialSetBuilder {
    /// Create a builder using the given conventions and no name prefix.
    pub fn new(config: ExportConfig) -> Self {
        Self {
            config,
            name_prefix: String::new(),
        }
    }

    /// Prepend `prefix` to every emitted material name, e.g. `"textures/"`.
    #[must_use]
    pub fn with_name_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.name_prefix = prefix.into();
        self
    }

    /// Build a material set from the files of `dir` itself, ignoring
    /// subdirectories. Material names are the file stems.
    ///
    /// # Errors
    /// Fails if the input directory is missing or unreadable.
    pub fn build(&self, dir: &Path) -> Result<MaterialSet, ExportError> {
        let mut materials = MaterialSet::new();
        self.build_directory(dir, "", false, &mut materials)?;
        Ok(materials)
    }

    /// Build a material set from `dir` and all of its subdirectories.
    /// Material names are `/`-separated directory-relative paths without
    /// the extension; descriptor references are qualified the same way.
    ///
    /// # Errors
    /// Fails if the input directory or any subdirectory is unreadable.
    pub fn build_recursive(&self, dir: &Path) -> Result<MaterialSet, ExportError> {
        let mut materials = MaterialSet::new();
        self.build_directory(dir, "", true, &mut materials)?;
        Ok(materials)
    }

    fn build_directory(
        &self,
        dir: &Path,
        relative_dir: &str,
        recursive: bool,
        out_materials: &mut MaterialSet,
    ) -> Result<(), ExportError> {
        let directory_listing = DirectoryListing::read_dir(dir)?;
        log::debug!(
            "Scanning {:?}: {} file(s)",
            dir,
            directory_listing.len()
        );

        for file_name in directory_listing.names() {
            let stem = match file_name.strip_suffix(&self.config.texture_extension) {
                Some(stem) => stem,
                None => continue,
            };

            let mut material = classify(file_name, &directory_listing, &self.config);

            let material_name = self.qualify(relative_dir, stem);
            if !relative_dir.is_empty() {
                // Texture paths inside the descriptor are relative to the
                // scan root, like the material name itself.
                material.diffuse = format!("{}/{}", relative_dir, material.diffuse);
                if let Some(ref mut layer) = material.emissive_layer {
                    layer.image = format!("{}/{}", relative_dir, layer.image);
                }
            }
            if let Some(ref mut animation) = material.framed_animation {
                // Frames are siblings, so the link lives in the same
                // directory as this material.
                animation.next_material_name =
                    self.qualify(relative_dir, &animation.next_material_name);
            }

            if out_materials.contains_key(&material_name) {
                log::warn!(
                    "Duplicate material name {}, keeping the last entry",
                    material_name
                );
            }
            out_materials.insert(material_name, material);
        }

        if recursive {
            for subdir in listing::subdirectories(dir)? {
                let dir_name = match subdir.file_name().and_then(|n| n.to_str()) {
                    Some(name) => name.to_string(),
                    None => {
                        log::warn!("Skipping subdirectory with non-UTF-8 name: {:?}", subdir);
                        continue;
                    },
                };
                let child_relative = if relative_dir.is_empty() {
                    dir_name
                } else {
                    format!("{}/{}", relative_dir, dir_name)
                };
                self.build_directory(&subdir, &child_relative, true, out_materials)?;
            }
        }

        Ok(())
    }

    /// Material name for a stem found under `relative_dir`.
    fn qualify(&self, relative_dir: &str, stem: &str) -> String {
        if relative_dir.is_empty() {
            format!("{}{}", self.name_prefix, stem)
        } else {
            format!("{}{}/{}", self.name_prefix, relative_dir, stem)
        }
    }
}

/// Serialize `materials` as a JSON object with 1-tab indentation, the
/// format the engine's material loader expects.
///
/// # Errors
/// Returns the underlying error if serialization fails.
pub fn material_set_to_json(materials: &MaterialSet) -> Result<Vec<u8>, ExportError> {
    let mut buffer = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"\t");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    materials.serialize(&mut serializer)?;
    Ok(buffer)
}

/// Write `materials` to `path` as indented JSON.
///
/// The document is serialized in memory first and written with a single
/// call, so an aborted export does not leave a truncated artifact.
///
/// # Errors
/// Fails if serialization fails or the output file cannot be written.
pub fn write_material_set(materials: &MaterialSet, path: &Path) -> Result<(), ExportError> {
    let json = material_set_to_json(materials)?;
    fs::write(path, json)?;
    log::info!("Wrote {} material(s) to {:?}", materials.len(), path);
    Ok(())
}

/// Read a material set back from a JSON file, as the engine does when
/// loading materials.
///
/// # Errors
/// Fails if the file is missing, unreadable or not a valid material set.
pub fn read_material_set(path: &Path) -> Result<MaterialSet, ExportError> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}
