use crate::core::builder::ManifestBuilder;
use crate::domain::model::Manifest;
use crate::domain::ports::{ConfigProvider, Storage};
use crate::utils::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct ScanOutcome {
    pub manifest: Manifest,
    /// Serialized manifest; `None` when nothing was found.
    pub json: Option<String>,
}

/// Drives a whole scan and prints the operator-facing summary.
pub struct ScanEngine<S: Storage, C: ConfigProvider> {
    builder: ManifestBuilder<S, C>,
}

impl<S: Storage, C: ConfigProvider> ScanEngine<S, C> {
    pub fn new(builder: ManifestBuilder<S, C>) -> Self {
        Self { builder }
    }

    pub fn builder(&self) -> &ManifestBuilder<S, C> {
        &self.builder
    }

    /// Scans `root`, and when anything was found serializes the manifest and
    /// writes it to `output` (if given). An empty scan writes nothing.
    pub fn run(&self, root: &Path, output: Option<&Path>) -> Result<ScanOutcome> {
        println!("Parsing actions in directory: {}", root.display());

        let manifest = self.builder.scan(root);

        if manifest.is_empty() {
            println!("No actions found");
            return Ok(ScanOutcome {
                manifest,
                json: None,
            });
        }

        let json = self.builder.generate_json(&manifest, output)?;

        println!("Found {} actions:", manifest.count());
        for action in manifest.actions() {
            println!(
                "  - {}: {} inputs, {} outputs",
                action.name,
                action.inputs.len(),
                action.outputs.len()
            );
        }

        Ok(ScanOutcome {
            manifest,
            json: Some(json),
        })
    }
}
