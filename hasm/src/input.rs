use std::fs;

use anyhow::{Context, Result};
use libhasm::{AssemblyJob, ModuleSource};
use log::debug;

/// Read every source file into a module, in the order given.
pub fn read_files(filenames: &[String]) -> Result<AssemblyJob> {
    filenames
        .iter()
        .map(|filename| -> Result<ModuleSource> {
            let text = fs::read_to_string(filename)
                .with_context(|| format!("reading {}", filename))?;
            debug!("read {} ({} bytes)", filename, text.len());
            Ok(ModuleSource::new(filename.clone(), &text))
        })
        .collect()
}
