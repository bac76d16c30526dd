use std::fs;

use anyhow::{Context, Result};
use libhasm::{link, Keywords, TwoPassAssembler};
use log::info;

pub use params::{HasmParameters, ParameterError};

pub mod input;
pub mod params;
pub mod report;

/// Assemble the files named in `params` and write out their symbol tables.
///
/// # Errors
///
/// If a source file can't be read, the modules don't link, or the output
/// can't be written.
pub fn run(params: &HasmParameters) -> Result<()> {
    let mut job = input::read_files(&params.filenames)?;

    // Duplicate definitions are logged by the zeroth pass itself.
    TwoPassAssembler::new(Keywords).run(&mut job);

    let globals = if params.assemble_only {
        None
    } else {
        Some(link(job.modules()).context("linking")?)
    };

    let rendered = if params.json {
        report::render_json(&job, globals.as_ref())?
    } else {
        report::render_text(&job, globals.as_ref())?
    };

    match params.output_filename {
        Some(ref output) => {
            info!("writing {}", output);
            fs::write(output, rendered).with_context(|| format!("writing {}", output))?;
        }
        None => print!("{}", rendered),
    }

    Ok(())
}
