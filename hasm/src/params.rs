use clap::Parser;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParameterError {
    #[error("no input files")]
    NoInputFiles,

    #[error("'-o' can't be used with multiple input files")]
    OutputWithMultipleInputs,

    #[error("output name `{0}` is the same as an input name")]
    OutputMatchesInput(String),

    #[error(transparent)]
    Cli(#[from] clap::Error),
}

/// Two-pass assembler for the accumulator machine
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(version, about, long_about = None)]
pub struct HasmParameters {
    /// Assembly source files, one module each
    pub filenames: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short = 'o', value_name = "FILE")]
    pub output_filename: Option<String>,

    /// Assemble only, don't link the modules
    #[arg(short = 'c')]
    pub assemble_only: bool,

    /// Write the symbol tables as JSON
    #[arg(long)]
    pub json: bool,
}

impl HasmParameters {
    /// Parse and validate command line arguments, program name first.
    pub fn from_args<I, T>(args: I) -> Result<Self, ParameterError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let params = Self::try_parse_from(args)?;
        params.validate()?;
        Ok(params)
    }

    fn validate(&self) -> Result<(), ParameterError> {
        if self.filenames.is_empty() {
            return Err(ParameterError::NoInputFiles);
        }

        if let Some(ref output) = self.output_filename {
            if self.filenames.len() > 1 {
                return Err(ParameterError::OutputWithMultipleInputs);
            }
            if self.filenames.contains(output) {
                return Err(ParameterError::OutputMatchesInput(output.clone()));
            }
        }

        Ok(())
    }
}
