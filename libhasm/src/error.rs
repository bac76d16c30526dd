use thiserror::Error;

/// Problems found in a single module. Recorded on the module, never fatal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SymbolError {
    #[error("symbol `{symbol}` redefined at {line}:{offset} (first defined at {first_line}:{first_offset})")]
    DuplicateDefinition {
        symbol: String,
        line: usize,
        offset: usize,
        first_line: usize,
        first_offset: usize,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LinkError {
    #[error("symbol `{symbol}` is defined in both `{first}` and `{second}`")]
    MultiplyDefined {
        symbol: String,
        first: String,
        second: String,
    },

    #[error("undefined symbol `{symbol}` used in `{module}` at {line}:{offset}")]
    Undefined {
        symbol: String,
        module: String,
        line: usize,
        offset: usize,
    },
}
