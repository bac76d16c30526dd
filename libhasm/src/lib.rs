pub use assembler::TwoPassAssembler;
pub use error::{LinkError, SymbolError};
pub use keywords::{InstructionTable, Keyword, Keywords, WordList};
pub use linker::{link, GlobalDefinition, GlobalSymbols};
pub use module::{AssemblyJob, ModuleSource};
pub use pass_zero::ZerothPass;
pub use relocation::AddressTable;
pub use scanner::{next_token, tokens, Token, TokenKind, Tokens};
pub use tables::{DefinitionEntry, DefinitionTable, UsageEntry, UsageTable};

pub mod assembler;
pub mod constants;
pub mod error;
pub mod keywords;
pub mod linker;
pub mod module;
pub mod pass_zero;
pub mod relocation;
pub mod scanner;
pub mod tables;

/// Build a job from `(name, text)` pairs and scan every module with the
/// default keyword table.
pub fn scan_modules<I, N, T>(sources: I) -> AssemblyJob
where
    I: IntoIterator<Item = (N, T)>,
    N: Into<String>,
    T: AsRef<str>,
{
    let mut job = sources
        .into_iter()
        .map(|(name, text)| ModuleSource::new(name, text.as_ref()))
        .collect::<AssemblyJob>();

    TwoPassAssembler::new(Keywords).run(&mut job);

    job
}
