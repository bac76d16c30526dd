use std::str::FromStr;

use indexmap::IndexSet;
use strum::{EnumString, IntoStaticStr};
use strum_macros::EnumIter;

/// Decides which words on a line are instruction names rather than symbols.
pub trait InstructionTable {
    fn is_mnemonic(&self, word: &str) -> bool;

    /// Words that may appear as operands without naming a symbol.
    fn is_reserved(&self, _word: &str) -> bool {
        false
    }

    /// Mnemonics whose label names a symbol defined by another module.
    fn is_extern(&self, _mnemonic: &str) -> bool {
        false
    }
}

impl<F> InstructionTable for F
where
    F: Fn(&str) -> bool,
{
    fn is_mnemonic(&self, word: &str) -> bool {
        self(word)
    }
}

#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, EnumIter, IntoStaticStr)]
#[strum(ascii_case_insensitive)]
pub enum Keyword {
    ADD,
    SUB,
    MULT,
    DIV,
    JMP,
    JMPN,
    JMPP,
    JMPZ,
    COPY,
    LOAD,
    STORE,
    INPUT,
    OUTPUT,
    STOP,

    SECTION,
    SPACE,
    CONST,
    EQU,
    IF,
    BEGIN,
    END,
    EXTERN,
    PUBLIC,
}

impl Keyword {
    pub fn is_directive(&self) -> bool {
        matches!(
            self,
            Keyword::SECTION
                | Keyword::SPACE
                | Keyword::CONST
                | Keyword::EQU
                | Keyword::IF
                | Keyword::BEGIN
                | Keyword::END
                | Keyword::EXTERN
                | Keyword::PUBLIC
        )
    }

    pub fn name(&self) -> &'static str {
        (*self).into()
    }
}

#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(ascii_case_insensitive)]
enum SectionName {
    TEXT,
    DATA,
}

/// Mnemonics and directives of the accumulator machine.
#[derive(Debug, Clone, Copy, Default)]
pub struct Keywords;

impl InstructionTable for Keywords {
    fn is_mnemonic(&self, word: &str) -> bool {
        Keyword::from_str(word).is_ok()
    }

    fn is_reserved(&self, word: &str) -> bool {
        SectionName::from_str(word).is_ok()
    }

    fn is_extern(&self, mnemonic: &str) -> bool {
        matches!(Keyword::from_str(mnemonic), Ok(Keyword::EXTERN))
    }
}

/// A table built from an arbitrary word list. Matching ignores ASCII case.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    mnemonics: IndexSet<String>,
    reserved: IndexSet<String>,
}

impl WordList {
    pub fn new<I, S>(mnemonics: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            mnemonics: mnemonics
                .into_iter()
                .map(|m| m.as_ref().to_ascii_lowercase())
                .collect(),
            reserved: IndexSet::new(),
        }
    }

    pub fn with_reserved<I, S>(mut self, reserved: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.reserved
            .extend(reserved.into_iter().map(|r| r.as_ref().to_ascii_lowercase()));
        self
    }
}

impl InstructionTable for WordList {
    fn is_mnemonic(&self, word: &str) -> bool {
        self.mnemonics.contains(&word.to_ascii_lowercase())
    }

    fn is_reserved(&self, word: &str) -> bool {
        self.reserved.contains(&word.to_ascii_lowercase())
    }
}
