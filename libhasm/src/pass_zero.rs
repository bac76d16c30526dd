use log::{debug, trace, warn};

use crate::{
    constants::{is_literal, OPERAND_SEPARATORS},
    error::SymbolError,
    keywords::InstructionTable,
    module::ModuleSource,
    scanner::{next_token, Token, TokenKind, Tokens},
    tables::{DefinitionEntry, DefinitionTable, UsageEntry, UsageTable},
};

/// Symbol discovery over one module.
///
/// Walks every line in order and rebuilds the module's definition and usage
/// tables. Running it again over the same lines gives the same tables.
pub struct ZerothPass<'a> {
    module: &'a mut ModuleSource,
    table: &'a dyn InstructionTable,
}

impl<'a> ZerothPass<'a> {
    pub fn new(module: &'a mut ModuleSource, table: &'a dyn InstructionTable) -> Self {
        Self { module, table }
    }

    pub fn run(self) {
        let mut symbols = SymbolCollector::new(self.table);

        for (line_no, line) in self.module.lines().iter().enumerate() {
            symbols.scan_line(line_no, line);
        }

        for issue in &symbols.issues {
            warn!("{}: {}", self.module.name(), issue);
        }

        debug!(
            "{}: {} definitions, {} referenced symbols, {} issues",
            self.module.name(),
            symbols.definitions.len(),
            symbols.usages.len(),
            symbols.issues.len()
        );

        self.module.definitions = symbols.definitions;
        self.module.usages = symbols.usages;
        self.module.issues = symbols.issues;
    }
}

struct SymbolCollector<'t> {
    table: &'t dyn InstructionTable,
    definitions: DefinitionTable,
    usages: UsageTable,
    issues: Vec<SymbolError>,
}

impl<'t> SymbolCollector<'t> {
    fn new(table: &'t dyn InstructionTable) -> Self {
        Self {
            table,
            definitions: DefinitionTable::new(),
            usages: UsageTable::new(),
            issues: Vec::new(),
        }
    }

    fn scan_line(&mut self, line_no: usize, line: &str) {
        let Some(first) = next_token(0, line) else {
            return;
        };

        let (label, mut rest) = match first.kind {
            TokenKind::Separator => {
                debug!("line {}: label terminator without a label", line_no);
                (None, Tokens::starting_at(line, first.end()))
            }
            TokenKind::Word => match next_token(first.end(), line) {
                Some(colon) if colon.is_separator() => {
                    (Some(first), Tokens::starting_at(line, colon.end()))
                }
                _ => (None, Tokens::starting_at(line, first.offset)),
            },
        };

        let mut mnemonic = None;
        while let Some(token) = rest.next() {
            match token.kind {
                TokenKind::Separator => {
                    debug!("line {}: stray label terminator at {}", line_no, token.offset)
                }
                TokenKind::Word if mnemonic.is_none() && self.table.is_mnemonic(token.text) => {
                    trace!("line {}: mnemonic {}", line_no, token.text);
                    mnemonic = Some(token.text);
                }
                TokenKind::Word => {
                    // A quoted literal may hold blanks or a `;`, so it can span
                    // several scanner tokens.
                    let token = match open_quote(token.text) {
                        None => token,
                        Some(quote) => match line[token.end()..].find(quote) {
                            Some(at) => {
                                let end = token.end() + at + quote.len_utf8();
                                rest = Tokens::starting_at(line, end);
                                Token {
                                    text: &line[token.offset..end],
                                    offset: token.offset,
                                    kind: TokenKind::Word,
                                }
                            }
                            None => {
                                debug!(
                                    "line {}: unterminated quote at {}",
                                    line_no, token.offset
                                );
                                break;
                            }
                        },
                    };
                    self.operand(&token, line_no);
                }
            }
        }

        if let Some(label) = label {
            let external = mnemonic.is_some_and(|m| self.table.is_extern(m));
            self.define(&label, line_no, external);
        }
    }

    fn define(&mut self, label: &Token, line_no: usize, external: bool) {
        trace!("line {}: label {} at {}", line_no, label.text, label.offset);

        let entry = DefinitionEntry {
            symbol: label.text.to_owned(),
            line: line_no,
            offset: label.offset,
            external,
        };

        if let Err(first) = self.definitions.add(entry) {
            let issue = SymbolError::DuplicateDefinition {
                symbol: label.text.to_owned(),
                line: line_no,
                offset: label.offset,
                first_line: first.line,
                first_offset: first.offset,
            };
            self.issues.push(issue);
        }
    }

    fn operand(&mut self, token: &Token, line_no: usize) {
        if is_literal(token.text) {
            return;
        }

        for (at, piece) in operand_pieces(token.text) {
            if piece.is_empty() || is_literal(piece) || self.table.is_reserved(piece) {
                continue;
            }

            let offset = token.offset + at;
            trace!("line {}: usage {} at {}", line_no, piece, offset);
            self.usages.add(UsageEntry {
                symbol: piece.to_owned(),
                line: line_no,
                offset,
            });
        }
    }
}

fn is_quote(c: char) -> bool {
    c == '\'' || c == '"'
}

/// The quote character a word leaves open, if any.
fn open_quote(text: &str) -> Option<char> {
    text.chars().fold(None, |open, c| match open {
        None if is_quote(c) => Some(c),
        Some(q) if c == q => None,
        open => open,
    })
}

/// Split an operand list on the separators outside quotes. Each piece comes
/// with its offset inside `text`.
fn operand_pieces(text: &str) -> Vec<(usize, &str)> {
    let mut pieces = Vec::new();
    let mut start = 0;
    let mut quote = None;

    for (at, c) in text.char_indices() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None if is_quote(c) => quote = Some(c),
            None if OPERAND_SEPARATORS.contains(&c) => {
                pieces.push((start, &text[start..at]));
                start = at + c.len_utf8();
            }
            None => {}
        }
    }
    pieces.push((start, &text[start..]));

    pieces
}
