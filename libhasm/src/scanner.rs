//! Line scanner.
//!
//! Splits one source line into positioned tokens. Scanning is restartable:
//! feeding `token.end()` back into [`next_token`] visits the rest of the line,
//! so callers can classify tokens as they go without re-scanning from the
//! start of the line.

const COMMENT: u8 = b';';
const LABEL_TERMINATOR: u8 = b':';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A run of non-delimiter characters. Commas belong to the word.
    Word,
    /// The `:` label terminator, always a token of its own.
    Separator,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub offset: usize,
    pub kind: TokenKind,
}

impl<'a> Token<'a> {
    /// Offset just past the token, where the next scan should start.
    pub fn end(&self) -> usize {
        self.offset + self.text.len()
    }

    pub fn is_separator(&self) -> bool {
        self.kind == TokenKind::Separator
    }
}

fn is_delimiter(b: u8) -> bool {
    b == b' ' || b == b'\t'
}

fn ends_word(b: u8) -> bool {
    is_delimiter(b) || b == LABEL_TERMINATOR || b == COMMENT
}

/// Find the next token at or after `start`.
///
/// Returns `None` when only delimiters or a comment remain on the line.
pub fn next_token(start: usize, line: &str) -> Option<Token<'_>> {
    let bytes = line.as_bytes();
    let comment = bytes
        .iter()
        .position(|&b| b == COMMENT)
        .unwrap_or(bytes.len());
    let mut pos = start;
    while pos < bytes.len() && !line.is_char_boundary(pos) {
        pos += 1;
    }

    while pos < bytes.len() && is_delimiter(bytes[pos]) {
        pos += 1;
    }

    if pos >= comment {
        return None;
    }

    match bytes[pos] {
        LABEL_TERMINATOR => Some(Token {
            text: &line[pos..pos + 1],
            offset: pos,
            kind: TokenKind::Separator,
        }),
        _ => {
            let len = bytes[pos..]
                .iter()
                .position(|&b| ends_word(b))
                .unwrap_or(bytes.len() - pos);
            Some(Token {
                text: &line[pos..pos + len],
                offset: pos,
                kind: TokenKind::Word,
            })
        }
    }
}

/// Iterator over every token of a line, left to right.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    line: &'a str,
    pos: usize,
    done: bool,
}

impl<'a> Tokens<'a> {
    /// Resume scanning `line` from `pos`.
    pub fn starting_at(line: &'a str, pos: usize) -> Self {
        Self {
            line,
            pos,
            done: false,
        }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match next_token(self.pos, self.line) {
            Some(token) => {
                self.pos = token.end();
                Some(token)
            }
            None => {
                self.done = true;
                None
            }
        }
    }
}

pub fn tokens(line: &str) -> Tokens<'_> {
    Tokens::starting_at(line, 0)
}
