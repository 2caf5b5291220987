//! Parser and evaluator for the listing query grammar.
//!
//! Covers the subset the [`QueryBuilder`](super::QueryBuilder) emits:
//! `trashed = <bool>`, `"me" in owners`, `"<id>" in parents`,
//! `mimeType = / != "<type>"`, `title = / != "<text>"`, joined with `and` /
//! `or` and grouped with parentheses. `and` binds tighter than `or`.

use drivelinks_core::error::AppError;
use drivelinks_core::types::FolderId;
use drivelinks_entity::item::Item;

/// A compiled query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// All terms hold.
    And(Vec<Predicate>),
    /// Any term holds.
    Or(Vec<Predicate>),
    /// The trashed label equals the value.
    Trashed(bool),
    /// MIME type comparison.
    MimeType {
        /// Compared value.
        value: String,
        /// `!=` instead of `=`.
        negated: bool,
    },
    /// Title comparison.
    Title {
        /// Compared value.
        value: String,
        /// `!=` instead of `=`.
        negated: bool,
    },
    /// Owned by the current principal.
    OwnedByMe,
    /// Directly inside the folder.
    InParents(FolderId),
}

impl Predicate {
    /// Parse a query string.
    pub fn parse(query: &str) -> Result<Self, AppError> {
        let tokens = tokenize(query)?;
        let mut parser = Parser { tokens, pos: 0 };
        let predicate = parser.parse_or()?;
        if let Some(token) = parser.peek() {
            return Err(AppError::validation(format!(
                "Unexpected {token:?} in query '{query}'"
            )));
        }
        Ok(predicate)
    }

    /// Whether the item satisfies the predicate.
    pub fn matches(&self, item: &Item) -> bool {
        match self {
            Self::And(terms) => terms.iter().all(|t| t.matches(item)),
            Self::Or(terms) => terms.iter().any(|t| t.matches(item)),
            Self::Trashed(value) => item.labels.trashed == *value,
            Self::MimeType { value, negated } => {
                (item.mime_type.as_deref() == Some(value.as_str())) != *negated
            }
            Self::Title { value, negated } => (item.title() == value.as_str()) != *negated,
            Self::OwnedByMe => item.owned_by_me,
            Self::InParents(id) => item.parents.iter().any(|p| p.id == *id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Open,
    Close,
    Eq,
    Ne,
    Word(String),
    Quoted(String),
}

fn tokenize(query: &str) -> Result<Vec<Token>, AppError> {
    let mut tokens = Vec::new();
    let mut chars = query.chars().peekable();

    while let Some(&c) = chars.peek() {
        match c {
            c if c.is_whitespace() => {
                chars.next();
            }
            '(' => {
                chars.next();
                tokens.push(Token::Open);
            }
            ')' => {
                chars.next();
                tokens.push(Token::Close);
            }
            '=' => {
                chars.next();
                tokens.push(Token::Eq);
            }
            '!' => {
                chars.next();
                if chars.next() != Some('=') {
                    return Err(AppError::validation("Expected '=' after '!' in query"));
                }
                tokens.push(Token::Ne);
            }
            '"' | '\'' => {
                let quote = c;
                chars.next();
                let mut value = String::new();
                loop {
                    match chars.next() {
                        Some('\\') => match chars.next() {
                            Some(escaped) => value.push(escaped),
                            None => break,
                        },
                        Some(ch) if ch == quote => {
                            tokens.push(Token::Quoted(value));
                            break;
                        }
                        Some(ch) => value.push(ch),
                        None => {
                            return Err(AppError::validation(format!(
                                "Unterminated string in query '{query}'"
                            )));
                        }
                    }
                }
            }
            _ => {
                let mut word = String::new();
                while let Some(&ch) = chars.peek() {
                    if ch.is_whitespace() || matches!(ch, '(' | ')' | '=' | '!' | '"' | '\'') {
                        break;
                    }
                    word.push(ch);
                    chars.next();
                }
                tokens.push(Token::Word(word));
            }
        }
    }

    Ok(tokens)
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        self.pos += 1;
        token
    }

    fn eat_keyword(&mut self, keyword: &str) -> bool {
        match self.peek() {
            Some(Token::Word(w)) if w.eq_ignore_ascii_case(keyword) => {
                self.pos += 1;
                true
            }
            _ => false,
        }
    }

    fn parse_or(&mut self) -> Result<Predicate, AppError> {
        let mut terms = vec![self.parse_and()?];
        while self.eat_keyword("or") {
            terms.push(self.parse_and()?);
        }
        Ok(if terms.len() == 1 {
            terms.remove(0)
        } else {
            Predicate::Or(terms)
        })
    }

    fn parse_and(&mut self) -> Result<Predicate, AppError> {
        let mut terms = vec![self.parse_atom()?];
        while self.eat_keyword("and") {
            terms.push(self.parse_atom()?);
        }
        Ok(if terms.len() == 1 {
            terms.remove(0)
        } else {
            Predicate::And(terms)
        })
    }

    fn parse_atom(&mut self) -> Result<Predicate, AppError> {
        match self.next() {
            Some(Token::Open) => {
                let inner = self.parse_or()?;
                match self.next() {
                    Some(Token::Close) => Ok(inner),
                    other => Err(AppError::validation(format!(
                        "Expected ')' in query, found {other:?}"
                    ))),
                }
            }
            Some(Token::Quoted(value)) => {
                if !self.eat_keyword("in") {
                    return Err(AppError::validation(format!(
                        "Expected 'in' after \"{value}\""
                    )));
                }
                match self.next() {
                    Some(Token::Word(field)) if field == "parents" => {
                        Ok(Predicate::InParents(FolderId::new(value)))
                    }
                    Some(Token::Word(field)) if field == "owners" && value == "me" => {
                        Ok(Predicate::OwnedByMe)
                    }
                    other => Err(AppError::validation(format!(
                        "Unsupported membership test \"{value}\" in {other:?}"
                    ))),
                }
            }
            Some(Token::Word(field)) => {
                let negated = match self.next() {
                    Some(Token::Eq) => false,
                    Some(Token::Ne) => true,
                    other => {
                        return Err(AppError::validation(format!(
                            "Expected comparison after '{field}', found {other:?}"
                        )));
                    }
                };
                let value = match self.next() {
                    Some(Token::Quoted(v)) | Some(Token::Word(v)) => v,
                    other => {
                        return Err(AppError::validation(format!(
                            "Expected value after '{field}', found {other:?}"
                        )));
                    }
                };
                compare(&field, value, negated)
            }
            other => Err(AppError::validation(format!(
                "Unexpected {other:?} in query"
            ))),
        }
    }
}

fn compare(field: &str, value: String, negated: bool) -> Result<Predicate, AppError> {
    match field {
        "trashed" => {
            let flag = match value.as_str() {
                "true" => true,
                "false" => false,
                _ => {
                    return Err(AppError::validation(format!(
                        "trashed expects true or false, got '{value}'"
                    )));
                }
            };
            Ok(Predicate::Trashed(flag != negated))
        }
        "mimeType" => Ok(Predicate::MimeType { value, negated }),
        "title" => Ok(Predicate::Title { value, negated }),
        _ => Err(AppError::validation(format!(
            "Unsupported query field '{field}'"
        ))),
    }
}
