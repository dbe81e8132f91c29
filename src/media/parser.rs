//! Recursive-descent parser for media query selectors.
//!
//! The grammar is a small subset of CSS Media Queries Level 3:
//!
//! ```text
//! query-list = query ("," query)*
//! query      = [modifier] type ("and" feature)*
//!            | [modifier] feature ("and" feature)*
//! modifier   = "not" | "only"
//! type       = identifier
//! feature    = "(" identifier [":" value] ")"
//! ```

use crate::media::query::{MediaFeature, MediaModifier, MediaQuery, MediaType};
use crate::media::ParseError;

/// Cursor over a selector string.
pub(crate) struct QueryParser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> QueryParser<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Parses a single query, stopping at a comma or end of input.
    pub(crate) fn parse_query(&mut self) -> Result<MediaQuery, ParseError> {
        self.skip_whitespace();
        if self.is_eof() {
            return Err(ParseError::EmptyQuery);
        }

        let mut modifier = None;
        if let Some(word) = self.peek_ident() {
            if let Some(parsed) = MediaModifier::parse(&word) {
                modifier = Some(parsed);
                self.pos += word.len();
                self.skip_whitespace();
            }
        }

        let mut media_type = None;
        if let Some(word) = self.peek_ident() {
            media_type = Some(MediaType::parse(&word));
            self.pos += word.len();
            self.skip_whitespace();
        }

        let mut features = Vec::new();
        if media_type.is_none() {
            // With no type the query must start with a feature.
            if self.peek() != Some('(') {
                return Err(ParseError::EmptyQuery);
            }
            features.push(self.parse_feature()?);
            self.skip_whitespace();
        }

        loop {
            match self.peek_ident() {
                Some(word) if word.eq_ignore_ascii_case("and") => {
                    self.pos += word.len();
                    self.skip_whitespace();
                }
                _ => break,
            }
            if self.peek() != Some('(') {
                return Err(ParseError::ExpectedOpenParen);
            }
            features.push(self.parse_feature()?);
            self.skip_whitespace();
        }

        Ok(MediaQuery {
            modifier,
            media_type,
            features,
        })
    }

    /// Parses a comma-separated query list.
    pub(crate) fn parse_query_list(&mut self) -> Result<Vec<MediaQuery>, ParseError> {
        let mut queries = vec![self.parse_query()?];
        loop {
            self.skip_whitespace();
            if self.peek() != Some(',') {
                break;
            }
            self.advance();
            queries.push(self.parse_query()?);
        }
        Ok(queries)
    }

    /// Fails unless all input has been consumed.
    pub(crate) fn expect_eof(&mut self) -> Result<(), ParseError> {
        self.skip_whitespace();
        if self.is_eof() {
            return Ok(());
        }
        let rest = &self.input[self.pos..];
        let token = rest.split_whitespace().next().unwrap_or(rest);
        Err(ParseError::UnexpectedToken(token.to_string()))
    }

    /// Parses `"(" name [":" value] ")"`.
    fn parse_feature(&mut self) -> Result<MediaFeature, ParseError> {
        self.advance(); // consume '('
        self.skip_whitespace();

        let name = match self.peek_ident() {
            Some(name) => {
                self.pos += name.len();
                name
            }
            None => return Err(ParseError::ExpectedFeatureName),
        };
        self.skip_whitespace();

        let mut value = None;
        if self.peek() == Some(':') {
            self.advance();
            let start = self.pos;
            while let Some(c) = self.peek() {
                if c == ')' {
                    break;
                }
                self.advance();
            }
            value = Some(self.input[start..self.pos].trim());
        }

        if self.peek() != Some(')') {
            return Err(ParseError::ExpectedCloseParen);
        }
        self.advance();

        MediaFeature::parse(&name, value)
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.advance();
        }
    }

    /// Reads an identifier (letters, digits, `-`, `_`) without consuming it.
    fn peek_ident(&self) -> Option<String> {
        let rest = &self.input[self.pos..];
        let mut end = 0;
        for (i, c) in rest.char_indices() {
            let valid = if i == 0 {
                c.is_alphabetic() || c == '_'
            } else {
                c.is_alphanumeric() || c == '-' || c == '_'
            };
            if !valid {
                break;
            }
            end = i + c.len_utf8();
        }
        if end == 0 {
            None
        } else {
            Some(rest[..end].to_string())
        }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
        }
    }

    fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }
}
