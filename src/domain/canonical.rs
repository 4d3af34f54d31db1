//! Canonical text: an order-independent serialization used for equivalence.
//!
//! Grammar:
//! - leaf circle: `C`
//! - circle with content: `C ` followed by its group
//! - empty group: `[ ]`, otherwise `[ ` members joined by `, ` then ` ]`
//!
//! Members are ordered by descending nesting depth, ties by ascending text.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use itertools::Itertools;

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::model::{CircleNode, ConfigurationSet};

pub const LEAF_TOKEN: char = 'C';
const OPEN: char = '[';
const CLOSE: char = ']';
const SEPARATOR: char = ',';

impl CircleNode {
    pub fn canonical_text(&self) -> String {
        match self.nested() {
            None => LEAF_TOKEN.to_string(),
            Some(group) => format!("{} {}", LEAF_TOKEN, group.canonical_text()),
        }
    }
}

impl ConfigurationSet {
    pub fn canonical_text(&self) -> String {
        if self.is_empty() {
            return format!("{} {}", OPEN, CLOSE);
        }
        let body = self
            .keyed_members()
            .into_iter()
            .map(|(_, _, text)| text)
            .join(", ");
        format!("{} {} {}", OPEN, body, CLOSE)
    }

    /// Members in canonical order, as rendered in the canonical text.
    pub fn sorted_members(&self) -> Vec<&CircleNode> {
        self.keyed_members()
            .into_iter()
            .map(|(member, _, _)| member)
            .collect()
    }

    /// Structural equivalence: identical canonical text.
    pub fn equivalent(&self, other: &ConfigurationSet) -> bool {
        self.canonical_text() == other.canonical_text()
    }

    fn keyed_members(&self) -> Vec<(&CircleNode, usize, String)> {
        self.members()
            .iter()
            .map(|m| (m, m.nesting(), m.canonical_text()))
            .sorted_by(|a, b| canonical_order((a.1, &a.2), (b.1, &b.2)))
            .collect()
    }
}

fn canonical_order(a: (usize, &String), b: (usize, &String)) -> Ordering {
    b.0.cmp(&a.0).then_with(|| a.1.cmp(b.1))
}

/// Free-standing form of [`ConfigurationSet::equivalent`].
pub fn equivalent(a: &ConfigurationSet, b: &ConfigurationSet) -> bool {
    a.equivalent(b)
}

impl fmt::Display for CircleNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical_text())
    }
}

impl fmt::Display for ConfigurationSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical_text())
    }
}

impl FromStr for ConfigurationSet {
    type Err = DomainError;

    /// Parse canonical (or any whitespace/order variant of) configuration text.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parser = Parser::new(s);
        let set = parser.group()?;
        parser.skip_whitespace();
        if let Some(c) = parser.peek() {
            return Err(DomainError::parse(
                parser.pos,
                format!("unexpected trailing '{}'", c),
            ));
        }
        Ok(set)
    }
}

struct Parser<'a> {
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    pos: usize,
    len: usize,
}

impl<'a> Parser<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            chars: text.char_indices().peekable(),
            pos: 0,
            len: text.len(),
        }
    }

    fn peek(&mut self) -> Option<char> {
        match self.chars.peek() {
            Some(&(i, c)) => {
                self.pos = i;
                Some(c)
            }
            None => {
                self.pos = self.len;
                None
            }
        }
    }

    fn bump(&mut self) {
        self.chars.next();
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.bump();
        }
    }

    fn expect(&mut self, expected: char) -> DomainResult<()> {
        self.skip_whitespace();
        match self.peek() {
            Some(c) if c == expected => {
                self.bump();
                Ok(())
            }
            Some(c) => Err(DomainError::parse(
                self.pos,
                format!("expected '{}', found '{}'", expected, c),
            )),
            None => Err(DomainError::parse(
                self.pos,
                format!("expected '{}', found end of input", expected),
            )),
        }
    }

    fn group(&mut self) -> DomainResult<ConfigurationSet> {
        self.expect(OPEN)?;
        self.skip_whitespace();
        let mut members = Vec::new();
        if self.peek() == Some(CLOSE) {
            self.bump();
            return Ok(ConfigurationSet::from_members(members));
        }
        loop {
            members.push(self.circle()?);
            self.skip_whitespace();
            match self.peek() {
                Some(SEPARATOR) => self.bump(),
                Some(CLOSE) => {
                    self.bump();
                    return Ok(ConfigurationSet::from_members(members));
                }
                Some(c) => {
                    return Err(DomainError::parse(
                        self.pos,
                        format!("expected ',' or ']', found '{}'", c),
                    ))
                }
                None => return Err(DomainError::parse(self.pos, "unterminated group")),
            }
        }
    }

    fn circle(&mut self) -> DomainResult<CircleNode> {
        self.expect(LEAF_TOKEN)?;
        self.skip_whitespace();
        if self.peek() != Some(OPEN) {
            return Ok(CircleNode::leaf());
        }
        let group = self.group()?;
        self.skip_whitespace();
        if self.peek() == Some(OPEN) {
            return Err(DomainError::parse(
                self.pos,
                "a circle holds at most one nested group",
            ));
        }
        Ok(CircleNode::with_nested(group))
    }
}
