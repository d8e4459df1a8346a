//! Grammar locations and the explicit parser state.
//!
//! A [`Location`] is a nesting context that decides which productions may match
//! next. The stack of locations and the attachment cursor together form the whole
//! mutable state of a parse; builders take a [`ParserState`] by value and hand back
//! the next one.

use serde::Serialize;
use std::fmt;

use super::common::ParseError;
use crate::chav::ast::NodeId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Location {
    Program,
    Function,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Program => f.write_str("program"),
            Location::Function => f.write_str("function body"),
        }
    }
}

/// `{ cursor, location stack }`. The stack always holds `Program` at the bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserState {
    /// Node new siblings are attached to.
    pub cursor: NodeId,
    locations: Vec<Location>,
}

impl ParserState {
    pub fn new(root: NodeId) -> Self {
        Self {
            cursor: root,
            locations: vec![Location::Program],
        }
    }

    /// Top of the location stack.
    pub fn location(&self) -> Location {
        self.locations.last().copied().unwrap_or(Location::Program)
    }

    /// Number of entries on the location stack, the residual `Program` included.
    pub fn depth(&self) -> usize {
        self.locations.len()
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Push `location` and move the cursor to `cursor`.
    pub fn enter(mut self, location: Location, cursor: NodeId) -> Self {
        self.locations.push(location);
        self.cursor = cursor;
        self
    }

    /// Pop the current location and move the cursor back to `cursor`.
    ///
    /// The residual `Program` entry is never popped.
    pub fn leave(mut self, cursor: NodeId) -> Result<Self, ParseError> {
        if self.locations.len() <= 1 {
            return Err(ParseError::internal(
                "location stack",
                "attempted to leave the program location",
            ));
        }
        self.locations.pop();
        self.cursor = cursor;
        Ok(self)
    }

    /// Succeeds only when the stack is back to exactly `[Program]`.
    pub fn finish(&self) -> Result<(), ParseError> {
        match self.locations.as_slice() {
            [Location::Program] => Ok(()),
            [] => Err(ParseError::internal("location stack", "stack is empty")),
            _ => Err(ParseError::UnterminatedBlock {
                location: self.location(),
                depth: self.locations.len() - 1,
            }),
        }
    }
}
