//! Todo document model
//!
//! An ordered sequence of instructions, executed top to bottom. Owns the
//! whole-text parse and render plus the structural edits an editing
//! surface needs (insert, remove-by-predicate, move-range).

use std::fs;
use std::io;
use std::ops::Range;
use std::path::Path;

use super::RebaseInstruction;
use crate::todo::parse_line;

/// Fallback reference width when a document has no references to measure.
const DEFAULT_REFERENCE_LEN: usize = 7;

/// A parsed git-rebase-todo file.
///
/// Comment and blank lines are not preserved: parsing keeps only the
/// instruction lines, and rendering emits exactly one line per
/// instruction. Edit indices are the caller's responsibility; passing an
/// out-of-range index or an overlapping move target is a contract
/// violation and panics.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TodoDocument {
    instructions: Vec<RebaseInstruction>,
}

impl TodoDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document from an existing instruction sequence.
    pub fn from_instructions(instructions: Vec<RebaseInstruction>) -> Self {
        Self { instructions }
    }

    /// Parse todo text into a document.
    ///
    /// Splits on newlines and keeps every line the grammar recognizes, in
    /// order. Blank lines, comments, and unrecognized lines are skipped.
    pub fn parse(text: &str) -> Self {
        Self {
            instructions: text.lines().filter_map(parse_line).collect(),
        }
    }

    /// Read and parse a todo file.
    pub fn load(path: impl AsRef<Path>) -> io::Result<Self> {
        Ok(Self::parse(&fs::read_to_string(path)?))
    }

    /// Render the document back to todo text, one line per instruction,
    /// joined with `"\n"` and no trailing newline.
    pub fn render(&self) -> String {
        let lines: Vec<String> = self
            .instructions
            .iter()
            .map(RebaseInstruction::to_string)
            .collect();
        lines.join("\n")
    }

    /// Render and write the document to a file, with a trailing newline.
    pub fn save(&self, path: impl AsRef<Path>) -> io::Result<()> {
        let mut text = self.render();
        text.push('\n');
        fs::write(path, text)
    }

    /// The instructions, in execution order.
    pub fn instructions(&self) -> &[RebaseInstruction] {
        &self.instructions
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Insert an instruction at `index`, shifting everything after it.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    pub fn insert(&mut self, index: usize, instruction: RebaseInstruction) {
        self.instructions.insert(index, instruction);
    }

    /// Remove every instruction matching the predicate, preserving the
    /// order of the rest.
    pub fn remove_where(&mut self, mut predicate: impl FnMut(&RebaseInstruction) -> bool) {
        self.instructions.retain(|instruction| !predicate(instruction));
    }

    /// Move the instructions in `range` so the block starts where `to`
    /// pointed before the move. Both positions are indices into the
    /// pre-move ordering; `to` may equal `len()` to move the block to
    /// the end.
    ///
    /// # Panics
    ///
    /// Panics if the range is out of bounds, `to > len()`, or `to` falls
    /// strictly inside `range`.
    pub fn move_range(&mut self, range: Range<usize>, to: usize) {
        assert!(range.end <= self.instructions.len(), "move range out of bounds");
        assert!(to <= self.instructions.len(), "move target out of bounds");
        assert!(
            to <= range.start || to >= range.end,
            "move target inside moved range"
        );

        let block: Vec<RebaseInstruction> = self.instructions.drain(range.clone()).collect();
        let insert_at = if to <= range.start {
            to
        } else {
            to - block.len()
        };
        self.instructions.splice(insert_at..insert_at, block);
    }

    /// Widest reference across the basic instructions, for display layers
    /// that right-align or pad hashes. Defaults to 7 (git's usual short
    /// hash width) when no instruction carries a reference.
    pub fn max_reference_len(&self) -> usize {
        self.instructions
            .iter()
            .filter_map(|instruction| instruction.reference())
            .map(str::len)
            .max()
            .unwrap_or(DEFAULT_REFERENCE_LEN)
    }
}
