//! The closed subset of single-reference instructions
//!
//! Editing surfaces let the user flip a line between pick/reword/edit/
//! squash/fixup/drop while keeping its reference. `BasicKind` makes that
//! subset a type of its own so the transition is total instead of partial
//! over all instructions.

use super::{FixupMessage, RebaseInstruction};

/// A rebase instruction kind whose sole payload is one reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BasicKind {
    Pick,
    Reword,
    Edit,
    Squash,
    Fixup,
    Drop,
}

impl BasicKind {
    /// All basic kinds, in the order the format documents them.
    pub const ALL: [BasicKind; 6] = [
        BasicKind::Pick,
        BasicKind::Reword,
        BasicKind::Edit,
        BasicKind::Squash,
        BasicKind::Fixup,
        BasicKind::Drop,
    ];

    /// Build the instruction of this kind for the given reference.
    ///
    /// `message` only matters for [`BasicKind::Fixup`]; the other kinds
    /// ignore it, so callers converting an existing line can always pass
    /// their current (or default) mode through.
    pub fn instruction(self, reference: String, message: FixupMessage) -> RebaseInstruction {
        match self {
            BasicKind::Pick => RebaseInstruction::Pick { reference },
            BasicKind::Reword => RebaseInstruction::Reword { reference },
            BasicKind::Edit => RebaseInstruction::Edit { reference },
            BasicKind::Squash => RebaseInstruction::Squash { reference },
            BasicKind::Fixup => RebaseInstruction::Fixup { reference, message },
            BasicKind::Drop => RebaseInstruction::Drop { reference },
        }
    }
}

impl RebaseInstruction {
    /// The basic kind of this instruction, or None for the non-basic
    /// variants (exec, break, label, reset, merge).
    pub fn basic_kind(&self) -> Option<BasicKind> {
        match self {
            RebaseInstruction::Pick { .. } => Some(BasicKind::Pick),
            RebaseInstruction::Reword { .. } => Some(BasicKind::Reword),
            RebaseInstruction::Edit { .. } => Some(BasicKind::Edit),
            RebaseInstruction::Squash { .. } => Some(BasicKind::Squash),
            RebaseInstruction::Fixup { .. } => Some(BasicKind::Fixup),
            RebaseInstruction::Drop { .. } => Some(BasicKind::Drop),
            RebaseInstruction::Exec { .. }
            | RebaseInstruction::Break
            | RebaseInstruction::Label { .. }
            | RebaseInstruction::Reset { .. }
            | RebaseInstruction::Merge { .. } => None,
        }
    }

    /// Convert this basic instruction into another basic kind, carrying
    /// the reference forward.
    ///
    /// Returns None when `self` has no single reference to carry (exec,
    /// break, label, reset, merge). Converting to fixup uses `message`;
    /// converting away from fixup discards the mode.
    pub fn convert_basic(&self, kind: BasicKind, message: FixupMessage) -> Option<RebaseInstruction> {
        self.reference()
            .map(|reference| kind.instruction(reference.to_string(), message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instruction_for_every_kind() {
        for kind in BasicKind::ALL {
            let instruction = kind.instruction("abc1234".to_string(), FixupMessage::Discard);
            assert_eq!(instruction.basic_kind(), Some(kind));
            assert_eq!(instruction.reference(), Some("abc1234"));
        }
    }

    #[test]
    fn test_convert_pick_to_squash() {
        let pick = RebaseInstruction::Pick {
            reference: "abc1234".to_string(),
        };
        let squash = pick
            .convert_basic(BasicKind::Squash, FixupMessage::Discard)
            .unwrap();
        assert_eq!(
            squash,
            RebaseInstruction::Squash {
                reference: "abc1234".to_string()
            }
        );
    }

    #[test]
    fn test_convert_to_fixup_carries_message_mode() {
        let drop = RebaseInstruction::Drop {
            reference: "abc1234".to_string(),
        };
        let fixup = drop
            .convert_basic(BasicKind::Fixup, FixupMessage::UseAndEdit)
            .unwrap();
        assert_eq!(
            fixup,
            RebaseInstruction::Fixup {
                reference: "abc1234".to_string(),
                message: FixupMessage::UseAndEdit,
            }
        );
    }

    #[test]
    fn test_convert_non_basic_returns_none() {
        let exec = RebaseInstruction::Exec {
            command: "true".to_string(),
        };
        assert_eq!(exec.basic_kind(), None);
        assert_eq!(exec.convert_basic(BasicKind::Pick, FixupMessage::Discard), None);

        assert_eq!(
            RebaseInstruction::Break.convert_basic(BasicKind::Drop, FixupMessage::Discard),
            None
        );
    }
}
