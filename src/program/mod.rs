//! Worker pseudo-programs.
//!
//! Each simulated worker interprets a small instruction sequence read from
//! a text file. This module decodes those files into [`Program`] values and
//! defines the [`InstructionSource`] seam the runtime loads them through.

pub mod instruction;
pub mod source;

pub use instruction::{Instruction, parse_line};
pub use source::{DirSource, InstructionSource, StaticSource};

/// A decoded instruction sequence for one worker
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    instructions: Vec<Instruction>,
}

impl Program {
    /// Creates a program from already-decoded instructions
    #[must_use]
    pub fn new(instructions: Vec<Instruction>) -> Self {
        Self { instructions }
    }

    /// Decodes program text, skipping blank and malformed lines
    #[must_use]
    pub fn parse(text: &str) -> Self {
        Self {
            instructions: text.lines().filter_map(parse_line).collect(),
        }
    }

    /// Returns the number of decoded instructions
    #[must_use]
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Returns true if no instructions were decoded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Iterates over the instructions in program order
    pub fn iter(&self) -> std::slice::Iter<'_, Instruction> {
        self.instructions.iter()
    }
}

impl IntoIterator for Program {
    type Item = Instruction;
    type IntoIter = std::vec::IntoIter<Instruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.instructions.into_iter()
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Instruction;
    type IntoIter = std::slice::Iter<'a, Instruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_preserves_order() {
        let program = Program::parse("NewJob 1\nPrint A\nPrint B\nEndJob\nTerminate\n");
        let decoded: Vec<Instruction> = program.into_iter().collect();
        assert_eq!(
            decoded,
            vec![
                Instruction::NewJob(1),
                Instruction::Print("A".to_string()),
                Instruction::Print("B".to_string()),
                Instruction::EndJob,
                Instruction::Terminate,
            ]
        );
    }

    #[test]
    fn test_parse_skips_noise() {
        let program = Program::parse("\nNewJob 1\n\nFlushCache 9\nPrint A B C\nEndJob\n");
        assert_eq!(program.len(), 2);
    }

    #[test]
    fn test_empty_text_yields_empty_program() {
        let program = Program::parse("");
        assert!(program.is_empty());
    }
}
