//! Chunk disassembly for debugging and tests.

use std::fmt::Write;

use super::{Chunk, OpCode};

/// Renders a chunk's disassembly, one instruction per line.
///
/// Each line shows the byte offset, the mnemonic, and any operands.
/// Jump instructions also show the resolved destination offset.
pub fn disassemble(chunk: &Chunk) -> String {
    let mut out = String::new();
    let mut offset = 0;
    while offset < chunk.len() {
        offset = disassemble_instruction(chunk, offset, &mut out);
    }
    out
}

/// Renders one instruction and returns the offset of the next.
///
/// An undecodable byte is rendered as `??` and skipped so the rest of
/// the chunk still disassembles.
fn disassemble_instruction(chunk: &Chunk, offset: usize, out: &mut String) -> usize {
    let _ = write!(out, "{offset:04} ");

    let byte = chunk.get(offset).expect("offset within chunk");
    let Ok(op) = OpCode::try_from(byte) else {
        let _ = writeln!(out, "?? {byte:#04x}");
        return offset + 1;
    };

    use OpCode::*;
    match op {
        Constant => {
            let index = chunk.get(offset + 1).unwrap_or(0) as usize;
            let value = chunk.constant(index);
            match value {
                Some(v) => {
                    let _ = writeln!(out, "{:<17}{index:4} '{v}'", op.mnemonic());
                }
                None => {
                    let _ = writeln!(out, "{:<17}{index:4} <bad index>", op.mnemonic());
                }
            }
            offset + 2
        }
        DefineGlobal | GetGlobal | SetGlobal | In => {
            let name_id = chunk.get(offset + 1).unwrap_or(0);
            let _ = writeln!(out, "{:<17}{name_id:4}", op.mnemonic());
            offset + 2
        }
        GetLocal | SetLocal | InLocal => {
            let slot = chunk.get(offset + 1).unwrap_or(0);
            let _ = writeln!(out, "{:<17}{slot:4}", op.mnemonic());
            offset + 2
        }
        Jump | JumpIfFalse => {
            let distance = read_u16(chunk, offset + 1);
            // Forward jumps land relative to the first operand byte.
            let target = offset + 1 + distance as usize;
            let _ = writeln!(out, "{:<17}{distance:4} -> {target:04}", op.mnemonic());
            offset + 3
        }
        Loop => {
            let distance = read_u16(chunk, offset + 1);
            let target = (offset + 1).saturating_sub(distance as usize);
            let _ = writeln!(out, "{:<17}{distance:4} -> {target:04}", op.mnemonic());
            offset + 3
        }
        Call => {
            let target = read_u16(chunk, offset + 1);
            let argc = chunk.get(offset + 3).unwrap_or(0);
            let _ = writeln!(out, "{:<17}{target:4} ({argc} args)", op.mnemonic());
            offset + 4
        }
        Pop | Add | Subtract | Multiply | Divide | Less | Greater | LessEqual | GreaterEqual
        | Equal | NotEqual | Out | Return => {
            let _ = writeln!(out, "{}", op.mnemonic());
            offset + 1
        }
    }
}

fn read_u16(chunk: &Chunk, offset: usize) -> u16 {
    let hi = chunk.get(offset).unwrap_or(0) as u16;
    let lo = chunk.get(offset + 1).unwrap_or(0) as u16;
    (hi << 8) | lo
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disassemble_constant_and_return() {
        let mut chunk = Chunk::new();
        let idx = chunk.add_constant(42);
        chunk.write_op(OpCode::Constant);
        chunk.write_byte(idx as u8);
        chunk.write_op(OpCode::Return);

        let text = disassemble(&chunk);
        assert!(text.contains("OP_CONSTANT"));
        assert!(text.contains("'42'"));
        assert!(text.contains("OP_RETURN"));
    }

    #[test]
    fn test_disassemble_jump_shows_target() {
        let mut chunk = Chunk::new();
        chunk.write_op(OpCode::Jump);
        chunk.write_u16(5);

        let text = disassemble(&chunk);
        // Distance 5 from the first operand byte at offset 1.
        assert!(text.contains("-> 0006"));
    }

    #[test]
    fn test_disassemble_unknown_byte() {
        let mut chunk = Chunk::new();
        chunk.write_byte(0xfe);
        let text = disassemble(&chunk);
        assert!(text.contains("??"));
    }
}
