//! The ccb instruction set.

/// A one-byte operation code.
///
/// Operands follow the opcode inline in the byte stream: name ids and
/// local slots are one byte, jump offsets and call targets are two bytes
/// big-endian. Comparison opcodes push 0 or 1.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum OpCode {
    /// `CONSTANT <u8 idx>`: push `constants[idx]`.
    Constant,
    /// Discard the top of the stack.
    Pop,
    /// `DEFINE_GLOBAL <u8 name_id>`: pop into `globals[name_id]`.
    DefineGlobal,
    /// `GET_GLOBAL <u8 name_id>`: push `globals[name_id]`.
    GetGlobal,
    /// `SET_GLOBAL <u8 name_id>`: store the top of the stack without popping.
    SetGlobal,
    /// `GET_LOCAL <u8 slot>`: push the frame's slot.
    GetLocal,
    /// `SET_LOCAL <u8 slot>`: store the top of the stack into the frame's
    /// slot without popping.
    SetLocal,
    /// Pop two, push their sum.
    Add,
    /// Pop two, push their difference.
    Subtract,
    /// Pop two, push their product.
    Multiply,
    /// Pop two, push their truncating quotient.
    Divide,
    /// Pop two, push 1 if left < right else 0.
    Less,
    /// Pop two, push 1 if left > right else 0.
    Greater,
    /// Pop two, push 1 if left <= right else 0.
    LessEqual,
    /// Pop two, push 1 if left >= right else 0.
    GreaterEqual,
    /// Pop two, push 1 if equal else 0.
    Equal,
    /// Pop two, push 1 if unequal else 0.
    NotEqual,
    /// `JUMP <u16 offset>`: jump forward by `offset`.
    Jump,
    /// `JUMP_IF_FALSE <u16 offset>`: pop the condition; jump forward when
    /// it is zero. The pop happens exactly once either way.
    JumpIfFalse,
    /// `LOOP <u16 offset>`: jump backward by `offset`.
    Loop,
    /// `IN <u8 name_id>`: read an integer from input into a global.
    In,
    /// `IN_LOCAL <u8 slot>`: read an integer from input into a local.
    InLocal,
    /// Pop and print a value followed by a newline.
    Out,
    /// `CALL <u16 target> <u8 argc>`: push a frame and jump to `target`.
    Call,
    /// Return from the current frame, or halt at top level.
    Return,
}

/// Lookup table for decoding; opcode discriminants are contiguous from 0.
const OPCODES: [OpCode; 25] = [
    OpCode::Constant,
    OpCode::Pop,
    OpCode::DefineGlobal,
    OpCode::GetGlobal,
    OpCode::SetGlobal,
    OpCode::GetLocal,
    OpCode::SetLocal,
    OpCode::Add,
    OpCode::Subtract,
    OpCode::Multiply,
    OpCode::Divide,
    OpCode::Less,
    OpCode::Greater,
    OpCode::LessEqual,
    OpCode::GreaterEqual,
    OpCode::Equal,
    OpCode::NotEqual,
    OpCode::Jump,
    OpCode::JumpIfFalse,
    OpCode::Loop,
    OpCode::In,
    OpCode::InLocal,
    OpCode::Out,
    OpCode::Call,
    OpCode::Return,
];

impl TryFrom<u8> for OpCode {
    type Error = u8;

    fn try_from(byte: u8) -> Result<Self, u8> {
        OPCODES.get(byte as usize).copied().ok_or(byte)
    }
}

impl OpCode {
    /// Returns the conventional mnemonic for disassembly.
    pub fn mnemonic(self) -> &'static str {
        match self {
            OpCode::Constant => "OP_CONSTANT",
            OpCode::Pop => "OP_POP",
            OpCode::DefineGlobal => "OP_DEFINE_GLOBAL",
            OpCode::GetGlobal => "OP_GET_GLOBAL",
            OpCode::SetGlobal => "OP_SET_GLOBAL",
            OpCode::GetLocal => "OP_GET_LOCAL",
            OpCode::SetLocal => "OP_SET_LOCAL",
            OpCode::Add => "OP_ADD",
            OpCode::Subtract => "OP_SUBTRACT",
            OpCode::Multiply => "OP_MULTIPLY",
            OpCode::Divide => "OP_DIVIDE",
            OpCode::Less => "OP_LESS",
            OpCode::Greater => "OP_GREATER",
            OpCode::LessEqual => "OP_LESS_EQUAL",
            OpCode::GreaterEqual => "OP_GREATER_EQUAL",
            OpCode::Equal => "OP_EQUAL",
            OpCode::NotEqual => "OP_NOT_EQUAL",
            OpCode::Jump => "OP_JUMP",
            OpCode::JumpIfFalse => "OP_JUMP_IF_FALSE",
            OpCode::Loop => "OP_LOOP",
            OpCode::In => "OP_IN",
            OpCode::InLocal => "OP_IN_LOCAL",
            OpCode::Out => "OP_OUT",
            OpCode::Call => "OP_CALL",
            OpCode::Return => "OP_RETURN",
        }
    }
}
