use crate::error::VmError;

/// A decoded instruction. Register indices arrive as `usize` so the
/// interpreter can index its register file without casting everywhere.
///
/// Instruction words are 16 bits, big-endian in memory. The top nibble picks
/// the operation class; classes `0x0`, `0x8` and `0xF` need a secondary
/// decode on the remaining operand bits. The `0xF` sub-opcode table follows
/// the interpreter variant this core is binary-compatible with: delay is
/// written through `Fx0A` and sound through `Fx15`, and there is no `Fx18`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// 00E0: zero the framebuffer
    ClearDisplay,
    /// 00EE: pop the call stack into pc
    Return,
    /// 1nnn
    Jump { addr: u16 },
    /// 2nnn: push pc, jump
    Call { addr: u16 },
    /// 3xkk: pc += 2 if Vx == kk
    SkipEqConst { vx: usize, byte: u8 },
    /// 4xkk
    SkipNeConst { vx: usize, byte: u8 },
    /// 5xy0
    SkipEqReg { vx: usize, vy: usize },
    /// 6xkk
    LoadConst { vx: usize, byte: u8 },
    /// 7xkk: wrapping add, VF untouched
    AddConst { vx: usize, byte: u8 },
    /// 8xy0
    Move { vx: usize, vy: usize },
    /// 8xy1
    Or { vx: usize, vy: usize },
    /// 8xy2
    And { vx: usize, vy: usize },
    /// 8xy3
    Xor { vx: usize, vy: usize },
    /// 8xy4: VF = carry
    AddReg { vx: usize, vy: usize },
    /// 8xy5: VF = 1 when no borrow
    SubReg { vx: usize, vy: usize },
    /// 8xy6: VF = Vx & 1, result lands in Vy
    ShiftRight { vx: usize, vy: usize },
    /// 8xy7: Vx = Vy - Vx
    SubInv { vx: usize, vy: usize },
    /// 8xyE: VF = top bit of Vx, result lands in Vy
    ShiftLeft { vx: usize, vy: usize },
    /// 9xy0
    SkipNeReg { vx: usize, vy: usize },
    /// Annn
    LoadI { addr: u16 },
    /// Bnnn: pc = nnn + V0
    JumpV0 { addr: u16 },
    /// Cxkk: Vx = random byte & kk
    Random { vx: usize, byte: u8 },
    /// Dxyn: XOR n sprite rows from mem[I] at (Vx, Vy), VF = collision
    Draw { vx: usize, vy: usize, rows: u8 },
    /// Exxx: recognized but there is no keyboard in this core; executing it
    /// fails loudly with the raw word
    SkipOnKey { word: u16 },
    /// Fx07
    LoadDelay { vx: usize },
    /// Fx0A (this variant's encoding)
    SetDelay { vx: usize },
    /// Fx15 (this variant's encoding)
    SetSound { vx: usize },
    /// Fx1E
    AddI { vx: usize },
    /// Fx29: I = font glyph address for digit Vx
    SpriteAddr { vx: usize },
    /// Fx33
    StoreBcd { vx: usize },
    /// Fx55: V0..=Vx into mem[I..], then I += x + 1
    DumpRegs { vx: usize },
    /// Fx65: mem[I..] into V0..=Vx, then I += x + 1
    LoadRegs { vx: usize },
}

impl Instruction {
    /// Decode one instruction word. Unrecognized encodings come back as
    /// `UnknownOpcode` carrying the word, never a silent no-op.
    pub fn decode(word: u16) -> Result<Instruction, VmError> {
        use Instruction::*;

        let nnn = word & 0x0FFF;
        let vx = ((word >> 8) & 0xF) as usize;
        let vy = ((word >> 4) & 0xF) as usize;
        let n = (word & 0xF) as u8;
        let byte = (word & 0xFF) as u8;

        let instruction = match word >> 12 {
            0x0 => match nnn {
                0x0E0 => ClearDisplay,
                0x0EE => Return,
                _ => return Err(VmError::UnknownOpcode(word)),
            },
            0x1 => Jump { addr: nnn },
            0x2 => Call { addr: nnn },
            0x3 => SkipEqConst { vx, byte },
            0x4 => SkipNeConst { vx, byte },
            0x5 => SkipEqReg { vx, vy },
            0x6 => LoadConst { vx, byte },
            0x7 => AddConst { vx, byte },
            0x8 => match n {
                0x0 => Move { vx, vy },
                0x1 => Or { vx, vy },
                0x2 => And { vx, vy },
                0x3 => Xor { vx, vy },
                0x4 => AddReg { vx, vy },
                0x5 => SubReg { vx, vy },
                0x6 => ShiftRight { vx, vy },
                0x7 => SubInv { vx, vy },
                0xE => ShiftLeft { vx, vy },
                _ => return Err(VmError::UnknownOpcode(word)),
            },
            0x9 => SkipNeReg { vx, vy },
            0xA => LoadI { addr: nnn },
            0xB => JumpV0 { addr: nnn },
            0xC => Random { vx, byte },
            0xD => Draw { vx, vy, rows: n },
            0xE => SkipOnKey { word },
            0xF => match byte {
                0x07 => LoadDelay { vx },
                0x0A => SetDelay { vx },
                0x15 => SetSound { vx },
                0x1E => AddI { vx },
                0x29 => SpriteAddr { vx },
                0x33 => StoreBcd { vx },
                0x55 => DumpRegs { vx },
                0x65 => LoadRegs { vx },
                _ => return Err(VmError::UnknownOpcode(word)),
            },
            // word >> 12 can only be 0x0..=0xF
            _ => unreachable!(),
        };

        Ok(instruction)
    }
}
