use thiserror::Error;

/// Everything that can abort a run. There are no transient failures in the
/// core; each of these means the program or the interpreter is broken and
/// the host should stop.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VmError {
    /// memory or stack access outside `[0, capacity)`
    #[error("address {address:#05x} outside memory of {capacity} cells")]
    OutOfRange { address: usize, capacity: usize },

    /// a write that doesn't fit the cell width. registers mask silently;
    /// memory does not, so the offending operation has a logic bug
    #[error("value {value:#x} does not fit in a {bits}-bit cell")]
    ValueRange { value: u16, bits: u32 },

    /// fetched an instruction word with no decoding
    #[error("unknown opcode {0:#06x}")]
    UnknownOpcode(u16),

    /// the skip-on-key group decodes but has no keyboard to consult
    #[error("instruction {0:#06x} is not implemented")]
    Unimplemented(u16),

    /// RET with nothing on the call stack
    #[error("return with an empty call stack")]
    StackUnderflow,

    /// ROM read failure, message kept so the error stays comparable
    #[error("i/o error: {message}")]
    Io { message: String },
}

impl From<std::io::Error> for VmError {
    fn from(e: std::io::Error) -> Self {
        VmError::Io {
            message: e.to_string(),
        }
    }
}
