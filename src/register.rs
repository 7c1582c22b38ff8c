/// A fixed-width word store. Assignment truncates to the configured width
/// rather than failing; this is how the V registers get their wrapping
/// arithmetic for free.
#[derive(Debug, Clone, Copy)]
pub struct Register {
    value: u16,
    mask: u16,
}

impl Register {
    /// `bits` must be 1..=16
    pub fn new(bits: u32) -> Self {
        debug_assert!((1..=16).contains(&bits));
        Register {
            value: 0,
            mask: (((1u32 << bits) - 1) & 0xFFFF) as u16,
        }
    }

    pub fn get(&self) -> u16 {
        self.value
    }

    /// store `value & mask`; never fails
    pub fn set(&mut self, value: u16) {
        self.value = value & self.mask;
    }
}
