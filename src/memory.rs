use crate::error::VmError;

/// A fixed-capacity array of cells, each masked to a configured bit width.
/// One instance with 8-bit cells is main memory; another with 16-bit cells
/// is the call stack.
///
/// Unlike a register, memory refuses values that overflow the cell width:
/// the caller writing them has a bug and must hear about it.
pub struct Memory {
    cells: Vec<u16>,
    cell_bits: u32,
    value_mask: u16,
}

impl Memory {
    pub fn new(capacity: usize, cell_bits: u32) -> Self {
        debug_assert!((1..=16).contains(&cell_bits));
        Memory {
            cells: vec![0; capacity],
            cell_bits,
            value_mask: (((1u32 << cell_bits) - 1) & 0xFFFF) as u16,
        }
    }

    pub fn read(&self, index: usize) -> Result<u16, VmError> {
        self.check_bounds(index)?;
        Ok(self.cells[index])
    }

    pub fn write(&mut self, index: usize, value: u16) -> Result<(), VmError> {
        // value width is checked first: an oversized value is a coding
        // defect in the caller and wins even when the index is also bad
        if value & self.value_mask != value {
            return Err(VmError::ValueRange {
                value,
                bits: self.cell_bits,
            });
        }
        self.check_bounds(index)?;
        self.cells[index] = value;
        Ok(())
    }

    pub fn capacity(&self) -> usize {
        self.cells.len()
    }

    fn check_bounds(&self, index: usize) -> Result<(), VmError> {
        if index >= self.cells.len() {
            return Err(VmError::OutOfRange {
                address: index,
                capacity: self.cells.len(),
            });
        }
        Ok(())
    }
}
