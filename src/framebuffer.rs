/// The 64x32 monochrome pixel grid the interpreter draws into. Sprites are
/// XORed on with toroidal wraparound; the render collaborator only ever
/// reads it.
pub struct FrameBuffer {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        FrameBuffer {
            width,
            height,
            pixels: vec![0; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// `x` and `y` must already be in range; draw() wraps before plotting
    pub fn is_lit(&self, x: usize, y: usize) -> bool {
        debug_assert!(x < self.width && y < self.height);
        self.pixels[y * self.width + x] == 1
    }

    pub fn clear(&mut self) {
        self.pixels.fill(0);
    }

    /// XOR a sprite onto the grid. Each byte of `rows` is 8 horizontal
    /// pixels, most significant bit first, one byte per scanline starting at
    /// `(x, y)`. Coordinates wrap at both edges.
    ///
    /// Returns true if any lit pixel was toggled off, i.e. collision means
    /// erasing, not lighting.
    pub fn draw(&mut self, x: usize, y: usize, rows: &[u8]) -> bool {
        let mut collided = false;

        for (row, byte) in rows.iter().enumerate() {
            for col in 0..8 {
                if byte & (0x80 >> col) == 0 {
                    // XOR with a zero bit changes nothing
                    continue;
                }
                let px = (x + col) % self.width;
                let py = (y + row) % self.height;
                let cell = &mut self.pixels[py * self.width + px];
                collided |= *cell == 1;
                *cell ^= 1;
            }
        }

        collided
    }
}
