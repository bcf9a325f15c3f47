//! Pixel format of the framebuffer

use bytemuck::{Pod, Zeroable};

use crate::Color;

/// One framebuffer pixel, laid out as B, G, R, A bytes
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct Bgra {
    pub b: u8,
    pub g: u8,
    pub r: u8,
    pub a: u8,
}

impl Bgra {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { b, g, r, a }
    }

    /// Pack as `0xAARRGGBB`, the native word of 32-bit window surfaces
    #[inline]
    pub const fn to_argb_u32(self) -> u32 {
        u32::from_le_bytes([self.b, self.g, self.r, self.a])
    }
}

impl From<Color> for Bgra {
    #[inline]
    fn from(c: Color) -> Self {
        Self::new(c.red, c.green, c.blue, c.alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_order() {
        let px = Bgra::from(Color::rgba(1, 2, 3, 4));
        assert_eq!(bytemuck::bytes_of(&px), &[3, 2, 1, 4]);
    }

    #[test]
    fn test_argb_packing() {
        let px = Bgra::from(Color::rgb(0x12, 0x34, 0x56));
        assert_eq!(px.to_argb_u32(), 0xFF12_3456);
    }
}
