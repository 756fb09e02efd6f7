/// A B8G8R8A8 pixel with premultiplied alpha.
///
/// Field order matches the in-memory layout of the canvas, so a `&[Pixel]`
/// can be handed to a surface as raw BGRA bytes row by row.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Pixel {
    pub b: u8,
    pub g: u8,
    pub r: u8,
    pub a: u8,
}

impl Pixel {
    pub const TRANSPARENT: Self = Self::rgba(0x00, 0x00, 0x00, 0x00);
    pub const BLACK: Self = Self::rgb(0x00, 0x00, 0x00);
    pub const WHITE: Self = Self::grey(0xFF);
    pub const AZURE: Self = Self::rgb(0xF0, 0xFF, 0xFF);

    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { b, g, r, a }
    }

    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 0xFF)
    }

    #[must_use]
    pub const fn grey_alpha(value: u8, a: u8) -> Self {
        Self::rgba(value, value, value, a)
    }

    #[must_use]
    pub const fn grey(value: u8) -> Self {
        Self::grey_alpha(value, 0xFF)
    }

    #[must_use]
    pub fn is_opaque(&self) -> bool {
        self.a == 0xFF
    }

    /// Composites `self` (premultiplied) over `dst`.
    #[must_use]
    pub fn over(self, dst: Self) -> Self {
        if self.a == 0xFF {
            return self;
        }
        if self.a == 0 {
            return Self {
                b: self.b.saturating_add(dst.b),
                g: self.g.saturating_add(dst.g),
                r: self.r.saturating_add(dst.r),
                a: dst.a,
            };
        }

        let inverse = 255 - u16::from(self.a);
        let blend = |src: u8, dst: u8| -> u8 {
            let scaled = (u16::from(dst) * inverse + 127) / 255;
            (u16::from(src) + scaled).min(255) as u8
        };

        Self {
            b: blend(self.b, dst.b),
            g: blend(self.g, dst.g),
            r: blend(self.r, dst.r),
            a: blend(self.a, dst.a),
        }
    }
}

impl Default for Pixel {
    fn default() -> Self {
        Self::WHITE
    }
}
