// THEORY:
// The `Pixel` module is the smallest unit of the contrast system: a "dumb" data
// container for one RGB sample triple plus the single 1-dimensional heuristic the
// contrast metric needs, its brightness.
//
// Key principles:
// 1.  **Unweighted brightness**: brightness is the plain arithmetic mean of red,
//     green and blue. There is deliberately no Rec. 601 weighting here; the three
//     channels count equally.
// 2.  **Native scale**: channels are stored as `f64` at whatever scale the decoder
//     produced (0..255 for 8-bit, 0..65535 for 16-bit, 0..1 for float). Contrast is
//     a ratio, so the scale never leaks into the result.
// 3.  **Single-pixel scope**: nothing here reads neighbours; grids and bands live in
//     higher modules.

pub mod pixel {
    use crate::core_modules::error::InvalidInput;

    pub type Channel = f64;
    pub type Brightness = f64;

    /// Number of channels a pixel is made of.
    pub const CHANNELS: usize = 3;

    /// A single RGB sample triple.
    #[derive(Debug, Clone, Copy, PartialEq, Default)]
    pub struct Pixel {
        /// The red channel value.
        pub red: Channel,
        /// The green channel value.
        pub green: Channel,
        /// The blue channel value.
        pub blue: Channel,
    }

    impl Pixel {
        pub fn new(red: Channel, green: Channel, blue: Channel) -> Self {
            Pixel { red, green, blue }
        }

        /// Brightness as the unweighted mean of the three channels.
        pub fn brightness(&self) -> Brightness {
            (self.red + self.green + self.blue) / CHANNELS as f64
        }

        /// Multiplies every channel by `factor`.
        pub fn scaled(&self, factor: f64) -> Self {
            Pixel::new(self.red * factor, self.green * factor, self.blue * factor)
        }
    }

    impl TryFrom<&[Channel]> for Pixel {
        type Error = InvalidInput;

        fn try_from(samples: &[Channel]) -> Result<Self, Self::Error> {
            match samples {
                [red, green, blue] => Ok(Pixel::new(*red, *green, *blue)),
                _ => Err(InvalidInput::ChannelCount {
                    found: samples.len(),
                }),
            }
        }
    }

    impl From<[u8; 3]> for Pixel {
        fn from(bytes: [u8; 3]) -> Self {
            Pixel::new(bytes[0] as Channel, bytes[1] as Channel, bytes[2] as Channel)
        }
    }

    impl From<Pixel> for [Channel; 3] {
        fn from(pixel: Pixel) -> Self {
            [pixel.red, pixel.green, pixel.blue]
        }
    }
}
