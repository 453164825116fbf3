//! Colormap definitions and application logic.

use crate::util::f32_to_u8;

/// Sixth-order polynomial fits `c0 + c1 t + ... + c6 t^6` per RGB channel.
type Poly = [[f32; 3]; 7];

const MAGMA: Poly = [
    [-0.002_136_485, -0.000_749_655, -0.005_386_128],
    [0.251_660_54, 0.677_523_24, 2.494_026_6],
    [8.353_717, -3.577_719_5, 0.314_467_9],
    [-27.668_733, 14.264_731, -13.649_213],
    [52.176_14, -27.943_606, 12.944_169],
    [-50.768_525, 29.046_583, 4.234_153],
    [18.655_705, -11.489_774, -5.601_961_5],
];

const VIRIDIS: Poly = [
    [0.277_727_33, 0.005_407_344_5, 0.334_099_8],
    [0.105_093_04, 1.404_613_5, 1.384_590_2],
    [-0.330_861_83, 0.214_847_56, 0.095_095_16],
    [-4.634_230_6, -5.799_101, -19.332_441],
    [6.228_27, 14.179_933, 56.690_55],
    [4.776_385, -13.745_145, -65.353_03],
    [-5.435_456, 4.645_852_6, 26.312_435],
];

/// Available colormaps for frame display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Colormap {
    /// Magma - black to purple to orange to pale yellow.
    #[default]
    Magma,
    /// Viridis - blue to teal to green to yellow.
    Viridis,
    /// Hot (Thermal) - black to red to yellow to white.
    Hot,
    /// Grayscale - black to white.
    Grayscale,
}

impl std::fmt::Display for Colormap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Colormap::Magma => write!(f, "Magma"),
            Colormap::Viridis => write!(f, "Viridis"),
            Colormap::Hot => write!(f, "Hot (Thermal)"),
            Colormap::Grayscale => write!(f, "Grayscale"),
        }
    }
}

impl Colormap {
    pub const ALL: [Colormap; 4] = [
        Colormap::Magma,
        Colormap::Viridis,
        Colormap::Hot,
        Colormap::Grayscale,
    ];

    /// Apply the colormap to a normalized value [0, 1] and return RGBA bytes.
    ///
    /// # Arguments
    /// * `val` - Normalized value between 0.0 and 1.0
    ///
    /// # Returns
    /// RGBA color as `[r, g, b, a]` bytes
    #[must_use]
    pub fn apply(self, val: f32) -> [u8; 4] {
        let val = val.clamp(0.0, 1.0);
        match self {
            Colormap::Magma => eval_poly(&MAGMA, val),
            Colormap::Viridis => eval_poly(&VIRIDIS, val),
            Colormap::Grayscale => {
                let v = f32_to_u8(val * 255.0);
                [v, v, v, 255]
            }
            Colormap::Hot => {
                // Black -> red -> yellow -> white in equal thirds
                let r = f32_to_u8(val * 3.0 * 255.0);
                let g = f32_to_u8((val * 3.0 - 1.0) * 255.0);
                let b = f32_to_u8((val * 3.0 - 2.0) * 255.0);
                [r, g, b, 255]
            }
        }
    }

    /// 256-entry lookup table over evenly spaced normalized values.
    #[must_use]
    pub fn lut(self) -> [[u8; 4]; 256] {
        let mut table = [[0u8; 4]; 256];
        for (i, entry) in table.iter_mut().enumerate() {
            #[allow(clippy::cast_precision_loss)]
            let t = i as f32 / 255.0;
            *entry = self.apply(t);
        }
        table
    }
}

fn eval_poly(poly: &Poly, t: f32) -> [u8; 4] {
    let mut rgb = [0.0f32; 3];
    for (channel, out) in rgb.iter_mut().enumerate() {
        *out = poly
            .iter()
            .rev()
            .fold(0.0, |acc, coeffs| acc * t + coeffs[channel]);
    }
    [
        f32_to_u8(rgb[0] * 255.0),
        f32_to_u8(rgb[1] * 255.0),
        f32_to_u8(rgb[2] * 255.0),
        255,
    ]
}
