use serde::{Deserialize, Serialize};

/// An sRGB color stored as a packed `0xRRGGBB` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rgb(pub u32);

impl Rgb {
    pub fn channels(&self) -> [f32; 3] {
        [
            ((self.0 >> 16) & 0xff) as f32 / 255.0,
            ((self.0 >> 8) & 0xff) as f32 / 255.0,
            (self.0 & 0xff) as f32 / 255.0,
        ]
    }

    /// Channels converted from the sRGB transfer curve to linear light.
    pub fn linear(&self) -> [f32; 3] {
        self.channels().map(|c| {
            if c <= 0.04045 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        })
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self(0xeeeeee)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channels_unpack() {
        assert_eq!(Rgb(0xff0000).channels(), [1.0, 0.0, 0.0]);
        assert_eq!(Rgb(0x0000ff).channels(), [0.0, 0.0, 1.0]);
    }

    #[test]
    fn linear_is_darker_for_midtones() {
        let [r, _, _] = Rgb(0xeeeeee).linear();
        assert!(r < 238.0 / 255.0);
        assert!(r > 0.8);
    }
}
