//! Widget components for the compass face.
//!
//! All widgets are generic over `DrawTarget<Color = Rgb565>` for platform independence.

mod dial;
mod popups;
mod primitives;

pub use dial::{
    DIAL_CENTER,
    draw_center_glyph,
    draw_dial,
    draw_north_chevron,
    draw_ring,
    draw_solar_marker,
    draw_target_arrow,
};
pub use popups::{draw_calibration_prompt, draw_popup, draw_place_label, draw_sync_banner};
pub use primitives::{draw_pointer, polar_point};

/// Screen-sized recording target for widget tests.
#[cfg(test)]
pub(crate) mod canvas {
    use core::convert::Infallible;

    use embedded_graphics::pixelcolor::Rgb565;
    use embedded_graphics::prelude::*;

    use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};

    pub struct Canvas {
        pixels: Vec<Option<Rgb565>>,
        clipped: usize,
    }

    impl Canvas {
        pub fn new() -> Self {
            Self {
                pixels: vec![None; (SCREEN_WIDTH * SCREEN_HEIGHT) as usize],
                clipped: 0,
            }
        }

        pub fn pixel(
            &self,
            p: Point,
        ) -> Option<Rgb565> {
            Self::index(p).and_then(|i| self.pixels[i])
        }

        pub fn count(
            &self,
            color: Rgb565,
        ) -> usize {
            self.pixels.iter().filter(|p| **p == Some(color)).count()
        }

        /// Pixels drawn outside the screen.
        pub const fn clipped(&self) -> usize { self.clipped }

        fn index(p: Point) -> Option<usize> {
            let inside = (0..SCREEN_WIDTH as i32).contains(&p.x) && (0..SCREEN_HEIGHT as i32).contains(&p.y);
            inside.then(|| (p.y as u32 * SCREEN_WIDTH + p.x as u32) as usize)
        }
    }

    impl OriginDimensions for Canvas {
        fn size(&self) -> Size { Size::new(SCREEN_WIDTH, SCREEN_HEIGHT) }
    }

    impl DrawTarget for Canvas {
        type Color = Rgb565;
        type Error = Infallible;

        fn draw_iter<I>(
            &mut self,
            pixels: I,
        ) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Self::Color>>,
        {
            for Pixel(p, color) in pixels {
                match Self::index(p) {
                    Some(i) => self.pixels[i] = Some(color),
                    None => self.clipped += 1,
                }
            }
            Ok(())
        }
    }
}
