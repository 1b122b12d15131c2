// SPDX-License-Identifier: MPL-2.0
//! Window icon.
//! Rasterizes the embedded brand SVG to RGBA at startup. Falls back to `None`
//! if rendering fails.

use iced::window::{icon, Icon};
use resvg::usvg;

const ICON_SIZE: u32 = 128;
const SVG_SOURCE: &str = include_str!("../assets/branding/lumbini.svg");

/// Rasterize the brand mark to a 128x128 window icon.
pub fn load_window_icon() -> Option<Icon> {
    let (rgba, size) = rasterize(SVG_SOURCE, ICON_SIZE)?;
    icon::from_rgba(rgba, size, size).ok()
}

fn rasterize(source: &str, target: u32) -> Option<(Vec<u8>, u32)> {
    let tree = match usvg::Tree::from_data(source.as_bytes(), &usvg::Options::default()) {
        Ok(t) => t,
        Err(err) => {
            tracing::warn!(%err, "failed to parse window icon");
            return None;
        }
    };

    let orig_size = tree.size();
    let scale_x = target as f32 / orig_size.width();
    let scale_y = target as f32 / orig_size.height();
    let transform = tiny_skia::Transform::from_scale(scale_x, scale_y);

    let mut pixmap = tiny_skia::Pixmap::new(target, target)?;
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    Some((pixmap.data().to_vec(), target))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brand_svg_rasterizes_to_square_rgba() {
        let (rgba, size) = rasterize(SVG_SOURCE, 64).expect("embedded svg renders");
        assert_eq!(size, 64);
        assert_eq!(rgba.len(), 64 * 64 * 4);
        assert!(rgba.iter().any(|&byte| byte != 0));
    }

    #[test]
    fn invalid_svg_yields_none() {
        assert!(rasterize("<not-svg", 32).is_none());
    }
}
