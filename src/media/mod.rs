// SPDX-License-Identifier: MPL-2.0
//! Remote image loading for the gallery.
//!
//! - [`image`]: decoded images and decoding
//! - [`remote`]: streaming HTTP download with a size cap
//! - [`prefetch`]: LRU cache of decoded images keyed by URL

pub mod image;
pub mod prefetch;
pub mod remote;

pub use image::{decode_image, ImageData};
pub use prefetch::{ImagePrefetchCache, ImageStatus, PrefetchConfig};
pub use remote::{fetch_image, image_client};
