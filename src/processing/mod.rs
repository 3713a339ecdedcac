//! Image processing: decoding sources and writing WebP targets.
//!
//! - [`WebpExecutor`]: drives the per-file pipeline for a batch
//! - [`encoder`]: maps a decoded image and a quality to libwebp

mod executor;
pub mod encoder;

pub use executor::WebpExecutor;
pub use encoder::{MAX_QUALITY, MIN_QUALITY, encode_webp};
