//! Operations exposed to the binary and to library consumers:
//! - [`optimize_images`]: convert a directory's PNG/JPEG files to WebP

mod optimize;

pub use optimize::*;
