pub mod error;
pub mod formats;
pub mod fs;

pub use error::{OptimizerError, OptimizerResult};
pub use formats::{ExtensionMatch, ImageFormat, SOURCE_EXTENSIONS, format_from_extension};
pub use fs::{get_file_size, get_extension, list_source_images, modified_time};
