pub mod http_image_resolver;

pub use http_image_resolver::{DEFAULT_PLACEHOLDER_IMAGE_URL, HttpImageResolver};
