pub mod color;
pub mod format;
pub mod named;

pub use color::RgbaColor;
pub use format::ColorFormat;
