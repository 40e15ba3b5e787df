pub mod bgr;
pub mod io;
pub mod traits;

pub use self::bgr::{BgrImage, BgrImageRef};
pub use self::traits::{ImageView, ImageViewMut};
