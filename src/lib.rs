pub mod debug;
mod error;
mod generator;
mod raster;
pub mod sizes;

pub use self::error::{IconError, Result};
pub use self::generator::generate;
pub use self::generator::Generator;
pub use self::generator::GeneratorBuilder;
pub use self::generator::Report;
pub use self::generator::{ASSETS_DIR, DEFAULT_SOURCE, RES_DIR};
pub use self::raster::{encode_png, into_rgba, load_rgba, resample};
