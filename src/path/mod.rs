mod normalize;

pub use normalize::{SEPARATOR, basename, dirname, extname, join, normalize, resolve};
