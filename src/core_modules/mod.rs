pub mod classifier;
pub mod pixel;
pub mod utils;
