pub mod init;
pub mod matrix;
pub mod vector;

pub use init::{initialize_bias, initialize_weights, InitRng};
pub use matrix::Matrix;
pub use vector::{dot, outer, scale, subtract, transpose};
