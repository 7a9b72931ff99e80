use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("wrong number of arguments: expected 3, got {0}")]
    ArgumentCount(usize),

    #[error("malformed resolution {0:?}, expected WIDTHxHEIGHT")]
    MalformedResolution(String),

    #[error("resolution must be greater than zero")]
    NonPositiveResolution,

    #[error("resolution {0}x{1} has too many pixels")]
    ResolutionTooLarge(u32, u32),

    #[error("unrecognized scene complexity {0:?}")]
    UnknownSceneComplexity(String),

    #[error("invalid value {value:?} for --{option}")]
    InvalidOption { option: &'static str, value: String },

    #[error("{0}")]
    Options(#[from] getopts::Fail),

    #[error("failed to write image: {0}")]
    Image(#[from] image::ImageError),
}
