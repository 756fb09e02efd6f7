use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImageError {
    #[error("image has a zero side")]
    Empty,

    #[error("image data holds {actual} pixels, expected {expected}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("animated image needs at least one frame")]
    NoFrames,

    #[error("frame {index} holds {actual} pixels, expected {expected}")]
    FrameSizeMismatch {
        index: usize,
        expected: usize,
        actual: usize,
    },
}
