use crate::{
    merge::{MergeError, SettingsError},
    wavefront::{combine::CombineError, generic::GenericWavefrontError, WavefrontError},
};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Error in the `wavefront` module")]
    Wavefront(#[from] WavefrontError),
    #[error("Error in the `merge` module")]
    Merge(#[from] MergeError),
    #[error("Error in the merge settings")]
    Settings(#[from] SettingsError),
    #[error("Error in the generic wavefront generator")]
    Generic(#[from] GenericWavefrontError),
    #[error("Error in the 1D to 2D wavefront combination")]
    Combine(#[from] CombineError),
}
