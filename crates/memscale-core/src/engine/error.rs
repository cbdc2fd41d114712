use thiserror::Error;

use super::extrapolation::ExtrapolationError;
use crate::core::plot::render::RenderError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Extrapolation failed: {source}")]
    Extrapolation {
        #[from]
        source: ExtrapolationError,
    },

    #[error("Chart rendering failed: {source}")]
    Render {
        #[from]
        source: RenderError,
    },
}
