use glyphpath_core::{ErrorKind, PipelineError};

pub(crate) fn raster_error(message: impl Into<String>) -> PipelineError {
    PipelineError::new(ErrorKind::Thumbnail, message)
}
