// File: crates/history-chart-core/src/error.rs
// Summary: Errors raised while rasterizing or encoding the history chart.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },

    #[error("encode PNG failed")]
    Encode,

    #[error("reading back rendered pixels failed")]
    PixelRead,
}

pub type Result<T, E = ChartError> = std::result::Result<T, E>;
