//! Response assembly for streamed agent output

pub mod decoder;

pub use decoder::ResponseAccumulator;
