/// UI widgets for chunkbar.

pub mod loading_bar;
pub mod status_bar;
