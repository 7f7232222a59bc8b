/// UI panels for chunkbar.

pub mod control_panel;
