pub mod surface;
pub mod ui;

pub use surface::TerminalSurface;
