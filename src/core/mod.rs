pub mod scale;
pub mod types;

pub use scale::{LinearScale, Ticks};
pub use types::{Insets, PlotArea, Viewport};
