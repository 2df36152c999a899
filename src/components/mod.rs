//! The components module contains all shared components for our app.

mod app;
mod icons;
pub mod media;
mod preview;
mod share;
mod sidebar;
mod transport;

pub use app::*;
pub use icons::*;
pub use media::MediaController;
pub use preview::*;
pub use share::*;
pub use sidebar::*;
pub use transport::*;
