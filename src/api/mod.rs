pub mod models;
pub mod quran;

pub use models::{Ayah, Reciter, Surah};
pub use quran::QuranClient;
