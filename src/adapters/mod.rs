// Adapters layer: concrete implementations of the domain ports.

pub mod directory;
pub mod random;
pub mod scraper;

pub use directory::InMemoryDirectory;
pub use random::{FixedChooser, RngChooser};
pub use scraper::{HttpSquadScraper, SquadPageParser};
