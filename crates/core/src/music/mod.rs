mod catalogue;
mod types;
mod validation;

pub use catalogue::demo_catalogue;
pub use types::Music;
pub use validation::validate_music_key;
