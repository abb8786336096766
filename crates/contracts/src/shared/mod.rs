pub mod multilingual;

pub use multilingual::MultilingualString;
