pub mod prompt;
pub mod providers;
pub mod wikipedia;

pub use wikipedia::WikipediaClient;
