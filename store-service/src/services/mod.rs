pub mod repository;

pub use repository::{BlurbRepository, InMemoryBlurbRepository};
