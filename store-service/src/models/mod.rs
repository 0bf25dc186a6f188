pub mod blurb;

pub use blurb::BlurbRecord;
