pub mod config;
pub use config::*;

pub mod engine;
pub use engine::*;

pub mod error;
pub use error::*;

pub mod matchups;
pub use matchups::*;

pub mod odds;
pub use odds::*;

pub mod range;
pub use range::*;

pub mod report;
pub use report::*;

pub mod runouts;
pub use runouts::*;

pub mod showdown;
pub use showdown::*;

pub mod tally;
pub use tally::*;

pub mod trial;
pub use trial::*;
