pub mod use_infinite_scrolling;

pub use use_infinite_scrolling::*;
