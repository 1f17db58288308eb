pub mod error;
pub mod form;
pub mod playback;
pub mod report;
pub mod trajectory;
pub mod window;
