pub mod cv;
pub mod now_playing;
pub mod profile;
pub mod terminal;
