pub mod cv_file;
pub mod song_api;
