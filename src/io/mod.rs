pub mod atomic;
pub mod state_file;
