pub mod kl;
pub mod measure;
pub mod schmidt;
