// Utility functions

pub mod media;
