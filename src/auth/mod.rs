// Viewer authentication helpers

pub mod jwt;
