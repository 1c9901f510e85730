// Logomark library: ratio-sized logo watermarking for photos and photo folders

pub mod config;
pub mod constants;
pub mod logging;
pub mod watermark;
