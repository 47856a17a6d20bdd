pub mod bucket;
pub mod email;
