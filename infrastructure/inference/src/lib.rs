pub mod annotated_image;
pub mod client;
pub mod snack_detector;
