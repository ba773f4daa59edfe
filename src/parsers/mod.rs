pub mod html;


pub use html::extract_image_url;
