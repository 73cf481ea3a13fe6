pub mod path;

pub use path::has_path;
