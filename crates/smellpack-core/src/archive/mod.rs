//! Zip handling on both ends of the pipeline: unpacking the source archive,
//! choosing the directory to analyze, and packaging the result files.

pub mod extract;
pub mod locate;
pub mod package;

pub use extract::extract_zip;
pub use locate::pick_input_dir;
pub use package::package;
