pub mod bom_file;
pub mod overrides;

pub use bom_file::{BomFileReader, FileSystemWriter, StdoutPresenter};
pub use overrides::FileOverrideSource;
