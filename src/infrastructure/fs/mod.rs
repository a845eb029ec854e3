//! File System Implementations
//!
//! Everything the compile pipeline does to the local disk: resolving input
//! references, allocating temp files, copying bytes.

mod config_dir;
mod copier;
mod path_resolver;
mod temp_file;

pub use config_dir::{user_config_dir, IDLC_TEST_CONFIG_DIR_VAR};
pub use copier::{copy_stream, FileCopier, CHUNK_SIZE};
pub use path_resolver::PathResolver;
pub use temp_file::{
    temp_dir_from, TempFileAllocator, TempFileSource, TemporaryFile, MAX_TEMP_PATH_LEN, TEMP_DIR_VARS,
    UNIQUE_SUFFIX_LEN,
};
