pub mod resolver;

pub use resolver::{
    parse_data_filename, resolve_data_filename, ConfigResolver, DEFAULT_CONFIG_FILE,
    DEFAULT_DATA_FILE,
};
