pub mod edge;

pub use edge::{load_config, EdgeOutputConfig, EdgeToolConfig};
