pub mod registry;
pub mod resolver;

pub use registry::{to_svg, BuiltinRegistry, IconRegistry};
pub use resolver::{resolve, resolve_strict, IconError, IconResult};
