//! Configuration sources, in precedence order (lowest first).

pub(super) mod environment;
pub(super) mod global_file;
pub(super) mod workspace_file;
