pub mod environment;
pub mod paths;

pub use environment::{CODEX_HOME_ENV, get_codex_home, resolve_codex_home};
pub use paths::{expand_tilde, format_path_with_tilde};
