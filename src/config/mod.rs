mod manager;

pub use manager::{
    BACKEND_ENV, ChatConfig, ConfigFile, ConfigManager, DEFAULT_PERSONA, ResolveOptions,
    ResolvedConfig, resolve_config, validate_backend,
};
