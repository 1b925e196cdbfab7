use env_logger::{Builder, Env};

const DEFAULT_LOG_FILTER: &str = "music_bench=info";

pub fn setup() {
    Builder::from_env(Env::default().default_filter_or(DEFAULT_LOG_FILTER))
        .format_target(false)
        .init();
}
