use std::sync::Once;
use log::{debug, error, info, log_enabled, trace, warn, Level};


fn log_test_build() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn log_standard_build() {
    let _ = env_logger::try_init();
}

static INIT: Once = Once::new();

/// Installs the `env_logger` backend once per process. Verbosity comes from `RUST_LOG`.
pub fn initialize_logger() {
    INIT.call_once(|| {
        if cfg!(test) {
            log_test_build();
        }
        else {
            log_standard_build();
        }
    })
}


pub fn log_design_message(message: &str, log_level: Level) {
    if log_enabled!(log_level) {
        match log_level {
            Level::Info => info!("{}", message),
            Level::Debug => debug!("{}", message),
            Level::Warn => warn!("{}", message),
            Level::Error => error!("{}", message),
            Level::Trace => trace!("{}", message),
        }
    }
}
