mod pixel_art;
mod probe;
mod repeater;
mod styles;

/// Route engine log output through the test harness.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).filter_level(log::LevelFilter::Debug).try_init();
}
