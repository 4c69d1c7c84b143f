//! Demonstrates enabling verbose logging for goertzel-dbm.
use goertzel_dbm::{GoertzelFilter, GoertzelStream};

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Trace)
        .init();

    let signal = vec![0.0, 1.0, 0.0, -1.0, 0.0, 1.0, 0.0, -1.0];

    if let Err(e) = GoertzelFilter::new(5000.0, 8000.0) {
        log::warn!("construction failed: {e}");
    }

    let mut stream = GoertzelStream::new(2000.0, 8000.0, 4).unwrap();
    let mut readings = Vec::new();
    stream.process_block(&signal, &mut readings);
    log::info!("readings: {readings:?}");
}
