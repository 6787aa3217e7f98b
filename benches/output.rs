use calclog::{
    Dispatcher, Formatter, Level, LogRecord, Pipeline, RotatingFileSink, RotationPolicy, Sink,
};
use chrono::Local;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tempfile::TempDir;

fn make_record() -> LogRecord {
    LogRecord {
        time: Local::now(),
        level: Level::Info,
        name: "bench".to_string(),
        func: "make_record",
        file: "benches/output.rs",
        line: 12,
        message: "benchmark log message".to_string(),
    }
}

fn bench_rotating_file_write(c: &mut Criterion) {
    let tmp = TempDir::new().expect("failed to create temp dir");
    let sink = RotatingFileSink::open(
        tmp.path().join("app_bench.log"),
        Level::Debug,
        Formatter::default(),
        RotationPolicy::new(1024 * 1024, 3),
    )
    .expect("failed to open sink");
    let record = make_record();

    c.bench_function("RotatingFileSink::write", |b| {
        b.iter(|| {
            sink.write(black_box(&record)).expect("write failed");
        });
    });

    sink.flush().expect("flush failed");
}

fn bench_filtered_emit(c: &mut Criterion) {
    let dispatcher = Dispatcher::new();
    dispatcher.install(Pipeline::builder().level(Level::Error).build());
    let logger = dispatcher.logger("bench");

    c.bench_function("Logger::debug (filtered)", |b| {
        b.iter(|| logger.debug(black_box("never written")));
    });
}

criterion_group!(benches, bench_rotating_file_write, bench_filtered_emit);
criterion_main!(benches);
