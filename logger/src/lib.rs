//! Feature-gated logging for the decoder.
//!
//! With the `logger` feature disabled every call compiles down to a no-op,
//! so the decode hot path carries no logging cost in release builds.

#[cfg(feature = "logger")]
use chrono::Utc;
#[cfg(feature = "logger")]
use once_cell::sync::OnceCell;
#[cfg(feature = "logger")]
use std::{
    fs::File,
    io::{self, BufWriter, Write},
    sync::Mutex,
    time::Instant,
};

#[cfg(feature = "logger")]
static LOGGER: OnceCell<Logger> = OnceCell::new();

#[cfg(feature = "logger")]
struct Sink {
    out: Box<dyn Write + Send>,
    started: Instant,
}

#[cfg(feature = "logger")]
impl Sink {
    fn new(kind: LogKind) -> Self {
        let started = Instant::now();
        match kind {
            LogKind::STDOUT => Self {
                out: Box::new(io::stdout()),
                started,
            },
            LogKind::FILE => {
                let filename = format!("armdec-{}.log", Utc::now().timestamp());
                let path = std::env::temp_dir().join(filename);
                println!("Logging to file: {path:?}");
                let file = File::create(path).unwrap();
                Self {
                    out: Box::new(BufWriter::new(file)),
                    started,
                }
            }
        }
    }

    fn log<T>(&mut self, data: T)
    where
        T: std::fmt::Display,
    {
        let elapsed = self.started.elapsed();
        let seconds = elapsed.as_secs();
        let hours = seconds / 3600;
        let minutes = (seconds / 60) % 60;
        let seconds = seconds % 60;
        let millis = elapsed.subsec_millis();

        writeln!(
            self.out,
            "[{hours:02}:{minutes:02}:{seconds:02}.{millis:03}] {data}"
        )
        .unwrap();
    }

    fn flush(&mut self) {
        self.out.flush().ok();
    }
}

/// Where log lines end up: the console or a timestamped file.
#[derive(Copy, Clone, PartialEq, Eq)]
pub enum LogKind {
    /// Log to stdout, the default choice.
    STDOUT,

    /// Log to /tmp/armdec-<timestamp>.log
    FILE,
}

#[cfg(feature = "logger")]
struct Logger {
    sink: Mutex<Sink>,
}

#[cfg(feature = "logger")]
impl Logger {
    fn new(kind: LogKind) -> Self {
        Self {
            sink: Mutex::new(Sink::new(kind)),
        }
    }

    fn log<T>(&self, data: T)
    where
        T: std::fmt::Display,
    {
        if let Ok(ref mut sink) = self.sink.lock() {
            sink.log(data);
        }
    }

    fn flush(&self) {
        if let Ok(ref mut sink) = self.sink.lock() {
            sink.flush();
        }
    }
}

#[cfg(feature = "logger")]
pub fn init_logger(kind: LogKind) {
    LOGGER.set(Logger::new(kind)).ok();
}

pub fn log<T>(data: T)
where
    T: std::fmt::Display,
{
    let _ = data;
    #[cfg(feature = "logger")]
    if let Some(logger) = LOGGER.get() {
        logger.log(data)
    }
}

/// Forces buffered log lines out to the sink (relevant for `LogKind::FILE`,
/// where lines sit in a `BufWriter` until it fills).
pub fn flush() {
    #[cfg(feature = "logger")]
    if let Some(logger) = LOGGER.get() {
        logger.flush()
    }
}

#[cfg(feature = "logger")]
#[cfg(test)]
mod tests {
    use std::fs;

    use crate::{LogKind, init_logger, log};

    #[test]
    fn logger_file() {
        init_logger(LogKind::FILE);
        log("ok".to_string());
        crate::flush();
        let dir = std::env::temp_dir();
        let files = fs::read_dir(dir).unwrap();
        for f in files.flatten() {
            let p = f.path();
            if let Some(ext) = p.extension() {
                let s = p.to_str().unwrap();
                if ext == "log" && s.contains("armdec") {
                    let content = fs::read_to_string(p.clone()).unwrap();
                    fs::remove_file(p).unwrap();
                    assert_eq!(content, "[00:00:00.000] ok\n".to_string());
                }
            }
        }
    }
}
