use std::collections::HashMap;
use std::time::{Duration, Instant};

#[derive(Debug, Default, Clone)]
struct Stopwatch {
    start: Option<Instant>,
    elapsed: Duration,
    count: usize,
}

impl Stopwatch {
    fn start(&mut self) {
        self.start = Some(Instant::now());
    }

    fn stop(&mut self) {
        // stopping a stopped watch is a no-op
        if let Some(instant) = self.start.take() {
            self.elapsed += instant.elapsed();
            self.count += 1;
        }
    }
}

/// Named wall-clock timers.  Each key accumulates the time spent
/// between matching `start` / `stop` calls, and counts the calls.
#[derive(Default, Debug, Clone)]
pub struct Timers {
    timers: HashMap<&'static str, Stopwatch>,
}

impl Timers {
    pub fn reset_timer(&mut self, key: &'static str) {
        self.timers.remove(key);
    }

    pub fn reset(&mut self) {
        self.timers.clear();
    }

    pub fn start(&mut self, key: &'static str) {
        self.timers.entry(key).or_default().start();
    }

    pub fn stop(&mut self, key: &'static str) {
        if let Some(t) = self.timers.get_mut(key) {
            t.stop();
        }
    }

    /// Accumulated time for a key, zero if it has never run
    pub fn elapsed(&self, key: &'static str) -> Duration {
        self.timers
            .get(key)
            .map_or(Duration::ZERO, |t| t.elapsed)
    }

    /// Number of completed start / stop pairs for a key
    pub fn count(&self, key: &'static str) -> usize {
        self.timers.get(key).map_or(0, |t| t.count)
    }

    pub fn total_time(&self) -> Duration {
        self.timers
            .values()
            .fold(Duration::ZERO, |acc, t| acc + t.elapsed)
    }

    pub fn print(&self, out: &mut dyn std::io::Write) -> std::io::Result<()> {
        let mut keys: Vec<_> = self.timers.keys().collect();
        keys.sort();
        for key in keys {
            let t = &self.timers[key];
            writeln!(out, "{:<10} : {:?} ({} calls)", key, t.elapsed, t.count)?;
        }
        Ok(())
    }
}

macro_rules! timeit {
    ($timer:expr => $key:literal; $($tt:tt)+) => {

        $timer.start($key);
        $(
            $tt
        )+
        $timer.stop($key);
    }
}
pub(crate) use timeit;

#[test]
fn test_timers() {
    let mut timers = Timers::default();
    assert_eq!(timers.elapsed("factor"), Duration::ZERO);

    let mut x = 0.0;
    timeit! {timers => "factor"; {
        x += 1.0;
    }}
    timeit! {timers => "factor"; {
        x += 1.0;
    }}
    timeit! {timers => "update"; {
        x += 1.0;
    }}
    assert_eq!(x, 3.0);
    assert_eq!(timers.count("factor"), 2);
    assert_eq!(timers.count("update"), 1);
    assert!(timers.total_time() >= timers.elapsed("factor"));

    let mut buf = Vec::new();
    timers.print(&mut buf).unwrap();
    let s = String::from_utf8(buf).unwrap();
    assert!(s.starts_with("factor"));
    assert!(s.contains("(1 calls)"));

    timers.reset_timer("factor");
    assert_eq!(timers.count("factor"), 0);
    timers.reset();
    assert_eq!(timers.total_time(), Duration::ZERO);
}
