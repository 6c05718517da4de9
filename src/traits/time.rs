use std::time::Duration;

/// Abstraction over blocking delays.
/// Implementations: SystemDelay (production), MockDelay (testing).
pub trait Delay {
    /// Block for `ms` milliseconds.
    fn delay_ms(&mut self, ms: u32);
}

impl<T: Delay + ?Sized> Delay for &mut T {
    fn delay_ms(&mut self, ms: u32) {
        (**self).delay_ms(ms)
    }
}

/// Delay backed by `std::thread::sleep`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemDelay;

impl SystemDelay {
    pub fn new() -> Self {
        Self
    }
}

impl Delay for SystemDelay {
    fn delay_ms(&mut self, ms: u32) {
        std::thread::sleep(Duration::from_millis(u64::from(ms)));
    }
}

/// Mock delay for deterministic testing. Returns immediately and keeps a
/// log of every request.
#[derive(Debug, Clone, Default)]
pub struct MockDelay {
    elapsed_ms: u64,
    calls: Vec<u32>,
}

impl MockDelay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sum of all requested delays.
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    /// Every requested delay, in order.
    pub fn calls(&self) -> &[u32] {
        &self.calls
    }
}

impl Delay for MockDelay {
    fn delay_ms(&mut self, ms: u32) {
        self.elapsed_ms += u64::from(ms);
        self.calls.push(ms);
    }
}
