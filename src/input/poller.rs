use crate::config::MapperConfig;
use crate::input::diagnostics::DiagnosticSink;
use crate::input::host::{InputHost, Viewport};
use crate::input::mapper::PointerMapper;
use crate::input::types::PointerState;
use parking_lot::Mutex as ParkingMutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Pointer state handle shared between the sampling thread and its readers
#[derive(Debug, Clone, Default)]
pub struct SharedPointer {
    inner: Arc<ParkingMutex<PointerState>>,
}

impl SharedPointer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the state as of the last completed tick
    pub fn snapshot(&self) -> PointerState {
        *self.inner.lock()
    }

    /// Queue a pointer move for the next tick
    pub fn request_warp(&self, x: i32, y: i32) {
        self.inner.lock().request_warp(x, y);
    }

    /// Run one tick against the shared state
    pub fn update<S, H, V>(&self, mapper: &mut PointerMapper<S>, host: &mut H, viewport: &V)
    where
        S: DiagnosticSink,
        H: InputHost + ?Sized,
        V: Viewport + ?Sized,
    {
        let mut state = self.inner.lock();
        mapper.update(&mut *state, host, viewport);
    }
}

/// Start the pointer sampling thread.
///
/// The thread samples once per `config.poll_interval()` until `is_running`
/// is cleared, then exits. Each tick holds the state lock only while mapping.
pub fn start_pointer_polling<H, V, S>(
    is_running: Arc<AtomicBool>,
    shared: SharedPointer,
    mut host: H,
    viewport: V,
    config: &MapperConfig,
    sink: S,
) -> std::thread::JoinHandle<()>
where
    H: InputHost + Send + 'static,
    V: Viewport + Send + 'static,
    S: DiagnosticSink + Send + 'static,
{
    let poll_interval = config.poll_interval();
    let mut mapper = PointerMapper::new(config, sink);

    std::thread::spawn(move || {
        tracing::info!(
            "Pointer polling started (poll_interval={:?}, screen={})",
            poll_interval,
            mapper.screen()
        );

        let mut ticks: u64 = 0;
        while is_running.load(Ordering::Relaxed) {
            let loop_start = Instant::now();

            shared.update(&mut mapper, &mut host, &viewport);
            ticks += 1;

            let elapsed = loop_start.elapsed();
            if elapsed < poll_interval {
                std::thread::sleep(poll_interval - elapsed);
            }
        }

        tracing::info!("Pointer polling stopped (ticks={})", ticks);
    })
}
