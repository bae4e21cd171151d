use crate::controllers::interactive::data::render_job::RenderJob;
use crate::controllers::interactive::ports::draw_request_port::DrawRequestPort;
use crate::controllers::interactive::scheduler::draw_scheduler::DrawScheduler;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Condvar, Mutex};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

type DrawFn<A> = dyn Fn(A) + Send + Sync;

struct SharedState<A> {
    scheduler: Mutex<DrawScheduler<A>>,
    wake: Condvar,
    shutdown: AtomicBool,
    draw: Box<DrawFn<A>>,
}

/// Drives a [`DrawScheduler`] against the wall clock.
///
/// Leading draws run on the caller's thread; a timer thread sleeps until the
/// trailing deadline and flushes the pending arguments.
pub struct ThrottledDrawer<A: Send + 'static> {
    shared: Arc<SharedState<A>>,
    timer: Option<JoinHandle<()>>,
}

impl<A: Send + 'static> ThrottledDrawer<A> {
    pub fn new(interval: Duration, draw: impl Fn(A) + Send + Sync + 'static) -> Self {
        let shared = Arc::new(SharedState {
            scheduler: Mutex::new(DrawScheduler::new(interval)),
            wake: Condvar::new(),
            shutdown: AtomicBool::new(false),
            draw: Box::new(draw),
        });

        let timer_shared = Arc::clone(&shared);
        let timer = thread::spawn(move || Self::timer_loop(&timer_shared));

        Self {
            shared,
            timer: Some(timer),
        }
    }

    pub fn request(&self, args: A) {
        let leading = {
            let mut scheduler = self.shared.scheduler.lock().unwrap();
            scheduler.request(args, Instant::now())
        };

        match leading {
            Some(args) => (self.shared.draw)(args),
            None => self.shared.wake.notify_one(),
        }
    }

    pub fn shutdown(&mut self) {
        self.shared.shutdown.store(true, Ordering::Release);
        self.shared.wake.notify_one();

        if let Some(handle) = self.timer.take() {
            let _ = handle.join();
        }
    }

    fn timer_loop(shared: &Arc<SharedState<A>>) {
        loop {
            let trailing = {
                let mut scheduler = shared.scheduler.lock().unwrap();
                loop {
                    if shared.shutdown.load(Ordering::Acquire) {
                        return;
                    }

                    let now = Instant::now();
                    if let Some(args) = scheduler.poll(now) {
                        break args;
                    }

                    scheduler = match scheduler.deadline() {
                        Some(deadline) => {
                            let timeout = deadline.saturating_duration_since(now);
                            shared.wake.wait_timeout(scheduler, timeout).unwrap().0
                        }
                        None => shared.wake.wait(scheduler).unwrap(),
                    };
                }
            };

            (shared.draw)(trailing);
        }
    }
}

impl<A: Send + 'static> Drop for ThrottledDrawer<A> {
    fn drop(&mut self) {
        self.shutdown();
    }
}

impl DrawRequestPort for ThrottledDrawer<RenderJob> {
    fn request_draw(&self, job: RenderJob) {
        self.request(job);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recording_drawer(interval: Duration) -> (Arc<Mutex<Vec<u32>>>, ThrottledDrawer<u32>) {
        let drawn = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&drawn);
        let drawer = ThrottledDrawer::new(interval, move |args| sink.lock().unwrap().push(args));

        (drawn, drawer)
    }

    #[test]
    fn leading_draw_runs_synchronously() {
        let (drawn, mut drawer) = recording_drawer(Duration::from_millis(200));

        drawer.request(7);

        assert_eq!(*drawn.lock().unwrap(), vec![7]);
        drawer.shutdown();
    }

    #[test]
    fn burst_collapses_to_leading_and_trailing_draw() {
        let (drawn, mut drawer) = recording_drawer(Duration::from_millis(100));

        for args in 1..=10 {
            drawer.request(args);
        }
        thread::sleep(Duration::from_millis(400));

        assert_eq!(*drawn.lock().unwrap(), vec![1, 10]);
        drawer.shutdown();
    }

    #[test]
    fn shutdown_drops_pending_draw() {
        let (drawn, mut drawer) = recording_drawer(Duration::from_secs(5));

        drawer.request(1);
        drawer.request(2);
        drawer.shutdown();

        assert_eq!(*drawn.lock().unwrap(), vec![1]);
    }
}
