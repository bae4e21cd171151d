use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::data::render_job::RenderJob;
use crate::controllers::interactive::events::render_event::RenderEvent;
use crate::controllers::interactive::events::render_failure::RenderFailure;
use crate::controllers::interactive::ports::presenter_port::FramePresenterPort;
use crate::core::actions::cancellation::{CancelToken, GenerationToken};
use crate::core::actions::render_raster::render_cancelable;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Instant;

struct SharedState {
    generation: Arc<AtomicU64>,
    last_completed_generation: AtomicU64,
    latest_request: Mutex<Option<(u64, Arc<RenderJob>)>>,
    wake: Condvar,
    shutdown: AtomicBool,
    presenter_port: Arc<dyn FramePresenterPort>,
}

/// Renders submitted jobs on a dedicated worker thread.
///
/// Only the newest job is kept. Submitting bumps the generation, which cancels
/// whatever is in flight; results whose generation is no longer current are
/// dropped before they reach the presenter.
pub struct InteractiveController {
    shared: Arc<SharedState>,
    worker: Option<JoinHandle<()>>,
}

impl InteractiveController {
    pub fn new(presenter_port: Arc<dyn FramePresenterPort>) -> Self {
        let shared = Arc::new(SharedState {
            generation: Arc::new(AtomicU64::new(0)),
            last_completed_generation: AtomicU64::new(0),
            latest_request: Mutex::new(None),
            wake: Condvar::new(),
            shutdown: AtomicBool::new(false),
            presenter_port,
        });

        let worker_shared = Arc::clone(&shared);

        let worker = thread::spawn(move || {
            Self::worker_loop(&worker_shared);
        });

        Self {
            shared,
            worker: Some(worker),
        }
    }

    /// Queues `job`, replacing any job not yet started, and returns its generation.
    pub fn submit_request(&self, job: Arc<RenderJob>) -> u64 {
        let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;

        {
            let mut guard = self.shared.latest_request.lock().unwrap();
            *guard = Some((generation, job));
        }

        self.shared.wake.notify_one();
        log::trace!("submitted render generation {}", generation);

        generation
    }

    pub fn shutdown(&mut self) {
        self.shared.shutdown.store(true, Ordering::Release);
        self.shared.wake.notify_one();

        if let Some(handle) = self.worker.take() {
            let _ = handle.join();
        }
    }

    #[must_use]
    pub fn current_generation(&self) -> u64 {
        self.shared.generation.load(Ordering::Acquire)
    }

    #[must_use]
    pub fn last_completed_generation(&self) -> u64 {
        self.shared
            .last_completed_generation
            .load(Ordering::Acquire)
    }

    fn worker_loop(shared: &Arc<SharedState>) {
        loop {
            let (job_generation, job) = {
                let mut guard = shared.latest_request.lock().unwrap();
                loop {
                    if shared.shutdown.load(Ordering::Acquire) {
                        return;
                    }

                    if let Some(req) = guard.take() {
                        break req;
                    }

                    guard = shared.wake.wait(guard).unwrap();
                }
            };

            let stale = GenerationToken::new(Arc::clone(&shared.generation), job_generation);
            let cancel_token =
                || shared.shutdown.load(Ordering::Relaxed) || stale.is_cancelled();

            let start = Instant::now();
            let result = render_cancelable(&job.request, job.width, job.height, &cancel_token);
            let render_duration = start.elapsed();

            if job_generation != shared.generation.load(Ordering::Acquire) {
                log::trace!("discarding stale render generation {}", job_generation);
                continue;
            }

            let event = match result {
                Ok(image) => {
                    log::debug!(
                        "render generation {} finished in {:?}",
                        job_generation,
                        render_duration
                    );
                    RenderEvent::Frame(FrameData {
                        generation: job_generation,
                        image,
                        render_duration,
                    })
                }
                Err(err) if err.is_cancelled() => continue,
                Err(err) => {
                    log::warn!("render generation {} failed: {}", job_generation, err);
                    RenderEvent::Error(RenderFailure {
                        generation: job_generation,
                        message: err.to_string(),
                    })
                }
            };

            shared.presenter_port.present(event);
            shared
                .last_completed_generation
                .store(job_generation, Ordering::Release);
        }
    }
}

impl Drop for InteractiveController {
    fn drop(&mut self) {
        self.shutdown();
    }
}
