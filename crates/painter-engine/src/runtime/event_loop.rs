use std::any::Any;
use std::mem;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use anyhow::{Context, Result, anyhow};

use crate::ops::Operation;
use crate::queue::OperationQueue;
use crate::state::DrawState;
use crate::target::{Backend, Receiver, RenderTarget};

use super::LoopConfig;

/// Queue entry. The stop request travels through the queue like any other
/// job so it is ordered after everything posted before it.
enum Job {
    Run(Operation),
    Stop,
}

/// Counters reported by the worker when it exits.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct LoopStats {
    /// Operations executed (the internal stop request is not counted).
    pub executed: u64,
    /// Frames handed to the receiver.
    pub frames: u64,
}

/// Cloneable posting handle for producer threads.
#[derive(Clone)]
pub struct Poster {
    queue: Arc<OperationQueue<Job>>,
}

impl Poster {
    /// Enqueues `op` for the worker. Never blocks on the worker.
    ///
    /// Posting does not report whether the worker is alive. After an
    /// operation panics, later posts accumulate unexecuted until
    /// `stop_and_wait` (which returns the panic) or drop of the `EventLoop`
    /// releases the queue.
    #[inline]
    pub fn post(&self, op: Operation) {
        self.queue.push(Job::Run(op));
    }

    /// Number of jobs waiting to be pulled.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }
}

/// Handle to a running event loop.
///
/// Dropping the handle without `stop_and_wait` still stops and joins the
/// worker; a worker panic is then logged instead of returned.
pub struct EventLoop {
    poster: Poster,
    worker: Option<JoinHandle<LoopStats>>,
}

impl EventLoop {
    /// Allocates the front/back targets and starts the worker thread.
    pub fn start<B, R>(backend: &mut B, receiver: R, config: LoopConfig) -> Result<Self>
    where
        B: Backend,
        B::Target: Send + 'static,
        R: Receiver<B::Target> + Send + 'static,
    {
        let building = backend
            .new_target(config.size)
            .context("failed to allocate building target")?;
        let last_shown = backend
            .new_target(config.size)
            .context("failed to allocate presented target")?;

        let queue = Arc::new(OperationQueue::new());
        let worker = Worker {
            queue: Arc::clone(&queue),
            building,
            last_shown,
            state: DrawState::new(),
            receiver,
            stats: LoopStats::default(),
        };

        let handle = thread::Builder::new()
            .name(config.thread_name.clone())
            .spawn(move || worker.run())
            .with_context(|| format!("failed to spawn worker thread {:?}", config.thread_name))?;

        log::info!(
            "event loop started ({}x{}, thread {:?})",
            config.size.width,
            config.size.height,
            config.thread_name
        );

        Ok(Self {
            poster: Poster { queue },
            worker: Some(handle),
        })
    }

    /// Enqueues `op`. Safe to call while other threads post through a `Poster`.
    #[inline]
    pub fn post(&self, op: Operation) {
        self.poster.post(op);
    }

    /// Returns a handle producers can move to other threads.
    pub fn poster(&self) -> Poster {
        self.poster.clone()
    }

    /// Requests a stop and blocks until every operation posted before the
    /// request has run and the worker has exited.
    ///
    /// There is no timeout. Operations that other producers post after the
    /// request still run as long as the worker has not yet seen the queue
    /// empty, so a producer that never stops postpones shutdown forever.
    /// Whatever arrives after the worker exits is dropped with the queue.
    pub fn stop_and_wait(mut self) -> Result<LoopStats> {
        let worker = self
            .worker
            .take()
            .context("event loop worker already joined")?;
        self.poster.queue.push(Job::Stop);

        let stats = worker
            .join()
            .map_err(|payload| anyhow!("event loop worker panicked: {}", panic_message(&*payload)))?;

        log::info!(
            "event loop stopped: {} operations, {} frames",
            stats.executed,
            stats.frames
        );
        Ok(stats)
    }
}

impl Drop for EventLoop {
    fn drop(&mut self) {
        let Some(worker) = self.worker.take() else {
            return;
        };
        self.poster.queue.push(Job::Stop);
        if let Err(payload) = worker.join() {
            log::error!("event loop worker panicked: {}", panic_message(&*payload));
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("<non-string panic payload>")
}

// ── Worker ────────────────────────────────────────────────────────────────

/// Everything the worker thread owns exclusively.
struct Worker<T, R> {
    queue: Arc<OperationQueue<Job>>,
    /// Target currently being painted.
    building: T,
    /// Target most recently handed to the receiver.
    last_shown: T,
    state: DrawState,
    receiver: R,
    stats: LoopStats,
}

impl<T, R> Worker<T, R>
where
    T: RenderTarget,
    R: Receiver<T>,
{
    fn run(mut self) -> LoopStats {
        let mut stop_requested = false;

        // Running until a stop request is pulled, then draining until empty.
        while !stop_requested || !self.queue.is_empty() {
            match self.queue.pull() {
                Job::Stop => {
                    log::debug!("stop requested, draining {} queued jobs", self.queue.len());
                    stop_requested = true;
                }
                Job::Run(op) => self.execute(op),
            }
        }

        self.stats
    }

    fn execute(&mut self, op: Operation) {
        log::trace!("executing {}", op.name());
        let status = op.execute(&mut self.building, &mut self.state);
        self.stats.executed += 1;

        if status.is_complete() {
            self.receiver.update(&self.building);
            mem::swap(&mut self.building, &mut self.last_shown);
            self.stats.frames += 1;
            log::debug!("presented frame {}", self.stats.frames);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use crate::coords::{Point, RelativePoint, Size};
    use crate::ops::{Figure, Fill};
    use crate::paint::Color;
    use crate::state::StateTweaker;
    use crate::target::{Canvas, CanvasBackend};

    type Frames = Arc<Mutex<Vec<Canvas>>>;

    fn start() -> (EventLoop, Frames) {
        let frames: Frames = Arc::default();
        let sink = Arc::clone(&frames);
        let event_loop = EventLoop::start(
            &mut CanvasBackend,
            move |canvas: &Canvas| sink.lock().unwrap().push(canvas.clone()),
            LoopConfig::default(),
        )
        .unwrap();
        (event_loop, frames)
    }

    fn record(log: &Arc<Mutex<Vec<u32>>>, id: u32) -> Operation {
        let log = Arc::clone(log);
        Operation::func(move |_| log.lock().unwrap().push(id))
    }

    fn pt(x: f64, y: f64) -> RelativePoint {
        RelativePoint::new(x, y)
    }

    #[test]
    fn single_producer_order_is_preserved() {
        let (event_loop, frames) = start();
        let log = Arc::new(Mutex::new(Vec::new()));

        for id in [1, 2, 3] {
            event_loop.post(record(&log, id));
        }
        let stats = event_loop.stop_and_wait().unwrap();

        assert_eq!(*log.lock().unwrap(), vec![1, 2, 3]);
        assert_eq!(stats, LoopStats { executed: 3, frames: 0 });
        assert!(frames.lock().unwrap().is_empty());
    }

    #[test]
    fn concurrent_ticks_are_all_executed_in_producer_order() {
        let (event_loop, _frames) = start();
        let log: Arc<Mutex<Vec<(usize, usize)>>> = Arc::default();

        let producers: Vec<_> = (0..2)
            .map(|producer| {
                let poster = event_loop.poster();
                let log = Arc::clone(&log);
                thread::spawn(move || {
                    for tick in 0..50 {
                        let log = Arc::clone(&log);
                        poster.post(Operation::func(move |_| {
                            log.lock().unwrap().push((producer, tick))
                        }));
                    }
                })
            })
            .collect();
        for producer in producers {
            producer.join().unwrap();
        }
        let stats = event_loop.stop_and_wait().unwrap();

        let log = log.lock().unwrap();
        assert_eq!(log.len(), 100);
        assert_eq!(stats.executed, 100);
        for producer in 0..2 {
            let ticks: Vec<_> = log.iter().filter(|(p, _)| *p == producer).map(|(_, t)| *t).collect();
            assert_eq!(ticks, (0..50).collect::<Vec<_>>());
        }
    }

    #[test]
    fn frame_ready_presents_once_per_marker() {
        let (event_loop, frames) = start();

        event_loop.post(Operation::Fill(Fill::new(Color::green())));
        event_loop.post(Operation::FrameReady);
        event_loop.post(Operation::Fill(Fill::new(Color::white())));
        event_loop.post(Operation::FrameReady);
        let stats = event_loop.stop_and_wait().unwrap();

        let frames = frames.lock().unwrap();
        assert_eq!(stats, LoopStats { executed: 4, frames: 2 });
        assert_eq!(frames.len(), 2);
        assert!(frames[0].is_filled_with(Color::green()));
        assert!(frames[1].is_filled_with(Color::white()));
    }

    #[test]
    fn targets_swap_after_presentation() {
        let (event_loop, frames) = start();

        event_loop.post(Operation::Fill(Fill::new(Color::green())));
        event_loop.post(Operation::FrameReady);
        // Nothing repaints the back buffer, so the next frame is the fresh one.
        event_loop.post(Operation::FrameReady);
        event_loop.stop_and_wait().unwrap();

        let frames = frames.lock().unwrap();
        assert!(frames[0].is_filled_with(Color::green()));
        assert!(frames[1].is_filled_with(Color::transparent()));
    }

    #[test]
    fn white_figure_update_scenario() {
        let (event_loop, frames) = start();

        event_loop.post(StateTweaker::Fill(Fill::new(Color::white())).into());
        event_loop.post(StateTweaker::FigureAdd(Figure::new(pt(0.5, 0.5))).into());
        event_loop.post(Operation::FrameReady);
        let stats = event_loop.stop_and_wait().unwrap();

        assert_eq!(stats, LoopStats { executed: 3, frames: 1 });
        let frames = frames.lock().unwrap();
        let frame = &frames[0];
        assert_eq!(frame.pixel(Point::new(200, 180)), Some(Color::figure()));
        assert_eq!(frame.pixel(Point::new(200, 230)), Some(Color::figure()));
        assert_eq!(frame.pixel(Point::new(10, 10)), Some(Color::white()));
        assert_eq!(frame.pixel(Point::new(160, 230)), Some(Color::white()));
        assert_eq!(
            frame.count(Color::white()) + frame.count(Color::figure()),
            Size::new(400, 400).area()
        );
    }

    #[test]
    fn reset_update_scenario_is_all_black() {
        let (event_loop, frames) = start();

        event_loop.post(StateTweaker::FigureAdd(Figure::new(pt(0.5, 0.5))).into());
        event_loop.post(StateTweaker::Reset.into());
        event_loop.post(Operation::FrameReady);
        event_loop.stop_and_wait().unwrap();

        let frames = frames.lock().unwrap();
        assert_eq!(frames.len(), 1);
        assert!(frames[0].is_filled_with(Color::black()));
    }

    #[test]
    fn each_frame_reflects_all_prior_tweaks() {
        let (event_loop, frames) = start();

        event_loop.post(StateTweaker::Fill(Fill::new(Color::green())).into());
        event_loop.post(Operation::FrameReady);
        event_loop.post(StateTweaker::FigureAdd(Figure::new(pt(0.25, 0.25))).into());
        event_loop.post(Operation::FrameReady);
        event_loop.stop_and_wait().unwrap();

        let frames = frames.lock().unwrap();
        assert_eq!(frames.len(), 2);
        assert!(frames[0].is_filled_with(Color::green()));
        assert_eq!(frames[1].pixel(Point::new(5, 5)), Some(Color::green()));
        assert_eq!(frames[1].pixel(Point::new(100, 90)), Some(Color::figure()));
    }

    #[test]
    fn stop_drains_everything_posted_before_it() {
        let (event_loop, _frames) = start();
        let log = Arc::new(Mutex::new(Vec::new()));

        event_loop.post(Operation::func(|_| thread::sleep(std::time::Duration::from_millis(50))));
        for id in 0..200 {
            event_loop.post(record(&log, id));
        }
        let stats = event_loop.stop_and_wait().unwrap();

        assert_eq!(stats.executed, 201);
        assert_eq!(*log.lock().unwrap(), (0..200).collect::<Vec<_>>());
    }

    #[test]
    fn worker_panic_surfaces_on_stop() {
        let (event_loop, _frames) = start();
        event_loop.post(Operation::func(|_| panic!("bad operation")));

        let err = event_loop.stop_and_wait().unwrap_err();
        assert!(err.to_string().contains("bad operation"), "{err}");
    }

    #[test]
    fn posts_after_worker_panic_stay_queued() {
        let (event_loop, frames) = start();
        let poster = event_loop.poster();
        poster.post(Operation::func(|_| panic!("bad operation")));

        // Once the panicking job is pulled, the worker never pulls again.
        while poster.pending() > 0 {
            thread::yield_now();
        }
        for _ in 0..3 {
            poster.post(Operation::FrameReady);
        }
        assert_eq!(poster.pending(), 3);

        assert!(event_loop.stop_and_wait().is_err());
        assert!(frames.lock().unwrap().is_empty());
    }

    #[test]
    fn drop_stops_and_joins_worker() {
        let (event_loop, frames) = start();
        event_loop.post(Operation::FrameReady);
        drop(event_loop);
        assert_eq!(frames.lock().unwrap().len(), 1);
    }

    #[test]
    fn start_fails_on_empty_size() {
        let result = EventLoop::start(
            &mut CanvasBackend,
            |_: &Canvas| {},
            LoopConfig::default().with_size(0, 0),
        );
        assert!(result.is_err());
    }

    #[test]
    fn receiver_runs_on_named_worker_thread() {
        let names: Arc<Mutex<Vec<String>>> = Arc::default();
        let sink = Arc::clone(&names);
        let event_loop = EventLoop::start(
            &mut CanvasBackend,
            move |_: &Canvas| {
                let name = thread::current().name().unwrap_or_default().to_string();
                sink.lock().unwrap().push(name);
            },
            LoopConfig::default().with_thread_name("painter-test").with_size(16, 16),
        )
        .unwrap();

        event_loop.post(Operation::FrameReady);
        event_loop.stop_and_wait().unwrap();
        assert_eq!(*names.lock().unwrap(), vec!["painter-test".to_string()]);
    }
}
