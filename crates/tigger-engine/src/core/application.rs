use anyhow::{Context, Result};

use crate::events::{Event, EventType};
use crate::logging::{init_logging, LoggingConfig};
use crate::time::FrameClock;
use crate::window::{PlatformWindow, Window, WindowProps};

use super::app::{App, AppCtx};

/// Owns one window and one [`App`] and runs the main loop.
pub struct Application<A: App, W: PlatformWindow = Window> {
    app: A,
    ctx: AppCtx,
    clock: FrameClock,
    /// `None` once disposed.
    window: Option<W>,
}

impl<A: App> Application<A, Window> {
    /// Initializes logging, opens a window described by `props` and attaches `app`.
    pub fn new(props: WindowProps, app: A) -> Result<Self> {
        init_logging(LoggingConfig::default());
        let window = Window::new(&props).context("failed to create application window")?;
        Self::with_window(window, app)
    }
}

impl<A: App, W: PlatformWindow> Application<A, W> {
    /// Attaches `app` to an existing window.
    pub fn with_window(window: W, mut app: A) -> Result<Self> {
        let mut ctx = AppCtx::new(window.gl());
        app.on_attach(&mut ctx).context("application failed to attach")?;

        Ok(Self {
            app,
            ctx,
            clock: FrameClock::new(),
            window: Some(window),
        })
    }

    pub fn app(&self) -> &A {
        &self.app
    }

    /// Requests shutdown at the end of the current iteration.
    pub fn close(&mut self) {
        self.ctx.close();
    }

    /// Runs until the window goes away or a close is requested.
    pub fn run(&mut self) {
        match self.window.as_mut() {
            Some(window) => window.make_current(),
            None => {
                log::warn!("run() called on a disposed application");
                return;
            }
        }

        log::info!("application running");
        let mut was_minimized = false;

        while let Some(window) = self.window.as_mut() {
            if !window.exists() {
                break;
            }

            if window.minimized() {
                was_minimized = true;
            } else {
                if was_minimized {
                    // Time spent minimized is not simulated.
                    self.clock.reset();
                    was_minimized = false;
                }

                let (app, ctx) = (&mut self.app, &mut self.ctx);
                window.on_update(&mut |event: &mut Event| dispatch_event(app, ctx, event));

                let time = self.clock.tick();
                self.app.on_update(&mut self.ctx, time);
            }

            if window.exists() {
                window.swap_buffers();
            }

            if self.ctx.is_close_requested() {
                break;
            }
        }

        self.dispose();
        log::info!("application stopped");
    }

    /// Detaches the app and destroys the window. Later calls do nothing.
    fn dispose(&mut self) {
        if let Some(window) = self.window.take() {
            self.app.on_detach(&mut self.ctx);
            drop(window);
            log::debug!("window disposed");
        }
    }
}

impl<A: App, W: PlatformWindow> Drop for Application<A, W> {
    fn drop(&mut self) {
        self.dispose();
    }
}

fn dispatch_event<A: App>(app: &mut A, ctx: &mut AppCtx, event: &mut Event) {
    if event.event_type() == EventType::MouseMoved {
        log::trace!("{event}");
    } else {
        log::info!("{event}");
    }
    app.on_event(ctx, event);
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    use super::*;
    use crate::events::{EventDispatcher, WindowCloseEvent};
    use crate::gl::testing::RecordingGl;
    use crate::gl::Gl;
    use crate::time::FrameTime;

    type Journal = Rc<RefCell<Vec<String>>>;

    struct FakeWindow {
        gl: Gl,
        journal: Journal,
        exists: bool,
        minimized: bool,
        pending: Vec<Event>,
        /// Window vanishes after this many swaps.
        lifetime: Option<usize>,
        /// A minimized window is restored after this many swaps.
        restore_after: Option<usize>,
        /// Wall time each swap takes while minimized.
        minimized_swap_delay: Duration,
        swaps: usize,
    }

    impl FakeWindow {
        fn new(journal: &Journal) -> Self {
            Self {
                gl: RecordingGl::new().as_gl(),
                journal: journal.clone(),
                exists: true,
                minimized: false,
                pending: Vec::new(),
                lifetime: None,
                restore_after: None,
                minimized_swap_delay: Duration::ZERO,
                swaps: 0,
            }
        }

        fn log(&self, entry: &str) {
            self.journal.borrow_mut().push(entry.to_owned());
        }
    }

    impl PlatformWindow for FakeWindow {
        fn exists(&self) -> bool {
            self.exists
        }

        fn minimized(&self) -> bool {
            self.minimized
        }

        fn on_update(&mut self, callback: &mut dyn FnMut(&mut Event)) {
            self.log("pump");
            for mut event in std::mem::take(&mut self.pending) {
                if event.event_type() == EventType::WindowClose {
                    self.exists = false;
                }
                callback(&mut event);
            }
        }

        fn swap_buffers(&mut self) {
            self.log("swap");
            self.swaps += 1;
            if self.minimized {
                std::thread::sleep(self.minimized_swap_delay);
                if self.restore_after == Some(self.swaps) {
                    self.minimized = false;
                }
            }
            if self.lifetime == Some(self.swaps) {
                self.exists = false;
            }
        }

        fn make_current(&mut self) {
            self.log("make_current");
        }

        fn gl(&self) -> Gl {
            self.gl.clone()
        }
    }

    impl Drop for FakeWindow {
        fn drop(&mut self) {
            self.log("dispose");
        }
    }

    struct TestApp {
        journal: Journal,
        close_on_frame: Option<u64>,
        dts: Vec<f32>,
    }

    impl TestApp {
        fn new(journal: &Journal) -> Self {
            Self {
                journal: journal.clone(),
                close_on_frame: None,
                dts: Vec::new(),
            }
        }
    }

    impl App for TestApp {
        fn on_attach(&mut self, _ctx: &mut AppCtx) -> Result<()> {
            self.journal.borrow_mut().push("attach".into());
            Ok(())
        }

        fn on_event(&mut self, ctx: &mut AppCtx, event: &mut Event) {
            self.journal.borrow_mut().push(format!("event {}", event.name()));
            let mut dispatcher = EventDispatcher::new(event);
            dispatcher.dispatch::<WindowCloseEvent>(|_| {
                ctx.close();
                true
            });
        }

        fn on_update(&mut self, ctx: &mut AppCtx, time: FrameTime) {
            self.journal.borrow_mut().push(format!("update {}", time.frame_index));
            self.dts.push(time.dt);
            if self.close_on_frame == Some(time.frame_index) {
                ctx.close();
            }
        }

        fn on_detach(&mut self, _ctx: &mut AppCtx) {
            self.journal.borrow_mut().push("detach".into());
        }
    }

    fn count(journal: &Journal, entry: &str) -> usize {
        journal.borrow().iter().filter(|e| *e == entry).count()
    }

    #[test]
    fn close_finishes_current_iteration_then_disposes_once() {
        let journal = Journal::default();
        let mut app = TestApp::new(&journal);
        app.close_on_frame = Some(1);

        let mut application = Application::with_window(FakeWindow::new(&journal), app).unwrap();
        application.run();
        drop(application);

        assert_eq!(
            *journal.borrow(),
            [
                "attach",
                "make_current",
                "pump",
                "update 0",
                "swap",
                "pump",
                "update 1",
                "swap",
                "detach",
                "dispose",
            ]
        );
    }

    #[test]
    fn window_close_event_stops_the_loop() {
        let journal = Journal::default();
        let mut window = FakeWindow::new(&journal);
        window.pending.push(Event::new(WindowCloseEvent));

        let mut application = Application::with_window(window, TestApp::new(&journal)).unwrap();
        application.run();

        assert_eq!(count(&journal, "event WindowCloseEvent"), 1);
        assert_eq!(count(&journal, "update 0"), 1);
        // The window is gone, so nothing is presented.
        assert_eq!(count(&journal, "swap"), 0);
        assert_eq!(count(&journal, "dispose"), 1);
    }

    #[test]
    fn minimized_window_skips_pump_and_update() {
        let journal = Journal::default();
        let mut window = FakeWindow::new(&journal);
        window.minimized = true;
        window.lifetime = Some(3);

        let mut application = Application::with_window(window, TestApp::new(&journal)).unwrap();
        application.run();

        assert_eq!(count(&journal, "pump"), 0);
        assert!(!journal.borrow().iter().any(|e| e.starts_with("update")));
        assert_eq!(count(&journal, "swap"), 3);
        assert_eq!(count(&journal, "detach"), 1);
        assert_eq!(count(&journal, "dispose"), 1);
    }

    #[test]
    fn time_spent_minimized_is_not_reported_as_dt() {
        let journal = Journal::default();
        let mut window = FakeWindow::new(&journal);
        window.minimized = true;
        window.restore_after = Some(3);
        window.minimized_swap_delay = Duration::from_millis(30);

        let mut app = TestApp::new(&journal);
        app.close_on_frame = Some(0);

        let mut application = Application::with_window(window, app).unwrap();
        application.run();

        assert_eq!(count(&journal, "swap"), 4);
        let dts = &application.app().dts;
        assert_eq!(dts.len(), 1);
        // Three minimized swaps took at least 90ms.
        assert!(dts[0] < 0.05, "dt {} includes minimized time", dts[0]);
    }

    #[test]
    fn close_before_run_still_runs_one_iteration() {
        let journal = Journal::default();
        let mut application =
            Application::with_window(FakeWindow::new(&journal), TestApp::new(&journal)).unwrap();

        application.close();
        application.run();
        application.run();

        assert_eq!(count(&journal, "update 0"), 1);
        assert_eq!(count(&journal, "dispose"), 1);
        assert_eq!(count(&journal, "make_current"), 1);
    }

    #[test]
    fn failed_attach_is_reported() {
        struct Broken;

        impl App for Broken {
            fn on_attach(&mut self, _ctx: &mut AppCtx) -> Result<()> {
                anyhow::bail!("shader missing")
            }

            fn on_update(&mut self, _ctx: &mut AppCtx, _time: FrameTime) {}
        }

        let journal = Journal::default();
        let err = Application::with_window(FakeWindow::new(&journal), Broken)
            .err()
            .expect("attach must fail");

        assert!(format!("{err:#}").contains("shader missing"));
        // The window was handed over and dropped with the error.
        assert_eq!(count(&journal, "dispose"), 1);
    }
}
