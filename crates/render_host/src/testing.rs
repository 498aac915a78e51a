//! Test doubles for the window and pipeline seams

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::config::WindowConfig;
use crate::foundation::math::Mat4d;
use crate::render::{ColoredVertex, MatrixMode, Pipeline};
use crate::window::{HostEvent, WindowBackend, WindowError, WindowResult, WindowSystem};

/// Shared, ordered record of lifecycle events across mocks
#[derive(Debug, Clone, Default)]
pub(crate) struct Journal(Rc<RefCell<Vec<String>>>);

impl Journal {
    pub(crate) fn record(&self, entry: &str) {
        self.0.borrow_mut().push(entry.to_string());
    }

    pub(crate) fn entries(&self) -> Vec<String> {
        self.0.borrow().clone()
    }

    pub(crate) fn count(&self, entry: &str) -> usize {
        self.0.borrow().iter().filter(|e| *e == entry).count()
    }
}

/// Subsystem whose windows replay scripted event batches
pub(crate) struct MockSystem {
    journal: Journal,
    batches: Vec<Vec<HostEvent>>,
    close_on_poll: Option<usize>,
    framebuffer: Option<(i32, i32)>,
    fail_window: bool,
    fail_pipeline: bool,
}

impl MockSystem {
    pub(crate) fn new(journal: &Journal) -> Self {
        Self {
            journal: journal.clone(),
            batches: Vec::new(),
            close_on_poll: None,
            framebuffer: None,
            fail_window: false,
            fail_pipeline: false,
        }
    }

    /// One batch is returned per poll; polls past the end return nothing
    pub(crate) fn with_batches(mut self, batches: Vec<Vec<HostEvent>>) -> Self {
        self.batches = batches;
        self
    }

    /// Set the close flag during the given poll (1-based), as the OS close
    /// button would
    pub(crate) fn close_on_poll(mut self, poll: usize) -> Self {
        self.close_on_poll = Some(poll);
        self
    }

    /// Framebuffer size differing from the requested window size
    pub(crate) fn with_framebuffer(mut self, width: i32, height: i32) -> Self {
        self.framebuffer = Some((width, height));
        self
    }

    pub(crate) fn fail_window(mut self) -> Self {
        self.fail_window = true;
        self
    }

    pub(crate) fn fail_pipeline(mut self) -> Self {
        self.fail_pipeline = true;
        self
    }
}

impl WindowSystem for MockSystem {
    type Window = MockWindow;

    fn create_window(&mut self, config: &WindowConfig) -> WindowResult<MockWindow> {
        if self.fail_window {
            return Err(WindowError::CreationFailed("mock".to_string()));
        }

        self.journal.record("window created");
        #[allow(clippy::cast_possible_wrap)]
        let framebuffer = self
            .framebuffer
            .unwrap_or((config.width as i32, config.height as i32));

        Ok(MockWindow {
            journal: Some(self.journal.clone()),
            batches: std::mem::take(&mut self.batches).into(),
            close_on_poll: self.close_on_poll,
            polls: 0,
            should_close: false,
            framebuffer,
            fail_pipeline: self.fail_pipeline,
        })
    }
}

impl Drop for MockSystem {
    fn drop(&mut self) {
        self.journal.record("system dropped");
    }
}

pub(crate) struct MockWindow {
    journal: Option<Journal>,
    batches: VecDeque<Vec<HostEvent>>,
    close_on_poll: Option<usize>,
    polls: usize,
    should_close: bool,
    framebuffer: (i32, i32),
    fail_pipeline: bool,
}

impl MockWindow {
    /// A window not tied to any subsystem, for notifier tests
    pub(crate) fn detached() -> Self {
        Self {
            journal: None,
            batches: VecDeque::new(),
            close_on_poll: None,
            polls: 0,
            should_close: false,
            framebuffer: (800, 600),
            fail_pipeline: false,
        }
    }

    fn record(&self, entry: &str) {
        if let Some(journal) = &self.journal {
            journal.record(entry);
        }
    }
}

impl WindowBackend for MockWindow {
    type Pipeline = RecordingPipeline;

    fn should_close(&self) -> bool {
        self.should_close
    }

    fn set_should_close(&mut self, should_close: bool) {
        self.should_close = should_close;
    }

    fn poll_events(&mut self) -> Vec<HostEvent> {
        self.polls += 1;
        self.record("poll");
        if self.close_on_poll == Some(self.polls) {
            self.should_close = true;
        }
        self.batches.pop_front().unwrap_or_default()
    }

    fn swap_buffers(&mut self) {
        self.record("swap");
    }

    fn framebuffer_size(&self) -> (i32, i32) {
        self.framebuffer
    }

    fn create_pipeline(&mut self) -> WindowResult<RecordingPipeline> {
        if self.fail_pipeline {
            return Err(WindowError::CreationFailed("no legacy GL".to_string()));
        }
        self.record("pipeline created");
        Ok(RecordingPipeline::default())
    }
}

impl Drop for MockWindow {
    fn drop(&mut self) {
        self.record("window dropped");
    }
}

/// One recorded pipeline operation
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum PipelineCall {
    Viewport(i32, i32, i32, i32),
    MatrixMode(MatrixMode),
    LoadIdentity(MatrixMode),
    MultiplyMatrix(MatrixMode, Mat4d),
    PushMatrix,
    PopMatrix,
    SmoothShading,
    DepthTest,
    Clear,
    Triangle([ColoredVertex; 3]),
}

/// Pipeline that records calls and tracks the active matrix stack
#[derive(Debug)]
pub(crate) struct RecordingPipeline {
    pub(crate) calls: Vec<PipelineCall>,
    pub(crate) mode: MatrixMode,
    pub(crate) stack_depth: i32,
}

impl Default for RecordingPipeline {
    fn default() -> Self {
        // GL starts with the model/view stack selected.
        Self {
            calls: Vec::new(),
            mode: MatrixMode::ModelView,
            stack_depth: 0,
        }
    }
}

impl Pipeline for RecordingPipeline {
    fn set_viewport(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.calls.push(PipelineCall::Viewport(x, y, width, height));
    }

    fn set_matrix_mode(&mut self, mode: MatrixMode) {
        self.mode = mode;
        self.calls.push(PipelineCall::MatrixMode(mode));
    }

    fn load_identity(&mut self) {
        self.calls.push(PipelineCall::LoadIdentity(self.mode));
    }

    fn multiply_matrix(&mut self, matrix: &Mat4d) {
        self.calls.push(PipelineCall::MultiplyMatrix(self.mode, *matrix));
    }

    fn push_matrix(&mut self) {
        self.stack_depth += 1;
        self.calls.push(PipelineCall::PushMatrix);
    }

    fn pop_matrix(&mut self) {
        self.stack_depth -= 1;
        self.calls.push(PipelineCall::PopMatrix);
    }

    fn enable_smooth_shading(&mut self) {
        self.calls.push(PipelineCall::SmoothShading);
    }

    fn enable_depth_test(&mut self) {
        self.calls.push(PipelineCall::DepthTest);
    }

    fn clear(&mut self) {
        self.calls.push(PipelineCall::Clear);
    }

    fn draw_triangle(&mut self, vertices: &[ColoredVertex; 3]) {
        self.calls.push(PipelineCall::Triangle(*vertices));
    }
}
