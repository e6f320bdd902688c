//! Single-slot timer task
//!
//! A [`Ticker`] holds at most one armed task. Arming always cancels the
//! previous task first, and dropping the ticker cancels whatever is armed.

use std::future::Future;

use log::trace;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

#[derive(Debug, Default)]
pub struct Ticker {
    task: Option<JoinHandle<()>>,
}

impl Ticker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawns `task` on `handle`, replacing any armed task
    pub fn arm<F>(&mut self, handle: &Handle, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.cancel();
        self.task = Some(handle.spawn(task));
        trace!("ticker armed");
    }

    /// Aborts the armed task; returns whether one was still running
    pub fn cancel(&mut self) -> bool {
        match self.task.take() {
            Some(task) => {
                let running = !task.is_finished();
                task.abort();
                if running {
                    trace!("ticker cancelled");
                }
                running
            }
            None => false,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.cancel();
    }
}
