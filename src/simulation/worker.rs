//! KernelWorker - the kernel on its own thread
//!
//! The worker thread owns the `KernelCore` outright. Callers send a
//! `Command` together with a one-shot reply channel and block for the
//! answer; position snapshots come back as owned `Vec<f32>` values.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};

use crate::api::protocol::{Command, Response};
use crate::domain::KernelError;

use super::KernelCore;

struct Request {
    command: Command,
    reply: Sender<Result<Response, KernelError>>,
}

pub struct KernelWorker {
    tx: Option<Sender<Request>>,
    handle: Option<JoinHandle<KernelCore>>,
}

impl KernelWorker {
    /// Move `core` onto a new thread.
    pub fn spawn(core: KernelCore) -> Self {
        let (tx, rx) = mpsc::channel::<Request>();
        let handle = thread::Builder::new()
            .name("pbd-kernel".into())
            .spawn(move || Self::worker_loop(rx, core))
            .ok();

        if handle.is_none() {
            kernel_warn!("failed to start kernel worker thread");
        }

        Self { tx: Some(tx), handle }
    }

    fn worker_loop(rx: Receiver<Request>, mut core: KernelCore) -> KernelCore {
        for request in rx {
            let result = core.dispatch(request.command);
            // Caller may have given up waiting; nothing to do then.
            let _ = request.reply.send(result);
        }
        core
    }

    /// Send one command and wait for its response.
    pub fn request(&self, command: Command) -> Result<Response, KernelError> {
        let tx = self.tx.as_ref().ok_or(KernelError::WorkerDisconnected)?;
        let (reply, answer) = mpsc::channel();
        tx.send(Request { command, reply })
            .map_err(|_| KernelError::WorkerDisconnected)?;
        answer.recv().map_err(|_| KernelError::WorkerDisconnected)?
    }

    pub fn advance(&self, dt: Option<f32>) -> Result<Vec<f32>, KernelError> {
        match self.request(Command::Advance { dt })? {
            Response::Positions(p) => Ok(p),
            other => Err(KernelError::InvalidCommand(format!(
                "advance answered with {:?}",
                other
            ))),
        }
    }

    /// Stop the thread and hand the kernel back.
    pub fn shutdown(mut self) -> Option<KernelCore> {
        self.tx.take();
        self.handle.take().and_then(|h| h.join().ok())
    }
}

impl Drop for KernelWorker {
    fn drop(&mut self) {
        // Closing the channel ends `worker_loop`.
        self.tx.take();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
