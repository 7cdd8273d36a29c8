//! Timeout wrapper for slow stores.
//!
//! Every call is queued to one worker thread, so operations reach the inner
//! store in issue order even when an earlier call timed out and is still
//! running. The caller waits at most `timeout` for its own answer and gets
//! `StoreError::Timeout` otherwise.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use tracing::warn;

use super::Store;
use crate::error::{Result, StoreError};

enum Op {
    Get(String),
    Set(String, Vec<u8>),
    Remove(String),
}

enum Reply {
    Value(Result<Option<Vec<u8>>>),
    Done(Result<()>),
}

struct Job {
    op: Op,
    reply: Sender<Reply>,
}

/// Store wrapper that bounds how long a caller waits for each operation.
pub struct Deadline {
    jobs: Mutex<Sender<Job>>,
    timeout: Duration,
}

impl std::fmt::Debug for Deadline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Deadline")
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Deadline {
    /// Wrap `inner`, allowing each call at most `timeout`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Unavailable` if the worker thread cannot be spawned.
    pub fn new(inner: Arc<dyn Store>, timeout: Duration) -> Result<Self> {
        let (tx, rx) = mpsc::channel::<Job>();
        thread::Builder::new()
            .name("keepsake-store".to_string())
            .spawn(move || worker(inner, rx))
            .map_err(|e| StoreError::Unavailable(format!("failed to spawn store worker: {}", e)))?;

        Ok(Self {
            jobs: Mutex::new(tx),
            timeout,
        })
    }

    fn submit(&self, op: Op) -> Result<Reply> {
        let (reply_tx, reply_rx) = mpsc::channel();
        {
            let jobs = self
                .jobs
                .lock()
                .map_err(|_| StoreError::Unavailable("store worker lock poisoned".to_string()))?;
            jobs.send(Job {
                op,
                reply: reply_tx,
            })
            .map_err(|_| StoreError::Unavailable("store worker stopped".to_string()))?;
        }

        match reply_rx.recv_timeout(self.timeout) {
            Ok(reply) => Ok(reply),
            Err(RecvTimeoutError::Timeout) => {
                let ms = self.timeout.as_millis() as u64;
                warn!(timeout_ms = ms, "store call timed out");
                Err(StoreError::Timeout(ms).into())
            }
            Err(RecvTimeoutError::Disconnected) => {
                Err(StoreError::Unavailable("store worker stopped".to_string()).into())
            }
        }
    }
}

fn worker(inner: Arc<dyn Store>, jobs: Receiver<Job>) {
    for job in jobs {
        let reply = match job.op {
            Op::Get(key) => Reply::Value(inner.get(&key)),
            Op::Set(key, value) => Reply::Done(inner.set(&key, &value)),
            Op::Remove(key) => Reply::Done(inner.remove(&key)),
        };
        // The caller may have given up waiting.
        let _ = job.reply.send(reply);
    }
}

impl Store for Deadline {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        match self.submit(Op::Get(key.to_string()))? {
            Reply::Value(value) => value,
            Reply::Done(_) => Err(StoreError::Unavailable("mismatched store reply".to_string()).into()),
        }
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        match self.submit(Op::Set(key.to_string(), value.to_vec()))? {
            Reply::Done(done) => done,
            Reply::Value(_) => Err(StoreError::Unavailable("mismatched store reply".to_string()).into()),
        }
    }

    fn remove(&self, key: &str) -> Result<()> {
        match self.submit(Op::Remove(key.to_string()))? {
            Reply::Done(done) => done,
            Reply::Value(_) => Err(StoreError::Unavailable("mismatched store reply".to_string()).into()),
        }
    }
}
