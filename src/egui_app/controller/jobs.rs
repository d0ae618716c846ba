use crate::prediction::{MeasurementInput, PredictionClient, PredictionResponse, RequestFailed};
use std::{
    sync::{
        Arc,
        mpsc::{Receiver, Sender},
    },
    thread,
};

type TryRecvError = std::sync::mpsc::TryRecvError;

pub(crate) enum JobMessage {
    PredictionFinished(PredictionJobResult),
}

#[derive(Debug)]
pub(crate) struct PredictionJob {
    pub(crate) input: MeasurementInput,
}

#[derive(Debug)]
pub(crate) struct PredictionJobResult {
    pub(crate) result: Result<PredictionResponse, RequestFailed>,
}

/// Background work owned by the controller, reported back over one channel.
pub(crate) struct ControllerJobs {
    message_tx: Sender<JobMessage>,
    message_rx: Receiver<JobMessage>,
    prediction_in_progress: bool,
}

impl ControllerJobs {
    pub(super) fn new() -> Self {
        let (message_tx, message_rx) = std::sync::mpsc::channel::<JobMessage>();
        Self {
            message_tx,
            message_rx,
            prediction_in_progress: false,
        }
    }

    pub(super) fn try_recv_message(&self) -> Result<JobMessage, TryRecvError> {
        self.message_rx.try_recv()
    }

    pub(super) fn prediction_in_progress(&self) -> bool {
        self.prediction_in_progress
    }

    /// Run one prediction on a worker thread. Returns false if one is already running.
    pub(super) fn begin_prediction(
        &mut self,
        client: Arc<PredictionClient>,
        job: PredictionJob,
    ) -> bool {
        if self.prediction_in_progress {
            return false;
        }
        self.prediction_in_progress = true;
        let reply = CompletionReply::new(self.message_tx.clone());
        let spawned = thread::Builder::new()
            .name("prediction-request".to_string())
            .spawn(move || {
                let result = client.predict(&job.input);
                reply.send(result);
            });
        // A failed spawn drops the closure, and with it the reply, which reports failure.
        if let Err(err) = spawned {
            tracing::error!(error = %err, "Failed to start prediction worker");
        }
        true
    }

    pub(super) fn clear_prediction(&mut self) {
        self.prediction_in_progress = false;
    }
}

/// Delivers exactly one completion per job.
///
/// If the worker unwinds or is never started, `Drop` reports a failure so the
/// UI always leaves the loading state.
struct CompletionReply {
    tx: Option<Sender<JobMessage>>,
}

impl CompletionReply {
    fn new(tx: Sender<JobMessage>) -> Self {
        Self { tx: Some(tx) }
    }

    fn send(mut self, result: Result<PredictionResponse, RequestFailed>) {
        if let Some(tx) = self.tx.take() {
            let _ = tx.send(JobMessage::PredictionFinished(PredictionJobResult { result }));
        }
    }
}

impl Drop for CompletionReply {
    fn drop(&mut self) {
        if let Some(tx) = self.tx.take() {
            tracing::error!("Prediction worker ended without a result");
            let _ = tx.send(JobMessage::PredictionFinished(PredictionJobResult {
                result: Err(RequestFailed),
            }));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    fn finished(rx: &Receiver<JobMessage>) -> Vec<Result<PredictionResponse, RequestFailed>> {
        rx.try_iter()
            .map(|message| match message {
                JobMessage::PredictionFinished(done) => done.result,
            })
            .collect()
    }

    #[test]
    fn reply_sends_once() {
        let (tx, rx) = mpsc::channel();
        let reply = CompletionReply::new(tx);
        reply.send(Ok(PredictionResponse {
            prediction: "Safe".into(),
            risk_level: "Low".into(),
        }));
        let results = finished(&rx);
        assert_eq!(results.len(), 1);
        assert!(results[0].is_ok());
    }

    #[test]
    fn panicking_worker_still_reports_failure() {
        let (tx, rx) = mpsc::channel();
        let reply = CompletionReply::new(tx);
        let handle = thread::spawn(move || {
            let _reply = reply;
            panic!("worker blew up");
        });
        assert!(handle.join().is_err());
        assert_eq!(finished(&rx), vec![Err(RequestFailed)]);
    }

    #[test]
    fn second_prediction_is_refused_while_running() {
        let mut jobs = ControllerJobs::new();
        jobs.prediction_in_progress = true;
        let client = Arc::new(PredictionClient::new(&crate::config::AppSettings::default()));
        let started = jobs.begin_prediction(
            client,
            PredictionJob {
                input: MeasurementInput {
                    criteria: "Lake".into(),
                    percentage: 1.0,
                    salt_count: 1.0,
                },
            },
        );
        assert!(!started);
        assert!(jobs.try_recv_message().is_err());
    }
}
