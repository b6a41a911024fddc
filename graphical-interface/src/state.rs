use std::{
    path::PathBuf,
    sync::mpsc::{self, Receiver, TryRecvError},
    thread,
};

use locations::{load_records, AppState, LoadState, LocationRecord, LocationsError};
use tracing::{error, info, warn};

type LoadResult = Result<Vec<LocationRecord>, LocationsError>;

/// Reads the data file on a background thread so the window can show a
/// spinner meanwhile.
pub struct Loader {
    receiver: Receiver<LoadResult>,
}

impl Loader {
    pub fn spawn(path: PathBuf, ctx: egui::Context) -> Self {
        let (sender, receiver) = mpsc::channel();

        thread::spawn(move || {
            let result = load_records(&path);
            if sender.send(result).is_err() {
                warn!("window closed before the locations finished loading");
            }
            ctx.request_repaint();
        });

        Self { receiver }
    }

    /// Moves a `Loading` state to `Ready` or `Failed` once the loader thread
    /// has reported back. Any other state is left alone.
    pub fn poll(&self, state: &mut LoadState) {
        if !matches!(state, LoadState::Loading) {
            return;
        }

        match self.receiver.try_recv() {
            Ok(Ok(records)) => {
                info!(count = records.len(), "locations ready");
                *state = LoadState::Ready(Box::new(AppState::new(records)));
            }
            Ok(Err(e)) => {
                error!(error = %e, "failed to load locations");
                *state = LoadState::Failed(e.to_string());
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                error!("location loader stopped without a result");
                *state = LoadState::Failed("The location loader stopped unexpectedly.".into());
            }
        }
    }
}
