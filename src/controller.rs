//! Run controller
//!
//! [`RunController`] owns the displayed sequence and moves between two
//! states:
//!
//! ```text
//! Idle ──start()──▶ Running ──tick() … tick()──▶ Idle
//! ```
//!
//! While idle the [`VisualStore`] sits in the controller and may be replaced
//! by a new random sequence.  [`RunController::start`] moves it into the
//! active run together with the [`Player`]; from then on only the player
//! mutates it, and outside callers get read access through
//! [`RunController::store`].  After the last move a single batched step marks
//! every element done and the store moves back.
//!
//! Algorithm and size changes are refused while running.  Speed changes are
//! always accepted and apply from the next pause on.  There is no way to
//! cancel a run: once started it plays to the end.

use crate::compiler::Algorithm;
use crate::config::{Settings, Size, Speed};
use crate::error::RunError;
use crate::generator::SequenceSource;
use crate::model::{keys_of, ClassType, Element};
use crate::moves::MoveSequence;
use crate::pacing::{self, Pacer};
use crate::playback::{Player, Step};
use crate::store::VisualStore;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tracing::{debug, error, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running,
}

/// Outcome of one [`RunController::tick`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tick {
    /// No run in progress
    Idle,
    /// One store mutation was applied
    Step(Step),
    /// The run ended and the controller is idle again
    Finished(RunSummary),
}

/// Statistics of a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub algorithm: Algorithm,
    pub size: usize,
    /// Move records replayed
    pub moves: usize,
    /// Store mutations performed, including the final done pass
    pub steps: usize,
}

/// Shared handle for changing playback speed, usable during an async run
#[derive(Debug, Clone)]
pub struct SpeedHandle(Arc<watch::Sender<Speed>>);

impl SpeedHandle {
    fn new(speed: Speed) -> Self {
        let (tx, _rx) = watch::channel(speed);
        SpeedHandle(Arc::new(tx))
    }

    pub fn get(&self) -> Speed {
        *self.0.borrow()
    }

    pub fn set(&self, speed: Speed) {
        self.0.send_replace(speed);
    }
}

/// A run in progress: the only place the store is mutated
struct ActiveRun {
    store: VisualStore,
    player: Player,
    algorithm: Algorithm,
    done_marked: bool,
    steps: usize,
}

impl ActiveRun {
    fn advance(&mut self) -> Result<Option<Step>, RunError> {
        if let Some(step) = self.player.step(&mut self.store)? {
            self.steps += 1;
            return Ok(Some(step));
        }
        if self.done_marked {
            return Ok(None);
        }
        self.store.set_class_all(ClassType::Done);
        self.done_marked = true;
        self.steps += 1;
        Ok(Some(Step::Done))
    }

    fn summary(&self) -> RunSummary {
        RunSummary {
            algorithm: self.algorithm,
            size: self.store.len(),
            moves: self.player.applied(),
            steps: self.steps,
        }
    }
}

enum Slot {
    Idle(VisualStore),
    Running(ActiveRun),
}

pub struct RunController {
    algorithm: Algorithm,
    size: Size,
    speed: SpeedHandle,
    slot: Slot,
    source: Box<dyn SequenceSource + Send>,
}

impl RunController {
    /// Create an idle controller with a fresh sequence of `settings.size`
    pub fn new(settings: Settings, mut source: impl SequenceSource + Send + 'static) -> Self {
        let store = VisualStore::new(source.generate(settings.size.get()));
        RunController {
            algorithm: settings.algorithm,
            size: settings.size,
            speed: SpeedHandle::new(settings.speed),
            slot: Slot::Idle(store),
            source: Box::new(source),
        }
    }

    pub fn state(&self) -> RunState {
        match self.slot {
            Slot::Idle(_) => RunState::Idle,
            Slot::Running(_) => RunState::Running,
        }
    }

    pub fn is_running(&self) -> bool {
        self.state() == RunState::Running
    }

    pub fn settings(&self) -> Settings {
        Settings {
            algorithm: self.algorithm,
            size: self.size,
            speed: self.speed(),
        }
    }

    pub fn speed(&self) -> Speed {
        self.speed.get()
    }

    pub fn speed_handle(&self) -> SpeedHandle {
        self.speed.clone()
    }

    /// Read-only view of the displayed sequence
    pub fn store(&self) -> &VisualStore {
        match &self.slot {
            Slot::Idle(store) => store,
            Slot::Running(run) => &run.store,
        }
    }

    pub fn elements(&self) -> &[Element] {
        self.store().elements()
    }

    /// Applied and total move records of the current run
    pub fn progress(&self) -> Option<(usize, usize)> {
        match &self.slot {
            Slot::Running(run) => Some((run.player.applied(), run.player.total())),
            Slot::Idle(_) => None,
        }
    }

    /// Select the algorithm for the next run; refused while running
    pub fn set_algorithm(&mut self, algorithm: Algorithm) -> bool {
        if self.is_running() {
            warn!(algorithm = algorithm.name(), "algorithm change ignored during run");
            return false;
        }
        self.algorithm = algorithm;
        true
    }

    /// Change the sequence length and regenerate; refused while running
    pub fn set_size(&mut self, size: Size) -> bool {
        if self.is_running() {
            warn!(size = size.get(), "size change ignored during run");
            return false;
        }
        self.size = size;
        self.regenerate()
    }

    /// Replace the sequence with a new random one; refused while running
    pub fn regenerate(&mut self) -> bool {
        let Slot::Idle(store) = &mut self.slot else {
            warn!("new sequence ignored during run");
            return false;
        };
        *store = VisualStore::new(self.source.generate(self.size.get()));
        debug!(size = self.size.get(), "generated new sequence");
        true
    }

    /// Accepted in any state; applies from the next pause
    pub fn set_speed(&mut self, speed: Speed) {
        self.speed.set(speed);
    }

    /// Pause to insert after the step just taken
    pub fn delay(&self, pacer: &impl Pacer) -> Duration {
        pacer.delay(self.speed())
    }

    /// Compile the selected algorithm over a snapshot of the keys and begin
    /// playback.
    pub fn start(&mut self) -> Result<(), RunError> {
        let store = match std::mem::replace(&mut self.slot, Slot::Idle(VisualStore::default())) {
            Slot::Idle(store) => store,
            running => {
                self.slot = running;
                warn!("start ignored, run already in progress");
                return Err(RunError::Busy);
            }
        };

        let keys = keys_of(store.elements());
        let compiler = self.algorithm.compiler();
        let moves: MoveSequence = compiler.compile(&keys);
        if let Err(e) = moves.validate(keys.len()) {
            error!(algorithm = compiler.name(), error = %e, "compiler produced invalid moves");
            self.slot = Slot::Idle(store);
            return Err(e.into());
        }

        info!(
            algorithm = compiler.name(),
            size = keys.len(),
            moves = moves.len(),
            "run started"
        );

        self.slot = Slot::Running(ActiveRun {
            store,
            player: Player::new(moves),
            algorithm: self.algorithm,
            done_marked: false,
            steps: 0,
        });
        Ok(())
    }

    /// Apply one step of the current run
    pub fn tick(&mut self) -> Result<Tick, RunError> {
        let outcome = match &mut self.slot {
            Slot::Idle(_) => return Ok(Tick::Idle),
            Slot::Running(run) => run.advance(),
        };

        match outcome {
            Ok(Some(step)) => Ok(Tick::Step(step)),
            Ok(None) => {
                let summary = self.finish();
                info!(
                    algorithm = summary.algorithm.name(),
                    moves = summary.moves,
                    steps = summary.steps,
                    "run finished"
                );
                Ok(Tick::Finished(summary))
            }
            Err(e) => {
                error!(error = %e, "run aborted");
                self.finish();
                Err(e)
            }
        }
    }

    /// Start a run and play it to the end, pausing after every mutation
    pub async fn run(&mut self, pacer: &impl Pacer) -> Result<RunSummary, RunError> {
        self.start()?;
        loop {
            match self.tick()? {
                Tick::Step(_) => pacing::pause(self.delay(pacer)).await,
                Tick::Finished(summary) => return Ok(summary),
                Tick::Idle => return Err(RunError::NotRunning),
            }
        }
    }

    /// Return the store to the idle slot
    fn finish(&mut self) -> RunSummary {
        let slot = std::mem::replace(&mut self.slot, Slot::Idle(VisualStore::default()));
        let (store, summary) = match slot {
            Slot::Running(run) => {
                let summary = run.summary();
                (run.store, summary)
            }
            Slot::Idle(store) => {
                let summary = RunSummary {
                    algorithm: self.algorithm,
                    size: store.len(),
                    moves: 0,
                    steps: 0,
                };
                (store, summary)
            }
        };
        self.slot = Slot::Idle(store);
        summary
    }
}
