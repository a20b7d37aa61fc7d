//! The session task: sole owner of the game state.
//!
//! A [`Session`] is opened against a [`SaveRepository`] and then spawned
//! onto the tokio runtime. From that point every change to the state goes
//! through one loop that:
//!
//! - receives requests from any number of [`SessionHandle`]s,
//! - sleeps until the [`Scheduler`]'s next deadline and feeds the due tick
//!   into the reducer,
//! - reconciles the timers after every transition,
//! - broadcasts each new log line to subscribers.
//!
//! Ticks and commands are processed strictly one at a time. Dropping every
//! handle ends the loop and yields the final state.

use rand::SeedableRng;
use rand::rngs::SmallRng;
use simplescape_player::{GameRules, apply, new_game};
use simplescape_types::{Command, GameState};
use tokio::sync::{broadcast, mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio::time::{Instant, sleep_until};
use tracing::{info, warn};

use crate::config::SimplescapeConfig;
use crate::repository::{RepositoryError, SaveKeys, SaveRepository};
use crate::scheduler::{Scheduler, TickKind};
use crate::snapshot::{self, SnapshotError};

/// Log line appended after a successful save.
const SAVED_MESSAGE: &str = "Game saved.";

/// Log line appended when a save fails.
const SAVE_FAILED_MESSAGE: &str = "Error: Could not save game.";

/// Log line appended when the save storage cannot be read.
const LOAD_FAILED_MESSAGE: &str = "Failed to load data. It might be corrupted.";

/// Errors from the session and its handles.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The session task has stopped.
    #[error("session is closed")]
    Closed,

    /// The state could not be encoded for saving.
    #[error("snapshot error: {source}")]
    Snapshot {
        /// The underlying snapshot error.
        #[from]
        source: SnapshotError,
    },

    /// The repository rejected a read or write.
    #[error("repository error: {source}")]
    Repository {
        /// The underlying repository error.
        #[from]
        source: RepositoryError,
    },
}

/// Work sent to the session task.
#[derive(Debug)]
enum Request {
    Command(Command),
    Save(oneshot::Sender<()>),
    Load(oneshot::Sender<()>),
    State(oneshot::Sender<GameState>),
}

/// Cloneable handle for talking to a running session.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    requests: mpsc::Sender<Request>,
    logs: broadcast::Sender<String>,
}

impl SessionHandle {
    /// Queue a command for the reducer.
    pub async fn send(&self, command: Command) -> Result<(), SessionError> {
        self.requests
            .send(Request::Command(command))
            .await
            .map_err(|_closed| SessionError::Closed)
    }

    /// Write the current player and shop to the repository and wait until
    /// the outcome has been logged.
    pub async fn save(&self) -> Result<(), SessionError> {
        let (done, wait) = oneshot::channel();
        self.request(Request::Save(done)).await?;
        wait.await.map_err(|_closed| SessionError::Closed)
    }

    /// Replace the player and shop with the saved ones and wait until the
    /// outcome has been logged.
    pub async fn load(&self) -> Result<(), SessionError> {
        let (done, wait) = oneshot::channel();
        self.request(Request::Load(done)).await?;
        wait.await.map_err(|_closed| SessionError::Closed)
    }

    /// A copy of the current state.
    pub async fn state(&self) -> Result<GameState, SessionError> {
        let (reply, wait) = oneshot::channel();
        self.request(Request::State(reply)).await?;
        wait.await.map_err(|_closed| SessionError::Closed)
    }

    /// Receive every log line appended from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<String> {
        self.logs.subscribe()
    }

    async fn request(&self, request: Request) -> Result<(), SessionError> {
        self.requests
            .send(request)
            .await
            .map_err(|_closed| SessionError::Closed)
    }
}

/// Game state plus everything needed to drive it.
#[derive(Debug)]
pub struct Session<R> {
    state: GameState,
    rules: GameRules,
    scheduler: Scheduler,
    rng: SmallRng,
    repository: R,
    keys: SaveKeys,
    command_buffer: usize,
    logs: broadcast::Sender<String>,
}

impl<R: SaveRepository + 'static> Session<R> {
    /// Open a session, restoring the saved game when configured to.
    ///
    /// A missing save starts a new game. A save that cannot be decoded is
    /// removed from the repository and a new game starts instead.
    pub async fn open(config: &SimplescapeConfig, repository: R) -> Self {
        let keys = SaveKeys::from_config(&config.storage);
        let rules = config.rules.clone();

        let state = if config.session.load_on_start {
            restore(&repository, &keys, config).await
        } else {
            fresh_game(config)
        };

        let rng = config
            .session
            .seed
            .map_or_else(SmallRng::from_os_rng, SmallRng::seed_from_u64);
        let (logs, _) = broadcast::channel(config.session.log_buffer.max(1));

        info!(
            seed = config.session.seed,
            inventory_slots = rules.inventory_slots,
            "Session opened"
        );

        Self {
            state,
            scheduler: Scheduler::new(config.ticks.clone(), &rules),
            rules,
            rng,
            repository,
            keys,
            command_buffer: config.session.command_buffer.max(1),
            logs,
        }
    }

    /// The state as it stands before the session is spawned.
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    /// Receive every log line appended once the session runs.
    pub fn subscribe(&self) -> broadcast::Receiver<String> {
        self.logs.subscribe()
    }

    /// Move the session onto its own task.
    ///
    /// The task ends when every handle has been dropped and returns the
    /// final state.
    pub fn spawn(self) -> (SessionHandle, JoinHandle<GameState>) {
        let (requests, inbox) = mpsc::channel(self.command_buffer);
        let handle = SessionHandle {
            requests,
            logs: self.logs.clone(),
        };
        let task = tokio::spawn(self.run(inbox));
        (handle, task)
    }

    async fn run(mut self, mut inbox: mpsc::Receiver<Request>) -> GameState {
        self.scheduler.reconcile(&self.state, Instant::now());

        loop {
            let due = self.scheduler.next_due();
            tokio::select! {
                biased;
                request = inbox.recv() => {
                    let Some(request) = request else {
                        break;
                    };
                    self.handle(request).await;
                }
                kind = wait_for(due) => {
                    self.dispatch(&kind.command());
                    self.scheduler.fired(kind, Instant::now());
                }
            }
            self.scheduler.reconcile(&self.state, Instant::now());
        }

        info!(log_lines = self.state.log.len(), "Session closed");
        self.state
    }

    async fn handle(&mut self, request: Request) {
        match request {
            Request::Command(command) => self.dispatch(&command),
            Request::Save(done) => {
                self.save().await;
                let _ = done.send(());
            }
            Request::Load(done) => {
                self.load().await;
                let _ = done.send(());
            }
            Request::State(reply) => {
                let _ = reply.send(self.state.clone());
            }
        }
    }

    /// Run one command through the reducer and publish the lines it added.
    fn dispatch(&mut self, command: &Command) {
        let seen = self.state.log.len();
        self.state = apply(&self.state, command, &self.rules, &mut self.rng);
        for line in self.state.log.iter().skip(seen) {
            let _ = self.logs.send(line.clone());
        }
    }

    async fn save(&mut self) {
        let message = match self.write_save().await {
            Ok(()) => {
                info!(player_key = %self.keys.player, "Game saved");
                SAVED_MESSAGE
            }
            Err(reason) => {
                warn!(error = %reason, "Failed to save game");
                SAVE_FAILED_MESSAGE
            }
        };
        self.dispatch(&Command::AddLog(message.to_owned()));
    }

    async fn write_save(&self) -> Result<(), SessionError> {
        let encoded = snapshot::encode(&self.state.snapshot())?;
        self.repository
            .set(&self.keys.player, &encoded.player)
            .await?;
        self.repository.set(&self.keys.shop, &encoded.shop).await?;
        Ok(())
    }

    async fn load(&mut self) {
        let player = self.repository.get(&self.keys.player).await;
        let shop = self.repository.get(&self.keys.shop).await;
        let decoded = match (player, shop) {
            (Ok(player), Ok(shop)) => {
                snapshot::decode(player.as_deref(), shop.as_deref(), &self.rules)
            }
            (Err(err), _) | (_, Err(err)) => {
                warn!(error = %err, "Failed to read save");
                self.dispatch(&Command::AddLog(LOAD_FAILED_MESSAGE.to_owned()));
                return;
            }
        };

        match decoded {
            Ok(saved) => {
                info!(player_key = %self.keys.player, "Game loaded");
                self.dispatch(&Command::LoadGame(Box::new(saved)));
            }
            Err(err) => {
                match &err {
                    SnapshotError::Corrupted { source } => {
                        warn!(error = %source, "Saved data is corrupted");
                    }
                    SnapshotError::Invalid { reason } => {
                        warn!(%reason, "Saved data is invalid");
                    }
                    SnapshotError::Missing | SnapshotError::Encode { .. } => {}
                }
                self.dispatch(&Command::AddLog(err.to_string()));
            }
        }
    }
}

/// A new game opening with the configured welcome line.
fn fresh_game(config: &SimplescapeConfig) -> GameState {
    let mut state = new_game();
    state.log = vec![config.session.welcome_message.clone()];
    state
}

/// A new game whose log reports why the saved one was not used.
fn fresh_game_after(config: &SimplescapeConfig, failure: &str) -> GameState {
    let mut state = fresh_game(config);
    state.log.push(failure.to_owned());
    state
}

/// Read and rehydrate the saved game, falling back to a new one.
///
/// A saved shop is kept even when no player was saved. A save that cannot be
/// used opens a new game with the failure as its second log line, and
/// corrupt documents are removed so the next start does not trip over them
/// again.
async fn restore<R: SaveRepository>(
    repository: &R,
    keys: &SaveKeys,
    config: &SimplescapeConfig,
) -> GameState {
    let player = repository.get(&keys.player).await;
    let shop = repository.get(&keys.shop).await;
    let (player, shop) = match (player, shop) {
        (Ok(player), Ok(shop)) => (player, shop),
        (Err(err), _) | (_, Err(err)) => {
            warn!(error = %err, "Could not read saved game, starting fresh");
            return fresh_game_after(config, LOAD_FAILED_MESSAGE);
        }
    };

    match snapshot::decode(player.as_deref(), shop.as_deref(), &config.rules) {
        Ok(saved) => {
            info!(player_key = %keys.player, "Restored saved game");
            snapshot::rehydrate(saved, &config.rules)
        }
        Err(SnapshotError::Missing) => {
            info!("No saved game, starting fresh");
            let mut state = fresh_game(config);
            if let Ok(stock) = snapshot::decode_shop(shop.as_deref()) {
                state.shop_stock = stock;
            }
            state
        }
        Err(err @ SnapshotError::Invalid { .. }) => {
            warn!(error = ?err, "Saved game is invalid, starting fresh");
            fresh_game_after(config, &err.to_string())
        }
        Err(err @ (SnapshotError::Corrupted { .. } | SnapshotError::Encode { .. })) => {
            warn!(error = %err, "Saved game is corrupted, clearing it");
            for key in [&keys.player, &keys.shop] {
                if let Err(remove_err) = repository.remove(key).await {
                    warn!(key = %key, error = %remove_err, "Failed to clear save");
                }
            }
            fresh_game_after(config, &err.to_string())
        }
    }
}

/// Sleep until `due`, or forever when nothing is scheduled.
async fn wait_for(due: Option<(Instant, TickKind)>) -> TickKind {
    match due {
        Some((deadline, kind)) => {
            sleep_until(deadline).await;
            kind
        }
        None => std::future::pending().await,
    }
}
