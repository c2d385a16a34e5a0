//! Turn loop: plays games between the agent and a human and learns from them.

use rand::{Rng, rngs::StdRng};
use serde::Serialize;
use tracing::{debug, info};

use crate::{
    Error, Result,
    memory::{AvoidanceStore, LearningReport, MoveSelector, Selection, record_outcome_if_loss},
    ports::{HumanMove, HumanPlayer, Observer},
    tictactoe::{Game, GameStatus, OutcomeKind, Player},
    types::{CellId, MoveKey},
};

/// Summary of one finished game
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameReport {
    pub status: GameStatus,
    pub outcome: OutcomeKind,
    /// Every ply in order, agent first
    pub plies: Vec<CellId>,
    pub learning: LearningReport,
}

impl GameReport {
    /// Key of the whole game, or `None` if no move was made
    pub fn key(&self) -> Option<MoveKey> {
        MoveKey::from_cells(self.plies.iter().copied()).ok()
    }
}

/// Outcome tally across the games of a session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SessionStats {
    pub games: usize,
    pub agent_wins: usize,
    pub human_wins: usize,
    pub ties: usize,
    pub concessions: usize,
    pub human_quits: usize,
    /// Total keys newly added to the avoidance set
    pub keys_learned: usize,
}

impl SessionStats {
    pub fn record(&mut self, report: &GameReport) {
        self.games += 1;
        match report.outcome {
            OutcomeKind::HumanLost => self.agent_wins += 1,
            OutcomeKind::HumanWon => self.human_wins += 1,
            OutcomeKind::Tie => self.ties += 1,
            OutcomeKind::AgentConceded => self.concessions += 1,
            OutcomeKind::HumanQuit => self.human_quits += 1,
        }
        if let LearningReport::Recorded { added, .. } = report.learning {
            self.keys_learned += added;
        }
    }

    /// Games the agent lost, counting concessions
    pub fn agent_losses(&self) -> usize {
        self.human_wins + self.concessions
    }
}

/// A run of games sharing one avoidance store.
///
/// The store is loaded once before the first game and updated in place after
/// every loss, so later games in the same process already avoid what earlier
/// ones taught.
#[derive(Debug)]
pub struct Session<R = StdRng> {
    store: AvoidanceStore,
    selector: MoveSelector<R>,
    stats: SessionStats,
}

impl<R: Rng> Session<R> {
    pub fn new(store: AvoidanceStore, selector: MoveSelector<R>) -> Self {
        Self {
            store,
            selector,
            stats: SessionStats::default(),
        }
    }

    pub fn store(&self) -> &AvoidanceStore {
        &self.store
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Play one game to completion, then learn from it.
    ///
    /// The agent moves first. The game ends on a win, a full board, the human
    /// quitting or the agent conceding.
    ///
    /// # Errors
    ///
    /// Propagates errors from the human, the observer, or an illegal move
    /// returned by the human.
    pub fn play_game(
        &mut self,
        human: &mut dyn HumanPlayer,
        observer: &mut dyn Observer,
    ) -> Result<GameReport> {
        observer.on_game_start(self.stats.games)?;
        let mut game = Game::new();

        while !game.status().is_over() {
            if game.to_move().is_agent() {
                self.agent_turn(&mut game, observer)?;
            } else {
                observer.on_human_turn(game.board())?;
                match human.next_move(game.board())? {
                    HumanMove::Play(cell) => {
                        game.play(cell)?;
                        observer.on_move(Player::HUMAN, cell, game.board())?;
                    }
                    HumanMove::Quit => {
                        game.quit(Player::HUMAN)?;
                    }
                }
            }
        }

        let status = game.status();
        let outcome = status.outcome_kind().ok_or(Error::GameOver)?;
        let plies = game.board().plies().to_vec();
        let learning = record_outcome_if_loss(&mut self.store, &plies, outcome)?;
        info!(?outcome, plies = plies.len(), "game finished");

        observer.on_game_end(status, game.board(), &learning)?;

        let report = GameReport {
            status,
            outcome,
            plies,
            learning,
        };
        self.stats.record(&report);
        Ok(report)
    }

    /// Play games until the human declines another one.
    ///
    /// # Errors
    ///
    /// See [`Session::play_game`].
    pub fn play_until_done(
        &mut self,
        human: &mut dyn HumanPlayer,
        observer: &mut dyn Observer,
    ) -> Result<Vec<GameReport>> {
        let mut reports = Vec::new();
        loop {
            reports.push(self.play_game(human, observer)?);
            if !human.wants_another_game()? {
                break;
            }
        }
        Ok(reports)
    }

    fn agent_turn(&mut self, game: &mut Game, observer: &mut dyn Observer) -> Result<()> {
        let selection = self.selector.select_for(game.board(), self.store.keys())?;
        debug!(?selection, plies = game.board().plies().len(), "agent selected");
        match selection {
            Selection::Play(cell) => {
                game.play(cell)?;
                observer.on_move(Player::AGENT, cell, game.board())?;
            }
            Selection::Concede => {
                info!(plies = game.board().plies().len(), "agent concedes");
                game.quit(Player::AGENT)?;
            }
        }
        Ok(())
    }
}
