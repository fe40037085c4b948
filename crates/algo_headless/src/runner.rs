//! Match loop: reads engine frames, drives the orchestrator, writes orders.

use std::io::{BufRead, Write};

use algo_core::config::AlgoConfig;
use algo_core::orchestrator::TurnOrchestrator;

use crate::map::GameMap;
use crate::protocol::{FrameKind, GameConfig, ProtocolError, TurnFrame};

/// Outcome of a finished match loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    /// Turn-start frames answered.
    pub turns_played: u32,
    /// Breaches recorded over the match.
    pub breaches_recorded: usize,
    /// Whether a game-over frame was seen (as opposed to end of input).
    pub game_over: bool,
}

/// Drives one match over a line reader and writer.
pub struct AlgoRunner<R, W> {
    reader: R,
    writer: W,
    config: AlgoConfig,
    seed: u64,
}

impl<R: BufRead, W: Write> AlgoRunner<R, W> {
    /// Create a runner. Nothing is read until [`AlgoRunner::run`].
    pub fn new(reader: R, writer: W, config: AlgoConfig, seed: u64) -> Self {
        Self {
            reader,
            writer,
            config,
            seed,
        }
    }

    /// Give back the writer (handy for inspecting output in tests).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn next_line(&mut self) -> Result<Option<String>, ProtocolError> {
        let mut line = String::new();
        loop {
            line.clear();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                return Ok(Some(trimmed.to_string()));
            }
        }
    }

    /// Play until game over or end of input.
    ///
    /// Fails only when the game configuration is unusable or IO breaks.
    /// Individual frames that cannot be decoded are logged and skipped.
    pub fn run(&mut self) -> Result<RunSummary, ProtocolError> {
        let Some(first) = self.next_line()? else {
            tracing::warn!("Input closed before the game configuration arrived");
            return Ok(RunSummary::default());
        };
        let catalog = GameConfig::from_json(&first)?.catalog()?;
        tracing::info!(seed = self.seed, "Game configuration loaded");

        let mut orchestrator = TurnOrchestrator::new(self.config.clone(), &catalog, self.seed);
        let mut summary = RunSummary::default();

        while let Some(line) = self.next_line()? {
            let frame = match TurnFrame::from_json(&line) {
                Ok(frame) => frame,
                Err(e) => {
                    tracing::warn!("Skipping unreadable frame: {}", e);
                    continue;
                }
            };

            match frame.kind() {
                FrameKind::TurnStart => {
                    let mut map = GameMap::from_frame(&frame, &catalog);
                    orchestrator.on_turn(&mut map);
                    let submission = map.take_submission();
                    self.writer.write_all(submission.to_json_lines().as_bytes())?;
                    self.writer.flush()?;
                    summary.turns_played += 1;
                    tracing::info!(
                        turn = frame.turn_number(),
                        build = submission.build.len(),
                        deploy = submission.deploy.len(),
                        "Submitted turn"
                    );
                }
                FrameKind::Action => orchestrator.on_action_frame(&line),
                FrameKind::GameOver => {
                    summary.game_over = true;
                    break;
                }
                FrameKind::Unknown => {
                    tracing::debug!("Ignoring frame without a known turn phase");
                }
            }
        }

        summary.breaches_recorded = orchestrator.ledger().len();
        tracing::info!(
            turns = summary.turns_played,
            breaches = summary.breaches_recorded,
            game_over = summary.game_over,
            "Match finished"
        );
        Ok(summary)
    }
}
