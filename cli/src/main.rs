//! CLI entrypoint for crowd-helm
//!
//! This is the main binary that wires together all layers using
//! dependency injection: one ingest pipeline per team, a shared game
//! epoch, and a stdin loop standing in for the control transport.

use anyhow::Result;
use clap::Parser;
use helm_application::{
    CadenceTimer, DirectiveIngest, EndRound, EngineConfig, ScoreLedger, StartRound, SystemClock,
    TeamContext, WindowResolver,
    ports::{action_sink::ActionSink, clock::Clock, display::DisplaySink},
};
use helm_domain::{DirectiveBuffer, GameEpoch, Team};
use helm_infrastructure::{CliclickActionSink, ConfigLoader, DryRunActionSink, InMemoryScoreStore};
use helm_presentation::{Cli, ConsoleDisplay, FeedEvent, feed};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// One team's wired pipeline: the vote channel into its ingest worker
struct TeamPipeline {
    team: Team,
    votes: mpsc::Sender<String>,
}

/// Route a vote to the pipeline owning its team
fn pipeline_for(pipelines: &[TeamPipeline], team: Team) -> Option<&TeamPipeline> {
    pipelines.iter().find(|pipeline| pipeline.team == team)
}

fn build_team(
    team: Team,
    epoch: Arc<GameEpoch>,
    clock: Arc<dyn Clock>,
    actions: Arc<dyn ActionSink>,
    display: Arc<dyn DisplaySink>,
    config: EngineConfig,
) -> (TeamPipeline, TeamContext) {
    let buffer = Arc::new(DirectiveBuffer::new());
    let ledger = Arc::new(ScoreLedger::new(team, Arc::new(InMemoryScoreStore::new())));

    let resolver = Arc::new(WindowResolver::new(
        team,
        Arc::clone(&buffer),
        Arc::clone(&ledger),
        CadenceTimer::new(config.consensus_window, clock),
        actions,
        Arc::clone(&display),
        config,
    ));
    let ingest = DirectiveIngest::new(team, epoch, resolver, display);

    // One worker per team drains the vote channel; resolutions are spawned
    // off this path, so a slow dispatch never backs up the channel.
    let (votes, mut inbox) = mpsc::channel::<String>(1024);
    tokio::spawn(async move {
        while let Some(raw) = inbox.recv().await {
            ingest.process(&raw);
        }
    });

    (TeamPipeline { team, votes }, TeamContext { buffer, ledger })
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Starting crowd-helm");

    // Configuration: defaults, then file, then CLI overrides
    let mut file_config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("failed to load configuration: {e}"))?
    };
    if let Some(window_ms) = cli.window_ms {
        file_config.consensus_window_ms = window_ms;
    }
    if cli.dry_run {
        file_config.action.dry_run = true;
    }
    let config = file_config.engine();

    // === Dependency Injection ===
    let epoch = Arc::new(GameEpoch::new());
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let display: Arc<dyn DisplaySink> = Arc::new(ConsoleDisplay::new());
    let actions: Arc<dyn ActionSink> = if file_config.action.dry_run {
        Arc::new(DryRunActionSink)
    } else {
        Arc::new(CliclickActionSink::new(&file_config.action.command))
    };

    let mut pipelines = Vec::new();
    let mut contexts = Vec::new();
    for team in Team::ALL {
        let (pipeline, context) = build_team(
            team,
            Arc::clone(&epoch),
            Arc::clone(&clock),
            Arc::clone(&actions),
            Arc::clone(&display),
            config.clone(),
        );
        pipelines.push(pipeline);
        contexts.push(context);
    }

    let end_contexts = contexts
        .iter()
        .map(|context| TeamContext {
            buffer: Arc::clone(&context.buffer),
            ledger: Arc::clone(&context.ledger),
        })
        .collect();
    let start_round = Arc::new(StartRound::new(
        Arc::clone(&epoch),
        contexts,
        Arc::clone(&display),
        config.clone(),
    ));
    let end_round = Arc::new(EndRound::new(
        Arc::clone(&epoch),
        end_contexts,
        Arc::clone(&display),
    ));

    display.start_prompt();

    // Control loop: stdin stands in for the out-of-scope transport.
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match feed::parse_line(&line) {
            Ok(FeedEvent::Start) => {
                // Spawned so votes keep flowing while the countdown runs.
                let start_round = Arc::clone(&start_round);
                tokio::spawn(async move {
                    start_round.execute().await;
                });
            }
            Ok(FeedEvent::Win(team)) => {
                let end_round = Arc::clone(&end_round);
                tokio::spawn(async move {
                    end_round.execute(team).await;
                });
            }
            Ok(FeedEvent::Vote { team, record }) => {
                let Some(pipeline) = pipeline_for(&pipelines, team) else {
                    warn!("no pipeline for team {}", team);
                    continue;
                };
                if pipeline.votes.send(record).await.is_err() {
                    warn!("vote worker for team {} is gone", team);
                }
            }
            Err(e) => warn!("ignoring input: {}", e),
        }
    }

    info!("input closed, shutting down");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_votes_route_by_team_not_position() {
        let (red_votes, mut red_inbox) = mpsc::channel(4);
        let (white_votes, mut white_inbox) = mpsc::channel(4);
        // Deliberately not in Team::ALL order.
        let pipelines = vec![
            TeamPipeline {
                team: Team::White,
                votes: white_votes,
            },
            TeamPipeline {
                team: Team::Red,
                votes: red_votes,
            },
        ];

        let pipeline = pipeline_for(&pipelines, Team::Red).unwrap();
        pipeline.votes.send("vote".to_string()).await.unwrap();

        assert_eq!(red_inbox.recv().await.unwrap(), "vote");
        assert!(white_inbox.try_recv().is_err());
    }
}
