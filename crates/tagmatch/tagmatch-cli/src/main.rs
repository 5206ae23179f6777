//! `tagmatch`: wires storage, the similarity oracle, the matcher and the
//! model-backed collaborators from configuration, then serves stdin.

mod args;
mod render;

use std::sync::Arc;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};

use tagmatch_core::TagmatchConfig;
use tagmatch_llm::{ChatClient, ChatMatchReasoner, ChatPairScorer, ChatTagExtractor};
use tagmatch_matching::{InterestService, Matcher};
use tagmatch_observability::init_tracing;
use tagmatch_similarity::SimilarityOracle;
use tagmatch_storage::StorageEngine;

use crate::args::{parse_line, Args, USAGE};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = match Args::parse(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{e}\n\n{USAGE}");
            std::process::exit(2);
        }
    };
    if args.help {
        println!("{USAGE}");
        return Ok(());
    }

    let mut config = TagmatchConfig::load(args.config.as_deref()).context("loading configuration")?;
    if let Some(db) = args.db {
        config.storage.db_path = db;
    }
    init_tracing(&config.observability);

    let store = Arc::new(
        StorageEngine::from_config(&config.storage)
            .with_context(|| format!("opening database {}", config.storage.db_path))?,
    );
    let client = Arc::new(ChatClient::from_config(&config.llm).context("building chat client")?);

    let oracle = Arc::new(SimilarityOracle::new(
        store.clone(),
        Arc::new(ChatPairScorer::new(client.clone(), &config.llm.scoring_model)),
        &config.similarity,
    ));
    let matcher = Arc::new(Matcher::new(store.clone(), oracle.clone(), &config.matching));
    let service = InterestService::new(
        store.clone(),
        Arc::new(ChatTagExtractor::new(client.clone(), &config.llm.extraction_model)),
        Arc::new(ChatMatchReasoner::new(client, &config.llm.reason_model)),
        matcher,
        config.matching.reason_limit,
    );

    tracing::info!(
        db_path = %config.storage.db_path,
        users = store.user_count().unwrap_or(0),
        "tagmatch ready"
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("reading stdin")? {
        if line.trim().is_empty() {
            continue;
        }
        let Some(input) = parse_line(&line) else {
            eprintln!("expected `user_id|display name|text`, got: {line}");
            continue;
        };
        match service.submit(input.user_id, input.display_name, input.text).await {
            Ok(outcome) => print!("{}", render::render(&outcome)),
            Err(e) => {
                tracing::warn!(user_id = %input.user_id, error = %e, "submission failed");
                println!("Service temporarily unavailable, please try again later.");
            }
        }
    }

    oracle.flush().await;
    let stats = oracle.stats();
    tracing::info!(
        l1_hits = stats.l1_hits,
        store_hits = stats.store_hits,
        scorer_calls = stats.scorer_calls,
        writes_applied = stats.writes_applied,
        writes_dropped = stats.writes_dropped,
        "shutting down"
    );
    Ok(())
}
