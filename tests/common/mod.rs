//! Shared test fixtures for the DeckStats integration tests.
//!
//! Provides EDHREC-shaped sample pages, a scripted in-memory `CardSource`,
//! and a one-shot local HTTP server for exercising `EdhrecClient`.

#![allow(dead_code)]

use async_trait::async_trait;
use deckstats::models::CardLookup;
use deckstats::slug::card_slug;
use deckstats::{CardRecord, CardSource, DeckStatsError};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

// ---------------------------------------------------------------------------
// Sample pages
// ---------------------------------------------------------------------------

/// Wrap a card object in the EDHREC page envelope.
pub fn page_with_card(card: Value) -> Value {
    json!({
        "container": {
            "json_dict": {
                "card": card
            }
        }
    })
}

pub fn sol_ring_page() -> Value {
    page_with_card(json!({
        "name": "Sol Ring",
        "salt": 1.52,
        "prices": {
            "cardkingdom": { "price": 1.99 },
            "tcgplayer": { "price": 1.01 }
        },
        "num_decks": 1_000_000,
        "potential_decks": 1_250_000,
        "image_uris": [
            { "normal": "https://cards.scryfall.io/normal/front/sol-ring.jpg" }
        ]
    }))
}

pub fn counterspell_page() -> Value {
    page_with_card(json!({
        "name": "Counterspell",
        "salt": 0.75,
        "prices": {
            "cardkingdom": { "price": 2.0 },
            "tcgplayer": { "price": 1.0 }
        },
        "num_decks": 200_000,
        "potential_decks": 800_000
    }))
}

pub fn arcane_signet_page() -> Value {
    page_with_card(json!({
        "name": "Arcane Signet",
        "salt": 0.25,
        "prices": {
            "tcgplayer": { "price": 0.5 }
        },
        "num_decks": 900_000,
        "potential_decks": 1_200_000
    }))
}

// ---------------------------------------------------------------------------
// ScriptedSource
// ---------------------------------------------------------------------------

struct Script {
    page: Option<Value>,
    delay: Duration,
}

/// In-memory `CardSource` answering from canned pages.
///
/// Names scripted as failures, and names that were never scripted, fail with
/// a 404-style status error.
#[derive(Default)]
pub struct ScriptedSource {
    scripts: HashMap<String, Script>,
    calls: AtomicUsize,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, name: &str, page: Value) -> Self {
        self.scripts.insert(
            name.to_string(),
            Script {
                page: Some(page),
                delay: Duration::ZERO,
            },
        );
        self
    }

    pub fn delayed_page(mut self, name: &str, page: Value, delay: Duration) -> Self {
        self.scripts.insert(
            name.to_string(),
            Script {
                page: Some(page),
                delay,
            },
        );
        self
    }

    pub fn failure(mut self, name: &str) -> Self {
        self.scripts.insert(
            name.to_string(),
            Script {
                page: None,
                delay: Duration::ZERO,
            },
        );
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CardSource for ScriptedSource {
    async fn fetch_card(&self, card_name: &str) -> deckstats::Result<CardRecord> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let slug = card_slug(card_name);
        let script = self.scripts.get(card_name);

        if let Some(script) = script {
            if !script.delay.is_zero() {
                tokio::time::sleep(script.delay).await;
            }
        }

        match script.and_then(|s| s.page.as_ref()) {
            Some(page) => Ok(CardRecord::from_lookup(
                card_name,
                &slug,
                CardLookup::from_page(page),
            )),
            None => Err(DeckStatsError::Status {
                status: 404,
                url: format!("test://{}.json", slug),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// Local HTTP server
// ---------------------------------------------------------------------------

/// Serve canned responses keyed by request path on a local port.
///
/// Each entry maps a path (e.g. `/sol-ring.json`) to `(status, body)`.
/// Unknown paths get a 404. Returns the base URL of the server.
pub async fn serve(routes: Vec<(&'static str, u16, String)>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let routes: HashMap<&'static str, (u16, String)> = routes
        .into_iter()
        .map(|(path, status, body)| (path, (status, body)))
        .collect();

    tokio::spawn(async move {
        loop {
            let (mut socket, _) = match listener.accept().await {
                Ok(conn) => conn,
                Err(_) => return,
            };
            let mut buf = Vec::new();
            let mut chunk = [0u8; 1024];
            loop {
                let n = socket.read(&mut chunk).await.unwrap_or(0);
                if n == 0 {
                    break;
                }
                buf.extend_from_slice(&chunk[..n]);
                if buf.windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }

            let request = String::from_utf8_lossy(&buf);
            let path = request
                .lines()
                .next()
                .and_then(|line| line.split_whitespace().nth(1))
                .unwrap_or("/")
                .to_string();

            let (status, body) = routes
                .get(path.as_str())
                .cloned()
                .unwrap_or((404, "not found".to_string()));
            let response = format!(
                "HTTP/1.1 {} X\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
    });

    format!("http://{}", addr)
}
