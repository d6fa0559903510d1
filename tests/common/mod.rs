//! Shared test fixtures for the Deck of Cards SDK integration tests.
//!
//! Provides a loopback HTTP stub (`StubServer`) that records every request
//! and answers either with scripted responses or by simulating the deck
//! service in memory (`fake_deck_service()`), so tests exercise the real
//! HTTP client without touching the network.

#![allow(dead_code)]

use std::collections::{BTreeMap, HashMap};
use std::net::{SocketAddr, TcpListener};
use std::sync::{mpsc, Arc, Mutex};
use std::thread;
use std::time::Duration;

use axum::extract::{Query, State};
use axum::http::{header, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;
use deckofcards_sdk::DeckOfCards;
use serde_json::{json, Map, Value};
use tokio::sync::oneshot;

pub const BASE_PATH: &str = "/api/deck";

// ---------------------------------------------------------------------------
// StubServer
// ---------------------------------------------------------------------------

/// One request as seen by the stub: path relative to the base (still
/// percent-encoded), decoded query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StubRequest {
    pub path: String,
    pub query: Vec<(String, String)>,
}

impl StubRequest {
    pub fn param(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct StubResponse {
    pub status: u16,
    pub body: String,
    pub delay: Duration,
}

impl StubResponse {
    pub fn json(body: Value) -> Self {
        Self::raw(200, &body.to_string())
    }

    pub fn raw(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            delay: Duration::ZERO,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

type Handler = dyn Fn(&StubRequest) -> StubResponse + Send + Sync;

#[derive(Clone)]
struct StubState {
    handler: Arc<Handler>,
    requests: Arc<Mutex<Vec<StubRequest>>>,
}

/// A loopback axum server answering every request with a handler.
///
/// Runs on its own thread and tokio runtime so the blocking SDK client can
/// call it from plain `#[test]` functions. Shuts down when dropped.
pub struct StubServer {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<StubRequest>>>,
    shutdown: Option<oneshot::Sender<()>>,
}

impl StubServer {
    pub fn start<F>(handler: F) -> Self
    where
        F: Fn(&StubRequest) -> StubResponse + Send + Sync + 'static,
    {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = StubState {
            handler: Arc::new(handler),
            requests: requests.clone(),
        };
        let (addr_tx, addr_rx) = mpsc::channel();
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        thread::spawn(move || {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("stub runtime");
            rt.block_on(async move {
                let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                    .await
                    .expect("bind stub listener");
                addr_tx
                    .send(listener.local_addr().expect("stub address"))
                    .expect("report stub address");

                let app = Router::new().fallback(respond).with_state(state);
                axum::serve(listener, app)
                    .with_graceful_shutdown(async {
                        let _ = shutdown_rx.await;
                    })
                    .await
                    .expect("serve stub");
            });
        });

        let addr = addr_rx.recv().expect("stub server failed to start");
        Self {
            addr,
            requests,
            shutdown: Some(shutdown_tx),
        }
    }

    /// Always answer with the same response.
    pub fn scripted(response: StubResponse) -> Self {
        Self::start(move |_| response.clone())
    }

    pub fn base_url(&self) -> String {
        format!("http://{}{}", self.addr, BASE_PATH)
    }

    pub fn requests(&self) -> Vec<StubRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> StubRequest {
        self.requests().pop().expect("no request recorded")
    }

    /// SDK client pointed at this stub.
    pub fn api(&self) -> DeckOfCards {
        DeckOfCards::builder()
            .base_url(self.base_url())
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap()
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}

async fn respond(
    State(state): State<StubState>,
    uri: Uri,
    Query(query): Query<Vec<(String, String)>>,
) -> Response {
    let path = uri
        .path()
        .strip_prefix(BASE_PATH)
        .unwrap_or(uri.path())
        .trim_start_matches('/')
        .to_string();
    let request = StubRequest { path, query };
    state.requests.lock().unwrap().push(request.clone());

    let reply = (state.handler)(&request);
    if !reply.delay.is_zero() {
        tokio::time::sleep(reply.delay).await;
    }

    let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, [(header::CONTENT_TYPE, "application/json")], reply.body).into_response()
}

/// A base URL on which nothing is listening.
pub fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}{}", addr, BASE_PATH)
}

// ---------------------------------------------------------------------------
// Fake deck service
// ---------------------------------------------------------------------------

const VALUES: [char; 13] = ['A', '2', '3', '4', '5', '6', '7', '8', '9', '0', 'J', 'Q', 'K'];
const SUITS: [char; 4] = ['S', 'D', 'C', 'H'];

#[derive(Default)]
struct FakeDeck {
    /// Index 0 is the top of the deck.
    stock: Vec<String>,
    /// Every card the deck was created with.
    all: Vec<String>,
    /// Last element is the top of each pile.
    piles: BTreeMap<String, Vec<String>>,
    shuffled: bool,
}

impl FakeDeck {
    fn drawn(&self) -> Vec<String> {
        let mut out = self.all.clone();
        for held in self.stock.iter().chain(self.piles.values().flatten()) {
            if let Some(pos) = out.iter().position(|c| c == held) {
                out.remove(pos);
            }
        }
        out
    }

    fn is_drawn(&self, code: &str) -> bool {
        self.drawn().iter().any(|c| c == code)
            || self.piles.values().flatten().any(|c| c == code)
    }
}

#[derive(Default)]
struct FakeState {
    decks: HashMap<String, FakeDeck>,
    next_id: u32,
}

/// A stub that behaves like the deck service for the endpoints the SDK uses.
///
/// Shuffles are deterministic (reverse, then rotate) and random pile draws
/// take from the middle of the pile.
pub fn fake_deck_service() -> StubServer {
    let state = Arc::new(Mutex::new(FakeState::default()));
    StubServer::start(move |req| {
        let mut state = state.lock().unwrap();
        route(&mut state, req)
    })
}

pub fn standard_codes(deck_count: usize) -> Vec<String> {
    let mut out = Vec::with_capacity(52 * deck_count);
    for _ in 0..deck_count {
        for s in SUITS {
            for v in VALUES {
                out.push(format!("{}{}", v, s));
            }
        }
    }
    out
}

fn fake_shuffle(cards: &mut [String]) {
    cards.reverse();
    let len = cards.len();
    if len > 2 {
        cards.rotate_left(len / 3);
    }
}

fn card_json(code: &str) -> Value {
    let mut chars = code.chars();
    let v = chars.next().unwrap_or('?');
    let s = chars.next().unwrap_or('?');
    let value = match v {
        'A' => "ACE".to_string(),
        '0' => "10".to_string(),
        'J' => "JACK".to_string(),
        'Q' => "QUEEN".to_string(),
        'K' => "KING".to_string(),
        d => d.to_string(),
    };
    let suit = match s {
        'S' => "SPADES",
        'D' => "DIAMONDS",
        'C' => "CLUBS",
        _ => "HEARTS",
    };
    json!({
        "code": code,
        "image": format!("https://deckofcardsapi.com/static/img/{}.png", code),
        "images": {
            "svg": format!("https://deckofcardsapi.com/static/img/{}.svg", code),
            "png": format!("https://deckofcardsapi.com/static/img/{}.png", code)
        },
        "value": value,
        "suit": suit
    })
}

fn failure(message: &str) -> StubResponse {
    StubResponse::json(json!({ "success": false, "error": message }))
}

fn deck_body(id: &str, deck: &FakeDeck) -> Map<String, Value> {
    let mut body = Map::new();
    body.insert("success".into(), json!(true));
    body.insert("deck_id".into(), json!(id));
    body.insert("shuffled".into(), json!(deck.shuffled));
    body.insert("remaining".into(), json!(deck.stock.len()));
    body
}

fn pile_body(id: &str, deck: &FakeDeck, listed: Option<&str>) -> Map<String, Value> {
    let mut body = Map::new();
    body.insert("success".into(), json!(true));
    body.insert("deck_id".into(), json!(id));
    body.insert("remaining".into(), json!(deck.stock.len()));
    let piles: Map<String, Value> = deck
        .piles
        .iter()
        .map(|(name, cards)| {
            let entry = if Some(name.as_str()) == listed {
                json!({
                    "remaining": cards.len(),
                    "cards": cards.iter().map(|c| card_json(c)).collect::<Vec<_>>()
                })
            } else {
                json!({ "remaining": cards.len() })
            };
            (name.clone(), entry)
        })
        .collect();
    body.insert("piles".into(), Value::Object(piles));
    body
}

fn cards_value(codes: &[String]) -> Value {
    Value::Array(codes.iter().map(|c| card_json(c)).collect())
}

fn split_cards(req: &StubRequest) -> Option<Vec<String>> {
    req.param("cards").map(|c| {
        c.split(',')
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string())
            .collect()
    })
}

fn count_param(req: &StubRequest) -> usize {
    req.param("count").and_then(|c| c.parse().ok()).unwrap_or(1)
}

fn route(state: &mut FakeState, req: &StubRequest) -> StubResponse {
    let segments: Vec<&str> = req.path.trim_end_matches('/').split('/').collect();
    match segments.as_slice() {
        ["new"] => new_deck(state, req, false),
        ["new", "shuffle"] => new_deck(state, req, true),
        [id, rest @ ..] => {
            let id = id.to_string();
            let Some(deck) = state.decks.get_mut(&id) else {
                return failure("Deck ID does not exist.");
            };
            match rest {
                [] => StubResponse::json(Value::Object(deck_body(&id, deck))),
                ["shuffle"] => shuffle_deck(&id, deck, req),
                ["draw"] => draw(&id, deck, req),
                ["return"] => return_to_deck(&id, deck, req, None),
                ["pile", pile, "add"] => pile_add(&id, deck, pile, req),
                ["pile", pile, "draw"] => pile_draw(&id, deck, pile, req, "top"),
                ["pile", pile, "draw", position] => pile_draw(&id, deck, pile, req, position),
                ["pile", pile, "list"] => {
                    if !deck.piles.contains_key(*pile) {
                        return failure("Pile does not exist.");
                    }
                    StubResponse::json(Value::Object(pile_body(&id, deck, Some(*pile))))
                }
                ["pile", pile, "shuffle"] => {
                    let Some(cards) = deck.piles.get_mut(*pile) else {
                        return failure("Pile does not exist.");
                    };
                    fake_shuffle(cards);
                    StubResponse::json(Value::Object(pile_body(&id, deck, None)))
                }
                ["pile", pile, "return"] => return_to_deck(&id, deck, req, Some(*pile)),
                _ => StubResponse::raw(404, "Not Found"),
            }
        }
        [] => StubResponse::raw(404, "Not Found"),
    }
}

fn new_deck(state: &mut FakeState, req: &StubRequest, shuffled: bool) -> StubResponse {
    let mut cards = match split_cards(req) {
        Some(cards) => cards,
        None => {
            let count = req
                .param("deck_count")
                .and_then(|c| c.parse().ok())
                .unwrap_or(1);
            standard_codes(count)
        }
    };
    if shuffled {
        fake_shuffle(&mut cards);
    }

    state.next_id += 1;
    let id = format!("fake{:08x}", state.next_id * 7919);
    let deck = FakeDeck {
        stock: cards.clone(),
        all: cards,
        piles: BTreeMap::new(),
        shuffled,
    };
    let body = deck_body(&id, &deck);
    state.decks.insert(id, deck);
    StubResponse::json(Value::Object(body))
}

fn shuffle_deck(id: &str, deck: &mut FakeDeck, req: &StubRequest) -> StubResponse {
    if req.param("remaining") != Some("true") {
        deck.stock = deck.all.clone();
        deck.piles.clear();
    }
    fake_shuffle(&mut deck.stock);
    deck.shuffled = true;
    StubResponse::json(Value::Object(deck_body(id, deck)))
}

fn draw(id: &str, deck: &mut FakeDeck, req: &StubRequest) -> StubResponse {
    let count = count_param(req);
    if count > deck.stock.len() {
        return failure(&format!(
            "Not enough cards remaining to draw {} additional",
            count
        ));
    }
    let drawn: Vec<String> = deck.stock.drain(..count).collect();
    let mut body = deck_body(id, deck);
    body.insert("cards".into(), cards_value(&drawn));
    StubResponse::json(Value::Object(body))
}

fn pile_add(id: &str, deck: &mut FakeDeck, pile: &str, req: &StubRequest) -> StubResponse {
    let cards = split_cards(req).unwrap_or_default();
    let undrawn: Vec<&String> = cards.iter().filter(|c| !deck.is_drawn(c)).collect();
    if !undrawn.is_empty() {
        return failure(&format!(
            "The following cards have not been drawn: {}",
            undrawn
                .iter()
                .map(|c| c.as_str())
                .collect::<Vec<_>>()
                .join(",")
        ));
    }
    for code in &cards {
        for held in deck.piles.values_mut() {
            held.retain(|c| c != code);
        }
    }
    deck.piles
        .entry(pile.to_string())
        .or_default()
        .extend(cards);
    StubResponse::json(Value::Object(pile_body(id, deck, None)))
}

fn pile_draw(
    id: &str,
    deck: &mut FakeDeck,
    pile: &str,
    req: &StubRequest,
    position: &str,
) -> StubResponse {
    let Some(held) = deck.piles.get_mut(pile) else {
        return failure("Pile does not exist.");
    };

    let drawn: Vec<String> = if let Some(cards) = split_cards(req) {
        let missing: Vec<&String> = cards.iter().filter(|c| !held.contains(c)).collect();
        if !missing.is_empty() {
            return failure("The cards requested are not in the pile.");
        }
        held.retain(|c| !cards.contains(c));
        cards
    } else {
        let count = count_param(req);
        if count > held.len() {
            return failure(&format!(
                "Not enough cards remaining to draw {} additional",
                count
            ));
        }
        match position {
            "bottom" => held.drain(..count).collect(),
            "random" => (0..count).map(|_| held.remove(held.len() / 2)).collect(),
            _ => {
                let start = held.len() - count;
                let mut top: Vec<String> = held.drain(start..).collect();
                top.reverse();
                top
            }
        }
    };

    let mut body = pile_body(id, deck, None);
    body.insert("cards".into(), cards_value(&drawn));
    StubResponse::json(Value::Object(body))
}

fn return_to_deck(
    id: &str,
    deck: &mut FakeDeck,
    req: &StubRequest,
    pile: Option<&str>,
) -> StubResponse {
    let requested = split_cards(req);
    let returning: Vec<String> = match (pile, requested) {
        (Some(pile), requested) => {
            let Some(held) = deck.piles.get_mut(pile) else {
                return failure("Pile does not exist.");
            };
            match requested {
                Some(cards) => {
                    held.retain(|c| !cards.contains(c));
                    cards
                }
                None => held.drain(..).collect(),
            }
        }
        (None, Some(cards)) => {
            for held in deck.piles.values_mut() {
                held.retain(|c| !cards.contains(c));
            }
            cards
        }
        (None, None) => deck.drawn(),
    };
    deck.stock.extend(returning);

    let mut body = pile_body(id, deck, None);
    body.insert("shuffled".into(), json!(deck.shuffled));
    StubResponse::json(Value::Object(body))
}

// ---------------------------------------------------------------------------
// Scenario helpers
// ---------------------------------------------------------------------------

/// A fresh unshuffled deck with ten cards drawn into `pile_name`.
///
/// Returns `(deck_id, codes added to the pile, bottom first)`.
pub fn deck_with_pile(api: &DeckOfCards, pile_name: &str) -> (String, Vec<String>) {
    let deck = api.decks().create_deck(1, false).unwrap();
    let drawn = api.decks().draw_cards(&deck.deck_id, 10).unwrap();
    assert_eq!(drawn.deck.remaining, 42);

    let codes: Vec<String> = drawn.cards.iter().map(|c| c.code.clone()).collect();
    let added = api
        .piles()
        .add_to_pile(&deck.deck_id, pile_name, &codes)
        .unwrap();
    assert_eq!(added.piles[pile_name].remaining(), 10);
    (deck.deck_id, codes)
}
