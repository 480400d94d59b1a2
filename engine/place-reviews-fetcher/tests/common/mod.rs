use serde_json::Value;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use warp::http::StatusCode;
use warp::Filter;

/// Query parameters of the last request the stub received
pub type SeenQuery = Arc<Mutex<Option<HashMap<String, String>>>>;

/// Serve `body` with `status` at `/details/json` on an ephemeral localhost port
pub fn spawn_places_stub(status: StatusCode, body: Value) -> (SocketAddr, SeenQuery) {
    let seen: SeenQuery = Arc::new(Mutex::new(None));
    let recorder = seen.clone();

    let route = warp::path!("details" / "json")
        .and(warp::get())
        .and(warp::query::<HashMap<String, String>>())
        .map(move |query: HashMap<String, String>| {
            *recorder.lock().unwrap() = Some(query);
            warp::reply::with_status(warp::reply::json(&body), status)
        });

    let (addr, server) = warp::serve(route).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);
    (addr, seen)
}

pub fn details_url(addr: SocketAddr) -> String {
    format!("http://{addr}/details/json")
}
