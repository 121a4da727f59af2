use crate::{abi::IUniswapV2Factory, constants::UNISWAP_V2_FACTORY_ADDRESS};

use alloy::{
    primitives::{address, Address, Log, U256},
    rpc::types::eth::Log as RpcLog,
    sol_types::SolEvent,
};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::{TcpListener, TcpStream},
};
use url::Url;

pub const TOKEN_A: Address = address!("1f9840a85d5aF5bf1D1762F925BDADdC4201F984");
pub const TOKEN_B: Address = address!("C02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2");
pub const PAIR_C: Address = address!("d3d2E2692501A5c9Ca623199D38826e513033a17");

pub fn pair_created_log(
    token0: Address,
    token1: Address,
    pair: Address,
    block_number: u64,
) -> RpcLog {
    let event = IUniswapV2Factory::PairCreated {
        token0,
        token1,
        pair,
        pairIndex: U256::from(1),
    };

    RpcLog {
        inner: Log {
            address: UNISWAP_V2_FACTORY_ADDRESS,
            data: event.encode_log_data(),
        },
        block_number: Some(block_number),
        ..Default::default()
    }
}

pub type Requests = Arc<Mutex<Vec<String>>>;

type Responder = Arc<dyn Fn(&str) -> (u16, String) + Send + Sync>;

/// Serves every request on a local port with `respond(body)` and records the
/// raw request text.
pub async fn spawn_http_stub<F>(respond: F) -> (Url, Requests)
where
    F: Fn(&str) -> (u16, String) + Send + Sync + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = Url::parse(&format!("http://{}", listener.local_addr().unwrap())).unwrap();
    let requests: Requests = Arc::new(Mutex::new(Vec::new()));
    let respond: Responder = Arc::new(respond);

    let recorded = Arc::clone(&requests);
    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let recorded = Arc::clone(&recorded);
            let respond = Arc::clone(&respond);
            tokio::spawn(async move {
                let Ok(request) = read_request(&mut socket).await else {
                    return;
                };
                let body = request
                    .split_once("\r\n\r\n")
                    .map(|(_, body)| body)
                    .unwrap_or_default();
                let (status, response_body) = respond(body);
                recorded.lock().unwrap().push(request.clone());

                let response = format!(
                    "HTTP/1.1 {} STUB\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    response_body.len(),
                    response_body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    (url, requests)
}

/// Accepts connections and never answers.
pub async fn spawn_silent_stub() -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = Url::parse(&format!("http://{}", listener.local_addr().unwrap())).unwrap();

    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });

    url
}

/// Wraps `result` in a JSON-RPC response echoing the request id.
pub fn jsonrpc_result(request_body: &str, result: Value) -> String {
    json!({ "jsonrpc": "2.0", "id": request_id(request_body), "result": result }).to_string()
}

pub fn jsonrpc_error(request_body: &str, code: i64, message: &str) -> String {
    json!({
        "jsonrpc": "2.0",
        "id": request_id(request_body),
        "error": { "code": code, "message": message }
    })
    .to_string()
}

fn request_id(request_body: &str) -> Value {
    serde_json::from_str::<Value>(request_body)
        .ok()
        .and_then(|v| v.get("id").cloned())
        .unwrap_or(json!(0))
}

async fn read_request(socket: &mut TcpStream) -> std::io::Result<String> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    loop {
        let n = socket.read(&mut chunk).await?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        if let Some(header_end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            let head = String::from_utf8_lossy(&buf[..header_end]);
            let content_length = head
                .lines()
                .filter_map(|line| line.split_once(':'))
                .find(|(k, _)| k.trim().eq_ignore_ascii_case("content-length"))
                .and_then(|(_, v)| v.trim().parse::<usize>().ok())
                .unwrap_or(0);

            if buf.len() >= header_end + 4 + content_length {
                break;
            }
        }
    }

    Ok(String::from_utf8_lossy(&buf).into_owned())
}
