//! Shared utilities for integration tests: a scripted `TraitReader` and a
//! mock JSON-RPC node.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use alloy::primitives::B256;
use galaxy_data::blockchain::BlockchainError;
use galaxy_data::galaxy::{GalaxyError, TokenId, TraitReader};
use galaxy_data::Config;
use serde_json::{json, Value};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

pub const TEST_PRIVATE_KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
pub const TEST_ADDRESS: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";
pub const TEST_CONTRACT: &str = "0x5FbDB2315678afecb367f032d93F642f64180aa3";

/// Config that passes the network guard and points at `rpc_url`.
pub fn mumbai_config(rpc_url: &str) -> Config {
    let mut config = Config {
        network: Some("mumbai".into()),
        private_key: Some(TEST_PRIVATE_KEY.into()),
        public_key: Some(TEST_ADDRESS.into()),
        ..Config::default()
    };
    config.blockchain.rpc_url = rpc_url.to_string();
    config.blockchain.rpc_timeout_secs = 5;
    config.blockchain.contract_address = Some(TEST_CONTRACT.into());
    config
}

/// Right-padded `bytes32` label, as the contract stores it.
#[allow(dead_code)]
pub fn label(text: &str) -> B256 {
    let mut word = B256::ZERO;
    word[..text.len()].copy_from_slice(text.as_bytes());
    word
}

/// `TraitReader` returning canned data and counting calls.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockReader {
    pub traits: Vec<String>,
    pub values: Vec<Vec<String>>,
    pub fail_with: Option<String>,
    pub calls: Arc<AtomicU32>,
}

#[allow(dead_code)]
impl MockReader {
    pub fn new(traits: &[&str], values: &[&[&str]]) -> Self {
        Self {
            traits: traits.iter().map(|s| s.to_string()).collect(),
            values: values
                .iter()
                .map(|list| list.iter().map(|s| s.to_string()).collect())
                .collect(),
            ..Self::default()
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn call_count(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }

    fn check(&self) -> Result<(), GalaxyError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.fail_with {
            Some(message) => Err(BlockchainError::Rpc(message.clone()).into()),
            None => Ok(()),
        }
    }
}

impl TraitReader for MockReader {
    async fn get_traits(&self, _token_id: &TokenId) -> Result<Vec<String>, GalaxyError> {
        self.check()?;
        Ok(self.traits.clone())
    }

    async fn get_traits_available_values(
        &self,
        _token_id: &TokenId,
    ) -> Result<Vec<Vec<String>>, GalaxyError> {
        self.check()?;
        Ok(self.values.clone())
    }
}

/// JSON-RPC reply produced by a mock node handler.
#[allow(dead_code)]
pub enum RpcReply {
    Result(Value),
    Error { code: i64, message: String },
}

/// Start a mock JSON-RPC node on an ephemeral port.
///
/// `handler` receives the method name and params of every request. Returns
/// the bound address and a counter of requests served.
#[allow(dead_code)]
pub async fn start_mock_node<F>(handler: F) -> (SocketAddr, Arc<AtomicU32>)
where
    F: Fn(&str, &Value) -> RpcReply + Send + Sync + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handler = Arc::new(handler);
    let served = Arc::new(AtomicU32::new(0));
    let counter = served.clone();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let handler = handler.clone();
                    let counter = counter.clone();
                    tokio::spawn(async move {
                        let Some(body) = read_request_body(&mut socket).await else {
                            return;
                        };
                        let Ok(request) = serde_json::from_slice::<Value>(&body) else {
                            return;
                        };
                        counter.fetch_add(1, Ordering::SeqCst);

                        let method = request["method"].as_str().unwrap_or_default();
                        let params = &request["params"];
                        let mut reply = json!({ "jsonrpc": "2.0", "id": request["id"].clone() });
                        match handler(method, params) {
                            RpcReply::Result(value) => reply["result"] = value,
                            RpcReply::Error { code, message } => {
                                reply["error"] = json!({ "code": code, "message": message })
                            }
                        }

                        let payload = reply.to_string();
                        let response = format!(
                            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            payload.len(),
                            payload
                        );
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    (addr, served)
}

#[allow(dead_code)]
async fn read_request_body(socket: &mut TcpStream) -> Option<Vec<u8>> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    let header_end = loop {
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let content_length = head
        .lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse::<usize>().ok())
        .unwrap_or(0);

    let body_start = header_end + 4;
    while buf.len() < body_start + content_length {
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    Some(buf[body_start..body_start + content_length].to_vec())
}

/// Calldata of an `eth_call` request, however the client spelled the field.
#[allow(dead_code)]
pub fn call_input(params: &Value) -> String {
    let tx = &params[0];
    tx["input"]
        .as_str()
        .or_else(|| tx["data"].as_str())
        .unwrap_or_default()
        .to_string()
}
