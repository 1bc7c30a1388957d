//! ExacClient + EnrichmentEngine against a local HTTP server that simulates the
//! variant endpoint: hits, misses, server errors, garbage bodies and stalls.

use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::thread;
use std::time::Duration;

use pretty_assertions::assert_eq;
use rstest::*;

use vcfreq_core::{FrequencyResult, LookupKey};
use vcfreq_exac::{EnrichmentEngine, ExacClient};

const API_PATH: &str = "/rest/variant/variant/";

fn respond(mut stream: TcpStream) {
    let mut request_line = String::new();
    let mut reader = BufReader::new(stream.try_clone().unwrap());
    if reader.read_line(&mut request_line).is_err() {
        return;
    }
    // drain the headers
    let mut header = String::new();
    while reader.read_line(&mut header).map(|n| n > 2).unwrap_or(false) {
        header.clear();
    }

    let path = request_line.split_whitespace().nth(1).unwrap_or_default();
    let key = path.strip_prefix(API_PATH).unwrap_or_default();

    let (status, body) = match key {
        "1-100-A-T" => ("200 OK", r#"{"allele_freq": 0.0123, "variant_id": "1-100-A-T"}"#),
        "1-200-C-G" => ("200 OK", r#"{"variant_id": "1-200-C-G"}"#),
        "1-300-G-A" => ("500 Internal Server Error", ""),
        "1-400-T-C" => ("200 OK", "<html>maintenance</html>"),
        "1-500-A-C" => {
            thread::sleep(Duration::from_secs(3));
            ("200 OK", r#"{"allele_freq": 0.5}"#)
        }
        _ => ("404 Not Found", ""),
    };

    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.flush();
}

#[fixture]
fn base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            thread::spawn(move || respond(stream));
        }
    });
    format!("http://{}{}", addr, API_PATH)
}

#[fixture]
fn client(base_url: String) -> ExacClient {
    ExacClient::builder()
        .with_base_url(base_url)
        .with_timeout(Duration::from_secs(1))
        .finish()
        .unwrap()
}

#[rstest]
#[case(LookupKey::new("1", "100", "A", "T"), FrequencyResult::Value("0.0123".to_string()))]
#[case(LookupKey::new("1", "200", "C", "G"), FrequencyResult::NotAvailable)]
#[case(LookupKey::new("1", "300", "G", "A"), FrequencyResult::Error)]
#[case(LookupKey::new("1", "400", "T", "C"), FrequencyResult::Error)]
#[case(LookupKey::new("1", "500", "A", "C"), FrequencyResult::Error)]
#[case(LookupKey::new("9", "1", "A", "C"), FrequencyResult::Error)]
fn test_single_lookup(
    client: ExacClient,
    #[case] key: LookupKey,
    #[case] expected: FrequencyResult,
) {
    assert_eq!(client.fetch_frequency(&key), expected);
}

#[rstest]
#[case(1)]
#[case(3)]
#[case(50)]
fn test_engine_over_http(client: ExacClient, #[case] workers: usize) {
    let keys = vec![
        LookupKey::new("1", "100", "A", "T"),
        LookupKey::new("1", "200", "C", "G"),
        LookupKey::new("1", "300", "G", "A"),
        LookupKey::new("1", "400", "T", "C"),
        LookupKey::new("1", "500", "A", "C"),
        LookupKey::new("1", "100", "A", "T"),
    ];

    let engine = EnrichmentEngine::new(client, workers).unwrap();
    let map = engine.resolve(&keys).unwrap();

    assert_eq!(map.len(), 5);
    assert_eq!(map.get(&keys[0]).unwrap().as_str(), "0.0123");
    assert_eq!(map.get(&keys[1]).unwrap().as_str(), "Not Available");
    assert_eq!(map.get(&keys[2]).unwrap().as_str(), "error");
    assert_eq!(map.get(&keys[3]).unwrap().as_str(), "error");
    assert_eq!(map.get(&keys[4]).unwrap().as_str(), "error");
}
