//! Tests for the source module

use super::*;
use crate::error::Error;
use std::io::{Read, Write};
use std::path::PathBuf;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn test_parse_remote() {
    let locator = SourceLocator::parse("https://acct.blob.core.windows.net/sre/perf/perf1.csv");
    assert!(locator.is_remote());
    assert_eq!(locator.table_name(), Some("perf1".to_string()));
}

#[test]
fn test_parse_local() {
    let locator = SourceLocator::parse("data/consumers2.csv");
    assert_eq!(locator, SourceLocator::Local(PathBuf::from("data/consumers2.csv")));
    assert!(!locator.is_remote());
    assert_eq!(locator.table_name(), Some("consumers2".to_string()));
}

#[test]
fn test_parse_file_url() {
    let locator = SourceLocator::parse("file:///tmp/events.csv");
    assert_eq!(locator, SourceLocator::Local(PathBuf::from("/tmp/events.csv")));
}

#[test]
fn test_table_name_takes_first_dotted_part() {
    let locator = SourceLocator::parse("exports/metrics.2024.csv");
    assert_eq!(locator.table_name(), Some("metrics".to_string()));
}

#[test]
fn test_table_name_missing() {
    let locator = SourceLocator::parse("https://example.com/");
    assert_eq!(locator.table_name(), None);
}

#[test]
fn test_display() {
    let locator = SourceLocator::from("https://example.com/a.csv");
    assert_eq!(locator.to_string(), "https://example.com/a.csv");
}

#[test]
fn test_from_path_missing_file() {
    let result = CsvSource::from_path("/definitely/not/here.csv");
    assert!(matches!(result, Err(Error::FileNotFound { .. })));
}

#[test]
fn test_readers_are_independent() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "a,b\n1,2\n").unwrap();

    let source = CsvSource::from_path(file.path()).unwrap();

    let mut first = String::new();
    source.reader().unwrap().read_to_string(&mut first).unwrap();
    let mut second = String::new();
    source.reader().unwrap().read_to_string(&mut second).unwrap();

    assert_eq!(first, "a,b\n1,2\n");
    assert_eq!(first, second);
}

#[test]
fn test_memory_source() {
    let source = CsvSource::from_bytes(SourceLocator::parse("mem.csv"), "x\n1\n");
    let mut content = String::new();
    source.reader().unwrap().read_to_string(&mut content).unwrap();
    assert_eq!(content, "x\n1\n");
}

#[tokio::test]
async fn test_loader_fetches_remote() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/sre/perf1.csv"))
        .respond_with(ResponseTemplate::new(200).set_body_string("id,name\n1,alpha\n"))
        .mount(&mock_server)
        .await;

    let locator = SourceLocator::parse(&format!("{}/sre/perf1.csv", mock_server.uri()));
    let source = SourceLoader::new().open(&locator).await.unwrap();

    let mut content = String::new();
    source.reader().unwrap().read_to_string(&mut content).unwrap();
    assert_eq!(content, "id,name\n1,alpha\n");
    assert_eq!(source.locator(), &locator);
}

#[tokio::test]
async fn test_loader_remote_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let locator = SourceLocator::parse(&format!("{}/missing.csv", mock_server.uri()));
    let err = SourceLoader::new().open(&locator).await.unwrap_err();

    match err {
        Error::SourceFetch { status, .. } => assert_eq!(status, 404),
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_loader_local_missing() {
    let locator = SourceLocator::parse("/no/such/file.csv");
    let result = SourceLoader::new().open(&locator).await;
    assert!(matches!(result, Err(Error::FileNotFound { .. })));
}
