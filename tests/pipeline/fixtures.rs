//! Shared site fixtures written into temporary data directories.

use std::fs;
use std::path::Path;

use scholarsite::sources::DataSource;
use scraper::{Html, Selector};
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

pub const NEWS: &str = r#"[
  {"date": "2024-09-01", "title": "Started at the institute", "summary": ""},
  {"date": "2025-03-14", "title": "Paper accepted", "summary": "At SODA.", "link": "https://conf.example/soda"}
]"#;

pub const TEACHING: &str = r#"[
  {"course": "Algorithms", "term": "Fall 2024", "description": "Graph search and dynamic programming.",
   "resources": [{"file": "files/alg-syllabus.pdf", "label": "Syllabus"}]},
  {"course": "Discrete Mathematics", "term": "Spring 2025",
   "resources": [{"file": "https://notes.example/dm", "label": "Lecture notes"}]},
  {"course": "Logic Seminar", "term": "Fall 2024"}
]"#;

pub const PUBLICATIONS: &str = r#"{
  "preprints": [
    {"title": "Beta bounds", "authors": "A. Author", "venue": "arXiv", "year": 2021, "pdf": "files/beta.pdf"},
    {"title": "alpha sketches", "authors": "A. Author", "venue": "arXiv", "year": "2023"},
    {"title": "Gamma notes", "authors": "A. Author", "venue": "arXiv", "year": 2021, "link": "https://arxiv.example/g"}
  ],
  "peerReviewed": []
}"#;

pub const PRESENTATIONS: &str = "[]";

pub const RESEARCH: &str = r#"{
  "lead": "I study graphs.",
  "topics": [{"title": "Graph minors", "summary": "Structure theory."}, {"title": "Sparsity"}]
}"#;

/// What: Write a site root with the given data files.
///
/// Inputs:
/// - `files`: `(name, contents)` pairs written under `data/`.
///
/// Output:
/// - Temp dir (kept alive by the caller) and a directory data source pointing at it.
pub fn site(files: &[(&str, &str)]) -> (TempDir, DataSource) {
    let tmp = tempfile::tempdir().expect("tempdir");
    let data = tmp.path().join("data");
    fs::create_dir_all(&data).expect("data dir");
    for (name, body) in files {
        fs::write(data.join(name), body).expect("write data file");
    }
    let source = DataSource::Directory(tmp.path().to_path_buf());
    (tmp, source)
}

/// Site with every collection populated.
pub fn full_site() -> (TempDir, DataSource) {
    site(&[
        ("news.json", NEWS),
        ("teaching.json", TEACHING),
        ("publications.json", PUBLICATIONS),
        ("presentations.json", PRESENTATIONS),
        ("research.json", RESEARCH),
    ])
}

/// Write `html` as `index.html` under `dir`.
pub fn write_template(dir: &Path, html: &str) -> std::path::PathBuf {
    let path = dir.join("index.html");
    fs::write(&path, html).expect("write template");
    path
}

/// Text of every element matching `selector` in `html`.
pub fn texts(html: &str, selector: &str) -> Vec<String> {
    let doc = Html::parse_document(html);
    let sel = Selector::parse(selector).expect("selector");
    doc.select(&sel)
        .map(|e| e.text().collect::<String>().trim().to_string())
        .collect()
}

/// Value of `attr` on every element matching `selector` in `html`.
pub fn attrs(html: &str, selector: &str, attr: &str) -> Vec<Option<String>> {
    let doc = Html::parse_document(html);
    let sel = Selector::parse(selector).expect("selector");
    doc.select(&sel)
        .map(|e| e.value().attr(attr).map(str::to_string))
        .collect()
}

/// What: Serve data files over HTTP from a local listener.
///
/// Inputs:
/// - `files`: `(name, contents)` pairs served under `/data/`; anything else is a 404.
///
/// Output:
/// - Remote data source for the server root and the server task (abort when done).
pub async fn serve(files: &'static [(&'static str, &'static str)]) -> (DataSource, tokio::task::JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    let handle = tokio::spawn(async move {
        while let Ok((mut stream, _)) = listener.accept().await {
            let mut buf = vec![0_u8; 4096];
            let mut read = 0;
            while !buf[..read].windows(4).any(|w| w == b"\r\n\r\n") {
                match stream.read(&mut buf[read..]).await {
                    Ok(0) | Err(_) => break,
                    Ok(n) => read += n,
                }
            }
            let request = String::from_utf8_lossy(&buf[..read]).to_string();
            let path = request.split_whitespace().nth(1).unwrap_or_default().to_string();
            let found = files
                .iter()
                .find(|(name, _)| path == format!("/data/{name}"))
                .map(|(_, body)| *body);
            let (status, body) = match found {
                Some(body) => ("200 OK", body),
                None => ("404 Not Found", "not found"),
            };
            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = stream.write_all(response.as_bytes()).await;
            let _ = stream.shutdown().await;
        }
    });
    let source = DataSource::parse(&format!("http://{addr}/")).expect("remote source");
    (source, handle)
}
