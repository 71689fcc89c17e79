use crate::db::connection::{init_db, Database};
use astra::{Body, Request, Response};
use http::Method;
use rusqlite::Connection;
use std::io::Read;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

/// A fixture database under temp_dir plus the read-only handle under test.
pub struct TestDb {
    pub db: Database,
    pub path: PathBuf,
}

impl TestDb {
    /// Seed fixture rows through a throwaway writable connection; the
    /// handle under test stays read-only.
    pub fn seed(&self, sql: &str) {
        let conn = Connection::open(&self.path).expect("open writable fixture connection");
        conn.execute_batch(sql).expect("seed fixture data");
    }
}

/// Initialize a fresh test DB using the production schema.
pub fn init_test_db(tag: &str) -> TestDb {
    let path = temp_db_path(tag);
    let path_str = path.to_str().expect("temp path is valid utf-8");

    init_db(path_str, "sql/schema.sql")
        .unwrap_or_else(|e| panic!("Database initialization failed: {e}"));

    TestDb {
        db: Database::new(path_str),
        path,
    }
}

/// A database file with no schema applied at all.
pub fn init_bare_db(tag: &str) -> TestDb {
    let path = temp_db_path(tag);
    Connection::open(&path).expect("create bare database file");

    TestDb {
        db: Database::new(path.to_str().expect("temp path is valid utf-8")),
        path,
    }
}

fn temp_db_path(tag: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("{tag}_{nanos}.sqlite"))
}

/// Build a GET request the way astra hands one to the router.
pub fn get(uri: &str) -> Request {
    http::Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .expect("build request")
}

pub fn body_string(resp: &mut Response) -> String {
    let mut buf = Vec::new();
    resp.body_mut()
        .reader()
        .read_to_end(&mut buf)
        .expect("read response body");
    String::from_utf8(buf).expect("response body is utf-8")
}
