use serde_json::Value;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

#[derive(thiserror::Error, Debug)]
pub enum RetrieveError {
    #[error("no such resource: {0}")]
    NoSuchResource(String),

    #[error("read schema fragment '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse schema fragment '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Resolves `$ref` targets from one local directory of schema sections.
///
/// Only URIs under [`LocalSchemaRetriever::prefix`] (the `file://` URI of the directory) are
/// served. Anything else, including names that climb out of the directory, is refused.
#[derive(Debug, Clone)]
pub struct LocalSchemaRetriever {
    dir: PathBuf,
    prefix: String,
}

impl LocalSchemaRetriever {
    pub fn new(sections_dir: impl AsRef<Path>) -> std::io::Result<Self> {
        let dir = std::path::absolute(sections_dir.as_ref())?;
        let prefix = directory_uri(&dir);
        Ok(Self { dir, prefix })
    }

    /// Base URI that every retrievable resource starts with; ends in `/`.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn resolve(&self, uri: &str) -> Result<PathBuf, RetrieveError> {
        let refused = || RetrieveError::NoSuchResource(uri.to_owned());
        let rest = uri.strip_prefix(self.prefix.as_str()).ok_or_else(refused)?;
        let raw = rest.split('#').next().unwrap_or_default();
        if raw.contains('?') {
            return Err(refused());
        }
        let name = percent_decode(raw).ok_or_else(refused)?;
        if name.is_empty()
            || name.contains(['\\', '\0'])
            || name.split('/').any(|seg| seg.is_empty() || seg == "." || seg == "..")
        {
            return Err(refused());
        }
        Ok(self.dir.join(&name))
    }

    pub fn load(&self, uri: &str) -> Result<Value, RetrieveError> {
        let path = self.resolve(uri)?;
        tracing::debug!(uri, path = %path.display(), "loading schema fragment");
        let f = File::open(&path).map_err(|source| RetrieveError::Read {
            path: path.clone(),
            source,
        })?;
        serde_json::from_reader(BufReader::new(f))
            .map_err(|source| RetrieveError::Parse { path, source })
    }
}

impl jsonschema::Retrieve for LocalSchemaRetriever {
    fn retrieve(
        &self,
        uri: &jsonschema::Uri<String>,
    ) -> Result<Value, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.load(uri.as_str())?)
    }
}

fn directory_uri(dir: &Path) -> String {
    let path = dir.to_string_lossy().replace('\\', "/");
    let mut s = String::with_capacity(path.len() + 8);
    if !path.starts_with('/') {
        s.push('/');
    }
    for b in path.bytes() {
        if is_path_char(b) {
            s.push(char::from(b));
        } else {
            s.push_str(&format!("%{b:02X}"));
        }
    }
    if !s.ends_with('/') {
        s.push('/');
    }
    format!("file://{s}")
}

/// RFC 3986 `pchar` plus the segment separator, minus `%`.
fn is_path_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b"-._~!$&'()*+,;=:@/".contains(&b)
}

fn percent_decode(s: &str) -> Option<String> {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hex = std::str::from_utf8(bytes.get(i + 1..i + 3)?).ok()?;
            out.push(u8::from_str_radix(hex, 16).ok()?);
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    String::from_utf8(out).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn retriever() -> (tempfile::TempDir, LocalSchemaRetriever) {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("residue.json"), r#"{ "type": "object" }"#).unwrap();
        std::fs::write(dir.path().join("broken.json"), "{").unwrap();
        let r = LocalSchemaRetriever::new(dir.path()).unwrap();
        (dir, r)
    }

    #[test]
    fn prefix_is_a_file_uri_with_trailing_slash() {
        let (_dir, r) = retriever();
        assert!(r.prefix().starts_with("file:///"));
        assert!(r.prefix().ends_with('/'));
    }

    #[test]
    fn loads_fragment_under_prefix() {
        let (_dir, r) = retriever();
        let v = r.load(&format!("{}residue.json", r.prefix())).unwrap();
        assert_eq!(v["type"], "object");
        let v = r.load(&format!("{}residue.json#/definitions", r.prefix())).unwrap();
        assert_eq!(v["type"], "object");
    }

    #[test]
    fn refuses_other_schemes_and_prefixes() {
        let (_dir, r) = retriever();
        for uri in [
            "http://example.com/residue.json".to_owned(),
            "file:///etc/passwd".to_owned(),
            "json-schema:///residue.json".to_owned(),
            r.prefix().to_owned(),
        ] {
            assert!(
                matches!(r.load(&uri), Err(RetrieveError::NoSuchResource(_))),
                "{uri}"
            );
        }
    }

    #[test]
    fn refuses_traversal_out_of_the_directory() {
        let (_dir, r) = retriever();
        for name in ["../secret.json", "a/../../b.json", "./residue.json", "a//b.json"] {
            let uri = format!("{}{name}", r.prefix());
            assert!(
                matches!(r.load(&uri), Err(RetrieveError::NoSuchResource(_))),
                "{uri}"
            );
        }
    }

    #[test]
    fn read_and_parse_failures_are_distinct() {
        let (_dir, r) = retriever();
        assert!(matches!(
            r.load(&format!("{}missing.json", r.prefix())),
            Err(RetrieveError::Read { .. })
        ));
        assert!(matches!(
            r.load(&format!("{}broken.json", r.prefix())),
            Err(RetrieveError::Parse { .. })
        ));
    }

    #[test]
    fn prefix_escapes_characters_outside_uri_paths() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("c#sharp 100%");
        std::fs::create_dir(&dir).unwrap();
        std::fs::write(dir.join("leaf.json"), r#"{ "type": "integer" }"#).unwrap();

        let r = LocalSchemaRetriever::new(&dir).unwrap();
        assert!(r.prefix().ends_with("/c%23sharp%20100%25/"), "{}", r.prefix());
        assert!(!r.prefix().contains('#'));

        let v = r.load(&format!("{}leaf.json", r.prefix())).unwrap();
        assert_eq!(v["type"], "integer");
    }

    #[test]
    fn encoded_names_are_decoded_before_the_traversal_check() {
        let (dir, r) = retriever();
        std::fs::write(dir.path().join("two words.json"), "{}").unwrap();
        assert!(r.load(&format!("{}two%20words.json", r.prefix())).is_ok());
        for name in ["..%2Fsecret.json", "%2E%2E/secret.json", "bad%zz.json"] {
            let uri = format!("{}{name}", r.prefix());
            assert!(
                matches!(r.load(&uri), Err(RetrieveError::NoSuchResource(_))),
                "{uri}"
            );
        }
    }
}
