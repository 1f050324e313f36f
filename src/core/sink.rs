use crate::domain::model::Delivery;
use crate::domain::ports::Storage;
use crate::utils::error::Result;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;
use std::io::Write;
use std::path::PathBuf;

const INDENT: &[u8] = b"    ";

/// Decodes a response body into an opaque JSON document.
pub fn decode_document(body: &[u8]) -> Result<Value> {
    Ok(serde_json::from_slice(body)?)
}

/// Pretty JSON with four-space indentation and no trailing newline.
pub fn to_pretty_json(document: &Value) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    document.serialize(&mut serializer)?;
    Ok(buf)
}

/// Routes a successful result to a file or to `out`.
///
/// `silent` mutes the confirmation banners only. When no output path is set,
/// the document itself is always printed.
pub struct ResultSink<S: Storage> {
    storage: S,
    output: Option<PathBuf>,
    silent: bool,
}

impl<S: Storage> ResultSink<S> {
    pub fn new(storage: S, output: Option<PathBuf>, silent: bool) -> Self {
        Self {
            storage,
            output,
            silent,
        }
    }

    pub async fn deliver<W: Write + Send>(&self, document: &Value, out: &mut W) -> Result<Delivery> {
        let rendered = to_pretty_json(document)?;

        match &self.output {
            Some(path) => {
                tracing::debug!("Writing {} bytes to {}", rendered.len(), path.display());
                self.storage.write_file(path, &rendered).await?;
                if !self.silent {
                    writeln!(out, "✅ Query successful! Results saved to: {}", path.display())?;
                }
                Ok(Delivery::File(path.clone()))
            }
            None => {
                if !self.silent {
                    writeln!(out, "✅ Query successful!")?;
                }
                out.write_all(&rendered)?;
                writeln!(out)?;
                Ok(Delivery::Stdout)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::path::Path;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<PathBuf, Vec<u8>>>>,
    }

    impl MockStorage {
        fn get_file(&self, path: &Path) -> Option<Vec<u8>> {
            self.files.lock().unwrap().get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        async fn write_file(&self, path: &Path, data: &[u8]) -> Result<()> {
            self.files
                .lock()
                .unwrap()
                .insert(path.to_path_buf(), data.to_vec());
            Ok(())
        }
    }

    fn sample() -> Value {
        decode_document(br#"{"status":"success","data":{"resultType":"vector","result":[]}}"#)
            .unwrap()
    }

    #[test]
    fn test_pretty_json_uses_four_spaces_and_keeps_key_order() {
        let rendered = to_pretty_json(&sample()).unwrap();
        let expected = "{\n    \"status\": \"success\",\n    \"data\": {\n        \"resultType\": \"vector\",\n        \"result\": []\n    }\n}";
        assert_eq!(String::from_utf8(rendered).unwrap(), expected);
    }

    #[test]
    fn test_decode_rejects_non_json() {
        assert!(decode_document(b"<html>login</html>").is_err());
    }

    #[tokio::test]
    async fn test_file_delivery_announces_path() {
        let storage = MockStorage::default();
        let sink = ResultSink::new(storage.clone(), Some(PathBuf::from("out.json")), false);
        let mut out = Vec::new();

        let delivery = sink.deliver(&sample(), &mut out).await.unwrap();

        assert_eq!(delivery, Delivery::File(PathBuf::from("out.json")));
        assert_eq!(
            storage.get_file(Path::new("out.json")).unwrap(),
            to_pretty_json(&sample()).unwrap()
        );
        let printed = String::from_utf8(out).unwrap();
        assert_eq!(printed, "✅ Query successful! Results saved to: out.json\n");
    }

    #[tokio::test]
    async fn test_silent_file_delivery_prints_nothing() {
        let storage = MockStorage::default();
        let sink = ResultSink::new(storage.clone(), Some(PathBuf::from("out.json")), true);
        let mut out = Vec::new();

        sink.deliver(&sample(), &mut out).await.unwrap();

        assert!(out.is_empty());
        assert!(storage.get_file(Path::new("out.json")).is_some());
    }

    #[tokio::test]
    async fn test_stdout_delivery_prints_banner_then_document() {
        let sink = ResultSink::new(MockStorage::default(), None, false);
        let mut out = Vec::new();

        let delivery = sink.deliver(&sample(), &mut out).await.unwrap();

        assert_eq!(delivery, Delivery::Stdout);
        let printed = String::from_utf8(out).unwrap();
        assert!(printed.starts_with("✅ Query successful!\n{\n    \"status\""));
        assert!(printed.ends_with("}\n"));
    }

    #[tokio::test]
    async fn test_silent_stdout_delivery_still_prints_document() {
        let sink = ResultSink::new(MockStorage::default(), None, true);
        let mut out = Vec::new();

        sink.deliver(&sample(), &mut out).await.unwrap();

        let printed = String::from_utf8(out).unwrap();
        assert!(!printed.contains("Query successful"));
        assert!(printed.starts_with("{\n    \"status\": \"success\""));
    }
}
