use serde::Serialize;
use std::io::Write;

/// Write records to an output stream, one JSON object per line.
pub fn write_jsonl<T: Serialize>(out: &mut dyn Write, records: &[T]) -> Result<(), String> {
    for record in records {
        serde_json::to_writer(&mut *out, record)
            .map_err(|error| format!("failed to serialize JSON record: {error}"))?;
        out.write_all(b"\n")
            .map_err(|error| format!("failed to write JSONL newline: {error}"))?;
    }

    out.flush()
        .map_err(|error| format!("failed to flush JSONL output: {error}"))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::write_jsonl;
    use crate::pipeline::skipped_record;
    use crate::refusal::{BadInputDetail, RefusalCode, RefusalDetail, build_envelope};
    use serde_json::Value;
    use std::io::{Cursor, Error, ErrorKind, Write};

    #[test]
    fn writes_empty_record_set() {
        let mut out = Cursor::new(Vec::new());
        write_jsonl::<Value>(&mut out, &[]).expect("write empty records");
        assert!(out.into_inner().is_empty());
    }

    #[test]
    fn writes_one_line_per_record() {
        let records = vec![
            skipped_record("a.txt", "unreadable"),
            skipped_record("b.txt", "unreadable"),
        ];
        let mut out = Cursor::new(Vec::new());

        write_jsonl(&mut out, &records).expect("write records");

        let output = String::from_utf8(out.into_inner()).expect("valid UTF-8 output");
        assert_eq!(
            output,
            "{\"version\":\"occurs.v0\",\"path\":\"a.txt\",\"outcome\":\"SKIPPED\",\"checks\":[],\"error\":\"unreadable\"}\n\
             {\"version\":\"occurs.v0\",\"path\":\"b.txt\",\"outcome\":\"SKIPPED\",\"checks\":[],\"error\":\"unreadable\"}\n"
        );
    }

    #[test]
    fn writes_refusal_envelope_as_single_json_object_line() {
        let envelope = build_envelope(
            RefusalCode::BadInput,
            "Failed to read suite",
            RefusalDetail::BadInput(BadInputDetail {
                path: Some("checks.yaml".to_owned()),
                error: "not found".to_owned(),
            }),
            Some("occurs --suite <FILE>".to_owned()),
        );
        let mut out = Cursor::new(Vec::new());

        write_jsonl(&mut out, &[envelope]).expect("write refusal");

        let output = String::from_utf8(out.into_inner()).expect("valid UTF-8 output");
        assert_eq!(
            output,
            "{\"version\":\"occurs.v0\",\"outcome\":\"REFUSAL\",\"refusal\":{\"code\":\"E_BAD_INPUT\",\"message\":\"Failed to read suite\",\"detail\":{\"path\":\"checks.yaml\",\"error\":\"not found\"},\"next_command\":\"occurs --suite <FILE>\"}}\n"
        );
    }

    #[test]
    fn surfaces_write_errors() {
        struct AlwaysFailWriter;

        impl Write for AlwaysFailWriter {
            fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
                Err(Error::new(ErrorKind::BrokenPipe, "write failed"))
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let mut writer = AlwaysFailWriter;
        let error = write_jsonl(&mut writer, &[skipped_record("a.txt", "unreadable")])
            .expect_err("fail");
        assert!(error.contains("failed to serialize JSON record"));
    }
}
