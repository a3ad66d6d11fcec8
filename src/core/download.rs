use crate::error::{FetchError, Result};
use crate::utils::fs;
use flate2::read::MultiGzDecoder;
use reqwest::blocking::Client;
use std::fs::File;
use std::io::{ErrorKind, Read, Write};
use std::path::Path;

const CHUNK_SIZE: usize = 64 * 1024;

pub struct Downloader {
    client: Client,
}

impl Downloader {
    pub fn new() -> Result<Self> {
        // The dataset is several gigabytes; only connection setup may time out.
        let client = Client::builder()
            .timeout(None)
            .build()
            .map_err(FetchError::Client)?;
        log::debug!("HTTP client ready");
        Ok(Self { client })
    }

    /// Downloads `url` and writes its gunzipped body to `destination`.
    ///
    /// Returns the number of decompressed bytes written. A non-2xx status
    /// fails before the destination is touched.
    pub fn fetch_gzip(&self, url: &str, destination: &Path) -> Result<u64> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }
        log::debug!("GET {} -> {status}", response.url());

        decompress_to(response, destination)
    }
}

/// Streams gzip data from `reader` into `destination`, chunk by chunk.
///
/// The destination is created (or truncated) only after the first chunk has
/// decoded, so input that is not gzip at all never touches it. A failure
/// after that point removes the partially written file.
pub fn decompress_to<R: Read>(reader: R, destination: &Path) -> Result<u64> {
    let mut decoder = MultiGzDecoder::new(reader);
    let mut buf = vec![0u8; CHUNK_SIZE];

    let first = read_chunk(&mut decoder, &mut buf)?;
    let mut file = File::create(destination).map_err(|e| FetchError::write_error(destination, e))?;

    let result = copy_chunks(&mut decoder, &mut file, &mut buf, first, destination);
    if result.is_err() {
        drop(file);
        fs::remove_partial_file(destination);
    }
    result
}

fn copy_chunks<R: Read>(
    decoder: &mut R,
    file: &mut File,
    buf: &mut [u8],
    first: usize,
    destination: &Path,
) -> Result<u64> {
    let mut written = 0u64;
    let mut n = first;
    while n > 0 {
        file.write_all(&buf[..n])
            .map_err(|e| FetchError::write_error(destination, e))?;
        written += n as u64;
        n = read_chunk(decoder, buf)?;
    }
    file.flush()
        .map_err(|e| FetchError::write_error(destination, e))?;
    log::debug!("Wrote {written} bytes to {destination:?}");
    Ok(written)
}

fn read_chunk<R: Read>(reader: &mut R, buf: &mut [u8]) -> Result<usize> {
    loop {
        match reader.read(buf) {
            Ok(n) => return Ok(n),
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(FetchError::Decompress(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCategory;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn gzip(data: &[u8]) -> Vec<u8> {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(data).unwrap();
        encoder.finish().unwrap()
    }

    #[test]
    fn test_decompress_fixture() {
        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("words.jsonl");
        let body = gzip(b"{\"word\":\"test\"}\n");

        let written = decompress_to(body.as_slice(), &dest).unwrap();
        assert_eq!(written, 16);
        assert_eq!(std::fs::read(&dest).unwrap(), b"{\"word\":\"test\"}\n");
    }

    #[test]
    fn test_decompress_larger_than_chunk() {
        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("words.jsonl");
        let content: Vec<u8> = (0..CHUNK_SIZE * 3 + 17)
            .map(|i| b"abcdefghij\n"[i % 11])
            .collect();

        let written = decompress_to(gzip(&content).as_slice(), &dest).unwrap();
        assert_eq!(written, content.len() as u64);
        assert_eq!(std::fs::read(&dest).unwrap(), content);
    }

    #[test]
    fn test_decompress_concatenated_members() {
        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("words.jsonl");
        let mut body = gzip(b"{\"word\":\"one\"}\n");
        body.extend(gzip(b"{\"word\":\"two\"}\n"));

        decompress_to(body.as_slice(), &dest).unwrap();
        assert_eq!(
            std::fs::read_to_string(&dest).unwrap(),
            "{\"word\":\"one\"}\n{\"word\":\"two\"}\n"
        );
    }

    #[test]
    fn test_overwrites_existing_file() {
        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("words.jsonl");
        std::fs::write(&dest, "stale content that is longer than the new one").unwrap();

        decompress_to(gzip(b"fresh\n").as_slice(), &dest).unwrap();
        assert_eq!(std::fs::read_to_string(&dest).unwrap(), "fresh\n");
    }

    #[test]
    fn test_not_gzip_leaves_no_file() {
        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("words.jsonl");

        let err = decompress_to(&b"{\"word\":\"plain\"}\n"[..], &dest).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Stream);
        assert!(!dest.exists());
    }

    #[test]
    fn test_truncated_gzip_removes_partial_file() {
        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("words.jsonl");
        let mut body = gzip(b"{\"word\":\"test\"}\n{\"word\":\"more\"}\n");
        body.truncate(body.len() - 4);

        let err = decompress_to(body.as_slice(), &dest).unwrap_err();
        assert!(matches!(err, FetchError::Decompress(_)));
        assert!(!dest.exists());
    }

    #[test]
    fn test_missing_parent_is_write_error() {
        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("missing").join("words.jsonl");

        let err = decompress_to(gzip(b"x").as_slice(), &dest).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Io);
    }
}
