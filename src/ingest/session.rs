use std::time::Duration;

use futures_util::{Stream, StreamExt};

use crate::catalog::{ColumnStats, Record, RecordStore, Schema};
use crate::error::{Error, Result};
use crate::ingest::LineSplitter;
use crate::status::{format_kilobytes, StatusSink};

/// Default field delimiter.
pub const DEFAULT_DELIMITER: &str = ",";

/// Default pause between chunk reads.
pub const DEFAULT_READ_DELAY: Duration = Duration::from_millis(1);

/// Totals reported when ingestion stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IngestSummary {
    /// Records in the store.
    pub records: usize,
    /// Bytes received from the stream.
    pub bytes_received: u64,
    /// Blank lines skipped.
    pub skipped_lines: usize,
    /// Bytes of the unterminated trailing line discarded at end of stream.
    pub dropped_tail_bytes: usize,
    /// Whether ingestion stopped at the record cap.
    pub capped: bool,
}

/// One ingestion run: splitter, schema, running statistics and record store.
///
/// The first non-blank line becomes the [`Schema`]; every later non-blank line
/// becomes a [`Record`]. Blank lines are skipped.
///
/// # Example
///
/// ```
/// use starfield_viz::ingest::Session;
///
/// let mut session = Session::new();
/// session.feed(b"id,x\n1,10\n2,");
/// session.feed(b"30\n");
///
/// assert_eq!(session.records().len(), 2);
/// let schema = session.schema().unwrap();
/// let x = session.stats().unwrap().get(schema, "x").unwrap();
/// assert_eq!((x.min, x.max), (10.0, 30.0));
/// ```
#[derive(Debug, Clone)]
pub struct Session {
    splitter: LineSplitter,
    delimiter: String,
    max_records: Option<usize>,
    read_delay: Duration,
    schema: Option<Schema>,
    stats: Option<ColumnStats>,
    store: RecordStore,
    bytes_received: u64,
    skipped_lines: usize,
    dropped_tail_bytes: usize,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Create a session with the default delimiter, no record cap and the default read delay.
    #[must_use]
    pub fn new() -> Self {
        Self {
            splitter: LineSplitter::new(),
            delimiter: DEFAULT_DELIMITER.to_string(),
            max_records: None,
            read_delay: DEFAULT_READ_DELAY,
            schema: None,
            stats: None,
            store: RecordStore::new(),
            bytes_received: 0,
            skipped_lines: 0,
            dropped_tail_bytes: 0,
        }
    }

    /// Set the field delimiter.
    #[must_use]
    pub fn delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Stop after this many records. `None` or `Some(0)` means unbounded.
    #[must_use]
    pub fn max_records(mut self, max_records: Option<usize>) -> Self {
        self.max_records = max_records.filter(|&n| n > 0);
        self
    }

    /// Pause between chunk reads.
    #[must_use]
    pub fn read_delay(mut self, delay: Duration) -> Self {
        self.read_delay = delay;
        self
    }

    /// Column schema, once the header line has arrived.
    #[must_use]
    pub fn schema(&self) -> Option<&Schema> {
        self.schema.as_ref()
    }

    /// Running statistics, once the header line has arrived.
    #[must_use]
    pub fn stats(&self) -> Option<&ColumnStats> {
        self.stats.as_ref()
    }

    /// Records ingested so far.
    #[must_use]
    pub fn records(&self) -> &RecordStore {
        &self.store
    }

    /// Total bytes fed so far.
    #[must_use]
    pub const fn bytes_received(&self) -> u64 {
        self.bytes_received
    }

    /// Whether the store has reached the record cap.
    #[must_use]
    pub fn is_capped(&self) -> bool {
        self.max_records.is_some_and(|cap| self.store.len() >= cap)
    }

    /// Feed one chunk of raw bytes.
    ///
    /// Complete lines are parsed immediately. Lines past the record cap are ignored.
    pub fn feed(&mut self, chunk: &[u8]) {
        self.bytes_received += chunk.len() as u64;
        for line in self.splitter.push(chunk) {
            if self.is_capped() {
                break;
            }
            self.ingest_line(&line);
        }
    }

    /// Parse one complete line.
    pub fn ingest_line(&mut self, line: &str) {
        if line.is_empty() {
            self.skipped_lines += 1;
            return;
        }

        if self.schema.is_none() {
            self.parse_header(line);
            return;
        }

        if let (Some(schema), Some(stats)) = (&self.schema, &mut self.stats) {
            let record = Record::parse(line, &self.delimiter, schema);
            stats.update(&record);
            self.store.push(record);
        }
    }

    fn parse_header(&mut self, line: &str) {
        let schema = Schema::from_header(line, &self.delimiter);
        tracing::info!(columns = schema.len(), "header parsed");
        self.stats = Some(ColumnStats::new(&schema));
        self.schema = Some(schema);
    }

    /// End of input: drop any unterminated trailing line and report totals.
    ///
    /// Calling it again reports the same totals.
    pub fn finish(&mut self) -> IngestSummary {
        let dropped = self.splitter.finish();
        if dropped > 0 {
            tracing::debug!(bytes = dropped, "dropping unterminated trailing line");
            self.dropped_tail_bytes += dropped;
        }
        self.summary()
    }

    /// Totals so far.
    #[must_use]
    pub fn summary(&self) -> IngestSummary {
        IngestSummary {
            records: self.store.len(),
            bytes_received: self.bytes_received,
            skipped_lines: self.skipped_lines,
            dropped_tail_bytes: self.dropped_tail_bytes,
            capped: self.is_capped(),
        }
    }

    /// Pull chunks from `chunks` until it ends, fails, or the record cap is reached.
    ///
    /// Cumulative kilobytes are reported to `status` after every chunk. On a
    /// stream error the records parsed so far stay in the session.
    pub async fn ingest<S, B, E>(
        &mut self,
        mut chunks: S,
        status: &mut dyn StatusSink,
    ) -> Result<IngestSummary>
    where
        S: Stream<Item = std::result::Result<B, E>> + Unpin,
        B: AsRef<[u8]>,
        E: std::fmt::Display,
    {
        tracing::info!(cap = ?self.max_records, "ingestion started");
        let mut first = true;

        while !self.is_capped() {
            if !first && !self.read_delay.is_zero() {
                tokio::time::sleep(self.read_delay).await;
            }
            first = false;

            match chunks.next().await {
                Some(Ok(chunk)) => {
                    self.feed(chunk.as_ref());
                    status.set_status_text(&format_kilobytes(self.bytes_received));
                }
                Some(Err(e)) => {
                    let summary = self.finish();
                    tracing::error!(
                        error = %e,
                        records = summary.records,
                        bytes = summary.bytes_received,
                        "stream failed"
                    );
                    return Err(Error::Stream {
                        bytes_received: summary.bytes_received,
                        message: e.to_string(),
                    });
                }
                None => break,
            }
        }

        let summary = self.finish();
        if summary.capped {
            tracing::info!(records = summary.records, "record cap reached");
        }
        tracing::info!(
            records = summary.records,
            bytes = summary.bytes_received,
            skipped = summary.skipped_lines,
            "stream complete"
        );
        status.set_status_text(&format!(
            "stream complete: {}, {} records",
            format_kilobytes(summary.bytes_received),
            summary.records
        ));
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Extent, Value};
    use crate::status::RecordingStatus;
    use futures_util::stream;
    use std::io;

    const SAMPLE: &[u8] = b"id,x,z,mag,spect\n1,10,20,5.0,G\n2,30,40,6.0,M\n3,,,,\n";

    fn chunks(data: &[u8], size: usize) -> Vec<io::Result<Vec<u8>>> {
        data.chunks(size).map(|c| Ok(c.to_vec())).collect()
    }

    fn extent(session: &Session, column: &str) -> Option<(f64, f64)> {
        let schema = session.schema()?;
        session.stats()?.get(schema, column).map(Extent::as_tuple)
    }

    #[test]
    fn test_feed_sample() {
        let mut session = Session::new();
        session.feed(SAMPLE);

        assert_eq!(session.records().len(), 3);
        assert_eq!(extent(&session, "x"), Some((10.0, 30.0)));
        assert_eq!(extent(&session, "z"), Some((20.0, 40.0)));
        assert_eq!(extent(&session, "mag"), Some((5.0, 6.0)));

        let schema = session.schema().unwrap();
        let third = session.records().get(2).unwrap();
        assert_eq!(third.get(schema, "x"), Some(&Value::Text(String::new())));
    }

    #[test]
    fn test_header_only() {
        let mut session = Session::new();
        session.feed(b"id,x\n");
        assert_eq!(session.schema().map(Schema::len), Some(2));
        assert!(session.records().is_empty());
    }

    #[test]
    fn test_no_header_before_first_newline() {
        let mut session = Session::new();
        session.feed(b"id,x");
        assert!(session.schema().is_none());
        assert_eq!(session.finish().dropped_tail_bytes, 4);
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let mut session = Session::new();
        session.feed(b"\nid,x\n1,2\n\n\r\n3,4\n");

        let summary = session.finish();
        assert_eq!(summary.records, 2);
        assert_eq!(summary.skipped_lines, 3);
        let columns = session.schema().map(|s| s.columns().to_vec());
        assert_eq!(columns, Some(vec!["id".to_string(), "x".to_string()]));
    }

    #[test]
    fn test_cap_stops_mid_chunk() {
        let mut session = Session::new().max_records(Some(2));
        session.feed(b"id\n1\n2\n3\n4\n5\n");

        assert_eq!(session.records().len(), 2);
        assert!(session.is_capped());
    }

    #[test]
    fn test_zero_cap_is_unbounded() {
        let mut session = Session::new().max_records(Some(0));
        session.feed(b"id\n1\n2\n");
        assert!(!session.is_capped());
        assert_eq!(session.records().len(), 2);
    }

    #[test]
    fn test_custom_delimiter() {
        let mut session = Session::new().delimiter(";");
        session.feed(b"x;spect\n1.5;K\n");
        assert_eq!(extent(&session, "x"), Some((1.5, 1.5)));
    }

    #[test]
    fn test_bytes_received() {
        let mut session = Session::new();
        session.feed(b"abc");
        session.feed(b"de\n");
        assert_eq!(session.bytes_received(), 6);
    }

    #[tokio::test]
    async fn test_ingest_stream_in_small_chunks() {
        let mut session = Session::new().read_delay(Duration::ZERO);
        let mut status = RecordingStatus::default();

        let summary = session.ingest(stream::iter(chunks(SAMPLE, 3)), &mut status).await.unwrap();

        assert_eq!(summary.records, 3);
        assert_eq!(summary.bytes_received, SAMPLE.len() as u64);
        assert!(!summary.capped);
        // One cumulative update per chunk, then the completion message
        let expected: Vec<String> = (1..=SAMPLE.len().div_ceil(3))
            .map(|n| format_kilobytes((3 * n).min(SAMPLE.len()) as u64))
            .collect();
        let (last, per_chunk) = status.history().split_last().unwrap();
        assert_eq!(per_chunk, expected.as_slice());
        assert!(last.starts_with("stream complete"));
    }

    #[tokio::test]
    async fn test_ingest_cap_stops_requesting_chunks() {
        let data = b"id\n1\n2\n3\n4\n5\n";
        let mut session = Session::new().max_records(Some(2)).read_delay(Duration::ZERO);
        let mut status = RecordingStatus::default();

        // One line per chunk, so the cap is hit before the stream is drained
        let lines: Vec<io::Result<Vec<u8>>> =
            data.split_inclusive(|&b| b == b'\n').map(|l| Ok(l.to_vec())).collect();
        let mut source = stream::iter(lines);

        let summary = session.ingest(&mut source, &mut status).await.unwrap();

        assert_eq!(summary.records, 2);
        assert!(summary.capped);
        // Header + two records consumed, the rest untouched
        assert_eq!(source.count().await, 3);
    }

    #[tokio::test]
    async fn test_ingest_stream_error_keeps_partial_store() {
        let items: Vec<io::Result<Vec<u8>>> = vec![
            Ok(b"id,x\n1,10\n".to_vec()),
            Err(io::Error::new(io::ErrorKind::ConnectionReset, "reset by peer")),
            Ok(b"2,20\n".to_vec()),
        ];
        let mut session = Session::new().read_delay(Duration::ZERO);
        let mut status = RecordingStatus::default();

        let err = session.ingest(stream::iter(items), &mut status).await.unwrap_err();

        assert!(matches!(err, Error::Stream { bytes_received: 10, .. }));
        assert!(err.to_string().contains("reset by peer"));
        assert_eq!(session.records().len(), 1);
    }

    #[tokio::test]
    async fn test_stream_error_reports_dropped_tail() {
        let items: Vec<io::Result<Vec<u8>>> = vec![
            Ok(b"x,z\n1,1\n2,2\n3,3".to_vec()),
            Err(io::Error::new(io::ErrorKind::UnexpectedEof, "body truncated")),
        ];
        let mut session = Session::new().read_delay(Duration::ZERO);
        let mut status = RecordingStatus::default();

        assert!(session.ingest(stream::iter(items), &mut status).await.is_err());

        let summary = session.summary();
        assert_eq!(summary.records, 2);
        assert_eq!(summary.dropped_tail_bytes, 3);
        assert_eq!(session.finish(), summary);
    }

    #[test]
    fn test_finish_twice_keeps_totals() {
        let mut session = Session::new();
        session.feed(b"id\n1\n2");

        let first = session.finish();
        assert_eq!(first.dropped_tail_bytes, 1);
        assert_eq!(session.finish(), first);
    }

    #[tokio::test(start_paused = true)]
    async fn test_ingest_waits_read_delay_between_chunks() {
        let start = tokio::time::Instant::now();
        let mut session = Session::new().read_delay(Duration::from_millis(5));
        let mut status = RecordingStatus::default();

        session.ingest(stream::iter(chunks(SAMPLE, 10)), &mut status).await.unwrap();

        // A delay precedes every read after the first, including the final end-of-stream read
        let delays = SAMPLE.len().div_ceil(10) as u32;
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(5) * delays, "elapsed {elapsed:?}");
        assert!(elapsed < Duration::from_millis(6) * delays + Duration::from_millis(5));
    }
}
