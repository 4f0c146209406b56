//! End-to-end run: fetch, ingest, render, write.

use std::path::PathBuf;

use futures_util::Stream;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::ingest::{fetch_catalog, IngestSummary};
use crate::output::PngEncoder;
use crate::plots::RenderSummary;
use crate::render::{Canvas, Surface};
use crate::status::{StatusSink, TracingStatus};

/// What one run did.
#[derive(Debug)]
pub struct RunSummary {
    /// Ingestion totals.
    pub ingest: IngestSummary,
    /// Render totals.
    pub render: RenderSummary,
    /// Stream failure that cut ingestion short, if any. Partial data is still rendered.
    pub stream_error: Option<Error>,
    /// Where the PNG was written.
    pub output: PathBuf,
}

/// Fetch the catalog named in `config`, render it and write the PNG.
///
/// # Errors
///
/// Fails on an invalid configuration, a request that cannot be sent or gets a
/// non-success status, or a PNG that cannot be written. A stream that breaks
/// mid-body is not an error: the records already parsed are rendered and the
/// failure is reported in [`RunSummary::stream_error`].
pub async fn run(config: &Config) -> Result<RunSummary> {
    config.validate()?;

    let client = reqwest::Client::builder().build()?;
    let chunks = fetch_catalog(&client, &config.source.url).await?;

    let mut status = TracingStatus;
    ingest_and_render(config, chunks, &mut status).await
}

/// Ingest `chunks` and render the result as configured.
///
/// # Errors
///
/// See [`run`].
pub async fn ingest_and_render<S, B, E>(
    config: &Config,
    chunks: S,
    status: &mut dyn StatusSink,
) -> Result<RunSummary>
where
    S: Stream<Item = std::result::Result<B, E>> + Unpin,
    B: AsRef<[u8]>,
    E: std::fmt::Display,
{
    let mut session = config.session();
    let (ingest, stream_error) = match session.ingest(chunks, status).await {
        Ok(summary) => (summary, None),
        Err(e @ Error::Stream { .. }) => {
            tracing::warn!(error = %e, "rendering partial catalog");
            (session.summary(), Some(e))
        }
        Err(e) => return Err(e),
    };

    let map = config.star_map();
    let (width, height) = map.size();
    let mut canvas = Canvas::create_surface(width, height)?;
    let render = map.render(&session, &mut canvas).await;

    let output = config.output.path.clone();
    PngEncoder::write_to_file(canvas.framebuffer(), &output)?;
    tracing::info!(path = %output.display(), drawn = render.drawn, "star map written");

    Ok(RunSummary { ingest, render, stream_error, output })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::RecordingStatus;
    use futures_util::stream;
    use std::io;

    fn config_in(dir: &tempfile::TempDir) -> Config {
        let mut config = Config::new();
        config.source.read_delay_ms = 0;
        config.canvas.width = 64;
        config.canvas.height = 64;
        config.render.tick_ms = 1;
        config.output.path = dir.path().join("map.png");
        config
    }

    #[tokio::test]
    async fn test_ingest_and_render_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir);
        let chunks: Vec<io::Result<&[u8]>> =
            vec![Ok(&b"id,x,z,spect\n1,0,0,G\n2,"[..]), Ok(&b"10,10,M\n"[..])];
        let mut status = RecordingStatus::default();

        let summary = ingest_and_render(&config, stream::iter(chunks), &mut status).await.unwrap();

        assert_eq!(summary.ingest.records, 2);
        assert_eq!(summary.render.drawn, 2);
        assert!(summary.stream_error.is_none());
        let bytes = std::fs::read(&summary.output).unwrap();
        assert_eq!(&bytes[..4], b"\x89PNG");
    }

    #[tokio::test]
    async fn test_stream_error_still_renders_partial_data() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir);
        let chunks: Vec<io::Result<&[u8]>> = vec![
            Ok(&b"x,z\n1,1\n2,2\n3,3"[..]),
            Err(io::Error::new(io::ErrorKind::UnexpectedEof, "body truncated")),
        ];
        let mut status = RecordingStatus::default();

        let summary = ingest_and_render(&config, stream::iter(chunks), &mut status).await.unwrap();

        assert_eq!(summary.ingest.records, 2);
        assert_eq!(summary.ingest.dropped_tail_bytes, 3);
        assert_eq!(summary.render.drawn, 2);
        assert!(matches!(summary.stream_error, Some(Error::Stream { .. })));
        assert!(summary.output.exists());
    }

    #[tokio::test]
    async fn test_run_rejects_invalid_config() {
        let mut config = Config::new();
        config.source.url = String::new();

        let err = run(&config).await.unwrap_err();
        assert!(matches!(err, Error::ConfigInvalid { .. }));
    }
}
