//! Script transports: files, stdin, and an HTTP endpoint.
//!
//! Each script is one producer. Its operations are posted back to back, so
//! they stay in order relative to each other; scripts arriving at the same
//! time interleave at the queue.

use std::collections::HashMap;
use std::fs;
use std::future::Future;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::thread;

use anyhow::{Context, Result, ensure};
use axum::Router;
use axum::extract::{DefaultBodyLimit, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use painter_engine::runtime::Poster;
use painter_script::ParseError;
use tokio::net::TcpListener;

use crate::builder;

/// Upper bound on a script body received over HTTP. Larger requests are
/// rejected with 413 and post nothing.
const MAX_SCRIPT_BYTES: usize = 1 << 20;

/// Query parameter carrying the script on `GET`.
const SCRIPT_PARAM: &str = "Cmd";

/// Parses `src` and posts its operations. Nothing is posted on a parse error.
pub fn post_script(poster: &Poster, src: &str) -> Result<usize, ParseError> {
    let ops = builder::operations(src)?;
    let count = ops.len();
    for op in ops {
        poster.post(op);
    }
    Ok(count)
}

// ── Files / stdin ─────────────────────────────────────────────────────────

/// Posts every script file from its own producer thread.
///
/// Bad files are logged and counted; the others still run.
pub fn run_files(paths: &[PathBuf], poster: &Poster) -> Result<()> {
    let failed = thread::scope(|scope| {
        let producers: Vec<_> = paths
            .iter()
            .map(|path| (path, scope.spawn(move || post_file(path, poster))))
            .collect();

        producers
            .into_iter()
            .map(|(path, producer)| match producer.join() {
                Ok(Ok(count)) => {
                    log::info!("{}: posted {count} operations", path.display());
                    false
                }
                Ok(Err(err)) => {
                    log::error!("{err:#}");
                    true
                }
                Err(_) => {
                    log::error!("{}: producer thread panicked", path.display());
                    true
                }
            })
            .filter(|failed| *failed)
            .count()
    });

    ensure!(failed == 0, "{failed} of {} scripts failed", paths.len());
    Ok(())
}

fn post_file(path: &Path, poster: &Poster) -> Result<usize> {
    let src = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    post_script(poster, &src).with_context(|| format!("{}: bad script", path.display()))
}

/// Reads one script from stdin and posts it.
pub fn run_stdin(poster: &Poster) -> Result<()> {
    let mut src = String::new();
    io::stdin()
        .read_to_string(&mut src)
        .context("failed to read script from stdin")?;
    let count = post_script(poster, &src).context("bad script on stdin")?;
    log::info!("stdin: posted {count} operations");
    Ok(())
}

// ── HTTP ──────────────────────────────────────────────────────────────────

/// Routes for the script endpoint.
///
/// | Request | Script source |
/// |---------|---------------|
/// | `POST /` | request body |
/// | `GET /?Cmd=...` | the `Cmd` query parameter (missing means empty) |
///
/// Replies 200 once the whole script is posted, 400 with the parse error
/// when any line is bad.
pub fn router(poster: Poster) -> Router {
    Router::new()
        .route("/", get(script_from_query).post(script_from_body))
        .layer(DefaultBodyLimit::max(MAX_SCRIPT_BYTES))
        .with_state(poster)
}

async fn script_from_query(
    State(poster): State<Poster>,
    Query(params): Query<HashMap<String, String>>,
) -> (StatusCode, String) {
    let src = params.get(SCRIPT_PARAM).map(String::as_str).unwrap_or_default();
    accept(&poster, src)
}

async fn script_from_body(State(poster): State<Poster>, body: String) -> (StatusCode, String) {
    accept(&poster, &body)
}

fn accept(poster: &Poster, src: &str) -> (StatusCode, String) {
    match post_script(poster, src) {
        Ok(count) => {
            log::debug!("posted {count} operations, {} pending", poster.pending());
            (StatusCode::OK, String::new())
        }
        Err(err) => {
            log::warn!("bad script: {err}");
            (StatusCode::BAD_REQUEST, format!("{err}\n"))
        }
    }
}

/// Serves the script endpoint on `addr` until Ctrl-C.
pub fn serve(addr: &str, poster: Poster) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to build tokio runtime")?;

    runtime.block_on(async move {
        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("failed to bind {addr}"))?;
        log::info!("listening on http://{}", listener.local_addr()?);

        serve_until(listener, poster, async {
            if let Err(err) = tokio::signal::ctrl_c().await {
                log::error!("failed to wait for Ctrl-C: {err}");
            }
            log::info!("interrupt received, shutting down");
        })
        .await
    })
}

/// Serves the script endpoint on `listener` until `shutdown` resolves, then
/// lets in-flight requests finish.
pub async fn serve_until<F>(listener: TcpListener, poster: Poster, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router(poster))
        .with_graceful_shutdown(shutdown)
        .await
        .context("HTTP server failed")
}
