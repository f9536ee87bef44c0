// ============================================================
// Layer 5 - HTTP Download
// ============================================================
// Fetches an example CSV over HTTPS with a blocking ureq agent.
//
// Safeguards:
//   - connect/read/write timeouts on a single shared agent
//   - a hard cap on the response body size
//   - bounded exponential backoff, only for transport errors
//     and 5xx responses (a 404 will never start working)
//   - the body is written to "<file>.part" and renamed into place,
//     so an interrupted download never leaves a truncated CSV in
//     the cache
//
// Reference: ureq crate documentation
//            Rust Book §9 (Error Handling)

use std::{
    fs::{self, File},
    io::{self, BufWriter, Read, Write},
    path::Path,
    sync::OnceLock,
    time::Duration,
};

use anyhow::{Context, Result};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const READ_TIMEOUT:    Duration = Duration::from_secs(60);
const WRITE_TIMEOUT:   Duration = Duration::from_secs(30);

/// Largest example CSV is a few MB; anything far above that is wrong.
pub const MAX_DOWNLOAD_BYTES: usize = 64 * 1024 * 1024;

/// Retry settings for network operations with exponential backoff.
#[derive(Clone, Copy, Debug)]
pub struct RetryConfig {
    /// Maximum number of attempts, including the first try
    pub max_attempts: usize,
    /// Delay before the second attempt; doubles afterwards
    pub base_delay:   Duration,
    /// Upper bound for any single delay
    pub max_delay:    Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay:   Duration::from_millis(500),
            max_delay:    Duration::from_secs(4),
        }
    }
}

/// Shared HTTP agent with consistent timeouts.
fn agent() -> &'static ureq::Agent {
    static AGENT: OnceLock<ureq::Agent> = OnceLock::new();
    AGENT.get_or_init(|| {
        ureq::AgentBuilder::new()
            .timeout_connect(CONNECT_TIMEOUT)
            .timeout_read(READ_TIMEOUT)
            .timeout_write(WRITE_TIMEOUT)
            .build()
    })
}

/// Download `url` into `dest`, returning the number of bytes written.
pub fn download_to_file(url: &str, dest: &Path, retry: RetryConfig) -> Result<u64> {
    let response = retry_with_backoff(
        retry,
        || agent().get(url).call(),
        is_transient,
    )
    .map_err(|err| anyhow::anyhow!("Cannot download '{url}': {err}"))?;

    let mut part_name = dest.as_os_str().to_owned();
    part_name.push(".part");
    let part = Path::new(&part_name);

    let file = File::create(part)
        .with_context(|| format!("Cannot create '{}'", part.display()))?;
    let mut writer = BufWriter::new(file);

    let written = copy_response_to_writer(response, &mut writer, MAX_DOWNLOAD_BYTES)
        .and_then(|n| writer.flush().map(|_| n));

    let written = match written {
        Ok(n) => n,
        Err(e) => {
            // Best effort: a leftover .part file is harmless but untidy
            let _ = fs::remove_file(part);
            return Err(e).with_context(|| format!("Cannot save '{url}'"));
        }
    };

    fs::rename(part, dest)
        .with_context(|| format!("Cannot move download into '{}'", dest.display()))?;

    tracing::debug!("Downloaded {} bytes from {}", written, url);
    Ok(written)
}

/// Transport failures and server errors are worth another try.
fn is_transient(err: &ureq::Error) -> bool {
    match err {
        ureq::Error::Status(code, _) => *code >= 500,
        ureq::Error::Transport(_)    => true,
    }
}

/// Retry an operation with bounded exponential backoff when the predicate allows it.
fn retry_with_backoff<T, E, F, R>(config: RetryConfig, mut action: F, mut should_retry: R) -> Result<T, E>
where
    F: FnMut() -> Result<T, E>,
    R: FnMut(&E) -> bool,
    E: std::fmt::Display,
{
    let mut attempt = 0usize;
    loop {
        attempt += 1;
        match action() {
            Ok(value) => return Ok(value),
            Err(err) => {
                if attempt >= config.max_attempts || !should_retry(&err) {
                    return Err(err);
                }
                let delay = backoff_delay(config.base_delay, config.max_delay, attempt);
                tracing::warn!("Attempt {} failed ({}), retrying in {:?}", attempt, err, delay);
                std::thread::sleep(delay);
            }
        }
    }
}

/// Stream a response to the writer, enforcing a maximum byte size.
fn copy_response_to_writer(
    response:  ureq::Response,
    writer:    &mut impl Write,
    max_bytes: usize,
) -> Result<u64, io::Error> {
    check_content_length(&response, max_bytes)?;
    let mut limited = response.into_reader().take(max_bytes as u64 + 1);
    let mut total   = 0u64;
    let mut buf     = [0u8; 64 * 1024];
    loop {
        let read = limited.read(&mut buf)?;
        if read == 0 {
            break;
        }
        total += read as u64;
        if total > max_bytes as u64 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("Response exceeded {max_bytes} bytes"),
            ));
        }
        writer.write_all(&buf[..read])?;
    }
    Ok(total)
}

fn check_content_length(response: &ureq::Response, max_bytes: usize) -> Result<(), io::Error> {
    let Some(length) = response.header("Content-Length") else {
        return Ok(());
    };
    let Ok(length) = length.parse::<u64>() else {
        return Ok(());
    };
    if length > max_bytes as u64 {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("Response too large: {length} bytes"),
        ));
    }
    Ok(())
}

fn backoff_delay(base: Duration, max: Duration, attempt: usize) -> Duration {
    let exponent = u32::try_from(attempt.saturating_sub(1)).unwrap_or(u32::MAX);
    let factor   = 1u32.checked_shl(exponent).unwrap_or(u32::MAX);
    base.checked_mul(factor).unwrap_or(max).min(max)
}
