//! Parallel rendering of many posts.

use crate::renderer::{Options, RenderedPost, render_post};
use rayon::prelude::*;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Instant;

/// One post to render.
#[derive(Debug, Clone)]
pub struct BatchInput {
    /// Caller's identifier, typically the file path.
    pub id: String,
    /// Post source, frontmatter included.
    pub source: String,
}

/// Outcome for one input.
#[derive(Debug, Clone)]
pub struct BatchResult {
    /// Identifier of the input.
    pub id: String,
    /// Rendered post on success.
    pub result: Option<RenderedPost>,
    /// Error message on failure.
    pub error: Option<String>,
}

/// Counters over a batch.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchStats {
    /// Inputs processed.
    pub total: u32,
    /// Inputs rendered.
    pub succeeded: u32,
    /// Inputs that failed.
    pub failed: u32,
    /// Wall-clock time in milliseconds.
    pub processing_time_ms: f64,
}

/// Batch settings.
#[derive(Debug, Clone, Default)]
pub struct BatchOptions {
    /// Worker threads; rayon's global pool when absent.
    pub max_threads: Option<usize>,
    /// Stop at the first failure (sequential) instead of rendering everything.
    pub stop_on_error: bool,
    /// Render options shared by every input.
    pub render: Options,
}

/// Results in input order plus counters.
#[derive(Debug, Clone)]
pub struct BatchOutput {
    /// One entry per processed input.
    pub results: Vec<BatchResult>,
    /// Counters.
    pub stats: BatchStats,
}

/// Renders every input with the default registry.
pub fn render_batch(inputs: Vec<BatchInput>, options: &BatchOptions) -> BatchOutput {
    let start = Instant::now();
    let total = inputs.len() as u32;
    let succeeded = AtomicU32::new(0);
    let failed = AtomicU32::new(0);

    let process = |input: BatchInput| -> BatchResult {
        match render_post(&input.source, &options.render) {
            Ok(post) => {
                succeeded.fetch_add(1, Ordering::Relaxed);
                BatchResult {
                    id: input.id,
                    result: Some(post),
                    error: None,
                }
            }
            Err(err) => {
                log::warn!("{}: {err}", input.id);
                failed.fetch_add(1, Ordering::Relaxed);
                BatchResult {
                    id: input.id,
                    result: None,
                    error: Some(err.to_string()),
                }
            }
        }
    };

    let results: Vec<BatchResult> = if options.stop_on_error {
        let mut results = Vec::with_capacity(inputs.len());
        for input in inputs {
            let result = process(input);
            let stop = result.error.is_some();
            results.push(result);
            if stop {
                break;
            }
        }
        results
    } else {
        let pool = options.max_threads.and_then(|threads| {
            rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .map_err(|err| log::debug!("falling back to the global pool: {err}"))
                .ok()
        });
        match pool {
            Some(pool) => pool.install(|| inputs.into_par_iter().map(process).collect()),
            None => inputs.into_par_iter().map(process).collect(),
        }
    };

    BatchOutput {
        results,
        stats: BatchStats {
            total,
            succeeded: succeeded.load(Ordering::Relaxed),
            failed: failed.load(Ordering::Relaxed),
            processing_time_ms: start.elapsed().as_secs_f64() * 1000.0,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs() -> Vec<BatchInput> {
        ["---\ntitle: A\n---\nA", "---\ntitle: B\n", "# C"]
            .into_iter()
            .enumerate()
            .map(|(i, source)| BatchInput {
                id: format!("post-{i}.mdx"),
                source: source.to_string(),
            })
            .collect()
    }

    #[test]
    fn keeps_order_and_counts() {
        let output = render_batch(
            inputs(),
            &BatchOptions {
                max_threads: Some(2),
                ..BatchOptions::default()
            },
        );
        let ids: Vec<_> = output.results.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["post-0.mdx", "post-1.mdx", "post-2.mdx"]);
        assert_eq!(output.stats.total, 3);
        assert_eq!(output.stats.succeeded, 2);
        assert_eq!(output.stats.failed, 1);
        assert!(output.results[1].error.is_some());
        assert_eq!(
            output.results[0]
                .result
                .as_ref()
                .and_then(|post| post.meta.title.as_deref()),
            Some("A")
        );
    }

    #[test]
    fn stop_on_error_skips_the_rest() {
        let output = render_batch(
            inputs(),
            &BatchOptions {
                stop_on_error: true,
                ..BatchOptions::default()
            },
        );
        assert_eq!(output.results.len(), 2);
        assert_eq!(output.stats.total, 3);
        assert_eq!(output.stats.succeeded + output.stats.failed, 2);
    }
}
