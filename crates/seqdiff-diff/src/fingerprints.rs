//! Fingerprinting phase: digest every element before the path search.
//!
//! Each element is independent, so large inputs are split across a scoped
//! worker pool. Every worker owns its own [`Hasher`]; nothing is shared.

use std::num::NonZeroUsize;
use std::thread;

use tracing::debug;

use seqdiff_crypto::{HashAlgorithm, Hasher};
use seqdiff_types::{Element, Fingerprint};

use crate::config::DiffConfig;
use crate::error::{DiffError, DiffResult};

/// Fingerprints of both sides of a diff.
pub struct FingerprintTable {
    pub original: Vec<Fingerprint>,
    pub revised: Vec<Fingerprint>,
}

/// Fingerprint both sequences, in parallel when the combined input reaches
/// the configured threshold.
pub fn fingerprint_pair<T: Element + Sync>(
    config: &DiffConfig,
    original: &[T],
    revised: &[T],
) -> DiffResult<FingerprintTable> {
    let total = original.len() + revised.len();
    let workers = match config.parallel_threshold {
        Some(threshold) if total >= threshold => resolve_workers(config.workers),
        _ => 1,
    };
    debug!(elements = total, workers, algorithm = %config.algorithm, "fingerprinting");

    let (original, revised) = if workers > 1 {
        (
            fingerprint_parallel(config.algorithm, original, workers, 0)?,
            fingerprint_parallel(config.algorithm, revised, workers, 0)?,
        )
    } else {
        (
            fingerprint_serial(config.algorithm, original, 0)?,
            fingerprint_serial(config.algorithm, revised, 0)?,
        )
    };
    Ok(FingerprintTable { original, revised })
}

/// Fingerprint `elements` on the calling thread. `base` is the index of
/// `elements[0]` in the full sequence, used for error reporting.
pub fn fingerprint_serial<T: Element>(
    algorithm: HashAlgorithm,
    elements: &[T],
    base: usize,
) -> DiffResult<Vec<Fingerprint>> {
    let mut out = Vec::new();
    out.try_reserve_exact(elements.len())
        .map_err(|_| DiffError::OutOfMemory(format!("fingerprint table of {} entries", elements.len())))?;

    let mut hasher = Hasher::new(algorithm);
    let mut buf = Vec::new();
    for (offset, element) in elements.iter().enumerate() {
        buf.clear();
        element.encode(&mut buf).map_err(|source| DiffError::InvalidElement {
            index: base + offset,
            source,
        })?;
        out.push(hasher.fingerprint(&buf)?);
    }
    hasher.destroy();
    Ok(out)
}

/// Fingerprint `elements` across `workers` scoped threads, preserving order.
pub fn fingerprint_parallel<T: Element + Sync>(
    algorithm: HashAlgorithm,
    elements: &[T],
    workers: usize,
    base: usize,
) -> DiffResult<Vec<Fingerprint>> {
    if elements.is_empty() || workers <= 1 {
        return fingerprint_serial(algorithm, elements, base);
    }
    let per_worker = elements.len().div_ceil(workers);

    let parts: Vec<DiffResult<Vec<Fingerprint>>> = thread::scope(|scope| {
        let handles: Vec<_> = elements
            .chunks(per_worker)
            .enumerate()
            .map(|(n, part)| scope.spawn(move || fingerprint_serial(algorithm, part, base + n * per_worker)))
            .collect();
        handles
            .into_iter()
            .map(|handle| match handle.join() {
                Ok(result) => result,
                Err(panic) => std::panic::resume_unwind(panic),
            })
            .collect()
    });

    let mut out = Vec::new();
    out.try_reserve_exact(elements.len())
        .map_err(|_| DiffError::OutOfMemory(format!("fingerprint table of {} entries", elements.len())))?;
    for part in parts {
        out.extend(part?);
    }
    Ok(out)
}

fn resolve_workers(configured: usize) -> usize {
    if configured > 0 {
        return configured;
    }
    thread::available_parallelism().map_or(1, NonZeroUsize::get)
}

#[cfg(test)]
mod tests {
    use super::*;
    use seqdiff_crypto::fingerprint;

    fn lines(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("line {i}")).collect()
    }

    #[test]
    fn serial_matches_one_shot_digest() {
        let input = lines(5);
        let fps = fingerprint_serial(HashAlgorithm::Sha256, &input, 0).unwrap();
        assert_eq!(fps.len(), 5);
        for (line, fp) in input.iter().zip(&fps) {
            assert_eq!(*fp, fingerprint(HashAlgorithm::Sha256, line.as_bytes()));
        }
    }

    #[test]
    fn equal_elements_share_fingerprints() {
        let input = vec!["x", "y", "x"];
        let fps = fingerprint_serial(HashAlgorithm::Blake3, &input, 0).unwrap();
        assert_eq!(fps[0], fps[2]);
        assert_ne!(fps[0], fps[1]);
    }

    #[test]
    fn parallel_preserves_order() {
        let input = lines(103);
        let serial = fingerprint_serial(HashAlgorithm::Sha256, &input, 0).unwrap();
        let parallel = fingerprint_parallel(HashAlgorithm::Sha256, &input, 4, 0).unwrap();
        assert_eq!(serial, parallel);
    }

    #[test]
    fn more_workers_than_elements() {
        let input = lines(3);
        let parallel = fingerprint_parallel(HashAlgorithm::Blake3, &input, 16, 0).unwrap();
        assert_eq!(parallel, fingerprint_serial(HashAlgorithm::Blake3, &input, 0).unwrap());
    }

    #[test]
    fn pair_switches_to_parallel_at_threshold() {
        let config = DiffConfig::default()
            .with_parallel_threshold(Some(10))
            .with_workers(3);
        let a = lines(8);
        let b = lines(9);
        let table = fingerprint_pair(&config, &a, &b).unwrap();
        assert_eq!(table.original, fingerprint_serial(config.algorithm, &a, 0).unwrap());
        assert_eq!(table.revised, fingerprint_serial(config.algorithm, &b, 0).unwrap());
    }

    #[test]
    fn empty_input_has_no_fingerprints() {
        let empty: Vec<String> = Vec::new();
        assert!(fingerprint_parallel(HashAlgorithm::Sha256, &empty, 4, 0)
            .unwrap()
            .is_empty());
    }
}
