//! Collapsing of candidates that sit too close together along the path.

use super::candidates::CandidateSet;
use super::config::DuplicateConfig;
use super::observer::{SegmentationEvent, SegmentationObserver};
use crate::core::PointStream;

/// Collapse candidates closer than `config.min_separation` along the path.
///
/// Adjacent pairs are scanned in order. A close pair loses the member with the
/// lower |curvature|, except at the stroke ends where the endpoint always
/// survives. After a removal the same position is examined again, since the
/// new neighbour may also be too close.
pub fn collapse_duplicates<S>(
    stream: &S,
    mut candidates: CandidateSet,
    config: &DuplicateConfig,
    observer: &mut dyn SegmentationObserver,
) -> CandidateSet
where
    S: PointStream + ?Sized,
{
    let mut pos = 0;

    while pos + 1 < candidates.len() {
        let a = candidates.as_slice()[pos];
        let b = candidates.as_slice()[pos + 1];

        if stream.curvilinear_distance(a, b) >= config.min_separation {
            pos += 1;
            continue;
        }

        let first_pair = pos == 0;
        let last_pair = pos + 2 == candidates.len();

        let remove_pos = match (first_pair, last_pair) {
            // Two endpoints and nothing between: nothing may go
            (true, true) => {
                pos += 1;
                continue;
            }
            (true, false) => pos + 1,
            (false, true) => pos,
            (false, false) => {
                if stream.curvature(a).abs() > stream.curvature(b).abs() {
                    pos + 1
                } else {
                    pos
                }
            }
        };

        let kept = if remove_pos == pos { b } else { a };
        if let Some(removed) = candidates.remove_at(remove_pos) {
            log::trace!("Collapsed candidate {} into {}", removed, kept);
            observer.on_event(&SegmentationEvent::DuplicateRemoved {
                removed,
                kept,
                candidates: &candidates,
            });
        } else {
            pos += 1;
        }
    }

    candidates
}
