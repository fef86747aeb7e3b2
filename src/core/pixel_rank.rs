use crate::domain::model::{PixelRank, SerpItem};

/// Computes the vertical pixel offset of `target_domain` within one rendered
/// result page.
///
/// Items are scanned in document order. The first item whose `domain`
/// contains the target as a substring stops the scan, and the heights
/// accumulated before it form the rank. Items without a rectangle contribute
/// nothing. If the whole list is scanned without a match, the total scanned
/// height is reported on the `NotFound` variant for diagnostics.
pub fn pixel_rank(items: &[SerpItem], target_domain: &str) -> PixelRank {
    let mut total = 0.0_f64;

    for item in items {
        if let Some(domain) = &item.domain {
            if domain.contains(target_domain) {
                return PixelRank::Found(total.round() as u32);
            }
        }
        if let Some(height) = item.rectangle.as_ref().and_then(|r| r.height) {
            total += height;
        }
    }

    PixelRank::NotFound {
        scanned_height: total.round() as u32,
    }
}
