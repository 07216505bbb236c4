//! One-dimensional tolerance banding.

/// Group items into bands along one axis.
///
/// Items are visited in ascending key order. A band is opened by its first
/// (smallest) key and admits every following item whose key is within
/// `tolerance` of that opening key. Bands come back in ascending order and
/// hold item indices in ascending key order, ties in input order.
pub(crate) fn cluster_by<T, F>(items: &[T], key: F, tolerance: f64) -> Vec<Vec<usize>>
where
    F: Fn(&T) -> f64,
{
    let mut order: Vec<usize> = (0..items.len()).collect();
    order.sort_by(|&a, &b| key(&items[a]).total_cmp(&key(&items[b])));

    let mut bands: Vec<Vec<usize>> = Vec::new();
    let mut band_start: Option<f64> = None;

    for index in order {
        let k = key(&items[index]);
        match (band_start, bands.last_mut()) {
            (Some(start), Some(band)) if k - start <= tolerance => band.push(index),
            _ => {
                band_start = Some(k);
                bands.push(vec![index]);
            }
        }
    }

    bands
}
