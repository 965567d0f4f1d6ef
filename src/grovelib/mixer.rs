use itertools::Itertools;

use crate::ring::Ring;

/// Run `passes` full mixing passes. Every pass moves each element by its own value, in
/// original input order, against whatever state the previous moves left behind.
pub fn mix(ring: &mut Ring, passes: usize) {
    let len = ring.len();
    for pass in 0..passes {
        for index in 0..len {
            let value = ring[index].value;
            ring.move_by(index, value);
        }
        if log::log_enabled!(log::Level::Debug) && len <= 16 {
            log::debug!(
                "after pass {}: {}",
                pass + 1,
                ring.iter_from(0).map(|e| e.value).join(", ")
            );
        } else {
            log::debug!("finished pass {} of {}", pass + 1, passes);
        }
    }
}
