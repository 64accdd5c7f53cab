//! Enumeration of equal-sized subnets.
//!
//! Starting at a base network, [`Subnets`] steps forward one network size at a
//! time. The listing is capped at [`MAX_SUBNETS`] entries so small prefixes do not
//! produce millions of lines, and it never steps past `255.255.255.255`.

use crate::errors::SubnetError;
use crate::models::{from_int, prefix_length, to_int, OctetQuad, Prefix};
use std::iter::FusedIterator;

/// Upper bound on the number of subnets listed for one calculation.
pub const MAX_SUBNETS: usize = 16;

const ADDRESS_MAX: u64 = u32::MAX as u64;

/// Lazily yields network addresses `base`, `base + size`, `base + 2 * size`, ...
#[derive(Debug, Clone)]
pub struct Subnets {
    next: u64,
    step: u64,
    remaining: usize,
}

impl Subnets {
    /// Start a listing at `base` using networks of length `prefix`.
    pub fn new(base: OctetQuad, prefix: Prefix) -> Subnets {
        Subnets {
            next: to_int(base) as u64,
            step: prefix.block_size(),
            remaining: MAX_SUBNETS,
        }
    }

    fn len_left(&self) -> usize {
        if self.next > ADDRESS_MAX {
            return 0;
        }
        let fit = (ADDRESS_MAX - self.next) / self.step + 1;
        self.remaining.min(fit.min(usize::MAX as u64) as usize)
    }
}

impl Iterator for Subnets {
    type Item = OctetQuad;

    fn next(&mut self) -> Option<OctetQuad> {
        if self.remaining == 0 || self.next > ADDRESS_MAX {
            self.remaining = 0;
            return None;
        }
        let current = self.next;
        self.next += self.step;
        self.remaining -= 1;
        Some(from_int(current as u32))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.len_left();
        (n, Some(n))
    }
}

impl ExactSizeIterator for Subnets {}

impl FusedIterator for Subnets {}

/// List the subnets that follow `network_base`, all sharing `mask`.
///
/// # Arguments
/// * `network_base` - The first network address to yield
/// * `mask` - Mask shared by every listed subnet
///
/// # Returns
/// * `Ok(Subnets)` - At most [`MAX_SUBNETS`] network addresses
/// * `Err(SubnetError::InvalidMask)` - `mask` has no prefix length
pub fn enumerate_subnets(network_base: OctetQuad, mask: OctetQuad) -> Result<Subnets, SubnetError> {
    let prefix = prefix_length(mask).map_err(|e| {
        log::warn!("enumerate_subnets({network_base}, {mask}): {e}");
        SubnetError::InvalidMask { mask }
    })?;
    log::debug!(
        "enumerate_subnets({network_base}{prefix}) step={}",
        prefix.block_size()
    );
    Ok(Subnets::new(network_base, prefix))
}
