//! Full subnet calculation for one address and mask.

use super::derive::{broadcast_address, host_range, network_address, number_of_hosts, HostRange};
use super::subnets::Subnets;
use crate::errors::SubnetError;
use crate::models::{parse_address, Mask, OctetQuad, Prefix};
use serde::Serialize;

/// One line of the child subnet listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubnetEntry {
    /// 1-based position in the listing.
    pub index: usize,
    pub network: OctetQuad,
    pub prefix: Prefix,
    pub broadcast: OctetQuad,
    pub host_range: HostRange,
}

/// Everything derived from one address and mask.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Calculation {
    pub address: OctetQuad,
    pub mask: OctetQuad,
    pub prefix: Prefix,
    /// Usable hosts, 0 for `/31` and `/32`.
    pub hosts: u64,
    pub network: OctetQuad,
    pub broadcast: OctetQuad,
    pub host_range: HostRange,
    pub subnets: Vec<SubnetEntry>,
}

/// Parse both inputs and run the full calculation.
///
/// The address is parsed first, then the mask, then the mask is checked for
/// contiguity. The first failure is returned and nothing else is derived.
///
/// # Examples
/// ```
/// use subnet_calc::processing::calculate;
/// let calc = calculate("192.168.1.10", "255.255.255.0").unwrap();
/// assert_eq!(calc.prefix.length(), 24);
/// assert_eq!(calc.network.to_string(), "192.168.1.0");
/// ```
pub fn calculate(address_text: &str, mask_text: &str) -> Result<Calculation, SubnetError> {
    log::debug!("calculate({address_text}, {mask_text})");
    let address = parse_address(address_text)?;
    let mask = Mask::parse(mask_text)?;
    calculate_for(address, mask)
}

/// Run the calculation on already validated values.
pub fn calculate_for(address: OctetQuad, mask: Mask) -> Result<Calculation, SubnetError> {
    let prefix = mask.prefix();
    let network = network_address(address, mask.quad());
    let broadcast = broadcast_address(network, mask.quad());
    let range = host_range(network, mask)?;
    log::debug!("network={network}{prefix} broadcast={broadcast} range={range}");

    let subnets = Subnets::new(network, prefix)
        .enumerate()
        .map(|(i, subnet)| -> Result<SubnetEntry, SubnetError> {
            Ok(SubnetEntry {
                index: i + 1,
                network: subnet,
                prefix,
                broadcast: broadcast_address(subnet, mask.quad()),
                host_range: host_range(subnet, mask)?,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    log::info!(
        "Calculated {address} {mask}: {network}{prefix}, {} subnets listed",
        subnets.len()
    );

    Ok(Calculation {
        address,
        mask: mask.quad(),
        prefix,
        hosts: number_of_hosts(prefix),
        network,
        broadcast,
        host_range: range,
        subnets,
    })
}
