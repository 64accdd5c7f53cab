//! Subnet arithmetic built on the [`crate::models`] types.
//!
//! This module contains the derivation logic:
//! - [`derive`] - Network, broadcast, host count and host range
//! - [`subnets`] - Bounded listing of equal-sized subnets
//! - [`calculate`] - The full pipeline for one address and mask

mod calculate;
mod derive;
mod subnets;

// Re-export public functions
pub use calculate::{calculate, calculate_for, Calculation, SubnetEntry};
pub use derive::{broadcast_address, host_range, network_address, number_of_hosts, HostRange};
pub use subnets::{enumerate_subnets, Subnets, MAX_SUBNETS};
