use crate::utils::error::Result;
use crate::utils::validation;
use clap::Parser;
use num_bigint::BigUint;

#[derive(Debug, Clone, Parser)]
#[command(name = "lychrel-search")]
#[command(about = "Searches for a palindrome reachable by reverse-and-add")]
#[command(allow_negative_numbers = true)] // "-1" is a max_iter value, not a flag
pub struct CliConfig {
    /// Starting number, a non-negative base-10 integer of any size
    pub start_num: String,

    /// Maximum number of reverse-and-add iterations to attempt
    pub max_iter: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// The starting number as a big integer. The raw string is kept on the
    /// config so diagnostics and the final report echo the caller's input.
    pub fn seed(&self) -> Result<BigUint> {
        validation::parse_seed(&self.start_num)
    }

    pub fn iteration_bound(&self) -> Result<u64> {
        validation::parse_iteration_bound(&self.max_iter)
    }
}
