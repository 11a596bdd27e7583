// Path: crates/types/src/error/mod.rs
//! Core error types for the farming plan simulator.

use crate::app::Address;
use thiserror::Error;

/// A trait for assigning a stable, machine-readable string code to an error.
pub trait ErrorCode {
    /// Returns the unique, stable string identifier for this error variant.
    fn code(&self) -> &'static str;
}

/// Errors raised by state snapshot accessors.
#[derive(Error, Debug)]
pub enum StateError {
    /// The requested account does not exist.
    #[error("Account not found: {0}")]
    AccountNotFound(Address),
}

impl ErrorCode for StateError {
    fn code(&self) -> &'static str {
        match self {
            Self::AccountNotFound(_) => "STATE_ACCOUNT_NOT_FOUND",
        }
    }
}

/// Errors raised by the bank when minting or moving funds.
#[derive(Error, Debug)]
pub enum BankError {
    /// Minting new supply failed.
    #[error("Mint failed: {0}")]
    MintFailed(String),
    /// The resulting balance would overflow.
    #[error("Balance overflow for {0}")]
    Overflow(Address),
    /// The coins were malformed.
    #[error("Invalid coins: {0}")]
    InvalidCoins(String),
}

impl ErrorCode for BankError {
    fn code(&self) -> &'static str {
        match self {
            Self::MintFailed(_) => "BANK_MINT_FAILED",
            Self::Overflow(_) => "BANK_OVERFLOW",
            Self::InvalidCoins(_) => "BANK_INVALID_COINS",
        }
    }
}

/// Stateless validation failures of proposal content.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ProposalError {
    /// The title is blank.
    #[error("Proposal title cannot be blank")]
    EmptyTitle,
    /// The title exceeds the maximum length.
    #[error("Proposal title is longer than max length of {0}")]
    TitleTooLong(usize),
    /// The description is blank.
    #[error("Proposal description cannot be blank")]
    EmptyDescription,
    /// The description exceeds the maximum length.
    #[error("Proposal description is longer than max length of {0}")]
    DescriptionTooLong(usize),
    /// No add, update or delete request is present.
    #[error("Proposal request must not be empty")]
    NoRequests,
    /// A requested plan has no name.
    #[error("Plan name must not be empty")]
    EmptyPlanName,
    /// A requested plan has no staking coin weights.
    #[error("Staking coin weights must not be empty")]
    EmptyStakingCoinWeights,
    /// A staking coin weight has a malformed denomination or a zero weight.
    #[error("Invalid staking coin weights")]
    InvalidStakingCoinWeights,
    /// The distribution window is empty or inverted.
    #[error("End time {end} must be greater than start time {start}")]
    InvalidPlanWindow {
        /// The requested start, in unix seconds.
        start: i64,
        /// The requested end, in unix seconds.
        end: i64,
    },
    /// A fixed payout has no coins.
    #[error("Epoch amount must not be empty")]
    EmptyEpochAmount,
    /// A fixed payout has malformed coins.
    #[error("Invalid epoch amount: {0}")]
    InvalidEpochAmount(String),
    /// A ratio payout is outside (0, 1].
    #[error("Epoch ratio must be positive and at most one: {0}")]
    InvalidEpochRatio(String),
}

impl ErrorCode for ProposalError {
    fn code(&self) -> &'static str {
        match self {
            Self::EmptyTitle => "PROPOSAL_EMPTY_TITLE",
            Self::TitleTooLong(_) => "PROPOSAL_TITLE_TOO_LONG",
            Self::EmptyDescription => "PROPOSAL_EMPTY_DESCRIPTION",
            Self::DescriptionTooLong(_) => "PROPOSAL_DESCRIPTION_TOO_LONG",
            Self::NoRequests => "PROPOSAL_NO_REQUESTS",
            Self::EmptyPlanName => "PROPOSAL_EMPTY_PLAN_NAME",
            Self::EmptyStakingCoinWeights => "PROPOSAL_EMPTY_STAKING_COIN_WEIGHTS",
            Self::InvalidStakingCoinWeights => "PROPOSAL_INVALID_STAKING_COIN_WEIGHTS",
            Self::InvalidPlanWindow { .. } => "PROPOSAL_INVALID_PLAN_WINDOW",
            Self::EmptyEpochAmount => "PROPOSAL_EMPTY_EPOCH_AMOUNT",
            Self::InvalidEpochAmount(_) => "PROPOSAL_INVALID_EPOCH_AMOUNT",
            Self::InvalidEpochRatio(_) => "PROPOSAL_INVALID_EPOCH_RATIO",
        }
    }
}

/// Errors from timestamp arithmetic.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TimeError {
    /// The timestamp cannot be represented as a calendar date.
    #[error("Timestamp out of range: {0}")]
    OutOfRange(i64),
    /// The shifted date cannot be represented.
    #[error("Calendar arithmetic overflowed")]
    Overflow,
}

impl ErrorCode for TimeError {
    fn code(&self) -> &'static str {
        match self {
            Self::OutOfRange(_) => "TIME_OUT_OF_RANGE",
            Self::Overflow => "TIME_OVERFLOW",
        }
    }
}

/// Errors loading simulation configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The TOML document could not be parsed.
    #[error("Failed to parse simulation config: {0}")]
    Parse(#[from] toml::de::Error),
}

impl ErrorCode for ConfigError {
    fn code(&self) -> &'static str {
        match self {
            Self::Parse(_) => "CONFIG_PARSE_ERROR",
        }
    }
}

/// Faults surfaced by a proposal generator.
///
/// Infeasible draws are not errors; generators report them as `Ok(None)`.
/// These variants are environment faults the harness decides how to handle.
#[derive(Error, Debug)]
pub enum SimulationError {
    /// A state accessor failed.
    #[error("State access error: {0}")]
    State(#[from] StateError),
    /// Timestamp arithmetic failed.
    #[error("Time error: {0}")]
    Time(#[from] TimeError),
    /// The harness supplied no candidate accounts.
    #[error("No candidate accounts to draw from")]
    EmptyAccountPool,
    /// The proposer's minted bundle holds no pool denomination to pay out in.
    #[error("No pool denomination available for an epoch amount")]
    NoPoolDenom,
}

impl ErrorCode for SimulationError {
    fn code(&self) -> &'static str {
        match self {
            Self::State(_) => "SIM_STATE_ERROR",
            Self::Time(_) => "SIM_TIME_ERROR",
            Self::EmptyAccountPool => "SIM_EMPTY_ACCOUNT_POOL",
            Self::NoPoolDenom => "SIM_NO_POOL_DENOM",
        }
    }
}
