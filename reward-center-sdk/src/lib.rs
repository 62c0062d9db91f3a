// reward-center-sdk — client bindings for building reward center program
//                     instructions
// © 2025 by the reward-center-sdk developers
//
// This program is free software; you can redistribute it and/or modify it under
// the terms of the GNU General Public License as published by the Free Software
// Foundation; either version 2 of the License, or (at your option) any later
// version.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
// FOR A PARTICULAR PURPOSE.  See the GNU General Public License for more
// details.
//
// You should have received a copy of the GNU General Public License along with
// this program; if not, see <https://www.gnu.org/licenses/>.

//! Client library for constructing instructions of the reward center Solana
//! program.
//!
//! Anchor programs expect instruction data to start with an 8-byte
//! discriminator identifying the instruction, followed by the Borsh-encoded
//! instruction arguments.  Accounts are passed in a fixed order which the
//! program uses to tell them apart, optionally followed by any number of
//! ‘remaining’ accounts.  Getting either of those wrong results in the program
//! misinterpreting the transaction.
//!
//! This library describes each instruction statically (see [`registry`]):
//! argument layout as a [`schema::Schema`] and accounts as a list of
//! [`builder::AccountRole`]s.  The [`encode`] module turns an argument
//! [`value::Value`] into instruction data following a schema and the
//! [`builder`] module assembles a [`solana_program::instruction::Instruction`]
//! out of it.  With the `reward-center` feature the [`instruction`] module
//! provides typed builder functions for every instruction of the reward center
//! program.
//!
//! The library doesn’t sign or send transactions.  The instructions it builds
//! are handed to whatever submits transactions to the cluster.
//!
//! # Example
//!
//! ```ignore
//! let ix = reward_center_sdk::instruction::edit_reward_center(
//!     &EditRewardCenterAccounts {
//!         wallet: authority.pubkey(),
//!         auction_house,
//!         reward_center,
//!         remaining_accounts: Vec::new(),
//!     },
//!     &EditRewardCenterParams { reward_rules },
//! )?;
//! let transaction = Transaction::new_signed_with_payer(
//!     &[ix],
//!     Some(&authority.pubkey()),
//!     &[&authority],
//!     blockhash,
//! );
//! ```
//!
//! # Features
#![doc = document_features::document_features!()]

pub mod builder;
pub mod encode;
pub mod error;
pub mod identity;
pub mod registry;
pub mod schema;
pub mod value;

#[cfg(feature = "reward-center")]
pub mod instruction;
#[cfg(feature = "reward-center")]
pub mod types;

pub use error::{Error, Result};

/// Address of the reward center program.
#[cfg(feature = "reward-center")]
pub const PROGRAM_ID: solana_program::pubkey::Pubkey =
    solana_program::pubkey!("rwdD3F6CgoCAoVaxcitXAeWRjQdiGc5AVABKCpQSMfd");
