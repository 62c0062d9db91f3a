//! Parsing of program and account identities.

use core::str::FromStr;

use solana_program::pubkey::Pubkey;

use crate::error::{Error, Result};

/// Parses account address given in its base58 form.
pub fn parse_identity(input: &str) -> Result<Pubkey> {
    Pubkey::from_str(input)
        .map_err(|_| Error::InvalidIdentity { input: input.into() })
}

/// Interprets raw bytes as account address.  `bytes` must be exactly 32 bytes
/// long.
pub fn identity_from_bytes(bytes: &[u8]) -> Result<Pubkey> {
    Pubkey::try_from(bytes)
        .map_err(|_| Error::InvalidIdentity { input: format!("{bytes:02x?}") })
}

/// Parses program id given in its base58 form.
///
/// Behaves like [`parse_identity`] but reports failure as
/// [`Error::InvalidProgramId`].
pub fn parse_program_id(input: &str) -> Result<Pubkey> {
    Pubkey::from_str(input)
        .map_err(|_| Error::InvalidProgramId { input: input.into() })
}


#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse() {
        let key = Pubkey::new_unique();
        let encoded = key.to_string();
        assert_eq!(Ok(key), parse_identity(&encoded));
        assert_eq!(Ok(key), parse_program_id(&encoded));
        assert_eq!(Ok(key), identity_from_bytes(key.as_ref()));

        assert_eq!(
            Err(Error::InvalidIdentity { input: "not-a-key".into() }),
            parse_identity("not-a-key")
        );
        assert_eq!(
            Err(Error::InvalidProgramId { input: "0OIl".into() }),
            parse_program_id("0OIl")
        );
        assert_eq!(
            Err(Error::InvalidIdentity { input: "[01, 02]".into() }),
            identity_from_bytes(&[1, 2])
        );
        assert!(matches!(
            identity_from_bytes(&[0; 33]),
            Err(Error::InvalidIdentity { .. })
        ));
    }
}
