//! KMS operation enum.

use std::fmt;

/// All supported KMS operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KmsOperation {
    // Keys
    /// Create a key.
    CreateKey,
    /// Download the public half of an asymmetric key.
    GetPublicKey,

    // Aliases
    /// Create an alias for a key.
    CreateAlias,
    /// List the aliases of the account.
    ListAliases,

    // Cryptographic operations
    /// Encrypt plaintext.
    Encrypt,
    /// Decrypt ciphertext.
    Decrypt,
    /// Generate a data key.
    GenerateDataKey,
    /// Sign a message.
    Sign,
    /// Verify a signature.
    Verify,
}

impl KmsOperation {
    /// Every operation, in declaration order.
    pub const ALL: &'static [Self] = &[
        Self::CreateKey,
        Self::GetPublicKey,
        Self::CreateAlias,
        Self::ListAliases,
        Self::Encrypt,
        Self::Decrypt,
        Self::GenerateDataKey,
        Self::Sign,
        Self::Verify,
    ];

    /// Returns the AWS operation name string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CreateKey => "CreateKey",
            Self::GetPublicKey => "GetPublicKey",
            Self::CreateAlias => "CreateAlias",
            Self::ListAliases => "ListAliases",
            Self::Encrypt => "Encrypt",
            Self::Decrypt => "Decrypt",
            Self::GenerateDataKey => "GenerateDataKey",
            Self::Sign => "Sign",
            Self::Verify => "Verify",
        }
    }

    /// Parse an operation name string into a `KmsOperation`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|op| op.as_str() == name)
    }

    /// Value of the `X-Amz-Target` header for this operation.
    #[must_use]
    pub fn target(&self) -> String {
        format!("TrentService.{}", self.as_str())
    }
}

impl fmt::Display for KmsOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
