//! Transaction code classification.
//!
//! The two-digit transaction code on an entry detail record determines
//! both the direction of funds movement and the transfer product the
//! entry belongs to. The mapping is settlement-network convention: it is
//! looked up, never computed from the code's digits.

use std::fmt;

/// Direction of funds movement for an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxFlow {
    /// Funds move into the receiving account.
    Credit,

    /// Funds move out of the receiving account.
    Debit,

    /// Transaction code outside the documented table.
    Unknown,
}

/// Transfer product family for an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferClass {
    /// Bank account funding a card.
    BankToCard,

    /// Card balance moving back to a bank account.
    CardToBank,

    /// Payroll-style direct deposit.
    DirectDeposit,

    /// Transaction code outside the documented table.
    Unknown,
}

impl fmt::Display for TxFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TxFlow::Credit => "credit",
            TxFlow::Debit => "debit",
            TxFlow::Unknown => "unknown",
        };
        f.write_str(label)
    }
}

impl fmt::Display for TransferClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransferClass::BankToCard => "bank-to-card",
            TransferClass::CardToBank => "card-to-bank",
            TransferClass::DirectDeposit => "direct-deposit",
            TransferClass::Unknown => "unknown",
        };
        f.write_str(label)
    }
}

/// Classifies a transaction code.
///
/// Total over every input: any code outside the table yields
/// `(Unknown, Unknown)`. The 3x family settles entirely on the debit
/// side regardless of its final digit.
pub fn classify(code: &str) -> (TxFlow, TransferClass) {
    match code {
        "22" | "23" | "24" => (TxFlow::Credit, TransferClass::BankToCard),
        "27" | "28" | "29" => (TxFlow::Debit, TransferClass::CardToBank),
        "32" | "33" | "34" | "37" | "38" | "39" => (TxFlow::Debit, TransferClass::CardToBank),
        "21" | "26" | "31" | "36" => (TxFlow::Credit, TransferClass::DirectDeposit),
        _ => (TxFlow::Unknown, TransferClass::Unknown),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checking_credits_are_bank_to_card() {
        for code in ["22", "23", "24"] {
            assert_eq!(classify(code), (TxFlow::Credit, TransferClass::BankToCard));
        }
    }

    #[test]
    fn test_checking_debits_are_card_to_bank() {
        for code in ["27", "28", "29"] {
            assert_eq!(classify(code), (TxFlow::Debit, TransferClass::CardToBank));
        }
    }

    #[test]
    fn test_savings_family_settles_as_debit() {
        for code in ["32", "33", "34", "37", "38", "39"] {
            assert_eq!(classify(code), (TxFlow::Debit, TransferClass::CardToBank));
        }
    }

    #[test]
    fn test_direct_deposit_codes() {
        for code in ["21", "26", "31", "36"] {
            assert_eq!(
                classify(code),
                (TxFlow::Credit, TransferClass::DirectDeposit)
            );
        }
    }

    #[test]
    fn test_classify_is_total() {
        for code in ["00", "25", "35", "99", "", "2", "ab", "220"] {
            assert_eq!(classify(code), (TxFlow::Unknown, TransferClass::Unknown));
        }
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(TxFlow::Credit.to_string(), "credit");
        assert_eq!(TxFlow::Debit.to_string(), "debit");
        assert_eq!(TransferClass::BankToCard.to_string(), "bank-to-card");
        assert_eq!(TransferClass::DirectDeposit.to_string(), "direct-deposit");
        assert_eq!(TransferClass::Unknown.to_string(), "unknown");
    }
}
