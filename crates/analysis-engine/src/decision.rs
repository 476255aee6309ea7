//! Recommendation decision engine.
//!
//! Missing fields never fail the pipeline; they simply route to the
//! conservative NeedsReview outcome. A missing compliance statement vetoes
//! every branch.

use contract_types::{ContractBranch, Recommendation};

/// Per-branch required-field checklist:
///
/// | branch | signable when |
/// |--------|---------------|
/// | sale   | compliance ∧ amount ∧ sale_item |
/// | lease  | compliance ∧ duration ∧ (monthly ∨ amount) ∧ deposit |
/// | other  | compliance ∧ duration ∧ (amount ∨ monthly) |
///
/// Unknown categories take the `other` row.
#[allow(clippy::too_many_arguments)]
pub fn decide(
    branch: ContractBranch,
    compliance: bool,
    duration: Option<&str>,
    amount: Option<&str>,
    monthly: Option<&str>,
    deposit: Option<&str>,
    sale_item: Option<&str>,
) -> Recommendation {
    if !compliance {
        return Recommendation::NeedsReview;
    }

    let complete = match branch {
        ContractBranch::Sale => amount.is_some() && sale_item.is_some(),
        ContractBranch::Lease => {
            duration.is_some()
                && (monthly.is_some() || amount.is_some())
                && deposit.is_some()
        }
        ContractBranch::Other | ContractBranch::Unknown => {
            duration.is_some() && (amount.is_some() || monthly.is_some())
        }
    };

    if complete {
        Recommendation::Signable
    } else {
        Recommendation::NeedsReview
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn complete_sale_is_signable() {
        let rec = decide(
            ContractBranch::Sale,
            true,
            None,
            Some("50.000 €"),
            None,
            None,
            Some("Vehículo marca FORD, modelo FOCUS, matrícula 1234ABC"),
        );
        assert_eq!(rec, Recommendation::Signable);
    }

    #[test]
    fn sale_without_item_needs_review() {
        let rec = decide(
            ContractBranch::Sale,
            true,
            None,
            Some("50.000 €"),
            None,
            None,
            None,
        );
        assert_eq!(rec, Recommendation::NeedsReview);
    }

    #[test]
    fn lease_without_deposit_needs_review() {
        let rec = decide(
            ContractBranch::Lease,
            true,
            Some("12 meses"),
            None,
            Some("600 €"),
            None,
            None,
        );
        assert_eq!(rec, Recommendation::NeedsReview);
    }

    #[test]
    fn complete_lease_is_signable() {
        let rec = decide(
            ContractBranch::Lease,
            true,
            Some("12 meses"),
            None,
            Some("600 €"),
            Some("1.200 €"),
            None,
        );
        assert_eq!(rec, Recommendation::Signable);
    }

    #[test]
    fn lease_amount_substitutes_for_monthly() {
        let rec = decide(
            ContractBranch::Lease,
            true,
            Some("12 meses"),
            Some("7.200 €"),
            None,
            Some("1.200 €"),
            None,
        );
        assert_eq!(rec, Recommendation::Signable);
    }

    #[test]
    fn compliance_veto_dominates() {
        let rec = decide(
            ContractBranch::Other,
            false,
            Some("12 meses"),
            Some("10.000 €"),
            Some("600 €"),
            Some("1.200 €"),
            Some("item"),
        );
        assert_eq!(rec, Recommendation::NeedsReview);
    }

    #[test]
    fn unknown_branch_uses_other_rules() {
        let rec = decide(
            ContractBranch::Unknown,
            true,
            Some("12 meses"),
            Some("10.000 €"),
            None,
            None,
            None,
        );
        assert_eq!(rec, Recommendation::Signable);
    }

    #[test]
    fn other_branch_requires_duration() {
        let rec = decide(
            ContractBranch::Other,
            true,
            None,
            Some("10.000 €"),
            None,
            None,
            None,
        );
        assert_eq!(rec, Recommendation::NeedsReview);
    }
}
