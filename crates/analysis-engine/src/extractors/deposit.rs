//! Security deposit / guarantee, only meaningful for lease contracts.

use crate::{money, patterns};
use contract_types::{ContractBranch, Lang};

pub fn extract(text: &str, lang: Lang, branch: ContractBranch) -> Option<String> {
    if branch != ContractBranch::Lease {
        return None;
    }

    let cap = patterns::deposit(lang).captures(text)?;
    let m = cap.get(2)?;
    let parsed = money::parse_amount(m.as_str())?;
    let currency = money::resolve_currency(text, m.start(), m.end(), cap.get(3).map(|c| c.as_str()));
    Some(money::render(&parsed, &currency))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn spanish_fianza_clause() {
        let text = "El arrendatario entrega en concepto de fianza la cantidad de 1.200 euros.";
        assert_eq!(
            extract(text, Lang::Es, ContractBranch::Lease).unwrap(),
            "1.200 €"
        );
    }

    #[test]
    fn english_security_deposit_clause() {
        let text = "Tenant shall pay a security deposit of 1,500.00 dollars on signing.";
        assert_eq!(
            extract(text, Lang::En, ContractBranch::Lease).unwrap(),
            "1.500,00 $"
        );
    }

    #[test]
    fn gated_outside_lease_branch() {
        let text = "fianza de 1.200 euros";
        assert_eq!(extract(text, Lang::Es, ContractBranch::Sale), None);
        assert_eq!(extract(text, Lang::Es, ContractBranch::Other), None);
        assert_eq!(extract(text, Lang::Es, ContractBranch::Unknown), None);
    }

    #[test]
    fn absent_when_no_deposit_clause() {
        let text = "contrato de arrendamiento con renta mensual de 600 euros";
        assert_eq!(extract(text, Lang::Es, ContractBranch::Lease), None);
    }
}
