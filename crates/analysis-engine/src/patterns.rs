//! Language-keyed pattern tables shared across the pipeline.
//!
//! Every ordered list here is consumed first-match-wins, so declaration
//! order IS precedence order. Keep the narrow patterns above the broad
//! ones when touching these tables.

use contract_types::Lang;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Narrow pre-sale patterns, checked before the generic catalog so the
    /// specific category is never shadowed by "sales contract".
    pub static ref NARROW_PRESALE_ES: Regex =
        Regex::new(r"(?i)compraventa.*(finca|vivienda|parcela).*proyectad[ao]").unwrap();
    pub static ref NARROW_PRESALE_EN: Regex =
        Regex::new(r"(?i)off[- ]plan.*?(property|dwelling|home).*?(purchase|sale)").unwrap();

    /// Generic contract-type catalog, most common phrasings first.
    static ref CONTRACT_TYPES_ES: Vec<Regex> = vec![
        // "compraventa" sits before "compra"/"venta": alternation is
        // leftmost-first and the fuller word must win the span
        Regex::new(r"(?i)contrato (?:de |de prestaci[oó]n de )?(?:compraventa|servicios|arrendamiento|trabajo|compra|venta|prestaci[oó]n)").unwrap(),
        Regex::new(r"(?i)acuerdo de prestaci[oó]n de servicios").unwrap(),
    ];
    static ref CONTRACT_TYPES_EN: Vec<Regex> = vec![
        Regex::new(r"(?i)(?:contract|agreement) (?:of |for )?(?:employment|services|sale|lease)").unwrap(),
        Regex::new(r"(?i)employment agreement").unwrap(),
        Regex::new(r"(?i)service agreement").unwrap(),
        Regex::new(r"(?i)rental agreement").unwrap(),
        Regex::new(r"(?i)lease agreement").unwrap(),
        Regex::new(r"(?i)sales contract").unwrap(),
        Regex::new(r"(?i)purchase agreement").unwrap(),
    ];

    static ref DURATION_ES: Vec<Regex> = vec![
        Regex::new(r"(?i)por un per[ií]odo de\s+(\d+\s*(?:meses|a[ñn]os|d[ií]as))").unwrap(),
        Regex::new(r"(?i)durante un per[ií]odo de\s+(\d+\s*(?:meses|a[ñn]os))").unwrap(),
        Regex::new(r"(?i)(\d+\s*(?:meses|a[ñn]os))").unwrap(),
        // Mixed-language documents occasionally spell the unit in English
        Regex::new(r"(?i)(\d+\s*(?:months|years))").unwrap(),
    ];
    static ref DURATION_EN: Vec<Regex> = vec![
        Regex::new(r"(?i)for a period of\s+(\d+\s*(?:months|years|days))").unwrap(),
        Regex::new(r"(?i)during a period of\s+(\d+\s*(?:months|years))").unwrap(),
        Regex::new(r"(?i)(\d+\s*(?:months|years))").unwrap(),
        Regex::new(r"(?i)(\d+\s*(?:meses|a[ñn]os))").unwrap(),
    ];

    /// Group 1 is the amount, group 2 an optional adjacent currency token.
    static ref MONTHLY_ES: Vec<Regex> = vec![
        Regex::new(r"(?i)(?:cuotas?|pagos?|abonos?|renta|alquiler)\s+(?:mensuales?|cada mes).*?(?:de|por)?\s*(\d{1,3}(?:[.,]\d{3})*(?:[.,]\d{1,2})?)\s*(euros?|€|eur)?").unwrap(),
        Regex::new(r"(?i)mensual(?:idad(?:es)?)?\s*(?:de|por)?\s*(\d{1,3}(?:[.,]\d{3})*(?:[.,]\d{1,2})?)\s*(euros?|€|eur)?").unwrap(),
    ];
    static ref MONTHLY_EN: Vec<Regex> = vec![
        Regex::new(r"(?i)monthly\s+(?:payments?|installments?|rent|fee).*?(?:of|for)?\s*(?:\$|usd)?\s*(\d{1,3}(?:[.,]\d{3})*(?:[.,]\d{1,2})?)\s*(dollars?|usd)?").unwrap(),
        Regex::new(r"(?i)paid\s+monthly.*?(?:amount\s+of)?\s*(?:\$|usd)?\s*(\d{1,3}(?:[.,]\d{3})*(?:[.,]\d{1,2})?)\s*(dollars?|usd)?").unwrap(),
    ];

    /// Group 2 is the amount, group 3 an optional adjacent currency token.
    static ref DEPOSIT_ES: Regex = Regex::new(
        r"(?i)(dep[oó]sito|garant[ií]a|fianza).{0,50}?\b(\d{1,3}(?:[.,]\d{3})*(?:[.,]\d{1,2})?)\s*(euros?|€|eur)?"
    ).unwrap();
    static ref DEPOSIT_EN: Regex = Regex::new(
        r"(?i)(security deposit|deposit|guarantee).{0,50}?\b(\d{1,3}(?:[.,]\d{3})*(?:[.,]\d{1,2})?)\s*(dollars?|usd|\$)?"
    ).unwrap();

    static ref OBJECT_ES: Vec<Regex> = vec![
        Regex::new(r"(?is)OBJETO DEL CONTRATO[\s\n]*(?:.*?[\s\n]+)?(.*?)(?:SEGUNDO|II\.|\n\n[A-ZÁÉÍÓÚÑ]+)").unwrap(),
        Regex::new(r"(?is)objeto del presente contrato es (?:la|el)\s+(.*?)\.").unwrap(),
        Regex::new(r"(?is)constituye el objeto.*?contrato (?:la|el)\s+(.*?)\.").unwrap(),
    ];
    static ref OBJECT_EN: Vec<Regex> = vec![
        Regex::new(r"(?is)SUBJECT MATTER[\s\n]*(?:.*?[\s\n]+)?(.*?)(?:SECOND|II\.|\n\n[A-Z]+)").unwrap(),
        Regex::new(r"(?is)subject of this (?:contract|agreement) is (?:the)?\s+(.*?)\.").unwrap(),
        Regex::new(r"(?is)subject matter of this.*?is (?:the)?\s+(.*?)\.").unwrap(),
    ];

    static ref COMPLIANCE_ES: Vec<Regex> = vec![
        Regex::new(r"(?i)cumple con (?:el )?RGPD").unwrap(),
        Regex::new(r"(?i)en cumplimiento del RGPD").unwrap(),
        Regex::new(r"(?i)reglamento general de protecci[oó]n de datos").unwrap(),
        Regex::new(r"(?i)protecci[oó]n de datos.*RGPD").unwrap(),
    ];
    static ref COMPLIANCE_EN: Vec<Regex> = vec![
        Regex::new(r"(?i)GDPR compliant").unwrap(),
        Regex::new(r"(?i)in compliance with (?:the )?GDPR").unwrap(),
        Regex::new(r"(?i)complies with (?:the )?GDPR").unwrap(),
        Regex::new(r"(?i)General Data Protection Regulation").unwrap(),
        Regex::new(r"(?i)personal data.*(?:handled|processed).*GDPR").unwrap(),
    ];

    /// Statutory-interest-plus-restitution clauses, a proxy for
    /// consumer-protection boilerplate that paraphrases the compliance
    /// statement instead of naming the regulation.
    static ref INTEREST_RETURN_ES: Regex = Regex::new(
        r"(?i)inter[eé]s(?:es)? legales?.*?(?:devolver[aá]n?|reembolsar[aá]n?|restituir[aá]n?)"
    ).unwrap();
    static ref INTEREST_RETURN_EN: Regex = Regex::new(
        r"(?i)statutory interest.*?(?:return|reimburse|refund|restitut)"
    ).unwrap();
}

pub fn contract_types(lang: Lang) -> &'static [Regex] {
    match lang {
        Lang::Es => &CONTRACT_TYPES_ES,
        Lang::En => &CONTRACT_TYPES_EN,
    }
}

pub fn duration(lang: Lang) -> &'static [Regex] {
    match lang {
        Lang::Es => &DURATION_ES,
        Lang::En => &DURATION_EN,
    }
}

pub fn monthly(lang: Lang) -> &'static [Regex] {
    match lang {
        Lang::Es => &MONTHLY_ES,
        Lang::En => &MONTHLY_EN,
    }
}

pub fn deposit(lang: Lang) -> &'static Regex {
    match lang {
        Lang::Es => &DEPOSIT_ES,
        Lang::En => &DEPOSIT_EN,
    }
}

pub fn object(lang: Lang) -> &'static [Regex] {
    match lang {
        Lang::Es => &OBJECT_ES,
        Lang::En => &OBJECT_EN,
    }
}

pub fn compliance(lang: Lang) -> &'static [Regex] {
    match lang {
        Lang::Es => &COMPLIANCE_ES,
        Lang::En => &COMPLIANCE_EN,
    }
}

pub fn interest_return(lang: Lang) -> &'static Regex {
    match lang {
        Lang::Es => &INTEREST_RETURN_ES,
        Lang::En => &INTEREST_RETURN_EN,
    }
}

/// Forces compilation of every table and returns how many are loaded.
/// Called once at startup so a malformed pattern surfaces at boot, not
/// mid-request.
pub fn warm() -> usize {
    let mut tables = 0;
    for lang in [Lang::Es, Lang::En] {
        for list in [
            contract_types(lang),
            duration(lang),
            monthly(lang),
            object(lang),
            compliance(lang),
        ] {
            if !list.is_empty() {
                tables += 1;
            }
        }
        let _ = deposit(lang).as_str();
        let _ = interest_return(lang).as_str();
        tables += 2;
    }
    let _ = NARROW_PRESALE_ES.as_str();
    let _ = NARROW_PRESALE_EN.as_str();
    tables + 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_tables_compile_and_load() {
        // 5 lists + 2 singles per language, plus the two narrow patterns
        assert_eq!(warm(), 16);
    }

    #[test]
    fn narrow_presale_matches_projected_property() {
        assert!(NARROW_PRESALE_ES
            .is_match("contrato de compraventa de la vivienda proyectada en la promoción"));
        assert!(NARROW_PRESALE_EN
            .is_match("agreement for the off-plan property purchase of unit 4"));
    }

    #[test]
    fn deposit_pattern_requires_nearby_amount() {
        assert!(deposit(Lang::Es).is_match("fianza de 1.200 euros"));
        // Amount too far away from the keyword (window is 50 chars)
        let far = format!("fianza {} 1.200 euros", "x".repeat(80));
        assert!(!deposit(Lang::Es).is_match(&far));
    }
}
