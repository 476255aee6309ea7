//! Sale-item cascade: what exactly is being sold.
//!
//! Only runs for sale contracts. Domain-specific matchers are tried in
//! priority order and the first hit short-circuits the rest; two generic
//! fallbacks close the cascade and are post-filtered because they capture
//! noisy prose.

use super::capitalize;
use contract_types::{ContractBranch, Lang};
use lazy_static::lazy_static;
use regex::Regex;

type Matcher = fn(&str) -> Option<String>;

/// Cascade order: real estate, projected property, vehicle, watercraft,
/// aircraft, appliance, portable computer, software license, furniture,
/// phone, artwork, pet.
const ES_MATCHERS: &[Matcher] = &[
    es_real_estate,
    es_projected_property,
    es_vehicle,
    es_watercraft,
    es_aircraft,
    es_appliance,
    es_laptop,
    es_software,
    es_furniture,
    es_phone,
    es_artwork,
    es_pet,
];

const EN_MATCHERS: &[Matcher] = &[
    en_real_estate,
    en_projected_property,
    en_vehicle,
    en_watercraft,
    en_aircraft,
    en_appliance,
    en_laptop,
    en_software,
    en_furniture,
    en_phone,
    en_artwork,
    en_pet,
];

pub fn extract(text: &str, lang: Lang, branch: ContractBranch) -> Option<String> {
    if branch != ContractBranch::Sale {
        return None;
    }

    let matchers = match lang {
        Lang::Es => ES_MATCHERS,
        Lang::En => EN_MATCHERS,
    };
    for matcher in matchers {
        if let Some(item) = matcher(text) {
            return Some(item);
        }
    }
    generic(text, lang)
}

lazy_static! {
    static ref ES_REAL_ESTATE: Regex =
        Regex::new(r"(?i)inmueble.*?situado en (.*?)(?:,|\.|inscrito|referencia catastral)")
            .unwrap();
    static ref ES_PROJECTED: Regex = Regex::new(
        r#"(?is)(?:vivienda|finca|parcela).*?n[ºo°]?\s*\d.*?promoci[oó]n.*?"(.*?)".*?(calle\s+[A-Za-zÁÉÍÓÚÑáéíóúñ0-9 ]+)"#
    )
    .unwrap();
    static ref ES_VEHICLE: Regex = Regex::new(
        r"(?is)veh[ií]culo.*?marca\s+([A-Za-z0-9\-]+).*?modelo\s+([A-Za-z0-9\-]+).*?matr[ií]cula\s+([A-Za-z0-9\-]+)"
    )
    .unwrap();
    static ref ES_WATERCRAFT: Regex = Regex::new(
        r#"(?is)embarcaci[oó]n.*?nombre\s+"?([A-Za-z0-9 \-]+)"?.*?matr[ií]cula\s+([A-Za-z0-9\-]+).*?marca\s+([A-Za-z0-9 \-]+).*?modelo\s+([A-Za-z0-9 \-]+).*?a[ñn]o\s+(\d{4})"#
    )
    .unwrap();
    static ref ES_AIRCRAFT_TYPE: Regex =
        Regex::new(r"(?i)tipo\s*:\s*([A-Za-z0-9 \-]+)").unwrap();
    static ref ES_AIRCRAFT_MAKE: Regex =
        Regex::new(r"(?i)marca\s*:\s*([A-Za-z0-9 \-]+)").unwrap();
    static ref ES_AIRCRAFT_MODEL: Regex =
        Regex::new(r"(?i)modelo\s*:\s*([A-Za-z0-9 \-]+)").unwrap();
    static ref ES_AIRCRAFT_REG: Regex =
        Regex::new(r"(?i)matr[ií]cula\s*:\s*([A-Za-z0-9\-]+)").unwrap();
    static ref ES_APPLIANCE: Regex = Regex::new(
        r"(?i)(refrigerador|lavadora|microondas|televisor|aire acondicionado).*?marca\s+([A-Za-z0-9\-]+).*?modelo\s+([A-Za-z0-9\-]+)"
    )
    .unwrap();
    static ref ES_LAPTOP: Regex = Regex::new(
        r"(?i)(port[áa]til|laptop|ordenador|computadora).*?marca\s+([A-Za-z0-9\-]+).*?modelo\s+([A-Za-z0-9\-]+)"
    )
    .unwrap();
    static ref ES_SOFTWARE: Regex = Regex::new(
        r#"(?i)(licencia|software|sistema).*?nombre\s+"?([A-Za-z0-9 \-]+)"?.*?versi[oó]n\s+([A-Za-z0-9.]+)"#
    )
    .unwrap();
    static ref ES_FURNITURE: Regex =
        Regex::new(r"(?i)(mueble|sof[aá]|mesa|silla|armario).*?tipo\s+([A-Za-z0-9 \-]+)").unwrap();
    static ref ES_PHONE: Regex = Regex::new(
        r"(?i)(smartphone|tel[eé]fono|m[oó]vil).*?marca\s+([A-Za-z0-9\-]+).*?modelo\s+([A-Za-z0-9\-]+)"
    )
    .unwrap();
    static ref ES_ARTWORK: Regex = Regex::new(
        r#"(?i)(obra|pintura|escultura).*?t[ií]tulo\s+"?([A-Za-z0-9 \-]+)"?.*?autor\s+([A-Za-zÁÉÍÓÚÑáéíóúñ \-]+)"#
    )
    .unwrap();
    static ref ES_PET: Regex = Regex::new(
        r#"(?i)(mascota|perro|gato|animal).*?raza\s+([A-Za-z0-9 \-]+).*?nombre\s+"?([A-Za-z0-9 \-]+)"?"#
    )
    .unwrap();
    static ref ES_GENERIC: Vec<Regex> = vec![
        Regex::new(
            r"(?i)objeto del.*?contrato es la compraventa de\s*(?:un\s+|una\s+|el\s+|la\s+)?(.*?)(?:\.|,|con las siguientes)"
        )
        .unwrap(),
        Regex::new(
            r"(?i)vendedor vende.*?comprador adquiere\s*(?:un\s+|una\s+|el\s+|la\s+)?(.*?)(?:\.|,|ubicado en)"
        )
        .unwrap(),
    ];

    static ref EN_REAL_ESTATE: Regex =
        Regex::new(r"(?i)(?:property|real estate).*?located at (.*?)(?:,|\.|described as)")
            .unwrap();
    static ref EN_PROJECTED: Regex = Regex::new(
        r#"(?is)(?:dwelling|home|unit).*?development.*?"(.*?)".*?located (?:at|on)\s+([A-Za-z0-9 ]+)"#
    )
    .unwrap();
    static ref EN_VEHICLE: Regex = Regex::new(
        r"(?is)vehicle.*?make\s+([A-Za-z0-9\-]+).*?model\s+([A-Za-z0-9\-]+).*?(?:plate|vin)\s+([A-Za-z0-9\-]+)"
    )
    .unwrap();
    static ref EN_WATERCRAFT: Regex = Regex::new(
        r#"(?is)(?:vessel|boat).*?name\s+"?([A-Za-z0-9 \-]+)"?.*?registration\s+([A-Za-z0-9\-]+).*?make\s+([A-Za-z0-9 \-]+).*?model\s+([A-Za-z0-9 \-]+).*?year\s+(\d{4})"#
    )
    .unwrap();
    static ref EN_AIRCRAFT_TYPE: Regex =
        Regex::new(r"(?i)type\s*:\s*([A-Za-z0-9 \-]+)").unwrap();
    static ref EN_AIRCRAFT_MAKE: Regex =
        Regex::new(r"(?i)make\s*:\s*([A-Za-z0-9 \-]+)").unwrap();
    static ref EN_AIRCRAFT_MODEL: Regex =
        Regex::new(r"(?i)model\s*:\s*([A-Za-z0-9 \-]+)").unwrap();
    static ref EN_AIRCRAFT_REG: Regex =
        Regex::new(r"(?i)registration\s*:\s*([A-Za-z0-9\-]+)").unwrap();
    static ref EN_APPLIANCE: Regex = Regex::new(
        r"(?i)(refrigerator|washing machine|washer|microwave|television|air conditioner).*?(?:brand|make)\s+([A-Za-z0-9\-]+).*?model\s+([A-Za-z0-9\-]+)"
    )
    .unwrap();
    static ref EN_LAPTOP: Regex = Regex::new(
        r"(?i)(laptop|notebook|computer).*?(?:brand|make)\s+([A-Za-z0-9\-]+).*?model\s+([A-Za-z0-9\-]+)"
    )
    .unwrap();
    static ref EN_SOFTWARE: Regex = Regex::new(
        r#"(?i)(license|software|system).*?name\s+"?([A-Za-z0-9 \-]+)"?.*?version\s+([A-Za-z0-9.]+)"#
    )
    .unwrap();
    static ref EN_FURNITURE: Regex =
        Regex::new(r"(?i)(furniture|sofa|table|chair|wardrobe).*?type\s+([A-Za-z0-9 \-]+)").unwrap();
    static ref EN_PHONE: Regex = Regex::new(
        r"(?i)(smartphone|phone|mobile).*?(?:brand|make)\s+([A-Za-z0-9\-]+).*?model\s+([A-Za-z0-9\-]+)"
    )
    .unwrap();
    static ref EN_ARTWORK: Regex = Regex::new(
        r#"(?i)(artwork|painting|sculpture).*?titled?\s+"?([A-Za-z0-9 \-]+)"?.*?(?:by|author)\s+([A-Za-z \-]+)"#
    )
    .unwrap();
    static ref EN_PET: Regex = Regex::new(
        r#"(?i)(pet|dog|cat|animal).*?breed\s+([A-Za-z0-9 \-]+).*?name\s+"?([A-Za-z0-9 \-]+)"?"#
    )
    .unwrap();
    static ref EN_GENERIC: Vec<Regex> = vec![
        Regex::new(
            r"(?i)subject of this.*?agreement is the sale of\s*(?:a\s+|an\s+|the\s+)?(.*?)(?:\.|,|further described)"
        )
        .unwrap(),
        Regex::new(
            r"(?i)seller sells.*?buyer purchases\s*(?:a\s+|an\s+|the\s+)?(.*?)(?:\.|,|located at)"
        )
        .unwrap(),
    ];

    static ref LEADING_ARTICLE: Regex =
        Regex::new(r"(?i)^(?:un|una|el|la|a|an|the)\s+").unwrap();
}

fn es_real_estate(text: &str) -> Option<String> {
    let cap = ES_REAL_ESTATE.captures(text)?;
    Some(format!("Inmueble situado en {}", cap[1].trim()))
}

fn es_projected_property(text: &str) -> Option<String> {
    let cap = ES_PROJECTED.captures(text)?;
    Some(format!(
        "Vivienda en promoción \"{}\", {}",
        cap[1].trim(),
        cap[2].trim()
    ))
}

fn es_vehicle(text: &str) -> Option<String> {
    let cap = ES_VEHICLE.captures(text)?;
    Some(format!(
        "Vehículo marca {}, modelo {}, matrícula {}",
        cap[1].to_uppercase(),
        cap[2].to_uppercase(),
        cap[3].to_uppercase()
    ))
}

fn es_watercraft(text: &str) -> Option<String> {
    let cap = ES_WATERCRAFT.captures(text)?;
    Some(format!(
        "Embarcación '{}' (matrícula {}), marca {}, modelo {}, año {}",
        cap[1].trim(),
        cap[2].trim(),
        cap[3].trim(),
        cap[4].trim(),
        cap[5].trim()
    ))
}

/// All-or-nothing on labeled fields: absent fields render as N/A, but a
/// document with none of them yields no aircraft at all.
fn es_aircraft(text: &str) -> Option<String> {
    labeled_aircraft(
        text,
        &ES_AIRCRAFT_TYPE,
        &ES_AIRCRAFT_MAKE,
        &ES_AIRCRAFT_MODEL,
        &ES_AIRCRAFT_REG,
        |reg, make, model| format!("Aeronave (matrícula {}), marca {}, modelo {}", reg, make, model),
    )
}

fn es_appliance(text: &str) -> Option<String> {
    let cap = ES_APPLIANCE.captures(text)?;
    Some(format!(
        "{} marca {}, modelo {}",
        capitalize(&cap[1]),
        &cap[2],
        &cap[3]
    ))
}

fn es_laptop(text: &str) -> Option<String> {
    let cap = ES_LAPTOP.captures(text)?;
    Some(format!(
        "{} marca {}, modelo {}",
        capitalize(&cap[1]),
        &cap[2],
        &cap[3]
    ))
}

fn es_software(text: &str) -> Option<String> {
    let cap = ES_SOFTWARE.captures(text)?;
    Some(format!(
        "{} '{}', versión {}",
        capitalize(&cap[1]),
        cap[2].trim(),
        &cap[3]
    ))
}

fn es_furniture(text: &str) -> Option<String> {
    let cap = ES_FURNITURE.captures(text)?;
    Some(format!("{} tipo {}", capitalize(&cap[1]), cap[2].trim()))
}

fn es_phone(text: &str) -> Option<String> {
    let cap = ES_PHONE.captures(text)?;
    Some(format!(
        "{} marca {}, modelo {}",
        capitalize(&cap[1]),
        &cap[2],
        &cap[3]
    ))
}

fn es_artwork(text: &str) -> Option<String> {
    let cap = ES_ARTWORK.captures(text)?;
    Some(format!(
        "{} titulada '{}', autor: {}",
        capitalize(&cap[1]),
        cap[2].trim(),
        cap[3].trim()
    ))
}

fn es_pet(text: &str) -> Option<String> {
    let cap = ES_PET.captures(text)?;
    Some(format!(
        "{} raza {}, nombre '{}'",
        capitalize(&cap[1]),
        cap[2].trim(),
        cap[3].trim()
    ))
}

fn en_real_estate(text: &str) -> Option<String> {
    let cap = EN_REAL_ESTATE.captures(text)?;
    Some(format!("Property located at {}", cap[1].trim()))
}

fn en_projected_property(text: &str) -> Option<String> {
    let cap = EN_PROJECTED.captures(text)?;
    Some(format!(
        "Dwelling in development \"{}\", {}",
        cap[1].trim(),
        cap[2].trim()
    ))
}

fn en_vehicle(text: &str) -> Option<String> {
    let cap = EN_VEHICLE.captures(text)?;
    Some(format!(
        "Vehicle make {}, model {}, plate/VIN {}",
        cap[1].to_uppercase(),
        cap[2].to_uppercase(),
        cap[3].to_uppercase()
    ))
}

fn en_watercraft(text: &str) -> Option<String> {
    let cap = EN_WATERCRAFT.captures(text)?;
    Some(format!(
        "Vessel '{}' (registration {}), make {}, model {}, year {}",
        cap[1].trim(),
        cap[2].trim(),
        cap[3].trim(),
        cap[4].trim(),
        cap[5].trim()
    ))
}

fn en_aircraft(text: &str) -> Option<String> {
    labeled_aircraft(
        text,
        &EN_AIRCRAFT_TYPE,
        &EN_AIRCRAFT_MAKE,
        &EN_AIRCRAFT_MODEL,
        &EN_AIRCRAFT_REG,
        |reg, make, model| format!("Aircraft (registration {}), make {}, model {}", reg, make, model),
    )
}

fn en_appliance(text: &str) -> Option<String> {
    let cap = EN_APPLIANCE.captures(text)?;
    Some(format!(
        "{} make {}, model {}",
        capitalize(&cap[1]),
        &cap[2],
        &cap[3]
    ))
}

fn en_laptop(text: &str) -> Option<String> {
    let cap = EN_LAPTOP.captures(text)?;
    Some(format!(
        "{} make {}, model {}",
        capitalize(&cap[1]),
        &cap[2],
        &cap[3]
    ))
}

fn en_software(text: &str) -> Option<String> {
    let cap = EN_SOFTWARE.captures(text)?;
    Some(format!(
        "{} '{}', version {}",
        capitalize(&cap[1]),
        cap[2].trim(),
        &cap[3]
    ))
}

fn en_furniture(text: &str) -> Option<String> {
    let cap = EN_FURNITURE.captures(text)?;
    Some(format!("{} type {}", capitalize(&cap[1]), cap[2].trim()))
}

fn en_phone(text: &str) -> Option<String> {
    let cap = EN_PHONE.captures(text)?;
    Some(format!(
        "{} make {}, model {}",
        capitalize(&cap[1]),
        &cap[2],
        &cap[3]
    ))
}

fn en_artwork(text: &str) -> Option<String> {
    let cap = EN_ARTWORK.captures(text)?;
    Some(format!(
        "{} titled '{}', author: {}",
        capitalize(&cap[1]),
        cap[2].trim(),
        cap[3].trim()
    ))
}

fn en_pet(text: &str) -> Option<String> {
    let cap = EN_PET.captures(text)?;
    Some(format!(
        "{} breed {}, name '{}'",
        capitalize(&cap[1]),
        cap[2].trim(),
        cap[3].trim()
    ))
}

fn labeled_aircraft(
    text: &str,
    type_re: &Regex,
    make_re: &Regex,
    model_re: &Regex,
    reg_re: &Regex,
    render: impl Fn(&str, &str, &str) -> String,
) -> Option<String> {
    let field = |re: &Regex| {
        re.captures(text)
            .map(|c| c[1].trim().to_string())
    };
    let kind = field(type_re);
    let make = field(make_re);
    let model = field(model_re);
    let reg = field(reg_re);

    if kind.is_none() && make.is_none() && model.is_none() && reg.is_none() {
        return None;
    }

    let na = "N/A".to_string();
    Some(render(
        reg.as_ref().unwrap_or(&na),
        make.as_ref().unwrap_or(&na),
        model.as_ref().unwrap_or(&na),
    ))
}

/// Generic fallback patterns with a noise filter: leading articles are
/// stripped, and captures that are too long or quote contract boilerplate
/// are discarded as too generic.
fn generic(text: &str, lang: Lang) -> Option<String> {
    let generics: &[Regex] = match lang {
        Lang::Es => &ES_GENERIC,
        Lang::En => &EN_GENERIC,
    };

    for re in generics {
        let cap = match re.captures(text) {
            Some(c) => c,
            None => continue,
        };
        let raw = cap[1].trim();
        if raw.len() <= 3 {
            continue;
        }
        let stripped = LEADING_ARTICLE.replace(raw, "");
        let item = capitalize(stripped.trim());
        let lower = item.to_lowercase();
        if item.chars().count() < 100
            && !lower.contains("following")
            && !lower.contains("siguiente")
            && !lower.contains("present contract")
            && !lower.contains("presente contrato")
        {
            return Some(item);
        }
    }
    None
}
