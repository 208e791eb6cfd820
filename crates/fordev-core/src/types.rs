//! Shared domain types used across the fordev client.
//!
//! These enums model the closed sets of values the generator filters accept,
//! so that callers and the validator agree on a single source of truth.

use crate::error::CoreError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Brazilian federative unit (Unidade Federativa).
///
/// The 26 states plus the Federal District. Codes are the two-letter
/// upper-case abbreviations used by the generator site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Uf {
    /// Acre
    Ac,
    /// Alagoas
    Al,
    /// Amapá
    Ap,
    /// Amazonas
    Am,
    /// Bahia
    Ba,
    /// Ceará
    Ce,
    /// Distrito Federal
    Df,
    /// Espírito Santo
    Es,
    /// Goiás
    Go,
    /// Maranhão
    Ma,
    /// Mato Grosso
    Mt,
    /// Mato Grosso do Sul
    Ms,
    /// Minas Gerais
    Mg,
    /// Pará
    Pa,
    /// Paraíba
    Pb,
    /// Paraná
    Pr,
    /// Pernambuco
    Pe,
    /// Piauí
    Pi,
    /// Rio de Janeiro
    Rj,
    /// Rio Grande do Norte
    Rn,
    /// Rio Grande do Sul
    Rs,
    /// Rondônia
    Ro,
    /// Roraima
    Rr,
    /// Santa Catarina
    Sc,
    /// São Paulo
    Sp,
    /// Sergipe
    Se,
    /// Tocantins
    To,
}

impl Uf {
    /// Every federative unit, in the order the site lists them.
    pub const ALL: [Uf; 27] = [
        Uf::Ac,
        Uf::Al,
        Uf::Ap,
        Uf::Am,
        Uf::Ba,
        Uf::Ce,
        Uf::Df,
        Uf::Es,
        Uf::Go,
        Uf::Ma,
        Uf::Mt,
        Uf::Ms,
        Uf::Mg,
        Uf::Pa,
        Uf::Pb,
        Uf::Pr,
        Uf::Pe,
        Uf::Pi,
        Uf::Rj,
        Uf::Rn,
        Uf::Rs,
        Uf::Ro,
        Uf::Rr,
        Uf::Sc,
        Uf::Sp,
        Uf::Se,
        Uf::To,
    ];

    /// Two-letter upper-case code.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Ac => "AC",
            Self::Al => "AL",
            Self::Ap => "AP",
            Self::Am => "AM",
            Self::Ba => "BA",
            Self::Ce => "CE",
            Self::Df => "DF",
            Self::Es => "ES",
            Self::Go => "GO",
            Self::Ma => "MA",
            Self::Mt => "MT",
            Self::Ms => "MS",
            Self::Mg => "MG",
            Self::Pa => "PA",
            Self::Pb => "PB",
            Self::Pr => "PR",
            Self::Pe => "PE",
            Self::Pi => "PI",
            Self::Rj => "RJ",
            Self::Rn => "RN",
            Self::Rs => "RS",
            Self::Ro => "RO",
            Self::Rr => "RR",
            Self::Sc => "SC",
            Self::Sp => "SP",
            Self::Se => "SE",
            Self::To => "TO",
        }
    }

    /// Full Portuguese name of the unit.
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Ac => "Acre",
            Self::Al => "Alagoas",
            Self::Ap => "Amapá",
            Self::Am => "Amazonas",
            Self::Ba => "Bahia",
            Self::Ce => "Ceará",
            Self::Df => "Distrito Federal",
            Self::Es => "Espírito Santo",
            Self::Go => "Goiás",
            Self::Ma => "Maranhão",
            Self::Mt => "Mato Grosso",
            Self::Ms => "Mato Grosso do Sul",
            Self::Mg => "Minas Gerais",
            Self::Pa => "Pará",
            Self::Pb => "Paraíba",
            Self::Pr => "Paraná",
            Self::Pe => "Pernambuco",
            Self::Pi => "Piauí",
            Self::Rj => "Rio de Janeiro",
            Self::Rn => "Rio Grande do Norte",
            Self::Rs => "Rio Grande do Sul",
            Self::Ro => "Rondônia",
            Self::Rr => "Roraima",
            Self::Sc => "Santa Catarina",
            Self::Sp => "São Paulo",
            Self::Se => "Sergipe",
            Self::To => "Tocantins",
        }
    }

    /// Look up a unit by code, ignoring case and surrounding whitespace.
    ///
    /// # Errors
    /// Returns error if the input is not two letters or names no unit.
    pub fn from_code(code: &str) -> Result<Self, CoreError> {
        static CODE_REGEX: OnceLock<Regex> = OnceLock::new();
        let regex = CODE_REGEX.get_or_init(|| Regex::new(r"^[A-Za-z]{2}$").expect("valid regex"));

        let code = code.trim();
        if !regex.is_match(code) {
            return Err(CoreError::Validation(format!(
                "invalid UF code: must be two letters, got '{code}'"
            )));
        }

        let upper = code.to_ascii_uppercase();
        Self::ALL
            .iter()
            .copied()
            .find(|uf| uf.code() == upper)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "invalid UF code: '{upper}' is not a Brazilian federative unit"
                ))
            })
    }
}

impl FromStr for Uf {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

impl fmt::Display for Uf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Sex filter accepted by the people generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Sex {
    /// Masculino
    #[serde(rename = "M")]
    Male,
    /// Feminino
    #[serde(rename = "F")]
    Female,
    /// Let the site pick
    #[default]
    #[serde(rename = "R")]
    Random,
}

impl Sex {
    /// One-letter filter code (`M`, `F` or `R`).
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Male => "M",
            Self::Female => "F",
            Self::Random => "R",
        }
    }

    /// Label the site prints in generated records. `None` for [`Sex::Random`].
    #[must_use]
    pub fn label(&self) -> Option<&'static str> {
        match self {
            Self::Male => Some("Masculino"),
            Self::Female => Some("Feminino"),
            Self::Random => None,
        }
    }
}

impl FromStr for Sex {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "M" => Ok(Self::Male),
            "F" => Ok(Self::Female),
            "R" | "" => Ok(Self::Random),
            other => Err(CoreError::Validation(format!(
                "invalid sex: expected 'M', 'F' or 'R', got '{other}'"
            ))),
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uf_all_unique() {
        let mut codes: Vec<_> = Uf::ALL.iter().map(Uf::code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), 27);
    }

    #[test]
    fn test_uf_from_code_case_insensitive() {
        assert_eq!(Uf::from_code("sp").expect("valid code"), Uf::Sp);
        assert_eq!(Uf::from_code(" Rj ").expect("valid code"), Uf::Rj);
        assert_eq!("DF".parse::<Uf>().expect("valid code"), Uf::Df);
    }

    #[test]
    fn test_uf_from_code_invalid() {
        let invalid = vec!["ZZ", "S", "SPX", "", "1A", "XX"];

        for code in invalid {
            assert!(Uf::from_code(code).is_err(), "Should fail for: {code}");
        }
    }

    #[test]
    fn test_uf_invalid_message_names_code() {
        let err = Uf::from_code("zz").expect_err("ZZ is not a UF");
        assert!(err.to_string().contains("'ZZ'"));
    }

    #[test]
    fn test_uf_display() {
        assert_eq!(Uf::Sp.to_string(), "SP");
        assert_eq!(Uf::Sp.display_name(), "São Paulo");
    }

    #[test]
    fn test_uf_serialization() {
        let json = serde_json::to_string(&Uf::Mg).expect("serialize UF");
        assert_eq!(json, "\"MG\"");

        let parsed: Uf = serde_json::from_str("\"PE\"").expect("deserialize UF");
        assert_eq!(parsed, Uf::Pe);
    }

    #[test]
    fn test_sex_parse() {
        assert_eq!("m".parse::<Sex>().expect("valid sex"), Sex::Male);
        assert_eq!("F".parse::<Sex>().expect("valid sex"), Sex::Female);
        assert_eq!("".parse::<Sex>().expect("blank is random"), Sex::Random);
        assert!("X".parse::<Sex>().is_err());
    }

    #[test]
    fn test_sex_label() {
        assert_eq!(Sex::Male.label(), Some("Masculino"));
        assert_eq!(Sex::Female.label(), Some("Feminino"));
        assert_eq!(Sex::Random.label(), None);
        assert_eq!(Sex::default(), Sex::Random);
    }
}
