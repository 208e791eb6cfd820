//! Static descriptors for every supported generator.
//!
//! Each [`Operation`] maps to exactly one immutable [`OperationSpec`] that
//! carries everything the pipeline needs: the site's form action, the filters
//! the caller may pass with their validation rules and form encodings, and
//! the shape the parser expects back.

use crate::catalog::Catalog;
use crate::error::{GeneratorError, Result};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Form handler that serves every remote generator.
pub const FORM_ENDPOINT: &str = "ferramentas_online.php";

/// Supported data-generation capabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Operation {
    /// Birth, wedding, religious wedding or death certificate number
    Certificate,
    /// Driver's licence (Carteira Nacional de Habilitação)
    Cnh,
    /// Bank account with agency, bank and location
    BankAccount,
    /// Individual taxpayer number (Cadastro de Pessoas Físicas)
    Cpf,
    /// PIS/PASEP social integration number
    PisPasep,
    /// National vehicle registry number
    Renavam,
    /// Vehicle with brand, model, year, plate and colour
    Vehicle,
    /// Random sample of vehicle brand names (local)
    VehicleBrand,
    /// Licence plate
    VehiclePlate,
    /// Company taxpayer number (Cadastro Nacional da Pessoa Jurídica)
    Cnpj,
    /// Identity card number (Registro Geral)
    Rg,
    /// State tax registration (inscrição estadual)
    StateRegistration,
    /// Voter registration card number
    VoterTitle,
    /// Credit card number, expiry and security code
    CreditCard,
    /// One or more people with documents, address and physical data
    People,
    /// Company with documents, address and contacts
    Company,
    /// Random sample of federative unit codes (local)
    Uf,
    /// Cities of a federative unit
    City,
}

impl Operation {
    /// Every operation, in declaration order.
    pub const ALL: [Operation; 18] = [
        Operation::Certificate,
        Operation::Cnh,
        Operation::BankAccount,
        Operation::Cpf,
        Operation::PisPasep,
        Operation::Renavam,
        Operation::Vehicle,
        Operation::VehicleBrand,
        Operation::VehiclePlate,
        Operation::Cnpj,
        Operation::Rg,
        Operation::StateRegistration,
        Operation::VoterTitle,
        Operation::CreditCard,
        Operation::People,
        Operation::Company,
        Operation::Uf,
        Operation::City,
    ];

    /// Stable snake_case name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Certificate => "certificate",
            Self::Cnh => "cnh",
            Self::BankAccount => "bank_account",
            Self::Cpf => "cpf",
            Self::PisPasep => "pis_pasep",
            Self::Renavam => "renavam",
            Self::Vehicle => "vehicle",
            Self::VehicleBrand => "vehicle_brand",
            Self::VehiclePlate => "vehicle_plate",
            Self::Cnpj => "cnpj",
            Self::Rg => "rg",
            Self::StateRegistration => "state_registration",
            Self::VoterTitle => "voter_title",
            Self::CreditCard => "credit_card",
            Self::People => "people",
            Self::Company => "company",
            Self::Uf => "uf",
            Self::City => "city",
        }
    }

    /// Descriptor for this operation.
    #[must_use]
    pub fn spec(&self) -> &'static OperationSpec {
        match self {
            Self::Certificate => &CERTIFICATE,
            Self::Cnh => &CNH,
            Self::BankAccount => &BANK_ACCOUNT,
            Self::Cpf => &CPF,
            Self::PisPasep => &PIS_PASEP,
            Self::Renavam => &RENAVAM,
            Self::Vehicle => &VEHICLE,
            Self::VehicleBrand => &VEHICLE_BRAND,
            Self::VehiclePlate => &VEHICLE_PLATE,
            Self::Cnpj => &CNPJ,
            Self::Rg => &RG,
            Self::StateRegistration => &STATE_REGISTRATION,
            Self::VoterTitle => &VOTER_TITLE,
            Self::CreditCard => &CREDIT_CARD,
            Self::People => &PEOPLE,
            Self::Company => &COMPANY,
            Self::Uf => &UF,
            Self::City => &CITY,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Operation {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|op| op.name() == s)
            .ok_or_else(|| {
                GeneratorError::validation("operation", format!("unknown operation '{s}'"))
            })
    }
}

/// Where an operation's data comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Form POST to the site
    Remote {
        /// Path of the form handler, relative to the base URL
        endpoint: &'static str,
        /// Value of the `acao` discriminator field
        action: &'static str,
        /// Tool page sent as `Referer`, relative to the base URL
        referer: &'static str,
    },
    /// Sampled from a built-in table; never touches the network
    Local,
}

/// Domain check applied to one filter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Federative unit code; blank allowed only when `allow_blank`
    Uf {
        /// Whether an empty string ("any state") is accepted
        allow_blank: bool,
    },
    /// One of a fixed set of upper-case codes
    Choice(&'static [&'static str]),
    /// Inclusive integer range, optionally also accepting 0 as "random"
    Range {
        /// Lowest accepted value
        min: i64,
        /// Highest accepted value
        max: i64,
        /// Whether 0 is accepted outside the range
        zero_is_random: bool,
    },
    /// Boolean switch
    Flag,
}

/// Default used when the caller omits an optional filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultValue {
    /// Text default
    Text(&'static str),
    /// Integer default
    Integer(i64),
    /// Boolean default
    Bool(bool),
}

/// Whether the caller must supply a filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    /// Missing value is a validation error
    Required,
    /// Missing value takes the given default
    Optional(DefaultValue),
}

/// How a validated value is written into the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// Text or integer written as-is
    Verbatim,
    /// Boolean written as `S` / `N`
    YesNo,
    /// Text key translated through a fixed table
    Lookup(&'static [(&'static str, &'static str)]),
    /// Integer index translated through a [`Catalog`]
    Catalog(Catalog),
}

/// One caller-facing filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSpec {
    /// Caller-facing name
    pub name: &'static str,
    /// Form field name on the site; empty for local operations
    pub form_field: &'static str,
    /// Domain check
    pub rule: Rule,
    /// Required or defaulted
    pub presence: Presence,
    /// Form encoding
    pub encoding: Encoding,
}

/// Form field computed from other filters rather than passed by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Derived {
    /// City selector that must say "pick a state" when no state is chosen
    CityPlaceholder {
        /// Form field name
        form_field: &'static str,
        /// Filter holding the state
        state_filter: &'static str,
    },
}

/// Declared type of an output field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Kept exactly as the site formats it
    Text,
    /// Parsed into an integer
    Integer,
}

/// One output field and where the parser finds it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputField {
    /// Name in the generated record
    pub name: &'static str,
    /// Element id (HTML) or key (JSON) in the response
    pub source: &'static str,
    /// Declared type
    pub kind: FieldKind,
}

impl OutputField {
    const fn text(name: &'static str, source: &'static str) -> Self {
        Self {
            name,
            source,
            kind: FieldKind::Text,
        }
    }

    const fn integer(name: &'static str, source: &'static str) -> Self {
        Self {
            name,
            source,
            kind: FieldKind::Integer,
        }
    }
}

/// Built-in tables sampled by local operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SamplePool {
    /// The 27 federative unit codes
    Uf,
    /// Vehicle brand names
    VehicleBrand,
}

/// What the response looks like and which fields it yields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputShape {
    /// Single plain-text line holding one value
    Text {
        /// Output field name
        field: &'static str,
    },
    /// HTML fragment whose elements carry values under known ids
    Html(&'static [OutputField]),
    /// JSON object or array of objects
    Json(&'static [OutputField]),
    /// HTML `<option>` list, one record per distinct option text
    Options {
        /// Output field name
        field: &'static str,
    },
    /// Local random sample without repetition
    Sample {
        /// Output field name
        field: &'static str,
        /// Table to draw from
        pool: SamplePool,
        /// Filter holding the sample size
        count_filter: &'static str,
    },
}

impl OutputShape {
    /// Whether the operation yields a sequence rather than one record.
    #[must_use]
    pub fn returns_many(&self) -> bool {
        matches!(self, Self::Json(_) | Self::Options { .. } | Self::Sample { .. })
    }

    /// Documented output field names.
    #[must_use]
    pub fn field_names(&self) -> Vec<&'static str> {
        match self {
            Self::Text { field } | Self::Options { field } | Self::Sample { field, .. } => {
                vec![*field]
            }
            Self::Html(fields) | Self::Json(fields) => fields.iter().map(|f| f.name).collect(),
        }
    }
}

/// Immutable descriptor of one generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationSpec {
    /// Operation this descriptor belongs to
    pub operation: Operation,
    /// Data source
    pub target: Target,
    /// Caller-facing filters in form order
    pub filters: &'static [FilterSpec],
    /// Fields computed from the filters
    pub derived: &'static [Derived],
    /// Response shape
    pub output: OutputShape,
}

impl OperationSpec {
    /// Look up a declared filter by name.
    #[must_use]
    pub fn filter(&self, name: &str) -> Option<&'static FilterSpec> {
        self.filters.iter().find(|f| f.name == name)
    }

    /// Names of the declared filters.
    #[must_use]
    pub fn filter_names(&self) -> Vec<&'static str> {
        self.filters.iter().map(|f| f.name).collect()
    }

    /// Check the descriptor for internal consistency.
    ///
    /// Rules, defaults and encodings must agree on the value type, remote
    /// operations need form field names, and names must be unique.
    pub fn validate(&self) -> Result<()> {
        let op = self.operation.name();
        let mut seen = HashSet::new();

        for filter in self.filters {
            if !seen.insert(filter.name) {
                return Err(GeneratorError::spec(
                    op,
                    format!("duplicate filter '{}'", filter.name),
                ));
            }

            let is_remote = matches!(self.target, Target::Remote { .. });
            if is_remote && filter.form_field.is_empty() {
                return Err(GeneratorError::spec(
                    op,
                    format!("filter '{}' has no form field", filter.name),
                ));
            }

            let default_matches = match (filter.rule, filter.presence) {
                (_, Presence::Required) => true,
                (Rule::Uf { .. } | Rule::Choice(_), Presence::Optional(d)) => {
                    matches!(d, DefaultValue::Text(_))
                }
                (Rule::Range { .. }, Presence::Optional(d)) => {
                    matches!(d, DefaultValue::Integer(_))
                }
                (Rule::Flag, Presence::Optional(d)) => matches!(d, DefaultValue::Bool(_)),
            };
            if !default_matches {
                return Err(GeneratorError::spec(
                    op,
                    format!("default of '{}' does not match its rule", filter.name),
                ));
            }

            let encoding_matches = match (filter.rule, filter.encoding) {
                (Rule::Flag, Encoding::YesNo) => true,
                (Rule::Uf { .. } | Rule::Range { .. }, Encoding::Verbatim) => true,
                (Rule::Choice(options), Encoding::Lookup(table)) => options
                    .iter()
                    .all(|o| table.iter().any(|(key, _)| key == o)),
                (Rule::Range { min, max, .. }, Encoding::Catalog(catalog)) => {
                    min >= 0 && usize::try_from(max).is_ok_and(|max| max <= catalog.len())
                }
                _ => false,
            };
            if !encoding_matches {
                return Err(GeneratorError::spec(
                    op,
                    format!("encoding of '{}' does not match its rule", filter.name),
                ));
            }
        }

        for derived in self.derived {
            let Derived::CityPlaceholder { state_filter, .. } = derived;
            if self.filter(state_filter).is_none() {
                return Err(GeneratorError::spec(
                    op,
                    format!("derived field refers to unknown filter '{state_filter}'"),
                ));
            }
        }

        match (self.target, self.output) {
            (Target::Local, OutputShape::Sample { count_filter, .. }) => {
                if self.filter(count_filter).is_none() {
                    return Err(GeneratorError::spec(
                        op,
                        format!("sample size filter '{count_filter}' is not declared"),
                    ));
                }
            }
            (Target::Local, _) | (Target::Remote { .. }, OutputShape::Sample { .. }) => {
                return Err(GeneratorError::spec(
                    op,
                    "local operations must sample and remote ones must not",
                ));
            }
            _ => {}
        }

        Ok(())
    }
}

// Shared filter declarations

const FORMATTING: FilterSpec = FilterSpec {
    name: "formatting",
    form_field: "pontuacao",
    rule: Rule::Flag,
    presence: Presence::Optional(DefaultValue::Bool(true)),
    encoding: Encoding::YesNo,
};

const fn any_state(form_field: &'static str) -> FilterSpec {
    FilterSpec {
        name: "state",
        form_field,
        rule: Rule::Uf { allow_blank: true },
        presence: Presence::Optional(DefaultValue::Text("")),
        encoding: Encoding::Verbatim,
    }
}

const fn state_or_sp(form_field: &'static str) -> FilterSpec {
    FilterSpec {
        name: "state",
        form_field,
        rule: Rule::Uf { allow_blank: false },
        presence: Presence::Optional(DefaultValue::Text("SP")),
        encoding: Encoding::Verbatim,
    }
}

const fn remote(action: &'static str, referer: &'static str) -> Target {
    Target::Remote {
        endpoint: FORM_ENDPOINT,
        action,
        referer,
    }
}

const CERTIFICATE_KINDS: &[(&str, &str)] = &[
    ("B", "nascimento"),
    ("W", "casamento"),
    ("R", "casamento_religioso"),
    ("D", "obito"),
    ("I", "Indiferente"),
];

const SEX_CODES: &[(&str, &str)] = &[("M", "H"), ("F", "M"), ("R", "I")];

static CERTIFICATE: OperationSpec = OperationSpec {
    operation: Operation::Certificate,
    target: remote("gerador_certidao", "gerador_numero_certidoes"),
    filters: &[
        FORMATTING,
        FilterSpec {
            name: "kind",
            form_field: "tipo_certidao",
            rule: Rule::Choice(&["B", "W", "R", "D", "I"]),
            presence: Presence::Optional(DefaultValue::Text("I")),
            encoding: Encoding::Lookup(CERTIFICATE_KINDS),
        },
    ],
    derived: &[],
    output: OutputShape::Text { field: "certidao" },
};

static CNH: OperationSpec = OperationSpec {
    operation: Operation::Cnh,
    target: remote("gerar_cnh", "gerador_de_cnh"),
    filters: &[],
    derived: &[],
    output: OutputShape::Text { field: "cnh" },
};

static BANK_ACCOUNT: OperationSpec = OperationSpec {
    operation: Operation::BankAccount,
    target: remote("gerar_conta_bancaria", "gerador_conta_bancaria"),
    filters: &[
        any_state("estado"),
        FilterSpec {
            name: "bank",
            form_field: "banco",
            rule: Rule::Range {
                min: 0,
                max: 5,
                zero_is_random: false,
            },
            presence: Presence::Optional(DefaultValue::Integer(0)),
            encoding: Encoding::Catalog(Catalog::Bank),
        },
    ],
    derived: &[],
    output: OutputShape::Html(&[
        OutputField::text("conta_corrente", "conta_corrente"),
        OutputField::text("agencia", "agencia"),
        OutputField::text("banco", "banco"),
        OutputField::text("cidade", "cidade"),
        OutputField::text("estado", "estado"),
    ]),
};

static CPF: OperationSpec = OperationSpec {
    operation: Operation::Cpf,
    target: remote("gerar_cpf", "gerador_de_cpf"),
    filters: &[FORMATTING, any_state("cpf_estado")],
    derived: &[],
    output: OutputShape::Text { field: "cpf" },
};

static PIS_PASEP: OperationSpec = OperationSpec {
    operation: Operation::PisPasep,
    target: remote("gerar_pis", "gerador_de_pis_pasep"),
    filters: &[FORMATTING],
    derived: &[],
    output: OutputShape::Text { field: "pis" },
};

static RENAVAM: OperationSpec = OperationSpec {
    operation: Operation::Renavam,
    target: remote("gerar_renavam", "gerador_de_renavam"),
    filters: &[],
    derived: &[],
    output: OutputShape::Text { field: "renavam" },
};

static VEHICLE: OperationSpec = OperationSpec {
    operation: Operation::Vehicle,
    target: remote("gerar_veiculo", "gerador_de_veiculos"),
    filters: &[
        FORMATTING,
        any_state("estado"),
        FilterSpec {
            name: "brand",
            form_field: "fipe_codigo_marca",
            rule: Rule::Range {
                min: 0,
                max: 87,
                zero_is_random: false,
            },
            presence: Presence::Optional(DefaultValue::Integer(0)),
            encoding: Encoding::Catalog(Catalog::VehicleBrand),
        },
    ],
    derived: &[],
    output: OutputShape::Html(&[
        OutputField::text("marca", "marca"),
        OutputField::text("modelo", "modelo"),
        OutputField::text("ano", "ano"),
        OutputField::text("renavam", "renavam"),
        OutputField::text("placa", "placa_veiculo"),
        OutputField::text("cor", "cor"),
    ]),
};

static VEHICLE_BRAND: OperationSpec = OperationSpec {
    operation: Operation::VehicleBrand,
    target: Target::Local,
    filters: &[FilterSpec {
        name: "count",
        form_field: "",
        rule: Rule::Range {
            min: 1,
            max: 87,
            zero_is_random: false,
        },
        presence: Presence::Optional(DefaultValue::Integer(1)),
        encoding: Encoding::Verbatim,
    }],
    derived: &[],
    output: OutputShape::Sample {
        field: "marca",
        pool: SamplePool::VehicleBrand,
        count_filter: "count",
    },
};

static VEHICLE_PLATE: OperationSpec = OperationSpec {
    operation: Operation::VehiclePlate,
    target: remote("gerar_placa", "gerador_de_placa_automoveis"),
    filters: &[FORMATTING, any_state("estado")],
    derived: &[],
    output: OutputShape::Text { field: "placa" },
};

static CNPJ: OperationSpec = OperationSpec {
    operation: Operation::Cnpj,
    target: remote("gerar_cnpj", "gerador_de_cnpj"),
    filters: &[FORMATTING],
    derived: &[],
    output: OutputShape::Text { field: "cnpj" },
};

static RG: OperationSpec = OperationSpec {
    operation: Operation::Rg,
    target: remote("gerar_rg", "gerador_de_rg"),
    filters: &[FORMATTING],
    derived: &[],
    output: OutputShape::Text { field: "rg" },
};

static STATE_REGISTRATION: OperationSpec = OperationSpec {
    operation: Operation::StateRegistration,
    target: remote("gerar_ie", "gerador_de_inscricao_estadual"),
    filters: &[FORMATTING, state_or_sp("estado")],
    derived: &[],
    output: OutputShape::Text {
        field: "inscricao_estadual",
    },
};

static VOTER_TITLE: OperationSpec = OperationSpec {
    operation: Operation::VoterTitle,
    target: remote("gerar_titulo_eleitor", "gerador_de_titulo_de_eleitor"),
    filters: &[FilterSpec {
        name: "state",
        form_field: "estado",
        rule: Rule::Uf { allow_blank: false },
        presence: Presence::Required,
        encoding: Encoding::Verbatim,
    }],
    derived: &[],
    output: OutputShape::Text {
        field: "titulo_eleitor",
    },
};

static CREDIT_CARD: OperationSpec = OperationSpec {
    operation: Operation::CreditCard,
    target: remote("gerar_cc", "gerador_de_numero_cartao_credito"),
    filters: &[
        FORMATTING,
        FilterSpec {
            name: "bank",
            form_field: "bandeira",
            rule: Rule::Range {
                min: 0,
                max: 10,
                zero_is_random: false,
            },
            presence: Presence::Optional(DefaultValue::Integer(0)),
            encoding: Encoding::Catalog(Catalog::CardFlag),
        },
    ],
    derived: &[],
    output: OutputShape::Html(&[
        OutputField::text("numero", "cartao_numero"),
        OutputField::text("data_validade", "data_validade"),
        OutputField::text("cvv", "codigo_seguranca"),
    ]),
};

static PEOPLE: OperationSpec = OperationSpec {
    operation: Operation::People,
    target: remote("gerar_pessoa", "gerador_de_pessoas"),
    filters: &[
        FilterSpec {
            name: "sex",
            form_field: "sexo",
            rule: Rule::Choice(&["M", "F", "R"]),
            presence: Presence::Optional(DefaultValue::Text("R")),
            encoding: Encoding::Lookup(SEX_CODES),
        },
        FORMATTING,
        FilterSpec {
            name: "age",
            form_field: "idade",
            rule: Rule::Range {
                min: 18,
                max: 80,
                zero_is_random: true,
            },
            presence: Presence::Optional(DefaultValue::Integer(0)),
            encoding: Encoding::Verbatim,
        },
        any_state("cep_estado"),
        FilterSpec {
            name: "count",
            form_field: "txt_qtde",
            rule: Rule::Range {
                min: 1,
                max: 30,
                zero_is_random: false,
            },
            presence: Presence::Optional(DefaultValue::Integer(1)),
            encoding: Encoding::Verbatim,
        },
    ],
    derived: &[Derived::CityPlaceholder {
        form_field: "cep_cidade",
        state_filter: "state",
    }],
    output: OutputShape::Json(&[
        OutputField::text("nome", "nome"),
        OutputField::integer("idade", "idade"),
        OutputField::text("cpf", "cpf"),
        OutputField::text("rg", "rg"),
        OutputField::text("data_nasc", "data_nasc"),
        OutputField::text("sexo", "sexo"),
        OutputField::text("signo", "signo"),
        OutputField::text("mae", "mae"),
        OutputField::text("pai", "pai"),
        OutputField::text("email", "email"),
        OutputField::text("senha", "senha"),
        OutputField::text("cep", "cep"),
        OutputField::text("endereco", "endereco"),
        OutputField::integer("numero", "numero"),
        OutputField::text("bairro", "bairro"),
        OutputField::text("cidade", "cidade"),
        OutputField::text("estado", "estado"),
        OutputField::text("telefone_fixo", "telefone_fixo"),
        OutputField::text("celular", "celular"),
        OutputField::text("altura", "altura"),
        OutputField::integer("peso", "peso"),
        OutputField::text("tipo_sanguineo", "tipo_sanguineo"),
        OutputField::text("cor", "cor"),
    ]),
};

static COMPANY: OperationSpec = OperationSpec {
    operation: Operation::Company,
    target: remote("gerar_empresa", "gerador_de_empresas"),
    filters: &[
        FORMATTING,
        state_or_sp("estado"),
        FilterSpec {
            name: "age",
            form_field: "idade",
            rule: Rule::Range {
                min: 1,
                max: 30,
                zero_is_random: false,
            },
            presence: Presence::Optional(DefaultValue::Integer(1)),
            encoding: Encoding::Verbatim,
        },
    ],
    derived: &[],
    output: OutputShape::Html(&[
        OutputField::text("nome", "nome"),
        OutputField::text("cnpj", "cnpj"),
        OutputField::text("inscricao_estadual", "ie"),
        OutputField::text("data_abertura", "data_abertura"),
        OutputField::text("site", "site"),
        OutputField::text("email", "email"),
        OutputField::text("cep", "cep"),
        OutputField::text("endereco", "endereco"),
        OutputField::integer("numero", "numero"),
        OutputField::text("bairro", "bairro"),
        OutputField::text("cidade", "cidade"),
        OutputField::text("estado", "estado"),
        OutputField::text("telefone_fixo", "telefone_fixo"),
        OutputField::text("celular", "celular"),
    ]),
};

static UF: OperationSpec = OperationSpec {
    operation: Operation::Uf,
    target: Target::Local,
    filters: &[FilterSpec {
        name: "count",
        form_field: "",
        rule: Rule::Range {
            min: 1,
            max: 27,
            zero_is_random: false,
        },
        presence: Presence::Optional(DefaultValue::Integer(1)),
        encoding: Encoding::Verbatim,
    }],
    derived: &[],
    output: OutputShape::Sample {
        field: "uf",
        pool: SamplePool::Uf,
        count_filter: "count",
    },
};

static CITY: OperationSpec = OperationSpec {
    operation: Operation::City,
    target: remote("carregar_cidades", "gerador_de_pessoas"),
    filters: &[state_or_sp("cep_estado")],
    derived: &[],
    output: OutputShape::Options { field: "cidade" },
};
