use crate::error::{GeneratorError, Result};
use crate::filter::{FilterValue, ValidatedFilters};
use crate::operation::{Derived, Encoding, Operation, Target};

/// Name of the form field that selects the generator on the site.
pub const ACTION_FIELD: &str = "acao";

/// Placeholder the people form sends as city when no state is chosen.
pub const NO_STATE_CITY: &str = "Selecione o estado!";

/// A fully built form submission for one remote operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormRequest {
    pub operation: Operation,
    /// Form handler path, relative to the base URL
    pub endpoint: &'static str,
    /// Tool page path, relative to the base URL
    pub referer: &'static str,
    /// Form fields in submission order
    pub fields: Vec<(&'static str, String)>,
}

impl FormRequest {
    /// `application/x-www-form-urlencoded` body.
    #[must_use]
    pub fn body(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.fields.iter().map(|(k, v)| (*k, v.as_str())))
            .finish()
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Translate validated filters into the site's form fields.
///
/// The action discriminator comes first, then every declared filter in
/// table order, then derived fields.
pub fn build_request(filters: &ValidatedFilters) -> Result<FormRequest> {
    let spec = filters.spec();
    let op = filters.operation();

    let Target::Remote {
        endpoint,
        action,
        referer,
    } = spec.target
    else {
        return Err(GeneratorError::spec(
            op.name(),
            "local operations do not build requests",
        ));
    };

    let mut fields = Vec::with_capacity(spec.filters.len() + spec.derived.len() + 1);
    fields.push((ACTION_FIELD, action.to_string()));

    for filter in spec.filters {
        let value = filters.get(filter.name).ok_or_else(|| {
            GeneratorError::spec(
                op.name(),
                format!("validated filters lack '{}'", filter.name),
            )
        })?;

        let encoded = encode(filter.encoding, value).ok_or_else(|| {
            GeneratorError::spec(
                op.name(),
                format!("cannot encode '{}' = '{value}' as {:?}", filter.name, filter.encoding),
            )
        })?;

        fields.push((filter.form_field, encoded));
    }

    for derived in spec.derived {
        match *derived {
            Derived::CityPlaceholder {
                form_field,
                state_filter,
            } => {
                let state = filters.text(state_filter).ok_or_else(|| {
                    GeneratorError::spec(
                        op.name(),
                        format!("derived field needs text filter '{state_filter}'"),
                    )
                })?;
                let city = if state.is_empty() { NO_STATE_CITY } else { "" };
                fields.push((form_field, city.to_string()));
            }
        }
    }

    Ok(FormRequest {
        operation: op,
        endpoint,
        referer,
        fields,
    })
}

fn encode(encoding: Encoding, value: &FilterValue) -> Option<String> {
    match (encoding, value) {
        (Encoding::Verbatim, FilterValue::Text(s)) => Some(s.clone()),
        (Encoding::Verbatim, FilterValue::Integer(i)) => Some(i.to_string()),
        (Encoding::YesNo, FilterValue::Bool(b)) => Some(if *b { "S" } else { "N" }.to_string()),
        (Encoding::Lookup(table), FilterValue::Text(key)) => table
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| (*v).to_string()),
        (Encoding::Catalog(catalog), FilterValue::Integer(i)) => usize::try_from(*i)
            .ok()
            .and_then(|idx| catalog.site_code(idx))
            .map(str::to_string),
        _ => None,
    }
}
