//! Public entry point: one async method per generator.
//!
//! Every call runs validation, request building, a single transport round
//! trip and parsing, in that order, and returns the first error unchanged.
//! Local operations stop after validation and sample from built-in tables.

use crate::catalog::{Catalog, VEHICLE_BRANDS};
use crate::error::{GeneratorError, Result};
use crate::filter::{validate, FilterParameters, FilterValue, ValidatedFilters};
use crate::operation::{Operation, OutputShape, SamplePool};
use crate::parser::parse;
use crate::record::{FieldValue, Generated, GeneratedRecord};
use crate::request::build_request;
use crate::transport::{HttpTransport, Transport};
use fordev_core::{ClientConfig, Uf};
use rand::seq::SliceRandom;
use rand::Rng;
use std::borrow::Cow;

/// Client for the generator site.
///
/// Holds no state besides its transport, so a single instance can be shared
/// between tasks.
///
/// ```rust,no_run
/// use fordev_generators::{FilterParameters, GeneratorClient};
///
/// # async fn run() -> fordev_generators::Result<()> {
/// let client = GeneratorClient::new()?;
/// let cpf = client.cpf(&FilterParameters::new()).await?;
/// println!("{}", cpf.text("cpf").unwrap_or_default());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct GeneratorClient<T: Transport = HttpTransport> {
    transport: T,
}

impl GeneratorClient<HttpTransport> {
    /// Client with the default configuration.
    pub fn new() -> Result<Self> {
        Self::from_config(&ClientConfig::default())
    }

    /// Client for an explicit configuration.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        Ok(Self::with_transport(HttpTransport::new(config)?))
    }

    /// Client configured from the user's config file and `FORDEV_*`
    /// environment variables.
    pub fn from_env() -> Result<Self> {
        let config = ClientConfig::load_with_env()?;
        Self::from_config(&config)
    }
}

impl<T: Transport> GeneratorClient<T> {
    /// Client over any transport.
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    /// Underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Run any operation by descriptor.
    pub async fn generate(
        &self,
        operation: Operation,
        params: &FilterParameters,
    ) -> Result<Generated> {
        let params = resolve_card_flag(operation, params);
        let filters = validate(operation, &params)?;

        let generated = if let OutputShape::Sample {
            field,
            pool,
            count_filter,
        } = filters.spec().output
        {
            sample(&filters, field, pool, count_filter)?
        } else {
            let request = build_request(&filters)?;
            let raw = self.transport.send(&request).await?;
            parse(operation, &raw)?
        };

        tracing::debug!(
            operation = %operation,
            records = generated.len(),
            "Generated data"
        );

        Ok(generated)
    }

    async fn one(&self, operation: Operation, params: &FilterParameters) -> Result<GeneratedRecord> {
        match self.generate(operation, params).await? {
            Generated::One(record) => Ok(record),
            Generated::Many(_) => Err(GeneratorError::spec(
                operation.name(),
                "expected a single record, got a list",
            )),
        }
    }

    async fn many(
        &self,
        operation: Operation,
        params: &FilterParameters,
    ) -> Result<Vec<GeneratedRecord>> {
        Ok(self.generate(operation, params).await?.into_records())
    }

    /// Certificate number. Filters: `kind`, `formatting`.
    pub async fn certificate(&self, params: &FilterParameters) -> Result<GeneratedRecord> {
        self.one(Operation::Certificate, params).await
    }

    /// Driver's licence number. No filters.
    pub async fn cnh(&self, params: &FilterParameters) -> Result<GeneratedRecord> {
        self.one(Operation::Cnh, params).await
    }

    /// Bank account. Filters: `bank`, `state`.
    pub async fn bank_account(&self, params: &FilterParameters) -> Result<GeneratedRecord> {
        self.one(Operation::BankAccount, params).await
    }

    /// CPF. Filters: `state`, `formatting`.
    pub async fn cpf(&self, params: &FilterParameters) -> Result<GeneratedRecord> {
        self.one(Operation::Cpf, params).await
    }

    /// PIS/PASEP number. Filters: `formatting`.
    pub async fn pis_pasep(&self, params: &FilterParameters) -> Result<GeneratedRecord> {
        self.one(Operation::PisPasep, params).await
    }

    /// RENAVAM number. No filters.
    pub async fn renavam(&self, params: &FilterParameters) -> Result<GeneratedRecord> {
        self.one(Operation::Renavam, params).await
    }

    /// Vehicle. Filters: `brand`, `state`, `formatting`.
    pub async fn vehicle(&self, params: &FilterParameters) -> Result<GeneratedRecord> {
        self.one(Operation::Vehicle, params).await
    }

    /// Random vehicle brand names without repetition. Filters: `count`.
    pub async fn vehicle_brand(&self, params: &FilterParameters) -> Result<Vec<GeneratedRecord>> {
        self.many(Operation::VehicleBrand, params).await
    }

    /// Licence plate. Filters: `state`, `formatting`.
    pub async fn vehicle_plate(&self, params: &FilterParameters) -> Result<GeneratedRecord> {
        self.one(Operation::VehiclePlate, params).await
    }

    /// CNPJ. Filters: `formatting`.
    pub async fn cnpj(&self, params: &FilterParameters) -> Result<GeneratedRecord> {
        self.one(Operation::Cnpj, params).await
    }

    /// RG. Filters: `formatting`.
    pub async fn rg(&self, params: &FilterParameters) -> Result<GeneratedRecord> {
        self.one(Operation::Rg, params).await
    }

    /// State tax registration. Filters: `state` (defaults to SP), `formatting`.
    pub async fn state_registration(&self, params: &FilterParameters) -> Result<GeneratedRecord> {
        self.one(Operation::StateRegistration, params).await
    }

    /// Voter title. Filters: `state` (required).
    pub async fn voter_title(&self, params: &FilterParameters) -> Result<GeneratedRecord> {
        self.one(Operation::VoterTitle, params).await
    }

    /// Credit card. Filters: `bank` (card flag, 0 picks one at random),
    /// `formatting`.
    pub async fn credit_card(&self, params: &FilterParameters) -> Result<GeneratedRecord> {
        self.one(Operation::CreditCard, params).await
    }

    /// One or more people. Filters: `count`, `sex`, `age`, `state`,
    /// `formatting`.
    pub async fn people(&self, params: &FilterParameters) -> Result<Vec<GeneratedRecord>> {
        self.many(Operation::People, params).await
    }

    /// A single person. Same filters as [`Self::people`] except `count`.
    pub async fn person(&self, params: &FilterParameters) -> Result<GeneratedRecord> {
        if params.contains("count") {
            return Err(GeneratorError::validation(
                "count",
                "person always returns one record; use people for more",
            ));
        }

        self.many(Operation::People, params)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| GeneratorError::spec(Operation::People.name(), "no person returned"))
    }

    /// Company. Filters: `state` (defaults to SP), `age`, `formatting`.
    pub async fn company(&self, params: &FilterParameters) -> Result<GeneratedRecord> {
        self.one(Operation::Company, params).await
    }

    /// Random UF codes without repetition. Filters: `count`.
    pub async fn uf(&self, params: &FilterParameters) -> Result<Vec<GeneratedRecord>> {
        self.many(Operation::Uf, params).await
    }

    /// Cities of a state, in site order without duplicates. Filters: `state`
    /// (defaults to SP).
    pub async fn city(&self, params: &FilterParameters) -> Result<Vec<GeneratedRecord>> {
        self.many(Operation::City, params).await
    }
}

/// The card generator has no "random" option on the site, so a flag is
/// drawn here when the caller leaves `bank` unset or 0.
fn resolve_card_flag(operation: Operation, params: &FilterParameters) -> Cow<'_, FilterParameters> {
    if operation != Operation::CreditCard {
        return Cow::Borrowed(params);
    }

    match params.get("bank") {
        None | Some(FilterValue::Integer(0)) => {
            let max = i64::try_from(Catalog::CardFlag.len()).unwrap_or(i64::MAX);
            let flag = rand::thread_rng().gen_range(1..=max);
            tracing::debug!(flag, "Picked random card flag");
            Cow::Owned(params.clone().with("bank", flag))
        }
        Some(_) => Cow::Borrowed(params),
    }
}

fn sample(
    filters: &ValidatedFilters,
    field: &str,
    pool: SamplePool,
    count_filter: &str,
) -> Result<Generated> {
    let operation = filters.operation();
    let count = filters
        .integer(count_filter)
        .and_then(|n| usize::try_from(n).ok())
        .ok_or_else(|| {
            GeneratorError::spec(
                operation.name(),
                format!("sample size '{count_filter}' is not a positive integer"),
            )
        })?;

    let values: Vec<&'static str> = match pool {
        SamplePool::Uf => Uf::ALL.iter().map(Uf::code).collect(),
        SamplePool::VehicleBrand => VEHICLE_BRANDS.iter().map(|(name, _)| *name).collect(),
    };

    let records = values
        .choose_multiple(&mut rand::thread_rng(), count)
        .map(|value| {
            let mut record = GeneratedRecord::new();
            record.insert(field, FieldValue::Text((*value).to_string()));
            record
        })
        .collect();

    Ok(Generated::Many(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::FormRequest;
    use async_trait::async_trait;
    use std::collections::HashSet;
    use std::sync::Mutex;

    /// Returns a canned body and records every request it sees.
    struct CannedTransport {
        body: String,
        sent: Mutex<Vec<FormRequest>>,
    }

    impl CannedTransport {
        fn new(body: &str) -> Self {
            Self {
                body: body.to_string(),
                sent: Mutex::new(Vec::new()),
            }
        }

        fn sent(&self) -> Vec<FormRequest> {
            self.sent.lock().expect("lock").clone()
        }
    }

    #[async_trait]
    impl Transport for CannedTransport {
        async fn send(&self, request: &FormRequest) -> Result<String> {
            self.sent.lock().expect("lock").push(request.clone());
            Ok(self.body.clone())
        }
    }

    #[tokio::test]
    async fn test_remote_call_goes_through_transport() {
        let client = GeneratorClient::with_transport(CannedTransport::new("123.456.789-09"));
        let record = client
            .cpf(&FilterParameters::new().with("state", "mg"))
            .await
            .expect("cpf");

        assert_eq!(record.text("cpf"), Some("123.456.789-09"));
        let sent = client.transport().sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].field("cpf_estado"), Some("MG"));
    }

    #[tokio::test]
    async fn test_validation_failure_skips_transport() {
        let client = GeneratorClient::with_transport(CannedTransport::new("unused"));
        let err = client
            .people(&FilterParameters::new().with("age", 12))
            .await
            .expect_err("age 12 is out of range");

        assert!(matches!(err, GeneratorError::Validation { .. }));
        assert!(client.transport().sent().is_empty());
    }

    #[tokio::test]
    async fn test_local_samples_are_distinct() {
        let client = GeneratorClient::with_transport(CannedTransport::new("unused"));

        let ufs = client
            .uf(&FilterParameters::new().with("count", 27))
            .await
            .expect("uf sample");
        let codes: HashSet<_> = ufs.iter().filter_map(|r| r.text("uf")).collect();
        assert_eq!(codes.len(), 27);

        let brands = client
            .vehicle_brand(&FilterParameters::new().with("count", 5))
            .await
            .expect("brand sample");
        let names: HashSet<_> = brands.iter().filter_map(|r| r.text("marca")).collect();
        assert_eq!(names.len(), 5);

        assert!(client.transport().sent().is_empty());
    }

    #[tokio::test]
    async fn test_random_card_flag_is_concrete() {
        let html = r#"<div id="cartao_numero">4716 1234 5678 9012</div>
            <div id="data_validade">11/2026</div>
            <div id="codigo_seguranca">987</div>"#;
        let client = GeneratorClient::with_transport(CannedTransport::new(html));

        for params in [FilterParameters::new(), FilterParameters::new().with("bank", 0)] {
            client.credit_card(&params).await.expect("card");
        }

        for request in client.transport().sent() {
            let flag = request.field("bandeira").expect("flag sent");
            assert!(!flag.is_empty(), "random flag must be resolved");
        }
    }

    #[tokio::test]
    async fn test_explicit_card_flag_kept() {
        let html = r#"<div id="cartao_numero">3782 822463 10005</div>
            <div id="data_validade">01/2028</div>
            <div id="codigo_seguranca">1234</div>"#;
        let client = GeneratorClient::with_transport(CannedTransport::new(html));
        let card = client
            .credit_card(&FilterParameters::new().with("bank", 3))
            .await
            .expect("amex");

        assert_eq!(card.text("cvv"), Some("1234"));
        assert_eq!(client.transport().sent()[0].field("bandeira"), Some("amex"));
    }

    #[tokio::test]
    async fn test_person_rejects_count() {
        let client = GeneratorClient::with_transport(CannedTransport::new("[]"));
        let err = client
            .person(&FilterParameters::new().with("count", 2))
            .await
            .expect_err("count not allowed");

        let GeneratorError::Validation { field, .. } = err else {
            panic!("expected validation error");
        };
        assert_eq!(field, "count");
        assert!(client.transport().sent().is_empty());
    }

    #[tokio::test]
    async fn test_parse_error_propagates() {
        let client = GeneratorClient::with_transport(CannedTransport::new("<p>manutenção</p>"));
        let err = client
            .rg(&FilterParameters::new())
            .await
            .expect_err("markup instead of rg");

        assert!(matches!(err, GeneratorError::Parse { .. }));
    }
}
