use fordev_generators::{
    ClientConfig, FilterParameters, GeneratorClient, GeneratorError, HttpTransport, Sex,
};
use regex::Regex;
use std::collections::HashSet;
use std::time::Duration;
use wiremock::matchers::{body_string, body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const FORM_PATH: &str = "/ferramentas_online.php";

fn client_for(server: &MockServer) -> GeneratorClient<HttpTransport> {
    let config = ClientConfig {
        base_url: server.uri(),
        ..ClientConfig::default()
    };
    GeneratorClient::from_config(&config).expect("create client")
}

#[tokio::test]
async fn test_cpf_without_filters() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(FORM_PATH))
        .and(header("X-Requested-With", "XMLHttpRequest"))
        .and(header(
            "Content-Type",
            "application/x-www-form-urlencoded; charset=UTF-8",
        ))
        .and(header("Referer", format!("{}/gerador_de_cpf", server.uri())))
        .and(body_string("acao=gerar_cpf&pontuacao=S&cpf_estado="))
        .respond_with(ResponseTemplate::new(200).set_body_string("529.982.247-25"))
        .expect(1)
        .mount(&server)
        .await;

    let record = client_for(&server)
        .cpf(&FilterParameters::new())
        .await
        .expect("generate cpf");

    let cpf = record.text("cpf").expect("cpf field");
    let shape = Regex::new(r"^\d{3}\.\d{3}\.\d{3}-\d{2}$").expect("valid regex");
    assert!(shape.is_match(cpf), "unexpected cpf {cpf}");
}

#[tokio::test]
async fn test_person_with_filters() {
    let server = MockServer::start().await;

    let body = r#"[{"nome":"Otávio Pedro Henrique Costa","idade":25,"cpf":"417.623.258-07",
        "rg":"28.193.574-6","data_nasc":"02/07/2000","sexo":"Masculino","signo":"Câncer",
        "mae":"Heloisa Costa","pai":"Renan Costa","email":"otavio@example.com.br",
        "senha":"Xh9kLm2PqR","cep":"13049-345","endereco":"Rua Manoel Fernandes Gomes",
        "numero":512,"bairro":"Jardim Ipaussurama","cidade":"Campinas","estado":"SP",
        "telefone_fixo":"(19) 2766-4417","celular":"(19) 99258-3316","altura":"1,74",
        "peso":71,"tipo_sanguineo":"A-","cor":"verde"}]"#;

    Mock::given(method("POST"))
        .and(path(FORM_PATH))
        .and(body_string_contains("acao=gerar_pessoa"))
        .and(body_string_contains("sexo=H"))
        .and(body_string_contains("idade=25"))
        .and(body_string_contains("cep_estado=SP"))
        .and(body_string_contains("txt_qtde=1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(1)
        .mount(&server)
        .await;

    let params = FilterParameters::new()
        .with("sex", Sex::Male)
        .with("age", 25)
        .with("state", "SP");
    let person = client_for(&server)
        .person(&params)
        .await
        .expect("generate person");

    assert_eq!(person.text("estado"), Some("SP"));
    assert_eq!(person.integer("idade"), Some(25));
    assert_eq!(person.text("sexo"), Sex::Male.label());
    assert_eq!(person.len(), 23);
}

#[tokio::test]
async fn test_city_list() {
    let server = MockServer::start().await;

    let body = concat!(
        r#"<option value="">Selecione uma cidade</option>"#,
        r#"<option value="9668">Campinas</option>"#,
        r#"<option value="9669">Campo Limpo Paulista</option>"#,
        r#"<option value="9668">Campinas</option>"#,
        r#"<option value="9670">Campos do Jordão</option>"#,
    );

    Mock::given(method("POST"))
        .and(path(FORM_PATH))
        .and(body_string("acao=carregar_cidades&cep_estado=SP"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(1)
        .mount(&server)
        .await;

    let cities = client_for(&server)
        .city(&FilterParameters::new().with("state", "SP"))
        .await
        .expect("list cities");

    let names: Vec<_> = cities.iter().filter_map(|c| c.text("cidade")).collect();
    assert_eq!(
        names,
        vec!["Campinas", "Campo Limpo Paulista", "Campos do Jordão"]
    );
    let unique: HashSet<_> = names.iter().collect();
    assert_eq!(unique.len(), names.len());
}

#[tokio::test]
async fn test_company_html() {
    let server = MockServer::start().await;

    let body = r#"
        <input id="nome" value="Lucas e Sara Marcenaria Ltda" />
        <input id="cnpj" value="45.723.174/0001-10" />
        <input id="ie" value="647.390.811.500" />
        <input id="data_abertura" value="11/09/2019" />
        <input id="site" value="www.lucasesaramarcenaria.com.br" />
        <input id="email" value="contato@lucasesaramarcenaria.com.br" />
        <input id="cep" value="09961-420" />
        <input id="endereco" value="Rua Ferrara" />
        <input id="numero" value="738" />
        <input id="bairro" value="Campanário" />
        <input id="cidade" value="Diadema" />
        <input id="estado" value="SP" />
        <input id="telefone_fixo" value="(11) 2597-2217" />
        <input id="celular" value="(11) 98264-3352" />"#;

    Mock::given(method("POST"))
        .and(path(FORM_PATH))
        .and(body_string("acao=gerar_empresa&pontuacao=S&estado=SP&idade=1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(1)
        .mount(&server)
        .await;

    let company = client_for(&server)
        .company(&FilterParameters::new())
        .await
        .expect("generate company");

    assert_eq!(company.text("cnpj"), Some("45.723.174/0001-10"));
    assert_eq!(company.integer("numero"), Some(738));
    assert_eq!(company.text("estado"), Some("SP"));
}

#[tokio::test]
async fn test_http_error_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(FORM_PATH))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .rg(&FilterParameters::new())
        .await
        .expect_err("server error");

    match err {
        GeneratorError::HttpStatus { status, url } => {
            assert_eq!(status, 500);
            assert!(url.ends_with(FORM_PATH));
        }
        other => panic!("expected HttpStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn test_missing_marker_is_parse_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(FORM_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("<div id=\"conta_corrente\">1-2</div>"),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .bank_account(&FilterParameters::new())
        .await
        .expect_err("incomplete markup");

    let GeneratorError::Parse { snippet, .. } = err else {
        panic!("expected parse error");
    };
    assert!(snippet.contains("conta_corrente"));
}

#[tokio::test]
async fn test_timeout_is_network_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("12.345.678-9")
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let config = ClientConfig {
        base_url: server.uri(),
        timeout_secs: 1,
        ..ClientConfig::default()
    };
    let client = GeneratorClient::from_config(&config).expect("create client");

    let err = client
        .rg(&FilterParameters::new())
        .await
        .expect_err("request should time out");
    assert!(matches!(err, GeneratorError::Network(_)));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    let config = ClientConfig {
        base_url: "http://127.0.0.1:1".to_string(),
        ..ClientConfig::default()
    };
    let client = GeneratorClient::from_config(&config).expect("create client");

    let err = client
        .cnh(&FilterParameters::new())
        .await
        .expect_err("nothing listens on port 1");
    assert!(matches!(err, GeneratorError::Network(_)));
}
