use std::net::SocketAddr;

use configs::{AppConfig, DatabaseConfig};
use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;

struct TestApp {
    base_url: String,
}

/// Full stack over a migrated in-memory SQLite database on an ephemeral port.
async fn start_server() -> anyhow::Result<TestApp> {
    let cfg = AppConfig { database: DatabaseConfig::in_memory(), ..AppConfig::default() };
    let app = server::startup::build_app(&cfg).await?;

    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

#[tokio::test]
async fn e2e_employee_crud_over_http() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();
    let url = format!("{}/api/employees", app.base_url);

    let res = c.get(&url).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<Value>().await?, json!([]));

    let john = json!({"firstName": "John", "secondName": "Willick", "email": "johnwillick@johnwillick.com"});
    let res = c.post(&url).json(&john).send().await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let created = res.json::<Value>().await?;
    let id = created["id"].as_i64().expect("id");
    assert!(id > 0);

    let res = c.post(&url).json(&john).send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    let err = res.json::<Value>().await?;
    assert_eq!(err["message"], "Employee with email : 'johnwillick@johnwillick.com' already exists");

    let res = c
        .put(&url)
        .json(&json!({"id": id, "firstName": "John", "secondName": "Wick", "email": "wick@continental.com"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<Value>().await?["secondName"], "Wick");

    let res = c.delete(format!("{url}/{id}")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert!(res.bytes().await?.is_empty());

    let res = c.get(format!("{url}/{id}")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    assert_eq!(res.json::<Value>().await?["message"], format!("Employee not found with id : '{id}'"));
    Ok(())
}
