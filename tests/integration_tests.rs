use anyhow::Result;
use httpmock::prelude::*;
use tempfile::TempDir;
use trellocard::{CardEngine, TrelloCardError, TrelloClient};

fn write_config(dir: &TempDir, name: &str, content: &str) -> Result<std::path::PathBuf> {
    let path = dir.path().join(name);
    std::fs::write(&path, content)?;
    Ok(path)
}

#[tokio::test]
async fn test_end_to_end_creates_card() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = write_config(
        &temp_dir,
        "trellocard.conf",
        r#"{"board_id":"b1","api_key":"k","token":"t","list_name":"Inbox"}"#,
    )?;

    let server = MockServer::start();
    let board_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/boards/b1")
            .query_param("lists", "open")
            .query_param("key", "k")
            .query_param("token", "t");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"lists": [{"id": "L9", "name": "Inbox"}]}));
    });
    let card_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/cards")
            .x_www_form_urlencoded_tuple("name", "Ship release notes")
            .x_www_form_urlencoded_tuple("pos", "bottom")
            .x_www_form_urlencoded_tuple("idList", "L9");
        then.status(200).json_body(serde_json::json!({"id": "c1"}));
    });

    let engine = CardEngine::new(TrelloClient::with_base_url(&server.base_url())?);
    let created = engine
        .run_from_file(&config_path, "Ship release notes")
        .await?;

    board_mock.assert();
    card_mock.assert();
    assert_eq!(created.list_id, "L9");

    // main 成功時寫到 stdout 的內容
    let mut stdout = Vec::new();
    created.write_confirmation(&mut stdout)?;
    assert_eq!(String::from_utf8(stdout)?, "Created Ship release notes\n");
    Ok(())
}

#[tokio::test]
async fn test_end_to_end_with_toml_config() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = write_config(
        &temp_dir,
        "board.toml",
        "board_id = \"b2\"\napi_key = \"k\"\ntoken = \"t\"\nlist_name = \"Done\"\n",
    )?;

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/boards/b2");
        then.status(200).json_body(serde_json::json!({
            "lists": [{"id": "A", "name": "Todo"}, {"id": "B", "name": "Done"}]
        }));
    });
    let card_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/cards")
            .x_www_form_urlencoded_tuple("idList", "B");
        then.status(200);
    });

    let engine = CardEngine::new(TrelloClient::with_base_url(&server.base_url())?);
    let created = engine.run_from_file(&config_path, "Archive sprint").await?;

    card_mock.assert();
    assert_eq!(created.list_id, "B");
    Ok(())
}

#[tokio::test]
async fn test_list_not_found_creates_nothing() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = write_config(
        &temp_dir,
        "trellocard.conf",
        r#"{"board_id":"b1","api_key":"k","token":"t","list_name":"Backlog"}"#,
    )?;

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/boards/b1");
        then.status(200).json_body(serde_json::json!({
            "lists": [{"id": "A", "name": "Todo"}, {"id": "B", "name": "Done"}]
        }));
    });
    let card_mock = server.mock(|when, then| {
        when.method(POST).path("/cards");
        then.status(200);
    });

    let engine = CardEngine::new(TrelloClient::with_base_url(&server.base_url())?);
    let result = engine.run_from_file(&config_path, "Never created").await;

    assert!(matches!(result, Err(TrelloCardError::ListNotFoundError { .. })));
    card_mock.assert_hits(0);
    Ok(())
}

#[tokio::test]
async fn test_rejected_card_reports_status() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = write_config(
        &temp_dir,
        "trellocard.conf",
        r#"{"board_id":"b1","api_key":"k","token":"t","list_name":"Inbox"}"#,
    )?;

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/boards/b1");
        then.status(200)
            .json_body(serde_json::json!({"lists": [{"id": "L9", "name": "Inbox"}]}));
    });
    let card_mock = server.mock(|when, then| {
        when.method(POST).path("/cards");
        then.status(401).body("invalid token");
    });

    let engine = CardEngine::new(TrelloClient::with_base_url(&server.base_url())?);
    let err = engine
        .run_from_file(&config_path, "Rejected card")
        .await
        .unwrap_err();

    card_mock.assert_hits(1);
    assert!(err.to_string().contains("401"));
    Ok(())
}

#[tokio::test]
async fn test_missing_config_field_makes_no_requests() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = write_config(
        &temp_dir,
        "trellocard.conf",
        r#"{"board_id":"b1","token":"t","list_name":"Inbox"}"#,
    )?;

    let server = MockServer::start();
    let board_mock = server.mock(|when, then| {
        when.method(GET).path("/boards/b1");
        then.status(200);
    });

    let engine = CardEngine::new(TrelloClient::with_base_url(&server.base_url())?);
    let err = engine
        .run_from_file(&config_path, "Any card")
        .await
        .unwrap_err();

    board_mock.assert_hits(0);
    assert_eq!(err.to_string(), "configuration requires `api_key` to be defined");
    Ok(())
}

#[tokio::test]
async fn test_list_name_with_placeholder_matches_verbatim() -> Result<()> {
    std::env::set_var("TRELLOCARD_IT_SPRINT", "42");

    let temp_dir = TempDir::new()?;
    let config_path = write_config(
        &temp_dir,
        "trellocard.conf",
        r#"{"board_id":"b1","api_key":"k","token":"t","list_name":"Sprint ${TRELLOCARD_IT_SPRINT}"}"#,
    )?;

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/boards/b1");
        then.status(200).json_body(serde_json::json!({
            "lists": [
                {"id": "S42", "name": "Sprint 42"},
                {"id": "SX", "name": "Sprint ${TRELLOCARD_IT_SPRINT}"}
            ]
        }));
    });
    let card_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/cards")
            .x_www_form_urlencoded_tuple("idList", "SX");
        then.status(200);
    });

    let engine = CardEngine::new(TrelloClient::with_base_url(&server.base_url())?);
    let created = engine.run_from_file(&config_path, "Plan sprint").await?;

    std::env::remove_var("TRELLOCARD_IT_SPRINT");
    card_mock.assert();
    assert_eq!(created.list_id, "SX");
    Ok(())
}
