use {
    super::sui_minter::SuiMinter,
    crate::{command_title, display::json_output, item, notify_success, notify_warning, prelude::*},
    blobmint_sdk::{
        walrus::{UploadResponse, WalrusClient},
        workflow::{Minter, UploadSession, UploadSummary, WorkflowError},
    },
};

/// Store the provided JSON file on Walrus and, unless `upload_only` is set,
/// mint an NFT whose URI points at the derived metadata.
pub(crate) async fn upload_file(
    file: Option<PathBuf>,
    upload_only: bool,
    gas: GasArgs,
) -> AnyResult<(), BlobmintCliError> {
    let Some(file) = file else {
        return Err(BlobmintCliError::Workflow(WorkflowError::NoFileSelected));
    };

    command_title!(
        "Uploading '{file}' to Walrus",
        file = file.display().to_string().truecolor(100, 100, 100)
    );

    let conf = CliConf::load().await.map_err(BlobmintCliError::Any)?;
    let walrus = walrus_client(&conf.walrus);

    if upload_only {
        let session = UploadSession::upload_only(walrus);

        return run_session(session, file).await;
    }

    let minter = SuiMinter::from_conf(&conf, gas).await?;

    run_session(UploadSession::new(walrus, minter), file).await
}

/// Build a Walrus client from the `[walrus]` conf section.
fn walrus_client(conf: &WalrusConf) -> WalrusClient {
    WalrusClient::builder()
        .with_publisher_url(&conf.publisher_url)
        .with_aggregator_url(&conf.aggregator_url)
        .with_epochs(conf.epochs)
        .with_send_object_to(conf.send_object_to.clone())
        .build()
}

async fn run_session<M: Minter>(
    mut session: UploadSession<M>,
    file: PathBuf,
) -> AnyResult<(), BlobmintCliError> {
    session.select_file(file);

    let result = session.upload().await;

    if !JSON_MODE.load(Ordering::Relaxed) {
        for entry in session.log().entries() {
            item!("{entry}");
        }
    }

    match result {
        Ok(summary) => {
            display_summary(&summary);

            json_output(&json!({
                "summary": summary,
                "log": session.log(),
            }))
        }
        Err(e) => {
            // Blobs stored before a failed mint are still worth reporting.
            if let (Some(metadata_blob), Some(uri)) = (session.metadata_result(), session.token_uri()) {
                notify_warning!(
                    "Metadata blob '{id}' was stored but not minted. URI: {uri}",
                    id = metadata_blob.blob_id()
                );
            }

            // The failure payload is printed once, by `main`.
            Err(BlobmintCliError::Workflow(e))
        }
    }
}

fn display_summary(summary: &UploadSummary) {
    match &summary.file_blob {
        UploadResponse::NewlyCreated(created) => {
            let blob = &created.blob_object;

            notify_success!(
                "Blob object: {id}",
                id = blob.id.truecolor(100, 100, 100)
            );
            item!("Blob ID: {}", blob.blob_id.truecolor(100, 100, 100));
            item!("Size: {} bytes", blob.size);
            item!("Stored until epoch {}", blob.storage.end_epoch);
        }
        UploadResponse::AlreadyCertified(certified) => {
            notify_warning!(
                "Blob '{id}' was already certified until epoch {epoch}",
                id = certified.blob_id.truecolor(100, 100, 100),
                epoch = certified.end_epoch
            );
        }
    }

    if let Some(uri) = &summary.token_uri {
        item!("Token URI: {}", uri.truecolor(100, 100, 100));
    }

    match &summary.receipt {
        // The digest is already part of the progress log.
        Some(_) => notify_success!("NFT minted"),
        None => notify_success!("File stored on Walrus"),
    }
}

#[cfg(test)]
mod tests {
    use {super::*, assert_matches::assert_matches};

    #[test]
    fn test_walrus_client_from_conf() {
        let conf = WalrusConf {
            publisher_url: "http://publisher.local/".to_string(),
            aggregator_url: "http://aggregator.local".to_string(),
            epochs: Some(3),
            send_object_to: None,
        };

        let walrus = walrus_client(&conf);

        assert_eq!(walrus.publisher_url(), "http://publisher.local");
        assert_eq!(walrus.blob_url("abc"), "http://aggregator.local/v1/abc");
    }

    #[tokio::test]
    async fn test_upload_without_file() {
        let gas = GasArgs {
            sui_gas_coin: None,
            sui_gas_budget: 1000,
        };

        let result = upload_file(None, true, gas).await;

        assert_matches!(
            result,
            Err(BlobmintCliError::Workflow(WorkflowError::NoFileSelected))
        );
    }

    #[tokio::test]
    async fn test_upload_only_session_stores_file() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("PUT", "/v1/store")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "alreadyCertified": {
                        "blobId": "blob-1",
                        "eventOrObject": { "Object": "0x1" },
                        "endEpoch": 42
                    }
                })
                .to_string(),
            )
            .expect(1)
            .create_async()
            .await;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reaction.json");

        tokio::fs::write(&path, r#"{"reaction":{"name":"wow"}}"#)
            .await
            .unwrap();

        let walrus = WalrusClient::builder()
            .with_publisher_url(&server.url())
            .with_aggregator_url(&server.url())
            .build();

        let result = run_session(UploadSession::upload_only(walrus), path).await;

        assert_matches!(result, Ok(()));

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_upload_only_session_reports_failure() {
        let mut server = mockito::Server::new_async().await;

        server
            .mock("PUT", "/v1/store")
            .with_status(500)
            .with_body("boom")
            .create_async()
            .await;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reaction.json");

        tokio::fs::write(&path, "{}").await.unwrap();

        let walrus = WalrusClient::builder()
            .with_publisher_url(&server.url())
            .build();

        let result = run_session(UploadSession::upload_only(walrus), path).await;

        assert_matches!(
            result,
            Err(BlobmintCliError::Workflow(WorkflowError::Upload(_)))
        );
    }
}
