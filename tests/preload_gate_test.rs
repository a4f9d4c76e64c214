use ai4u_catalog::{Catalog, HttpImageLoader, ImagePreloader, PreloadPhase, PreloadPlan};
use anyhow::Result;
use httpmock::prelude::*;
use std::time::Duration;
use tokio_test::assert_ok;
use url::Url;

fn image_mock<'a>(server: &'a MockServer, path: &str, status: u16) -> httpmock::Mock<'a> {
    let path = path.to_string();
    server.mock(move |when, then| {
        when.method(GET).path(path);
        then.status(status)
            .header("Content-Type", "image/webp")
            .body(vec![0u8; 64]);
    })
}

/// 失敗的圖片也算完成，閘門仍然會走到 Complete
#[tokio::test]
async fn test_http_preload_counts_failures_and_completes() -> Result<()> {
    let server = MockServer::start();
    let hero = image_mock(&server, "/images/hero.webp", 200);
    let logo = image_mock(&server, "/images/logo.svg", 200);
    let missing = image_mock(&server, "/images/missing.webp", 404);
    let team = image_mock(&server, "/images/team.webp", 200);

    let loader = HttpImageLoader::new(
        Some(Url::parse(&server.base_url())?),
        Some(Duration::from_secs(5)),
    )?;
    let preloader = ImagePreloader::new(loader);

    let plan = PreloadPlan {
        critical: vec!["/images/hero.webp".to_string(), "/images/logo.svg".to_string()],
        important: vec!["/images/missing.webp".to_string()],
        background: vec!["/images/team.webp".to_string()],
    };

    let mut handle = preloader.spawn(plan);
    let progress = handle.wait_for(PreloadPhase::Complete).await;
    assert_eq!(progress.phase, PreloadPhase::Complete);
    assert_eq!(progress.loaded_overall, 3);
    assert_eq!(progress.failed_overall, 1);

    let report = assert_ok!(handle.join().await);
    assert_eq!(report.failed, vec!["/images/missing.webp".to_string()]);

    hero.assert();
    logo.assert();
    missing.assert();
    team.assert();
    Ok(())
}

#[tokio::test]
async fn test_catalog_plan_against_server() -> Result<()> {
    let server = MockServer::start();
    let thumbnails = server.mock(|when, then| {
        when.method(GET).path_contains("/images/services/");
        then.status(200).body(vec![1u8; 16]);
    });

    let catalog = Catalog::builtin()?;
    let plan = PreloadPlan::from_services(&catalog);
    let expected = plan.total();

    let loader = HttpImageLoader::new(Some(Url::parse(&server.base_url())?), None)?;
    let report = ImagePreloader::new(loader).run(plan).await;

    assert_eq!(report.loaded, expected);
    assert!(report.failed.is_empty());
    thumbnails.assert_hits(expected);
    Ok(())
}

#[tokio::test]
async fn test_relative_paths_without_base_fail_but_complete() -> Result<()> {
    let loader = HttpImageLoader::new(None, None)?;
    let plan = PreloadPlan {
        critical: vec!["/images/a.webp".to_string()],
        ..PreloadPlan::default()
    };

    let report = ImagePreloader::new(loader).run(plan).await;
    assert_eq!(report.loaded, 0);
    assert_eq!(report.completed(), 1);
    Ok(())
}
