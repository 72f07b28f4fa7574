use anyhow::Result;
use chrono::NaiveDate;
use httpmock::prelude::*;
use portfolio_page::core::form::{ContactForm, ContactSubmission};
use portfolio_page::core::renderer::{IMAGE_PLACEHOLDER, RESUME_PLACEHOLDER};
use portfolio_page::core::timeline::TimelineChart;
use portfolio_page::core::ContentProvider;
use portfolio_page::{
    HttpAnimationSource, LocalAssets, PageEngine, PageRenderer, RenderOptions, SectionKind,
    SiteConfig,
};
use tempfile::TempDir;

const PNG_HEADER: &[u8] = &[0x89, b'P', b'N', b'G'];

fn site_toml(animation_url: Option<&str>) -> String {
    let animations = animation_url
        .map(|url| {
            format!(
                "[[animations]]\nslot = \"hero\"\nurl = \"{}\"\nheight = 250\n",
                url
            )
        })
        .unwrap_or_default();

    format!(
        r#"
[site]
title = "Devanshi Pandya | Data Scientist"

[profile]
name = "Devanshi Pandya"
headline = "Data Scientist"
location = "NYC, New York"
email = "devanshi@example.com"
skills = ["Python", "SQL"]

[[projects]]
title = "Customer Churn Predictor"
tags = ["XGBoost"]
description = "Predicts customer risk."
link = "https://github.com/devanshi4/Churn-Prediction"

[[experience]]
role = "M.S. Electrical Engineering"
organization = "USC"
start = "2021-08-01"
end = "2023-05-30"
category = "Education"

[[experience]]
role = "Data Analyst"
organization = "Brillio"
start = "2023-09-01"
end = "2024-07-31"
category = "Past"
highlights = ["Predictive models for marketing trends"]

[assets]
resume = "resume.pdf"
resume_download_name = "Devanshi_Resume.pdf"
profile_image = "profile_pic.png"

{}
[contact]
relay_endpoint = "https://formsubmit.co/devanshi@example.com"
"#,
        animations
    )
}

fn options(tab: usize) -> RenderOptions {
    RenderOptions {
        selected_tab: tab,
        today: NaiveDate::from_ymd_opt(2025, 6, 1),
    }
}

fn engine(dir: &TempDir) -> PageEngine<LocalAssets, HttpAnimationSource> {
    PageEngine::new(
        LocalAssets::new(dir.path()),
        HttpAnimationSource::default(),
        PageRenderer::default(),
    )
}

/// 測試資源存在時以 data URI 嵌入
#[tokio::test]
async fn test_assets_are_embedded_when_present() -> Result<()> {
    let temp_dir = TempDir::new()?;
    tokio::fs::write(temp_dir.path().join("profile_pic.png"), PNG_HEADER).await?;
    tokio::fs::write(temp_dir.path().join("resume.pdf"), b"%PDF-1.4").await?;

    let config = SiteConfig::from_toml_str(&site_toml(None))?;
    let rendered = engine(&temp_dir).render(&config, &options(0)).await;

    assert!(rendered.html.contains("src=\"data:image/png;base64,iVBORw==\""));
    assert!(rendered
        .html
        .contains("href=\"data:application/octet-stream;base64,JVBERi0xLjQ=\" download=\"Devanshi_Resume.pdf\""));
    assert!(!rendered.html.contains(IMAGE_PLACEHOLDER));
    assert!(!rendered.html.contains(RESUME_PLACEHOLDER));

    Ok(())
}

/// 測試缺少頭像時顯示佔位文字，其餘區塊照常輸出
#[tokio::test]
async fn test_missing_image_renders_placeholder() -> Result<()> {
    let temp_dir = TempDir::new()?;
    tokio::fs::write(temp_dir.path().join("resume.pdf"), b"%PDF-1.4").await?;

    let config = SiteConfig::from_toml_str(&site_toml(None))?;
    let rendered = engine(&temp_dir).render(&config, &options(0)).await;

    assert!(rendered.html.contains(IMAGE_PLACEHOLDER));
    assert!(!rendered.html.contains("data:image/png"));
    assert!(rendered.html.contains("download=\"Devanshi_Resume.pdf\""));
    assert_eq!(rendered.page.sections.len(), SectionKind::ORDER.len());
    assert!(rendered.html.contains("id=\"contact\""));

    Ok(())
}

/// 測試缺少履歷時不產生下載按鈕
#[tokio::test]
async fn test_missing_resume_renders_placeholder() -> Result<()> {
    let temp_dir = TempDir::new()?;
    tokio::fs::write(temp_dir.path().join("profile_pic.png"), PNG_HEADER).await?;

    let config = SiteConfig::from_toml_str(&site_toml(None))?;
    let rendered = engine(&temp_dir).render(&config, &options(0)).await;

    assert!(rendered.html.contains(RESUME_PLACEHOLDER));
    assert!(!rendered.html.contains("download=\""));
    assert!(rendered.html.contains("data:image/png;base64,"));

    Ok(())
}

/// 測試動畫取得成功時嵌入 hero 區塊
#[tokio::test]
async fn test_animation_embedded_on_success() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/hero.json");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(serde_json::json!({ "v": "5.7.4", "layers": [] }));
    });

    let config = SiteConfig::from_toml_str(&site_toml(Some(&server.url("/hero.json"))))?;
    let rendered = engine(&temp_dir).render(&config, &options(0)).await;

    mock.assert();
    let hero = rendered.page.section(SectionKind::Hero).unwrap();
    assert!(hero.has_block("animation"));
    assert!(rendered.html.contains("style=\"height: 250px\""));
    assert!(rendered.html.contains("\"layers\":[]"));
    assert!(rendered.html.contains("lottie.min.js"));

    Ok(())
}

/// 測試動畫取得失敗（404、500、連線錯誤）時僅省略該區塊
#[tokio::test]
async fn test_failed_animation_omits_slot_only() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/missing.json");
        then.status(404);
    });
    server.mock(|when, then| {
        when.method(GET).path("/broken.json");
        then.status(500).body("internal error");
    });
    server.mock(|when, then| {
        when.method(GET).path("/not-json");
        then.status(200).body("<html>not an animation</html>");
    });

    let engine = engine(&temp_dir);
    let baseline_config = SiteConfig::from_toml_str(&site_toml(None))?;
    let baseline = engine.render(&baseline_config, &options(0)).await;

    let urls = [
        server.url("/missing.json"),
        server.url("/broken.json"),
        server.url("/not-json"),
        "http://127.0.0.1:1/unreachable.json".to_string(),
    ];
    for url in urls {
        let config = SiteConfig::from_toml_str(&site_toml(Some(&url)))?;
        let rendered = engine.render(&config, &options(0)).await;

        assert!(
            !rendered.page.section(SectionKind::Hero).unwrap().has_block("animation"),
            "animation slot should be omitted for {}",
            url
        );
        assert_eq!(rendered.page, baseline.page, "page differs for {}", url);
        assert_eq!(rendered.html, baseline.html);
    }

    Ok(())
}

/// 測試時間軸依資料順序由上而下排列
#[tokio::test]
async fn test_timeline_rows_follow_source_order() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config = SiteConfig::from_toml_str(&site_toml(None))?;
    let rendered = engine(&temp_dir).render(&config, &options(0)).await;

    let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
    let chart = TimelineChart::from_experience(config.experience(), today);
    assert_eq!(chart.row_labels(), vec!["USC", "Brillio"]);
    assert!(chart.row_y(0) < chart.row_y(1));

    let usc = rendered.html.find(">USC</text>").unwrap();
    let brillio = rendered.html.find(">Brillio</text>").unwrap();
    assert!(usc < brillio);
    assert!(rendered
        .html
        .contains("<title>USC: M.S. Electrical Engineering (Aug 2021 - May 2023)</title>"));

    Ok(())
}

/// 測試分頁選擇：只顯示被選中的面板
#[tokio::test]
async fn test_selected_tab_is_the_only_visible_panel() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config = SiteConfig::from_toml_str(&site_toml(None))?;
    let engine = engine(&temp_dir);

    let first = engine.render(&config, &options(0)).await;
    assert!(first.html.contains("id=\"pf-experience-tabs-panel-0\""));
    assert_eq!(first.html.matches("aria-selected=\"true\">").count(), 1);

    let second = engine.render(&config, &options(1)).await;
    assert_eq!(second.html.matches("aria-selected=\"true\">").count(), 1);
    assert!(second.html.contains("Predictive models for marketing trends"));
    assert_ne!(first.html, second.html);

    // 超出範圍時夾到最後一個分頁
    let clamped = engine.render(&config, &options(99)).await;
    assert_eq!(clamped.html, second.html);

    Ok(())
}

/// 測試相同輸入重複渲染結果一致
#[tokio::test]
async fn test_rerender_is_stable() -> Result<()> {
    let temp_dir = TempDir::new()?;
    tokio::fs::write(temp_dir.path().join("profile_pic.png"), PNG_HEADER).await?;
    let config = SiteConfig::from_toml_str(&site_toml(None))?;
    let engine = engine(&temp_dir);

    let first = engine.render(&config, &options(1)).await;
    let second = engine.render(&config, &options(1)).await;
    assert_eq!(first.page, second.page);
    assert_eq!(first.html, second.html);

    // 每次渲染重新讀取資源
    tokio::fs::remove_file(temp_dir.path().join("profile_pic.png")).await?;
    let third = engine.render(&config, &options(1)).await;
    assert!(third.html.contains(IMAGE_PLACEHOLDER));

    Ok(())
}

/// 測試聯絡表單送出至設定的轉寄端點
#[tokio::test]
async fn test_contact_form_posts_to_relay() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config = SiteConfig::from_toml_str(&site_toml(None))?;
    let rendered = engine(&temp_dir).render(&config, &options(0)).await;

    assert!(rendered
        .html
        .contains("action=\"https://formsubmit.co/devanshi@example.com\" method=\"POST\""));
    assert!(rendered.html.contains("type=\"email\""));
    assert!(rendered.html.contains("<textarea"));

    let form = ContactForm::from_settings(config.contact());
    let submission = ContactSubmission {
        name: "Jane".to_string(),
        email: "jane@x.com".to_string(),
        message: "Hi".to_string(),
    };
    assert_eq!(form.encode(&submission), "name=Jane&email=jane%40x.com&message=Hi");

    Ok(())
}

/// 測試從檔案載入時資源路徑相對於設定檔目錄
#[tokio::test]
async fn test_config_file_resolves_assets_relative_to_itself() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("portfolio.toml");
    tokio::fs::write(&config_path, site_toml(None)).await?;
    tokio::fs::write(temp_dir.path().join("resume.pdf"), b"%PDF-1.4").await?;

    let config = SiteConfig::from_file(&config_path)?;
    assert_eq!(config.base_dir, temp_dir.path());

    let engine = PageEngine::new(
        LocalAssets::new(config.base_dir.clone()),
        HttpAnimationSource::default(),
        PageRenderer::new(config.style.clone()),
    );
    let resources = engine.gather(&config).await;
    assert!(resources.resume.is_some());
    assert!(resources.profile_image.is_none());

    Ok(())
}
