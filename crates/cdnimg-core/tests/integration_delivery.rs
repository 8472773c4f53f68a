//! Integration test: end-to-end URL delivery properties through the public API.
//!
//! Exercises the builder, composer, inspector and fallback cascade together
//! the way a display collaborator would.

use std::sync::Arc;

use cdnimg_core::config::CdnConfig;
use cdnimg_core::fallback::{advance, reset, CascadeEnv};
use cdnimg_core::{
    build_params, compose_url, extract_original_path, has_existing_transformation,
    validate_path, FallbackLevel, ImagePipeline, NetworkMonitor, NetworkQuality, PathError,
    TransformPreset, TrustedHosts,
};

const CATALOG: &str = "w=400,h=300,fit=cover,quality=auto";

fn hosts() -> TrustedHosts {
    TrustedHosts::new(["img.example"])
}

#[test]
fn composing_twice_never_nests_segments() {
    let hosts = hosts();
    let sources = [
        "https://img.example/animals/org/sample.jpg",
        "https://img.example/rescue_dogs/pets_in_turkey/melon_3889e35e.jpg",
        "https://img.example/a.jpg?v=1",
    ];
    let others = [
        "w=800,h=600,fit=contain,quality=auto",
        "w=200,h=200,fit=cover,quality=60",
        CATALOG,
    ];
    for source in sources {
        let once = compose_url(&hosts, source, CATALOG).unwrap();
        for other in others {
            let twice = compose_url(&hosts, &once, other).unwrap();
            assert_eq!(twice, once);
            assert_eq!(twice.matches("/cdn-cgi/image/").count(), 1);
        }
    }
}

#[test]
fn extract_inverts_compose() {
    let hosts = hosts();
    for source in [
        "https://img.example/animals/org/sample.jpg",
        "https://img.example/deep/a/b/c/d/e.webp",
        "https://img.example/single.png",
        "https://img.example/q.jpg?size=large",
        "https://IMG.example/a.jpg",
        "https://img.example:443/a.jpg",
        "https://img.example./a.jpg",
        "https://cdn.IMG.Example:8443/x/y.png#frag",
    ] {
        let composed = compose_url(&hosts, source, CATALOG).unwrap();
        assert!(has_existing_transformation(&composed));
        assert_eq!(extract_original_path(&composed), source);
    }
}

#[test]
fn traversal_is_rejected_everywhere() {
    for path in ["../secret.jpg", "./x.jpg", "folder/%2e%2e/secret.jpg"] {
        assert!(matches!(validate_path(path), Err(PathError::PathTraversal(_))));
    }
    let hosts = hosts();
    assert!(compose_url(&hosts, "https://img.example/folder/%2E%2E/secret.jpg", CATALOG).is_err());
}

#[test]
fn external_urls_pass_through() {
    assert_eq!(
        compose_url(&hosts(), "https://example.com/image.jpg", CATALOG).unwrap(),
        "https://example.com/image.jpg"
    );
}

#[test]
fn catalog_params_are_cache_key_stable() {
    let hosts = hosts();
    let a = compose_url(&hosts, "https://img.example/cats/a.jpg", &build_params(TransformPreset::Catalog, None, None)).unwrap();
    let b = compose_url(&hosts, "https://img.example/dogs/b.jpg", &build_params(TransformPreset::Catalog, None, None)).unwrap();
    let params = |url: &str| url.split('/').nth(5).map(str::to_string);
    assert_eq!(params(&a), params(&b));
    assert_eq!(params(&a).as_deref(), Some(CATALOG));
}

#[test]
fn cascade_is_monotonic_for_eligible_and_skips_for_external() {
    let env = CascadeEnv::new(hosts(), "/images/placeholder.svg");

    let source = "https://img.example/animals/org/sample.jpg";
    let mut level = reset(source);
    let mut visited = Vec::new();
    for _ in 0..4 {
        level = advance(&env, level, source).0;
        visited.push(level);
    }
    assert_eq!(
        visited,
        vec![
            FallbackLevel::Level1AlternateTransform,
            FallbackLevel::Level2DirectOriginal,
            FallbackLevel::Level3Placeholder,
            FallbackLevel::Level3Placeholder,
        ]
    );

    let external = "https://example.com/image.jpg";
    let (level, url) = advance(&env, reset(external), external);
    assert_eq!(level, FallbackLevel::Level3Placeholder);
    assert_eq!(url, "/images/placeholder.svg");
}

#[test]
fn pipeline_follows_network_changes() {
    let monitor = Arc::new(NetworkMonitor::new());
    let pipeline = ImagePipeline::from_config(&CdnConfig::default(), monitor.clone());
    let source = "https://img.example/pets/melon.jpg";

    assert_eq!(
        pipeline.url_for(source, TransformPreset::Catalog),
        "https://img.example/cdn-cgi/image/w=400,h=300,fit=cover,quality=auto/pets/melon.jpg"
    );

    monitor.set(NetworkQuality::Slow);
    let slow = pipeline.url_for(source, TransformPreset::Catalog);
    assert_eq!(
        slow,
        "https://img.example/cdn-cgi/image/w=400,h=300,fit=cover,quality=60/pets/melon.jpg"
    );

    // Rendering the already-transformed URL again keeps it as-is.
    assert_eq!(pipeline.url_for(&slow, TransformPreset::Hero), slow);
}
