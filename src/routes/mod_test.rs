use super::*;

fn config(public_dir: Option<&str>) -> ServerConfig {
    ServerConfig { host: "127.0.0.1".to_owned(), port: 3000, public_dir: public_dir.map(PathBuf::from) }
}

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[test]
fn public_dir_defaults_to_site_root() {
    let dir = resolve_public_dir(&config(None), Path::new("target/site"));
    assert_eq!(dir, PathBuf::from("target/site"));
}

#[test]
fn public_dir_override_wins() {
    let dir = resolve_public_dir(&config(Some("/srv/public")), Path::new("target/site"));
    assert_eq!(dir, PathBuf::from("/srv/public"));
}
