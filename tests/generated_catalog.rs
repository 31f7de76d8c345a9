//! End-to-end checks on the generated file catalog, run against a fake
//! bootstrap skeleton so no external toolchain is needed.

use std::fs;
use std::path::Path;

use sprout::{ProjectRoot, Scaffold, Variant};
use tempfile::TempDir;

fn bootstrap_skeleton(base: &Path, name: &str) {
    let root = base.join(name);
    fs::create_dir_all(root.join("src/assets")).unwrap();
    fs::write(root.join("index.html"), "<title>Vite + React</title>\n").unwrap();
    fs::write(root.join("vite.config.js"), "export default {}\n").unwrap();
    fs::write(root.join("src/App.jsx"), "// vite default counter\n").unwrap();
    fs::write(root.join("src/App.css"), "#root {}\n").unwrap();
    fs::write(root.join("src/index.css"), ":root {}\n").unwrap();
    fs::write(root.join("src/main.jsx"), "// vite default entry\n").unwrap();
    fs::write(root.join("src/assets/react.svg"), "<svg/>").unwrap();
    fs::write(root.join("README.md"), "# React + Vite\n").unwrap();
}

fn read(base: &Path, name: &str, rel: &str) -> String {
    fs::read_to_string(base.join(name).join(rel)).unwrap()
}

#[test]
fn base_variant_writes_complete_catalog() {
    let tmp = TempDir::new().unwrap();
    bootstrap_skeleton(tmp.path(), "my-app");

    let root = ProjectRoot::resolve(tmp.path(), "my-app").unwrap();
    Scaffold::new(tmp.path(), Variant::Base)
        .write_project_files(&root, "my-app")
        .unwrap();

    // Title derives from the project name, hyphens as spaces
    assert!(read(tmp.path(), "my-app", "index.html").contains("<title>my app</title>"));

    // Port pinned regardless of name
    assert!(read(tmp.path(), "my-app", "vite.config.js").contains("port: 3000"));

    // README interpolates the name in the base variant
    assert_eq!(read(tmp.path(), "my-app", "README.md"), "# my-app\n");

    // Obsolete stylesheet removed, store created
    assert!(!tmp.path().join("my-app/src/App.css").exists());
    assert!(read(tmp.path(), "my-app", "src/store.js").contains("configureStore"));

    // Every catalog write fully replaced the bootstrap defaults
    assert!(!read(tmp.path(), "my-app", "src/App.jsx").contains("vite default"));
    assert!(!read(tmp.path(), "my-app", "src/main.jsx").contains("vite default"));
    assert!(!read(tmp.path(), "my-app", "README.md").contains("React + Vite"));
}

#[test]
fn port_is_constant_across_project_names() {
    for name in ["my-app", "something-else", "x"] {
        let tmp = TempDir::new().unwrap();
        bootstrap_skeleton(tmp.path(), name);
        let root = ProjectRoot::resolve(tmp.path(), name).unwrap();
        Scaffold::new(tmp.path(), Variant::Base)
            .write_project_files(&root, name)
            .unwrap();
        assert!(read(tmp.path(), name, "vite.config.js").contains("port: 3000"));
    }
}

#[test]
fn full_variant_router_and_placeholders() {
    let tmp = TempDir::new().unwrap();
    bootstrap_skeleton(tmp.path(), "my-app");

    let root = ProjectRoot::resolve(tmp.path(), "my-app").unwrap();
    Scaffold::new(tmp.path(), Variant::Full)
        .write_project_files(&root, "my-app")
        .unwrap();

    // Exactly two routes: index and wildcard catch-all
    let app = read(tmp.path(), "my-app", "src/App.jsx");
    assert_eq!(app.matches("<Route ").count(), 2);
    assert!(app.contains("Route index"));
    assert!(app.contains(r#"path="*""#));

    // Placeholder tree under dedicated subdirectories
    for rel in [
        "src/pages/Home.jsx",
        "src/pages/NotFound.jsx",
        "src/layouts/MainLayout.jsx",
        "src/components/Navbar.jsx",
        "src/components/Footer.jsx",
    ] {
        assert!(tmp.path().join("my-app").join(rel).is_file(), "missing {rel}");
    }

    // Sample icon deleted, README is the fixed placeholder
    assert!(!tmp.path().join("my-app/src/assets/react.svg").exists());
    assert_eq!(read(tmp.path(), "my-app", "README.md"), "# React App\n");
}

#[test]
fn best_effort_deletes_tolerate_absence() {
    // Skeleton with neither App.css nor the sample icon
    let tmp = TempDir::new().unwrap();
    fs::create_dir_all(tmp.path().join("my-app/src")).unwrap();

    let root = ProjectRoot::resolve(tmp.path(), "my-app").unwrap();
    Scaffold::new(tmp.path(), Variant::Full)
        .write_project_files(&root, "my-app")
        .unwrap();

    assert!(tmp.path().join("my-app/index.html").exists());
}

#[test]
fn resolve_fails_when_bootstrap_did_not_run() {
    let tmp = TempDir::new().unwrap();
    let err = ProjectRoot::resolve(tmp.path(), "my-app").unwrap_err();
    assert!(matches!(err, sprout::ScaffoldError::Filesystem { .. }));
}
