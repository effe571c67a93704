use resgen::{AssetCatalog, Error, ExtractOptions, KeyTable, StringsCatalog, read_catalogs};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

#[test]
fn test_base_file_wins_over_localized_file() {
    let temp_dir = TempDir::new().unwrap();
    write(
        temp_dir.path(),
        "en.lproj/Localizable.strings",
        r#""hello" = "Hi %@";"#,
    );
    write(
        temp_dir.path(),
        "base/Localizable.strings",
        r#""hello" = "Hello %@";"#,
    );

    let catalogs = read_catalogs(temp_dir.path(), &ExtractOptions::new()).unwrap();
    assert_eq!(catalogs.len(), 2);

    let table = KeyTable::from_catalogs(&catalogs);
    let hello = table.get("hello").unwrap();
    assert_eq!(hello.value, "Hello %@");
    assert_eq!(hello.argument_count, 1);
    assert!(hello.locale.is_base());
    assert!(hello.locale.is_none());

    // Same result when the localized catalog is folded in last.
    let reversed = KeyTable::from_catalogs(catalogs.iter().rev());
    assert_eq!(reversed.get("hello"), Some(hello));
}

#[test]
fn test_development_language_lproj_is_base() {
    let temp_dir = TempDir::new().unwrap();
    write(
        temp_dir.path(),
        "de.lproj/Localizable.strings",
        r#""title" = "Titel";"#,
    );
    write(
        temp_dir.path(),
        "en.lproj/Localizable.strings",
        r#""title" = "Title";"#,
    );

    let options = ExtractOptions::new().with_development_language(Some("en".to_string()));
    let catalogs = read_catalogs(temp_dir.path(), &options).unwrap();
    let table = KeyTable::from_catalogs(&catalogs);
    assert_eq!(table.get("title").unwrap().value, "Title");

    let without = read_catalogs(temp_dir.path(), &ExtractOptions::new()).unwrap();
    let table = KeyTable::from_catalogs(&without);
    assert_eq!(table.get("title").unwrap().value, "Titel");
}

#[test]
fn test_mixed_formats_and_ignored_files() {
    let temp_dir = TempDir::new().unwrap();
    write(
        temp_dir.path(),
        "Sources/Feature/en.lproj/Feature.strings",
        r#""feature.title" = "Feature";"#,
    );
    write(
        temp_dir.path(),
        "Sources/Localizable.xcstrings",
        r#"{
            "sourceLanguage": "en",
            "version": "1.0",
            "strings": {
                "items": {
                    "localizations": {
                        "en": {
                            "variations": {
                                "plural": {
                                    "one": { "stringUnit": { "state": "translated", "value": "%d item" } },
                                    "other": { "stringUnit": { "state": "translated", "value": "%d items" } }
                                }
                            }
                        }
                    }
                },
                "empty": {}
            }
        }"#,
    );
    write(temp_dir.path(), "Sources/notes.txt", "\"x\" = \"y\";");
    write(temp_dir.path(), "README.md", "# readme");

    let catalogs = read_catalogs(temp_dir.path(), &ExtractOptions::new()).unwrap();
    let names: Vec<_> = catalogs.iter().map(|c| c.filename.as_str()).collect();
    assert_eq!(names, ["Feature", "Localizable"]);

    let table = KeyTable::from_catalogs(&catalogs);
    let keys: Vec<_> = table.iter().map(|e| e.key.as_str()).collect();
    assert_eq!(keys, ["feature.title", "items", "items_one", "empty"]);
    assert_eq!(table.get("items").unwrap().value, "%d items");
    assert_eq!(table.get("items_one").unwrap().value, "%d item");
    assert_eq!(table.get("empty").unwrap().value, "");
}

#[test]
fn test_one_bad_structured_file_fails_directory() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "a/Good.strings", r#""ok" = "fine";"#);
    write(
        temp_dir.path(),
        "b/Broken.xcstrings",
        r#"{ "sourceLanguage": "en", "strings": {} }"#,
    );

    let err = read_catalogs(temp_dir.path(), &ExtractOptions::new()).unwrap_err();
    match err {
        Error::Decode { path, .. } => assert!(path.ends_with("b/Broken.xcstrings")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_malformed_legacy_lines_do_not_abort() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("Localizable.strings");
    fs::write(
        &path,
        "\"first\" = \"1\";\nthis is not a pair\n\"second\" = 2;\n\"third\" = \"3\";\n",
    )
    .unwrap();

    let catalog = StringsCatalog::read_file(&path, &ExtractOptions::new()).unwrap();
    let keys: Vec<_> = catalog.entries.iter().map(|e| e.key.as_str()).collect();
    assert_eq!(keys, ["first", "third"]);
}

#[test]
fn test_asset_catalog_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("Assets.xcassets");
    write(&root, "Contents.json", r#"{"info": {"author": "xcode", "version": 1}}"#);
    write(
        &root,
        "AccentColor.colorset/Contents.json",
        r#"{"colors": [{"idiom": "universal"}], "info": {"author": "xcode", "version": 1}}"#,
    );
    write(
        &root,
        "Icons/Contents.json",
        r#"{"info": {"author": "xcode", "version": 1}}"#,
    );
    write(
        &root,
        "Icons/settings.imageset/Contents.json",
        r#"{"images": [{"idiom": "universal", "filename": "settings.pdf"}]}"#,
    );

    let catalog = AssetCatalog::read_from(&root, &ExtractOptions::new()).unwrap();
    assert_eq!(catalog.filename, "Assets");
    assert_eq!(catalog.root.colors.len(), 1);
    assert!(catalog.root.images.is_empty());

    let icons = &catalog.root.subnamespaces["Icons"];
    assert_eq!(icons.images.len(), 1);
    assert_eq!(icons.images[0].path, vec!["Icons".to_string()]);

    let context = serde_json::to_value(catalog.context()).unwrap();
    assert_eq!(context["colors"][0]["name"], "AccentColor");
    assert_eq!(context["images"][0]["name"], "settings");
    assert_eq!(context["dataAssets"].as_array().unwrap().len(), 0);
}

#[test]
fn test_catalogs_from_two_targets_merge() {
    let temp_dir = TempDir::new().unwrap();
    write(
        temp_dir.path(),
        "App/Assets.xcassets/Icons/home.imageset/Contents.json",
        "{}",
    );
    write(
        temp_dir.path(),
        "Shared/Assets.xcassets/Icons/back.imageset/Contents.json",
        "{}",
    );
    write(
        temp_dir.path(),
        "Shared/Assets.xcassets/Brand.colorset/Contents.json",
        "{}",
    );

    let catalogs = AssetCatalog::read_all(temp_dir.path(), &ExtractOptions::new()).unwrap();
    assert_eq!(catalogs.len(), 2);

    let merged = AssetCatalog::merge_all(catalogs);
    let icons = &merged.subnamespaces["Icons"];
    let names: Vec<_> = icons.images.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, ["home", "back"]);
    assert_eq!(merged.colors.len(), 1);
}
